//! The ordered registry owning a view's filters

use log::debug;

use crate::{FilterConfig, FilterError, FilterKind, Value};

/// Filters of one list view, in insertion order and unique by name
#[derive(Debug)]
pub struct FilterList<K: FilterKind = Box<dyn FilterKind>> {
    filters: Vec<FilterConfig<K>>,
}

impl<K: FilterKind> Default for FilterList<K> {
    fn default() -> Self {
        Self {
            filters: Vec::new(),
        }
    }
}

impl<K: FilterKind> FilterList<K> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an initialized filter. Names and form names must be unique
    /// within the list.
    pub fn add(&mut self, filter: FilterConfig<K>) -> Result<(), FilterError> {
        let name = filter.name().ok_or(FilterError::UnnamedFilter)?;
        if self.has(name) {
            return Err(FilterError::DuplicateFilter(name.to_string()));
        }

        let form_name = filter.form_name();
        if self.get_by_form_name(&form_name).is_some() {
            return Err(FilterError::DuplicateFormName {
                form_name,
                filter: name.to_string(),
            });
        }

        debug!("Adding filter '{}'", name);
        self.filters.push(filter);
        Ok(())
    }

    pub fn get(&self, name: &str) -> Option<&FilterConfig<K>> {
        self.filters.iter().find(|filter| filter.name() == Some(name))
    }

    pub fn get_mut(&mut self, name: &str) -> Option<&mut FilterConfig<K>> {
        self.filters
            .iter_mut()
            .find(|filter| filter.name() == Some(name))
    }

    /// Find a filter by its flattened form identifier
    pub fn get_by_form_name(&self, form_name: &str) -> Option<&FilterConfig<K>> {
        self.filters
            .iter()
            .find(|filter| filter.form_name() == form_name)
    }

    pub fn has(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    pub fn remove(&mut self, name: &str) -> Option<FilterConfig<K>> {
        let index = self
            .filters
            .iter()
            .position(|filter| filter.name() == Some(name))?;
        Some(self.filters.remove(index))
    }

    pub fn len(&self) -> usize {
        self.filters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.filters.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &FilterConfig<K>> {
        self.filters.iter()
    }

    /// Set filter values from submitted form data keyed by form name.
    ///
    /// Filters without an entry keep their current value.
    pub fn bind_values(&mut self, data: &serde_json::Map<String, Value>) {
        for filter in &mut self.filters {
            if let Some(value) = data.get(&filter.form_name()) {
                debug!(
                    "Binding value to filter '{}'",
                    filter.name().unwrap_or_default()
                );
                filter.set_value(value.clone());
            }
        }
    }

    /// Filters whose current value makes them active
    pub fn active(&self) -> impl Iterator<Item = &FilterConfig<K>> {
        self.filters.iter().filter(|filter| filter.is_active())
    }

    pub fn has_active(&self) -> bool {
        self.active().next().is_some()
    }
}

impl<'a, K: FilterKind> IntoIterator for &'a FilterList<K> {
    type Item = &'a FilterConfig<K>;
    type IntoIter = std::slice::Iter<'a, FilterConfig<K>>;

    fn into_iter(self) -> Self::IntoIter {
        self.filters.iter()
    }
}
