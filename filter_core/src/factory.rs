//! Creates filters from kind names

use std::collections::HashMap;

use log::debug;

use crate::kinds::{
    BooleanFilter, ChoiceFilter, DateRangeFilter, ModelFilter, NumberFilter, StringFilter,
};
use crate::{DynFilterConfig, FilterConfig, FilterError, FilterKind, OptionBag};

/// Constructs a fresh kind instance
pub type KindConstructor = fn() -> Box<dyn FilterKind>;

/// Registry of filter kinds by name
#[derive(Debug, Clone, Default)]
pub struct FilterFactory {
    constructors: HashMap<String, KindConstructor>,
}

impl FilterFactory {
    /// Create a factory without any registered kinds
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a factory knowing every built-in kind
    pub fn with_builtin_kinds() -> Self {
        let mut factory = Self::new();
        factory.register("string", || Box::new(StringFilter));
        factory.register("number", || Box::new(NumberFilter));
        factory.register("boolean", || Box::new(BooleanFilter));
        factory.register("choice", || Box::new(ChoiceFilter));
        factory.register("date_range", || Box::new(DateRangeFilter));
        factory.register("model", || Box::new(ModelFilter));
        factory
    }

    /// Register a constructor, replacing any previous one under the same name
    pub fn register(&mut self, kind: impl Into<String>, constructor: KindConstructor) {
        self.constructors.insert(kind.into(), constructor);
    }

    pub fn has_kind(&self, kind: &str) -> bool {
        self.constructors.contains_key(kind)
    }

    /// Registered kind names, sorted
    pub fn kinds(&self) -> Vec<&str> {
        let mut kinds: Vec<&str> = self.constructors.keys().map(String::as_str).collect();
        kinds.sort_unstable();
        kinds
    }

    /// Construct and initialize a filter of the named kind
    pub fn create(
        &self,
        name: impl Into<String>,
        kind: &str,
        options: OptionBag,
    ) -> Result<DynFilterConfig, FilterError> {
        let constructor = self
            .constructors
            .get(kind)
            .ok_or_else(|| FilterError::UnknownFilterKind(kind.to_string()))?;

        let name = name.into();
        debug!("Creating '{}' filter for '{}'", kind, name);

        Ok(FilterConfig::initialized(constructor(), name, options))
    }
}
