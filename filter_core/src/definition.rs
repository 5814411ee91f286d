//! Serializable filter definitions

use serde::{Deserialize, Serialize};

use crate::{
    Condition, DynFilterConfig, FilterError, FilterFactory, FilterList, OptionBag, Value,
};

/// Description of a single filter, as read from configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FilterDefinition {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub options: OptionBag,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub condition: Option<Condition>,
}

/// A set of filter definitions for one list view
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FilterDocument {
    #[serde(default)]
    pub filters: Vec<FilterDefinition>,
}

impl FilterDefinition {
    /// Create the filter with the factory, then apply the value and condition
    pub fn build(&self, factory: &FilterFactory) -> Result<DynFilterConfig, FilterError> {
        let mut filter = factory.create(self.name.clone(), &self.kind, self.options.clone())?;

        if let Some(value) = &self.value {
            filter.set_value(value.clone());
        }
        if let Some(condition) = self.condition {
            filter.set_condition(condition);
        }

        Ok(filter)
    }
}

impl FilterList {
    /// Build a list by creating every definition with the factory.
    ///
    /// Stops at the first definition that fails to build.
    pub fn from_definitions<'a, I>(
        factory: &FilterFactory,
        definitions: I,
    ) -> Result<Self, FilterError>
    where
        I: IntoIterator<Item = &'a FilterDefinition>,
    {
        let mut list = Self::new();

        for definition in definitions {
            list.add(definition.build(factory)?)?;
        }

        Ok(list)
    }
}
