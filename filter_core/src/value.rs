//! The dynamic value model behind option bags and filter values.

pub use serde_json::Value;

/// Mapping of option keys to arbitrary values.
pub type OptionBag = serde_json::Map<String, Value>;

/// Reserved option keys.
pub mod keys {
    pub const SHOW_FILTER: &str = "show_filter";
    pub const ADVANCED_FILTER: &str = "advanced_filter";
    pub const FIELD_TYPE: &str = "field_type";
    pub const FIELD_OPTIONS: &str = "field_options";
    pub const LABEL: &str = "label";
    pub const FIELD_NAME: &str = "field_name";
    pub const FIELD_MAPPING: &str = "field_mapping";
    pub const ASSOCIATION_MAPPING: &str = "association_mapping";
    pub const PARENT_ASSOCIATION_MAPPINGS: &str = "parent_association_mappings";
    pub const TRANSLATION_DOMAIN: &str = "translation_domain";
}

/// Loose truthiness used to decide whether a required option is set.
///
/// `null`, `false`, zero, `""`, `"0"` and empty collections are falsy.
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty() && s != "0",
        Value::Array(items) => !items.is_empty(),
        Value::Object(map) => !map.is_empty(),
    }
}

/// Shallow merge of option layers. Later layers win on key conflicts.
pub fn merge_options<I>(layers: I) -> OptionBag
where
    I: IntoIterator<Item = OptionBag>,
{
    let mut merged = OptionBag::new();
    for layer in layers {
        for (key, value) in layer {
            merged.insert(key, value);
        }
    }
    merged
}
