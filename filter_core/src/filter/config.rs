//! Shared state and accessors of every filter

use log::{debug, warn};
use serde_json::json;

use super::{Condition, FilterError, FilterKind};
use crate::value::keys;
use crate::{OptionBag, Value, is_truthy, merge_options};

/// Form type used when a filter does not declare `field_type`
pub const DEFAULT_FIELD_TYPE: &str = "text";

/// A filter config holding a boxed kind, as produced by the factory
pub type DynFilterConfig = FilterConfig<Box<dyn FilterKind>>;

/// Describes how one list field is queried, rendered and validated.
///
/// Constructed with a kind, then initialized once with a name and caller
/// options. The value and condition are set per request by the consuming
/// form and query layers.
#[derive(Debug, Clone)]
pub struct FilterConfig<K: FilterKind> {
    kind: K,
    name: Option<String>,
    value: Option<Value>,
    options: OptionBag,
    condition: Option<Condition>,
}

impl<K: FilterKind> FilterConfig<K> {
    /// Create an uninitialized filter of the given kind
    pub fn new(kind: K) -> Self {
        Self {
            kind,
            name: None,
            value: None,
            options: OptionBag::new(),
            condition: None,
        }
    }

    /// Set the name and merge the option bag
    pub fn initialize(&mut self, name: impl Into<String>, options: OptionBag) {
        let name = name.into();
        debug!("Initializing '{}' filter: '{}'", self.kind.name(), name);

        self.name = Some(name);
        self.set_options(options);
    }

    /// Create and initialize a filter in one step
    pub fn initialized(kind: K, name: impl Into<String>, options: OptionBag) -> Self {
        let mut filter = Self::new(kind);
        filter.initialize(name, options);
        filter
    }

    pub fn kind(&self) -> &K {
        &self.kind
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// The name with every `.` replaced by `__`.
    ///
    /// Form binding cannot address dotted property paths, so nested field
    /// names are flattened into a single identifier.
    pub fn form_name(&self) -> String {
        self.name().unwrap_or_default().replace('.', "__")
    }

    /// The option under `name`, including options explicitly set to null
    pub fn get_option(&self, name: &str) -> Option<&Value> {
        self.options.get(name)
    }

    pub fn get_option_or<'a>(&'a self, name: &str, default: &'a Value) -> &'a Value {
        self.get_option(name).unwrap_or(default)
    }

    pub fn set_option(&mut self, name: impl Into<String>, value: Value) {
        self.options.insert(name.into(), value);
    }

    /// Form element type, `"text"` unless `field_type` holds a string
    pub fn field_type(&self) -> &str {
        self.get_option(keys::FIELD_TYPE)
            .and_then(Value::as_str)
            .unwrap_or(DEFAULT_FIELD_TYPE)
    }

    /// Options handed to the form element, `{"required": false}` when unset
    pub fn field_options(&self) -> Value {
        match self.get_option(keys::FIELD_OPTIONS) {
            Some(options) => options.clone(),
            None => json!({ "required": false }),
        }
    }

    /// A single entry of `field_options`.
    ///
    /// Returns `None` when `field_options` is unset, is not a mapping, or
    /// lacks the key. An entry explicitly set to null counts as unset.
    pub fn get_field_option(&self, name: &str) -> Option<&Value> {
        self.get_option(keys::FIELD_OPTIONS)
            .and_then(Value::as_object)
            .and_then(|field_options| field_options.get(name))
            .filter(|value| !value.is_null())
    }

    pub fn get_field_option_or<'a>(&'a self, name: &str, default: &'a Value) -> &'a Value {
        self.get_field_option(name).unwrap_or(default)
    }

    /// Set a single entry of `field_options`, creating the mapping if needed
    pub fn set_field_option(&mut self, name: impl Into<String>, value: Value) {
        let entry = self
            .options
            .entry(keys::FIELD_OPTIONS)
            .or_insert_with(|| Value::Object(OptionBag::new()));

        if !entry.is_object() {
            warn!(
                "Replacing non-mapping `field_options` of filter '{}'",
                self.name.as_deref().unwrap_or_default()
            );
            *entry = Value::Object(OptionBag::new());
        }

        if let Value::Object(field_options) = entry {
            field_options.insert(name.into(), value);
        }
    }

    pub fn label(&self) -> Option<&str> {
        self.get_option(keys::LABEL).and_then(Value::as_str)
    }

    pub fn set_label(&mut self, label: Option<String>) {
        let label = label.map(Value::String).unwrap_or(Value::Null);
        self.set_option(keys::LABEL, label);
    }

    /// Property the filter queries. Fails unless set to a non-empty string.
    pub fn field_name(&self) -> Result<&str, FilterError> {
        self.get_option(keys::FIELD_NAME)
            .filter(|value| is_truthy(value))
            .and_then(Value::as_str)
            .ok_or_else(|| FilterError::missing_required_option(keys::FIELD_NAME, self.name()))
    }

    /// Mappings of the associations leading to the filtered field
    pub fn parent_association_mappings(&self) -> &[Value] {
        self.get_option(keys::PARENT_ASSOCIATION_MAPPINGS)
            .and_then(Value::as_array)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    pub fn field_mapping(&self) -> Result<&Value, FilterError> {
        self.required_option(keys::FIELD_MAPPING)
    }

    pub fn association_mapping(&self) -> Result<&Value, FilterError> {
        self.required_option(keys::ASSOCIATION_MAPPING)
    }

    fn required_option(&self, option: &str) -> Result<&Value, FilterError> {
        self.get_option(option)
            .filter(|value| is_truthy(value))
            .ok_or_else(|| FilterError::missing_required_option(option, self.name()))
    }

    /// Reset the option bag.
    ///
    /// Base defaults are overlaid by the kind's defaults, which are overlaid
    /// by `options`.
    pub fn set_options(&mut self, options: OptionBag) {
        let mut base = OptionBag::new();
        base.insert(keys::SHOW_FILTER.to_string(), Value::Null);
        base.insert(keys::ADVANCED_FILTER.to_string(), Value::Bool(true));

        self.options = merge_options([base, self.kind.default_options(), options]);
        debug!(
            "Filter '{}' now has {} options",
            self.name.as_deref().unwrap_or_default(),
            self.options.len()
        );
    }

    pub fn options(&self) -> &OptionBag {
        &self.options
    }

    pub fn set_value(&mut self, value: Value) {
        self.value = Some(value);
    }

    pub fn value(&self) -> Option<&Value> {
        self.value.as_ref()
    }

    pub fn clear_value(&mut self) {
        self.value = None;
    }

    /// True when the value is a mapping whose `value` entry is neither
    /// `false` nor `""`. A null entry still counts as active.
    pub fn is_active(&self) -> bool {
        match self.value.as_ref().and_then(|value| value.get("value")) {
            Some(Value::Bool(false)) => false,
            Some(Value::String(s)) if s.is_empty() => false,
            Some(_) => true,
            None => false,
        }
    }

    pub fn set_condition(&mut self, condition: Condition) {
        self.condition = Some(condition);
    }

    pub fn condition(&self) -> Option<Condition> {
        self.condition
    }

    pub fn translation_domain(&self) -> Option<&str> {
        self.get_option(keys::TRANSLATION_DOMAIN)
            .and_then(Value::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    #[derive(Debug, Clone)]
    struct TestKind {
        defaults: Value,
    }

    impl TestKind {
        fn new(defaults: Value) -> Self {
            Self { defaults }
        }
    }

    impl FilterKind for TestKind {
        fn name(&self) -> &str {
            "test"
        }

        fn default_options(&self) -> OptionBag {
            self.defaults.as_object().cloned().unwrap_or_default()
        }
    }

    fn bag(value: Value) -> OptionBag {
        value.as_object().cloned().expect("Expected object")
    }

    fn filter(name: &str, options: Value) -> FilterConfig<TestKind> {
        FilterConfig::initialized(TestKind::new(json!({})), name, bag(options))
    }

    #[test]
    fn test_initialize_sets_name_and_base_defaults() {
        let filter = filter("title", json!({}));

        assert_eq!(filter.name(), Some("title"));
        assert_eq!(filter.get_option("show_filter"), Some(&Value::Null));
        assert_eq!(filter.get_option("advanced_filter"), Some(&json!(true)));
        assert_eq!(filter.options().len(), 2);
    }

    #[test]
    fn test_uninitialized_filter_has_no_name() {
        let filter = FilterConfig::new(TestKind::new(json!({})));

        assert_eq!(filter.name(), None);
        assert_eq!(filter.form_name(), "");
        assert!(filter.options().is_empty());
    }

    #[test]
    fn test_merge_precedence() {
        let kind = TestKind::new(json!({"advanced_filter": false, "format": "%s", "size": 1}));
        let filter = FilterConfig::initialized(
            kind,
            "title",
            bag(json!({"size": 2, "show_filter": true})),
        );

        assert_eq!(filter.get_option("show_filter"), Some(&json!(true)));
        assert_eq!(filter.get_option("advanced_filter"), Some(&json!(false)));
        assert_eq!(filter.get_option("format"), Some(&json!("%s")));
        assert_eq!(filter.get_option("size"), Some(&json!(2)));
    }

    #[test]
    fn test_set_options_reapplies_merge() {
        let mut filter = FilterConfig::initialized(
            TestKind::new(json!({"format": "%s"})),
            "title",
            bag(json!({"custom": 1})),
        );
        filter.set_option("extra", json!("x"));

        filter.set_options(bag(json!({"format": "%%%s%%"})));

        assert_eq!(filter.get_option("format"), Some(&json!("%%%s%%")));
        assert_eq!(filter.get_option("advanced_filter"), Some(&json!(true)));
        assert_eq!(filter.get_option("custom"), None);
        assert_eq!(filter.get_option("extra"), None);
    }

    #[test]
    fn test_form_name() {
        assert_eq!(filter("a.b.c", json!({})).form_name(), "a__b__c");
        assert_eq!(filter("title", json!({})).form_name(), "title");
        assert_eq!(filter("", json!({})).form_name(), "");
    }

    #[test]
    fn test_get_option_with_default() {
        let filter = filter("title", json!({"nothing": null}));
        let default = json!("fallback");

        assert_eq!(filter.get_option_or("missing", &default), &default);
        assert_eq!(filter.get_option_or("nothing", &default), &Value::Null);
    }

    #[test]
    fn test_set_option_overwrites() {
        let mut filter = filter("title", json!({"k": 1}));
        filter.set_option("k", json!(2));

        assert_eq!(filter.get_option_or("k", &json!(3)), &json!(2));
    }

    #[test]
    fn test_field_type_default_and_override() {
        assert_eq!(filter("title", json!({})).field_type(), DEFAULT_FIELD_TYPE);
        assert_eq!(
            filter("title", json!({"field_type": "choice"})).field_type(),
            "choice"
        );
        assert_eq!(
            filter("title", json!({"field_type": 5})).field_type(),
            DEFAULT_FIELD_TYPE
        );
    }

    #[test]
    fn test_field_options_default() {
        assert_eq!(
            filter("title", json!({})).field_options(),
            json!({"required": false})
        );
        assert_eq!(
            filter("title", json!({"field_options": {"attr": {}}})).field_options(),
            json!({"attr": {}})
        );
    }

    #[test]
    fn test_get_field_option() {
        let default = json!("d");

        let unset = filter("title", json!({}));
        assert_eq!(unset.get_field_option_or("x", &default), &default);

        let scalar = filter("title", json!({"field_options": "x"}));
        assert_eq!(scalar.get_field_option_or("x", &default), &default);

        let absent = filter("title", json!({"field_options": {"y": 1}}));
        assert_eq!(absent.get_field_option_or("x", &default), &default);

        let present = filter("title", json!({"field_options": {"x": 1}}));
        assert_eq!(present.get_field_option_or("x", &default), &json!(1));
    }

    #[test]
    fn test_get_field_option_null_entry_uses_default() {
        let default = json!("d");
        let filter = filter("title", json!({"field_options": {"x": null}}));

        assert_eq!(filter.get_field_option("x"), None);
        assert_eq!(filter.get_field_option_or("x", &default), &default);
    }

    #[test]
    fn test_set_field_option_creates_mapping() {
        let mut filter = filter("title", json!({}));
        filter.set_field_option("x", json!(5));

        assert_eq!(filter.get_field_option("x"), Some(&json!(5)));
        assert_eq!(filter.get_option("field_options"), Some(&json!({"x": 5})));
    }

    #[test]
    fn test_set_field_option_keeps_siblings() {
        let mut filter = filter("title", json!({"field_options": {"required": true}}));
        filter.set_field_option("x", json!(5));

        assert_eq!(filter.field_options(), json!({"required": true, "x": 5}));
    }

    #[test]
    fn test_set_field_option_replaces_non_mapping() {
        let mut filter = filter("title", json!({"field_options": 3}));
        filter.set_field_option("x", json!(5));

        assert_eq!(filter.field_options(), json!({"x": 5}));
    }

    #[test]
    fn test_label() {
        let mut filter = filter("title", json!({}));
        assert_eq!(filter.label(), None);

        filter.set_label(Some("Title".to_string()));
        assert_eq!(filter.label(), Some("Title"));

        filter.set_label(None);
        assert_eq!(filter.label(), None);
        assert_eq!(filter.get_option("label"), Some(&Value::Null));
    }

    #[test]
    fn test_field_name() {
        let filter = filter("author.name", json!({"field_name": "name"}));
        assert_eq!(filter.field_name(), Ok("name"));
    }

    #[test]
    fn test_field_name_missing() {
        for options in [json!({}), json!({"field_name": null}), json!({"field_name": ""})] {
            let filter = filter("author.name", options);

            let error = filter.field_name().unwrap_err();
            assert_matches!(
                &error,
                FilterError::MissingRequiredOption { option, filter }
                    if option == "field_name" && filter == "author.name"
            );
            assert!(error.to_string().contains("author.name"));
        }
    }

    #[test]
    fn test_field_mapping() {
        let mapping = json!({"type": "string", "fieldName": "title"});
        let filter = filter("title", json!({"field_mapping": mapping.clone()}));

        assert_eq!(filter.field_mapping(), Ok(&mapping));
    }

    #[test]
    fn test_required_mappings_missing() {
        let filter = filter("author", json!({"field_mapping": []}));

        let error = filter.field_mapping().unwrap_err();
        assert_matches!(
            &error,
            FilterError::MissingRequiredOption { option, .. } if option == "field_mapping"
        );
        assert!(error.to_string().contains("author"));

        let error = filter.association_mapping().unwrap_err();
        assert_matches!(
            &error,
            FilterError::MissingRequiredOption { option, .. } if option == "association_mapping"
        );
        assert!(error.to_string().contains("author"));
    }

    #[test]
    fn test_association_mapping() {
        let filter = filter("author", json!({"association_mapping": {"targetEntity": "User"}}));

        assert_eq!(
            filter.association_mapping(),
            Ok(&json!({"targetEntity": "User"}))
        );
    }

    #[test]
    fn test_parent_association_mappings() {
        assert!(filter("title", json!({})).parent_association_mappings().is_empty());

        let filter = filter(
            "author.name",
            json!({"parent_association_mappings": [{"fieldName": "author"}]}),
        );
        assert_eq!(
            filter.parent_association_mappings(),
            &[json!({"fieldName": "author"})]
        );
    }

    #[test]
    fn test_is_active() {
        let mut filter = filter("title", json!({}));
        assert!(!filter.is_active());

        filter.set_value(json!({"value": false}));
        assert!(!filter.is_active());

        filter.set_value(json!({"value": ""}));
        assert!(!filter.is_active());

        filter.set_value(json!({}));
        assert!(!filter.is_active());

        filter.set_value(json!({"type": 1}));
        assert!(!filter.is_active());

        filter.set_value(json!("value"));
        assert!(!filter.is_active());

        filter.set_value(json!({"value": 0}));
        assert!(filter.is_active());

        filter.set_value(json!({"value": 0.0}));
        assert!(filter.is_active());

        filter.set_value(json!({"value": null}));
        assert!(filter.is_active());

        filter.set_value(json!({"value": "foo", "type": 1}));
        assert!(filter.is_active());

        filter.clear_value();
        assert!(!filter.is_active());
        assert_eq!(filter.value(), None);
    }

    #[test]
    fn test_condition() {
        let mut filter = filter("title", json!({}));
        assert_eq!(filter.condition(), None);

        filter.set_condition(Condition::Or);
        assert_eq!(filter.condition(), Some(Condition::Or));
    }

    #[test]
    fn test_translation_domain() {
        assert_eq!(filter("title", json!({})).translation_domain(), None);
        assert_eq!(
            filter("title", json!({"translation_domain": "admin"})).translation_domain(),
            Some("admin")
        );
    }
}
