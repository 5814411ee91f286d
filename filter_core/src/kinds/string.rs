use serde_json::json;

use super::defaults;
use crate::{FilterKind, OptionBag};

/// Text matching on a string property
#[derive(Debug, Clone, Copy, Default)]
pub struct StringFilter;

impl FilterKind for StringFilter {
    fn name(&self) -> &str {
        "string"
    }

    fn default_options(&self) -> OptionBag {
        defaults([
            ("field_type", json!("text")),
            ("case_sensitive", json!(true)),
        ])
    }
}
