use serde_json::json;

use super::defaults;
use crate::{FilterKind, OptionBag};

/// Numeric comparison on a scalar property
#[derive(Debug, Clone, Copy, Default)]
pub struct NumberFilter;

impl FilterKind for NumberFilter {
    fn name(&self) -> &str {
        "number"
    }

    fn default_options(&self) -> OptionBag {
        defaults([("field_type", json!("number"))])
    }
}
