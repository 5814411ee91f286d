use serde_json::json;

use super::defaults;
use crate::{FilterKind, OptionBag};

/// Yes/no selection on a boolean property
#[derive(Debug, Clone, Copy, Default)]
pub struct BooleanFilter;

impl FilterKind for BooleanFilter {
    fn name(&self) -> &str {
        "boolean"
    }

    fn default_options(&self) -> OptionBag {
        defaults([
            ("field_type", json!("choice")),
            (
                "field_options",
                json!({
                    "required": false,
                    "choices": { "yes": 1, "no": 2 },
                }),
            ),
        ])
    }
}
