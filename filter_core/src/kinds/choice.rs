use serde_json::json;

use super::defaults;
use crate::{FilterKind, OptionBag};

/// Selection among a fixed set of values
#[derive(Debug, Clone, Copy, Default)]
pub struct ChoiceFilter;

impl FilterKind for ChoiceFilter {
    fn name(&self) -> &str {
        "choice"
    }

    fn default_options(&self) -> OptionBag {
        defaults([
            ("field_type", json!("choice")),
            ("multiple", json!(false)),
        ])
    }
}
