use serde_json::json;

use super::defaults;
use crate::{FilterKind, OptionBag};

/// Start/end bounds on a date or datetime property
#[derive(Debug, Clone, Copy, Default)]
pub struct DateRangeFilter;

impl FilterKind for DateRangeFilter {
    fn name(&self) -> &str {
        "date_range"
    }

    fn default_options(&self) -> OptionBag {
        defaults([
            ("field_type", json!("date_range")),
            ("input_type", json!("datetime")),
        ])
    }
}
