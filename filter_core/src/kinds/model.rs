use serde_json::json;

use super::defaults;
use crate::{FilterKind, OptionBag};

/// Selection of related records through an association.
///
/// Needs `association_mapping` to be set before it can build a query.
#[derive(Debug, Clone, Copy, Default)]
pub struct ModelFilter;

impl FilterKind for ModelFilter {
    fn name(&self) -> &str {
        "model"
    }

    fn default_options(&self) -> OptionBag {
        defaults([
            ("field_type", json!("entity")),
            ("mapping_type", json!(null)),
        ])
    }
}
