//! Built-in filter kinds
//!
//! Each kind only declares its option defaults. Query building against a
//! persistence layer lives with the consumers of these filters.

mod boolean;
mod choice;
mod date_range;
mod model;
mod number;
mod string;

pub use boolean::BooleanFilter;
pub use choice::ChoiceFilter;
pub use date_range::DateRangeFilter;
pub use model::ModelFilter;
pub use number::NumberFilter;
pub use string::StringFilter;

use crate::{OptionBag, Value};

/// Build an option bag from literal pairs
fn defaults<const N: usize>(pairs: [(&str, Value); N]) -> OptionBag {
    pairs
        .into_iter()
        .map(|(key, value)| (key.to_string(), value))
        .collect()
}
