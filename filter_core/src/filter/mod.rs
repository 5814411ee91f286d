//! Filter configuration and the capability concrete filters supply

mod condition;
mod config;
mod filter_errors;
mod kind;

pub use condition::Condition;
pub use config::{DEFAULT_FIELD_TYPE, DynFilterConfig, FilterConfig};
pub use filter_errors::FilterError;
pub use kind::FilterKind;
