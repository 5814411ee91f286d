//! Filter configuration objects for admin list and search views.
//!
//! A filter describes how one list field is queried, rendered as a form
//! element and considered active. This crate provides:
//! - The option bag and its merge rules
//! - `FilterConfig`, the shared state and accessors of every filter
//! - Built-in filter kinds and a factory to create them by name
//! - `FilterList`, the ordered registry owning a view's filters

pub mod definition;
pub mod factory;
pub mod filter;
pub mod kinds;
pub mod list;
pub mod value;

pub use definition::{FilterDefinition, FilterDocument};
pub use factory::FilterFactory;
pub use filter::*;
pub use list::FilterList;
pub use value::{OptionBag, Value, is_truthy, merge_options};
