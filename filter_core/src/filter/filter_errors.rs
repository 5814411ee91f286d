//! Error types for filter configuration

use std::fmt;

/// Errors that can occur while configuring or registering filters
#[derive(Debug, Clone, PartialEq)]
pub enum FilterError {
    /// A required option was read before being set
    MissingRequiredOption { option: String, filter: String },
    /// No constructor is registered for the filter kind
    UnknownFilterKind(String),
    /// A filter with the same name is already in the list
    DuplicateFilter(String),
    /// Another filter in the list flattens to the same form name
    DuplicateFormName { form_name: String, filter: String },
    /// The filter was never initialized with a name
    UnnamedFilter,
    /// The condition tag is neither AND nor OR
    InvalidCondition(String),
}

impl FilterError {
    pub fn missing_required_option(option: &str, filter: Option<&str>) -> Self {
        FilterError::MissingRequiredOption {
            option: option.to_string(),
            filter: filter.unwrap_or_default().to_string(),
        }
    }
}

impl fmt::Display for FilterError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FilterError::MissingRequiredOption { option, filter } => {
                write!(
                    f,
                    "The option `{}` must be set for field: `{}`",
                    option, filter
                )
            }
            FilterError::UnknownFilterKind(kind) => {
                write!(f, "No filter kind registered under '{}'", kind)
            }
            FilterError::DuplicateFilter(name) => {
                write!(f, "A filter named '{}' already exists", name)
            }
            FilterError::DuplicateFormName { form_name, filter } => {
                write!(
                    f,
                    "Filter '{}' uses form name '{}' which is already taken",
                    filter, form_name
                )
            }
            FilterError::UnnamedFilter => {
                write!(f, "Filter must be initialized with a name")
            }
            FilterError::InvalidCondition(condition) => {
                write!(
                    f,
                    "Unknown filter condition '{}'. Expected AND or OR",
                    condition
                )
            }
        }
    }
}

impl std::error::Error for FilterError {}
