use std::fmt;

use crate::OptionBag;

/// The capability every concrete filter supplies.
///
/// Defaults returned here are merged above the base defaults and below the
/// options a caller passes to [`FilterConfig::initialize`](super::FilterConfig::initialize).
pub trait FilterKind: fmt::Debug {
    /// Identifier the kind is registered under (e.g. `"string"`)
    fn name(&self) -> &str;

    /// Option defaults declared by this kind
    fn default_options(&self) -> OptionBag;
}

impl<K: FilterKind + ?Sized> FilterKind for Box<K> {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn default_options(&self) -> OptionBag {
        (**self).default_options()
    }
}
