//! Error types for the fallible accessors.

use std::error::Error;
use std::fmt;

/// The requested key is not present in the map.
///
/// Returned by [`HamtMap::try_get`](crate::HamtMap::try_get). The primary
/// accessors report absence as `None`; this typed form exists for callers
/// that propagate absence with `?`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyNotFound;

impl fmt::Display for KeyNotFound {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("key not found")
    }
}

impl Error for KeyNotFound {}
