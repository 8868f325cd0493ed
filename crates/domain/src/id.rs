//! Zone identifier.

use std::fmt;

/// Numeric identifier of a monitored zone, used as a path segment.
///
/// Only [`ZoneId::DEFAULT`] is ever served.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ZoneId(u32);

impl ZoneId {
    /// The single zone exposed by the server.
    pub const DEFAULT: Self = Self(1);
}

impl fmt::Display for ZoneId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}
