// crates/shared-kernel/src/value_objects/mtime.rs
use std::fmt;

use serde::{Deserialize, Serialize};

/// Modification time as whole seconds since the Unix epoch plus a sub-second part.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default)]
#[must_use]
pub struct Mtime {
    pub secs: i64,
    #[serde(default)]
    pub nsecs: u32,
}

impl Mtime {
    #[inline]
    pub const fn new(secs: i64, nsecs: u32) -> Self {
        Self { secs, nsecs }
    }

    #[inline]
    pub const fn from_secs(secs: i64) -> Self {
        Self { secs, nsecs: 0 }
    }
}

impl fmt::Display for Mtime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{:09}", self.secs, self.nsecs)
    }
}
