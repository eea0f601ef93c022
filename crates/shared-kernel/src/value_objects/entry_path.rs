// crates/shared-kernel/src/value_objects/entry_path.rs
use std::{borrow::Borrow, fmt, ops::Deref};

use serde::{Deserialize, Deserializer, Serialize};

/// Forward-slash relative path of an entry.
///
/// Construction replaces every `\` with `/`; nothing else is touched (no `.`/`..`
/// resolution, no case folding, no trimming), so a value never contains a backslash.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[repr(transparent)]
#[serde(transparent)]
pub struct EntryPath(String);

impl EntryPath {
    #[must_use]
    pub fn new(raw: &str) -> Self {
        Self(to_posix(raw))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    #[must_use]
    pub fn into_string(self) -> String {
        self.0
    }
}

/// Replace every backslash separator with a forward slash.
#[must_use]
pub fn to_posix(raw: &str) -> String {
    raw.replace('\\', "/")
}

impl From<&str> for EntryPath {
    fn from(raw: &str) -> Self {
        Self::new(raw)
    }
}

impl From<String> for EntryPath {
    fn from(raw: String) -> Self {
        if raw.contains('\\') { Self::new(&raw) } else { Self(raw) }
    }
}

impl<'de> Deserialize<'de> for EntryPath {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        String::deserialize(deserializer).map(Self::from)
    }
}

impl AsRef<str> for EntryPath {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Deref for EntryPath {
    type Target = str;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl Borrow<str> for EntryPath {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl PartialEq<str> for EntryPath {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for EntryPath {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

impl fmt::Display for EntryPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
