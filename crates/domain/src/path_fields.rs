// crates/domain/src/path_fields.rs
//! Path resolution for a single handle.
//!
//! Hosts report the relative location of a selected file under different
//! property names depending on how the selection was made: a directory picker
//! fills `webkitRelativePath`, desktop shells add `path`, older Gecko builds
//! expose `mozFullPath`, and every handle has a bare `name`. The candidates are
//! tried in a configurable order; the first one that is set wins.

use std::fmt;

use filelist_source_shared_kernel::{EntryPath, SourceError, SourceResult};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::presence::is_present;

/// One candidate property for the relative path.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum PathField {
    /// Set by directory pickers (`<input webkitdirectory>`).
    WebkitRelativePath,
    /// Absolute filesystem path exposed by desktop shells.
    Path,
    /// Gecko's platform-specific full path.
    MozFullPath,
    /// Bare file name; always set by browsers.
    Name,
    Custom(String),
}

impl PathField {
    #[must_use]
    pub fn key(&self) -> &str {
        match self {
            Self::WebkitRelativePath => "webkitRelativePath",
            Self::Path => "path",
            Self::MozFullPath => "mozFullPath",
            Self::Name => "name",
            Self::Custom(key) => key,
        }
    }
}

impl From<&str> for PathField {
    fn from(key: &str) -> Self {
        match key {
            "webkitRelativePath" => Self::WebkitRelativePath,
            "path" => Self::Path,
            "mozFullPath" => Self::MozFullPath,
            "name" => Self::Name,
            other => Self::Custom(other.to_string()),
        }
    }
}

impl From<String> for PathField {
    fn from(key: String) -> Self {
        Self::from(key.as_str())
    }
}

impl From<PathField> for String {
    fn from(field: PathField) -> Self {
        match field {
            PathField::Custom(key) => key,
            known => known.key().to_string(),
        }
    }
}

impl fmt::Display for PathField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Ordered list of path candidates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PathFieldOrder(Vec<PathField>);

impl PathFieldOrder {
    #[must_use]
    pub fn new(fields: Vec<PathField>) -> Self {
        Self(fields)
    }

    /// Try `field` before every existing candidate.
    #[must_use]
    pub fn prepend(mut self, field: impl Into<PathField>) -> Self {
        self.0.insert(0, field.into());
        self
    }

    /// Try `field` after every existing candidate.
    #[must_use]
    pub fn append(mut self, field: impl Into<PathField>) -> Self {
        self.0.push(field.into());
        self
    }

    pub fn iter(&self) -> std::slice::Iter<'_, PathField> {
        self.0.iter()
    }

    #[must_use]
    pub fn as_slice(&self) -> &[PathField] {
        &self.0
    }
}

impl Default for PathFieldOrder {
    fn default() -> Self {
        Self(vec![
            PathField::WebkitRelativePath,
            PathField::Path,
            PathField::MozFullPath,
            PathField::Name,
        ])
    }
}

impl<F: Into<PathField>> FromIterator<F> for PathFieldOrder {
    fn from_iter<I: IntoIterator<Item = F>>(iter: I) -> Self {
        Self(iter.into_iter().map(Into::into).collect())
    }
}

impl<'a> IntoIterator for &'a PathFieldOrder {
    type Item = &'a PathField;
    type IntoIter = std::slice::Iter<'a, PathField>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// Pick the raw path value for one handle.
///
/// Returns the first present candidate. When none is present the last
/// candidate's raw value is returned (`Null` if it is absent), so an empty
/// `name` still resolves to `""`.
pub fn resolve_path<F>(order: &PathFieldOrder, mut lookup: F) -> Value
where
    F: FnMut(&str) -> Option<Value>,
{
    let mut last = None;
    for field in order {
        let value = lookup(field.key());
        if is_present(value.as_ref()) {
            return value.unwrap_or(Value::Null);
        }
        last = value;
    }
    last.unwrap_or(Value::Null)
}

/// Resolve and validate the path of the handle at `index`.
///
/// # Errors
///
/// Returns [`SourceError::InvalidPath`] carrying the resolved value when it is
/// not a string.
pub fn resolve_entry_path<F>(order: &PathFieldOrder, index: usize, lookup: F) -> SourceResult<EntryPath>
where
    F: FnMut(&str) -> Option<Value>,
{
    match resolve_path(order, lookup) {
        Value::String(raw) => Ok(EntryPath::from(raw)),
        value => Err(SourceError::InvalidPath { index, value }),
    }
}
