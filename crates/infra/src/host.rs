// crates/infra/src/host.rs
use std::borrow::Cow;

use filelist_source_ports::{FileCollection, FileHandle};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

/// Type tag a [`HostFileList`] reports unless told otherwise.
pub const DEFAULT_TYPE_TAG: &str = "FileList";

/// In-memory file handle holding the properties a host reported for one file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct HostFile {
    properties: Map<String, Value>,
}

impl HostFile {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn from_properties(properties: Map<String, Value>) -> Self {
        Self { properties }
    }

    #[must_use]
    pub fn with_property(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.properties.insert(key.into(), value.into());
        self
    }

    #[must_use]
    pub fn with_name(self, name: impl Into<String>) -> Self {
        self.with_property("name", name.into())
    }

    #[must_use]
    pub fn with_relative_path(self, path: impl Into<String>) -> Self {
        self.with_property("webkitRelativePath", path.into())
    }

    #[must_use]
    pub fn with_last_modified(self, millis: i64) -> Self {
        self.with_property("lastModified", millis)
    }

    pub fn properties(&self) -> &Map<String, Value> {
        &self.properties
    }
}

impl FileHandle for HostFile {
    fn property(&self, key: &str) -> Option<Value> {
        self.properties.get(key).cloned()
    }
}

/// An owned selection of [`HostFile`]s, standing in for the browser's `FileList`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HostFileList {
    #[serde(rename = "type")]
    type_tag: Option<String>,
    files: Vec<HostFile>,
}

impl HostFileList {
    #[must_use]
    pub fn new(files: Vec<HostFile>) -> Self {
        Self { type_tag: Some(DEFAULT_TYPE_TAG.to_string()), files }
    }

    /// Override the reported type tag; `None` reports no tag at all.
    #[must_use]
    pub fn with_type_tag(mut self, tag: Option<String>) -> Self {
        self.type_tag = tag;
        self
    }

    pub fn push(&mut self, file: HostFile) {
        self.files.push(file);
    }

    pub fn files(&self) -> &[HostFile] {
        &self.files
    }

    pub fn iter(&self) -> std::slice::Iter<'_, HostFile> {
        self.files.iter()
    }
}

impl Default for HostFileList {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

impl FromIterator<HostFile> for HostFileList {
    fn from_iter<I: IntoIterator<Item = HostFile>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl FileCollection for HostFileList {
    type Handle<'a>
        = &'a HostFile
    where
        Self: 'a;

    fn len(&self) -> usize {
        self.files.len()
    }

    fn get(&self, index: usize) -> Option<Self::Handle<'_>> {
        self.files.get(index)
    }

    fn type_tag(&self) -> Option<Cow<'_, str>> {
        self.type_tag.as_deref().map(Cow::Borrowed)
    }
}

/// Accepts either a bare array of handles (tagged `FileList`) or
/// `{"type": "...", "files": [...]}`.
impl<'de> Deserialize<'de> for HostFileList {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        struct Tagged {
            #[serde(rename = "type", default)]
            type_tag: Option<String>,
            files: Vec<HostFile>,
        }

        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Repr {
            Bare(Vec<HostFile>),
            Tagged(Tagged),
        }

        Ok(match Repr::deserialize(deserializer)? {
            Repr::Bare(files) => Self::new(files),
            Repr::Tagged(tagged) => Self { type_tag: tagged.type_tag, files: tagged.files },
        })
    }
}
