// crates/usecase/src/options.rs
use derive_builder::Builder;
use filelist_source_domain::{PathFieldOrder, SubsecondUnit};
use filelist_source_shared_kernel::{Mode, Mtime};
use serde::{Deserialize, Serialize};

/// Type tag browsers give a user file selection.
pub const FILE_LIST_TYPE_TAG: &str = "FileList";

/// Options for one traversal. Deserializes from the host's camelCase option
/// object, e.g. `{"preserveMtime": true, "mode": "0644"}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Builder)]
#[serde(rename_all = "camelCase", default)]
#[builder(setter(into), default)]
pub struct SourceOptions {
    /// Suppress all diagnostics.
    pub no_warn: bool,
    #[builder(setter(into, strip_option))]
    pub mode: Option<Mode>,
    /// Used when `preserve_mtime` is off, and when a handle has no usable timestamp.
    #[builder(setter(into, strip_option))]
    pub mtime: Option<Mtime>,
    pub preserve_mtime: bool,
    pub path_fields: PathFieldOrder,
    pub expected_collection_type: String,
    pub subsec_unit: SubsecondUnit,
}

impl Default for SourceOptions {
    fn default() -> Self {
        Self {
            no_warn: false,
            mode: None,
            mtime: None,
            preserve_mtime: false,
            path_fields: PathFieldOrder::default(),
            expected_collection_type: FILE_LIST_TYPE_TAG.to_string(),
            subsec_unit: SubsecondUnit::default(),
        }
    }
}

impl SourceOptions {
    #[must_use]
    pub fn builder() -> SourceOptionsBuilder {
        SourceOptionsBuilder::default()
    }
}
