#![allow(clippy::multiple_crate_versions)]

pub mod path_fields;
pub mod presence;
pub mod timestamp;

pub use path_fields::{PathField, PathFieldOrder, resolve_entry_path, resolve_path};
pub use presence::is_present;
pub use timestamp::{SubsecondUnit, TimestampSource, derive_millis, derive_mtime, split_millis};
