// crates/shared-kernel/src/lib.rs
#![allow(clippy::multiple_crate_versions)]

pub use error::{
    ErrorCode, ErrorContext, FileListError, InfraResult, InfrastructureError, Result, SourceError,
    SourceResult,
};

pub mod error;
pub mod value_objects;

pub use value_objects::{EntryPath, FileEntry, Mode, Mtime};
