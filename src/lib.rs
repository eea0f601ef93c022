//! Turns a host-provided file selection into a lazy sequence of import entries.
//!
//! Each handle in the selection becomes one [`FileEntry`]: a forward-slash
//! relative path, the handle itself as content, and an optional mode and mtime.
//!
//! ```
//! use filelist_source::{HostFile, HostFileList, SourceOptions, file_list_source};
//!
//! let files: HostFileList = vec![
//!     HostFile::new().with_name("a.txt").with_relative_path("dir\\a.txt"),
//!     HostFile::new().with_name("b.txt"),
//! ]
//! .into_iter()
//! .collect();
//!
//! let paths: Vec<String> = file_list_source(&files, SourceOptions::default())
//!     .map(|entry| entry.map(|e| e.path.into_string()))
//!     .collect::<Result<_, _>>()
//!     .unwrap();
//! assert_eq!(paths, ["dir/a.txt", "b.txt"]);
//! ```

#![allow(clippy::multiple_crate_versions)]

#[cfg(feature = "stream")]
pub mod stream;

pub use filelist_source_domain::{PathField, PathFieldOrder, SubsecondUnit};
pub use filelist_source_infra::{CollectingSink, HostFile, HostFileList, LogSink, persistence::ManifestReader};
#[cfg(feature = "web")]
pub use filelist_source_infra::web::{ConsoleSink, WebFile, WebFileList};
pub use filelist_source_ports::{Diagnostic, DiagnosticsSink, FileCollection, FileHandle, NoopSink};
pub use filelist_source_shared_kernel::{
    EntryPath, ErrorCode, ErrorContext, FileEntry, FileListError, InfrastructureError, Mode, Mtime, Result,
    SourceError,
};
pub use filelist_source_usecase::{FileListSource, SourceOptions, SourceOptionsBuilder};

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

static LOG_SINK: LogSink = LogSink;

/// Start a traversal of `files`, reporting diagnostics through the `log` facade.
///
/// Nothing happens until the returned iterator is advanced.
pub fn file_list_source<C>(files: &C, options: SourceOptions) -> FileListSource<'_, C>
where
    C: FileCollection + ?Sized,
{
    FileListSource::new(files, options, &LOG_SINK)
}

/// Start a traversal of `files`, reporting diagnostics to `sink`.
pub fn file_list_source_with<'a, C>(
    files: &'a C,
    options: SourceOptions,
    sink: &'a dyn DiagnosticsSink,
) -> FileListSource<'a, C>
where
    C: FileCollection + ?Sized,
{
    FileListSource::new(files, options, sink)
}
