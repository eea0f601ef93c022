// crates/shared-kernel/src/value_objects/file_entry.rs
use super::{EntryPath, Mode, Mtime};

/// One normalized record handed to the import pipeline.
///
/// `content` is the host's handle itself; it is never read or closed here.
#[derive(Debug, Clone, PartialEq)]
pub struct FileEntry<C> {
    pub path: EntryPath,
    pub content: C,
    pub mode: Option<Mode>,
    pub mtime: Option<Mtime>,
}
