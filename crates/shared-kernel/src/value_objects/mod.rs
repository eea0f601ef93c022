// crates/shared-kernel/src/value_objects/mod.rs
pub mod entry_path;
pub mod file_entry;
pub mod mode;
pub mod mtime;

pub use entry_path::EntryPath;
pub use file_entry::FileEntry;
pub use mode::Mode;
pub use mtime::Mtime;
