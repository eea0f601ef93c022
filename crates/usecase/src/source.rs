// crates/usecase/src/source.rs
use std::iter::FusedIterator;

use filelist_source_domain::{derive_mtime, resolve_entry_path};
use filelist_source_ports::{Diagnostic, DiagnosticsSink, FileCollection, FileHandle};
use filelist_source_shared_kernel::{EntryPath, FileEntry, Mtime, SourceResult};

use crate::options::SourceOptions;

const LOG_TARGET: &str = "filelist_source";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    Pending,
    Running,
    Finished,
}

/// Lazy, single-pass traversal of a host file selection.
///
/// Each call to `next` turns exactly one handle into an entry. Nothing is
/// read ahead, and the collection identity check runs on the first pull. A handle
/// whose path does not resolve to a string yields one `Err` at its position,
/// after which the iterator is exhausted.
pub struct FileListSource<'a, C: FileCollection + ?Sized + 'a> {
    files: &'a C,
    options: SourceOptions,
    diagnostics: &'a dyn DiagnosticsSink,
    next_index: usize,
    state: State,
}

impl<'a, C: FileCollection + ?Sized + 'a> FileListSource<'a, C> {
    pub fn new(files: &'a C, options: SourceOptions, diagnostics: &'a dyn DiagnosticsSink) -> Self {
        Self { files, options, diagnostics, next_index: 0, state: State::Pending }
    }

    pub fn options(&self) -> &SourceOptions {
        &self.options
    }

    /// Index of the next handle to be processed.
    pub fn position(&self) -> usize {
        self.next_index
    }

    fn warn(&self, diagnostic: Diagnostic) {
        if !self.options.no_warn {
            self.diagnostics.warn(&diagnostic);
        }
    }

    fn check_collection_type(&self) {
        let found = self.files.type_tag();
        if found.as_deref() != Some(self.options.expected_collection_type.as_str()) {
            self.warn(Diagnostic::UnexpectedCollectionType {
                expected: self.options.expected_collection_type.clone(),
                found: found.map(|tag| tag.into_owned()),
            });
        }
    }

    fn produce(&self, index: usize, handle: C::Handle<'a>) -> SourceResult<FileEntry<C::Handle<'a>>> {
        let path = resolve_entry_path(&self.options.path_fields, index, |key| handle.property(key))?;
        let mtime = self.resolve_mtime(index, &path, &handle);
        log::trace!(target: LOG_TARGET, "entry {index}: {path}");

        Ok(FileEntry { path, content: handle, mode: self.options.mode, mtime })
    }

    fn resolve_mtime(&self, index: usize, path: &EntryPath, handle: &impl FileHandle) -> Option<Mtime> {
        if !self.options.preserve_mtime {
            return self.options.mtime;
        }

        match derive_mtime(|key| handle.property(key), self.options.subsec_unit) {
            Some((source, mtime)) => {
                log::trace!(target: LOG_TARGET, "entry {index}: mtime {mtime} from {}", source.key());
                Some(mtime)
            }
            None => {
                self.warn(Diagnostic::MissingTimestamp { index, path: path.to_string() });
                self.options.mtime
            }
        }
    }
}

impl<'a, C: FileCollection + ?Sized + 'a> Iterator for FileListSource<'a, C> {
    type Item = SourceResult<FileEntry<C::Handle<'a>>>;

    fn next(&mut self) -> Option<Self::Item> {
        match self.state {
            State::Finished => return None,
            State::Pending => {
                log::debug!(target: LOG_TARGET, "traversing {} handles", self.files.len());
                self.check_collection_type();
                self.state = State::Running;
            }
            State::Running => {}
        }

        let index = self.next_index;
        let files: &'a C = self.files;
        let Some(handle) = files.get(index) else {
            self.state = State::Finished;
            return None;
        };
        self.next_index += 1;

        let item = self.produce(index, handle);
        if let Err(err) = &item {
            log::debug!(target: LOG_TARGET, "traversal stopped: {err}");
            self.state = State::Finished;
        }
        Some(item)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.state == State::Finished {
            return (0, Some(0));
        }
        let remaining = self.files.len().saturating_sub(self.next_index);
        (remaining.min(1), Some(remaining))
    }
}

impl<'a, C: FileCollection + ?Sized + 'a> FusedIterator for FileListSource<'a, C> {}
