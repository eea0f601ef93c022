//! Async adapter for consumers that pull entries with `StreamExt::next`.
//!
//! The traversal never blocks, so every poll is immediately ready; the stream
//! is the same single-pass iterator behind a `Stream` impl.

use futures_util::stream::{self, Iter};

use crate::{FileCollection, FileListSource, SourceOptions, file_list_source};

/// Like [`file_list_source`], exposed as a `Stream`.
pub fn file_list_stream<C>(files: &C, options: SourceOptions) -> Iter<FileListSource<'_, C>>
where
    C: FileCollection + ?Sized,
{
    into_stream(file_list_source(files, options))
}

/// Wrap an existing traversal, e.g. one built with a custom diagnostics sink.
pub fn into_stream<'a, C>(source: FileListSource<'a, C>) -> Iter<FileListSource<'a, C>>
where
    C: FileCollection + ?Sized + 'a,
{
    stream::iter(source)
}
