// crates/ports/src/collection.rs
use std::borrow::Cow;

use crate::handle::FileHandle;

/// Type tag reported by in-memory sequences.
pub const ARRAY_TYPE_TAG: &str = "Array";

/// A positionally indexable selection of handles.
///
/// `Handle<'a>` is what each entry carries as its content: a borrow for
/// in-memory collections, or a cheap owned reference when the host hands out
/// fresh objects per lookup.
pub trait FileCollection {
    type Handle<'a>: FileHandle
    where
        Self: 'a;

    fn len(&self) -> usize;

    fn get(&self, index: usize) -> Option<Self::Handle<'_>>;

    /// Host name of the collection type, e.g. `FileList` for a browser selection.
    fn type_tag(&self) -> Option<Cow<'_, str>> {
        None
    }

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<H: FileHandle> FileCollection for [H] {
    type Handle<'a>
        = &'a H
    where
        Self: 'a;

    fn len(&self) -> usize {
        <[H]>::len(self)
    }

    fn get(&self, index: usize) -> Option<Self::Handle<'_>> {
        <[H]>::get(self, index)
    }

    fn type_tag(&self) -> Option<Cow<'_, str>> {
        Some(Cow::Borrowed(ARRAY_TYPE_TAG))
    }
}

impl<H: FileHandle> FileCollection for Vec<H> {
    type Handle<'a>
        = &'a H
    where
        Self: 'a;

    fn len(&self) -> usize {
        self.as_slice().len()
    }

    fn get(&self, index: usize) -> Option<Self::Handle<'_>> {
        self.as_slice().get(index)
    }

    fn type_tag(&self) -> Option<Cow<'_, str>> {
        Some(Cow::Borrowed(ARRAY_TYPE_TAG))
    }
}

impl<H: FileHandle, const N: usize> FileCollection for [H; N] {
    type Handle<'a>
        = &'a H
    where
        Self: 'a;

    fn len(&self) -> usize {
        N
    }

    fn get(&self, index: usize) -> Option<Self::Handle<'_>> {
        self.as_slice().get(index)
    }

    fn type_tag(&self) -> Option<Cow<'_, str>> {
        Some(Cow::Borrowed(ARRAY_TYPE_TAG))
    }
}
