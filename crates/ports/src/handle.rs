// crates/ports/src/handle.rs
use serde_json::Value;

/// A host-owned reference to one selected file.
///
/// Hosts expose metadata under loosely agreed property names
/// (`webkitRelativePath`, `name`, `lastModified`, ...), and which ones are set
/// depends on how the selection was made. `None` means the property is absent;
/// `Some(Value::Null)` means it is present but null.
pub trait FileHandle {
    fn property(&self, key: &str) -> Option<Value>;
}

impl<T: FileHandle + ?Sized> FileHandle for &T {
    fn property(&self, key: &str) -> Option<Value> {
        (**self).property(key)
    }
}

impl<T: FileHandle + ?Sized> FileHandle for Box<T> {
    fn property(&self, key: &str) -> Option<Value> {
        (**self).property(key)
    }
}

impl<T: FileHandle + ?Sized> FileHandle for std::sync::Arc<T> {
    fn property(&self, key: &str) -> Option<Value> {
        (**self).property(key)
    }
}

/// Plain JSON objects act as handles directly.
impl FileHandle for serde_json::Map<String, Value> {
    fn property(&self, key: &str) -> Option<Value> {
        self.get(key).cloned()
    }
}

impl FileHandle for Value {
    fn property(&self, key: &str) -> Option<Value> {
        self.get(key).cloned()
    }
}
