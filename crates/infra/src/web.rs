// crates/infra/src/web.rs
//! Browser bindings.
//!
//! A user selection arrives as a `FileList` (or, from drag and drop and some
//! frameworks, an array-like of `File`s). Properties are read reflectively so
//! engine-specific ones such as `mozFullPath` work without bindings of their own.

use std::borrow::Cow;

use filelist_source_ports::{Diagnostic, DiagnosticsSink, FileCollection, FileHandle};
use js_sys::{Array, Date, Object, Reflect};
use serde_json::{Number, Value};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{File, FileList};

/// A browser file object. Cloning clones the JS reference, not the file.
#[derive(Debug, Clone)]
pub struct WebFile(JsValue);

impl WebFile {
    pub fn as_js(&self) -> &JsValue {
        &self.0
    }

    /// The underlying `File`, when the handle is one.
    pub fn as_file(&self) -> Option<&File> {
        self.0.dyn_ref::<File>()
    }
}

impl From<File> for WebFile {
    fn from(file: File) -> Self {
        Self(file.into())
    }
}

impl From<WebFile> for JsValue {
    fn from(file: WebFile) -> Self {
        file.0
    }
}

impl FileHandle for WebFile {
    fn property(&self, key: &str) -> Option<Value> {
        let raw = Reflect::get(&self.0, &JsValue::from_str(key)).ok()?;
        if raw.is_undefined() {
            return None;
        }
        Some(js_to_json(&raw))
    }
}

fn js_to_json(raw: &JsValue) -> Value {
    if raw.is_null() {
        return Value::Null;
    }
    if let Some(s) = raw.as_string() {
        return Value::String(s);
    }
    if let Some(b) = raw.as_bool() {
        return Value::Bool(b);
    }
    if let Some(n) = raw.as_f64() {
        return Number::from_f64(n).map_or(Value::Null, Value::Number);
    }
    // `lastModifiedDate` is a Date object on engines that still expose it.
    if let Some(date) = raw.dyn_ref::<Date>() {
        return Number::from_f64(date.get_time()).map_or(Value::Null, Value::Number);
    }
    serde_wasm_bindgen::from_value(raw.clone()).unwrap_or(Value::Null)
}

/// A browser selection, snapshotted as the values of the host object.
#[derive(Debug, Clone)]
pub struct WebFileList {
    type_tag: Option<String>,
    items: Array,
}

impl WebFileList {
    /// Wrap any array-like host object. Non-objects yield an empty selection;
    /// the type tag still reflects what was passed.
    pub fn new(value: &JsValue) -> Self {
        let items = value.dyn_ref::<Object>().map_or_else(Array::new, Object::values);
        Self { type_tag: constructor_name(value), items }
    }
}

impl From<&FileList> for WebFileList {
    fn from(list: &FileList) -> Self {
        Self::new(list.as_ref())
    }
}

impl From<FileList> for WebFileList {
    fn from(list: FileList) -> Self {
        Self::from(&list)
    }
}

fn constructor_name(value: &JsValue) -> Option<String> {
    if value.is_null() || value.is_undefined() {
        return None;
    }
    let ctor = Reflect::get(value, &JsValue::from_str("constructor")).ok()?;
    Reflect::get(&ctor, &JsValue::from_str("name")).ok()?.as_string()
}

impl FileCollection for WebFileList {
    type Handle<'a>
        = WebFile
    where
        Self: 'a;

    fn len(&self) -> usize {
        self.items.length() as usize
    }

    fn get(&self, index: usize) -> Option<Self::Handle<'_>> {
        let index = u32::try_from(index).ok()?;
        (index < self.items.length()).then(|| WebFile(self.items.get(index)))
    }

    fn type_tag(&self) -> Option<Cow<'_, str>> {
        self.type_tag.as_deref().map(Cow::Borrowed)
    }
}

/// Writes diagnostics to the browser console.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleSink;

impl DiagnosticsSink for ConsoleSink {
    fn warn(&self, diagnostic: &Diagnostic) {
        web_sys::console::warn_1(&JsValue::from_str(&diagnostic.to_string()));
    }
}
