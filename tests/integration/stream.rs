// tests/integration/stream.rs
use filelist_source::{
    CollectingSink, SourceOptions, file_list_source_with,
    stream::{file_list_stream, into_stream},
};
use futures_util::{FutureExt, StreamExt};
use serde_json::json;

use crate::common::*;

#[test]
fn stream_yields_the_same_entries() {
    let files = selection([named("a"), relative("b", "x\\b")]);
    let mut entries = file_list_stream(&files, SourceOptions::default());

    let first = entries.next().now_or_never().flatten().unwrap().unwrap();
    let second = entries.next().now_or_never().flatten().unwrap().unwrap();
    assert_eq!(first.path, "a");
    assert_eq!(second.path, "x/b");
    assert!(entries.next().now_or_never().flatten().is_none());
}

#[test]
fn stream_surfaces_failure_in_position() {
    let files = selection([named("a"), from_json(json!({"name": 3})), named("c")]);
    let sink = CollectingSink::new();
    let stream = into_stream(file_list_source_with(&files, SourceOptions::default(), &sink));

    let collected: Vec<_> = stream.collect::<Vec<_>>().now_or_never().unwrap();
    assert_eq!(collected.len(), 2);
    assert!(collected[1].is_err());
}
