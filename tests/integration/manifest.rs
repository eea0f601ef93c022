// tests/integration/manifest.rs
use std::io::Write;

use filelist_source::{
    CollectingSink, ErrorCode, ErrorContext, ManifestReader, Mtime, SourceOptions, file_list_source_with,
};

#[test]
fn manifest_on_disk_round_trips_into_entries() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(
        file,
        r#"{{"type": "FileList", "files": [
            {{"name": "a.txt", "webkitRelativePath": "photos\\2021\\a.txt", "lastModified": 1609459200123}},
            {{"name": "b.txt", "path": "C:\\Users\\me\\b.txt"}}
        ]}}"#
    )
    .unwrap();

    let files = ManifestReader::open(file.path()).context("loading manifest").unwrap();
    let sink = CollectingSink::new();
    let options = SourceOptions { preserve_mtime: true, ..SourceOptions::default() };

    let entries: Vec<_> = file_list_source_with(&files, options, &sink)
        .collect::<Result<_, _>>()
        .unwrap();
    assert_eq!(entries[0].path, "photos/2021/a.txt");
    assert_eq!(entries[0].mtime, Some(Mtime::new(1_609_459_200, 123_000_000)));
    assert_eq!(entries[1].path, "C:/Users/me/b.txt");
    assert_eq!(sink.len(), 1);
}

#[test]
fn manifest_with_bad_entry_fails_at_that_entry() {
    let files = ManifestReader::parse(r#"[{"name": "ok"}, {"webkitRelativePath": 7, "name": "shadowed"}]"#).unwrap();

    let sink = CollectingSink::new();
    let results: Vec<_> = file_list_source_with(&files, SourceOptions::default(), &sink).collect();
    assert_eq!(results.len(), 2);
    assert!(results[0].is_ok());
    assert!(sink.is_empty());
    let err = results[1].as_ref().unwrap_err();
    assert_eq!(err.code(), ErrorCode::InvalidPath);
    assert_eq!(err.value(), &serde_json::json!(7));
}

#[test]
fn unreadable_manifest_carries_context() {
    let dir = tempfile::tempdir().unwrap();
    let err = ManifestReader::open(&dir.path().join("missing.json"))
        .context("loading manifest")
        .unwrap_err();

    let display = err.to_string();
    assert!(display.contains("loading manifest"));
    assert!(display.contains("missing.json"));
    assert_eq!(err.code(), None);
}
