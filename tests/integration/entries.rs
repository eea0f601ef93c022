// tests/integration/entries.rs
use filelist_source::{
    CollectingSink, ErrorCode, FileListError, Mode, Mtime, NoopSink, PathFieldOrder, SourceOptions, SubsecondUnit,
    file_list_source, file_list_source_with,
};
use serde_json::json;

use crate::common::*;

#[test]
fn relative_path_is_normalized_and_wins_over_name() {
    let files = selection([relative("a.txt", "dir\\a.txt")]);

    let entries: Vec<_> = file_list_source(&files, SourceOptions::default())
        .collect::<Result<_, _>>()
        .unwrap();

    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].path, "dir/a.txt");
    assert!(std::ptr::eq(entries[0].content, &files.files()[0]));
    assert_eq!(entries[0].mode, None);
    assert_eq!(entries[0].mtime, None);
}

#[test]
fn bare_name_is_used_when_no_relative_fields() {
    let files = selection([named("b.txt")]);

    let entry = file_list_source(&files, SourceOptions::default()).next().unwrap().unwrap();
    assert_eq!(entry.path, "b.txt");
}

#[test]
fn preserve_mtime_splits_last_modified() {
    let files = selection([named("c.txt").with_last_modified(1234)]);

    let options = SourceOptions { preserve_mtime: true, ..SourceOptions::default() };
    let entry = file_list_source(&files, options).next().unwrap().unwrap();
    assert_eq!(entry.mtime, Some(Mtime::new(1, 234_000_000)));

    let options = SourceOptions {
        preserve_mtime: true,
        subsec_unit: SubsecondUnit::Milliseconds,
        ..SourceOptions::default()
    };
    let entry = file_list_source(&files, options).next().unwrap().unwrap();
    assert_eq!(entry.mtime, Some(Mtime::new(1, 234)));
}

#[test]
fn non_string_name_fails_with_invalid_path() {
    let files = selection([from_json(json!({"name": 5}))]);

    let err = file_list_source(&files, SourceOptions::default()).next().unwrap().unwrap_err();
    assert_eq!(err.code(), ErrorCode::InvalidPath);
    assert_eq!(err.code().as_str(), "ERR_INVALID_PATH");
    assert_eq!(err.value(), &json!(5));
}

#[test]
fn missing_and_null_paths_fail_too() {
    for handle in [json!({}), json!({"name": null}), json!({"name": false})] {
        let files = selection([from_json(handle.clone())]);
        let err = file_list_source_with(&files, SourceOptions::default(), &NoopSink)
            .next()
            .unwrap()
            .unwrap_err();
        assert_eq!(err.code(), ErrorCode::InvalidPath, "handle {handle}");
    }
}

#[test]
fn failure_truncates_the_sequence() {
    let files = selection([named("a"), named("b"), from_json(json!({"name": 1})), named("d")]);

    let results: Vec<_> = file_list_source_with(&files, SourceOptions::default(), &NoopSink).collect();
    assert_eq!(results.len(), 3);
    assert!(results[..2].iter().all(Result::is_ok));
    assert_eq!(results[2].as_ref().unwrap_err().index(), 2);
}

#[test]
fn failure_converts_into_root_error_with_code() {
    let files = selection([from_json(json!({"name": [1, 2]}))]);

    let result: filelist_source::Result<Vec<_>> = file_list_source_with(&files, SourceOptions::default(), &NoopSink)
        .map(|item| item.map_err(FileListError::from))
        .collect();
    assert_eq!(result.unwrap_err().code(), Some(ErrorCode::InvalidPath));
}

#[test]
fn traversal_is_lazy() {
    let files = ProbeCollection::new(vec![named("a"), named("b"), named("c")]);

    let mut source = file_list_source(&files, SourceOptions::default());
    assert_eq!(files.lookups(), 0);
    source.next();
    assert_eq!(files.lookups(), 1);
    drop(source);
    assert_eq!(files.lookups(), 1);
}

#[test]
fn configured_mode_and_mtime_apply_to_every_entry() {
    let files = selection([named("a").with_last_modified(5000), named("b"), relative("c", "x\\c")]);
    let options = SourceOptions::builder()
        .mode(0o644_u32)
        .mtime(Mtime::from_secs(42))
        .build()
        .unwrap();

    for entry in file_list_source(&files, options) {
        let entry = entry.unwrap();
        assert_eq!(entry.mode, Some(Mode::new(0o644)));
        assert_eq!(entry.mtime, Some(Mtime::from_secs(42)));
    }
}

#[test]
fn custom_path_fields_are_honoured() {
    let files = selection([from_json(json!({"name": "n.txt", "relativePath": "deep\\n.txt"}))]);
    let options = SourceOptions {
        path_fields: PathFieldOrder::default().prepend("relativePath"),
        ..SourceOptions::default()
    };

    let entry = file_list_source(&files, options).next().unwrap().unwrap();
    assert_eq!(entry.path, "deep/n.txt");
}

#[test]
fn host_options_object_drives_the_traversal() {
    let files = selection([from_json(json!({"name": "a", "lastModifiedDate": "2021-01-01T00:00:00.500Z"}))]);
    let options: SourceOptions =
        serde_json::from_value(json!({"preserveMtime": true, "mode": "0755", "noWarn": true})).unwrap();

    let entry = file_list_source(&files, options).next().unwrap().unwrap();
    assert_eq!(entry.mode, Some(Mode::new(0o755)));
    assert_eq!(entry.mtime, Some(Mtime::new(1_609_459_200, 500_000_000)));
}

#[test]
fn plain_slices_of_json_handles_work() {
    let files = [json!({"name": "a", "webkitRelativePath": "r\\a"}), json!({"name": "b"})];

    let paths: Vec<String> = file_list_source_with(&files[..], SourceOptions::default(), &NoopSink)
        .map(|entry| entry.unwrap().path.into_string())
        .collect();
    assert_eq!(paths, ["r/a", "b"]);
}

#[test]
fn falsy_last_modified_falls_through_to_date_string() {
    let files = selection([
        from_json(json!({"name": "a", "lastModified": 0, "lastModifiedDate": "2021-01-01T00:00:00Z"})),
        from_json(json!({"name": "b", "lastModified": null, "lastModifiedDate": "2021-01-01T00:00:01.250Z"})),
    ]);
    let sink = CollectingSink::new();
    let options = SourceOptions { preserve_mtime: true, ..SourceOptions::default() };

    let entries: Vec<_> = file_list_source_with(&files, options, &sink)
        .collect::<Result<_, _>>()
        .unwrap();
    assert_eq!(entries[0].mtime, Some(Mtime::from_secs(1_609_459_200)));
    assert_eq!(entries[1].mtime, Some(Mtime::new(1_609_459_201, 250_000_000)));
    assert!(sink.is_empty());
}

#[test]
fn date_only_handle_is_preserved() {
    let files = selection([from_json(json!({
        "name": "legacy.txt",
        "lastModifiedDate": "Fri Jan 01 2021 01:00:00 GMT+0100 (Central European Standard Time)"
    }))]);
    let options = SourceOptions {
        preserve_mtime: true,
        subsec_unit: SubsecondUnit::Milliseconds,
        ..SourceOptions::default()
    };

    let entry = file_list_source(&files, options).next().unwrap().unwrap();
    assert_eq!(entry.path, "legacy.txt");
    assert_eq!(entry.mtime, Some(Mtime::from_secs(1_609_459_200)));
}

#[test]
fn sub_millisecond_last_modified_is_not_missing() {
    let files = selection([from_json(json!({"name": "a", "lastModified": 0.5}))]);
    let sink = CollectingSink::new();
    let options = SourceOptions {
        preserve_mtime: true,
        mtime: Some(Mtime::from_secs(99)),
        ..SourceOptions::default()
    };

    let entry = file_list_source_with(&files, options, &sink).next().unwrap().unwrap();
    assert_eq!(entry.mtime, Some(Mtime::new(0, 0)));
    assert!(sink.is_empty());
}
