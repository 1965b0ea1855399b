//! Dataset loading tests.

use std::fs;
use std::path::PathBuf;

use versepage_foundation::ErrorKind;
use versepage_index::PageIndex;
use versepage_runtime::{RuntimeConfig, load_entries, render};

fn write(dir: &tempfile::TempDir, name: &str, contents: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, contents).unwrap();
    path
}

#[test]
fn csv_dataset_end_to_end() {
    let dir = tempfile::tempdir().unwrap();
    let path = write(
        &dir,
        "page_map.csv",
        "page,ref,spill\n10,John 3:1-16,y\n11,John 3:17-36,\n12,Nonsense,\n",
    );
    let config = RuntimeConfig::default().with_map_path(&path);
    let entries = load_entries(&config.map_path).unwrap();
    let index = PageIndex::builder()
        .with_config(config.index_config())
        .build(&entries);

    assert_eq!(index.report().skipped.len(), 1);
    let out = render::human("Jn 3:16", &index.lookup("Jn 3:16"));
    assert_eq!(out.stdout.as_deref(), Some("Jn 3:16 → pages 10-11"));
}

#[test]
fn json_dataset_end_to_end() {
    let dir = tempfile::tempdir().unwrap();
    let path = write(
        &dir,
        "pages.json",
        r#"[{"page": 1, "ref": "Genesis 1:1-13"}, {"page": 3, "ref": "Genesis 1:14-31"}]"#,
    );
    let index = PageIndex::builder().build(&load_entries(&path).unwrap());

    let value = render::to_json(&index.lookup("Gen 1:10-20"));
    assert_eq!(value["page"], "1,3");
    assert_eq!(value["pages"], serde_json::json!([1, 3]));
    assert_eq!(value["page_start"], 1);
    assert_eq!(value["page_end"], 3);
}

#[test]
fn fallback_override_from_environment_lookup() {
    let dir = tempfile::tempdir().unwrap();
    let path = write(&dir, "short.csv", "page,ref\n1,Jude 1\n");
    let config = RuntimeConfig::default()
        .with_overrides(|key| match key {
            "VERSEPAGE_MAP" => Some(path.display().to_string()),
            "VERSEPAGE_FALLBACK_VERSES" => Some("25".to_string()),
            _ => None,
        })
        .unwrap();
    let index = PageIndex::builder()
        .with_config(config.index_config())
        .build(&load_entries(&config.map_path).unwrap());
    assert_eq!(index.len(), 25);
}

#[test]
fn malformed_csv_is_dataset_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = write(&dir, "bad.csv", "page,ref\n1,Jude 1:1\n-4,Jude 1:2\n");
    let err = load_entries(&path).unwrap_err();
    assert!(matches!(err.kind, ErrorKind::Dataset(_)));
    assert_eq!(err.context.and_then(|c| c.row), Some(2));
}

#[test]
fn skipped_rows_use_dataset_row_numbers() {
    let dir = tempfile::tempdir().unwrap();
    let rows = "page,ref\n1,Jude 1:1\n2,Nonsense\n3,Jude 1:3\n";
    let index = PageIndex::builder().build(&load_entries(write(&dir, "ok.csv", rows)).unwrap());
    let skipped = &index.report().skipped;
    assert_eq!(skipped.len(), 1);

    let broken = rows.replace("2,Nonsense", "two,Nonsense");
    let err = load_entries(write(&dir, "bad.csv", &broken)).unwrap_err();
    assert_eq!(err.context.and_then(|c| c.row), Some(skipped[0].row));
    assert_eq!(skipped[0].row, 2);
}

#[test]
fn malformed_json_is_dataset_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = write(&dir, "bad.json", r#"{"page": 1}"#);
    let err = load_entries(&path).unwrap_err();
    assert!(matches!(err.kind, ErrorKind::Dataset(_)));
}
