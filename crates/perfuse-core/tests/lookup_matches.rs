use std::fs;

use perfuse_core::find_path;

#[test]
fn file_match_wins_over_directory_match() {
    let root = tempfile::tempdir().unwrap();
    fs::create_dir_all(root.path().join("networks")).unwrap();
    fs::create_dir_all(root.path().join("deep")).unwrap();
    fs::write(root.path().join("deep").join("networks_index.json"), b"{}").unwrap();

    let found = find_path(root.path(), "networks").unwrap();
    assert!(found.is_file());
    assert_eq!(found.file_name().unwrap(), "networks_index.json");
}

#[test]
fn directory_match_returned_when_no_file_matches() {
    let root = tempfile::tempdir().unwrap();
    fs::create_dir_all(root.path().join("a").join("templates")).unwrap();
    fs::write(root.path().join("a").join("readme.txt"), b"").unwrap();

    let found = find_path(root.path(), "templates").unwrap();
    assert!(found.is_dir());
}

#[test]
fn missing_needle_yields_none() {
    let root = tempfile::tempdir().unwrap();
    fs::write(root.path().join("data.csv"), b"").unwrap();

    assert!(find_path(root.path(), "nonexistent").is_none());
}
