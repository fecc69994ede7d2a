use std::{fs, path::Path};
use tempfile::tempdir;

use esc50_data::{DataError, DataPaths};

fn dirs_under(root: &Path) -> Vec<String> {
    let mut out = Vec::new();
    let mut stack = vec![root.to_path_buf()];
    while let Some(dir) = stack.pop() {
        for entry in fs::read_dir(&dir).unwrap() {
            let path = entry.unwrap().path();
            assert!(path.is_dir(), "unexpected file {}", path.display());
            out.push(
                path.strip_prefix(root)
                    .unwrap()
                    .to_string_lossy()
                    .replace('\\', "/"),
            );
            stack.push(path);
        }
    }
    out.sort();
    out
}

#[test]
fn fresh_root_gets_exactly_the_seven_empty_directories() {
    let tmp = tempdir().unwrap();
    let paths = DataPaths::new(tmp.path());

    paths.ensure().expect("ensure failed");

    assert_eq!(
        dirs_under(tmp.path()),
        vec![
            "data",
            "data/processed",
            "data/processed/augmented_data",
            "data/raw",
            "data/raw/audio",
            "data/raw/meta",
            "models",
        ]
    );
    assert!(fs::read_dir(paths.audio_dir()).unwrap().next().is_none());
    assert!(!paths.metadata_csv().exists(), "csv must not be created");
}

#[test]
fn ensure_is_idempotent_and_keeps_existing_content() {
    let tmp = tempdir().unwrap();
    let paths = DataPaths::new(tmp.path());

    paths.ensure().unwrap();
    let csv = paths.metadata_csv();
    fs::write(&csv, "filename,fold,target,category\n").unwrap();
    let first = dirs_under(tmp.path());

    for _ in 0..3 {
        paths.ensure().expect("repeat ensure failed");
    }

    assert_eq!(dirs_under(tmp.path()), first);
    assert_eq!(
        fs::read_to_string(&csv).unwrap(),
        "filename,fold,target,category\n"
    );
}

#[test]
fn partial_tree_is_completed() {
    let tmp = tempdir().unwrap();
    fs::create_dir_all(tmp.path().join("data/raw")).unwrap();
    let paths = DataPaths::new(tmp.path());

    paths.ensure().unwrap();

    for dir in paths.directories() {
        assert!(dir.is_dir(), "{} missing", dir.display());
    }
}

#[test]
fn blocked_path_surfaces_create_dir_error() {
    let tmp = tempdir().unwrap();
    // A regular file where the `data` directory should be.
    fs::write(tmp.path().join("data"), b"").unwrap();
    let paths = DataPaths::new(tmp.path());

    match paths.ensure() {
        Err(DataError::CreateDir { path, .. }) => assert_eq!(path, paths.data_dir()),
        other => panic!("expected CreateDir error, got {other:?}"),
    }
}
