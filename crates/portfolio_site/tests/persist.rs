use std::fs;

use portfolio_site::{ensure_output_dir, AtomicFileWriter, WriteError};
use tempfile::TempDir;

#[test]
fn creates_missing_output_dir() {
    let temp = TempDir::new().unwrap();
    let new_dir = temp.path().join("out");
    assert!(!new_dir.exists());
    ensure_output_dir(&new_dir).unwrap();
    assert!(new_dir.is_dir());
}

#[test]
fn atomic_write_replaces_existing_file() {
    let temp = TempDir::new().unwrap();
    let writer = AtomicFileWriter::new(temp.path().to_path_buf());

    let first = writer.write("index.html", "hello").unwrap();
    assert_eq!(first.file_name().unwrap(), "index.html");
    assert_eq!(fs::read_to_string(&first).unwrap(), "hello");

    let second = writer.write("index.html", "world").unwrap();
    assert_eq!(first, second);
    assert_eq!(fs::read_to_string(&second).unwrap(), "world");
}

#[test]
fn nested_paths_create_directories() {
    let temp = TempDir::new().unwrap();
    let writer = AtomicFileWriter::new(temp.path().join("site"));

    let path = writer.write("projects/robovibe.html", "<p>hi</p>").unwrap();
    assert_eq!(path, temp.path().join("site/projects/robovibe.html"));
    assert_eq!(fs::read_to_string(path).unwrap(), "<p>hi</p>");
}

#[test]
fn paths_outside_root_are_rejected() {
    let temp = TempDir::new().unwrap();
    let writer = AtomicFileWriter::new(temp.path().join("site"));

    for bad in ["../escape.html", "/etc/passwd", "", "projects/../../x.html"] {
        let result = writer.write(bad, "x");
        assert!(matches!(result, Err(WriteError::InvalidPath(_))), "{bad:?}");
    }
    assert!(!temp.path().join("escape.html").exists());
}

#[test]
fn no_partial_file_on_error() {
    let temp = TempDir::new().unwrap();
    let file_path = temp.path().join("not_a_dir");
    fs::write(&file_path, "x").unwrap();

    let writer = AtomicFileWriter::new(file_path.clone());
    let result = writer.write("index.html", "data");
    assert!(result.is_err());
    assert!(!file_path.with_file_name("index.html").exists());
}
