//! Tests for reading and decoding notebook files
use std::fs;

use nbcheck::InputError;
use nbcheck::notebook::{CellType, load_document, read_notebook};
use tempfile::TempDir;

fn write_notebook(dir: &TempDir, name: &str, content: &str) -> std::path::PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, content).expect("write notebook");
    path
}

#[test]
fn test_missing_file_is_read_error() {
    let dir = TempDir::new().expect("temp dir");
    let path = dir.path().join("missing.ipynb");

    let err = read_notebook(&path).unwrap_err();
    match err {
        InputError::Read { path: reported, .. } => assert_eq!(reported, path),
        other => panic!("Expected read error, got {other:?}"),
    }
}

#[test]
fn test_directory_is_read_error() {
    let dir = TempDir::new().expect("temp dir");
    let err = load_document(dir.path()).unwrap_err();
    assert!(matches!(err, InputError::Read { .. }));
}

#[test]
fn test_read_error_message_names_path() {
    let err = read_notebook(std::path::Path::new("no/such/notebook.ipynb")).unwrap_err();
    assert!(err.to_string().contains("no/such/notebook.ipynb"));
}

#[test]
fn test_load_real_notebook_layout() {
    let dir = TempDir::new().expect("temp dir");
    let path = write_notebook(
        &dir,
        "exercise.ipynb",
        r##"{
 "cells": [
  {
   "cell_type": "markdown",
   "metadata": {},
   "source": [
    "# Exercise 1\n",
    "Print the greeting."
   ]
  },
  {
   "cell_type": "code",
   "execution_count": 1,
   "metadata": {},
   "outputs": [
    {"name": "stdout", "output_type": "stream", "text": ["Hello, world\n"]}
   ],
   "source": [
    "print(\"Hello, world\")"
   ]
  }
 ],
 "metadata": {
  "kernelspec": {"display_name": "Python 3", "language": "python", "name": "python3"}
 },
 "nbformat": 4,
 "nbformat_minor": 2
}"##,
    );

    let doc = load_document(&path).expect("load notebook");
    assert_eq!(doc.cells.len(), 2);
    assert_eq!(doc.cells[0].cell_type, CellType::Markdown);
    assert_eq!(doc.cells[0].text(), "# Exercise 1\nPrint the greeting.");
    assert_eq!(doc.cells[1].cell_type, CellType::Code);
    assert_eq!(doc.nbformat, Some(4));
}

#[test]
fn test_malformed_file_is_decode_error() {
    let dir = TempDir::new().expect("temp dir");
    let path = write_notebook(&dir, "broken.ipynb", "{\"cells\": [");

    let err = load_document(&path).unwrap_err();
    assert!(matches!(err, InputError::Decode(_)));
}

#[test]
fn test_missing_cells_field_is_decode_error() {
    let dir = TempDir::new().expect("temp dir");
    let path = write_notebook(&dir, "nocells.ipynb", r#"{"metadata": {}}"#);

    let err = load_document(&path).unwrap_err();
    assert!(matches!(err, InputError::Decode(_)));
    assert!(err.to_string().contains("cells"));
}
