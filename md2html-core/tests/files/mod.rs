//! File driver tests

use md2html_core::{convert_file, ConvertError};
use std::fs;
use tempfile::tempdir;

#[test]
fn converts_file_to_new_output() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("README.md");
    let output = dir.path().join("README.html");
    fs::write(&input, "# Title\n\n- a\n- b\n").unwrap();

    let stats = convert_file(&input, &output).unwrap();

    let html = fs::read_to_string(&output).unwrap();
    assert_eq!(html, "<h1>Title</h1>\n<ul>\n<li>a</li>\n<li>b</li>\n</ul>\n");
    assert_eq!(stats.lines, 4);
    assert_eq!(stats.bytes_written, html.len());
}

#[test]
fn truncates_existing_output() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("in.md");
    let output = dir.path().join("out.html");
    fs::write(&input, "## Short\n").unwrap();
    fs::write(&output, "a much longer previous document\n".repeat(10)).unwrap();

    convert_file(&input, &output).unwrap();

    assert_eq!(fs::read_to_string(&output).unwrap(), "<h2>Short</h2>\n");
}

#[test]
fn missing_input_leaves_output_alone() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("absent.md");
    let output = dir.path().join("out.html");
    fs::write(&output, "keep me").unwrap();

    let err = convert_file(&input, &output).unwrap_err();

    assert_eq!(err, ConvertError::MissingInput(input.clone()));
    assert_eq!(fs::read_to_string(&output).unwrap(), "keep me");
}

#[test]
fn directory_is_not_a_valid_input() {
    let dir = tempdir().unwrap();
    let output = dir.path().join("out.html");

    let err = convert_file(dir.path(), &output).unwrap_err();

    assert!(matches!(err, ConvertError::MissingInput(_)));
    assert!(!output.exists());
}

#[test]
fn unwritable_output_is_an_io_error() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("in.md");
    fs::write(&input, "text\n").unwrap();
    let output = dir.path().join("no-such-dir").join("out.html");

    let err = convert_file(&input, &output).unwrap_err();

    assert!(matches!(err, ConvertError::Io(_)));
}
