use std::fs;
use std::process::{Command, Output};
use tempfile::tempdir;

fn extract_quotes(dir: &std::path::Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_extract-quotes"))
        .args(args)
        .current_dir(dir)
        .env("RUST_LOG", "warn")
        .output()
        .unwrap()
}

#[test]
fn test_no_argument_prints_usage() {
    let dir = tempdir().unwrap();
    let output = extract_quotes(dir.path(), &[]);

    assert_eq!(output.status.code(), Some(2));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Usage"));
}

#[test]
fn test_help_shows_example() {
    let dir = tempdir().unwrap();
    let output = extract_quotes(dir.path(), &["--help"]);

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("extract-quotes my_hindi_book.pdf"));
}

#[test]
fn test_missing_pdf_fails_without_outputs() {
    let dir = tempdir().unwrap();
    let output = extract_quotes(dir.path(), &["absent.pdf"]);

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("not found"));
    assert!(stderr.contains("Extraction failed"));
    assert!(!stderr.contains("node server.js"));
    assert!(!dir.path().join("book.txt").exists());
    assert!(!dir.path().join("quotes.json").exists());
}

#[test]
fn test_garbage_pdf_fails_without_outputs() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("broken.pdf"), b"not really a pdf").unwrap();

    let output = extract_quotes(dir.path(), &["broken.pdf"]);

    assert_eq!(output.status.code(), Some(1));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(!stdout.contains("node server.js"));
    assert!(!dir.path().join("book.txt").exists());
    assert!(!dir.path().join("quotes.json").exists());
}
