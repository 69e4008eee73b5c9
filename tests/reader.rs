use std::fs;
use std::path::PathBuf;

use intfile::{int_from_file, parse_int, ParseFailure, ReadError};
use quickcheck_macros::quickcheck;
use tempfile::TempDir;

fn write_input(dir: &TempDir, contents: impl AsRef<[u8]>) -> PathBuf {
    let path = dir.path().join("input.txt");
    fs::write(&path, contents).expect("Failed to write input file");
    path
}

#[quickcheck]
fn file_round_trip(n: i64) -> bool {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = write_input(&dir, n.to_string());
    int_from_file(&path).ok() == Some(n)
}

#[quickcheck]
fn text_round_trip(n: i64) -> bool {
    parse_int(&n.to_string()) == Ok(n)
}

#[test]
fn reads_positive_value() {
    let dir = TempDir::new().unwrap();
    let path = write_input(&dir, "42");
    assert_eq!(int_from_file(&path).unwrap(), 42);
}

#[test]
fn reads_negative_value() {
    let dir = TempDir::new().unwrap();
    let path = write_input(&dir, "-7");
    assert_eq!(int_from_file(&path).unwrap(), -7);
}

#[test]
fn trims_trailing_newline() {
    let dir = TempDir::new().unwrap();
    let path = write_input(&dir, "42\n");
    assert_eq!(int_from_file(&path).unwrap(), 42);
}

#[test]
fn missing_file_is_not_found() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("does-not-exist");

    let err = int_from_file(&path).unwrap_err();
    assert!(err.is_not_found(), "unexpected error: {err:?}");
    assert_eq!(err.path(), path.as_path());
    match err {
        ReadError::FileNotFound { source, .. } => {
            assert_eq!(source.kind(), std::io::ErrorKind::NotFound)
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn directory_is_not_found() {
    let dir = TempDir::new().unwrap();
    let err = int_from_file(dir.path()).unwrap_err();
    assert!(err.is_not_found(), "unexpected error: {err:?}");
}

#[test]
fn invalid_contents_are_parse_errors() {
    for contents in ["", "abc", "12.5", "hello", "4 2"] {
        let dir = TempDir::new().unwrap();
        let path = write_input(&dir, contents);
        let err = int_from_file(&path).unwrap_err();
        assert!(err.is_parse(), "{contents:?} gave {err:?}");
        assert!(
            matches!(
                err,
                ReadError::Parse {
                    source: ParseFailure::Integer(_),
                    ..
                }
            ),
            "{contents:?} gave {err:?}"
        );
    }
}

#[test]
fn non_utf8_contents_are_parse_errors() {
    let dir = TempDir::new().unwrap();
    let path = write_input(&dir, b"4\xff2");
    let err = int_from_file(&path).unwrap_err();
    assert!(
        matches!(
            err,
            ReadError::Parse {
                source: ParseFailure::NotUtf8(_),
                ..
            }
        ),
        "unexpected error: {err:?}"
    );
}

#[test]
fn error_messages_name_the_file() {
    let dir = TempDir::new().unwrap();
    let path = write_input(&dir, "hello");
    let message = int_from_file(&path).unwrap_err().to_string();
    assert!(message.contains("input.txt"), "message was {message}");
}
