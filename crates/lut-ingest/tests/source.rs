//! Integration tests for reading and normalizing source tables.

use std::fs;

use lut_ingest::{parse_cabac_init_line, read_source_lines, source_lines};
use lut_model::LutError;

#[test]
fn reads_lines_in_file_order() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("table.txt");
    fs::write(&path, "0 1 2\r\n\r\n3 4 5\n").unwrap();

    let raw = read_source_lines(&path).unwrap();
    assert_eq!(raw.len(), 3);

    let lines = source_lines(&raw);
    assert_eq!(lines.len(), 2);
    assert_eq!(lines[0].number, 1);
    assert_eq!(lines[0].text, "0 1 2");
    assert_eq!(lines[1].number, 3);
    assert_eq!(lines[1].text, "3 4 5");
}

#[test]
fn missing_file_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("absent.txt");

    let err = read_source_lines(&path).unwrap_err();
    match err {
        LutError::Io {
            operation,
            path: reported,
            ..
        } => {
            assert_eq!(operation, "read");
            assert_eq!(reported, path);
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn minus_variants_parse_to_identical_fields() {
    let raw = [
        "0 20 \u{2212}15 20 \u{2212}15 20 \u{2212}15 20 \u{2212}15",
        "0 20 \u{e2}\u{2c6}\u{2019}15 20 \u{e2}\u{2c6}\u{2019}15 20 \u{e2}\u{2c6}\u{2019}15 20 \u{e2}\u{2c6}\u{2019}15",
    ];
    let lines = source_lines(&raw);

    let unicode = parse_cabac_init_line(&lines[0]).unwrap();
    let misdecoded = parse_cabac_init_line(&lines[1]).unwrap();
    assert_eq!(unicode, misdecoded);
}
