//! Tests for the overwrite-only walk report

#![allow(clippy::expect_used)]

use crate::keywords::KeywordSet;
use crate::walker::{read_walk_report, write_walk_report, WalkEntry};
use std::fs;
use tempfile::TempDir;

#[test]
fn test_write_walk_report_joins_lists() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join("walk_report.csv");
    let entry = WalkEntry::from_unit(
        "a.zip!sop_protocol.txt",
        "sop_protocol.txt",
        b"naming",
        2,
        &KeywordSet::walk_defaults(),
    );

    write_walk_report(&path, std::slice::from_ref(&entry)).expect("Failed to write report");

    let content = fs::read_to_string(&path).expect("Failed to read report");
    assert!(content.starts_with("path,name_matches,content_matches,mismatch,sha256"));

    let records = read_walk_report(&path).expect("Failed to read report");
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].path, "a.zip!sop_protocol.txt");
    assert_eq!(records[0].name_matches, "protocol;sop");
    assert_eq!(records[0].content_matches, "naming");
    assert_eq!(records[0].mismatch, "naming;protocol;sop");
    assert_eq!(records[0].sha256, entry.sha256);
}

#[test]
fn test_write_walk_report_replaces_previous_content() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join("walk_report.csv");
    fs::write(&path, "stale,data\n1,2\n3,4\n5,6\n").expect("Failed to write");

    write_walk_report(&path, &[]).expect("Failed to write report");

    let content = fs::read_to_string(&path).expect("Failed to read report");
    assert_eq!(content.trim_end(), "path,name_matches,content_matches,mismatch,sha256");
}
