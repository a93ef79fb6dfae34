//! Tests for digest row parsing and discovery

#![allow(clippy::expect_used)]

use crate::digest::{
    find_digest_files, is_digest_file_name, parse_row, report_path_of, scan_digest_file,
};
use crate::error::ScanError;
use crate::keywords::KeywordSet;
use rstest::rstest;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

#[test]
fn test_parse_row_extracts_thread_and_title() {
    let row = parse_row("| TH007 | Protocol Review Notes | extra |").expect("row should parse");
    assert_eq!(row.thread_id, "TH007");
    assert_eq!(row.title, "Protocol Review Notes");
}

#[test]
fn test_parse_row_allows_leading_whitespace() {
    let row = parse_row("   |TH12|  Naming scheme  |").expect("row should parse");
    assert_eq!(row.thread_id, "TH12");
    assert_eq!(row.title, "Naming scheme");
}

#[test]
fn test_parse_row_truncates_title_at_pipe() {
    let row = parse_row("| TH3 | SOP a|b | x |").expect("row should parse");
    assert_eq!(row.title, "SOP a");
}

#[rstest]
#[case("Random text")]
#[case("| Thread | Title |")]
#[case("|---|---|")]
#[case("| TH | missing digits |")]
#[case("| TH9 | no closing pipe")]
#[case("")]
fn test_parse_row_rejects_non_rows(#[case] line: &str) {
    assert_eq!(parse_row(line), None);
}

#[rstest]
#[case("PR1_THREAD_DIGEST.md", true)]
#[case("PR0042_THREAD_DIGEST.md", true)]
#[case("PR_THREAD_DIGEST.md", false)]
#[case("PRx1_THREAD_DIGEST.md", false)]
#[case("PR1_THREAD_DIGEST.md.bak", false)]
#[case("pr1_thread_digest.md", false)]
fn test_is_digest_file_name(#[case] name: &str, #[case] expected: bool) {
    assert_eq!(is_digest_file_name(name), expected);
}

#[test]
fn test_find_digest_files_is_sorted_and_non_recursive() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let dir = temp_dir.path();
    fs::write(dir.join("PR2_THREAD_DIGEST.md"), "").expect("Failed to write file");
    fs::write(dir.join("PR10_THREAD_DIGEST.md"), "").expect("Failed to write file");
    fs::write(dir.join("PR1_THREAD_DIGEST.md"), "").expect("Failed to write file");
    fs::write(dir.join("notes.md"), "").expect("Failed to write file");
    fs::create_dir(dir.join("nested")).expect("Failed to create dir");
    fs::write(dir.join("nested/PR3_THREAD_DIGEST.md"), "").expect("Failed to write file");

    let files = find_digest_files(dir).expect("Failed to list digests");
    let names: Vec<_> = files
        .iter()
        .filter_map(|p| p.file_name().and_then(|n| n.to_str()))
        .collect();

    assert_eq!(
        names,
        vec![
            "PR10_THREAD_DIGEST.md",
            "PR1_THREAD_DIGEST.md",
            "PR2_THREAD_DIGEST.md"
        ]
    );
}

#[test]
fn test_find_digest_files_missing_dir_is_empty() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let files =
        find_digest_files(&temp_dir.path().join("absent")).expect("Missing dir is not an error");
    assert!(files.is_empty());
}

#[test]
fn test_scan_digest_file_records_first_keyword() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join("PR1_THREAD_DIGEST.md");
    fs::write(
        &path,
        "# Digest\n\n\
         | ID | Title |\n\
         |----|-------|\n\
         | TH007 | Protocol Review Notes | extra |\n\
         | TH008 | SOP and protocol update | x |\n\
         | TH009 | Lunch plans | x |\n\
         Random text\n",
    )
    .expect("Failed to write file");

    let keywords = KeywordSet::new(["sop", "protocol"]);
    let matches = scan_digest_file(&path, &keywords).expect("Failed to scan digest");

    assert_eq!(matches.len(), 2);
    assert_eq!(matches[0].thread_id, "TH007");
    assert_eq!(matches[0].title, "Protocol Review Notes");
    assert_eq!(matches[0].keyword, "protocol");
    assert_eq!(matches[0].digest_path, path.display().to_string());
    assert_eq!(matches[1].thread_id, "TH008");
    assert_eq!(matches[1].keyword, "sop");
}

#[test]
fn test_scan_digest_file_without_rows_is_empty() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join("PR1_THREAD_DIGEST.md");
    fs::write(&path, "nothing tabular here\n").expect("Failed to write file");

    let matches =
        scan_digest_file(&path, &KeywordSet::digest_defaults()).expect("Failed to scan digest");
    assert!(matches.is_empty());
}

#[test]
fn test_scan_digest_file_missing_is_error() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join("PR404_THREAD_DIGEST.md");

    let result = scan_digest_file(&path, &KeywordSet::digest_defaults());
    assert!(matches!(result, Err(ScanError::Io { .. })));
}

#[test]
fn test_scan_digest_file_empty_keywords_match_nothing() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join("PR1_THREAD_DIGEST.md");
    fs::write(&path, "| TH1 | Protocol |\n").expect("Failed to write file");

    let matches =
        scan_digest_file(&path, &KeywordSet::parse_list("")).expect("Failed to scan digest");
    assert!(matches.is_empty());
}

#[rstest]
#[case("./ARCHIVAL_STACK/PR1_THREAD_DIGEST.md", "ARCHIVAL_STACK/PR1_THREAD_DIGEST.md")]
#[case("./PR1_THREAD_DIGEST.md", "PR1_THREAD_DIGEST.md")]
#[case("ARCHIVAL_STACK/./PR1_THREAD_DIGEST.md", "ARCHIVAL_STACK/PR1_THREAD_DIGEST.md")]
#[case("ARCHIVAL_STACK/PR1_THREAD_DIGEST.md", "ARCHIVAL_STACK/PR1_THREAD_DIGEST.md")]
fn test_report_path_of_drops_current_dir(#[case] path: &str, #[case] expected: &str) {
    assert_eq!(report_path_of(Path::new(path)), expected);
}
