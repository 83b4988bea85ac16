use super::{extract_headings, read_document, write_document};
use crate::document::DocumentAccessor;
use crate::formats::markdown::MarkdownFormat;
use crate::numbering::number_headings;
use crate::settings::Settings;
use std::fs;
use std::io::Write;
use tempfile::NamedTempFile;

#[test]
fn test_extract_headings_levels_and_lines() {
    let source = "# One\n\n## Two\n\n### Three\n\n###### Six\n";

    let headings = extract_headings(source, &MarkdownFormat).unwrap();

    let summary: Vec<(usize, &str, usize)> = headings
        .iter()
        .map(|h| (h.level, h.text.as_str(), h.line))
        .collect();
    assert_eq!(
        summary,
        vec![(1, "One", 0), (2, "Two", 2), (3, "Three", 4), (6, "Six", 6)]
    );
}

#[test]
fn test_extract_headings_ignores_code_blocks() {
    let source = "# Real\n\n```sh\n# not a heading\n```\n\n## Also Real\n";

    let headings = extract_headings(source, &MarkdownFormat).unwrap();

    assert_eq!(headings.len(), 2);
    assert_eq!(headings[0].text, "Real");
    assert_eq!(headings[1].text, "Also Real");
    assert_eq!(headings[1].line, 6);
}

#[test]
fn test_extract_headings_keeps_existing_numbering_in_text() {
    let headings = extract_headings("## 1.2. Scope\n", &MarkdownFormat).unwrap();

    assert_eq!(headings[0].text, "1.2. Scope");
}

#[test]
fn test_read_number_write_round_trip() {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, "# Intro\n\ntext\n\n## Background\n").unwrap();
    file.flush().unwrap();
    let path = file.path().to_path_buf();

    let mut doc = read_document(&path).unwrap();
    let plan = number_headings(&doc, &Settings::default());
    doc.apply(&plan).unwrap();
    write_document(&path, &doc).unwrap();

    let content = fs::read_to_string(&path).unwrap();
    assert_eq!(content, "# 1. Intro\n\ntext\n\n## 1.1. Background\n");
}

#[test]
fn test_read_missing_file_fails() {
    let dir = tempfile::tempdir().unwrap();

    assert!(read_document(&dir.path().join("missing.md")).is_err());
}
