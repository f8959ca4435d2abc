//! Integration tests for file-to-file conversion.

use std::fs;
use std::io::{Cursor, Write};
use std::path::Path;

use docxhtml::convert::{convert_bytes, convert_file, ConvertOptions};
use docxhtml::Error;
use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipWriter};

fn write_docx(path: &Path, body: &str) {
    let document = format!(
        r#"<?xml version="1.0" encoding="UTF-8"?><w:document xmlns:w="http://schemas.openxmlformats.org/wordprocessingml/2006/main"><w:body>{}</w:body></w:document>"#,
        body
    );
    let mut writer = ZipWriter::new(Cursor::new(Vec::new()));
    let options = SimpleFileOptions::default().compression_method(CompressionMethod::Stored);
    writer.start_file("word/document.xml", options).unwrap();
    writer.write_all(document.as_bytes()).unwrap();
    let data = writer.finish().unwrap().into_inner();
    fs::write(path, data).unwrap();
}

const TABLE_BODY: &str = r#"<w:tbl>
  <w:tr><w:tc><w:tcPr><w:vMerge w:val="restart"/></w:tcPr><w:p><w:r><w:t>Mon</w:t></w:r></w:p></w:tc><w:tc><w:p><w:r><w:t>9:00</w:t></w:r></w:p></w:tc></w:tr>
  <w:tr><w:tc><w:tcPr><w:vMerge/></w:tcPr><w:p/></w:tc><w:tc><w:p><w:r><w:t>10:00</w:t></w:r></w:p></w:tc></w:tr>
</w:tbl>"#;

#[test]
fn test_convert_writes_html_next_to_source() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("week.docx");
    write_docx(&input, TABLE_BODY);

    let outcome = convert_file(&input, &ConvertOptions::default()).unwrap();

    assert_eq!(outcome.output_path, dir.path().join("week.html"));
    assert_eq!(outcome.stats.table_count, 1);
    assert_eq!(outcome.stats.merged_cell_count, 1);

    let html = fs::read_to_string(&outcome.output_path).unwrap();
    assert!(html.starts_with("<!DOCTYPE html>"));
    assert!(html.contains(r#"rowspan="2""#));
    assert!(html.ends_with("</html>"));
}

#[test]
fn test_convert_accepts_uppercase_extension() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("WEEK.DOCX");
    write_docx(&input, r#"<w:p><w:r><w:t>x</w:t></w:r></w:p>"#);

    let outcome = convert_file(&input, &ConvertOptions::new().with_title("Week")).unwrap();
    assert_eq!(outcome.output_path, dir.path().join("WEEK.html"));

    let html = fs::read_to_string(&outcome.output_path).unwrap();
    assert!(html.contains("<title>Week</title>"));
}

#[test]
fn test_wrong_extension_is_rejected_before_reading() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("week.doc");
    write_docx(&input, "");

    let result = convert_file(&input, &ConvertOptions::default());
    assert!(matches!(result, Err(Error::Usage(_))));
    assert!(!dir.path().join("week.html").exists());
}

#[test]
fn test_corrupt_source_leaves_no_output() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("broken.docx");
    fs::write(&input, b"this is not a zip archive").unwrap();

    let result = convert_file(&input, &ConvertOptions::default());
    assert!(matches!(result, Err(Error::SourceOpen { .. })));
    assert!(!dir.path().join("broken.html").exists());
}

#[test]
fn test_unwritable_destination() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("week.docx");
    write_docx(&input, TABLE_BODY);
    // A directory where the output file should go makes the write fail.
    fs::create_dir(dir.path().join("week.html")).unwrap();

    let result = convert_file(&input, &ConvertOptions::default());
    match result {
        Err(Error::OutputWrite { path, .. }) => assert_eq!(path, dir.path().join("week.html")),
        other => panic!("expected OutputWrite, got {:?}", other.map(|o| o.output_path)),
    }
}

#[test]
fn test_convert_bytes_in_memory() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("week.docx");
    write_docx(&input, TABLE_BODY);
    let data = fs::read(&input).unwrap();

    let result = convert_bytes(&data, &ConvertOptions::default()).unwrap();
    assert_eq!(result.stats.cell_count, 3);
    assert!(result.content.contains("10:00"));
}
