//! DOCX text extraction.
//!
//! A .docx file is a zip archive; the document body lives in
//! `word/document.xml`. Paragraphs (`<w:p>`) are emitted in order, one
//! trailing newline each, including empty paragraphs so blank-line
//! structure survives. Text runs (`<w:t>`) are concatenated per paragraph.

use std::io::{Cursor, Read};

use quick_xml::events::Event;
use quick_xml::Reader;
use tracing::debug;

use super::ExtractError;

pub fn extract_text(bytes: &[u8]) -> Result<String, ExtractError> {
    let mut archive = zip::ZipArchive::new(Cursor::new(bytes))
        .map_err(|e| ExtractError::Decode(format!("corrupt DOCX archive: {}", e)))?;

    let mut xml = String::new();
    archive
        .by_name("word/document.xml")
        .map_err(|e| ExtractError::Decode(format!("DOCX is missing document body: {}", e)))?
        .read_to_string(&mut xml)
        .map_err(|e| ExtractError::Decode(format!("failed to read document body: {}", e)))?;

    parse_document_xml(&xml)
}

fn parse_document_xml(xml: &str) -> Result<String, ExtractError> {
    let mut reader = Reader::from_str(xml);
    let mut text = String::new();
    let mut paragraphs = 0usize;
    let mut in_text_run = false;

    loop {
        match reader.read_event() {
            Ok(Event::Start(e)) => {
                if e.local_name().as_ref() == b"t" {
                    in_text_run = true;
                }
            }
            Ok(Event::End(e)) => match e.local_name().as_ref() {
                b"t" => in_text_run = false,
                b"p" => {
                    text.push('\n');
                    paragraphs += 1;
                }
                _ => {}
            },
            // Self-closing <w:p/> is still a paragraph.
            Ok(Event::Empty(e)) => {
                if e.local_name().as_ref() == b"p" {
                    text.push('\n');
                    paragraphs += 1;
                }
            }
            Ok(Event::Text(t)) if in_text_run => {
                let run = t
                    .unescape()
                    .map_err(|e| ExtractError::Decode(format!("malformed document XML: {}", e)))?;
                text.push_str(&run);
            }
            Ok(Event::Eof) => break,
            Err(e) => {
                return Err(ExtractError::Decode(format!(
                    "malformed document XML: {}",
                    e
                )))
            }
            _ => {}
        }
    }

    debug!(paragraphs, chars = text.len(), "Extracted DOCX text");
    Ok(text)
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    /// Build a minimal .docx archive containing the given document body.
    fn build_docx(body: &str) -> Vec<u8> {
        let xml = format!(
            r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<w:document xmlns:w="http://schemas.openxmlformats.org/wordprocessingml/2006/main">
<w:body>{}</w:body></w:document>"#,
            body
        );
        let mut writer = zip::ZipWriter::new(Cursor::new(Vec::new()));
        writer
            .start_file("word/document.xml", zip::write::SimpleFileOptions::default())
            .unwrap();
        writer.write_all(xml.as_bytes()).unwrap();
        writer.finish().unwrap().into_inner()
    }

    #[test]
    fn paragraphs_become_lines_in_order() {
        let bytes = build_docx(
            "<w:p><w:r><w:t>Landlord and Tenant</w:t></w:r></w:p>\
             <w:p><w:r><w:t>Rent is due monthly.</w:t></w:r></w:p>",
        );
        let text = extract_text(&bytes).unwrap();
        assert_eq!(text, "Landlord and Tenant\nRent is due monthly.\n");
    }

    #[test]
    fn empty_paragraphs_preserve_blank_lines() {
        let bytes = build_docx(
            "<w:p><w:r><w:t>Section 1</w:t></w:r></w:p>\
             <w:p/>\
             <w:p><w:r><w:t>Section 2</w:t></w:r></w:p>",
        );
        let text = extract_text(&bytes).unwrap();
        assert_eq!(text, "Section 1\n\nSection 2\n");
        // Exactly one line per paragraph.
        assert_eq!(text.split('\n').count() - 1, 3);
    }

    #[test]
    fn split_text_runs_are_joined_within_a_paragraph() {
        let bytes = build_docx(
            "<w:p><w:r><w:t>Security </w:t></w:r><w:r><w:t>deposit</w:t></w:r></w:p>",
        );
        assert_eq!(extract_text(&bytes).unwrap(), "Security deposit\n");
    }

    #[test]
    fn corrupt_archive_is_a_decode_error() {
        let result = extract_text(b"PK\x03\x04 truncated");
        assert!(matches!(result, Err(ExtractError::Decode(_))));
    }

    #[test]
    fn archive_without_document_body_is_a_decode_error() {
        let mut writer = zip::ZipWriter::new(Cursor::new(Vec::new()));
        writer
            .start_file("word/other.xml", zip::write::SimpleFileOptions::default())
            .unwrap();
        writer.write_all(b"<x/>").unwrap();
        let bytes = writer.finish().unwrap().into_inner();
        assert!(matches!(extract_text(&bytes), Err(ExtractError::Decode(_))));
    }
}
