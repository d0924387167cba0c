//! Text extraction from uploaded documents.
//!
//! Converts a payload of declared format (txt, pdf, docx) into a single
//! normalized plain-text string. Pages and paragraphs are emitted in source
//! order, each followed by a newline; nothing is reordered, deduplicated,
//! or whitespace-normalized beyond what the source units yield.

mod docx;
mod pdf;

use thiserror::Error;

/// Supported document formats, declared by file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentFormat {
    Txt,
    Pdf,
    Docx,
}

impl DocumentFormat {
    /// Resolve a format from a file extension (without the dot).
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_ascii_lowercase().as_str() {
            "txt" => Some(Self::Txt),
            "pdf" => Some(Self::Pdf),
            "docx" => Some(Self::Docx),
            _ => None,
        }
    }

    /// Resolve a format from a filename's extension.
    pub fn from_filename(filename: &str) -> Option<Self> {
        let (_, ext) = filename.rsplit_once('.')?;
        Self::from_extension(ext)
    }
}

/// A document to be normalized into plain text.
#[derive(Debug, Clone)]
pub enum DocumentPayload {
    /// Text pasted directly by the caller.
    Inline(String),
    /// An uploaded file of declared format.
    File {
        bytes: Vec<u8>,
        format: DocumentFormat,
    },
}

/// Errors that can occur during text extraction.
#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("Unsupported file type.")]
    UnsupportedFormat,

    #[error("failed to decode document: {0}")]
    Decode(String),
}

/// Resolve a filename's declared format, rejecting unsupported extensions
/// before any decoder is involved.
pub fn format_for(filename: &str) -> Result<DocumentFormat, ExtractError> {
    DocumentFormat::from_filename(filename).ok_or(ExtractError::UnsupportedFormat)
}

/// Extract normalized text from a payload.
///
/// Inline text passes through unchanged. Files are decoded according to
/// their declared format; a corrupt file fails the whole request, but a
/// page or paragraph with no extractable text is skipped, never an error.
pub fn extract(payload: DocumentPayload) -> Result<String, ExtractError> {
    match payload {
        DocumentPayload::Inline(text) => Ok(text),
        DocumentPayload::File { bytes, format } => match format {
            DocumentFormat::Txt => extract_txt(bytes),
            DocumentFormat::Pdf => pdf::extract_text(&bytes),
            DocumentFormat::Docx => docx::extract_text(&bytes),
        },
    }
}

/// Decode a plain-text upload as strict UTF-8. No fallback encoding.
fn extract_txt(bytes: Vec<u8>) -> Result<String, ExtractError> {
    String::from_utf8(bytes)
        .map_err(|e| ExtractError::Decode(format!("invalid UTF-8 in text file: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_from_extension_is_case_insensitive() {
        assert_eq!(DocumentFormat::from_extension("PDF"), Some(DocumentFormat::Pdf));
        assert_eq!(DocumentFormat::from_extension("txt"), Some(DocumentFormat::Txt));
        assert_eq!(DocumentFormat::from_extension("Docx"), Some(DocumentFormat::Docx));
        assert_eq!(DocumentFormat::from_extension("doc"), None);
        assert_eq!(DocumentFormat::from_extension("html"), None);
    }

    #[test]
    fn format_from_filename_uses_last_extension() {
        assert_eq!(
            DocumentFormat::from_filename("lease.2024.pdf"),
            Some(DocumentFormat::Pdf)
        );
        assert_eq!(DocumentFormat::from_filename("noextension"), None);
        assert_eq!(DocumentFormat::from_filename("archive.tar.gz"), None);
    }

    #[test]
    fn unsupported_extension_is_rejected_before_decoding() {
        let err = format_for("malware.exe").unwrap_err();
        assert!(matches!(err, ExtractError::UnsupportedFormat));
        assert_eq!(err.to_string(), "Unsupported file type.");
    }

    #[test]
    fn inline_text_passes_through() {
        let text = extract(DocumentPayload::Inline("Lease between A and B".into())).unwrap();
        assert_eq!(text, "Lease between A and B");
    }

    #[test]
    fn txt_decodes_utf8() {
        let payload = DocumentPayload::File {
            bytes: "Tenant agrees to pay rent.\n".as_bytes().to_vec(),
            format: DocumentFormat::Txt,
        };
        assert_eq!(extract(payload).unwrap(), "Tenant agrees to pay rent.\n");
    }

    #[test]
    fn txt_rejects_invalid_utf8() {
        let payload = DocumentPayload::File {
            bytes: vec![0xff, 0xfe, 0x00],
            format: DocumentFormat::Txt,
        };
        assert!(matches!(extract(payload), Err(ExtractError::Decode(_))));
    }
}
