//! PDF text extraction via lopdf.

use tracing::debug;

use super::ExtractError;

/// Extract text from a PDF, page by page in document order.
///
/// Each page that yields text is appended with a trailing newline. Pages
/// with no extractable text (scans, blanks, or pages whose content stream
/// fails to parse) contribute nothing.
pub fn extract_text(bytes: &[u8]) -> Result<String, ExtractError> {
    let doc = lopdf::Document::load_mem(bytes)
        .map_err(|e| ExtractError::Decode(format!("corrupt PDF: {}", e)))?;

    let pages = doc.get_pages();
    let page_count = pages.len();
    let mut text = String::new();

    for page_number in pages.into_keys() {
        let page_text = match doc.extract_text(&[page_number]) {
            Ok(t) => t,
            Err(e) => {
                debug!(page = page_number, error = %e, "Skipping unextractable page");
                continue;
            }
        };
        if page_text.trim().is_empty() {
            continue;
        }
        text.push_str(&page_text);
        if !text.ends_with('\n') {
            text.push('\n');
        }
    }

    debug!(pages = page_count, chars = text.len(), "Extracted PDF text");
    Ok(text)
}
