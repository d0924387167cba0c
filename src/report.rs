//! PDF rendering of a plain-text summary.
//!
//! Renders a "Legal Summary" title followed by the summary text, one
//! source line per paragraph, onto A4 pages. The output path is a single
//! reusable file overwritten on every call; concurrent report requests
//! racing on the same path are a documented limitation.

use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use printpdf::{BuiltinFont, Mm, PdfDocument};
use thiserror::Error;
use tracing::info;

const PAGE_WIDTH_MM: f32 = 210.0;
const PAGE_HEIGHT_MM: f32 = 297.0;
const MARGIN_MM: f32 = 20.0;
const TITLE_SIZE_PT: f32 = 18.0;
const BODY_SIZE_PT: f32 = 11.0;
const LINE_STEP_MM: f32 = 6.0;
/// Characters per body line at 11pt Helvetica inside the margins.
const WRAP_WIDTH: usize = 90;

/// Errors while rendering the report.
#[derive(Debug, Error)]
pub enum ReportError {
    #[error("failed to write report: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to render report: {0}")]
    Render(String),
}

/// Render `summary` as a PDF at `path`, overwriting any previous report.
pub fn write_summary(path: &Path, summary: &str) -> Result<(), ReportError> {
    let (doc, page, layer) = PdfDocument::new(
        "Legal Summary",
        Mm(PAGE_WIDTH_MM),
        Mm(PAGE_HEIGHT_MM),
        "Layer 1",
    );
    let font = doc
        .add_builtin_font(BuiltinFont::Helvetica)
        .map_err(|e| ReportError::Render(e.to_string()))?;

    let mut current = doc.get_page(page).get_layer(layer);
    let mut y = PAGE_HEIGHT_MM - MARGIN_MM;

    current.use_text("Legal Summary", TITLE_SIZE_PT, Mm(MARGIN_MM), Mm(y), &font);
    y -= 2.0 * LINE_STEP_MM;

    for line in summary.split('\n') {
        for chunk in wrap_line(line, WRAP_WIDTH) {
            if y < MARGIN_MM {
                let (next_page, next_layer) =
                    doc.add_page(Mm(PAGE_WIDTH_MM), Mm(PAGE_HEIGHT_MM), "Layer 1");
                current = doc.get_page(next_page).get_layer(next_layer);
                y = PAGE_HEIGHT_MM - MARGIN_MM;
            }
            if !chunk.is_empty() {
                current.use_text(chunk, BODY_SIZE_PT, Mm(MARGIN_MM), Mm(y), &font);
            }
            y -= LINE_STEP_MM;
        }
    }

    let file = File::create(path)?;
    doc.save(&mut BufWriter::new(file))
        .map_err(|e| ReportError::Render(e.to_string()))?;

    info!(path = %path.display(), "Wrote summary report");
    Ok(())
}

/// Greedy word wrap; tokens longer than `width` are split hard.
fn wrap_line(line: &str, width: usize) -> Vec<String> {
    if line.chars().count() <= width {
        return vec![line.to_string()];
    }

    let mut out = Vec::new();
    let mut current = String::new();
    for word in line.split_whitespace() {
        let word_len = word.chars().count();
        let current_len = current.chars().count();
        if current_len > 0 && current_len + 1 + word_len > width {
            out.push(std::mem::take(&mut current));
        }
        if word_len > width {
            // Hard-split an unbreakable token across lines.
            let mut rest: Vec<char> = word.chars().collect();
            while rest.len() > width {
                let tail = rest.split_off(width);
                out.push(rest.iter().collect());
                rest = tail;
            }
            current = rest.iter().collect();
        } else {
            if !current.is_empty() {
                current.push(' ');
            }
            current.push_str(word);
        }
    }
    if !current.is_empty() {
        out.push(current);
    }
    if out.is_empty() {
        out.push(String::new());
    }
    out
}
