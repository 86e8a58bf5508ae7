//! Plain-text extraction from the downloaded resume PDF.

use std::path::Path;

use thiserror::Error;

/// Extraction failures are a single class: the document could not be parsed
/// (corrupt header, encryption, unsupported structure). No partial text is
/// returned on failure.
#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("could not parse PDF: {0}")]
    Parse(#[from] pdf_extract::OutputError),
}

/// Extracts the text layer of every page, in page order.
///
/// Pages with no recoverable text (e.g. scanned images) are skipped; each
/// extracted page is followed by a single newline and the final result is
/// trimmed. An empty result is valid here; whether that fails the request
/// is the pipeline's call, not the extractor's.
///
/// Synchronous and CPU-bound; run it under `spawn_blocking` on the server
/// runtime.
pub fn extract_text(path: &Path) -> Result<String, ExtractError> {
    let pages = pdf_extract::extract_text_by_pages(path)?;

    let mut text = String::new();
    for page in &pages {
        if !page.is_empty() {
            text.push_str(page);
            text.push('\n');
        }
    }
    Ok(text.trim().to_string())
}
