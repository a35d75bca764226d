// src/document/pdf.rs
use crate::utils::error::PdfError;
use lopdf::Document;
use std::path::Path;

/// Reads the input document and returns its flat text.
///
/// With `from_text` the file is taken as already-extracted UTF-8 text;
/// otherwise it is loaded as a PDF and its text layer is pulled page by page.
pub fn load_document_text(path: &Path, from_text: bool) -> Result<String, PdfError> {
    let bytes = std::fs::read(path)?;
    tracing::info!("Read {} bytes from {}", bytes.len(), path.display());

    if from_text {
        return Ok(String::from_utf8(bytes)?);
    }
    extract_text_from_pdf(&bytes)
}

/// Concatenates the text of every page in page order.
pub fn extract_text_from_pdf(bytes: &[u8]) -> Result<String, PdfError> {
    let doc = Document::load_mem(bytes).map_err(|e| PdfError::Load(e.to_string()))?;

    let pages = doc.get_pages();
    tracing::debug!("PDF has {} page(s)", pages.len());

    let mut text = String::new();
    for page_number in pages.keys() {
        let page_text = doc
            .extract_text(&[*page_number])
            .map_err(|e| PdfError::PageText {
                page: *page_number,
                reason: e.to_string(),
            })?;
        text.push_str(&page_text);
    }

    if text.trim().is_empty() {
        tracing::warn!("PDF has no extractable text layer");
    }
    tracing::info!("Extracted {} characters of text", text.len());
    Ok(text)
}
