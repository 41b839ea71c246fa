//! PDF text extraction.

use std::path::Path;
use tracing::{error, info};

/// Extracts the full text of a PDF file.
///
/// The extractor never fails: any read or parse error is logged and an
/// empty string is returned, which the ingestion pipeline treats as a
/// failed extraction.
pub struct PdfExtractor;

impl PdfExtractor {
    pub fn extract(path: &Path) -> String {
        let bytes = match std::fs::read(path) {
            Ok(bytes) => bytes,
            Err(e) => {
                error!(path = %path.display(), "Failed to read PDF: {}", e);
                return String::new();
            }
        };

        match pdf_extract::extract_text_from_mem(&bytes) {
            Ok(text) => {
                info!(
                    path = %path.display(),
                    chars = text.len(),
                    "Extracted text from PDF"
                );
                text
            }
            Err(e) => {
                error!(path = %path.display(), "Failed to extract text from PDF: {}", e);
                String::new()
            }
        }
    }
}
