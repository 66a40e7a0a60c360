//! Upload text extraction for `.txt` and `.pdf` resumes.
//!
//! Output is always normalized: lines trimmed, blank lines dropped. Prompts are
//! built straight from this text, so stray whitespace would leak into them.

use std::path::Path;

use thiserror::Error;

/// Largest accepted upload (10 MiB).
pub const MAX_UPLOAD_BYTES: usize = 10 * 1024 * 1024;

#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("File too large: {size} bytes exceeds the {limit} byte limit")]
    TooLarge { size: usize, limit: usize },

    #[error("Unsupported file format '{0}'. Supported formats: TXT, PDF only")]
    UnsupportedFormat(String),

    #[error("No text extracted from document. Try a different PDF or convert to TXT.")]
    EmptyExtraction,

    #[error("File parsing error: {0}")]
    ParseFailure(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum DocumentFormat {
    Text,
    Pdf,
}

impl DocumentFormat {
    fn from_filename(filename: &str) -> Result<Self, ExtractError> {
        let extension = Path::new(filename)
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase());

        match extension.as_deref() {
            Some("txt") => Ok(DocumentFormat::Text),
            Some("pdf") => Ok(DocumentFormat::Pdf),
            _ => Err(ExtractError::UnsupportedFormat(filename.to_string())),
        }
    }
}

/// Extracts normalized plain text from an uploaded document.
///
/// Size is checked before anything else. PDF parsing is CPU-bound; async
/// callers should run this on the blocking pool.
pub fn extract_text(bytes: &[u8], filename: &str) -> Result<String, ExtractError> {
    if bytes.len() > MAX_UPLOAD_BYTES {
        return Err(ExtractError::TooLarge {
            size: bytes.len(),
            limit: MAX_UPLOAD_BYTES,
        });
    }

    let raw = match DocumentFormat::from_filename(filename)? {
        DocumentFormat::Text => std::str::from_utf8(bytes)
            .map_err(|e| ExtractError::ParseFailure(format!("TXT is not valid UTF-8: {e}")))?
            .to_string(),
        DocumentFormat::Pdf => extract_pdf_pages(bytes)?.join("\n"),
    };

    let cleaned = clean_text(&raw);
    if cleaned.is_empty() {
        return Err(ExtractError::EmptyExtraction);
    }
    Ok(cleaned)
}

fn extract_pdf_pages(bytes: &[u8]) -> Result<Vec<String>, ExtractError> {
    // pdf-extract panics on some malformed documents instead of returning Err.
    std::panic::catch_unwind(|| pdf_extract::extract_text_from_mem_by_pages(bytes))
        .map_err(|_| ExtractError::ParseFailure("PDF parsing failed: malformed document".into()))?
        .map_err(|e| ExtractError::ParseFailure(format!("PDF parsing failed: {e}")))
}

/// Trims every line and drops blank ones.
pub fn clean_text(text: &str) -> String {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}
