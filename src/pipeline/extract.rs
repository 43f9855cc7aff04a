//! Text extraction: PDF bytes → plain text, page by page, via `lopdf`.
//!
//! ## Why spawn_blocking?
//!
//! Parsing a PDF is CPU-bound and a large document can take seconds.
//! `tokio::task::spawn_blocking` keeps that work off the async worker
//! threads. It also isolates the parser: a panic on a malformed file is
//! reported as [`ExtractError::Internal`] through the `JoinError` instead of
//! taking the process down.
//!
//! ## Failure contract
//!
//! [`extract`] never returns an error. Failures are logged and carried in
//! [`Extraction::error`] next to an empty text, so the caller can show the
//! message and fall back to its idle state without unwinding anything.

use crate::error::ExtractError;
use crate::output::{Document, ExtractedText};
use lopdf::Document as PdfDocument;
use tracing::{debug, error, info};

const PDF_MAGIC: &[u8] = b"%PDF";

/// Outcome of [`extract`]: the text, and the error if extraction failed.
///
/// On failure `content` is empty.
#[derive(Debug, Clone, Default)]
pub struct Extraction {
    pub content: ExtractedText,
    pub error: Option<ExtractError>,
}

impl Extraction {
    pub fn text(&self) -> &str {
        &self.content.text
    }

    /// Convert into a `Result`, for callers that treat failure as fatal.
    pub fn into_result(self) -> Result<ExtractedText, ExtractError> {
        match self.error {
            Some(e) => Err(e),
            None => Ok(self.content),
        }
    }
}

/// Extract the text of every page of `document`, in page order.
pub async fn extract(document: &Document) -> Extraction {
    let bytes = document.bytes.clone();

    let result = tokio::task::spawn_blocking(move || extract_text_blocking(&bytes))
        .await
        .unwrap_or_else(|e| Err(ExtractError::Internal(format!("extraction task failed: {e}"))));

    match result {
        Ok(content) => {
            info!(
                "Extracted {} chars from {} pages of '{}'",
                content.char_count(),
                content.page_count,
                document.name
            );
            Extraction {
                content,
                error: None,
            }
        }
        Err(e) => {
            error!("Failed to extract text from '{}': {}", document.name, e);
            Extraction {
                content: ExtractedText::default(),
                error: Some(e),
            }
        }
    }
}

/// Blocking implementation of text extraction.
///
/// Page texts are concatenated with no separator, so the last word of one
/// page can run into the first word of the next.
pub fn extract_text_blocking(bytes: &[u8]) -> Result<ExtractedText, ExtractError> {
    if bytes.is_empty() {
        return Err(ExtractError::EmptyInput);
    }
    if !bytes.starts_with(PDF_MAGIC) {
        return Err(ExtractError::NotAPdf {
            magic: bytes[..bytes.len().min(PDF_MAGIC.len())].to_vec(),
        });
    }

    let document = PdfDocument::load_mem(bytes).map_err(|e| ExtractError::Parse {
        detail: e.to_string(),
    })?;

    // BTreeMap keyed by 1-indexed page number, so iteration is document order.
    let pages = document.get_pages();
    debug!("PDF loaded: {} pages", pages.len());

    let mut text = String::new();
    for &page_num in pages.keys() {
        let page_text =
            document
                .extract_text(&[page_num])
                .map_err(|e| ExtractError::PageFailed {
                    page: page_num,
                    detail: e.to_string(),
                })?;
        debug!("Page {} → {} chars", page_num, page_text.chars().count());
        text.push_str(&page_text);
    }

    Ok(ExtractedText {
        text,
        page_count: pages.len(),
    })
}
