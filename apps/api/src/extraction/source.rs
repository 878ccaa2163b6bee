//! Text Sources: pluggable, trait-based acquisition of resume text from uploaded bytes.
//!
//! Default: `PdfTextSource` (pdf-extract, runs on the blocking pool).
//! `UnavailableTextSource` stands in when PDF upload is switched off by config.
//!
//! `AppState` holds an `Arc<dyn TextSource>`, chosen at startup.

use std::panic::{self, AssertUnwindSafe};

use async_trait::async_trait;
use bytes::Bytes;
use pdf_extract::{output_doc_page, Document, OutputError, PlainTextOutput};
use tracing::{debug, error, info, warn};

use crate::extraction::error::{ExtractionError, ExtractionErrorKind};
use crate::extraction::normalize::normalize_pdf_text;

/// Turns an uploaded document into normalized plain text.
///
/// Carried in `AppState` as `Arc<dyn TextSource>`.
#[async_trait]
pub trait TextSource: Send + Sync {
    async fn acquire(&self, bytes: Bytes) -> Result<String, ExtractionError>;
}

// ────────────────────────────────────────────────────────────────────────────
// PdfTextSource
// ────────────────────────────────────────────────────────────────────────────

pub struct PdfTextSource {
    /// Normalized text shorter than this is treated as an image-only document.
    pub min_chars: usize,
}

impl PdfTextSource {
    pub fn new(min_chars: usize) -> Self {
        Self { min_chars }
    }
}

#[async_trait]
impl TextSource for PdfTextSource {
    async fn acquire(&self, bytes: Bytes) -> Result<String, ExtractionError> {
        let min_chars = self.min_chars;
        // Parsing is CPU-bound and pdf-extract can panic on malformed fonts.
        tokio::task::spawn_blocking(move || extract_pdf_text(&bytes, min_chars))
            .await
            .map_err(|e| {
                error!("PDF extraction worker failed: {e}");
                ExtractionError::new(
                    ExtractionErrorKind::ExtractionError,
                    format!("extraction worker failed: {e}"),
                )
            })?
    }
}

/// Synchronous extraction: load, decrypt with the empty password if needed,
/// pull every page independently, join, normalize.
pub fn extract_pdf_text(bytes: &[u8], min_chars: usize) -> Result<String, ExtractionError> {
    if bytes.is_empty() {
        return Err(ExtractionError::new(
            ExtractionErrorKind::EmptyFile,
            "PDF file is empty or corrupted",
        ));
    }

    let mut doc = Document::load_mem(bytes).map_err(classify_pdf_error)?;
    if doc.is_encrypted() {
        doc.decrypt("").map_err(|e| match e {
            pdf_extract::Error::Decryption(_) => ExtractionError::new(
                ExtractionErrorKind::PasswordProtected,
                format!("PDF is password-protected: {e}"),
            ),
            other => classify_pdf_error(other),
        })?;
    }

    let pages = doc.get_pages();
    if pages.is_empty() {
        return Err(ExtractionError::new(
            ExtractionErrorKind::NoPages,
            "PDF has no pages",
        ));
    }
    debug!(pages = pages.len(), "PDF loaded");

    let raw = pages
        .keys()
        .map(|&page_num| extract_page(&doc, page_num))
        .filter_map(|text| {
            let trimmed = text.trim();
            (!trimmed.is_empty()).then(|| trimmed.to_string())
        })
        .collect::<Vec<_>>()
        .join("\n\n");

    if raw.is_empty() {
        return Err(ExtractionError::new(
            ExtractionErrorKind::NoText,
            "No text found in PDF",
        ));
    }

    let cleaned = normalize_pdf_text(&raw);
    if cleaned.chars().count() < min_chars {
        return Err(ExtractionError::new(
            ExtractionErrorKind::InsufficientText,
            "Extracted text is too short",
        ));
    }

    info!(
        raw_chars = raw.chars().count(),
        cleaned_chars = cleaned.chars().count(),
        "Extracted PDF text"
    );
    Ok(cleaned)
}

/// One page's text. A page that errors or panics counts as empty so the
/// remaining pages still come through.
fn extract_page(doc: &Document, page_num: u32) -> String {
    let result = panic::catch_unwind(AssertUnwindSafe(|| {
        let mut text = String::new();
        {
            let mut output = PlainTextOutput::new(&mut text);
            output_doc_page(doc, &mut output, page_num)?;
        }
        Ok::<_, OutputError>(text)
    }));

    match result {
        Ok(Ok(text)) => text,
        Ok(Err(e)) => {
            warn!(page = page_num, "Failed to extract page: {e}");
            String::new()
        }
        Err(_) => {
            warn!(page = page_num, "Page extraction panicked");
            String::new()
        }
    }
}

pub fn classify_pdf_error(e: pdf_extract::Error) -> ExtractionError {
    use pdf_extract::Error;

    let kind = match &e {
        Error::Decryption(_) => ExtractionErrorKind::PasswordProtected,
        Error::Header
        | Error::Parse { .. }
        | Error::Syntax(_)
        | Error::Invalid(_)
        | Error::BracketLimit => ExtractionErrorKind::InvalidPdf,
        Error::Xref(_)
        | Error::Trailer
        | Error::Offset(_)
        | Error::ObjectNotFound
        | Error::ObjectIdMismatch
        | Error::DictKey
        | Error::ReferenceCycle
        | Error::ReferenceLimit => ExtractionErrorKind::MissingData,
        Error::Type | Error::ContentDecode | Error::StringDecode | Error::UTF8 => {
            ExtractionErrorKind::UnexpectedFormat
        }
        Error::IO(_) => ExtractionErrorKind::FileReadError,
        _ => ExtractionErrorKind::LoadError,
    };
    ExtractionError::new(kind, format!("Failed to load PDF: {e}"))
}

// ────────────────────────────────────────────────────────────────────────────
// UnavailableTextSource
// ────────────────────────────────────────────────────────────────────────────

/// Used when `PDF_UPLOAD_ENABLED=false`: every upload is turned away with a
/// hint to paste the text instead.
pub struct UnavailableTextSource;

#[async_trait]
impl TextSource for UnavailableTextSource {
    async fn acquire(&self, _bytes: Bytes) -> Result<String, ExtractionError> {
        Err(ExtractionError::new(
            ExtractionErrorKind::LibraryNotLoaded,
            "PDF extraction is disabled",
        ))
    }
}
