use serde::Serialize;
use thiserror::Error;

/// Why text could not be pulled out of an uploaded resume.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ExtractionErrorKind {
    PasswordProtected,
    InvalidPdf,
    MissingData,
    NoText,
    InsufficientText,
    EmptyFile,
    FileReadError,
    LibraryNotLoaded,
    NoPages,
    UnexpectedFormat,
    LoadError,
    ExtractionError,
}

impl ExtractionErrorKind {
    /// Image-only documents, an unusual layout, or a disabled upload path are
    /// recoverable by pasting text, so they surface as warnings.
    pub fn severity(self) -> NoticeSeverity {
        match self {
            ExtractionErrorKind::NoText
            | ExtractionErrorKind::InsufficientText
            | ExtractionErrorKind::LibraryNotLoaded
            | ExtractionErrorKind::UnexpectedFormat => NoticeSeverity::Warning,
            _ => NoticeSeverity::Error,
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            ExtractionErrorKind::PasswordProtected => "Password-Protected PDF",
            ExtractionErrorKind::InvalidPdf | ExtractionErrorKind::MissingData => {
                "Corrupted PDF File"
            }
            ExtractionErrorKind::NoText | ExtractionErrorKind::InsufficientText => "No Text Found",
            ExtractionErrorKind::EmptyFile => "Empty PDF File",
            ExtractionErrorKind::FileReadError => "File Read Error",
            ExtractionErrorKind::LibraryNotLoaded => "PDF Upload Unavailable",
            ExtractionErrorKind::NoPages => "Invalid PDF",
            ExtractionErrorKind::UnexpectedFormat => "Unexpected PDF Format",
            ExtractionErrorKind::LoadError | ExtractionErrorKind::ExtractionError => {
                "Extraction Failed"
            }
        }
    }
}

/// A failed extraction: the kind drives the user-facing notice, `detail` is the
/// technical reason and is only shown for the catch-all kinds.
#[derive(Debug, Clone, Error)]
#[error("{detail}")]
pub struct ExtractionError {
    pub kind: ExtractionErrorKind,
    pub detail: String,
}

impl ExtractionError {
    pub fn new(kind: ExtractionErrorKind, detail: impl Into<String>) -> Self {
        Self {
            kind,
            detail: detail.into(),
        }
    }

    pub fn message(&self) -> String {
        match self.kind {
            ExtractionErrorKind::PasswordProtected => "This PDF is password-protected. Please remove the password or copy and paste the text manually.".to_string(),
            ExtractionErrorKind::InvalidPdf | ExtractionErrorKind::MissingData => "The PDF file appears to be corrupted or invalid. Please try a different file or paste the text manually.".to_string(),
            ExtractionErrorKind::NoText | ExtractionErrorKind::InsufficientText => "This PDF appears to be image-based (scanned document). Please use OCR software or copy and paste the text manually.".to_string(),
            ExtractionErrorKind::EmptyFile => "The PDF file is empty. Please upload a valid PDF with content.".to_string(),
            ExtractionErrorKind::FileReadError => "Failed to read the PDF file. The file might be corrupted or inaccessible.".to_string(),
            ExtractionErrorKind::LibraryNotLoaded => "Please paste your resume text directly into the textarea below instead of uploading a PDF.".to_string(),
            ExtractionErrorKind::NoPages => "The PDF has no pages. Please upload a valid PDF file.".to_string(),
            ExtractionErrorKind::UnexpectedFormat => "This PDF has an unusual format. Extraction may be incomplete. Please verify the results.".to_string(),
            ExtractionErrorKind::LoadError | ExtractionErrorKind::ExtractionError => format!(
                "Failed to extract text from PDF: {}. Please try pasting the text manually.",
                self.detail
            ),
        }
    }

    pub fn notice(&self) -> Notice {
        Notice {
            severity: self.kind.severity(),
            title: self.kind.title().to_string(),
            message: self.message(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NoticeSeverity {
    Error,
    Warning,
    Success,
    Info,
}

/// What the client should show the user after an upload.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Notice {
    pub severity: NoticeSeverity,
    pub title: String,
    pub message: String,
}

impl Notice {
    pub fn extracted(file_name: &str, char_count: usize) -> Self {
        Notice {
            severity: NoticeSeverity::Success,
            title: "PDF Extracted Successfully".to_string(),
            message: format!("Extracted {char_count} characters from {file_name}"),
        }
    }
}
