//! Axum route handlers for resume upload.

use axum::{
    extract::{multipart::MultipartError, Multipart, State},
    http::StatusCode,
    Json,
};
use bytes::Bytes;
use serde::Serialize;
use tracing::info;

use crate::errors::AppError;
use crate::extraction::error::Notice;
use crate::extraction::source::TextSource;
use crate::state::AppState;

pub const PDF_CONTENT_TYPE: &str = "application/pdf";
const UPLOAD_FIELD: &str = "file";
const MIB: f64 = 1024.0 * 1024.0;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

/// The `file` part of a multipart upload.
#[derive(Debug, Clone)]
pub struct Upload {
    pub file_name: String,
    pub content_type: Option<String>,
    pub bytes: Bytes,
}

#[derive(Debug, Serialize)]
pub struct ExtractResponse {
    pub file_name: String,
    pub text: String,
    pub char_count: usize,
    pub notice: Notice,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/resume/extract
///
/// Multipart upload with a `file` field holding a PDF. Returns the normalized
/// text, ready to be sent as `resume_text` to the analyze endpoint.
pub async fn handle_extract(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<ExtractResponse>, AppError> {
    let upload = read_upload(&mut multipart, state.config.max_upload_bytes).await?;
    let response = extract_upload(
        state.text_source.as_ref(),
        state.config.max_upload_bytes,
        upload,
    )
    .await?;
    Ok(Json(response))
}

/// Type and size guards, then text acquisition.
pub async fn extract_upload(
    source: &dyn TextSource,
    max_upload_bytes: usize,
    upload: Upload,
) -> Result<ExtractResponse, AppError> {
    if !is_pdf(upload.content_type.as_deref()) {
        return Err(AppError::UnsupportedMediaType(
            "Please upload a PDF file. Other formats are not supported.".to_string(),
        ));
    }
    if upload.bytes.len() > max_upload_bytes {
        return Err(AppError::PayloadTooLarge(too_large_message(
            Some(upload.bytes.len()),
            max_upload_bytes,
        )));
    }

    let byte_count = upload.bytes.len();
    let text = source.acquire(upload.bytes).await?;
    let char_count = text.chars().count();

    info!(
        file_name = %upload.file_name,
        bytes = byte_count,
        chars = char_count,
        "Resume text extracted"
    );

    Ok(ExtractResponse {
        notice: Notice::extracted(&upload.file_name, char_count),
        file_name: upload.file_name,
        text,
        char_count,
    })
}

async fn read_upload(multipart: &mut Multipart, max_upload_bytes: usize) -> Result<Upload, AppError> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| multipart_error(e, max_upload_bytes))?
    {
        if field.name() != Some(UPLOAD_FIELD) {
            continue;
        }
        let file_name = field.file_name().unwrap_or("resume.pdf").to_string();
        let content_type = field.content_type().map(str::to_string);
        let bytes = field
            .bytes()
            .await
            .map_err(|e| multipart_error(e, max_upload_bytes))?;
        return Ok(Upload {
            file_name,
            content_type,
            bytes,
        });
    }
    Err(AppError::Validation(format!(
        "Missing '{UPLOAD_FIELD}' field in multipart body"
    )))
}

fn multipart_error(e: MultipartError, max_upload_bytes: usize) -> AppError {
    if e.status() == StatusCode::PAYLOAD_TOO_LARGE {
        AppError::PayloadTooLarge(too_large_message(None, max_upload_bytes))
    } else {
        AppError::Validation(e.body_text())
    }
}

/// Exact match on the media type; parameters such as `; charset=` are ignored.
fn is_pdf(content_type: Option<&str>) -> bool {
    content_type
        .and_then(|ct| ct.split(';').next())
        .is_some_and(|ct| ct.trim().eq_ignore_ascii_case(PDF_CONTENT_TYPE))
}

fn too_large_message(size: Option<usize>, max_upload_bytes: usize) -> String {
    let max_mb = max_upload_bytes as f64 / MIB;
    let advice = "Please compress your PDF or paste the text manually.";
    match size {
        Some(size) => format!(
            "File size is {:.2}MB. Maximum allowed size is {max_mb}MB. {advice}",
            size as f64 / MIB
        ),
        None => format!("Maximum allowed size is {max_mb}MB. {advice}"),
    }
}
