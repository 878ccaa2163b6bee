//! Axum route handlers for the Analysis API.

use axum::{extract::State, Json};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

use crate::analysis::categorizer::Category;
use crate::analysis::lexicon::Lexicon;
use crate::analysis::pipeline::{analyze, AnalysisReport};
use crate::errors::AppError;
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct AnalyzeRequest {
    #[serde(default)]
    pub job_text: String,
    #[serde(default)]
    pub resume_text: String,
}

/// One row of the score breakdown, in display order.
#[derive(Debug, Clone, Serialize)]
pub struct BreakdownRow {
    pub category: Category,
    pub label: &'static str,
    pub weight_percent: u32,
    pub matched: usize,
    pub total: usize,
    pub score: u32,
    pub weighted_score: f64,
}

#[derive(Debug, Serialize)]
pub struct AnalyzeResponse {
    pub analysis_id: Uuid,
    pub analyzed_at: DateTime<Utc>,
    #[serde(flatten)]
    pub report: AnalysisReport,
    pub breakdown: Vec<BreakdownRow>,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/analyze
///
/// Scores a resume against a job description and returns matched and missing
/// keywords, the weighted breakdown, and the highlighted resume markup.
pub async fn handle_analyze(
    State(state): State<AppState>,
    Json(request): Json<AnalyzeRequest>,
) -> Result<Json<AnalyzeResponse>, AppError> {
    let job_text = request.job_text.trim();
    let resume_text = request.resume_text.trim();
    validate_inputs(job_text, resume_text)?;

    let report = analyze(job_text, resume_text, &state.lexicon);
    let breakdown = breakdown_rows(&report, &state.lexicon);
    let analysis_id = Uuid::new_v4();

    info!(
        %analysis_id,
        overall_score = report.overall_score,
        matched = report.matched.len(),
        missing = report.missing.len(),
        "Analysis served"
    );

    Ok(Json(AnalyzeResponse {
        analysis_id,
        analyzed_at: Utc::now(),
        report,
        breakdown,
    }))
}

/// Both inputs must be non-blank.
pub fn validate_inputs(job_text: &str, resume_text: &str) -> Result<(), AppError> {
    let message = match (job_text.trim().is_empty(), resume_text.trim().is_empty()) {
        (true, true) => "Please enter both a job description and your resume to analyze.",
        (true, false) => "Please enter a job description to analyze.",
        (false, true) => "Please enter your resume to analyze.",
        (false, false) => return Ok(()),
    };
    Err(AppError::Validation(message.to_string()))
}

pub fn breakdown_rows(report: &AnalysisReport, lexicon: &Lexicon) -> Vec<BreakdownRow> {
    report
        .category_scores
        .iter()
        .map(|(&category, score)| BreakdownRow {
            category,
            label: category.label(),
            weight_percent: (lexicon.weight(category) * 100.0).round() as u32,
            matched: score.matched,
            total: score.total,
            score: score.score,
            weighted_score: score.weighted_score,
        })
        .collect()
}
