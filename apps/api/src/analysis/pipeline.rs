//! Analysis pipeline: one job description against one resume.
//!
//! extract(job), extract(resume) → find_matches → categorize(job), categorize(matched)
//!   → weighted score
//! resume + matched → highlight

use std::collections::BTreeMap;

use serde::Serialize;
use tracing::debug;

use crate::analysis::categorizer::{categorize_keywords, Category};
use crate::analysis::highlighter::highlight_keywords;
use crate::analysis::keywords::extract_keywords;
use crate::analysis::lexicon::Lexicon;
use crate::analysis::matcher::find_matches;
use crate::analysis::scoring::{calculate_weighted_score, simple_score, CategoryScore};

#[derive(Debug, Clone, Serialize)]
pub struct AnalysisReport {
    pub matched: Vec<String>,
    pub missing: Vec<String>,
    pub highlighted_resume: String,
    /// Weighted percentage. Can exceed 100 when general keywords are present.
    pub overall_score: u32,
    pub category_scores: BTreeMap<Category, CategoryScore>,
    /// Flat matched / total percentage, for comparison.
    pub simple_score: u32,
    pub job_keyword_count: usize,
    pub resume_keyword_count: usize,
}

/// Runs the full pipeline. Never fails: empty input gives empty lists and a 0 score.
pub fn analyze(job_text: &str, resume_text: &str, lexicon: &Lexicon) -> AnalysisReport {
    let job_keywords = extract_keywords(job_text, lexicon);
    let resume_keywords = extract_keywords(resume_text, lexicon);

    let matches = find_matches(&job_keywords, &resume_keywords, lexicon);

    let job_list: Vec<&str> = job_keywords.iter().map(String::as_str).collect();
    let job_by_category = categorize_keywords(&job_list, lexicon);
    let matched_by_category = categorize_keywords(&matches.matched, lexicon);
    let score = calculate_weighted_score(&matched_by_category, &job_by_category, lexicon);

    let highlighted_resume = highlight_keywords(resume_text, &matches.matched);

    let report = AnalysisReport {
        simple_score: simple_score(matches.matched.len(), job_keywords.len()),
        job_keyword_count: job_keywords.len(),
        resume_keyword_count: resume_keywords.len(),
        matched: matches.matched,
        missing: matches.missing,
        highlighted_resume,
        overall_score: score.overall_score,
        category_scores: score.category_scores,
    };

    debug!(
        job_keywords = report.job_keyword_count,
        resume_keywords = report.resume_keyword_count,
        matched = report.matched.len(),
        missing = report.missing.len(),
        simple_score = report.simple_score,
        weighted_score = report.overall_score,
        "Analysis complete"
    );

    report
}

#[cfg(test)]
mod tests {
    use super::*;

    const JOB: &str = "Looking for a Python developer with AWS experience";
    const RESUME: &str = "Experienced Python engineer, worked with AWS and Docker";

    #[test]
    fn test_python_aws_job_against_resume() {
        let report = analyze(JOB, RESUME, &Lexicon::default());
        assert!(report.matched.contains(&"python".to_string()));
        assert!(report.matched.contains(&"aws".to_string()));
        assert!(report.overall_score > 0);
        // "experience" is found inside "experienced"
        assert!(report.matched.contains(&"experience".to_string()));
        assert_eq!(report.missing, vec!["developer", "looking"]);
        assert!(report
            .highlighted_resume
            .contains("<mark>Python</mark>"));
        assert!(report.highlighted_resume.contains("<mark>AWS</mark>"));
    }

    #[test]
    fn test_end_to_end_breakdown() {
        let report = analyze(JOB, RESUME, &Lexicon::default());
        // skills 1/1 → 40, technologies 1/1 → 30, roles 0/1 → 0, general 1/2 → 2.5
        assert_eq!(report.overall_score, 73);
        assert_eq!(report.category_scores[&Category::Skills].matched, 1);
        assert_eq!(report.category_scores[&Category::Roles].total, 1);
        assert_eq!(report.category_scores[&Category::General].total, 2);
        assert_eq!(report.job_keyword_count, 5);
        assert_eq!(report.simple_score, 60);
    }

    #[test]
    fn test_empty_inputs_do_not_fail() {
        let report = analyze("", "", &Lexicon::default());
        assert!(report.matched.is_empty());
        assert!(report.missing.is_empty());
        assert_eq!(report.overall_score, 0);
        assert_eq!(report.simple_score, 0);
        assert_eq!(report.highlighted_resume, "");
    }

    #[test]
    fn test_empty_resume_everything_missing() {
        let report = analyze(JOB, "", &Lexicon::default());
        assert!(report.matched.is_empty());
        assert_eq!(report.missing.len(), 5);
        assert_eq!(report.overall_score, 0);
    }

    #[test]
    fn test_matched_keywords_highlighted_beside_cjk() {
        let report = analyze("Python AWS", "熟悉Python和AWS", &Lexicon::default());
        assert_eq!(report.matched, vec!["aws", "python"]);
        assert_eq!(
            report.highlighted_resume,
            "熟悉<mark>Python</mark>和<mark>AWS</mark>"
        );
    }

    #[test]
    fn test_highlighted_resume_is_escaped() {
        let report = analyze(
            "Rust engineer",
            "<script>alert('x')</script> Rust engineer",
            &Lexicon::default(),
        );
        assert!(!report.highlighted_resume.contains("<script>"));
        assert!(report.highlighted_resume.contains("&lt;script&gt;"));
        assert!(report.highlighted_resume.contains("<mark>Rust</mark>"));
    }
}
