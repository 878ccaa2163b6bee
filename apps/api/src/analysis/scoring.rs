//! Weighted Scoring: turns per-category match ratios into one overall percentage.
//!
//! For each weighted category:
//!   raw      = 100 × matched / total   (0 when total = 0)
//!   weighted = raw × category weight
//! overall = round(Σ weighted)
//!
//! `weighted_score` on each entry is rounded to one decimal for display only;
//! the sum uses the unrounded contributions.
//!
//! `general` keywords add `raw × general_weight` on top of the four named weights,
//! which already sum to 1.0, so a perfect match with general keywords present
//! scores above 100. The weights are not renormalized.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::analysis::categorizer::{CategorizedKeywords, Category};
use crate::analysis::lexicon::Lexicon;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryScore {
    pub matched: usize,
    pub total: usize,
    /// Raw match percentage, rounded to an integer.
    pub score: u32,
    /// Contribution to the overall score, rounded to one decimal.
    pub weighted_score: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ScoreReport {
    pub overall_score: u32,
    pub category_scores: BTreeMap<Category, CategoryScore>,
}

pub fn calculate_weighted_score(
    matched: &CategorizedKeywords,
    total: &CategorizedKeywords,
    lexicon: &Lexicon,
) -> ScoreReport {
    let mut category_scores = BTreeMap::new();
    let mut weighted_total = 0.0_f64;

    for category in Category::WEIGHTED {
        let (score, contribution) = category_score(
            matched.count(category),
            total.count(category),
            lexicon.weight(category),
        );
        weighted_total += contribution;
        category_scores.insert(category, score);
    }

    if total.count(Category::General) > 0 {
        let (score, contribution) = category_score(
            matched.count(Category::General),
            total.count(Category::General),
            lexicon.weight(Category::General),
        );
        weighted_total += contribution;
        category_scores.insert(Category::General, score);
    }

    ScoreReport {
        overall_score: weighted_total.round() as u32,
        category_scores,
    }
}

/// Flat matched/total percentage, ignoring categories.
pub fn simple_score(matched: usize, total: usize) -> u32 {
    if total == 0 {
        return 0;
    }
    ((matched as f64 / total as f64) * 100.0).round() as u32
}

/// The display entry plus the unrounded contribution to the overall score.
fn category_score(matched: usize, total: usize, weight: f64) -> (CategoryScore, f64) {
    let raw = if total > 0 {
        (matched as f64 / total as f64) * 100.0
    } else {
        0.0
    };
    let contribution = raw * weight;
    let score = CategoryScore {
        matched,
        total,
        score: raw.round() as u32,
        weighted_score: (contribution * 10.0).round() / 10.0,
    };
    (score, contribution)
}
