//! Highlighter: wraps occurrences of matched keywords in the raw resume text with `<mark>`.
//!
//! Two passes over the unmodified text:
//! 1. collect non-overlapping spans, keywords longest-first; per keyword the phrase
//!    patterns run before the fuzzy pattern, and a span is rejected if it overlaps
//!    one accepted earlier
//! 2. one left-to-right rewrite that escapes literal text and span text exactly once
//!
//! Newlines become `<br>` so the result can be dropped straight into a page.

use regex::{Regex, RegexBuilder};

const MARK_OPEN: &str = "<mark>";
const MARK_CLOSE: &str = "</mark>";
const LINE_BREAK: &str = "<br>";

/// Which pattern produced a span.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HighlightStrategy {
    Exact,
    OptionalHyphen,
    SpacedCharacters,
    FlexibleWhitespace,
    Fuzzy,
}

/// Byte range `[start, end)` of the raw text to be wrapped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HighlightSpan {
    pub start: usize,
    pub end: usize,
    pub strategy: HighlightStrategy,
}

impl HighlightSpan {
    fn overlaps(&self, other: &HighlightSpan) -> bool {
        self.start < other.end && other.start < self.end
    }
}

pub fn highlight_keywords<S: AsRef<str>>(resume_text: &str, matched_keywords: &[S]) -> String {
    let spans = collect_spans(resume_text, matched_keywords);
    render(resume_text, &spans)
}

/// Accepted spans, sorted by start offset.
pub fn collect_spans<S: AsRef<str>>(text: &str, keywords: &[S]) -> Vec<HighlightSpan> {
    let mut ordered: Vec<&str> = keywords
        .iter()
        .map(|k| k.as_ref())
        .filter(|k| !k.trim().is_empty())
        .collect();
    // Stable: equal-length keywords keep their input order.
    ordered.sort_by(|a, b| b.chars().count().cmp(&a.chars().count()));

    let mut accepted: Vec<HighlightSpan> = Vec::new();
    for keyword in ordered {
        for (strategy, regex) in phrase_patterns(keyword) {
            for m in regex.find_iter(text) {
                try_accept(&mut accepted, m.start(), m.end(), strategy);
            }
        }

        if let Some(regex) = fuzzy_pattern(keyword) {
            let keyword_len = keyword.chars().count();
            let max_diff = (keyword_len as f64 * 0.5).ceil() as usize;
            for m in regex.find_iter(text) {
                if m.as_str().chars().count().abs_diff(keyword_len) <= max_diff {
                    try_accept(&mut accepted, m.start(), m.end(), HighlightStrategy::Fuzzy);
                }
            }
        }
    }

    accepted.sort_by_key(|s| s.start);
    accepted
}

fn try_accept(
    accepted: &mut Vec<HighlightSpan>,
    start: usize,
    end: usize,
    strategy: HighlightStrategy,
) {
    if start == end {
        return;
    }
    let span = HighlightSpan {
        start,
        end,
        strategy,
    };
    if accepted.iter().any(|s| s.overlaps(&span)) {
        return;
    }
    accepted.push(span);
}

/// The four phrase patterns, in application order. Duplicates (e.g. a keyword
/// without hyphens produces the same hyphen-optional pattern) are harmless:
/// their matches overlap what the first pattern already accepted.
fn phrase_patterns(keyword: &str) -> Vec<(HighlightStrategy, Regex)> {
    let exact = regex::escape(keyword);
    let optional_hyphen = keyword
        .split('-')
        .map(regex::escape)
        .collect::<Vec<_>>()
        .join("-?");
    let spaced = keyword
        .chars()
        .map(|c| regex::escape(c.encode_utf8(&mut [0; 4])))
        .collect::<Vec<_>>()
        .join(r"\s*");
    let flexible = keyword
        .split_whitespace()
        .map(regex::escape)
        .collect::<Vec<_>>()
        .join(r"\s+");

    [
        (HighlightStrategy::Exact, exact),
        (HighlightStrategy::OptionalHyphen, optional_hyphen),
        (HighlightStrategy::SpacedCharacters, spaced),
        (HighlightStrategy::FlexibleWhitespace, flexible),
    ]
    .into_iter()
    .filter_map(|(strategy, body)| bounded(&body).map(|regex| (strategy, regex)))
    .collect()
}

/// Keyword's ASCII alphanumerics, each followed by any run of non-alphanumerics:
/// "javascript" also finds "Java Script" and "Java-Script".
fn fuzzy_pattern(keyword: &str) -> Option<Regex> {
    let letters: Vec<String> = keyword
        .to_lowercase()
        .chars()
        .filter(|c| c.is_ascii_alphanumeric())
        .map(String::from)
        .collect();
    if letters.is_empty() {
        return None;
    }
    bounded(&letters.join("[^a-zA-Z0-9]*"))
}

/// Anchors `body` on ASCII word boundaries, the same word characters the
/// tokenizer uses, so a keyword next to CJK or accented letters is still found.
fn bounded(body: &str) -> Option<Regex> {
    if body.is_empty() {
        return None;
    }
    RegexBuilder::new(&format!(r"(?-u:\b)(?:{body})(?-u:\b)"))
        .case_insensitive(true)
        .build()
        .map_err(|e| tracing::warn!("Skipping highlight pattern {body:?}: {e}"))
        .ok()
}

fn render(text: &str, spans: &[HighlightSpan]) -> String {
    let mut out = String::with_capacity(text.len() + spans.len() * 13);
    let mut cursor = 0;
    for span in spans {
        push_escaped(&mut out, &text[cursor..span.start]);
        out.push_str(MARK_OPEN);
        push_escaped(&mut out, &text[span.start..span.end]);
        out.push_str(MARK_CLOSE);
        cursor = span.end;
    }
    push_escaped(&mut out, &text[cursor..]);
    out
}

/// HTML-escapes `text` onto `out`, turning newlines into `<br>`.
fn push_escaped(out: &mut String, text: &str) {
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            '\n' => out.push_str(LINE_BREAK),
            _ => out.push(c),
        }
    }
}
