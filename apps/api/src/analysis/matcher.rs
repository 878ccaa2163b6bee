//! Matcher: partitions job keywords into matched / missing against the resume keywords.
//!
//! Rules, first hit wins:
//! 1. exact set membership
//! 2. substring of the space-joined resume keywords
//! 3. containment in either direction against any single resume keyword,
//!    also tried on registered abbreviation expansions
//!
//! Rule 2 can join two unrelated neighbouring keywords (a job keyword "team work"
//! matches resume keywords "team" + "work"), a known source of false positives.

use crate::analysis::keywords::KeywordSet;
use crate::analysis::lexicon::Lexicon;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchRule {
    Exact,
    JoinedText,
    Containment,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct MatchResult {
    pub matched: Vec<String>,
    pub missing: Vec<String>,
}

pub fn find_matches(job: &KeywordSet, resume: &KeywordSet, lexicon: &Lexicon) -> MatchResult {
    let joined = resume
        .iter()
        .map(String::as_str)
        .collect::<Vec<_>>()
        .join(" ");

    let mut result = MatchResult::default();
    // KeywordSet iterates in ascending order, so both outputs come out sorted.
    for keyword in job {
        match match_rule(keyword, resume, &joined, lexicon) {
            Some(rule) => {
                tracing::trace!(keyword = %keyword, ?rule, "job keyword matched");
                result.matched.push(keyword.clone());
            }
            None => result.missing.push(keyword.clone()),
        }
    }
    result
}

/// The first rule under which `keyword` is found in the resume, if any.
pub fn match_rule(
    keyword: &str,
    resume: &KeywordSet,
    joined_resume: &str,
    lexicon: &Lexicon,
) -> Option<MatchRule> {
    if resume.contains(keyword) {
        return Some(MatchRule::Exact);
    }
    if joined_resume.contains(keyword) {
        return Some(MatchRule::JoinedText);
    }
    let job_forms = forms(keyword, lexicon);
    let contained = resume.iter().any(|resume_keyword| {
        forms(resume_keyword, lexicon).iter().any(|r| {
            job_forms
                .iter()
                .any(|j| !j.is_empty() && !r.is_empty() && (r.contains(j) || j.contains(r)))
        })
    });
    contained.then_some(MatchRule::Containment)
}

/// A keyword plus its long form when it is a registered abbreviation.
fn forms<'a>(keyword: &'a str, lexicon: &'a Lexicon) -> Vec<&'a str> {
    let mut forms = vec![keyword];
    if let Some(long) = lexicon.expand(keyword) {
        forms.push(long);
    }
    forms
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(words: &[&str]) -> KeywordSet {
        words.iter().map(|w| w.to_string()).collect()
    }

    fn matches(job: &[&str], resume: &[&str]) -> MatchResult {
        find_matches(&set(job), &set(resume), &Lexicon::default())
    }

    #[test]
    fn test_exact_match() {
        let result = matches(&["python"], &["python"]);
        assert_eq!(result.matched, vec!["python"]);
        assert!(result.missing.is_empty());
    }

    #[test]
    fn test_abbreviation_matches_long_form() {
        let result = matches(&["js"], &["javascript"]);
        assert_eq!(result.matched, vec!["js"]);
        assert!(result.missing.is_empty());
    }

    #[test]
    fn test_long_form_matches_resume_abbreviation() {
        let result = matches(&["kubernetes"], &["k8s"]);
        assert_eq!(result.matched, vec!["kubernetes"]);
    }

    #[test]
    fn test_without_abbreviations_short_form_is_missing() {
        let mut lexicon = Lexicon::default();
        lexicon.abbreviations.clear();
        let result = find_matches(&set(&["js"]), &set(&["javascript"]), &lexicon);
        assert!(result.matched.is_empty());
        assert_eq!(result.missing, vec!["js"]);
    }

    #[test]
    fn test_containment_catches_plurals_both_directions() {
        let result = matches(&["api", "microservices"], &["apis", "microservice"]);
        assert_eq!(result.matched, vec!["api", "microservices"]);
    }

    #[test]
    fn test_no_match_goes_to_missing() {
        let result = matches(&["kafka", "rust"], &["python"]);
        assert!(result.matched.is_empty());
        assert_eq!(result.missing, vec!["kafka", "rust"]);
    }

    #[test]
    fn test_outputs_are_sorted_and_partition_job_keywords() {
        let job = set(&["zeta", "alpha", "rust", "docker", "mongo", "yaml"]);
        let resume = set(&["mongodb", "rust", "alphabet"]);
        let result = find_matches(&job, &resume, &Lexicon::default());

        let mut sorted_matched = result.matched.clone();
        sorted_matched.sort();
        assert_eq!(result.matched, sorted_matched);
        let mut sorted_missing = result.missing.clone();
        sorted_missing.sort();
        assert_eq!(result.missing, sorted_missing);

        let union: KeywordSet = result
            .matched
            .iter()
            .chain(result.missing.iter())
            .cloned()
            .collect();
        assert_eq!(union, job);
        assert!(result.matched.iter().all(|k| !result.missing.contains(k)));
        assert_eq!(result.matched, vec!["alpha", "mongo", "rust"]);
    }

    #[test]
    fn test_empty_sets() {
        assert_eq!(matches(&[], &["rust"]), MatchResult::default());
        let result = matches(&["rust"], &[]);
        assert_eq!(result.missing, vec!["rust"]);
    }

    #[test]
    fn test_rule_precedence() {
        let lexicon = Lexicon::default();
        let resume = set(&["team", "work", "postgresql"]);
        let joined = "postgresql team work";
        assert_eq!(
            match_rule("team", &resume, joined, &lexicon),
            Some(MatchRule::Exact)
        );
        assert_eq!(
            match_rule("postgres", &resume, joined, &lexicon),
            Some(MatchRule::JoinedText)
        );
        assert_eq!(
            match_rule("teams", &resume, joined, &lexicon),
            Some(MatchRule::Containment)
        );
        assert_eq!(match_rule("kafka", &resume, joined, &lexicon), None);
    }

    #[test]
    fn test_joined_text_spans_adjacent_keywords() {
        // Known false-positive source: the phrase exists only across two keywords.
        let lexicon = Lexicon::default();
        let resume = set(&["team", "work"]);
        assert_eq!(
            match_rule("m w", &resume, "team work", &lexicon),
            Some(MatchRule::JoinedText)
        );
    }
}
