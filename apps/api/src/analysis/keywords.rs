use std::collections::BTreeSet;

use crate::analysis::lexicon::Lexicon;
use crate::analysis::tokenizer::tokenize;

/// Deduplicated keywords of one text. Ordered so every downstream pass is deterministic.
pub type KeywordSet = BTreeSet<String>;

/// Drops stopwords, tokens of two characters or fewer, and all-digit tokens.
/// Order and duplicates are preserved.
pub fn filter_stopwords(tokens: Vec<String>, lexicon: &Lexicon) -> Vec<String> {
    tokens
        .into_iter()
        .filter(|token| {
            !lexicon.is_stopword(token)
                && token.chars().count() > 2
                && !token.chars().all(|c| c.is_ascii_digit())
        })
        .collect()
}

/// Tokenize → filter → dedup. Empty or noise-only text gives an empty set.
pub fn extract_keywords(text: &str, lexicon: &Lexicon) -> KeywordSet {
    filter_stopwords(tokenize(text), lexicon)
        .into_iter()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(words: &[&str]) -> KeywordSet {
        words.iter().map(|w| w.to_string()).collect()
    }

    #[test]
    fn test_filter_drops_stopwords_short_and_numeric() {
        let lexicon = Lexicon::default();
        let tokens = ["the", "go", "2024", "rust", "with", "k8s", "rust"]
            .iter()
            .map(|t| t.to_string())
            .collect();
        assert_eq!(
            filter_stopwords(tokens, &lexicon),
            vec!["rust", "k8s", "rust"]
        );
    }

    #[test]
    fn test_extract_keywords_dedups() {
        let lexicon = Lexicon::default();
        let keywords = extract_keywords("Python, python and PYTHON developer", &lexicon);
        assert_eq!(keywords, set(&["developer", "python"]));
    }

    #[test]
    fn test_extract_keywords_empty_input() {
        assert!(extract_keywords("", &Lexicon::default()).is_empty());
        assert!(extract_keywords("!!! ... ???", &Lexicon::default()).is_empty());
    }

    #[test]
    fn test_extracted_keywords_never_contain_filtered_tokens() {
        let lexicon = Lexicon::default();
        let text = "I am a 10x engineer with 5 years of AWS, C, Go and 2FA; \
                    we shipped 100 releases to the team in 2023.";
        let keywords = extract_keywords(text, &lexicon);
        assert!(!keywords.is_empty());
        for keyword in &keywords {
            assert!(!lexicon.is_stopword(keyword), "stopword {keyword}");
            assert!(keyword.len() > 2, "short keyword {keyword}");
            assert!(
                !keyword.chars().all(|c| c.is_ascii_digit()),
                "numeric keyword {keyword}"
            );
        }
        assert!(keywords.contains("aws"));
        assert!(keywords.contains("10x"));
        assert!(keywords.contains("2fa"));
    }

    #[test]
    fn test_custom_lexicon_stopwords_apply() {
        let mut lexicon = Lexicon::default();
        lexicon.stopwords.insert("experience".to_string());
        let keywords = extract_keywords("Rust experience", &lexicon);
        assert_eq!(keywords, set(&["rust"]));
    }
}
