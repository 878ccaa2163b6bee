use once_cell::sync::Lazy;
use regex::Regex;

/// A word, or a hyphenated compound treated as a single word.
static RE_TOKEN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[a-z0-9]+(?:-[a-z0-9]+)*").expect("Invalid token regex"));

/// Splits text into lowercase word tokens.
///
/// Everything outside `[a-z0-9]` (after lowercasing) is a separator, except a
/// single hyphen joining two alphanumeric runs: `full-stack` stays one token,
/// `-foo-` yields `foo`.
pub fn tokenize(text: &str) -> Vec<String> {
    if text.is_empty() {
        return Vec::new();
    }
    let lowered = text.to_lowercase();
    RE_TOKEN
        .find_iter(&lowered)
        .map(|m| m.as_str().to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_text_yields_no_tokens() {
        assert!(tokenize("").is_empty());
        assert!(tokenize("   \n\t ").is_empty());
    }

    #[test]
    fn test_lowercases_and_splits_on_punctuation() {
        assert_eq!(
            tokenize("Senior Rust Engineer, (Remote)!"),
            vec!["senior", "rust", "engineer", "remote"]
        );
    }

    #[test]
    fn test_hyphenated_compound_is_one_token() {
        assert_eq!(
            tokenize("full-stack problem-solving"),
            vec!["full-stack", "problem-solving"]
        );
    }

    #[test]
    fn test_dangling_hyphens_are_separators() {
        assert_eq!(tokenize("-rust- --go"), vec!["rust", "go"]);
        assert_eq!(tokenize("a--b"), vec!["a", "b"]);
    }

    #[test]
    fn test_digits_are_kept_in_tokens() {
        assert_eq!(tokenize("k8s 2024 web3"), vec!["k8s", "2024", "web3"]);
    }

    #[test]
    fn test_non_ascii_letters_are_separators() {
        assert_eq!(tokenize("café naïve"), vec!["caf", "na", "ve"]);
    }
}
