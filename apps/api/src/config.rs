use anyhow::{Context, Result};

/// Application configuration loaded from environment variables.
/// Every variable has a default; a present but malformed value fails startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    /// Largest accepted resume upload, in bytes.
    pub max_upload_bytes: usize,
    /// Normalized PDF text shorter than this is rejected as image-only.
    pub min_extracted_chars: usize,
    pub pdf_upload_enabled: bool,
}

pub const DEFAULT_MAX_UPLOAD_BYTES: usize = 10 * 1024 * 1024;
pub const DEFAULT_MIN_EXTRACTED_CHARS: usize = 10;

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            port: parse_env("PORT", 8080).context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            max_upload_bytes: parse_env("MAX_UPLOAD_BYTES", DEFAULT_MAX_UPLOAD_BYTES)
                .context("MAX_UPLOAD_BYTES must be a byte count")?,
            min_extracted_chars: parse_env("MIN_EXTRACTED_CHARS", DEFAULT_MIN_EXTRACTED_CHARS)
                .context("MIN_EXTRACTED_CHARS must be a non-negative integer")?,
            pdf_upload_enabled: parse_env("PDF_UPLOAD_ENABLED", true)
                .context("PDF_UPLOAD_ENABLED must be true or false")?,
        })
    }
}

fn parse_env<T>(key: &str, default: T) -> Result<T>
where
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match std::env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse::<T>()
            .with_context(|| format!("Invalid value {raw:?} for '{key}'")),
        Err(_) => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_env_default_when_unset() {
        let value: usize = parse_env("KEYWORD_MATCHER_TEST_UNSET_VAR", 42).unwrap();
        assert_eq!(value, 42);
    }

    #[test]
    fn test_parse_env_reads_and_validates() {
        std::env::set_var("KEYWORD_MATCHER_TEST_BOOL", "false");
        assert!(!parse_env("KEYWORD_MATCHER_TEST_BOOL", true).unwrap());

        std::env::set_var("KEYWORD_MATCHER_TEST_PORT", "not-a-port");
        assert!(parse_env::<u16>("KEYWORD_MATCHER_TEST_PORT", 8080).is_err());
    }
}
