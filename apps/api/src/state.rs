use std::sync::Arc;

use crate::analysis::lexicon::Lexicon;
use crate::config::Config;
use crate::extraction::source::TextSource;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Read-only keyword tables shared by every analysis.
    pub lexicon: Arc<Lexicon>,
    /// Pluggable resume text source. Default: PdfTextSource. Disabled via PDF_UPLOAD_ENABLED.
    pub text_source: Arc<dyn TextSource>,
}

#[cfg(test)]
pub(crate) fn test_state(text_source: Arc<dyn TextSource>) -> AppState {
    AppState {
        config: Config {
            port: 0,
            rust_log: "debug".to_string(),
            max_upload_bytes: 1024,
            min_extracted_chars: 10,
            pdf_upload_enabled: true,
        },
        lexicon: Arc::new(Lexicon::default()),
        text_source,
    }
}
