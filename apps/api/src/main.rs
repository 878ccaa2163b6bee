mod analysis;
mod config;
mod errors;
mod extraction;
mod routes;
mod state;

use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::analysis::lexicon::Lexicon;
use crate::config::Config;
use crate::extraction::source::{PdfTextSource, TextSource, UnavailableTextSource};
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on malformed env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_CRATE_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Keyword Matcher API v{}", env!("CARGO_PKG_VERSION"));

    let lexicon = Arc::new(Lexicon::default());
    info!(
        categories = lexicon.rules.len(),
        stopwords = lexicon.stopwords.len(),
        abbreviations = lexicon.abbreviations.len(),
        "Lexicon loaded"
    );

    // PdfTextSource by default; PDF_UPLOAD_ENABLED=false turns uploads away
    let text_source: Arc<dyn TextSource> = if config.pdf_upload_enabled {
        info!(
            max_upload_bytes = config.max_upload_bytes,
            min_extracted_chars = config.min_extracted_chars,
            "PDF upload enabled"
        );
        Arc::new(PdfTextSource::new(config.min_extracted_chars))
    } else {
        warn!("PDF upload disabled; resume text must be pasted");
        Arc::new(UnavailableTextSource)
    };

    let state = AppState {
        config: config.clone(),
        lexicon,
        text_source,
    };

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive()); // TODO: restrict origins once the frontend host is fixed

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
