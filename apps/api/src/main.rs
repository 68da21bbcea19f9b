mod config;
mod db;
mod errors;
mod generation;
mod ingest;
mod interviews;
mod llm_client;
mod models;
mod routes;
mod state;

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::{Context, Result};
use axum::extract::DefaultBodyLimit;
use axum::http::HeaderValue;
use tower_http::{
    cors::{AllowOrigin, Any, CorsLayer},
    trace::TraceLayer,
};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::db::{create_pool, ensure_schema};
use crate::generation::service::GeminiQuestionGenerator;
use crate::interviews::store::{EphemeralStore, InterviewStore, PgInterviewStore};
use crate::llm_client::LlmClient;
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on missing required env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Interview API v{}", env!("CARGO_PKG_VERSION"));

    // Initialize PostgreSQL
    let db = create_pool(&config.database_url).await?;
    ensure_schema(&db).await?;

    // Initialize LLM client and the generation service around it
    let llm = LlmClient::new(config.gemini_api_key.clone(), config.gemini_model.clone());
    info!("LLM client initialized (model: {})", llm.model());
    let generator = Arc::new(GeminiQuestionGenerator::new(llm));

    // Pick the upload persistence mode
    let store: Arc<dyn InterviewStore> = if config.persist_uploads {
        Arc::new(PgInterviewStore::new(db.clone()))
    } else {
        info!("PERSIST_UPLOADS=false: uploads will not be stored");
        Arc::new(EphemeralStore)
    };

    // Build app state
    let state = AppState {
        db,
        generator,
        store,
    };

    // Build router
    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(build_cors(&config)?)
        .layer(DefaultBodyLimit::max(config.max_upload_bytes()));

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Exact-origin CORS when `ALLOWED_ORIGINS` is set, permissive otherwise.
/// A malformed origin is a config mistake, so it aborts startup rather than
/// quietly narrowing the allow list.
fn build_cors(config: &Config) -> Result<CorsLayer> {
    if config.allowed_origins.is_empty() {
        return Ok(CorsLayer::permissive());
    }

    let origins = config
        .allowed_origins
        .iter()
        .map(|origin| {
            origin
                .parse::<HeaderValue>()
                .with_context(|| format!("Invalid origin in ALLOWED_ORIGINS: {origin:?}"))
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods(Any)
        .allow_headers(Any))
}
