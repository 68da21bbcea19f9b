use std::sync::Arc;

use sqlx::PgPool;

use crate::generation::service::QuestionGenerator;
use crate::interviews::store::InterviewStore;

/// Shared application state injected into all route handlers via Axum extractors.
/// Configuration is consumed at startup; only the built components live here.
#[derive(Clone)]
pub struct AppState {
    pub db: PgPool,
    /// The one external network dependency. Pluggable so tests can mock
    /// generation; production wires `GeminiQuestionGenerator`.
    pub generator: Arc<dyn QuestionGenerator>,
    /// Persist capability of the upload pipeline. `PERSIST_UPLOADS` selects
    /// Postgres-backed or ephemeral at startup.
    pub store: Arc<dyn InterviewStore>,
}
