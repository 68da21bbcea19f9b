pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::ingest::handlers::handle_upload;
use crate::interviews::handlers::{
    handle_get_interview, handle_get_interview_questions, handle_list_interviews,
};
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route("/api/v1/upload", post(handle_upload))
        .route("/api/v1/interviews", get(handle_list_interviews))
        .route("/api/v1/interviews/:id", get(handle_get_interview))
        .route(
            "/api/v1/interviews/:id/questions",
            get(handle_get_interview_questions),
        )
        .with_state(state)
}
