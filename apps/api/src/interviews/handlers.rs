//! Read-only interview endpoints. No mutation happens here.

use axum::{
    extract::{Path, State},
    Json,
};
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::interview::{InterviewQuestionsResponse, InterviewResponse, InterviewRow};
use crate::state::AppState;

/// GET /api/v1/interviews
pub async fn handle_list_interviews(
    State(state): State<AppState>,
) -> Result<Json<Vec<InterviewResponse>>, AppError> {
    let rows: Vec<InterviewRow> =
        sqlx::query_as("SELECT * FROM interviews ORDER BY created_at DESC")
            .fetch_all(&state.db)
            .await?;

    Ok(Json(rows.into_iter().map(Into::into).collect()))
}

/// GET /api/v1/interviews/:id
pub async fn handle_get_interview(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<InterviewResponse>, AppError> {
    let row = fetch_interview(&state, id).await?;
    Ok(Json(row.into()))
}

/// GET /api/v1/interviews/:id/questions
///
/// Questions-only projection; a record whose generation degraded (NULL
/// questions) answers with an empty list.
pub async fn handle_get_interview_questions(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<InterviewQuestionsResponse>, AppError> {
    let row = fetch_interview(&state, id).await?;
    Ok(Json(InterviewQuestionsResponse {
        id: row.id,
        questions_answers: row.questions_answers.map(|j| j.0).unwrap_or_default(),
    }))
}

async fn fetch_interview(state: &AppState, id: Uuid) -> Result<InterviewRow, AppError> {
    let row: Option<InterviewRow> = sqlx::query_as("SELECT * FROM interviews WHERE id = $1")
        .bind(id)
        .fetch_optional(&state.db)
        .await?;

    row.ok_or_else(|| AppError::NotFound(format!("Interview {id} not found")))
}
