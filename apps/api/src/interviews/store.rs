//! Persistence seam for the upload pipeline.
//!
//! The two deployment modes of the upload endpoint differ only in whether
//! results are stored, so the pipeline is written against `InterviewStore`
//! and the mode picks the implementation at startup: Postgres-backed, or an
//! ephemeral no-op that skips the draft state entirely.

use anyhow::anyhow;
use async_trait::async_trait;
use sqlx::types::Json;
use sqlx::PgPool;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::interview::{InterviewRow, QuestionAnswer};

/// The validated, extracted inputs of one upload, ready to persist.
#[derive(Debug)]
pub struct InterviewDraft {
    pub resume_filename: String,
    pub resume_content: String,
    pub job_description_filename: String,
    pub job_description_content: String,
}

#[async_trait]
pub trait InterviewStore: Send + Sync {
    /// Creates the record with NULL questions. Returns `None` when this
    /// store does not persist (the pipeline then skips the final write).
    async fn create_draft(&self, draft: &InterviewDraft)
        -> Result<Option<InterviewRow>, AppError>;

    /// Attaches a complete question set to a draft in one write.
    /// Only called with a non-empty set; a degraded generation leaves the
    /// draft's NULL in place.
    async fn attach_questions(
        &self,
        id: Uuid,
        questions: &[QuestionAnswer],
    ) -> Result<InterviewRow, AppError>;
}

pub struct PgInterviewStore {
    pool: PgPool,
}

impl PgInterviewStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl InterviewStore for PgInterviewStore {
    async fn create_draft(
        &self,
        draft: &InterviewDraft,
    ) -> Result<Option<InterviewRow>, AppError> {
        let row: InterviewRow = sqlx::query_as(
            r#"
            INSERT INTO interviews
                (resume_filename, resume_content,
                 job_description_filename, job_description_content)
            VALUES ($1, $2, $3, $4)
            RETURNING *
            "#,
        )
        .bind(&draft.resume_filename)
        .bind(&draft.resume_content)
        .bind(&draft.job_description_filename)
        .bind(&draft.job_description_content)
        .fetch_one(&self.pool)
        .await?;

        Ok(Some(row))
    }

    async fn attach_questions(
        &self,
        id: Uuid,
        questions: &[QuestionAnswer],
    ) -> Result<InterviewRow, AppError> {
        // Single-row UPDATE: the question set is all-or-nothing, so no
        // half-populated record can survive a failure here.
        let row: InterviewRow = sqlx::query_as(
            r#"
            UPDATE interviews
            SET questions_answers = $2, updated_at = now()
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(Json(questions.to_vec()))
        .fetch_one(&self.pool)
        .await?;

        Ok(row)
    }
}

/// No-op store for the deployment mode that returns questions directly
/// without writing anything.
pub struct EphemeralStore;

#[async_trait]
impl InterviewStore for EphemeralStore {
    async fn create_draft(
        &self,
        _draft: &InterviewDraft,
    ) -> Result<Option<InterviewRow>, AppError> {
        Ok(None)
    }

    async fn attach_questions(
        &self,
        _id: Uuid,
        _questions: &[QuestionAnswer],
    ) -> Result<InterviewRow, AppError> {
        // create_draft never hands out an id, so the pipeline cannot get here.
        Err(AppError::Internal(anyhow!(
            "ephemeral store cannot attach questions"
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_ephemeral_store_never_creates_a_record() {
        let store = EphemeralStore;
        let draft = InterviewDraft {
            resume_filename: "resume.pdf".to_string(),
            resume_content: "text".to_string(),
            job_description_filename: "jd.txt".to_string(),
            job_description_content: "text".to_string(),
        };
        assert!(store.create_draft(&draft).await.unwrap().is_none());
    }
}
