use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::types::Json;
use sqlx::FromRow;
use uuid::Uuid;

/// A single generated interview question with its reference answer.
/// Vec ordering is interview order and must be preserved end to end.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionAnswer {
    pub question: String,
    pub answer: String,
}

/// One persisted interview: the uploaded documents' text plus the generated
/// question set. `questions_answers` stays NULL until generation succeeds;
/// a degraded (empty) generation never writes a value, so "never generated"
/// remains observable at the storage level.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct InterviewRow {
    pub id: Uuid,
    pub resume_filename: String,
    pub resume_content: String,
    pub job_description_filename: String,
    pub job_description_content: String,
    pub questions_answers: Option<Json<Vec<QuestionAnswer>>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
}

/// Read/response projection of an interview. Document text is deliberately
/// left out: it can be large and the callers only need filenames.
#[derive(Debug, Clone, Serialize)]
pub struct InterviewResponse {
    pub id: Uuid,
    pub resume_filename: String,
    pub job_description_filename: String,
    pub questions_answers: Option<Vec<QuestionAnswer>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
}

impl From<InterviewRow> for InterviewResponse {
    fn from(row: InterviewRow) -> Self {
        InterviewResponse {
            id: row.id,
            resume_filename: row.resume_filename,
            job_description_filename: row.job_description_filename,
            questions_answers: row.questions_answers.map(|j| j.0),
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

/// Questions-only projection for `GET /api/v1/interviews/:id/questions`.
#[derive(Debug, Clone, Serialize)]
pub struct InterviewQuestionsResponse {
    pub id: Uuid,
    pub questions_answers: Vec<QuestionAnswer>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_question_answer_serde_round_trip_preserves_order() {
        let pairs = vec![
            QuestionAnswer {
                question: "Tell me about your Rust experience.".to_string(),
                answer: "A good answer covers ownership and async.".to_string(),
            },
            QuestionAnswer {
                question: "Describe a production incident you debugged.".to_string(),
                answer: "The candidate should walk through diagnosis steps.".to_string(),
            },
            QuestionAnswer {
                question: "How would you design a rate limiter?".to_string(),
                answer: "Token bucket or sliding window, with tradeoffs.".to_string(),
            },
        ];

        let json = serde_json::to_string(&pairs).unwrap();
        let back: Vec<QuestionAnswer> = serde_json::from_str(&json).unwrap();
        assert_eq!(back, pairs);
    }

    #[test]
    fn test_response_projection_unwraps_jsonb() {
        let row = InterviewRow {
            id: Uuid::new_v4(),
            resume_filename: "resume.pdf".to_string(),
            resume_content: "Experienced engineer".to_string(),
            job_description_filename: "jd.txt".to_string(),
            job_description_content: "Need a backend engineer".to_string(),
            questions_answers: Some(Json(vec![QuestionAnswer {
                question: "q".to_string(),
                answer: "a".to_string(),
            }])),
            created_at: Utc::now(),
            updated_at: None,
        };

        let response: InterviewResponse = row.into();
        assert_eq!(response.questions_answers.unwrap().len(), 1);
    }

    #[test]
    fn test_response_projection_keeps_null_questions() {
        let row = InterviewRow {
            id: Uuid::new_v4(),
            resume_filename: "resume.pdf".to_string(),
            resume_content: "text".to_string(),
            job_description_filename: "jd.pdf".to_string(),
            job_description_content: "text".to_string(),
            questions_answers: None,
            created_at: Utc::now(),
            updated_at: None,
        };

        let response: InterviewResponse = row.into();
        assert!(response.questions_answers.is_none());
    }
}
