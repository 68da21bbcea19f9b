//! Per-request ingestion pipeline:
//! validate → extract → persist draft → generate → persist final.
//!
//! Strictly linear; the only suspension points are the store writes and the
//! LLM call. Nothing is retained across requests.

use bytes::Bytes;
use tracing::info;

use crate::errors::AppError;
use crate::generation::service::QuestionGenerator;
use crate::ingest::extract::extract_text;
use crate::ingest::validation::{validate_file_type, DocumentKind};
use crate::interviews::store::{InterviewDraft, InterviewStore};
use crate::models::interview::{InterviewRow, QuestionAnswer};

/// One uploaded file part, held only for the duration of the request.
#[derive(Debug)]
pub struct UploadedFile {
    pub filename: String,
    pub bytes: Bytes,
}

#[derive(Debug)]
pub struct UploadRequest {
    pub resume: UploadedFile,
    pub job_description: UploadedFile,
    pub additional_context: Option<String>,
}

/// `record` is present iff the store persists; `questions` may be empty when
/// generation degraded (the record, if any, then still carries NULL).
#[derive(Debug)]
pub struct PipelineOutcome {
    pub record: Option<InterviewRow>,
    pub questions: Vec<QuestionAnswer>,
}

pub async fn run_pipeline(
    store: &dyn InterviewStore,
    generator: &dyn QuestionGenerator,
    request: UploadRequest,
) -> Result<PipelineOutcome, AppError> {
    validate_file_type(&request.resume.filename, DocumentKind::Resume)?;
    validate_file_type(&request.job_description.filename, DocumentKind::JobDescription)?;

    let resume_text = extracted_non_blank(&request.resume, DocumentKind::Resume)?;
    let jd_text = extracted_non_blank(&request.job_description, DocumentKind::JobDescription)?;

    info!(
        resume = %request.resume.filename,
        job_description = %request.job_description.filename,
        resume_bytes = request.resume.bytes.len(),
        job_description_bytes = request.job_description.bytes.len(),
        "Upload validated and extracted"
    );

    let draft = InterviewDraft {
        resume_filename: request.resume.filename,
        resume_content: resume_text,
        job_description_filename: request.job_description.filename,
        job_description_content: jd_text,
    };
    let record = store.create_draft(&draft).await?;

    // Never fails; an empty set means generation degraded.
    let questions = generator
        .generate(
            &draft.resume_content,
            &draft.job_description_content,
            request.additional_context.as_deref(),
        )
        .await;

    let record = match record {
        Some(row) if !questions.is_empty() => {
            Some(store.attach_questions(row.id, &questions).await?)
        }
        other => other,
    };

    info!(
        questions = questions.len(),
        persisted = record.is_some(),
        "Upload pipeline finished"
    );

    Ok(PipelineOutcome { record, questions })
}

/// Extraction plus the empty-after-strip check. A document that parses but
/// contains no text is rejected the same way a bad filename is.
fn extracted_non_blank(file: &UploadedFile, kind: DocumentKind) -> Result<String, AppError> {
    let text = extract_text(&file.bytes, &file.filename)?;
    if text.trim().is_empty() {
        return Err(AppError::Validation(format!(
            "No extractable text found in the {} '{}'",
            kind.label(),
            file.filename
        )));
    }
    Ok(text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interviews::store::EphemeralStore;
    use async_trait::async_trait;

    struct FixedGenerator(Vec<QuestionAnswer>);

    #[async_trait]
    impl QuestionGenerator for FixedGenerator {
        async fn generate(
            &self,
            _resume_text: &str,
            _jd_text: &str,
            _additional_context: Option<&str>,
        ) -> Vec<QuestionAnswer> {
            self.0.clone()
        }
    }

    fn txt_upload(filename: &str, content: &str) -> UploadedFile {
        UploadedFile {
            filename: filename.to_string(),
            bytes: Bytes::from(content.as_bytes().to_vec()),
        }
    }

    fn pdf_upload(filename: &str, content: &str) -> UploadedFile {
        UploadedFile {
            filename: filename.to_string(),
            bytes: Bytes::from(crate::ingest::extract::one_page_pdf(content)),
        }
    }

    fn two_pairs() -> Vec<QuestionAnswer> {
        vec![
            QuestionAnswer {
                question: "First?".to_string(),
                answer: "One.".to_string(),
            },
            QuestionAnswer {
                question: "Second?".to_string(),
                answer: "Two.".to_string(),
            },
        ]
    }

    #[tokio::test]
    async fn test_happy_path_returns_generated_pairs_in_order() {
        let outcome = run_pipeline(
            &EphemeralStore,
            &FixedGenerator(two_pairs()),
            UploadRequest {
                resume: pdf_upload("resume.pdf", "Experienced engineer"),
                job_description: txt_upload("jd.txt", "Need a backend engineer"),
                additional_context: None,
            },
        )
        .await
        .unwrap();

        assert!(outcome.record.is_none());
        assert_eq!(outcome.questions, two_pairs());
    }

    #[tokio::test]
    async fn test_invalid_resume_extension_rejected_before_extraction() {
        let err = run_pipeline(
            &EphemeralStore,
            &FixedGenerator(two_pairs()),
            UploadRequest {
                resume: txt_upload("resume.exe", "ignored"),
                job_description: txt_upload("jd.txt", "Need a backend engineer"),
                additional_context: None,
            },
        )
        .await
        .unwrap_err();

        assert!(err.to_string().contains("Invalid file type"));
    }

    #[tokio::test]
    async fn test_blank_extracted_text_rejected() {
        let err = run_pipeline(
            &EphemeralStore,
            &FixedGenerator(two_pairs()),
            UploadRequest {
                resume: pdf_upload("resume.pdf", "Experienced engineer"),
                job_description: txt_upload("jd.txt", "   \n\t  "),
                additional_context: None,
            },
        )
        .await
        .unwrap_err();

        assert!(err.to_string().contains("No extractable text"));
    }

    #[tokio::test]
    async fn test_degraded_generation_completes_with_empty_set() {
        let outcome = run_pipeline(
            &EphemeralStore,
            &FixedGenerator(Vec::new()),
            UploadRequest {
                resume: pdf_upload("resume.pdf", "Experienced engineer"),
                job_description: txt_upload("jd.txt", "Need a backend engineer"),
                additional_context: None,
            },
        )
        .await
        .unwrap();

        assert!(outcome.record.is_none());
        assert!(outcome.questions.is_empty());
        // Outcomes show up in assertion failures, so they must debug-format.
        assert!(format!("{outcome:?}").contains("PipelineOutcome"));
    }
}
