//! Question generation service: prompt → LLM → normalized question list.
//!
//! The service is deliberately infallible. An LLM transport failure or an
//! unparsable reply must not fail the upload request that triggered it, so
//! every failure path collapses to an empty list and the caller reads
//! emptiness as "generation did not succeed".

use async_trait::async_trait;
use serde_json::Value;
use tracing::warn;

use crate::generation::prompts::build_prompt;
use crate::llm_client::LlmClient;
use crate::models::interview::QuestionAnswer;

/// Seam for the one external network dependency in the pipeline.
/// Router tests swap in a mock; production wires `GeminiQuestionGenerator`.
#[async_trait]
pub trait QuestionGenerator: Send + Sync {
    async fn generate(
        &self,
        resume_text: &str,
        jd_text: &str,
        additional_context: Option<&str>,
    ) -> Vec<QuestionAnswer>;
}

pub struct GeminiQuestionGenerator {
    llm: LlmClient,
}

impl GeminiQuestionGenerator {
    pub fn new(llm: LlmClient) -> Self {
        Self { llm }
    }
}

#[async_trait]
impl QuestionGenerator for GeminiQuestionGenerator {
    async fn generate(
        &self,
        resume_text: &str,
        jd_text: &str,
        additional_context: Option<&str>,
    ) -> Vec<QuestionAnswer> {
        let prompt = build_prompt(resume_text, jd_text, additional_context);

        match self.llm.generate_content(&prompt).await {
            Ok(raw) => normalize_questions(&raw),
            Err(e) => {
                warn!("Question generation failed, returning empty set: {e}");
                Vec::new()
            }
        }
    }
}

/// Reconciles the LLM's loosely-specified reply into the fixed
/// question/answer list shape. Priority order:
/// 1. top-level array → used directly;
/// 2. object with a `questions` or `questions_answers` key → that value;
/// 3. any other non-empty object → the first key's value (insertion order);
/// 4. everything else → empty.
/// Elements that are not `{question, answer}` string objects are dropped.
/// Never returns an error and never panics.
pub fn normalize_questions(raw: &str) -> Vec<QuestionAnswer> {
    let cleaned = strip_json_fences(raw);

    let value: Value = match serde_json::from_str(cleaned) {
        Ok(v) => v,
        Err(e) => {
            warn!("LLM reply is not valid JSON: {e}");
            return Vec::new();
        }
    };

    let items = match value {
        Value::Array(items) => items,
        Value::Object(map) => {
            let inner = map
                .get("questions")
                .or_else(|| map.get("questions_answers"))
                .cloned()
                // Best-effort fallback: the reply is wrapped under some
                // other single key. No correctness guarantee here.
                .or_else(|| map.values().next().cloned());
            match inner {
                Some(Value::Array(items)) => items,
                _ => {
                    warn!("LLM reply object carries no question array");
                    return Vec::new();
                }
            }
        }
        _ => {
            warn!("LLM reply has unexpected top-level JSON type");
            return Vec::new();
        }
    };

    items
        .into_iter()
        .filter_map(|item| serde_json::from_value::<QuestionAnswer>(item).ok())
        .collect()
}

/// Strips ```json ... ``` or ``` ... ``` code fences from LLM output.
fn strip_json_fences(text: &str) -> &str {
    let text = text.trim();
    if let Some(stripped) = text.strip_prefix("```json") {
        stripped
            .trim_start()
            .strip_suffix("```")
            .map(|s| s.trim())
            .unwrap_or(stripped.trim_start())
    } else if let Some(stripped) = text.strip_prefix("```") {
        stripped
            .trim_start()
            .strip_suffix("```")
            .map(|s| s.trim())
            .unwrap_or(stripped.trim_start())
    } else {
        text
    }
}
