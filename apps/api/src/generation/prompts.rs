// Interview generation prompt templates.
// All prompts for the generation module are defined here.

pub const INTERVIEW_QUESTIONS_PROMPT: &str = r#"You are an expert technical interviewer. Based on the following resume and job description,
generate 10-15 relevant interview questions along with reference answers.

Resume:
{resume_text}

Job Description:
{jd_text}
{context_section}
Please provide the output as a JSON array with objects containing exactly two string fields: 'question' and 'answer'.
The questions should cover:
1. Technical skills mentioned in the resume
2. Experience related to the job requirements
3. Behavioral questions relevant to the role
4. Scenario-based questions matching the job description

Format your response ONLY as a valid JSON array, nothing else. Do not include any markdown code blocks or explanations.
Just return the raw JSON array.

Example format:
[
  {"question": "Tell me about...", "answer": "A good answer would..."},
  {"question": "Describe your experience with...", "answer": "The candidate should..."}
]"#;

const CONTEXT_SECTION_TEMPLATE: &str = "\nAdditional context from the candidate:\n{context}\n";

/// Composes the full instruction for the LLM. Pure: identical inputs always
/// yield the identical prompt. A blank `additional_context` is treated as
/// absent.
pub fn build_prompt(resume_text: &str, jd_text: &str, additional_context: Option<&str>) -> String {
    let context_section = match additional_context {
        Some(ctx) if !ctx.trim().is_empty() => {
            CONTEXT_SECTION_TEMPLATE.replace("{context}", ctx.trim())
        }
        _ => String::new(),
    };

    INTERVIEW_QUESTIONS_PROMPT
        .replace("{resume_text}", resume_text)
        .replace("{jd_text}", jd_text)
        .replace("{context_section}", &context_section)
}
