// Question generation: prompt construction, the LLM call, and response
// normalization. All LLM calls go through llm_client; no direct provider
// calls here.

pub mod prompts;
pub mod service;
