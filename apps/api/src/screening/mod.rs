// Screening pipeline: JD summarization and resume analysis.
// All LLM calls go through llm_client; all model output goes through
// extraction::normalizer before it becomes a typed record.

pub mod cv_analyzer;
pub mod handlers;
pub mod jd_summarizer;
pub mod models;
pub mod prompts;
