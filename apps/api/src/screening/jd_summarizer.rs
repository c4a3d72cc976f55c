//! JD Summarizer — extracts a structured summary from a raw job description.

use tracing::warn;

use crate::errors::AppError;
use crate::extraction::normalizer::{extract_structured, ParseOutcome};
use crate::llm_client::prompts::JSON_ONLY_SYSTEM;
use crate::llm_client::LlmClient;
use crate::screening::models::JobDescriptionSummary;
use crate::screening::prompts::JD_SUMMARY_PROMPT_TEMPLATE;

/// Summarizes a job description via the extraction pipeline.
///
/// Returns the summary and a `degraded` flag that is true when the record
/// came from fallback recovery. Only a model-invocation failure is an error.
pub async fn summarize_jd(
    jd_text: &str,
    llm: &LlmClient,
) -> Result<(JobDescriptionSummary, bool), AppError> {
    let prompt = JD_SUMMARY_PROMPT_TEMPLATE.replace("{jd_text}", jd_text);
    let outcome =
        extract_structured(llm, &prompt, JSON_ONLY_SYSTEM, JobDescriptionSummary::FIELDS).await;

    match outcome {
        ParseOutcome::Structured(record) => {
            Ok((JobDescriptionSummary::from_record(&record), false))
        }
        ParseOutcome::Fallback { record, note } => {
            warn!("JD summary recovered via {note}");
            Ok((JobDescriptionSummary::from_record(&record), true))
        }
        ParseOutcome::Error { message, .. } => {
            Err(AppError::Llm(format!("JD summarization failed: {message}")))
        }
    }
}
