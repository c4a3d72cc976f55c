//! CV Analyzer — evaluates resumes against a summarized JD.
//!
//! Batch analysis runs one resume at a time; each failure is recorded as an
//! error entry for that resume and never aborts the rest of the batch.

use bytes::Bytes;
use tracing::{info, warn};

use crate::errors::AppError;
use crate::extraction::normalizer::{extract_structured, ParseOutcome};
use crate::extraction::text_extractor::extract_document_text;
use crate::llm_client::prompts::JSON_ONLY_SYSTEM;
use crate::llm_client::LlmClient;
use crate::screening::models::{CandidateAnalysis, CandidateRecord, JobDescriptionSummary};
use crate::screening::prompts::CV_ANALYSIS_PROMPT_TEMPLATE;

/// One uploaded resume plus optional recruiter-supplied identity fields.
#[derive(Debug, Clone)]
pub struct ResumeUpload {
    pub file_name: String,
    pub candidate_name: Option<String>,
    pub candidate_email: Option<String>,
    pub bytes: Bytes,
}

/// Analyzes one resume text against the JD summary.
///
/// Parse failures degrade to a best-effort record; only a model-invocation
/// failure surfaces as an error.
pub async fn analyze_cv(
    resume_text: &str,
    jd: &JobDescriptionSummary,
    llm: &LlmClient,
) -> Result<CandidateAnalysis, AppError> {
    let jd_summary = serde_json::to_string_pretty(jd)
        .map_err(|e| AppError::Internal(anyhow::anyhow!("Failed to serialize JD summary: {e}")))?;

    let prompt = CV_ANALYSIS_PROMPT_TEMPLATE
        .replace("{resume_text}", resume_text)
        .replace("{jd_summary}", &jd_summary);

    let outcome =
        extract_structured(llm, &prompt, JSON_ONLY_SYSTEM, CandidateAnalysis::FIELDS).await;

    match outcome {
        ParseOutcome::Structured(record) => Ok(CandidateAnalysis::from_record(&record, false)),
        ParseOutcome::Fallback { record, note } => {
            warn!("Candidate analysis recovered via {note}");
            Ok(CandidateAnalysis::from_record(&record, true))
        }
        ParseOutcome::Error { message, .. } => {
            Err(AppError::Llm(format!("Resume analysis failed: {message}")))
        }
    }
}

/// Analyzes one uploaded document end-to-end: text extraction → analysis.
pub async fn analyze_upload(
    upload: &ResumeUpload,
    jd: &JobDescriptionSummary,
    llm: &LlmClient,
) -> Result<CandidateAnalysis, AppError> {
    let resume_text = extract_document_text(&upload.file_name, &upload.bytes)?;
    analyze_cv(&resume_text, jd, llm).await
}

/// Analyzes a batch of uploads sequentially with per-document failure
/// isolation: a failed resume becomes an error record, the rest proceed.
pub async fn analyze_batch(
    uploads: &[ResumeUpload],
    jd: &JobDescriptionSummary,
    llm: &LlmClient,
) -> Vec<CandidateRecord> {
    let mut records = Vec::with_capacity(uploads.len());

    for upload in uploads {
        let record = match analyze_upload(upload, jd, llm).await {
            Ok(analysis) => to_record(upload, analysis),
            Err(e) => {
                warn!("Analysis failed for '{}': {e}", upload.file_name);
                CandidateRecord {
                    source: upload.file_name.clone(),
                    candidate_name: upload
                        .candidate_name
                        .clone()
                        .unwrap_or_else(|| upload.file_name.clone()),
                    candidate_email: upload.candidate_email.clone(),
                    analysis: None,
                    error: Some(e.to_string()),
                }
            }
        };
        records.push(record);
    }

    info!(
        "Batch analysis complete: {} of {} resumes analyzed",
        records.iter().filter(|r| !r.is_error()).count(),
        records.len()
    );
    records
}

/// Wraps a successful analysis into a session record. A recruiter-supplied
/// name wins over the extracted one.
pub fn to_record(upload: &ResumeUpload, analysis: CandidateAnalysis) -> CandidateRecord {
    CandidateRecord {
        source: upload.file_name.clone(),
        candidate_name: upload
            .candidate_name
            .clone()
            .unwrap_or_else(|| analysis.candidate_name.clone()),
        candidate_email: upload.candidate_email.clone(),
        analysis: Some(analysis),
        error: None,
    }
}
