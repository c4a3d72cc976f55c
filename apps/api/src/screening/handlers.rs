//! Axum route handlers for the Screening API.

use axum::{
    extract::{Multipart, Path, State},
    Json,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::AppError;
use crate::screening::cv_analyzer::{analyze_batch, analyze_upload, to_record, ResumeUpload};
use crate::screening::jd_summarizer::summarize_jd;
use crate::screening::models::{CandidateRecord, JobDescriptionSummary};
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct SummarizeJdRequest {
    pub session_id: Uuid,
    pub jd_text: String,
}

#[derive(Debug, Serialize)]
pub struct SummarizeJdResponse {
    pub summary: JobDescriptionSummary,
    /// True when the summary came from fallback recovery.
    pub degraded: bool,
}

#[derive(Debug, Serialize)]
pub struct AnalyzeBatchResponse {
    pub records: Vec<CandidateRecord>,
    pub analyzed: usize,
    pub failed: usize,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/jd/summarize
///
/// Summarizes a job description and stores the result in the session.
/// Re-running overwrites the previous summary.
pub async fn handle_summarize_jd(
    State(state): State<AppState>,
    Json(request): Json<SummarizeJdRequest>,
) -> Result<Json<SummarizeJdResponse>, AppError> {
    if request.jd_text.trim().is_empty() {
        return Err(AppError::Validation("jd_text cannot be empty".to_string()));
    }
    // Fail fast on an unknown session before spending an LLM call.
    state
        .sessions
        .get(request.session_id)
        .await
        .ok_or_else(|| AppError::NotFound(format!("Session {} not found", request.session_id)))?;

    let (summary, degraded) = summarize_jd(&request.jd_text, &state.llm).await?;

    state
        .sessions
        .update(request.session_id, |session| {
            session.jd_summary = Some(summary.clone());
        })
        .await?;

    Ok(Json(SummarizeJdResponse { summary, degraded }))
}

/// POST /api/v1/sessions/:id/candidates/analyze
///
/// Analyzes a single uploaded resume against the session's JD summary.
/// Multipart fields: `resume` (file, required), `candidate_name`,
/// `candidate_email` (text, optional).
pub async fn handle_analyze(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
    multipart: Multipart,
) -> Result<Json<CandidateRecord>, AppError> {
    let mut uploads = read_uploads(multipart).await?;
    let upload = match uploads.len() {
        1 => uploads.remove(0),
        0 => {
            return Err(AppError::Validation(
                "A 'resume' file field is required".to_string(),
            ))
        }
        n => {
            return Err(AppError::Validation(format!(
                "Expected exactly one resume, got {n}; use the batch endpoint"
            )))
        }
    };

    let jd = require_jd_summary(&state, session_id).await?;
    let analysis = analyze_upload(&upload, &jd, &state.llm).await?;
    let record = to_record(&upload, analysis);

    state
        .sessions
        .update(session_id, |session| {
            session.analyses.push(record.clone());
        })
        .await?;

    Ok(Json(record))
}

/// POST /api/v1/sessions/:id/candidates/analyze-batch
///
/// Analyzes every uploaded `resume` field sequentially. A failure on one
/// resume becomes an error record for that resume; the rest proceed.
pub async fn handle_analyze_batch(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
    multipart: Multipart,
) -> Result<Json<AnalyzeBatchResponse>, AppError> {
    let uploads = read_uploads(multipart).await?;
    if uploads.is_empty() {
        return Err(AppError::Validation(
            "At least one 'resume' file field is required".to_string(),
        ));
    }

    let jd = require_jd_summary(&state, session_id).await?;
    let records = analyze_batch(&uploads, &jd, &state.llm).await;

    state
        .sessions
        .update(session_id, |session| {
            session.analyses.extend(records.iter().cloned());
        })
        .await?;

    let failed = records.iter().filter(|r| r.is_error()).count();
    Ok(Json(AnalyzeBatchResponse {
        analyzed: records.len() - failed,
        failed,
        records,
    }))
}

// ────────────────────────────────────────────────────────────────────────────
// Helpers
// ────────────────────────────────────────────────────────────────────────────

async fn require_jd_summary(
    state: &AppState,
    session_id: Uuid,
) -> Result<JobDescriptionSummary, AppError> {
    let session = state
        .sessions
        .get(session_id)
        .await
        .ok_or_else(|| AppError::NotFound(format!("Session {session_id} not found")))?;
    session.jd_summary.ok_or_else(|| {
        AppError::Validation("Summarize a job description for this session first".to_string())
    })
}

/// Reads all `resume` file fields plus optional identity text fields.
/// Recruiter-supplied identity applies only to single-upload requests —
/// there is no way to pair one name with one of many files.
async fn read_uploads(mut multipart: Multipart) -> Result<Vec<ResumeUpload>, AppError> {
    let mut uploads = Vec::new();
    let mut candidate_name: Option<String> = None;
    let mut candidate_email: Option<String> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Validation(format!("Malformed multipart request: {e}")))?
    {
        let name = field.name().unwrap_or_default().to_string();
        match name.as_str() {
            "resume" => {
                let file_name = field
                    .file_name()
                    .filter(|f| !f.is_empty())
                    .unwrap_or("resume")
                    .to_string();
                let bytes = field.bytes().await.map_err(|e| {
                    AppError::Validation(format!("Failed to read upload '{file_name}': {e}"))
                })?;
                uploads.push(ResumeUpload {
                    file_name,
                    candidate_name: None,
                    candidate_email: None,
                    bytes,
                });
            }
            "candidate_name" => candidate_name = read_text_field(field).await?,
            "candidate_email" => candidate_email = read_text_field(field).await?,
            _ => {} // unknown fields are ignored
        }
    }

    if uploads.len() == 1 {
        uploads[0].candidate_name = candidate_name;
        uploads[0].candidate_email = candidate_email;
    }
    Ok(uploads)
}

async fn read_text_field(field: axum::extract::multipart::Field<'_>) -> Result<Option<String>, AppError> {
    let text = field
        .text()
        .await
        .map_err(|e| AppError::Validation(format!("Malformed multipart field: {e}")))?;
    let trimmed = text.trim();
    Ok(if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    })
}
