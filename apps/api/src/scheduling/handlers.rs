//! Axum route handlers for invitation drafting and handoff.

use axum::{extract::State, Json};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::AppError;
use crate::scheduling::email::{draft_email, InterviewEmailDraft};
use crate::screening::models::CandidateRecord;
use crate::shortlist::shortlister::ShortlistEntry;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct DraftEmailRequest {
    pub session_id: Uuid,
    pub candidate_name: String,
}

#[derive(Debug, Deserialize)]
pub struct SendEmailRequest {
    pub session_id: Uuid,
    pub candidate_name: String,
}

#[derive(Debug, Serialize)]
pub struct SendEmailResponse {
    pub status: String,
    pub recipient: String,
}

/// POST /api/v1/emails/draft
///
/// Drafts an interview invitation for an analyzed candidate and stores it
/// in the session. Re-drafting the same candidate overwrites the prior
/// draft.
pub async fn handle_draft_email(
    State(state): State<AppState>,
    Json(request): Json<DraftEmailRequest>,
) -> Result<Json<InterviewEmailDraft>, AppError> {
    let session = state
        .sessions
        .get(request.session_id)
        .await
        .ok_or_else(|| AppError::NotFound(format!("Session {} not found", request.session_id)))?;

    let jd = session.jd_summary.clone().ok_or_else(|| {
        AppError::Validation("Summarize a job description for this session first".to_string())
    })?;

    let record = find_candidate(&session.analyses, &request.candidate_name)?;
    let analysis = record.analysis.as_ref().ok_or_else(|| {
        AppError::Validation(format!(
            "Candidate '{}' has no successful analysis to draft from",
            record.candidate_name
        ))
    })?;

    let candidate = ShortlistEntry {
        name: record.candidate_name.clone(),
        contact: record
            .candidate_email
            .clone()
            .unwrap_or_else(|| analysis.contact_info.clone()),
        match_percentage: analysis.overall_match,
        strengths: analysis.strengths.clone(),
        missing_skills: analysis.missing_skills.clone(),
        recommendation: analysis.recommendation,
    };

    let draft = draft_email(
        &candidate,
        &jd,
        &state.config.company_name,
        Utc::now().date_naive(),
        &state.llm,
    )
    .await;

    state
        .sessions
        .update(request.session_id, |session| {
            session
                .drafts
                .insert(draft.candidate_name.clone(), draft.clone());
        })
        .await?;

    Ok(Json(draft))
}

/// POST /api/v1/emails/send
///
/// Hands the stored draft for a candidate to the email transport.
pub async fn handle_send_email(
    State(state): State<AppState>,
    Json(request): Json<SendEmailRequest>,
) -> Result<Json<SendEmailResponse>, AppError> {
    let session = state
        .sessions
        .get(request.session_id)
        .await
        .ok_or_else(|| AppError::NotFound(format!("Session {} not found", request.session_id)))?;

    let draft = session
        .drafts
        .values()
        .find(|d| d.candidate_name.eq_ignore_ascii_case(request.candidate_name.trim()))
        .ok_or_else(|| {
            AppError::NotFound(format!(
                "No draft for candidate '{}'; draft one first",
                request.candidate_name
            ))
        })?;

    state.mailer.send(draft).await?;

    Ok(Json(SendEmailResponse {
        status: "handed_off".to_string(),
        recipient: draft.candidate_email.clone(),
    }))
}

fn find_candidate<'a>(
    analyses: &'a [CandidateRecord],
    name: &str,
) -> Result<&'a CandidateRecord, AppError> {
    let wanted = name.trim();
    analyses
        .iter()
        .find(|record| record.candidate_name.eq_ignore_ascii_case(wanted))
        .ok_or_else(|| AppError::NotFound(format!("Candidate '{wanted}' not found in session")))
}
