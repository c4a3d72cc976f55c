//! Axum route handlers for shortlisting and the deterministic overlap path.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::AppError;
use crate::shortlist::scorer::{score_skill_overlap, SkillOverlap};
use crate::shortlist::shortlister::{shortlist, ShortlistEntry};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct ShortlistRequest {
    pub session_id: Uuid,
    /// Overrides the session threshold for this call only.
    pub threshold: Option<u8>,
}

#[derive(Debug, Serialize)]
pub struct ShortlistResponse {
    pub threshold: u8,
    pub entries: Vec<ShortlistEntry>,
}

#[derive(Debug, Deserialize)]
pub struct OverlapRequest {
    pub candidate_skills: Vec<String>,
    pub required_skills: Vec<String>,
}

/// POST /api/v1/shortlist
///
/// Filters the session's accumulated analyses against the threshold and
/// returns them sorted by match score. An empty result is valid output.
pub async fn handle_shortlist(
    State(state): State<AppState>,
    Json(request): Json<ShortlistRequest>,
) -> Result<Json<ShortlistResponse>, AppError> {
    let session = state
        .sessions
        .get(request.session_id)
        .await
        .ok_or_else(|| AppError::NotFound(format!("Session {} not found", request.session_id)))?;

    let threshold = request.threshold.unwrap_or(session.threshold).min(100);
    let entries = shortlist(&session.analyses, threshold);

    Ok(Json(ShortlistResponse { threshold, entries }))
}

/// POST /api/v1/candidates/overlap
///
/// Pure skill-overlap comparison — the deterministic scoring path used when
/// no LLM analysis is in play. Never touches the model or the session.
pub async fn handle_overlap(
    Json(request): Json<OverlapRequest>,
) -> Result<Json<SkillOverlap>, AppError> {
    Ok(Json(score_skill_overlap(
        &request.candidate_skills,
        &request.required_skills,
    )))
}
