//! Session lifecycle handlers: create, snapshot, reset.

use axum::{
    extract::{Path, State},
    Json,
};
use serde::Deserialize;
use uuid::Uuid;

use crate::errors::AppError;
use crate::session::SessionContext;
use crate::state::AppState;

#[derive(Debug, Default, Deserialize)]
pub struct CreateSessionRequest {
    /// Shortlisting threshold for this session; defaults to the configured
    /// service-wide value.
    pub threshold: Option<u8>,
}

/// POST /api/v1/sessions
pub async fn handle_create_session(
    State(state): State<AppState>,
    request: Option<Json<CreateSessionRequest>>,
) -> Json<SessionContext> {
    let threshold = request
        .and_then(|Json(r)| r.threshold)
        .unwrap_or(state.config.shortlist_threshold);
    Json(state.sessions.create(threshold).await)
}

/// GET /api/v1/sessions/:id
pub async fn handle_get_session(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
) -> Result<Json<SessionContext>, AppError> {
    state
        .sessions
        .get(session_id)
        .await
        .map(Json)
        .ok_or_else(|| AppError::NotFound(format!("Session {session_id} not found")))
}

/// POST /api/v1/sessions/:id/reset
///
/// Clears the session's accumulated state; id and threshold survive.
pub async fn handle_reset_session(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
) -> Result<Json<SessionContext>, AppError> {
    state
        .sessions
        .update(session_id, |session| {
            session.reset();
            session.clone()
        })
        .await
        .map(Json)
}
