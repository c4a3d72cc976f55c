//! Session-scoped state.
//!
//! The analysis workflow accumulates intermediate results (JD summary,
//! candidate records, drafts) for the life of one recruiting session. That
//! state lives in an explicit `SessionContext` passed through the store —
//! never in ambient globals. Each step may freely overwrite what the
//! previous run of the same step produced.

use std::collections::HashMap;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::Serialize;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::errors::AppError;
use crate::scheduling::email::InterviewEmailDraft;
use crate::screening::models::{CandidateRecord, JobDescriptionSummary};

/// All state for one recruiting session.
#[derive(Debug, Clone, Serialize)]
pub struct SessionContext {
    pub id: Uuid,
    /// Shortlisting threshold for this session (0–100).
    pub threshold: u8,
    pub jd_summary: Option<JobDescriptionSummary>,
    pub analyses: Vec<CandidateRecord>,
    /// Drafts keyed by candidate name; regeneration overwrites.
    pub drafts: HashMap<String, InterviewEmailDraft>,
    pub created_at: DateTime<Utc>,
}

impl SessionContext {
    pub fn new(threshold: u8) -> Self {
        Self {
            id: Uuid::new_v4(),
            threshold: threshold.min(100),
            jd_summary: None,
            analyses: Vec::new(),
            drafts: HashMap::new(),
            created_at: Utc::now(),
        }
    }

    /// Clears accumulated workflow state. The id and threshold survive a
    /// reset; everything derived from inputs does not.
    pub fn reset(&mut self) {
        self.jd_summary = None;
        self.analyses.clear();
        self.drafts.clear();
    }
}

/// In-process session store. Locks are held briefly around reads/writes and
/// never across an LLM call.
#[derive(Clone, Default)]
pub struct SessionStore {
    inner: Arc<RwLock<HashMap<Uuid, SessionContext>>>,
}

impl SessionStore {
    pub async fn create(&self, threshold: u8) -> SessionContext {
        let session = SessionContext::new(threshold);
        self.inner
            .write()
            .await
            .insert(session.id, session.clone());
        session
    }

    /// Snapshot of a session, if it exists.
    pub async fn get(&self, id: Uuid) -> Option<SessionContext> {
        self.inner.read().await.get(&id).cloned()
    }

    /// Applies a mutation to a session and returns the closure's result.
    pub async fn update<T>(
        &self,
        id: Uuid,
        f: impl FnOnce(&mut SessionContext) -> T,
    ) -> Result<T, AppError> {
        let mut sessions = self.inner.write().await;
        let session = sessions
            .get_mut(&id)
            .ok_or_else(|| AppError::NotFound(format!("Session {id} not found")))?;
        Ok(f(session))
    }
}
