use std::sync::Arc;

use crate::config::Config;
use crate::llm_client::LlmClient;
use crate::scheduling::transport::EmailTransport;
use crate::session::SessionStore;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub llm: LlmClient,
    pub config: Config,
    /// In-process session store — the only shared mutable state.
    pub sessions: SessionStore,
    /// Pluggable email transport. Default: LoggingTransport.
    pub mailer: Arc<dyn EmailTransport>,
}
