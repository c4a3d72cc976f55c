//! Email transport seam.
//!
//! Delivery (SMTP, mail-client handoff) is out of scope; the pipeline only
//! hands a fully formed draft across this trait and reports the outcome.
//! Carried in `AppState` as `Arc<dyn EmailTransport>`.

use async_trait::async_trait;
use tracing::info;

use crate::errors::AppError;
use crate::scheduling::email::InterviewEmailDraft;

/// Accepts a fully formed draft and reports success/failure. No retry
/// policy is specified at this boundary.
#[async_trait]
pub trait EmailTransport: Send + Sync {
    async fn send(&self, draft: &InterviewEmailDraft) -> Result<(), AppError>;
}

/// Default transport: logs the handoff instead of delivering.
pub struct LoggingTransport;

#[async_trait]
impl EmailTransport for LoggingTransport {
    async fn send(&self, draft: &InterviewEmailDraft) -> Result<(), AppError> {
        info!(
            "Email handoff: to='{}' subject='{}' slots={}",
            draft.candidate_email,
            draft.subject,
            draft.proposed_slots.len()
        );
        Ok(())
    }
}
