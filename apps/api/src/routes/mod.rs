pub mod health;
pub mod sessions;

use axum::{
    routing::{get, post},
    Router,
};

use crate::scheduling::handlers as scheduling_handlers;
use crate::screening::handlers as screening_handlers;
use crate::shortlist::handlers as shortlist_handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Session lifecycle
        .route("/api/v1/sessions", post(sessions::handle_create_session))
        .route("/api/v1/sessions/:id", get(sessions::handle_get_session))
        .route(
            "/api/v1/sessions/:id/reset",
            post(sessions::handle_reset_session),
        )
        // Screening
        .route(
            "/api/v1/jd/summarize",
            post(screening_handlers::handle_summarize_jd),
        )
        .route(
            "/api/v1/sessions/:id/candidates/analyze",
            post(screening_handlers::handle_analyze),
        )
        .route(
            "/api/v1/sessions/:id/candidates/analyze-batch",
            post(screening_handlers::handle_analyze_batch),
        )
        // Shortlisting
        .route(
            "/api/v1/shortlist",
            post(shortlist_handlers::handle_shortlist),
        )
        .route(
            "/api/v1/candidates/overlap",
            post(shortlist_handlers::handle_overlap),
        )
        // Scheduling
        .route(
            "/api/v1/emails/draft",
            post(scheduling_handlers::handle_draft_email),
        )
        .route(
            "/api/v1/emails/send",
            post(scheduling_handlers::handle_send_email),
        )
        .with_state(state)
}
