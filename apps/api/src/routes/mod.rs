pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::auth;
use crate::interview;
use crate::sessions;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Auth
        .route("/api/v1/auth/register", post(auth::handlers::handle_register))
        .route("/api/v1/auth/login", post(auth::handlers::handle_login))
        .route("/api/v1/auth/me", get(auth::handlers::handle_me))
        // Interview core
        .route(
            "/api/v1/interview/questions",
            post(interview::handlers::handle_generate_questions),
        )
        .route(
            "/api/v1/interview/analyze",
            post(interview::handlers::handle_analyze_answer),
        )
        .route(
            "/api/v1/interview/summary",
            post(interview::handlers::handle_summarize),
        )
        // Sessions
        .route(
            "/api/v1/sessions",
            post(sessions::handlers::handle_create_session)
                .get(sessions::handlers::handle_list_sessions),
        )
        .route(
            "/api/v1/sessions/stats",
            get(sessions::handlers::handle_session_stats),
        )
        .route(
            "/api/v1/sessions/:id",
            get(sessions::handlers::handle_get_session)
                .delete(sessions::handlers::handle_delete_session),
        )
        .with_state(state)
}
