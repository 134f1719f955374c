use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;
use uuid::Uuid;

use crate::auth::token::AuthUser;
use crate::errors::AppError;
use crate::models::session::{FeedbackItem, SessionRow};
use crate::sessions::store::{
    create_session, delete_session, get_session, list_sessions, session_stats, NewSession,
    SessionStats,
};
use crate::state::AppState;

#[derive(Deserialize)]
pub struct CreateSessionRequest {
    #[serde(rename = "type")]
    pub interview_type: String,
    pub level: String,
    pub role: String,
    /// Interview duration in seconds.
    pub duration: i32,
    pub score: i32,
    #[serde(default)]
    pub feedback: Vec<FeedbackItem>,
    #[serde(default)]
    pub strengths: Vec<String>,
    #[serde(default)]
    pub improvements: Vec<String>,
}

/// POST /api/v1/sessions
pub async fn handle_create_session(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(req): Json<CreateSessionRequest>,
) -> Result<(StatusCode, Json<SessionRow>), AppError> {
    if !(0..=100).contains(&req.score) {
        return Err(AppError::Validation(
            "score must be between 0 and 100".to_string(),
        ));
    }
    if req.duration < 0 {
        return Err(AppError::Validation(
            "duration must not be negative".to_string(),
        ));
    }

    let session = create_session(
        &state.db,
        auth.user_id,
        NewSession {
            interview_type: &req.interview_type,
            level: &req.level,
            role: &req.role,
            duration_seconds: req.duration,
            score: req.score,
            feedback: &req.feedback,
            strengths: &req.strengths,
            improvements: &req.improvements,
        },
    )
    .await?;

    Ok((StatusCode::CREATED, Json(session)))
}

/// GET /api/v1/sessions
pub async fn handle_list_sessions(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<Json<Vec<SessionRow>>, AppError> {
    let sessions = list_sessions(&state.db, auth.user_id).await?;
    Ok(Json(sessions))
}

/// GET /api/v1/sessions/stats
pub async fn handle_session_stats(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<Json<SessionStats>, AppError> {
    let stats = session_stats(&state.db, auth.user_id).await?;
    Ok(Json(stats))
}

/// GET /api/v1/sessions/:id
pub async fn handle_get_session(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
) -> Result<Json<SessionRow>, AppError> {
    let session = get_session(&state.db, auth.user_id, id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Session {id} not found")))?;
    Ok(Json(session))
}

/// DELETE /api/v1/sessions/:id
pub async fn handle_delete_session(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, AppError> {
    let removed = delete_session(&state.db, auth.user_id, id).await?;
    if removed == 0 {
        return Err(AppError::NotFound(format!("Session {id} not found")));
    }
    Ok(StatusCode::NO_CONTENT)
}
