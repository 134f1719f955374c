use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};

use crate::auth::token::AuthUser;
use crate::errors::AppError;
use crate::interview::bank::{ExperienceLevel, InterviewType};
use crate::interview::scorer::AnswerAnalysis;
use crate::interview::selector::select_questions;
use crate::interview::summary::{summarize, AnsweredQuestion, SessionSummary};
use crate::state::AppState;

const DEFAULT_QUESTION_COUNT: usize = 5;

#[derive(Deserialize)]
pub struct GenerateQuestionsRequest {
    #[serde(rename = "type")]
    pub interview_type: String,
    pub role: String,
    pub level: String,
    pub count: Option<usize>,
}

#[derive(Serialize)]
pub struct GenerateQuestionsResponse {
    pub questions: Vec<String>,
}

/// POST /api/v1/interview/questions
///
/// Returns up to `count` questions the caller has not seen in any prior
/// session. May return fewer when the pools are exhausted.
pub async fn handle_generate_questions(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(req): Json<GenerateQuestionsRequest>,
) -> Result<Json<GenerateQuestionsResponse>, AppError> {
    if req.role.trim().is_empty() {
        return Err(AppError::Validation("role is required".to_string()));
    }

    let interview_type = InterviewType::from_param(&req.interview_type);
    let level = ExperienceLevel::from_param(&req.level);
    let count = req.count.unwrap_or(DEFAULT_QUESTION_COUNT);

    let questions = select_questions(
        &state.db,
        &state.bank,
        auth.user_id,
        interview_type,
        &req.role,
        level,
        count,
    )
    .await?;

    tracing::info!(
        "Selected {} {} question(s) at {} level for user {}",
        questions.len(),
        interview_type.as_str(),
        level.as_str(),
        auth.user_id
    );

    Ok(Json(GenerateQuestionsResponse { questions }))
}

#[derive(Deserialize)]
pub struct AnalyzeAnswerRequest {
    pub question: String,
    pub answer: String,
}

/// POST /api/v1/interview/analyze
///
/// Scores one free-text answer against its question. Pure computation —
/// identical inputs always produce identical output.
pub async fn handle_analyze_answer(
    State(state): State<AppState>,
    _auth: AuthUser,
    Json(req): Json<AnalyzeAnswerRequest>,
) -> Result<Json<AnswerAnalysis>, AppError> {
    Ok(Json(state.scorer.score(&req.question, &req.answer)))
}

#[derive(Deserialize)]
pub struct SummaryRequest {
    pub answers: Vec<AnsweredQuestion>,
}

/// POST /api/v1/interview/summary
///
/// Folds per-question analyses into the overall session result the client
/// persists when an interview finishes.
pub async fn handle_summarize(
    _auth: AuthUser,
    Json(req): Json<SummaryRequest>,
) -> Result<Json<SessionSummary>, AppError> {
    Ok(Json(summarize(&req.answers)))
}
