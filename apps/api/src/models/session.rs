use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::types::Json;
use sqlx::FromRow;
use uuid::Uuid;

/// One question/answer pair with its feedback text, as stored inside a
/// session's `feedback` JSONB column.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeedbackItem {
    pub question: String,
    pub answer: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub feedback: Option<String>,
}

/// A completed interview session. Created once when the user finishes (or
/// ends) an interview; never mutated afterwards except full deletion by the
/// owner.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct SessionRow {
    pub id: Uuid,
    pub user_id: Uuid,
    pub interview_type: String,
    pub level: String,
    pub role: String,
    pub duration_seconds: i32,
    pub score: i32,
    pub feedback: Json<Vec<FeedbackItem>>,
    pub strengths: Vec<String>,
    pub improvements: Vec<String>,
    pub created_at: DateTime<Utc>,
}
