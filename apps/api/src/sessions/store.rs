use std::collections::{HashMap, HashSet};

use anyhow::Result;
use serde::Serialize;
use sqlx::types::Json;
use sqlx::PgPool;
use tracing::info;
use uuid::Uuid;

use crate::models::session::{FeedbackItem, SessionRow};

/// Parameters for persisting a completed interview session.
pub struct NewSession<'a> {
    pub interview_type: &'a str,
    pub level: &'a str,
    pub role: &'a str,
    pub duration_seconds: i32,
    pub score: i32,
    pub feedback: &'a [FeedbackItem],
    pub strengths: &'a [String],
    pub improvements: &'a [String],
}

/// Inserts a completed session. Sessions are write-once: no UPDATE path
/// exists, only full deletion by the owner.
pub async fn create_session(
    pool: &PgPool,
    user_id: Uuid,
    params: NewSession<'_>,
) -> Result<SessionRow> {
    let row: SessionRow = sqlx::query_as(
        r#"
        INSERT INTO interview_sessions
            (user_id, interview_type, level, role, duration_seconds, score,
             feedback, strengths, improvements)
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
        RETURNING *
        "#,
    )
    .bind(user_id)
    .bind(params.interview_type)
    .bind(params.level)
    .bind(params.role)
    .bind(params.duration_seconds)
    .bind(params.score)
    .bind(Json(params.feedback))
    .bind(params.strengths)
    .bind(params.improvements)
    .fetch_one(pool)
    .await?;

    info!("Stored session {} for user {user_id}", row.id);
    Ok(row)
}

/// Returns all of a user's sessions, newest first.
pub async fn list_sessions(pool: &PgPool, user_id: Uuid) -> Result<Vec<SessionRow>> {
    Ok(sqlx::query_as(
        "SELECT * FROM interview_sessions WHERE user_id = $1 ORDER BY created_at DESC",
    )
    .bind(user_id)
    .fetch_all(pool)
    .await?)
}

/// Returns one session, scoped to its owner.
pub async fn get_session(pool: &PgPool, user_id: Uuid, id: Uuid) -> Result<Option<SessionRow>> {
    Ok(
        sqlx::query_as("SELECT * FROM interview_sessions WHERE id = $1 AND user_id = $2")
            .bind(id)
            .bind(user_id)
            .fetch_optional(pool)
            .await?,
    )
}

/// Deletes one session, scoped to its owner. Returns the number of rows
/// removed (0 when the session does not exist or belongs to someone else).
pub async fn delete_session(pool: &PgPool, user_id: Uuid, id: Uuid) -> Result<u64> {
    let result = sqlx::query("DELETE FROM interview_sessions WHERE id = $1 AND user_id = $2")
        .bind(id)
        .bind(user_id)
        .execute(pool)
        .await?;
    Ok(result.rows_affected())
}

/// Builds the set of questions a user has already been asked, from the
/// feedback entries of every stored session. Recomputed fresh on each call;
/// question text is trimmed for set membership.
pub async fn seen_questions(pool: &PgPool, user_id: Uuid) -> Result<HashSet<String>> {
    let feedback_lists: Vec<Json<Vec<FeedbackItem>>> =
        sqlx::query_scalar("SELECT feedback FROM interview_sessions WHERE user_id = $1")
            .bind(user_id)
            .fetch_all(pool)
            .await?;

    let mut seen = HashSet::new();
    for Json(items) in feedback_lists {
        for item in items {
            seen.insert(item.question.trim().to_string());
        }
    }
    Ok(seen)
}

/// Aggregate practice statistics for one user's history.
#[derive(Debug, Clone, Serialize)]
pub struct SessionStats {
    pub total_sessions: i64,
    pub average_score: i64,
    pub best_score: i32,
    pub total_practice_seconds: i64,
    pub sessions_by_type: HashMap<String, i64>,
}

pub async fn session_stats(pool: &PgPool, user_id: Uuid) -> Result<SessionStats> {
    let (total_sessions, average_score, best_score, total_practice_seconds): (
        i64,
        Option<f64>,
        Option<i32>,
        Option<i64>,
    ) = sqlx::query_as(
        r#"
        SELECT COUNT(*),
               AVG(score)::DOUBLE PRECISION,
               MAX(score),
               SUM(duration_seconds)::BIGINT
        FROM interview_sessions
        WHERE user_id = $1
        "#,
    )
    .bind(user_id)
    .fetch_one(pool)
    .await?;

    let by_type: Vec<(String, i64)> = sqlx::query_as(
        r#"
        SELECT interview_type, COUNT(*)
        FROM interview_sessions
        WHERE user_id = $1
        GROUP BY interview_type
        "#,
    )
    .bind(user_id)
    .fetch_all(pool)
    .await?;

    Ok(SessionStats {
        total_sessions,
        average_score: average_score.unwrap_or(0.0).round() as i64,
        best_score: best_score.unwrap_or(0),
        total_practice_seconds: total_practice_seconds.unwrap_or(0),
        sessions_by_type: by_type.into_iter().collect(),
    })
}
