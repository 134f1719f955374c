use std::sync::Arc;

use sqlx::PgPool;

use crate::config::Config;
use crate::interview::bank::QuestionBank;
use crate::interview::scorer::AnswerScorer;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub db: PgPool,
    pub config: Config,
    /// Pluggable answer scorer. Default: HeuristicAnswerScorer.
    pub scorer: Arc<dyn AnswerScorer>,
    /// Read-only question pool, loaded once at startup.
    pub bank: Arc<QuestionBank>,
}
