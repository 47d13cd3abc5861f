//! Quiz endpoint

use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, State},
    routing::post,
    Json, Router,
};
use serde::Serialize;

use crate::db::repos::{Question, QuestionRepo};
use crate::http::error::ApiError;
use crate::http::server::AppState;
use crate::models::{pick_random, QuizError, QuizRequest};

/// Next quiz question
#[derive(Serialize)]
pub struct QuizResponse {
    pub success: bool,
    pub question: Question,
}

/// POST /quizzes - a random question not yet asked
async fn next_question(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<QuizRequest>, JsonRejection>,
) -> Result<Json<QuizResponse>, ApiError> {
    let question = pick_next(&state, payload).await?;

    Ok(Json(QuizResponse {
        success: true,
        question,
    }))
}

async fn pick_next(
    state: &AppState,
    payload: Result<Json<QuizRequest>, JsonRejection>,
) -> Result<Question, QuizError> {
    let Json(req) = payload.map_err(|e| QuizError::InvalidInput(e.body_text()))?;
    let scope = req.scope()?;

    let candidates = QuestionRepo::new(&state.pool)
        .candidates(scope, req.previous())
        .await?;
    tracing::debug!(?scope, candidates = candidates.len(), "Quiz candidates");

    pick_random(candidates, &mut rand::thread_rng())
        .ok_or(QuizError::EmptyCandidatePool { scope })
}

/// Quiz routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/quizzes", post(next_question))
}
