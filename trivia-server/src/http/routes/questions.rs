//! Question endpoints

use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, State},
    routing::{delete, get},
    Json, Router,
};
use serde::Serialize;

use crate::db::repos::{CategoryMap, CategoryRepo, Question, QuestionRepo};
use crate::http::error::ApiError;
use crate::http::extractors::{Page, RouteId};
use crate::http::server::AppState;
use crate::models::{NewQuestion, Pagination};

/// Paginated question listing
#[derive(Serialize)]
pub struct QuestionsResponse {
    pub success: bool,
    pub questions: Vec<Question>,
    pub total_questions: usize,
    pub categories: CategoryMap,
    pub current_category: Option<i64>,
}

/// Result of a delete
#[derive(Serialize)]
pub struct DeletedResponse {
    pub success: bool,
    pub deleted: i64,
    pub questions: Vec<Question>,
    pub total_questions: usize,
}

/// Result of a create
#[derive(Serialize)]
pub struct CreatedResponse {
    pub success: bool,
    pub created: i64,
    pub questions: Vec<Question>,
    pub total_questions: usize,
}

/// GET /questions - paginated questions plus the category map
async fn list_questions(
    State(state): State<Arc<AppState>>,
    Page(page): Page,
) -> Result<Json<QuestionsResponse>, ApiError> {
    let questions = QuestionRepo::new(&state.pool).list().await?;
    let result = page.paginate(questions);

    if result.is_empty() {
        return Err(ApiError::not_found(format!("page {} is empty", page.page)));
    }

    let categories = CategoryRepo::new(&state.pool).map().await?;

    Ok(Json(QuestionsResponse {
        success: true,
        questions: result.items,
        total_questions: result.total,
        categories,
        current_category: None,
    }))
}

/// DELETE /questions/{id} - delete, then return the first remaining page
///
/// A missing id and a failed delete are both 422.
async fn delete_question(
    State(state): State<Arc<AppState>>,
    RouteId(id): RouteId,
) -> Result<Json<DeletedResponse>, ApiError> {
    let remaining = QuestionRepo::new(&state.pool)
        .delete(id)
        .await
        .map_err(ApiError::rejected_write)?;

    tracing::info!(question_id = id, "Deleted question");
    let result = Pagination::first().paginate(remaining);

    Ok(Json(DeletedResponse {
        success: true,
        deleted: id,
        questions: result.items,
        total_questions: result.total,
    }))
}

/// POST /questions - create a question
///
/// The listing in the response is the state *before* the insert.
async fn create_question(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<NewQuestion>, JsonRejection>,
) -> Result<Json<CreatedResponse>, ApiError> {
    let Json(new) = payload.map_err(|e| ApiError::unprocessable(e.body_text()))?;
    new.validate()?;

    let (id, before) = QuestionRepo::new(&state.pool)
        .create_with_snapshot(&new)
        .await
        .map_err(ApiError::rejected_write)?;

    tracing::info!(question_id = id, "Created question");
    let result = Pagination::first().paginate(before);

    Ok(Json(CreatedResponse {
        success: true,
        created: id,
        questions: result.items,
        total_questions: result.total,
    }))
}

/// Question routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/questions", get(list_questions).post(create_question))
        .route("/questions/{id}", delete(delete_question))
}
