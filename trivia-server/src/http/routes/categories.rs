//! Category endpoints

use std::sync::Arc;

use axum::{extract::State, routing::get, Json, Router};
use serde::Serialize;

use crate::db::repos::{CategoryMap, CategoryRepo, Question, QuestionRepo};
use crate::http::error::ApiError;
use crate::http::extractors::{Page, RouteId};
use crate::http::server::AppState;

/// Categories response
#[derive(Serialize)]
pub struct CategoriesResponse {
    pub success: bool,
    pub categories: CategoryMap,
}

/// Questions in one category
#[derive(Serialize)]
pub struct CategoryQuestionsResponse {
    pub success: bool,
    pub questions: Vec<Question>,
    pub total_questions: usize,
    pub current_category: i64,
}

/// GET /categories - every category as id -> type
async fn list_categories(
    State(state): State<Arc<AppState>>,
) -> Result<Json<CategoriesResponse>, ApiError> {
    let categories = CategoryRepo::new(&state.pool).map().await?;

    // No categories at all is an error, not an empty map
    if categories.is_empty() {
        return Err(ApiError::not_found("no categories"));
    }

    Ok(Json(CategoriesResponse {
        success: true,
        categories,
    }))
}

/// GET /categories/{id}/questions - paginated questions in a category
async fn questions_by_category(
    State(state): State<Arc<AppState>>,
    RouteId(category): RouteId,
    Page(page): Page,
) -> Result<Json<CategoryQuestionsResponse>, ApiError> {
    let questions = QuestionRepo::new(&state.pool)
        .list_by_category(category)
        .await?;
    let result = page.paginate(questions);

    if result.is_empty() {
        return Err(ApiError::not_found(format!(
            "page {} of category {} is empty",
            page.page, category
        )));
    }

    Ok(Json(CategoryQuestionsResponse {
        success: true,
        questions: result.items,
        total_questions: result.total,
        current_category: category,
    }))
}

/// Category routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/categories", get(list_categories))
        .route("/categories/{id}/questions", get(questions_by_category))
}
