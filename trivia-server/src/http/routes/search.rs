//! Question search endpoint

use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, State},
    routing::post,
    Json, Router,
};
use serde::{Deserialize, Serialize};

use crate::db::repos::{Question, QuestionRepo};
use crate::http::error::ApiError;
use crate::http::extractors::Page;
use crate::http::server::AppState;
use crate::models::SearchTerm;

/// Body of `POST /search`
#[derive(Debug, Default, Deserialize)]
pub struct SearchRequest {
    #[serde(rename = "searchTerm", default)]
    pub search_term: Option<String>,
}

/// Search results
#[derive(Serialize)]
pub struct SearchResponse {
    pub success: bool,
    pub questions: Vec<Question>,
    pub total_questions: usize,
    pub current_category: Option<i64>,
}

/// POST /search - case-insensitive substring match on question text
///
/// A missing or empty term is 404, same as no matches.
async fn search_questions(
    State(state): State<Arc<AppState>>,
    Page(page): Page,
    payload: Result<Json<SearchRequest>, JsonRejection>,
) -> Result<Json<SearchResponse>, ApiError> {
    let Json(req) = payload.map_err(|e| ApiError::not_found(e.body_text()))?;
    let term = SearchTerm::new(req.search_term.as_deref())
        .map_err(|e| ApiError::not_found(e.to_string()))?;

    let matches = QuestionRepo::new(&state.pool).search(&term).await?;
    let result = page.paginate(matches);

    if result.is_empty() {
        return Err(ApiError::not_found(format!(
            "no matches for '{}' on page {}",
            term.as_str(),
            page.page
        )));
    }

    Ok(Json(SearchResponse {
        success: true,
        questions: result.items,
        total_questions: result.total,
        current_category: None,
    }))
}

/// Search routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/search", post(search_questions))
}
