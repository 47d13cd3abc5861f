//! Health check endpoint

use std::sync::Arc;

use axum::{extract::State, routing::get, Json, Router};
use serde::Serialize;

use crate::http::server::AppState;

/// Health check response
#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub database: bool,
    pub version: &'static str,
}

/// GET /health - liveness plus a storage round-trip
async fn health(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    let database = match sqlx::query("SELECT 1").execute(&state.pool).await {
        Ok(_) => true,
        Err(e) => {
            tracing::warn!("Health check query failed: {}", e);
            false
        }
    };

    Json(HealthResponse {
        status: if database { "ok" } else { "degraded" },
        database,
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// Health routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/health", get(health))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::repos::test_support::test_pool;

    #[tokio::test]
    async fn health_returns_ok() {
        let (_dir, pool) = test_pool().await;
        let Json(body) = health(State(Arc::new(AppState::new(pool)))).await;
        assert_eq!(body.status, "ok");
        assert!(body.database);
    }

    #[tokio::test]
    async fn closed_pool_is_degraded() {
        let (_dir, pool) = test_pool().await;
        pool.close().await;
        let Json(body) = health(State(Arc::new(AppState::new(pool)))).await;
        assert_eq!(body.status, "degraded");
        assert!(!body.database);
    }
}
