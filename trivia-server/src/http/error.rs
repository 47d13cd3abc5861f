//! API error types with IntoResponse
//!
//! Every error renders the same envelope:
//! `{"success": false, "error": <status code>, "message": <fixed text>}`.
//! The detailed reason is logged, never sent.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

use crate::db::repos::DbError;
use crate::models::{QuizError, ValidationError};

/// API error type with automatic HTTP status mapping
#[derive(Debug)]
pub enum ApiError {
    /// Nothing to return (404)
    NotFound { reason: String },

    /// Path exists, method does not (405)
    MethodNotAllowed,

    /// Input or write rejected (422)
    Unprocessable { reason: String },

    /// Database error (500, logged)
    Database(DbError),
}

impl ApiError {
    pub fn not_found(reason: impl Into<String>) -> Self {
        Self::NotFound {
            reason: reason.into(),
        }
    }

    pub fn unprocessable(reason: impl Into<String>) -> Self {
        Self::Unprocessable {
            reason: reason.into(),
        }
    }

    /// Write endpoints report every storage failure as 422. Failures other
    /// than a missing row or a constraint are still logged as errors.
    pub fn rejected_write(e: DbError) -> Self {
        if let DbError::Sqlx(inner) = &e {
            tracing::error!("Write failed: {}", inner);
        }
        Self::unprocessable(e.to_string())
    }

    pub fn status(&self) -> StatusCode {
        match self {
            Self::NotFound { .. } => StatusCode::NOT_FOUND,
            Self::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            Self::Unprocessable { .. } => StatusCode::UNPROCESSABLE_ENTITY,
            Self::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// Fixed envelope message for each handled status.
pub fn error_message(status: StatusCode) -> &'static str {
    match status {
        StatusCode::BAD_REQUEST => "Bad request",
        StatusCode::UNAUTHORIZED => "Unauthorized",
        StatusCode::FORBIDDEN => "Forbidden",
        StatusCode::NOT_FOUND => "Not found",
        StatusCode::METHOD_NOT_ALLOWED => "Method not allowed",
        StatusCode::CONFLICT => "Conflict",
        StatusCode::UNPROCESSABLE_ENTITY => "Unprocessable",
        _ => "Internal Server Error",
    }
}

/// Envelope response for a bare status.
pub fn envelope(status: StatusCode) -> Response {
    let body = json!({
        "success": false,
        "error": status.as_u16(),
        "message": error_message(status)
    });

    (status, Json(body)).into_response()
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match &self {
            Self::NotFound { reason } => tracing::debug!("Not found: {}", reason),
            Self::MethodNotAllowed => tracing::debug!("Method not allowed"),
            Self::Unprocessable { reason } => tracing::debug!("Unprocessable: {}", reason),
            // Log the actual error, return generic message
            Self::Database(e) => tracing::error!("Database error: {}", e),
        }

        envelope(self.status())
    }
}

impl From<ValidationError> for ApiError {
    fn from(e: ValidationError) -> Self {
        Self::unprocessable(e.to_string())
    }
}

impl From<DbError> for ApiError {
    fn from(e: DbError) -> Self {
        match e {
            DbError::NotFound { resource, id } => {
                Self::not_found(format!("{} '{}' not found", resource, id))
            }
            DbError::ConstraintViolation(msg) => Self::unprocessable(msg),
            DbError::Sqlx(_) => Self::Database(e),
        }
    }
}

impl From<QuizError> for ApiError {
    fn from(e: QuizError) -> Self {
        match e {
            QuizError::Db(db) => Self::from(db),
            other => Self::not_found(other.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;
    use crate::db::QuizScope;

    async fn body_json(response: Response) -> serde_json::Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn not_found_is_404() {
        let response = ApiError::not_found("empty page").into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let body = body_json(response).await;
        assert_eq!(
            body,
            json!({"success": false, "error": 404, "message": "Not found"})
        );
    }

    #[tokio::test]
    async fn unprocessable_is_422() {
        let response = ApiError::unprocessable("bad").into_response();
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

        let body = body_json(response).await;
        assert_eq!(body["message"], "Unprocessable");
        assert_eq!(body["error"], 422);
    }

    #[tokio::test]
    async fn method_not_allowed_is_405() {
        let response = ApiError::MethodNotAllowed.into_response();
        assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
        assert_eq!(body_json(response).await["message"], "Method not allowed");
    }

    #[tokio::test]
    async fn sqlx_error_is_500() {
        let err = ApiError::from(DbError::Sqlx(sqlx::Error::PoolClosed));
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body_json(response).await["message"], "Internal Server Error");
    }

    #[test]
    fn db_errors_map_to_statuses() {
        let missing = DbError::NotFound {
            resource: "question",
            id: "9".into(),
        };
        assert_eq!(ApiError::from(missing).status(), StatusCode::NOT_FOUND);

        let violation = DbError::ConstraintViolation("NOT NULL".into());
        assert_eq!(
            ApiError::from(violation).status(),
            StatusCode::UNPROCESSABLE_ENTITY
        );
    }

    #[test]
    fn quiz_errors_are_404_unless_storage() {
        let empty = QuizError::EmptyCandidatePool {
            scope: QuizScope::All,
        };
        assert_eq!(ApiError::from(empty).status(), StatusCode::NOT_FOUND);

        let invalid = QuizError::InvalidInput("id".into());
        assert_eq!(ApiError::from(invalid).status(), StatusCode::NOT_FOUND);

        let storage = QuizError::Db(DbError::Sqlx(sqlx::Error::PoolClosed));
        assert_eq!(
            ApiError::from(storage).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn rejected_writes_are_422() {
        let missing = DbError::NotFound {
            resource: "question",
            id: "80".into(),
        };
        assert_eq!(
            ApiError::rejected_write(missing).status(),
            StatusCode::UNPROCESSABLE_ENTITY
        );

        let storage = DbError::Sqlx(sqlx::Error::PoolClosed);
        assert_eq!(
            ApiError::rejected_write(storage).status(),
            StatusCode::UNPROCESSABLE_ENTITY
        );
    }

    #[test]
    fn validation_error_is_422() {
        let err = ApiError::from(ValidationError::Empty { field: "answer" });
        assert_eq!(err.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[test]
    fn envelope_messages() {
        let cases = [
            (StatusCode::BAD_REQUEST, "Bad request"),
            (StatusCode::UNAUTHORIZED, "Unauthorized"),
            (StatusCode::FORBIDDEN, "Forbidden"),
            (StatusCode::NOT_FOUND, "Not found"),
            (StatusCode::METHOD_NOT_ALLOWED, "Method not allowed"),
            (StatusCode::CONFLICT, "Conflict"),
            (StatusCode::UNPROCESSABLE_ENTITY, "Unprocessable"),
            (StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error"),
        ];
        for (status, message) in cases {
            assert_eq!(error_message(status), message);
        }
    }
}
