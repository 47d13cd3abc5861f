//! Custom Axum extractors

use std::convert::Infallible;

use axum::extract::{FromRequestParts, Path, Query};
use axum::http::request::Parts;

use crate::models::{Pagination, PaginationParams};
use super::error::ApiError;

/// Extract the `page` query parameter, falling back to the first page.
pub struct Page(pub Pagination);

impl<S> FromRequestParts<S> for Page
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let params = Query::<PaginationParams>::try_from_uri(&parts.uri)
            .map(|Query(params)| params)
            .unwrap_or_default();

        Ok(Self(Pagination::from(params)))
    }
}

/// Extract an integer id from path.
///
/// A non-integer segment is treated as an unknown route (404).
pub struct RouteId(pub i64);

impl<S> FromRequestParts<S> for RouteId
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(id): Path<i64> = Path::from_request_parts(parts, state)
            .await
            .map_err(|e| ApiError::not_found(format!("no route for id: {}", e.body_text())))?;

        Ok(Self(id))
    }
}
