//! Custom Axum extractors

use axum::extract::{FromRequest, FromRequestParts, Path, Query};
use axum::http::request::Parts;
use axum::Json;

use super::error::ApiError;
use crate::models::ValidationError;

/// Extract an integer to-do id from the path.
///
/// Axum's plain `Path<i64>` rejects with a text body; this keeps the JSON
/// error shape used everywhere else.
pub struct TodoId(pub i64);

impl<S> FromRequestParts<S> for TodoId
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw): Path<String> = Path::from_request_parts(parts, state)
            .await
            .map_err(|_| {
                ApiError::Validation(ValidationError::InvalidFormat {
                    field: "todo_id",
                    reason: "missing path parameter",
                })
            })?;

        let id = raw.parse::<i64>().map_err(|_| {
            ApiError::Validation(ValidationError::InvalidFormat {
                field: "todo_id",
                reason: "expected an integer",
            })
        })?;

        Ok(Self(id))
    }
}

/// `Json` body extractor whose rejections use the API error shape
#[derive(FromRequest)]
#[from_request(via(Json), rejection(ApiError))]
pub struct ApiJson<T>(pub T);

/// `Query` extractor whose rejections use the API error shape
#[derive(FromRequestParts)]
#[from_request(via(Query), rejection(ApiError))]
pub struct ApiQuery<T>(pub T);
