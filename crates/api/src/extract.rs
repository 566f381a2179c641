//! Request extractors whose rejections use the standard failure envelope.
//!
//! Axum's stock `Json` and `Path` extractors reject with plain-text bodies;
//! these wrappers turn those rejections into [`AppError::BadRequest`].

use axum::extract::{FromRequest, FromRequestParts, Path};
use axum::http::request::Parts;
use tracker_core::types::DbId;

use crate::error::AppError;

/// JSON body extractor. A malformed body, wrong content type, or a field of
/// the wrong JSON type yields a 400 envelope.
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct ApiJson<T>(pub T);

/// The `{id}` segment of a `/projects/{id}` route.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProjectId(pub DbId);

impl<S> FromRequestParts<S> for ProjectId
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(id) = Path::<DbId>::from_request_parts(parts, state)
            .await
            .map_err(|rejection| {
                tracing::debug!(error = %rejection.body_text(), "Rejected project id");
                AppError::BadRequest("Invalid project id".to_string())
            })?;
        Ok(ProjectId(id))
    }
}
