//! Failure envelopes for responses produced outside the handlers.
//!
//! axum answers an unsupported method with a bare 405, and the timeout layer
//! answers with a bare 408. Neither has a body, so clients decoding the
//! `{ success, message }` envelope would get nothing to show.

use std::any::Any;

use axum::body::HttpBody;
use axum::extract::Request;
use axum::http::header::{CONTENT_LENGTH, CONTENT_TYPE};
use axum::http::StatusCode;
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use axum::Json;

use crate::response::ApiResponse;

pub const MSG_METHOD_NOT_ALLOWED: &str = "Method not allowed";
pub const MSG_TIMEOUT: &str = "Request timed out";
pub const MSG_PANIC: &str = "Internal server error";

/// Replace the body of any 4xx/5xx response that has none with the failure
/// envelope. Status and headers (e.g. `Allow` on a 405) are preserved.
pub async fn envelope_bare_errors(request: Request, next: Next) -> Response {
    let response = next.run(request).await;

    let status = response.status();
    let is_error = status.is_client_error() || status.is_server_error();
    if !is_error || response.body().size_hint().exact() != Some(0) {
        return response;
    }

    let (mut parts, _) = response.into_parts();
    parts.headers.remove(CONTENT_LENGTH);
    parts.headers.remove(CONTENT_TYPE);

    let mut enveloped = Json(ApiResponse::failure(bare_error_message(status))).into_response();
    *enveloped.status_mut() = status;
    enveloped.headers_mut().extend(parts.headers);
    enveloped
}

/// Message used for an empty-bodied error response with `status`.
pub fn bare_error_message(status: StatusCode) -> String {
    match status {
        StatusCode::METHOD_NOT_ALLOWED => MSG_METHOD_NOT_ALLOWED.to_string(),
        StatusCode::REQUEST_TIMEOUT => MSG_TIMEOUT.to_string(),
        other => other.canonical_reason().unwrap_or("Request failed").to_string(),
    }
}

/// `CatchPanicLayer::custom` handler. The panic payload is logged, never sent.
pub fn panic_response(panic: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = panic.downcast_ref::<String>() {
        s.as_str()
    } else if let Some(s) = panic.downcast_ref::<&str>() {
        *s
    } else {
        "non-string panic payload"
    };
    tracing::error!(panic = %detail, "Handler panicked");

    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ApiResponse::failure(MSG_PANIC)),
    )
        .into_response()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bare_error_messages() {
        assert_eq!(
            bare_error_message(StatusCode::METHOD_NOT_ALLOWED),
            MSG_METHOD_NOT_ALLOWED
        );
        assert_eq!(bare_error_message(StatusCode::REQUEST_TIMEOUT), MSG_TIMEOUT);
        assert_eq!(
            bare_error_message(StatusCode::PAYLOAD_TOO_LARGE),
            "Payload Too Large"
        );
    }

    #[test]
    fn panic_response_is_a_500() {
        let response = panic_response(Box::new("boom"));
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
