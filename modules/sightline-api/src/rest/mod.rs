//! REST route handlers.
//!
//! Everything speaks JSON. Failures use a uniform `{"error": "..."}` body,
//! and dashboard routes identify their workspace through the
//! `X-Session-Id` header.

pub mod competitors;
pub mod demo;
pub mod keywords;
pub mod proxy;
pub mod session;

use axum::http::{HeaderMap, StatusCode};
use axum::response::{IntoResponse, Json, Response};
use serde_json::json;
use sightline_common::SightlineError;
use tracing::warn;
use uuid::Uuid;

pub(crate) fn error_response(status: StatusCode, message: &str) -> Response {
    (status, Json(json!({ "error": message }))).into_response()
}

/// Pull the workspace id out of the `X-Session-Id` header.
pub(crate) fn session_id(headers: &HeaderMap) -> Result<Uuid, Response> {
    let Some(raw) = headers.get("x-session-id").and_then(|v| v.to_str().ok()) else {
        return Err(error_response(
            StatusCode::BAD_REQUEST,
            "Missing X-Session-Id header",
        ));
    };

    Uuid::parse_str(raw).map_err(|_| {
        error_response(StatusCode::BAD_REQUEST, "Invalid X-Session-Id header")
    })
}

pub(crate) fn store_error(err: SightlineError) -> Response {
    match err {
        SightlineError::UnknownSession(_) => {
            error_response(StatusCode::NOT_FOUND, "Unknown session")
        }
        other => {
            warn!(error = %other, "Session store failure");
            error_response(StatusCode::INTERNAL_SERVER_ERROR, "Internal error")
        }
    }
}
