//! Response serialization.
//!
//! # Responsibilities
//! - Serialize offset records and rejections into the wire envelope
//! - Pin the legacy `Content-Type` and error-body shape deployed clients
//!   parse byte-for-byte
//!
//! # Design Decisions
//! - `Content-Type` is `text/json`, not `application/json`; fielded clients
//!   check for that literal value
//! - Error bodies always carry `"status": 400` regardless of the HTTP status
//!   line, matching what clients were shipped against
//! - Serialization failure is a plain 500; it cannot happen for these static
//!   payloads but the handler must not panic

use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use crate::lookup::{RequestError, VersionRecord};

/// The exact `Content-Type` every response carries.
pub const CONTENT_TYPE_JSON: &str = "text/json";

/// The `status` field value baked into every error body.
const ERROR_BODY_STATUS: u16 = 400;

/// Successful lookup payload.
#[derive(Debug, Clone, Copy)]
pub struct OffsetsResponse {
    record: VersionRecord,
}

impl OffsetsResponse {
    pub fn new(record: VersionRecord) -> Self {
        Self { record }
    }
}

impl IntoResponse for OffsetsResponse {
    fn into_response(self) -> Response {
        json_response(StatusCode::OK, &self.record)
    }
}

/// Error payload; `status` stays 400 no matter the HTTP status line.
#[derive(Debug, Serialize)]
struct ErrorBody {
    status: u16,
    message: String,
}

impl IntoResponse for RequestError {
    fn into_response(self) -> Response {
        let body = ErrorBody {
            status: ERROR_BODY_STATUS,
            message: self.to_string(),
        };
        json_response(self.status(), &body)
    }
}

/// Serialize `payload` with the service's `Content-Type`.
fn json_response<T: Serialize>(status: StatusCode, payload: &T) -> Response {
    match serde_json::to_string(payload) {
        Ok(body) => (
            status,
            [(header::CONTENT_TYPE, CONTENT_TYPE_JSON)],
            body,
        )
            .into_response(),
        Err(e) => {
            tracing::error!(error = %e, "Failed to serialize response body");
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}
