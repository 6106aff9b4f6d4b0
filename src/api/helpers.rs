//! Response-envelope builders shared by all handlers.
//!
//! API Gateway expects `{statusCode, headers, body}` with the body as a
//! JSON-encoded string; every handler outcome, success or failure, goes
//! through these two builders so the response shape stays consistent.

use serde_json::{Value, json};

use crate::errors::HandlerError;

/// Wraps an already-built body into the API Gateway response shape.
#[must_use]
pub fn envelope(status_code: u16, body: &Value) -> Value {
    json!({
        "statusCode": status_code,
        "headers": { "Content-Type": "application/json" },
        "body": body.to_string()
    })
}

/// Returns a 200 envelope around the given success body.
#[must_use]
pub fn success_envelope(body: &Value) -> Value {
    envelope(200, body)
}

/// Returns the error envelope for a failed invocation.
///
/// Client input errors carry their own message in `error`; upstream and
/// transport failures report the handler's failure label plus the error
/// message, with the upstream response body under `details` when one was
/// received. The correlation id is always included.
#[must_use]
pub fn error_envelope(failure_label: &str, err: &HandlerError, request_id: &str) -> Value {
    let mut body = match err {
        HandlerError::MissingField(_) | HandlerError::InvalidBody(_) => json!({
            "error": err.to_string(),
            "requestId": request_id,
        }),
        HandlerError::Upstream { .. } | HandlerError::Http(_) => json!({
            "error": failure_label,
            "message": err.to_string(),
            "requestId": request_id,
        }),
    };

    if let Some(detail) = err.detail() {
        body["details"] = detail.clone();
    }

    envelope(err.status_code(), &body)
}
