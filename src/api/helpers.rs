//! Common helper functions for API handlers.
//!
//! Response builders for the API Gateway proxy response shape.

use serde_json::{Value, json};

// ============================================================================
// Response Builders
// ============================================================================

/// Returns a 200 OK response with an empty body.
#[must_use]
pub fn ok_empty() -> Value {
    json!({ "statusCode": 200, "body": "" })
}

/// Returns a 200 OK response with a plain-text body.
#[must_use]
pub fn ok_text(text: &str) -> Value {
    json!({
        "statusCode": 200,
        "headers": { "Content-Type": "text/plain; charset=utf-8" },
        "body": text
    })
}

/// Returns a 200 OK response carrying an already encoded JSON document.
#[must_use]
pub fn ok_json(body: String) -> Value {
    json!({
        "statusCode": 200,
        "headers": { "Content-Type": "application/json" },
        "body": body
    })
}

/// Returns an error response with the given status code and message.
#[must_use]
pub fn err_response(status_code: u16, message: &str) -> Value {
    json!({
        "statusCode": status_code,
        "headers": { "Content-Type": "application/json" },
        "body": json!({ "error": message }).to_string()
    })
}
