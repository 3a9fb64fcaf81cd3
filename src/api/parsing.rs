//! Accessors for the API Gateway proxy event.
//!
//! Both the v1 (`path`, `httpMethod`) and v2 (`rawPath`, `requestContext.http.method`)
//! payload formats are accepted.

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;
use serde_json::Value;

use crate::errors::SharePostError;

pub fn v_path<'a>(root: &'a Value, path: &[&str]) -> Option<&'a Value> {
    let mut cur = root;
    for key in path {
        cur = cur.get(*key)?;
    }
    Some(cur)
}

pub fn v_str<'a>(root: &'a Value, path: &[&str]) -> Option<&'a str> {
    v_path(root, path).and_then(|v| v.as_str())
}

pub fn get_header_value<'a>(headers: &'a Value, name: &str) -> Option<&'a str> {
    if let Some(v) = headers.get(name).and_then(|s| s.as_str()) {
        return Some(v);
    }
    headers.as_object().and_then(|map| {
        map.iter().find_map(|(k, v)| {
            if k.eq_ignore_ascii_case(name) {
                v.as_str()
            } else {
                None
            }
        })
    })
}

#[must_use]
pub fn request_method(payload: &Value) -> &str {
    v_str(payload, &["requestContext", "http", "method"])
        .or_else(|| v_str(payload, &["httpMethod"]))
        .unwrap_or("GET")
}

#[must_use]
pub fn request_path(payload: &Value) -> &str {
    v_str(payload, &["rawPath"])
        .or_else(|| v_str(payload, &["path"]))
        .unwrap_or("/")
}

/// Path plus query string, for request logging.
#[must_use]
pub fn request_uri(payload: &Value) -> String {
    let path = request_path(payload);
    match v_str(payload, &["rawQueryString"]) {
        Some(q) if !q.is_empty() => format!("{path}?{q}"),
        _ => path.to_string(),
    }
}

/// Returns the request body as text, decoding it first when the gateway
/// marked it as base64.
///
/// # Errors
///
/// Returns an error if the body is missing, not a string, or not valid base64/UTF-8.
pub fn extract_body(payload: &Value) -> Result<String, SharePostError> {
    let Some(body) = payload.get("body") else {
        return Err(SharePostError::ParseError("Missing body".to_string()));
    };
    let Some(body_str) = body.as_str() else {
        return Err(SharePostError::ParseError("Invalid body format".to_string()));
    };

    let is_base64 = payload
        .get("isBase64Encoded")
        .and_then(Value::as_bool)
        .unwrap_or(false);
    if !is_base64 {
        return Ok(body_str.to_string());
    }

    let bytes = STANDARD
        .decode(body_str)
        .map_err(|e| SharePostError::ParseError(format!("Invalid base64 body: {e}")))?;
    String::from_utf8(bytes)
        .map_err(|e| SharePostError::ParseError(format!("Body is not UTF-8: {e}")))
}
