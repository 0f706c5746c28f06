//! Proxy response builders shared by the handler.
//!
//! Every response is a Function URL / API Gateway proxy object with a string
//! `body` and the CORS headers the browser frontend needs.

use serde_json::{Value, json};

use crate::errors::RelayError;

pub const ALLOW_ORIGIN: &str = "*";
pub const ALLOW_METHODS: &str = "POST, OPTIONS";
pub const ALLOW_HEADERS: &str = "Content-Type";

fn headers(content_type: Option<&str>) -> Value {
    let mut headers = json!({
        "Access-Control-Allow-Origin": ALLOW_ORIGIN,
        "Access-Control-Allow-Methods": ALLOW_METHODS,
        "Access-Control-Allow-Headers": ALLOW_HEADERS,
    });
    if let Some(ct) = content_type {
        headers["Content-Type"] = Value::String(ct.to_string());
    }
    headers
}

/// Returns a 200 response carrying `body` verbatim as JSON.
#[must_use]
pub fn ok_json_raw(body: String) -> Value {
    json!({
        "statusCode": 200,
        "headers": headers(Some("application/json")),
        "body": body
    })
}

/// Returns an error response with the given status code and message.
#[must_use]
pub fn err_response(status_code: u16, message: &str) -> Value {
    json!({
        "statusCode": status_code,
        "headers": headers(Some("application/json")),
        "body": json!({ "error": message }).to_string()
    })
}

/// Maps a [`RelayError`] to its status code and `{"error": ...}` body.
#[must_use]
pub fn from_error(error: &RelayError) -> Value {
    err_response(error.status_code(), &error.to_string())
}

/// Returns the empty 200 answer to a CORS preflight.
#[must_use]
pub fn preflight() -> Value {
    json!({
        "statusCode": 200,
        "headers": headers(None),
        "body": ""
    })
}
