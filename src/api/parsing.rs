use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use serde_json::Value;

use crate::errors::RelayError;

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

/// HTTP method of a Function URL / API Gateway proxy event, upper-cased.
///
/// Payload v2 keeps it under `requestContext.http.method`, v1 under
/// `httpMethod`. Direct invocations carry neither.
pub fn get_method(payload: &Value) -> Option<String> {
    v_str(payload, &["requestContext", "http", "method"])
        .or_else(|| v_str(payload, &["httpMethod"]))
        .map(str::to_ascii_uppercase)
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

/// Decodes the request body into JSON.
///
/// String bodies are parsed (after base64 decoding when `isBase64Encoded` is
/// set); object bodies from direct invocations are used as they are. Anything
/// unreadable yields `None`.
pub fn parse_body(payload: &Value) -> Option<Value> {
    match payload.get("body")? {
        Value::String(raw) => {
            let is_base64 = payload
                .get("isBase64Encoded")
                .and_then(Value::as_bool)
                .unwrap_or(false);
            if is_base64 {
                let bytes = STANDARD.decode(raw.trim()).ok()?;
                serde_json::from_slice(&bytes).ok()
            } else {
                serde_json::from_str(raw).ok()
            }
        }
        body @ Value::Object(_) => Some(body.clone()),
        _ => None,
    }
}

/// Extracts the article URL from a decoded request body.
///
/// # Errors
///
/// Returns [`RelayError::MissingUrl`] unless `url` is a non-empty string.
pub fn extract_article_url(body: Option<&Value>) -> Result<String, RelayError> {
    body.and_then(|b| b.get("url"))
        .and_then(Value::as_str)
        .filter(|u| !u.is_empty())
        .map(std::string::ToString::to_string)
        .ok_or(RelayError::MissingUrl)
}
