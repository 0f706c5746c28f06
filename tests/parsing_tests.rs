use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use serde_json::json;
use thread_relay::api::parsing::{extract_article_url, get_header_value, get_method, parse_body};
use thread_relay::errors::RelayError;

#[test]
fn test_get_method_v2_and_v1() {
    let v2 = json!({ "requestContext": { "http": { "method": "post" } } });
    assert_eq!(get_method(&v2).as_deref(), Some("POST"));

    let v1 = json!({ "httpMethod": "OPTIONS" });
    assert_eq!(get_method(&v1).as_deref(), Some("OPTIONS"));

    assert_eq!(get_method(&json!({ "body": "{}" })), None);
}

#[test]
fn test_get_header_value_case_insensitive() {
    let headers = json!({ "content-type": "application/json" });
    assert_eq!(
        get_header_value(&headers, "Content-Type"),
        Some("application/json")
    );
    assert_eq!(get_header_value(&headers, "X-Missing"), None);
}

#[test]
fn test_parse_body_string_object_and_base64() {
    let plain = json!({ "body": r#"{"url":"https://a.b"}"# });
    assert_eq!(parse_body(&plain), Some(json!({ "url": "https://a.b" })));

    let direct = json!({ "body": { "url": "https://a.b" } });
    assert_eq!(parse_body(&direct), Some(json!({ "url": "https://a.b" })));

    let encoded = STANDARD.encode(r#"{"url":"https://a.b"}"#);
    let b64 = json!({ "body": encoded, "isBase64Encoded": true });
    assert_eq!(parse_body(&b64), Some(json!({ "url": "https://a.b" })));
}

#[test]
fn test_parse_body_unreadable() {
    assert_eq!(parse_body(&json!({})), None);
    assert_eq!(parse_body(&json!({ "body": "not json" })), None);
    assert_eq!(parse_body(&json!({ "body": 42 })), None);
    assert_eq!(
        parse_body(&json!({ "body": "%%%", "isBase64Encoded": true })),
        None
    );
}

#[test]
fn test_extract_article_url() {
    let body = json!({ "url": "https://example.com/article" });
    assert_eq!(
        extract_article_url(Some(&body)).unwrap(),
        "https://example.com/article"
    );

    for bad in [json!({}), json!({ "url": "" }), json!({ "url": 7 }), json!({ "url": null })] {
        assert!(matches!(
            extract_article_url(Some(&bad)),
            Err(RelayError::MissingUrl)
        ));
    }
    assert!(matches!(extract_article_url(None), Err(RelayError::MissingUrl)));
}
