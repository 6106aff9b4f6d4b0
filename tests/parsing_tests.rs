use mailproxy::api::parsing::{parse_proxy_body, require_field};
use mailproxy::core::models::AliasRequest;
use mailproxy::errors::HandlerError;
use serde_json::json;

/// Tests for the request-adapter step: extracting the JSON-encoded body from
/// a proxy event and requiring the handler's input field.

#[test]
fn test_parse_body_from_json_string() {
    let payload = json!({ "body": "{\"alias\": \"shopping\"}" });

    let request: AliasRequest = parse_proxy_body(&payload).unwrap();
    assert_eq!(request.alias.as_deref(), Some("shopping"));
}

#[test]
fn test_missing_body_parses_as_empty_record() {
    let payload = json!({ "headers": {} });

    let request: AliasRequest = parse_proxy_body(&payload).unwrap();
    assert!(request.alias.is_none(), "absent body should mean absent fields");
}

#[test]
fn test_null_and_empty_string_bodies_parse_as_empty_record() {
    for payload in [json!({ "body": null }), json!({ "body": "" }), json!({ "body": "   " })] {
        let request: AliasRequest = parse_proxy_body(&payload).unwrap();
        assert!(request.alias.is_none());
    }
}

#[test]
fn test_already_parsed_object_body_is_accepted() {
    // Direct console invokes can deliver the body as an object instead of a
    // JSON-encoded string.
    let payload = json!({ "body": { "alias": "shopping" } });

    let request: AliasRequest = parse_proxy_body(&payload).unwrap();
    assert_eq!(request.alias.as_deref(), Some("shopping"));
}

#[test]
fn test_invalid_json_body_is_a_client_error() {
    let payload = json!({ "body": "{not json" });

    let err = parse_proxy_body::<AliasRequest>(&payload).unwrap_err();
    match err {
        HandlerError::InvalidBody(_) => assert_eq!(err.status_code(), 400),
        other => panic!("expected InvalidBody, got {other:?}"),
    }
}

#[test]
fn test_require_field_passes_value_through() {
    let value = require_field(Some("jane@example.com"), "Alias").unwrap();
    assert_eq!(value, "jane@example.com");
}

#[test]
fn test_require_field_rejects_missing_and_empty() {
    for value in [None, Some(""), Some("   ")] {
        let err = require_field(value, "Alias").unwrap_err();
        match err {
            HandlerError::MissingField(name) => assert_eq!(name, "Alias"),
            other => panic!("expected MissingField, got {other:?}"),
        }
    }
}
