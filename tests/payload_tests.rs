use mailproxy::clients::addy::{ALIAS_DOMAIN, ALIAS_FORMAT, CreateAliasRequest};
use mailproxy::clients::auchan::{SUBSCRIPTION_EMAIL_STORE, SubscribeRequest};
use serde_json::json;

/// Tests for the payload-builder step: the upstream request shapes are built
/// from validated input plus compiled-in configuration, never from the
/// caller.

#[test]
fn test_alias_description_uses_local_part_of_email() {
    let payload = CreateAliasRequest::for_description("jane@example.com");

    assert_eq!(payload.description.as_deref(), Some("jane"));
    assert_eq!(payload.domain, "anonaddy.com");
    assert_eq!(payload.format, "random_characters");
}

#[test]
fn test_alias_description_without_at_sign_is_kept_verbatim() {
    let payload = CreateAliasRequest::for_description("shopping");
    assert_eq!(payload.description.as_deref(), Some("shopping"));
}

#[test]
fn test_alias_description_splits_on_first_at_sign() {
    let payload = CreateAliasRequest::for_description("jane@doe@example.com");
    assert_eq!(payload.description.as_deref(), Some("jane"));
}

#[test]
fn test_anonymous_alias_payload_omits_description() {
    let payload = CreateAliasRequest::anonymous();
    let serialized = serde_json::to_value(&payload).unwrap();

    assert_eq!(
        serialized,
        json!({ "domain": ALIAS_DOMAIN, "format": ALIAS_FORMAT }),
        "description must be absent, not null"
    );
}

#[test]
fn test_described_alias_payload_serialization() {
    let payload = CreateAliasRequest::for_description("jane@example.com");
    let serialized = serde_json::to_value(&payload).unwrap();

    assert_eq!(
        serialized,
        json!({
            "domain": "anonaddy.com",
            "description": "jane",
            "format": "random_characters"
        })
    );
}

#[test]
fn test_subscribe_payload_serialization() {
    let payload = SubscribeRequest::for_email("jane@example.com");
    let serialized = serde_json::to_value(&payload).unwrap();

    assert_eq!(
        serialized,
        json!({
            "email": "jane@example.com",
            "subscriptions": [SUBSCRIPTION_EMAIL_STORE],
            "newsletters": [{ "code": SUBSCRIPTION_EMAIL_STORE }]
        })
    );
}

#[test]
fn test_subscription_code_constant() {
    assert_eq!(SUBSCRIPTION_EMAIL_STORE, "SUBSCRIPTION_TYPE_EMAIL_STORE");
}
