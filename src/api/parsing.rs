//! Inbound-event parsing shared by the handlers.

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::errors::HandlerError;

/// Parses the `body` of an API Gateway proxy event into a typed record.
///
/// The trigger delivers the body as a JSON-encoded string; a missing or
/// empty body deserializes to the record's default (all fields absent) so
/// that field validation, not parsing, reports the missing input. An
/// already-parsed object is accepted too, for direct test invokes.
pub fn parse_proxy_body<T>(payload: &Value) -> Result<T, HandlerError>
where
    T: DeserializeOwned + Default,
{
    match payload.get("body") {
        None | Some(Value::Null) => Ok(T::default()),
        Some(Value::String(s)) if s.trim().is_empty() => Ok(T::default()),
        Some(Value::String(s)) => {
            serde_json::from_str(s).map_err(|e| HandlerError::InvalidBody(e.to_string()))
        }
        Some(other) => serde_json::from_value(other.clone())
            .map_err(|e| HandlerError::InvalidBody(e.to_string())),
    }
}

/// Requires a present, non-empty field value.
///
/// `name` is the user-facing field name ("Alias", "Email"); it surfaces in
/// the 400 response as "`{name}` is required".
pub fn require_field<'a>(
    value: Option<&'a str>,
    name: &'static str,
) -> Result<&'a str, HandlerError> {
    match value {
        Some(v) if !v.trim().is_empty() => Ok(v),
        _ => Err(HandlerError::MissingField(name)),
    }
}
