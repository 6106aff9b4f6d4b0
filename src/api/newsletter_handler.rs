//! subscribe-newsletter Lambda - subscribes an address to the Auchan store
//! newsletter.
//!
//! Unlike the alias handlers this one is invoked directly, so the event
//! payload itself is the input record rather than an API Gateway wrapper.

use lambda_runtime::{Error, LambdaEvent};
use serde_json::{Value, json};
use tracing::{error, info};

use super::{helpers, parsing};
use crate::clients::auchan::{AuchanClient, SubscribeRequest};
use crate::core::models::SubscribeInput;
use crate::errors::HandlerError;

const FAILURE_LABEL: &str = "Failed to subscribe to Auchan newsletter";

pub use self::function_handler as handler;

#[tracing::instrument(level = "info", skip(client, event))]
pub async fn function_handler(
    client: &AuchanClient,
    event: LambdaEvent<Value>,
) -> Result<Value, Error> {
    info!(event = %event.payload, "Subscribe Auchan newsletter event");
    Ok(handle(client, &event.payload, &event.context.request_id).await)
}

pub async fn handle(client: &AuchanClient, payload: &Value, request_id: &str) -> Value {
    match subscribe(client, payload).await {
        Ok((email, upstream)) => helpers::success_envelope(&json!({
            "message": "Successfully subscribed to Auchan newsletter",
            "email": email,
            "auchanResponse": upstream,
            "requestId": request_id,
        })),
        Err(e) => {
            error!(error = %e, "Error subscribing to Auchan newsletter");
            helpers::error_envelope(FAILURE_LABEL, &e, request_id)
        }
    }
}

async fn subscribe(client: &AuchanClient, payload: &Value) -> Result<(String, Value), HandlerError> {
    let input: SubscribeInput = serde_json::from_value(payload.clone())
        .map_err(|e| HandlerError::InvalidBody(e.to_string()))?;
    let email = parsing::require_field(input.email.as_deref(), "Email")?.to_string();

    let upstream = client.subscribe(&SubscribeRequest::for_email(&email)).await?;
    Ok((email, upstream))
}
