//! email-aliases Lambda - creates a described addy.io alias.
//!
//! Flow per invocation: extract `alias` from the proxy body, derive the
//! upstream description, POST to `{base_url}/aliases`, wrap the result into
//! the response envelope. Invalid input never reaches the upstream call.

use lambda_runtime::{Error, LambdaEvent};
use serde_json::{Value, json};
use tracing::{error, info};

use super::{helpers, parsing};
use crate::clients::addy::{AddyClient, CreateAliasRequest};
use crate::core::models::AliasRequest;
use crate::errors::HandlerError;

const FAILURE_LABEL: &str = "Failed to create alias";

pub use self::function_handler as handler;

/// Lambda entry point. The client is built once in `main` and shared across
/// warm invocations.
#[tracing::instrument(level = "info", skip(client, event))]
pub async fn function_handler(
    client: &AddyClient,
    event: LambdaEvent<Value>,
) -> Result<Value, Error> {
    info!(event = %event.payload, "Email aliases event");
    Ok(handle(client, &event.payload, &event.context.request_id).await)
}

/// Runs the handler sequence and always produces an envelope; no error
/// propagates to the runtime.
pub async fn handle(client: &AddyClient, payload: &Value, request_id: &str) -> Value {
    match create_alias(client, payload).await {
        Ok(upstream) => helpers::success_envelope(&json!({
            "message": "Alias created successfully",
            "alias": upstream,
            "requestId": request_id,
        })),
        Err(e) => {
            error!(error = %e, "Error creating alias");
            helpers::error_envelope(FAILURE_LABEL, &e, request_id)
        }
    }
}

async fn create_alias(client: &AddyClient, payload: &Value) -> Result<Value, HandlerError> {
    let request: AliasRequest = parsing::parse_proxy_body(payload)?;
    let alias = parsing::require_field(request.alias.as_deref(), "Alias")?;

    client
        .create_alias(&CreateAliasRequest::for_description(alias))
        .await
}
