//! generate-email-alias Lambda - creates an anonymous addy.io alias.
//!
//! Takes no input fields; the payload is built entirely from static
//! configuration.

use lambda_runtime::{Error, LambdaEvent};
use serde_json::{Value, json};
use tracing::{error, info};

use super::helpers;
use crate::clients::addy::{AddyClient, CreateAliasRequest};

const FAILURE_LABEL: &str = "Failed to create alias";

pub use self::function_handler as handler;

#[tracing::instrument(level = "info", skip(client, event))]
pub async fn function_handler(
    client: &AddyClient,
    event: LambdaEvent<Value>,
) -> Result<Value, Error> {
    info!(event = %event.payload, "Generate email alias event");
    Ok(handle(client, &event.context.request_id).await)
}

pub async fn handle(client: &AddyClient, request_id: &str) -> Value {
    match client.create_alias(&CreateAliasRequest::anonymous()).await {
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
