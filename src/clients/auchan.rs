//! Auchan newsletter API client (Gravitee gateway).

use reqwest::header::ACCEPT;
use serde::Serialize;
use serde_json::Value;
use tracing::info;

use super::{HTTP_CLIENT, read_json_response};
use crate::core::config::AuchanConfig;
use crate::errors::HandlerError;

/// Subscription and newsletter code for the store email newsletter.
pub const SUBSCRIPTION_EMAIL_STORE: &str = "SUBSCRIPTION_TYPE_EMAIL_STORE";

const GRAVITEE_API_KEY_HEADER: &str = "X-Gravitee-Api-Key";

/// Payload for the subscription endpoint.
#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct SubscribeRequest {
    pub email: String,
    pub subscriptions: Vec<String>,
    pub newsletters: Vec<Newsletter>,
}

#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct Newsletter {
    pub code: String,
}

impl SubscribeRequest {
    /// Builds the store-newsletter subscription payload for one address.
    #[must_use]
    pub fn for_email(email: &str) -> Self {
        Self {
            email: email.to_string(),
            subscriptions: vec![SUBSCRIPTION_EMAIL_STORE.to_string()],
            newsletters: vec![Newsletter {
                code: SUBSCRIPTION_EMAIL_STORE.to_string(),
            }],
        }
    }
}

/// Newsletter API client carrying the Gravitee API key.
pub struct AuchanClient {
    api_url: String,
    api_key: String,
}

impl AuchanClient {
    #[must_use]
    pub fn new(config: &AuchanConfig) -> Self {
        Self {
            api_url: config.api_url.clone(),
            api_key: config.api_key.clone(),
        }
    }

    /// Issues the single subscription POST for this invocation.
    pub async fn subscribe(&self, payload: &SubscribeRequest) -> Result<Value, HandlerError> {
        info!(url = %self.api_url, payload = ?payload, "Auchan API request");

        let resp = HTTP_CLIENT
            .post(&self.api_url)
            .header(GRAVITEE_API_KEY_HEADER, &self.api_key)
            .header(ACCEPT, "application/json")
            .json(payload)
            .send()
            .await?;

        let body = read_json_response(resp).await?;
        info!(response = %body, "Auchan API response");
        Ok(body)
    }
}
