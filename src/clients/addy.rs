//! addy.io alias API client.

use reqwest::header::ACCEPT;
use serde::Serialize;
use serde_json::Value;
use tracing::info;

use super::{HTTP_CLIENT, read_json_response};
use crate::core::config::AddyConfig;
use crate::errors::HandlerError;

/// Domain all aliases are created under.
pub const ALIAS_DOMAIN: &str = "anonaddy.com";

/// Alias format selector. Other options the API accepts: 'uuid', 'custom',
/// 'random_words'.
pub const ALIAS_FORMAT: &str = "random_characters";

/// Payload for `POST /aliases`.
#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct CreateAliasRequest {
    pub domain: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub format: String,
}

impl CreateAliasRequest {
    /// Builds the payload for a caller-described alias.
    ///
    /// The API expects a short `description`, not an address; when the caller
    /// supplies something containing `@`, only the part before the first `@`
    /// is used.
    #[must_use]
    pub fn for_description(alias: &str) -> Self {
        let description = alias
            .split_once('@')
            .map_or(alias, |(local, _)| local)
            .to_string();

        Self {
            domain: ALIAS_DOMAIN.to_string(),
            description: Some(description),
            format: ALIAS_FORMAT.to_string(),
        }
    }

    /// Builds the payload for an anonymous generated alias (no description).
    #[must_use]
    pub fn anonymous() -> Self {
        Self {
            domain: ALIAS_DOMAIN.to_string(),
            description: None,
            format: ALIAS_FORMAT.to_string(),
        }
    }
}

/// addy.io API client carrying the bearer credential.
pub struct AddyClient {
    base_url: String,
    api_key: String,
}

impl AddyClient {
    #[must_use]
    pub fn new(config: &AddyConfig) -> Self {
        Self {
            base_url: config.base_url.clone(),
            api_key: config.api_key.clone(),
        }
    }

    /// Issues the single `POST {base_url}/aliases` call for this invocation.
    /// The successful response body is returned as-is; the handler passes it
    /// through to the caller unmodified.
    pub async fn create_alias(&self, payload: &CreateAliasRequest) -> Result<Value, HandlerError> {
        let url = format!("{}/aliases", self.base_url);
        info!(url = %url, payload = ?payload, has_api_key = !self.api_key.is_empty(), "API request");

        let resp = HTTP_CLIENT
            .post(&url)
            .bearer_auth(&self.api_key)
            .header(ACCEPT, "application/json")
            .json(payload)
            .send()
            .await?;

        let body = read_json_response(resp).await?;
        info!(response = %body, "API response");
        Ok(body)
    }
}
