//! HTTP clients for the upstream APIs.
//!
//! One module per provider; each issues a single POST per call and maps
//! non-2xx responses into [`crate::errors::HandlerError::Upstream`].

pub mod addy;
pub mod auchan;

use once_cell::sync::Lazy;
use reqwest::Client;
use std::time::Duration;

pub(crate) static HTTP_CLIENT: Lazy<Client> = Lazy::new(|| {
    Client::builder()
        .timeout(Duration::from_secs(30))
        .build()
        .expect("Failed to create HTTP client")
});

/// Reads an upstream response, turning any non-2xx status into an
/// [`HandlerError::Upstream`] that carries the response body as detail.
/// Bodies that are not JSON (gateway HTML, plain text) are forwarded as a
/// raw string so the detail is never silently dropped.
pub(crate) async fn read_json_response(
    resp: reqwest::Response,
) -> Result<serde_json::Value, crate::errors::HandlerError> {
    let status = resp.status();
    let text = resp.text().await?;
    let body: Option<serde_json::Value> = serde_json::from_str(&text).ok();

    if !status.is_success() {
        let detail = body.or_else(|| (!text.is_empty()).then(|| serde_json::Value::String(text)));
        return Err(crate::errors::HandlerError::Upstream {
            status: status.as_u16(),
            detail,
        });
    }

    Ok(body.unwrap_or(serde_json::Value::Null))
}
