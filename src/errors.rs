use serde_json::Value;
use thiserror::Error;

/// Everything that can go wrong inside a handler, in the order it can happen:
/// the caller's input is unusable, the upstream API rejected the call, or the
/// call never completed.
#[derive(Debug, Error)]
pub enum HandlerError {
    #[error("{0} is required")]
    MissingField(&'static str),

    #[error("Request body is not valid JSON: {0}")]
    InvalidBody(String),

    #[error("Upstream API returned status {status}")]
    Upstream { status: u16, detail: Option<Value> },

    #[error("Failed to send HTTP request: {0}")]
    Http(String),
}

impl HandlerError {
    /// The HTTP status the response envelope reports for this error.
    /// Upstream failures propagate the upstream status; everything else is
    /// either the caller's fault (400) or ours (500).
    #[must_use]
    pub fn status_code(&self) -> u16 {
        match self {
            HandlerError::MissingField(_) | HandlerError::InvalidBody(_) => 400,
            HandlerError::Upstream { status, .. } => *status,
            HandlerError::Http(_) => 500,
        }
    }

    /// The upstream response body, when the failure carried one.
    #[must_use]
    pub fn detail(&self) -> Option<&Value> {
        match self {
            HandlerError::Upstream { detail, .. } => detail.as_ref(),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for HandlerError {
    fn from(error: reqwest::Error) -> Self {
        HandlerError::Http(error.to_string())
    }
}
