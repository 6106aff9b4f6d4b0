use serde::Deserialize;

/// Body of an alias-creation request, as posted through API Gateway.
#[derive(Debug, Deserialize, Default)]
pub struct AliasRequest {
    pub alias: Option<String>,
}

/// Direct-invoke event for the newsletter-subscription handler.
#[derive(Debug, Deserialize, Default)]
pub struct SubscribeInput {
    pub email: Option<String>,
}
