use std::env;

/// Default addy.io API root, used when BASE_URL is not set.
pub const DEFAULT_ADDY_BASE_URL: &str = "https://app.addy.io/api/v1";

/// Configuration for the alias-creation handlers.
#[derive(Debug, Clone)]
pub struct AddyConfig {
    pub api_key: String,
    pub base_url: String,
}

impl AddyConfig {
    pub fn from_env() -> Result<Self, String> {
        Ok(Self {
            api_key: env::var("ADDY_API_KEY").map_err(|e| format!("ADDY_API_KEY: {}", e))?,
            base_url: env::var("BASE_URL").unwrap_or_else(|_| DEFAULT_ADDY_BASE_URL.to_string()),
        })
    }
}

/// Configuration for the newsletter-subscription handler.
#[derive(Debug, Clone)]
pub struct AuchanConfig {
    pub api_url: String,
    pub api_key: String,
}

impl AuchanConfig {
    pub fn from_env() -> Result<Self, String> {
        Ok(Self {
            api_url: env::var("AUCHAN_API_URL").map_err(|e| format!("AUCHAN_API_URL: {}", e))?,
            api_key: env::var("AUCHAN_API_KEY").map_err(|e| format!("AUCHAN_API_KEY: {}", e))?,
        })
    }
}
