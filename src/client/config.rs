//! Endpoint and token-lifetime configuration.

use std::time::Duration;

use anyhow::{Context, Result};

pub const DEFAULT_TOKEN_URL: &str = "https://oauth.fatsecret.com/connect/token";
pub const DEFAULT_API_URL: &str = "https://platform.fatsecret.com/rest/server.api";

/// Tokens with less than this much validity left are replaced before use.
pub const DEFAULT_REFRESH_THRESHOLD: Duration = Duration::from_secs(600);

const DEFAULT_AUTH_TIMEOUT: Duration = Duration::from_secs(10);

/// Where the client talks to and how eagerly it renews its bearer token.
#[derive(Debug, Clone)]
pub struct FatSecretConfig {
    /// OAuth2 token endpoint
    pub token_url: String,
    /// REST dispatch endpoint
    pub api_url: String,
    /// Minimum remaining validity for a cached token to be reused
    pub refresh_threshold: Duration,
    /// Timeout applied to the token request
    pub auth_timeout: Duration,
    /// Scopes requested with the grant, e.g. `basic` or `premier barcode`
    pub scope: Option<String>,
}

impl Default for FatSecretConfig {
    fn default() -> Self {
        Self {
            token_url: DEFAULT_TOKEN_URL.to_string(),
            api_url: DEFAULT_API_URL.to_string(),
            refresh_threshold: DEFAULT_REFRESH_THRESHOLD,
            auth_timeout: DEFAULT_AUTH_TIMEOUT,
            scope: None,
        }
    }
}

impl FatSecretConfig {
    /// Defaults overridden by `FATSECRET_TOKEN_URL`, `FATSECRET_API_URL`,
    /// `FATSECRET_REFRESH_THRESHOLD_SECS` and `FATSECRET_SCOPE` when set.
    pub fn from_env() -> Result<Self> {
        let mut config = Self::default();

        if let Ok(url) = std::env::var("FATSECRET_TOKEN_URL") {
            config.token_url = url;
        }
        if let Ok(url) = std::env::var("FATSECRET_API_URL") {
            config.api_url = url;
        }
        if let Ok(secs) = std::env::var("FATSECRET_REFRESH_THRESHOLD_SECS") {
            let secs: u64 = secs
                .trim()
                .parse()
                .with_context(|| format!("Invalid FATSECRET_REFRESH_THRESHOLD_SECS: {}", secs))?;
            config.refresh_threshold = Duration::from_secs(secs);
        }
        if let Ok(scope) = std::env::var("FATSECRET_SCOPE") {
            let scope = scope.trim();
            if !scope.is_empty() {
                config.scope = Some(scope.to_string());
            }
        }

        Ok(config)
    }

    /// Points both endpoints at a single host, keeping the vendor's paths.
    ///
    /// Useful for proxies and local stand-ins of the API.
    pub fn with_base_url(base_url: &str) -> Self {
        let base = base_url.trim_end_matches('/');
        Self {
            token_url: format!("{}/connect/token", base),
            api_url: format!("{}/rest/server.api", base),
            ..Self::default()
        }
    }

    pub fn refresh_threshold(mut self, threshold: Duration) -> Self {
        self.refresh_threshold = threshold;
        self
    }

    pub fn scope(mut self, scope: impl Into<String>) -> Self {
        self.scope = Some(scope.into());
        self
    }
}
