//! Authentication handling for the FatSecret API.
//!
//! This module manages the OAuth2 client-credentials grant. A bearer token is fetched
//! when the client is built and renewed lazily, on the first request that finds it too
//! close to expiry.

use std::time::{Duration, Instant};

use anyhow::Result;
use reqwest::Client;
use tokio::sync::Mutex;

use crate::client::config::FatSecretConfig;
use crate::client::types::{Credentials, TokenResponse, TokenState};

/// # FatSecret Token Manager
///
/// Owns the client credentials and the single cached [`TokenState`].
///
/// ## Refresh Rule
///
/// A cached token is handed out while at least `refresh_threshold` (600 seconds by
/// default) of its lifetime remains. Otherwise a new token is fetched before returning.
/// There is no background timer; the check runs on every access.
///
/// ## Concurrency
///
/// The check-and-fetch sequence runs under a mutex, so concurrent callers that all see
/// an expiring token wait for one refresh and then share its result.
pub struct TokenManager {
    /// HTTP client for token requests
    client: Client,
    token_url: String,
    credentials: Credentials,
    scope: Option<String>,
    refresh_threshold: Duration,
    timeout: Duration,
    /// Cached token, replaced wholesale on refresh
    state: Mutex<TokenState>,
}

impl TokenManager {
    /// Builds the manager and fetches the first token immediately.
    pub async fn new(
        client: Client,
        config: &FatSecretConfig,
        credentials: Credentials,
    ) -> Result<Self> {
        let initial = fetch(
            &client,
            &config.token_url,
            &credentials,
            config.scope.as_deref(),
            config.auth_timeout,
        )
        .await?;

        Ok(Self {
            client,
            token_url: config.token_url.clone(),
            credentials,
            scope: config.scope.clone(),
            refresh_threshold: config.refresh_threshold,
            timeout: config.auth_timeout,
            state: Mutex::new(initial),
        })
    }

    /// Performs a client-credentials exchange without touching the cache.
    pub async fn fetch_token(&self) -> Result<TokenState> {
        fetch(
            &self.client,
            &self.token_url,
            &self.credentials,
            self.scope.as_deref(),
            self.timeout,
        )
        .await
    }

    /// Fetches a new token and replaces the cached one.
    pub async fn refresh(&self) -> Result<TokenState> {
        let mut state = self.state.lock().await;
        let fresh = self.fetch_token().await?;
        *state = fresh.clone();
        Ok(fresh)
    }

    /// Returns a token with at least `refresh_threshold` of validity left,
    /// refreshing first if necessary.
    pub async fn current_token(&self) -> Result<String> {
        let mut state = self.state.lock().await;

        let remaining = state.remaining_validity();
        if state.needs_refresh_at(Instant::now(), self.refresh_threshold) {
            if remaining < 0.0 {
                tracing::warn!("Cached token expired {:.0}s ago, refreshing", -remaining);
            } else {
                tracing::debug!("Cached token has {:.0}s left, refreshing", remaining);
            }
            *state = self.fetch_token().await?;
        } else {
            tracing::debug!("Reusing token {} ({:.0}s left)", state.preview(), remaining);
        }

        Ok(state.access_token.clone())
    }

    /// Seconds until the cached token expires; negative once it has.
    pub async fn remaining_validity(&self) -> f64 {
        self.state.lock().await.remaining_validity()
    }

    /// Copy of the cached token state.
    pub async fn snapshot(&self) -> TokenState {
        self.state.lock().await.clone()
    }
}

async fn fetch(
    client: &Client,
    token_url: &str,
    credentials: &Credentials,
    scope: Option<&str>,
    timeout: Duration,
) -> Result<TokenState> {
    tracing::info!(
        "Requesting access token for client: {}",
        credentials.client_id()
    );

    let mut form = vec![("grant_type", "client_credentials")];
    if let Some(scope) = scope {
        form.push(("scope", scope));
    }

    tracing::debug!("Making token request to: {}", token_url);

    let issued_at = Instant::now();
    let response = client
        .post(token_url)
        .basic_auth(credentials.client_id(), Some(credentials.client_secret()))
        .form(&form)
        .timeout(timeout)
        .send()
        .await
        .map_err(|e| {
            tracing::error!("Network error during token request: {}", e);
            anyhow::anyhow!("Failed to connect to FatSecret token endpoint at {}: {}", token_url, e)
        })?;

    let status = response.status();
    tracing::debug!("Token response status: {}", status);

    if !status.is_success() {
        let error_body = response
            .text()
            .await
            .unwrap_or_else(|_| "Unable to read error response".to_string());
        tracing::error!("Token request failed with status {}: {}", status, error_body);

        match status.as_u16() {
            400 | 401 => anyhow::bail!("Invalid client credentials: {}", error_body),
            404 => anyhow::bail!("FatSecret token endpoint not found: {}", token_url),
            500..=599 => anyhow::bail!("FatSecret server error ({}): {}", status, error_body),
            _ => anyhow::bail!("Token request failed with status {}: {}", status, error_body),
        }
    }

    let token: TokenResponse = response.json().await.map_err(|e| {
        tracing::error!("Failed to parse token response: {}", e);
        anyhow::anyhow!("Invalid response from FatSecret token endpoint: {}", e)
    })?;

    let state = TokenState::from_response(token, issued_at);
    tracing::info!(
        "Access token acquired, valid for {}s",
        state.expires_in.as_secs()
    );
    tracing::debug!("Received token: {}", state.preview());

    Ok(state)
}
