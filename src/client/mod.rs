//! # FatSecret HTTP Client
//!
//! This module provides the transport layer for the FatSecret Platform API: the OAuth2
//! client-credentials token lifecycle and the single dispatch call every resource method
//! goes through.
//!
//! ## Modules
//!
//! - [`auth`] - Bearer token acquisition and lazy refresh
//! - [`client`] - The API client and request dispatch
//! - [`config`] - Endpoint URLs and refresh threshold
//! - [`types`] - Credentials, token state, request parameters and shared value types
//!
//! ## Quick Start
//!
//! ```no_run
//! use fatsecret::client::{FatSecretClient, Params};
//!
//! # async fn example() -> anyhow::Result<()> {
//! let client = FatSecretClient::new("client-id", "client-secret").await?;
//!
//! // Any API method can be called directly
//! let foods = client
//!     .request("foods.search", Params::new().with("search_expression", "toast"))
//!     .await?;
//! println!("{}", foods);
//! # Ok(())
//! # }
//! ```

pub mod auth;
#[allow(clippy::module_inception)]
pub mod client;
pub mod config;
pub mod types;

pub use auth::TokenManager;
pub use client::FatSecretClient;
pub use config::FatSecretConfig;
pub use types::*;
