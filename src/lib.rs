//! # FatSecret Client Library
//!
//! This library wraps the FatSecret Platform REST API, a food, nutrition and recipe
//! database with per-user diaries. It consists of two main components:
//!
//! ## Client Module
//!
//! The [`client`] module authenticates with OAuth2 client credentials, keeps the bearer
//! token fresh and dispatches calls to the API's single `server.api` endpoint.
//!
//! ## API Module
//!
//! The [`api`] module groups the API's methods into resource facades (foods, recipes,
//! diaries, saved meals, ...) that turn typed arguments into the API's flat parameters.
//!
//! ## Quick Start
//!
//! ```no_run
//! use fatsecret::FatSecretClient;
//! use fatsecret::api::FoodSearchOptions;
//!
//! # async fn example() -> anyhow::Result<()> {
//! let client = FatSecretClient::new("client-id", "client-secret").await?;
//!
//! let results = client
//!     .foods()
//!     .search("banana", FoodSearchOptions { max_results: Some(5), ..Default::default() })
//!     .await?;
//! println!("{}", results);
//! # Ok(())
//! # }
//! ```
//!
//! Responses are returned as [`serde_json::Value`] exactly as the API sent them,
//! including error payloads; see [`client::VendorError`].

pub mod api;
pub mod client;

pub use client::{Credentials, FatSecretClient, FatSecretConfig, Params, VendorError};
