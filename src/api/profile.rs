//! Profile management.
//!
//! Profiles hold per-user data such as food and exercise diaries. A profile created here
//! is addressed afterwards by the `user_id` chosen at creation time, so the application
//! does not have to store the returned `auth_token`/`auth_secret` pair.

use anyhow::Result;
use serde_json::Value;

use crate::client::{FatSecretClient, Params};

pub struct Profile<'a> {
    client: &'a FatSecretClient,
}

impl<'a> Profile<'a> {
    pub(crate) fn new(client: &'a FatSecretClient) -> Self {
        Self { client }
    }

    /// Creates a profile identified by `user_id` and returns its `auth_token` and
    /// `auth_secret`. Both must be kept confidential.
    pub async fn create(&self, user_id: &str) -> Result<Value> {
        let params = Params::new().with("user_id", user_id);
        self.client.request("profile.create", params).await
    }

    /// General status information for the profile.
    pub async fn get(&self) -> Result<Value> {
        self.client.request("profile.get", Params::new()).await
    }

    /// Authentication information for the profile created with `user_id`.
    pub async fn get_auth(&self, user_id: &str) -> Result<Value> {
        let params = Params::new().with("user_id", user_id);
        self.client.request("profile.get_auth", params).await
    }
}
