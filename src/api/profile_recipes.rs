use anyhow::Result;
use serde_json::Value;

use crate::client::{FatSecretClient, Params};

/// Favourite recipes of a profile.
pub struct ProfileRecipes<'a> {
    client: &'a FatSecretClient,
}

impl<'a> ProfileRecipes<'a> {
    pub(crate) fn new(client: &'a FatSecretClient) -> Self {
        Self { client }
    }

    pub async fn add_favorite(&self, recipe_id: i64) -> Result<Value> {
        let params = Params::new().with("recipe_id", recipe_id);
        self.client.request("recipe.add_favorite", params).await
    }

    pub async fn delete_favorite(&self, recipe_id: i64) -> Result<Value> {
        let params = Params::new().with("recipe_id", recipe_id);
        self.client.request("recipe.delete_favorite", params).await
    }

    pub async fn favorites(&self) -> Result<Value> {
        self.client.request("recipe.get_favorites.v2", Params::new()).await
    }
}
