use anyhow::Result;
use reqwest::Client;
use serde_json::Value;

use crate::api::{
    ExerciseDiary, Food, FoodDiary, Foods, Profile, ProfileFoods, ProfileRecipes, Recipes,
    SavedMeals,
};
use crate::client::{
    auth::TokenManager,
    config::FatSecretConfig,
    types::{Credentials, Params},
};

/// Handle to the FatSecret Platform API.
///
/// Every API call is a POST to a single dispatch endpoint with the operation name in the
/// `method` parameter. Resource groups are reached through the accessor methods
/// ([`food`](Self::food), [`recipes`](Self::recipes), ...), which borrow the client.
pub struct FatSecretClient {
    api_url: String,
    client: Client,
    tokens: TokenManager,
}

impl FatSecretClient {
    /// Connects to the public FatSecret endpoints. Fetches the first token, so this
    /// fails if the credentials are rejected or the token endpoint is unreachable.
    pub async fn new(client_id: impl Into<String>, client_secret: impl Into<String>) -> Result<Self> {
        Self::with_config(
            Credentials::new(client_id, client_secret),
            FatSecretConfig::default(),
        )
        .await
    }

    pub async fn with_config(credentials: Credentials, config: FatSecretConfig) -> Result<Self> {
        let client = Client::new();
        let tokens = TokenManager::new(client.clone(), &config, credentials).await?;

        Ok(Self {
            api_url: config.api_url,
            client,
            tokens,
        })
    }

    pub fn tokens(&self) -> &TokenManager {
        &self.tokens
    }

    /// Calls API `method` with `params` and returns the decoded JSON body.
    ///
    /// `method` and `format=json` are always set, replacing any caller-supplied values.
    /// The HTTP status is not inspected: error payloads such as
    /// `{"error": {"code": 106, ...}}` come back as `Ok` and can be recognised with
    /// [`VendorError::from_response`](crate::client::types::VendorError::from_response).
    pub async fn request(&self, method: &str, params: Params) -> Result<Value> {
        let token = self.tokens.current_token().await?;
        let params = params.with("method", method).with("format", "json");

        tracing::debug!("Calling {} with {} parameters", method, params.len());

        let response = self
            .client
            .post(&self.api_url)
            .header("Authorization", format!("Bearer {}", token))
            .query(&params)
            .send()
            .await
            .map_err(|e| {
                tracing::error!("Network error calling {}: {}", method, e);
                anyhow::anyhow!("Failed to connect to FatSecret API at {}: {}", self.api_url, e)
            })?;

        let status = response.status();
        tracing::debug!("{} response status: {}", method, status);

        let body: Value = response.json().await.map_err(|e| {
            tracing::error!("Failed to parse {} response (status {}): {}", method, status, e);
            anyhow::anyhow!("Invalid response format from FatSecret for {}: {}", method, e)
        })?;

        Ok(body)
    }

    // Food lookups
    pub fn food(&self) -> Food<'_> {
        Food::new(self)
    }

    // Food search
    pub fn foods(&self) -> Foods<'_> {
        Foods::new(self)
    }

    pub fn recipes(&self) -> Recipes<'_> {
        Recipes::new(self)
    }

    // Profile management and per-profile data
    pub fn profile(&self) -> Profile<'_> {
        Profile::new(self)
    }

    pub fn exercise_diary(&self) -> ExerciseDiary<'_> {
        ExerciseDiary::new(self)
    }

    pub fn food_diary(&self) -> FoodDiary<'_> {
        FoodDiary::new(self)
    }

    pub fn profile_foods(&self) -> ProfileFoods<'_> {
        ProfileFoods::new(self)
    }

    pub fn profile_recipes(&self) -> ProfileRecipes<'_> {
        ProfileRecipes::new(self)
    }

    pub fn saved_meals(&self) -> SavedMeals<'_> {
        SavedMeals::new(self)
    }
}
