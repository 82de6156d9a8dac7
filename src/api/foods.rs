//! Searching the food database.
//!
//! Results are paginated by a zero-based page offset: with `max_results = 10` and
//! `page_number = 4` the API returns results 41 to 50.

use anyhow::Result;
use serde_json::Value;

use crate::client::{FatSecretClient, GenericDescription, Locale, Params};

#[derive(Debug, Clone, Default)]
pub struct FoodSearchOptions {
    /// Zero-based page offset
    pub page_number: Option<u32>,
    /// At most 50, 20 when unset
    pub max_results: Option<u32>,
    /// Summarise nutrition per weight (100g) or per default portion
    pub generic_description: Option<GenericDescription>,
    pub locale: Locale,
}

#[derive(Debug, Clone, Default)]
pub struct FoodSearchV3Options {
    pub page_number: Option<u32>,
    pub max_results: Option<u32>,
    pub include_sub_categories: Option<bool>,
    pub include_food_images: Option<bool>,
    pub include_food_attributes: Option<bool>,
    pub flag_default_serving: Option<bool>,
    pub locale: Locale,
}

#[derive(Debug, Clone, Default)]
pub struct AutocompleteOptions {
    /// At most 10, 4 when unset
    pub max_results: Option<u32>,
    pub locale: Locale,
}

pub struct Foods<'a> {
    client: &'a FatSecretClient,
}

impl<'a> Foods<'a> {
    pub(crate) fn new(client: &'a FatSecretClient) -> Self {
        Self { client }
    }

    /// Searches foods by name. Results are refined by the profile's saved entries.
    pub async fn search(&self, search_expression: &str, options: FoodSearchOptions) -> Result<Value> {
        let params = Params::new()
            .with("search_expression", search_expression)
            .with_opt("page_number", options.page_number)
            .with_opt("max_results", options.max_results)
            .with_opt("generic_description", options.generic_description);
        let params = options.locale.apply(params);

        self.client.request("foods.search", params).await
    }

    /// Searches foods by name, returning full nutrition for each match.
    pub async fn search_v3(
        &self,
        search_expression: &str,
        options: FoodSearchV3Options,
    ) -> Result<Value> {
        let params = Params::new()
            .with("search_expression", search_expression)
            .with_opt("page_number", options.page_number)
            .with_opt("max_results", options.max_results)
            .with_opt("include_sub_categories", options.include_sub_categories)
            .with_opt("include_food_images", options.include_food_images)
            .with_opt("include_food_attributes", options.include_food_attributes)
            .with_opt("flag_default_serving", options.flag_default_serving);
        let params = options.locale.apply(params);

        self.client.request("foods.search.v3", params).await
    }

    /// Suggestions for a partial expression, e.g. `"chic"`.
    ///
    /// Only the default region/language combination is supported by the API.
    pub async fn autocomplete(&self, expression: &str, options: AutocompleteOptions) -> Result<Value> {
        let params = Params::new()
            .with("expression", expression)
            .with_opt("max_results", options.max_results);
        let params = options.locale.apply(params);

        self.client.request("foods.autocomplete.v2", params).await
    }
}
