use anyhow::Result;
use serde_json::Value;

use crate::client::{FatSecretClient, Locale, Params, RecipeSort};

/// Filters for [`Recipes::search`]. Every field is optional.
///
/// Percentages are shares of the recipe's calories; times are total preparation and
/// cooking minutes.
#[derive(Debug, Clone, Default)]
pub struct RecipeSearchOptions {
    /// Recipe type names as listed by [`Recipes::types`]
    pub recipe_types: Vec<String>,
    /// Require every listed type instead of any of them
    pub recipe_types_matchall: Option<bool>,
    pub search_expression: Option<String>,
    pub must_have_images: Option<bool>,
    pub calories_from: Option<f64>,
    pub calories_to: Option<f64>,
    pub carb_percentage_from: Option<u32>,
    pub carb_percentage_to: Option<u32>,
    pub protein_percentage_from: Option<u32>,
    pub protein_percentage_to: Option<u32>,
    pub fat_percentage_from: Option<u32>,
    pub fat_percentage_to: Option<u32>,
    pub prep_time_from: Option<u32>,
    pub prep_time_to: Option<u32>,
    pub page_number: Option<u32>,
    pub max_results: Option<u32>,
    pub sort_by: Option<RecipeSort>,
    pub locale: Locale,
}

pub struct Recipes<'a> {
    client: &'a FatSecretClient,
}

impl<'a> Recipes<'a> {
    pub(crate) fn new(client: &'a FatSecretClient) -> Self {
        Self { client }
    }

    pub async fn get(&self, recipe_id: i64) -> Result<Value> {
        let params = Params::new().with("recipe_id", recipe_id);
        self.client.request("recipe.get.v2", params).await
    }

    pub async fn search(&self, options: RecipeSearchOptions) -> Result<Value> {
        let params = Params::new()
            .with_list("recipe_types", &options.recipe_types)
            .with_opt("recipe_types_matchall", options.recipe_types_matchall)
            .with_opt("search_expression", options.search_expression)
            .with_opt("must_have_images", options.must_have_images)
            .with_opt("calories_from", options.calories_from)
            .with_opt("calories_to", options.calories_to)
            .with_opt("carb_percentage_from", options.carb_percentage_from)
            .with_opt("carb_percentage_to", options.carb_percentage_to)
            .with_opt("protein_percentage_from", options.protein_percentage_from)
            .with_opt("protein_percentage_to", options.protein_percentage_to)
            .with_opt("fat_percentage_from", options.fat_percentage_from)
            .with_opt("fat_percentage_to", options.fat_percentage_to)
            .with_opt("prep_time_from", options.prep_time_from)
            .with_opt("prep_time_to", options.prep_time_to)
            .with_opt("page_number", options.page_number)
            .with_opt("max_results", options.max_results)
            .with_opt("sort_by", options.sort_by);
        let params = options.locale.apply(params);

        self.client.request("recipes.search.v3", params).await
    }

    /// All recipe type names, for use as search filters.
    pub async fn types(&self, locale: Locale) -> Result<Value> {
        self.client
            .request("recipe_types.get.v2", locale.apply(Params::new()))
            .await
    }
}
