//! Saved meals: named groups of foods that can be copied into the food diary in one go.

use anyhow::Result;
use serde_json::Value;

use crate::client::{FatSecretClient, Meal, Params};

/// Optional fields for [`SavedMeals::create`].
#[derive(Debug, Clone, Default)]
pub struct SavedMealOptions {
    pub saved_meal_description: Option<String>,
    /// Meals the saved meal suits; sent as a comma separated list, omitted when empty
    pub meals: Vec<Meal>,
}

/// Changes for [`SavedMeals::edit`]. Unset fields keep their current value.
#[derive(Debug, Clone, Default)]
pub struct SavedMealEdit {
    pub saved_meal_name: Option<String>,
    pub saved_meal_description: Option<String>,
    pub meals: Vec<Meal>,
}

#[derive(Debug, Clone)]
pub struct NewSavedMealItem {
    pub food_id: i64,
    pub saved_meal_item_name: String,
    pub serving_id: i64,
    pub number_of_units: f64,
}

#[derive(Debug, Clone, Default)]
pub struct SavedMealItemEdit {
    pub saved_meal_item_name: Option<String>,
    pub number_of_units: Option<f64>,
}

pub struct SavedMeals<'a> {
    client: &'a FatSecretClient,
}

impl<'a> SavedMeals<'a> {
    pub(crate) fn new(client: &'a FatSecretClient) -> Self {
        Self { client }
    }

    pub async fn create(&self, saved_meal_name: &str, options: SavedMealOptions) -> Result<Value> {
        let params = Params::new()
            .with("saved_meal_name", saved_meal_name)
            .with_opt("saved_meal_description", options.saved_meal_description)
            .with_list("meals", &options.meals);
        self.client.request("saved_meal.create", params).await
    }

    pub async fn delete(&self, saved_meal_id: i64) -> Result<Value> {
        let params = Params::new().with("saved_meal_id", saved_meal_id);
        self.client.request("saved_meal.delete", params).await
    }

    pub async fn edit(&self, saved_meal_id: i64, edit: SavedMealEdit) -> Result<Value> {
        let params = Params::new()
            .with("saved_meal_id", saved_meal_id)
            .with_opt("saved_meal_name", edit.saved_meal_name)
            .with_opt("saved_meal_description", edit.saved_meal_description)
            .with_list("meals", &edit.meals);
        self.client.request("saved_meal.edit", params).await
    }

    /// Saved meals of the profile, optionally only those suited to `meal`.
    pub async fn list(&self, meal: Option<Meal>) -> Result<Value> {
        let params = Params::new().with_opt("meal", meal);
        self.client.request("saved_meals.get.v2", params).await
    }

    pub async fn add_item(&self, saved_meal_id: i64, item: NewSavedMealItem) -> Result<Value> {
        let params = Params::new()
            .with("saved_meal_id", saved_meal_id)
            .with("food_id", item.food_id)
            .with("saved_meal_item_name", item.saved_meal_item_name)
            .with("serving_id", item.serving_id)
            .with("number_of_units", item.number_of_units);
        self.client.request("saved_meal_item.add", params).await
    }

    pub async fn edit_item(&self, saved_meal_item_id: i64, edit: SavedMealItemEdit) -> Result<Value> {
        let params = Params::new()
            .with("saved_meal_item_id", saved_meal_item_id)
            .with_opt("saved_meal_item_name", edit.saved_meal_item_name)
            .with_opt("number_of_units", edit.number_of_units);
        self.client.request("saved_meal_item.edit", params).await
    }

    pub async fn delete_item(&self, saved_meal_item_id: i64) -> Result<Value> {
        let params = Params::new().with("saved_meal_item_id", saved_meal_item_id);
        self.client.request("saved_meal_item.delete", params).await
    }

    pub async fn items(&self, saved_meal_id: i64) -> Result<Value> {
        let params = Params::new().with("saved_meal_id", saved_meal_id);
        self.client.request("saved_meal_items.get.v2", params).await
    }
}
