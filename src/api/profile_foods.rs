//! Custom foods and favourites stored on a profile.

use anyhow::Result;
use serde_json::Value;

use crate::client::{BrandType, FatSecretClient, Locale, Meal, Params, ServingUnit};

/// Required fields of a custom branded food. Energy in kcal, macros in grams.
#[derive(Debug, Clone)]
pub struct NewFood {
    pub brand_type: BrandType,
    /// E.g. "Quaker"
    pub brand_name: String,
    /// Name without the brand, e.g. "Instant Oatmeal"
    pub food_name: String,
    /// Full serving description, e.g. "1 serving"
    pub serving_size: String,
    pub calories: f64,
    pub fat: f64,
    pub carbohydrate: f64,
    pub protein: f64,
}

/// Optional nutrients and serving details for [`ProfileFoods::create`].
///
/// Grams unless noted: cholesterol, sodium, potassium, vitamin C, calcium and iron are
/// milligrams; vitamins A and D are micrograms.
#[derive(Debug, Clone, Default)]
pub struct NewFoodOptions {
    pub serving_amount: Option<String>,
    pub serving_amount_unit: Option<ServingUnit>,
    pub calories_from_fat: Option<f64>,
    pub saturated_fat: Option<f64>,
    pub polyunsaturated_fat: Option<f64>,
    pub monounsaturated_fat: Option<f64>,
    pub trans_fat: Option<f64>,
    pub cholesterol: Option<f64>,
    pub sodium: Option<f64>,
    pub potassium: Option<f64>,
    pub fiber: Option<f64>,
    pub sugar: Option<f64>,
    pub added_sugars: Option<f64>,
    pub vitamin_d: Option<f64>,
    pub vitamin_a: Option<f64>,
    pub vitamin_c: Option<f64>,
    pub calcium: Option<f64>,
    pub iron: Option<f64>,
    pub locale: Locale,
}

/// Serving a favourite refers to. Both unset means the food itself.
#[derive(Debug, Clone, Copy, Default)]
pub struct FavoriteServing {
    pub serving_id: Option<i64>,
    pub number_of_units: Option<f64>,
}

pub struct ProfileFoods<'a> {
    client: &'a FatSecretClient,
}

impl<'a> ProfileFoods<'a> {
    pub(crate) fn new(client: &'a FatSecretClient) -> Self {
        Self { client }
    }

    /// Creates a branded food visible to the profile.
    pub async fn create(&self, food: NewFood, options: NewFoodOptions) -> Result<Value> {
        let params = Params::new()
            .with("brand_type", food.brand_type)
            .with("brand_name", food.brand_name)
            .with("food_name", food.food_name)
            .with("serving_size", food.serving_size)
            .with("calories", food.calories)
            .with("fat", food.fat)
            .with("carbohydrate", food.carbohydrate)
            .with("protein", food.protein)
            .with_opt("serving_amount", options.serving_amount)
            .with_opt("serving_amount_unit", options.serving_amount_unit)
            .with_opt("calories_from_fat", options.calories_from_fat)
            .with_opt("saturated_fat", options.saturated_fat)
            .with_opt("polyunsaturated_fat", options.polyunsaturated_fat)
            .with_opt("monounsaturated_fat", options.monounsaturated_fat)
            .with_opt("trans_fat", options.trans_fat)
            .with_opt("cholesterol", options.cholesterol)
            .with_opt("sodium", options.sodium)
            .with_opt("potassium", options.potassium)
            .with_opt("fiber", options.fiber)
            .with_opt("sugar", options.sugar)
            .with_opt("added_sugars", options.added_sugars)
            .with_opt("vitamin_d", options.vitamin_d)
            .with_opt("vitamin_a", options.vitamin_a)
            .with_opt("vitamin_c", options.vitamin_c)
            .with_opt("calcium", options.calcium)
            .with_opt("iron", options.iron);
        let params = options.locale.apply(params);

        self.client.request("food.create.v2", params).await
    }

    pub async fn add_favorite(&self, food_id: i64, serving: FavoriteServing) -> Result<Value> {
        self.client
            .request("food.add_favorite", favorite_params(food_id, serving))
            .await
    }

    pub async fn delete_favorite(&self, food_id: i64, serving: FavoriteServing) -> Result<Value> {
        self.client
            .request("food.delete_favorite", favorite_params(food_id, serving))
            .await
    }

    pub async fn favorites(&self) -> Result<Value> {
        self.client.request("foods.get_favorites.v2", Params::new()).await
    }

    pub async fn most_eaten(&self, meal: Option<Meal>) -> Result<Value> {
        let params = Params::new().with_opt("meal", meal);
        self.client.request("foods.get_most_eaten.v2", params).await
    }

    pub async fn recently_eaten(&self, meal: Option<Meal>) -> Result<Value> {
        let params = Params::new().with_opt("meal", meal);
        self.client.request("foods.get_recently_eaten.v2", params).await
    }
}

fn favorite_params(food_id: i64, serving: FavoriteServing) -> Params {
    Params::new()
        .with("food_id", food_id)
        .with_opt("serving_id", serving.serving_id)
        .with_opt("number_of_units", serving.number_of_units)
}
