//! Food lookups: details for a single food, barcodes, brands and categories.

use anyhow::Result;
use serde_json::Value;

use crate::client::{BrandType, FatSecretClient, Locale, Params};

/// Optional flags for [`Food::get`].
///
/// Images and allergen/dietary attributes require separate premier access.
#[derive(Debug, Clone, Default)]
pub struct FoodGetOptions {
    /// Include the names of all sub categories associated with the food
    pub include_sub_categories: Option<bool>,
    /// Include food images
    pub include_food_images: Option<bool>,
    /// Include dietary preferences and allergens when available
    pub include_food_attributes: Option<bool>,
    /// Flag the default serving among the returned servings
    pub flag_default_serving: Option<bool>,
    pub locale: Locale,
}

/// Optional filters for [`Food::brands`].
#[derive(Debug, Clone, Default)]
pub struct BrandsOptions {
    /// Defaults to manufacturer on the API side
    pub brand_type: Option<BrandType>,
    pub locale: Locale,
}

pub struct Food<'a> {
    client: &'a FatSecretClient,
}

impl<'a> Food<'a> {
    pub(crate) fn new(client: &'a FatSecretClient) -> Self {
        Self { client }
    }

    /// Returns the `food_id` for a GTIN-13 barcode.
    ///
    /// UPC-A, EAN-13 and EAN-8 codes are accepted once left-padded with zeros to 13
    /// digits; UPC-E codes must first be expanded to UPC-A.
    pub async fn find_id_for_barcode(&self, barcode: &str, locale: Locale) -> Result<Value> {
        let params = locale.apply(Params::new().with("barcode", barcode));
        self.client.request("food.find_id_for_barcode", params).await
    }

    /// Detailed nutrition for every standard serving size of a food.
    pub async fn get(&self, food_id: i64, options: FoodGetOptions) -> Result<Value> {
        let params = Params::new()
            .with("food_id", food_id)
            .with_opt("include_sub_categories", options.include_sub_categories)
            .with_opt("include_food_images", options.include_food_images)
            .with_opt("include_food_attributes", options.include_food_attributes)
            .with_opt("flag_default_serving", options.flag_default_serving);
        let params = options.locale.apply(params);

        self.client.request("food.get.v4", params).await
    }

    /// Food brands starting with `starts_with`; `"*"` selects brands starting with a digit.
    pub async fn brands(&self, starts_with: &str, options: BrandsOptions) -> Result<Value> {
        let params = Params::new()
            .with("starts_with", starts_with)
            .with_opt("brand_type", options.brand_type);
        let params = options.locale.apply(params);

        self.client.request("food_brands.get.v2", params).await
    }

    pub async fn categories(&self, locale: Locale) -> Result<Value> {
        self.client
            .request("food_categories.get.v2", locale.apply(Params::new()))
            .await
    }

    pub async fn sub_categories(&self, food_category_id: i64, locale: Locale) -> Result<Value> {
        let params = locale.apply(Params::new().with("food_category_id", food_category_id));
        self.client.request("food_sub_categories.get.v2", params).await
    }
}
