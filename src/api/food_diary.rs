//! Food diary for a profile.

use anyhow::Result;
use serde_json::Value;

use crate::client::{DiaryDate, FatSecretClient, Meal, Params};

/// Selects the entries returned by [`FoodDiary::entries`]: every entry on a day, or a
/// single entry by id.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FoodEntriesQuery {
    Date(DiaryDate),
    Entry(i64),
}

/// A new diary entry.
#[derive(Debug, Clone)]
pub struct NewFoodEntry {
    pub food_id: i64,
    /// Description as entered by the user, typically the food's name
    pub food_entry_name: String,
    pub serving_id: i64,
    /// Units of the serving; always 1 for branded foods
    pub number_of_units: f64,
    pub meal: Meal,
    pub date: DiaryDate,
}

/// Fields to change on an existing diary entry. Unset fields are left as they are.
#[derive(Debug, Clone, Default)]
pub struct FoodEntryEdit {
    pub food_entry_name: Option<String>,
    pub serving_id: Option<i64>,
    pub number_of_units: Option<f64>,
    pub meal: Option<Meal>,
}

pub struct FoodDiary<'a> {
    client: &'a FatSecretClient,
}

impl<'a> FoodDiary<'a> {
    pub(crate) fn new(client: &'a FatSecretClient) -> Self {
        Self { client }
    }

    /// Copies the entries of one day to another, optionally only one meal.
    pub async fn copy(&self, from_date: DiaryDate, to_date: DiaryDate, meal: Option<Meal>) -> Result<Value> {
        let params = Params::new()
            .with("from_date", from_date)
            .with("to_date", to_date)
            .with_opt("meal", meal);
        self.client.request("food_entries.copy", params).await
    }

    /// Adds the items of a saved meal to the diary.
    pub async fn copy_saved_meal(
        &self,
        saved_meal_id: i64,
        meal: Meal,
        date: Option<DiaryDate>,
    ) -> Result<Value> {
        let params = Params::new()
            .with("saved_meal_id", saved_meal_id)
            .with("meal", meal)
            .with_opt("date", date);
        self.client.request("food_entries.copy_saved_meal", params).await
    }

    pub async fn entries(&self, query: FoodEntriesQuery) -> Result<Value> {
        let params = match query {
            FoodEntriesQuery::Date(date) => Params::new().with("date", date),
            FoodEntriesQuery::Entry(id) => Params::new().with("food_entry_id", id),
        };
        self.client.request("food_entries.get.v2", params).await
    }

    /// Daily nutrition summaries for the month containing `date`.
    pub async fn month(&self, date: DiaryDate) -> Result<Value> {
        let params = Params::new().with("date", date);
        self.client.request("food_entries.get_month.v2", params).await
    }

    pub async fn create(&self, entry: NewFoodEntry) -> Result<Value> {
        let params = Params::new()
            .with("food_id", entry.food_id)
            .with("food_entry_name", entry.food_entry_name)
            .with("serving_id", entry.serving_id)
            .with("number_of_units", entry.number_of_units)
            .with("meal", entry.meal)
            .with("date", entry.date);
        self.client.request("food_entry.create", params).await
    }

    pub async fn edit(&self, food_entry_id: i64, edit: FoodEntryEdit) -> Result<Value> {
        let params = Params::new()
            .with("food_entry_id", food_entry_id)
            .with_opt("food_entry_name", edit.food_entry_name)
            .with_opt("serving_id", edit.serving_id)
            .with_opt("number_of_units", edit.number_of_units)
            .with_opt("meal", edit.meal);
        self.client.request("food_entry.edit", params).await
    }

    pub async fn delete(&self, food_entry_id: i64) -> Result<Value> {
        let params = Params::new().with("food_entry_id", food_entry_id);
        self.client.request("food_entry.delete", params).await
    }
}
