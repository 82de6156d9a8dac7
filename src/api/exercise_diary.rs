//! Exercise diary for a profile.
//!
//! Dates default to the current day on the API side when omitted.

use anyhow::Result;
use serde_json::Value;

use crate::client::{DiaryDate, FatSecretClient, Locale, Params};

/// Highest valid weekday bitmask (all seven days).
pub const MAX_TEMPLATE_DAYS: u8 = 0b0111_1111;

/// The required part of an [`ExerciseDiary::edit`] call: move `minutes` of activity
/// from one exercise type to another.
#[derive(Debug, Clone, Copy)]
pub struct ExerciseShift {
    pub shift_to_id: i64,
    pub shift_from_id: i64,
    pub minutes: u32,
}

/// Optional fields for [`ExerciseDiary::edit`].
///
/// The names and `kcal` only apply when shifting to or from exercise type 0 ("Other").
#[derive(Debug, Clone, Default)]
pub struct ExerciseEditOptions {
    pub date: Option<DiaryDate>,
    pub shift_to_name: Option<String>,
    pub shift_from_name: Option<String>,
    pub kcal: Option<u32>,
}

pub struct ExerciseDiary<'a> {
    client: &'a FatSecretClient,
}

impl<'a> ExerciseDiary<'a> {
    pub(crate) fn new(client: &'a FatSecretClient) -> Self {
        Self { client }
    }

    /// Full list of exercise types and their identifiers.
    pub async fn exercises(&self, locale: Locale) -> Result<Value> {
        self.client
            .request("exercises.get.v2", locale.apply(Params::new()))
            .await
    }

    /// Saves the default exercise entries for a day so they are no longer generated
    /// from the template.
    pub async fn commit_day(&self, date: Option<DiaryDate>) -> Result<Value> {
        let params = Params::new().with_opt("date", date);
        self.client.request("exercise_entries.commit_day", params).await
    }

    pub async fn entries(&self, date: Option<DiaryDate>) -> Result<Value> {
        let params = Params::new().with_opt("date", date);
        self.client.request("exercise_entries.get.v2", params).await
    }

    /// Daily summaries for the month containing `date`.
    pub async fn month(&self, date: Option<DiaryDate>) -> Result<Value> {
        let params = Params::new().with_opt("date", date);
        self.client.request("exercise_entries.get_month.v2", params).await
    }

    /// Uses the entries of `date` as the template for the weekdays in `days`.
    ///
    /// `days` is a bitmask with Sunday as bit 0, see
    /// [`weekday_mask`](crate::client::weekday_mask).
    pub async fn save_template(&self, days: u8, date: Option<DiaryDate>) -> Result<Value> {
        if days > MAX_TEMPLATE_DAYS {
            anyhow::bail!("Invalid weekday mask {}: must be at most {}", days, MAX_TEMPLATE_DAYS);
        }

        let params = Params::new().with("days", days).with_opt("date", date);
        self.client.request("exercise_entries.save_template", params).await
    }

    pub async fn edit(&self, shift: ExerciseShift, options: ExerciseEditOptions) -> Result<Value> {
        let params = Params::new()
            .with("shift_to_id", shift.shift_to_id)
            .with("shift_from_id", shift.shift_from_id)
            .with("minutes", shift.minutes)
            .with_opt("date", options.date)
            .with_opt("shift_to_name", options.shift_to_name)
            .with_opt("shift_from_name", options.shift_from_name)
            .with_opt("kcal", options.kcal);

        self.client.request("exercise_entry.edit", params).await
    }
}
