//! Type definitions for the FatSecret Platform API.
//!
//! This module contains the values that flow between the token manager, the request
//! dispatcher and the resource facades.
//!
//! ## Key Types
//!
//! - [`Credentials`] - OAuth2 client id/secret pair identifying the application
//! - [`TokenState`] - The cached bearer token together with its issue time and lifetime
//! - [`Params`] - The flat key/value parameter map sent with every API call
//! - [`VendorError`] - Helper for recognising error payloads returned by the API
//!
//! ## Parameter Conventions
//!
//! The API distinguishes an absent parameter from an empty one, so optional values are
//! modelled as `Option` fields and only `Some` values ever reach the wire. Dates are sent
//! as [`DiaryDate`] day numbers and enumerated values ([`Meal`], [`BrandType`], ...) are
//! rendered with the exact spelling the API expects.

use std::collections::BTreeMap;
use std::fmt;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use chrono::{DateTime, NaiveDate, Utc, Weekday};
use serde::{Deserialize, Serialize};

/// Environment variable holding the application's client id.
pub const CLIENT_ID_ENV: &str = "FATSECRET_CLIENT_ID";
/// Environment variable holding the application's client secret.
pub const CLIENT_SECRET_ENV: &str = "FATSECRET_CLIENT_SECRET";

/// OAuth2 client credentials issued by the FatSecret platform.
///
/// Immutable once constructed. The secret is never printed by `Debug`.
#[derive(Clone)]
pub struct Credentials {
    client_id: String,
    client_secret: String,
}

impl Credentials {
    pub fn new(client_id: impl Into<String>, client_secret: impl Into<String>) -> Self {
        Self {
            client_id: client_id.into(),
            client_secret: client_secret.into(),
        }
    }

    /// Reads `FATSECRET_CLIENT_ID` and `FATSECRET_CLIENT_SECRET`.
    pub fn from_env() -> Result<Self> {
        let client_id = std::env::var(CLIENT_ID_ENV)
            .with_context(|| format!("{} is not set", CLIENT_ID_ENV))?;
        let client_secret = std::env::var(CLIENT_SECRET_ENV)
            .with_context(|| format!("{} is not set", CLIENT_SECRET_ENV))?;
        Ok(Self::new(client_id, client_secret))
    }

    pub fn client_id(&self) -> &str {
        &self.client_id
    }

    pub fn client_secret(&self) -> &str {
        &self.client_secret
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("client_id", &self.client_id)
            .field("client_secret", &"***")
            .finish()
    }
}

/// Body returned by the `connect/token` endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct TokenResponse {
    /// The bearer token string
    pub access_token: String,
    /// Token lifetime in seconds, counted from the moment it was requested
    pub expires_in: u64,
    /// Always `Bearer` in practice
    #[serde(default)]
    pub token_type: Option<String>,
    /// Space separated scopes granted to the token
    #[serde(default)]
    pub scope: Option<String>,
}

/// Cached bearer token.
///
/// The three fields are always replaced together; a refresh builds a new `TokenState`
/// rather than patching an existing one.
#[derive(Clone)]
pub struct TokenState {
    pub access_token: String,
    pub expires_in: Duration,
    pub issued_at: Instant,
}

impl TokenState {
    pub fn from_response(response: TokenResponse, issued_at: Instant) -> Self {
        Self {
            access_token: response.access_token,
            expires_in: Duration::from_secs(response.expires_in),
            issued_at,
        }
    }

    /// Seconds of validity left at `now`. Negative once the token has expired.
    pub fn remaining_validity_at(&self, now: Instant) -> f64 {
        let elapsed = now.saturating_duration_since(self.issued_at);
        self.expires_in.as_secs_f64() - elapsed.as_secs_f64()
    }

    pub fn remaining_validity(&self) -> f64 {
        self.remaining_validity_at(Instant::now())
    }

    /// A token is reused only while at least `threshold` of its lifetime remains.
    pub fn needs_refresh_at(&self, now: Instant, threshold: Duration) -> bool {
        self.remaining_validity_at(now) < threshold.as_secs_f64()
    }

    /// First characters of the token, safe to log.
    pub fn preview(&self) -> String {
        let head: String = self.access_token.chars().take(10).collect();
        format!("{}...", head)
    }
}

impl fmt::Debug for TokenState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TokenState")
            .field("access_token", &self.preview())
            .field("expires_in", &self.expires_in)
            .field("issued_at", &self.issued_at)
            .finish()
    }
}

/// Flat parameter map sent as the query string of an API call.
///
/// Keys are kept ordered so that logged and echoed requests are stable.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Params(BTreeMap<String, String>);

impl Params {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a parameter that is always sent.
    pub fn with(mut self, key: &str, value: impl fmt::Display) -> Self {
        self.insert(key, value);
        self
    }

    /// Adds a parameter only when a value was supplied.
    pub fn with_opt<T: fmt::Display>(self, key: &str, value: Option<T>) -> Self {
        match value {
            Some(value) => self.with(key, value),
            None => self,
        }
    }

    /// Adds a comma separated list, skipped entirely when empty.
    pub fn with_list<T: fmt::Display>(self, key: &str, values: &[T]) -> Self {
        if values.is_empty() {
            return self;
        }
        let joined = values
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(",");
        self.with(key, joined)
    }

    pub fn insert(&mut self, key: &str, value: impl fmt::Display) {
        self.0.insert(key.to_string(), value.to_string());
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Error payload embedded in an otherwise successful API response.
///
/// The API reports failures as `{"error": {"code": 106, "message": "..."}}` with a normal
/// HTTP status, so responses are handed back untouched and callers opt into this check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VendorError {
    pub code: i64,
    pub message: String,
}

impl VendorError {
    pub fn from_response(body: &serde_json::Value) -> Option<Self> {
        let error = body.get("error")?;
        let code = match error.get("code")? {
            serde_json::Value::Number(n) => n.as_i64()?,
            serde_json::Value::String(s) => s.trim().parse().ok()?,
            _ => return None,
        };
        let message = error
            .get("message")
            .and_then(|m| m.as_str())
            .unwrap_or_default()
            .to_string();
        Some(Self { code, message })
    }
}

impl fmt::Display for VendorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "FatSecret error {}: {}", self.code, self.message)
    }
}

impl std::error::Error for VendorError {}

/// Optional region/language pair accepted by most lookup methods.
///
/// `language` is ignored by the API unless `region` is also given.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Locale {
    pub region: Option<String>,
    pub language: Option<String>,
}

impl Locale {
    pub fn region(region: impl Into<String>) -> Self {
        Self {
            region: Some(region.into()),
            language: None,
        }
    }

    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = Some(language.into());
        self
    }

    pub(crate) fn apply(self, params: Params) -> Params {
        params
            .with_opt("region", self.region)
            .with_opt("language", self.language)
    }
}

/// Date expressed as the number of days since January 1, 1970.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DiaryDate(pub i64);

impl DiaryDate {
    pub fn from_naive(date: NaiveDate) -> Self {
        Self(date.signed_duration_since(epoch()).num_days())
    }

    pub fn today() -> Self {
        Self::from_naive(Utc::now().date_naive())
    }

    /// `None` when the day count lies outside chrono's representable range.
    pub fn to_naive(self) -> Option<NaiveDate> {
        chrono::Duration::try_days(self.0).and_then(|days| epoch().checked_add_signed(days))
    }
}

fn epoch() -> NaiveDate {
    DateTime::<Utc>::UNIX_EPOCH.date_naive()
}

impl From<NaiveDate> for DiaryDate {
    fn from(date: NaiveDate) -> Self {
        Self::from_naive(date)
    }
}

impl fmt::Display for DiaryDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Bitmask of weekdays used by exercise templates: Sunday is bit 0, Saturday bit 6.
pub fn weekday_mask(days: &[Weekday]) -> u8 {
    days.iter()
        .fold(0u8, |mask, day| mask | (1 << day.num_days_from_sunday()))
}

macro_rules! wire_enum {
    ($(#[$meta:meta])* $name:ident { $($variant:ident => $wire:literal),+ $(,)? }) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum $name {
            $($variant),+
        }

        impl $name {
            pub fn as_str(self) -> &'static str {
                match self {
                    $(Self::$variant => $wire),+
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

wire_enum! {
    /// Meal a diary entry or saved meal belongs to.
    Meal {
        Breakfast => "breakfast",
        Lunch => "lunch",
        Dinner => "dinner",
        Other => "other",
    }
}

wire_enum! {
    /// Kind of brand a branded food is sold under.
    BrandType {
        Manufacturer => "manufacturer",
        Restaurant => "restaurant",
        Supermarket => "supermarket",
    }
}

wire_enum! {
    /// How `foods.search` summarises nutrition: per 100g or per default portion.
    GenericDescription {
        Weight => "weight",
        Portion => "portion",
    }
}

wire_enum! {
    /// Result ordering for `recipes.search.v3`.
    RecipeSort {
        Newest => "newest",
        Oldest => "oldest",
        CaloriesPerServingAscending => "caloriesPerServingAscending",
        CaloriesPerServingDescending => "caloriesPerServingDescending",
    }
}

wire_enum! {
    /// Metric unit for a custom food's serving amount.
    ServingUnit {
        Grams => "g",
        Millilitres => "ml",
        Ounces => "oz",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn token_reused_until_threshold() {
        let state = TokenState {
            access_token: "abc".to_string(),
            expires_in: Duration::from_secs(3600),
            issued_at: Instant::now(),
        };
        let threshold = Duration::from_secs(600);

        let early = state.issued_at + Duration::from_secs(3600 - 601);
        assert!(!state.needs_refresh_at(early, threshold));

        let boundary = state.issued_at + Duration::from_secs(3600 - 600);
        assert!(!state.needs_refresh_at(boundary, threshold));

        let late = state.issued_at + Duration::from_secs(3600 - 599);
        assert!(state.needs_refresh_at(late, threshold));
    }

    #[test]
    fn remaining_validity_goes_negative() {
        let state = TokenState {
            access_token: "abc".to_string(),
            expires_in: Duration::from_secs(10),
            issued_at: Instant::now(),
        };
        let later = state.issued_at + Duration::from_secs(25);
        assert_eq!(state.remaining_validity_at(later), -15.0);
    }

    #[test]
    fn optional_params_are_omitted() {
        let params = Params::new()
            .with("food_id", 33691)
            .with_opt::<u32>("max_results", None)
            .with_opt("include_food_images", Some(true))
            .with_list::<Meal>("meals", &[]);

        assert_eq!(params.len(), 2);
        assert_eq!(params.get("food_id"), Some("33691"));
        assert_eq!(params.get("include_food_images"), Some("true"));
        assert!(!params.contains_key("max_results"));
        assert!(!params.contains_key("meals"));
    }

    #[test]
    fn list_params_are_comma_separated() {
        let params = Params::new().with_list("meals", &[Meal::Breakfast, Meal::Other]);
        assert_eq!(params.get("meals"), Some("breakfast,other"));
    }

    #[test]
    fn diary_date_counts_days_since_epoch() {
        let date = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        let diary = DiaryDate::from_naive(date);
        assert_eq!(diary, DiaryDate(19723));
        assert_eq!(diary.to_naive(), Some(date));
        assert_eq!(diary.to_string(), "19723");
    }

    #[test]
    fn out_of_range_diary_date_has_no_calendar_date() {
        assert_eq!(DiaryDate(i64::MAX / 2).to_naive(), None);
        assert_eq!(DiaryDate(i64::MIN).to_naive(), None);
        assert!(DiaryDate(10_000_000).to_naive().is_some());
        assert_eq!(
            DiaryDate(-1).to_naive(),
            NaiveDate::from_ymd_opt(1969, 12, 31)
        );
    }

    #[test]
    fn weekday_mask_matches_documented_example() {
        assert_eq!(weekday_mask(&[Weekday::Tue, Weekday::Thu]), 20);
        assert_eq!(weekday_mask(&[Weekday::Sun]), 1);
        assert_eq!(weekday_mask(&[Weekday::Sat]), 64);
    }

    #[test]
    fn vendor_error_detection() {
        let body = json!({"error": {"code": 106, "message": "Invalid ID: food_id"}});
        assert_eq!(
            VendorError::from_response(&body),
            Some(VendorError {
                code: 106,
                message: "Invalid ID: food_id".to_string()
            })
        );

        let string_code = json!({"error": {"code": "13", "message": "Invalid token"}});
        assert_eq!(VendorError::from_response(&string_code).map(|e| e.code), Some(13));

        let ok = json!({"foods": {"food": []}});
        assert_eq!(VendorError::from_response(&ok), None);
    }

    #[test]
    fn token_response_decodes_minimal_body() {
        let token: TokenResponse =
            serde_json::from_value(json!({"access_token": "abc", "expires_in": 86400})).unwrap();
        assert_eq!(token.access_token, "abc");
        assert_eq!(token.expires_in, 86400);
        assert!(token.token_type.is_none());
        assert!(token.scope.is_none());
    }

    #[test]
    fn wire_enums_render_parameter_values() {
        assert_eq!(Meal::Breakfast.to_string(), "breakfast");
        assert_eq!(ServingUnit::Millilitres.as_str(), "ml");
        assert_eq!(
            RecipeSort::CaloriesPerServingAscending.as_str(),
            "caloriesPerServingAscending"
        );
        assert_eq!(
            Params::new().with("meal", Meal::Other).get("meal"),
            Some("other")
        );
    }

    #[test]
    fn credentials_debug_hides_secret() {
        let creds = Credentials::new("id", "super-secret");
        let printed = format!("{:?}", creds);
        assert!(printed.contains("id"));
        assert!(!printed.contains("super-secret"));
    }
}
