//! # Resource Facades
//!
//! Each facade groups related API methods and translates typed arguments into the
//! API's flat parameter map. Required parameters are plain arguments; optional ones live
//! in `*Options` structs whose `None` fields are left out of the request entirely.
//!
//! | Facade | Accessor | API methods |
//! |---|---|---|
//! | [`Food`] | `food()` | `food.get.v4`, `food.find_id_for_barcode`, brands, categories |
//! | [`Foods`] | `foods()` | `foods.search`, `foods.search.v3`, `foods.autocomplete.v2` |
//! | [`Recipes`] | `recipes()` | `recipe.get.v2`, `recipes.search.v3`, `recipe_types.get.v2` |
//! | [`Profile`] | `profile()` | `profile.create`, `profile.get`, `profile.get_auth` |
//! | [`ExerciseDiary`] | `exercise_diary()` | `exercises.*`, `exercise_entries.*`, `exercise_entry.edit` |
//! | [`FoodDiary`] | `food_diary()` | `food_entries.*`, `food_entry.*` |
//! | [`ProfileFoods`] | `profile_foods()` | `food.create.v2`, favorites, most/recently eaten |
//! | [`ProfileRecipes`] | `profile_recipes()` | recipe favorites |
//! | [`SavedMeals`] | `saved_meals()` | `saved_meal.*`, `saved_meal_item.*` |
//!
//! All methods return the API's JSON response untouched.

pub mod exercise_diary;
pub mod food;
pub mod food_diary;
pub mod foods;
pub mod profile;
pub mod profile_foods;
pub mod profile_recipes;
pub mod recipes;
pub mod saved_meals;

pub use exercise_diary::*;
pub use food::*;
pub use food_diary::*;
pub use foods::*;
pub use profile::*;
pub use profile_foods::*;
pub use profile_recipes::*;
pub use recipes::*;
pub use saved_meals::*;
