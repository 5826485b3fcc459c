//! Data models
//!
//! Plain structs shared by the extractors, the store, and the resolver.

mod ingredient;
mod nutrition;
mod recipe;

pub use ingredient::{IngredientAmount, ParsedIngredient};
pub use nutrition::{Nutrients, NUTRIENT_KEYS};
pub use recipe::{ConversionTable, Recipe};
