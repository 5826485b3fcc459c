//! Recipe Metrics Library
//!
//! Nutrient resolution for recipes written as Markdown documents, where
//! recipes may use other recipes as ingredients and amounts may be given in
//! recipe-specific units.

pub mod build_info;
pub mod config;
pub mod library;
pub mod mcp;
pub mod models;
pub mod nutrition;
pub mod parser;
pub mod store;
pub mod tools;
pub mod vault;

pub use config::Config;
pub use library::{RebuildSummary, RecipeLibrary};
pub use models::{Nutrients, ParsedIngredient, Recipe};
pub use store::{RecipeStore, ResolveError};
