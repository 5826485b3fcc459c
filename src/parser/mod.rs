//! Document parsing
//!
//! Extracts recipes from Markdown recipe documents and from the nutrient table.

pub mod document;
pub mod patterns;
pub mod table;

pub use document::{extract_recipe, parse_ingredient};
pub use table::extract_table;
