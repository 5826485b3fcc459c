//! Nutrition arithmetic
//!
//! Unit normalization, quantity parsing, gram conversion and nutrient scaling.

pub mod amount;
pub mod converter;
pub mod units;

pub use amount::parse_amount;
pub use converter::{convert_to_gram, nutrients_for_grams};
pub use units::{UnitAliases, GRAM, PORTION};
