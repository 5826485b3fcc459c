//! Ingredient references
//!
//! Amounts stated for an ingredient inside a recipe, and a single inline
//! ingredient reference parsed from free text.

use serde::{Deserialize, Serialize};

/// An amount in a canonical unit
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IngredientAmount {
    pub amount: f64,
    pub unit: String,
}

impl IngredientAmount {
    pub fn new(amount: f64, unit: impl Into<String>) -> Self {
        Self {
            amount,
            unit: unit.into(),
        }
    }
}

/// A `<name> - <amount><unit>` reference found in text
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParsedIngredient {
    pub name: String,
    pub amount: f64,
    pub unit: String,
}
