//! Recipe model
//!
//! One entry per known food item or dish, either table-sourced with stated
//! nutrients or document-sourced with ingredients.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::{IngredientAmount, Nutrients};

/// Grams per unit, keyed by canonical unit name
pub type ConversionTable = BTreeMap<String, f64>;

/// A recipe with its unit conversions and (possibly derived) nutrients
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Recipe {
    /// Weight of one full batch, the base amount of `nutrients_per_base`
    pub total_amount_grams: Option<f64>,
    /// Known conversions local to this recipe; "g" is implicit
    pub unit_conversions: ConversionTable,
    /// Units counted in the declared yield, waiting for a total weight
    pub pending_conversions: BTreeMap<String, f64>,
    /// Ingredient name to stated amount, for document-sourced recipes
    pub ingredients: Option<BTreeMap<String, IngredientAmount>>,
    /// Nutrients of `total_amount_grams` grams; cached once derived
    pub nutrients_per_base: Option<Nutrients>,
}

impl Recipe {
    /// A table recipe: nutrients stated per 100 g
    pub fn with_nutrients(nutrients_per_100g: Nutrients, conversions: ConversionTable) -> Self {
        Self {
            total_amount_grams: Some(100.0),
            unit_conversions: conversions,
            nutrients_per_base: Some(nutrients_per_100g),
            ..Default::default()
        }
    }

    /// True when nutrients must still be derived from ingredients
    pub fn needs_derivation(&self) -> bool {
        self.nutrients_per_base.is_none() && self.ingredients.is_some()
    }

    /// Record a conversion unless the unit already has one
    ///
    /// Returns whether the table changed.
    pub fn add_conversion_if_absent(&mut self, unit: &str, grams_per_unit: f64) -> bool {
        if self.unit_conversions.contains_key(unit) {
            return false;
        }
        self.unit_conversions.insert(unit.to_string(), grams_per_unit);
        true
    }
}
