//! Recipe MCP Tools
//!
//! Nutrient queries, ingredient parsing, store rebuilds and recipe inspection.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::library::{RebuildSummary, RecipeLibrary};
use crate::models::{IngredientAmount, Nutrients, ParsedIngredient};
use crate::nutrition::PORTION;

/// Response for calculate_nutrients and portion_nutrients
#[derive(Debug, Serialize)]
pub struct NutrientsResponse {
    pub name: String,
    pub amount: f64,
    pub unit: String,
    /// False when the recipe is unknown or part of an ingredient cycle
    pub found: bool,
    /// Values that could not be determined are null
    pub nutrients: Nutrients,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Response for parse_ingredient
#[derive(Debug, Serialize)]
pub struct ParseIngredientResponse {
    pub found: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ingredient: Option<ParsedIngredient>,
}

/// Response for list_recipes
#[derive(Debug, Serialize)]
pub struct ListRecipesResponse {
    pub recipes: Vec<String>,
    pub count: usize,
}

/// Full recipe detail as currently held by the store
#[derive(Debug, Serialize)]
pub struct RecipeDetail {
    pub name: String,
    /// True for document recipes, false for nutrient table rows
    pub composite: bool,
    pub total_amount_grams: Option<f64>,
    pub unit_conversions: BTreeMap<String, f64>,
    pub pending_conversions: BTreeMap<String, f64>,
    pub ingredients: Option<BTreeMap<String, IngredientAmount>>,
    /// Absent until a document recipe has been resolved once
    pub nutrients_per_base: Option<Nutrients>,
}

// ============================================================================
// Recipe Tools
// ============================================================================

/// Nutrients of `amount` `unit` of a recipe
///
/// The unit is normalized with the configured aliases, so "Portionen" works
/// where a recipe defines "Portion".
pub fn calculate_nutrients(library: &RecipeLibrary, name: &str, amount: f64, unit: &str) -> Result<NutrientsResponse, String> {
    let name = name.trim();
    if name.is_empty() {
        return Err("Recipe name cannot be empty".to_string());
    }

    let unit = library.normalize_unit(unit);
    let (found, nutrients, error) = match library.resolve(name, amount, &unit) {
        Ok(nutrients) => (true, nutrients, None),
        Err(err) => (false, Nutrients::nan(), Some(err.to_string())),
    };

    Ok(NutrientsResponse {
        name: name.to_string(),
        amount,
        unit,
        found,
        nutrients,
        error,
    })
}

/// Nutrients of one portion of a recipe
pub fn portion_nutrients(library: &RecipeLibrary, name: &str) -> Result<NutrientsResponse, String> {
    calculate_nutrients(library, name, 1.0, PORTION)
}

/// Parse a single inline `<name> - <amount><unit>` reference
pub fn parse_ingredient(library: &RecipeLibrary, text: &str) -> ParseIngredientResponse {
    let ingredient = library.parse_ingredient(text);
    ParseIngredientResponse {
        found: ingredient.is_some(),
        ingredient,
    }
}

/// Rebuild the recipe store from the vault
pub fn update_recipes(library: &RecipeLibrary) -> Result<RebuildSummary, String> {
    library
        .update_recipes()
        .map_err(|e| format!("Failed to rebuild recipes: {}", e))
}

/// List recipe names, optionally filtered by a case-insensitive substring
pub fn list_recipes(library: &RecipeLibrary, query: Option<&str>) -> ListRecipesResponse {
    let needle = query
        .map(str::trim)
        .filter(|q| !q.is_empty())
        .map(str::to_lowercase);

    let recipes: Vec<String> = library
        .recipe_names()
        .into_iter()
        .filter(|name| match &needle {
            Some(needle) => name.to_lowercase().contains(needle),
            None => true,
        })
        .collect();

    ListRecipesResponse {
        count: recipes.len(),
        recipes,
    }
}

/// Get a recipe's current fields
pub fn get_recipe(library: &RecipeLibrary, name: &str) -> Option<RecipeDetail> {
    let name = name.trim();
    library.recipe(name).map(|recipe| RecipeDetail {
        name: name.to_string(),
        composite: recipe.ingredients.is_some(),
        total_amount_grams: recipe.total_amount_grams,
        unit_conversions: recipe.unit_conversions,
        pending_conversions: recipe.pending_conversions,
        ingredients: recipe.ingredients,
        nutrients_per_base: recipe.nutrients_per_base,
    })
}
