//! Recipe documents
//!
//! Turns the text of one Markdown recipe into a [`Recipe`] with ingredients,
//! local conversions and a declared yield.

use std::collections::BTreeMap;

use crate::models::{IngredientAmount, ParsedIngredient, Recipe};
use crate::nutrition::{parse_amount, UnitAliases, GRAM};

use super::patterns::{self, IngredientMatch};

/// Extract a recipe from a document's text
///
/// Returns `None` when the text has no ingredient lines; such documents are
/// notes rather than recipes and are left out of the store.
pub fn extract_recipe(text: &str, aliases: &UnitAliases) -> Option<Recipe> {
    let mut recipe = Recipe::default();

    for conversion in patterns::conversions(text) {
        recipe.unit_conversions.insert(
            aliases.normalize(conversion.unit),
            parse_amount(conversion.grams),
        );
    }

    if let Some(declared) = patterns::yields(text).next() {
        let amount = parse_amount(declared.amount);
        let unit = aliases.normalize(declared.unit);
        if unit == GRAM {
            recipe.total_amount_grams = Some(amount);
        } else if let Some(grams_per_unit) = recipe.unit_conversions.get(&unit) {
            recipe.total_amount_grams = Some(amount * grams_per_unit);
        } else {
            // completed once the weight is derived from the ingredients
            recipe.pending_conversions.insert(unit, amount);
        }
    }

    let mut ingredients = BTreeMap::new();
    for found in patterns::ingredients(text) {
        let ingredient = to_parsed(found, aliases);
        ingredients.insert(
            ingredient.name,
            IngredientAmount::new(ingredient.amount, ingredient.unit),
        );
    }

    if ingredients.is_empty() {
        return None;
    }
    recipe.ingredients = Some(ingredients);
    Some(recipe)
}

/// Parse a single inline ingredient reference such as `Apple - 2 Stück`
pub fn parse_ingredient(text: &str, aliases: &UnitAliases) -> Option<ParsedIngredient> {
    patterns::inline_ingredient(text).map(|found| to_parsed(found, aliases))
}

fn to_parsed(found: IngredientMatch<'_>, aliases: &UnitAliases) -> ParsedIngredient {
    ParsedIngredient {
        name: found.name.trim().to_string(),
        amount: parse_amount(found.amount),
        unit: aliases.normalize(found.unit),
    }
}
