//! Recipe store
//!
//! Name-keyed recipes, rebuilt wholesale from the vault and resolved lazily.

mod error;
mod resolver;

pub use error::ResolveError;
pub use resolver::Resolver;

use std::collections::HashMap;

use crate::models::{Nutrients, Recipe};
use crate::nutrition::{UnitAliases, PORTION};
use crate::parser;

/// All known recipes, keyed by their exact (case-sensitive) name
#[derive(Debug, Clone, Default)]
pub struct RecipeStore {
    recipes: HashMap<String, Recipe>,
}

impl RecipeStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace a recipe, returning the replaced one
    pub fn insert(&mut self, name: impl Into<String>, recipe: Recipe) -> Option<Recipe> {
        self.recipes.insert(name.into(), recipe)
    }

    pub fn get(&self, name: &str) -> Option<&Recipe> {
        self.recipes.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.recipes.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.recipes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.recipes.is_empty()
    }

    /// Recipe names in sorted order
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.recipes.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    pub fn clear(&mut self) {
        self.recipes.clear();
    }

    /// Load every row of a nutrient table document
    ///
    /// Returns the number of rows added.
    pub fn load_table(&mut self, text: &str, aliases: &UnitAliases) -> usize {
        let rows = parser::extract_table(text, aliases);
        let count = rows.len();
        for (name, recipe) in rows {
            self.insert(name, recipe);
        }
        count
    }

    /// Load one recipe document under `name`
    ///
    /// Returns false when the document has no ingredient lines and was skipped.
    pub fn load_document(&mut self, name: &str, text: &str, aliases: &UnitAliases) -> bool {
        match parser::extract_recipe(text, aliases) {
            Some(recipe) => {
                tracing::debug!(recipe = name, "loaded recipe document");
                self.insert(name, recipe);
                true
            }
            None => false,
        }
    }

    /// Write derived values back into a recipe
    ///
    /// Caches `nutrients` as the recipe's base nutrients, sets the total weight
    /// to `ingredient_grams` unless one was declared, completes pending
    /// conversions from the total weight, and adds a one-batch `Portion` unless
    /// the recipe defines its own. Existing conversions are never replaced.
    /// Returns false when no recipe has that name.
    pub fn complete_derivation(&mut self, name: &str, nutrients: Nutrients, ingredient_grams: f64) -> bool {
        let Some(recipe) = self.recipes.get_mut(name) else {
            return false;
        };

        recipe.nutrients_per_base = Some(nutrients);
        let total = *recipe.total_amount_grams.get_or_insert(ingredient_grams);

        for (unit, count) in &recipe.pending_conversions {
            recipe
                .unit_conversions
                .entry(unit.clone())
                .or_insert(total / count);
        }
        recipe.add_conversion_if_absent(PORTION, total);
        true
    }

    /// Resolver borrowing this store for a batch of queries
    pub fn resolver(&mut self) -> Resolver<'_> {
        Resolver::new(self)
    }

    /// Nutrients of `amount` `unit` of a recipe; all `NaN` when unresolvable
    pub fn calculate_nutrients(&mut self, name: &str, amount: f64, unit: &str) -> Nutrients {
        self.resolver().calculate_nutrients(name, amount, unit)
    }

    /// Like [`calculate_nutrients`](Self::calculate_nutrients) but reports why
    /// a query could not be resolved
    pub fn resolve(&mut self, name: &str, amount: f64, unit: &str) -> Result<Nutrients, ResolveError> {
        self.resolver().resolve(name, amount, unit)
    }
}
