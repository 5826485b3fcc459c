//! Nutrient resolution
//!
//! Resolves `(name, amount, unit)` queries against a [`RecipeStore`]. A
//! document recipe's nutrients are derived from its ingredients the first time
//! it is queried and cached in the store, together with its total weight and
//! completed unit conversions.
//!
//! Ingredients that are not in the store are left out of a derived sum. Values
//! that cannot be determined (unknown units, unparseable numbers) are `NaN` and
//! poison every sum they enter.

use crate::models::{IngredientAmount, Nutrients};
use crate::nutrition::{convert_to_gram, nutrients_for_grams};

use super::{RecipeStore, ResolveError};

/// Resolves nutrient queries, writing derived values back into the store
pub struct Resolver<'s> {
    store: &'s mut RecipeStore,
    /// Recipes currently being derived, outermost first
    deriving: Vec<String>,
}

impl<'s> Resolver<'s> {
    pub fn new(store: &'s mut RecipeStore) -> Self {
        Self {
            store,
            deriving: Vec::new(),
        }
    }

    /// Nutrients of `amount` `unit` of the named recipe
    ///
    /// An unknown recipe or an ingredient cycle is reported as an error and
    /// nothing on the cycle is cached. An unknown unit is not an error: the
    /// gram amount, and with it every nutrient, is `NaN`.
    pub fn resolve(&mut self, name: &str, amount: f64, unit: &str) -> Result<Nutrients, ResolveError> {
        self.deriving.clear();
        self.resolve_recipe(name, amount, unit)
    }

    /// Like [`resolve`](Self::resolve), with failures reported as all-`NaN`
    pub fn calculate_nutrients(&mut self, name: &str, amount: f64, unit: &str) -> Nutrients {
        match self.resolve(name, amount, unit) {
            Ok(nutrients) => nutrients,
            Err(err @ ResolveError::UnknownRecipe(_)) => {
                tracing::debug!(error = %err, "nutrient query not resolved");
                Nutrients::nan()
            }
            Err(err @ ResolveError::Cycle { .. }) => {
                tracing::warn!(error = %err, "nutrient query not resolved");
                Nutrients::nan()
            }
        }
    }

    fn resolve_recipe(&mut self, name: &str, amount: f64, unit: &str) -> Result<Nutrients, ResolveError> {
        let needs_derivation = self
            .store
            .get(name)
            .ok_or_else(|| ResolveError::UnknownRecipe(name.to_string()))?
            .needs_derivation();

        if needs_derivation {
            self.derive(name)?;
        }

        let recipe = self
            .store
            .get(name)
            .ok_or_else(|| ResolveError::UnknownRecipe(name.to_string()))?;

        let grams = convert_to_gram(amount, unit, &recipe.unit_conversions);
        let base_grams = recipe.total_amount_grams.unwrap_or(f64::NAN);
        let per_base = recipe.nutrients_per_base.unwrap_or_default();

        Ok(nutrients_for_grams(&per_base, base_grams, grams))
    }

    /// Sum the nutrients and weights of a recipe's known ingredients
    fn derive(&mut self, name: &str) -> Result<(), ResolveError> {
        if let Some(start) = self.deriving.iter().position(|n| n == name) {
            let mut path = self.deriving[start..].to_vec();
            path.push(name.to_string());
            return Err(ResolveError::Cycle { path });
        }

        let ingredients = match self.store.get(name).and_then(|r| r.ingredients.clone()) {
            Some(ingredients) => ingredients,
            None => return Ok(()),
        };

        self.deriving.push(name.to_string());

        let mut total = Nutrients::zero();
        let mut ingredient_grams = 0.0;

        for (ingredient, IngredientAmount { amount, unit }) in &ingredients {
            if !self.store.contains(ingredient) {
                tracing::debug!(recipe = name, ingredient = %ingredient, "skipping unknown ingredient");
                continue;
            }

            total += self.resolve_recipe(ingredient, *amount, unit)?;

            // the ingredient's table may have just been completed by its derivation
            if let Some(resolved) = self.store.get(ingredient) {
                ingredient_grams += convert_to_gram(*amount, unit, &resolved.unit_conversions);
            }
        }

        self.deriving.pop();
        self.store.complete_derivation(name, total, ingredient_grams);
        tracing::debug!(recipe = name, kcal = total.kcal, grams = ingredient_grams, "derived recipe nutrients");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nutrition::UnitAliases;

    const TABLE: &str = "\
| Name | kcal | Fett | KH | Prot | Einheiten |
|------|------|------|----|------|-----------|
| Apple | 52 | 0.2 | 14 | 0.3 | Stück: 180 |
| Nudeln | 350 | 1,5 | 70 | 12 | |
| Tomaten | 20 | 0,2 | 3 | 1 | Dose: 400 |
";

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    fn store_with(documents: &[(&str, &str)]) -> RecipeStore {
        let aliases = UnitAliases::default();
        let mut store = RecipeStore::new();
        store.load_table(TABLE, &aliases);
        for (name, text) in documents {
            store.load_document(name, text, &aliases);
        }
        store
    }

    #[test]
    fn test_table_recipe_in_local_unit() {
        let mut store = store_with(&[]);
        let apple = store.calculate_nutrients("Apple", 1.0, "Stück");
        assert!(close(apple.kcal, 93.6));
        assert!(close(apple.fat, 0.36));
        assert!(close(apple.kh, 25.2));
        assert!(close(apple.prot, 0.54));
    }

    #[test]
    fn test_document_recipe_scales_declared_yield() {
        let mut store = store_with(&[("Soup", "- Ergibt 1000 g\n- Apple - 200g")]);
        let apple = store.calculate_nutrients("Apple", 200.0, "g");
        let soup = store.calculate_nutrients("Soup", 500.0, "g");
        assert!(close(soup.kcal, apple.kcal / 2.0));
        assert!(close(soup.fat, apple.fat / 2.0));
        assert!(close(soup.kh, apple.kh / 2.0));
        assert!(close(soup.prot, apple.prot / 2.0));
    }

    #[test]
    fn test_unknown_recipe_is_all_nan() {
        let mut store = store_with(&[]);
        let result = store.calculate_nutrients("Nonexistent", 1.0, "g");
        assert!(result.kcal.is_nan());
        assert!(result.fat.is_nan());
        assert!(result.kh.is_nan());
        assert!(result.prot.is_nan());
        assert_eq!(
            store.resolve("Nonexistent", 1.0, "g"),
            Err(ResolveError::UnknownRecipe("Nonexistent".to_string()))
        );
    }

    #[test]
    fn test_unknown_unit_is_nan_not_error() {
        let mut store = store_with(&[]);
        let result = store.resolve("Apple", 1.0, "Tasse").unwrap();
        assert!(result.kcal.is_nan());
    }

    #[test]
    fn test_scaling_is_linear() {
        let mut store = store_with(&[("Pasta", "- Ergibt 2 Portionen\n- Nudeln - 250 g\n- Tomaten - 1 Dose")]);
        let one = store.calculate_nutrients("Pasta", 1.0, "Portion");
        let two = store.calculate_nutrients("Pasta", 2.0, "Portion");
        assert!(one.is_finite());
        for ((_, a), (_, b)) in one.entries().iter().zip(two.entries().iter()) {
            assert!(close(*b, 2.0 * a));
        }
    }

    #[test]
    fn test_repeated_queries_are_identical() {
        let mut store = store_with(&[("Pasta", "- Ergibt 2 Portionen\n- Nudeln - 250 g\n- Tomaten - 1 Dose")]);
        let first = store.calculate_nutrients("Pasta", 1.0, "Portion");
        let second = store.calculate_nutrients("Pasta", 1.0, "Portion");
        assert_eq!(first, second);
    }

    #[test]
    fn test_pending_yield_is_completed_from_ingredient_weight() {
        let mut store = store_with(&[("Pasta", "- Ergibt 2 Portionen\n- Nudeln - 250 g\n- Tomaten - 1 Dose")]);
        let portion = store.calculate_nutrients("Pasta", 1.0, "Portion");

        let pasta = store.get("Pasta").unwrap();
        assert_eq!(pasta.total_amount_grams, Some(650.0));
        assert_eq!(pasta.unit_conversions.get("Portion"), Some(&325.0));
        // 250 g pasta (875 kcal) + 400 g tomatoes (80 kcal), halved
        assert!(close(portion.kcal, 477.5));
    }

    #[test]
    fn test_portion_defaults_to_whole_recipe() {
        let mut store = store_with(&[("Salad", "- Apple - 2 Stück\n- Tomaten - 140 g")]);
        let whole = store.calculate_nutrients("Salad", 1.0, "Portion");
        let by_weight = store.calculate_nutrients("Salad", 500.0, "g");
        assert_eq!(store.get("Salad").unwrap().total_amount_grams, Some(500.0));
        assert!(close(whole.kcal, by_weight.kcal));
        assert!(close(whole.kcal, 187.2 + 28.0));
    }

    #[test]
    fn test_explicit_portion_is_kept() {
        let mut store = store_with(&[("Salad", "- Portion: 100 g\n- Apple - 2 Stück\n- Tomaten - 140 g")]);
        store.calculate_nutrients("Salad", 1.0, "Portion");
        assert_eq!(store.get("Salad").unwrap().unit_conversions.get("Portion"), Some(&100.0));
    }

    #[test]
    fn test_unknown_ingredients_are_excluded() {
        let mut store = store_with(&[("Soup", "- Ergibt 1000 g\n- Apple - 200g\n- Einhornstaub - 5 g")]);
        let soup = store.calculate_nutrients("Soup", 1000.0, "g");
        assert!(close(soup.kcal, 104.0));
    }

    #[test]
    fn test_unknown_ingredient_unit_poisons_recipe() {
        let mut store = store_with(&[("Soup", "- Ergibt 1000 g\n- Apple - 1 Tasse")]);
        let soup = store.calculate_nutrients("Soup", 1000.0, "g");
        assert!(soup.kcal.is_nan());
    }

    #[test]
    fn test_nested_recipes_use_completed_conversions() {
        let mut store = store_with(&[
            ("Sauce", "- Ergibt 4 Portionen\n- Tomaten - 2 Dosen"),
            ("Pasta", "- Nudeln - 500 g\n- Sauce - 2 Portionen"),
        ]);
        let pasta = store.calculate_nutrients("Pasta", 1.0, "Portion");
        // 1750 kcal pasta + half the sauce (160 kcal of 800 g tomatoes / 2)
        assert!(close(pasta.kcal, 1750.0 + 80.0));
        assert_eq!(store.get("Pasta").unwrap().total_amount_grams, Some(900.0));
        assert_eq!(store.get("Sauce").unwrap().unit_conversions.get("Portion"), Some(&200.0));
    }

    #[test]
    fn test_shared_sub_recipe_is_not_a_cycle() {
        let mut store = store_with(&[
            ("Sauce", "- Tomaten - 400 g"),
            ("Lasagne", "- Sauce - 200 g\n- Nudeln - 100 g"),
            ("Menu", "- Sauce - 100 g\n- Lasagne - 1 Portion"),
        ]);
        let menu = store.resolve("Menu", 1.0, "Portion").unwrap();
        assert!(close(menu.kcal, 20.0 + 40.0 + 350.0));
    }

    #[test]
    fn test_self_reference_is_a_cycle() {
        let mut store = store_with(&[("Sourdough", "- Sourdough - 50 g\n- Nudeln - 100 g")]);
        assert_eq!(
            store.resolve("Sourdough", 100.0, "g"),
            Err(ResolveError::Cycle {
                path: vec!["Sourdough".to_string(), "Sourdough".to_string()]
            })
        );
        assert!(store.calculate_nutrients("Sourdough", 100.0, "g").kcal.is_nan());
        assert!(store.get("Sourdough").unwrap().nutrients_per_base.is_none());
    }

    #[test]
    fn test_mutual_reference_is_a_cycle() {
        let mut store = store_with(&[
            ("Dough", "- Filling - 10 g\n- Nudeln - 100 g"),
            ("Filling", "- Dough - 10 g\n- Apple - 100 g"),
            ("Pie", "- Apple - 1 Stück\n- Dough - 200 g"),
        ]);
        let err = store.resolve("Pie", 1.0, "Portion").unwrap_err();
        assert_eq!(
            err,
            ResolveError::Cycle {
                path: vec!["Dough".to_string(), "Filling".to_string(), "Dough".to_string()]
            }
        );
        assert_eq!(err.to_string(), "Ingredient cycle detected: Dough -> Filling -> Dough");
        for name in ["Pie", "Dough", "Filling"] {
            assert!(store.get(name).unwrap().nutrients_per_base.is_none());
        }
    }
}
