//! Unit conversion and nutrient scaling

use crate::models::{ConversionTable, Nutrients};

use super::units::GRAM;

/// Convert an amount in `unit` to grams using a recipe's conversion table
///
/// Grams convert to themselves regardless of the table. A unit that is neither
/// "g" nor in the table yields `NaN` and a warning; this never fails.
pub fn convert_to_gram(amount: f64, unit: &str, conversions: &ConversionTable) -> f64 {
    if unit == GRAM {
        return amount;
    }

    match conversions.get(unit) {
        Some(grams_per_unit) => grams_per_unit * amount,
        None => {
            tracing::warn!(
                unit,
                known_units = ?conversions.keys().collect::<Vec<_>>(),
                "unknown unit, cannot convert to grams"
            );
            f64::NAN
        }
    }
}

/// Scale nutrients stated for `base_grams` to `target_grams`
pub fn nutrients_for_grams(nutrients: &Nutrients, base_grams: f64, target_grams: f64) -> Nutrients {
    Nutrients {
        kcal: (nutrients.kcal * target_grams) / base_grams,
        fat: (nutrients.fat * target_grams) / base_grams,
        kh: (nutrients.kh * target_grams) / base_grams,
        prot: (nutrients.prot * target_grams) / base_grams,
    }
}
