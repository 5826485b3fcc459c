//! Nutrient table document
//!
//! A Markdown table with one base food per row, nutrients per 100 g and an
//! optional list of unit weights:
//!
//! ```text
//! | Name  | kcal | Fett | KH | Prot | Einheiten             |
//! |-------|------|------|----|------|-----------------------|
//! | Apple | 52   | 0.2  | 14 | 0.3  | Stück: 180, Tasse: 125 |
//! ```

use crate::models::{ConversionTable, Nutrients, Recipe};
use crate::nutrition::{parse_amount, UnitAliases};

use super::patterns;

/// Extract every table row as a named base recipe, in document order
///
/// Malformed numbers inside a matched row become `NaN` nutrients rather than
/// dropping the row.
pub fn extract_table(text: &str, aliases: &UnitAliases) -> Vec<(String, Recipe)> {
    patterns::table_rows(text)
        .map(|row| {
            let nutrients = Nutrients::new(
                parse_amount(row.kcal),
                parse_amount(row.fat),
                parse_amount(row.kh),
                parse_amount(row.prot),
            );

            let conversions: ConversionTable = patterns::unit_grams(row.units.trim())
                .map(|pair| (aliases.normalize(pair.unit), parse_amount(pair.grams)))
                .collect();

            (
                row.name.trim().to_string(),
                Recipe::with_nutrients(nutrients, conversions),
            )
        })
        .collect()
}
