//! Line and row matchers for recipe documents
//!
//! Each pattern family is matched independently over the whole text, so every
//! matcher can be exercised on its own. Name and unit fields accept ASCII word
//! characters, spaces and `ö ä ü ß` (names additionally allow `,`); matching is
//! case-insensitive.

use lazy_static::lazy_static;
use regex::{Captures, Regex};

/// `- Ergibt <amount> <unit>`
pub const YIELD_PATTERN: &str =
    r"(?i)- Ergibt (?P<amount>[0-9][0-9,./]*) (?P<unit>[[:word:] öäüß]+)";

/// `- <unit>: <amount> g`
pub const CONVERSION_PATTERN: &str =
    r"(?i)-\s*(?P<unit>[[:word:] öäüß]+): (?P<amount>[0-9][0-9,.]*)\s*g";

/// `- <ingredient> - <amount><unit>`
pub const INGREDIENT_PATTERN: &str = r"(?i)-\s+(?P<ingredient>[[:word:] öäüß,]+) - (?P<amount>[0-9][0-9,./]*)\s*(?P<unit>[[:word:] öäüß]+)";

/// `<ingredient> - <amount><unit>` anywhere in a line of text
pub const INLINE_INGREDIENT_PATTERN: &str =
    r"(?i)(?P<ingredient>[[:word:] öäüß,]+) - (?P<amount>[0-9][0-9,./]*)\s*(?P<unit>[[:word:] öäüß]+)";

/// `| <name> | <kcal> | <fat> | <kh> | <prot> | <units> |`
pub const TABLE_ROW_PATTERN: &str = r"(?i)\|\s*(?P<name>[[:word:] öäüß,]+)\s*\|\s*(?P<kcal>[0-9][0-9,.]*)\s*\|\s*(?P<fat>[0-9][0-9,.]*)\s*\|\s*(?P<kh>[0-9][0-9,.]*)\s*\|\s*(?P<prot>[0-9][0-9,.]*)\s*\|\s*(?P<units>.*?)\s*\|";

/// `<unit>: <grams>` inside a table row's unit list
pub const UNIT_GRAMS_PATTERN: &str = r"(?i)(?P<unit>[[:word:] öäüß]+?):\s?(?P<gram>[0-9][0-9,.]*)";

lazy_static! {
    static ref YIELD_REGEX: Regex = Regex::new(YIELD_PATTERN).expect("yield pattern should be valid");
    static ref CONVERSION_REGEX: Regex =
        Regex::new(CONVERSION_PATTERN).expect("conversion pattern should be valid");
    static ref INGREDIENT_REGEX: Regex =
        Regex::new(INGREDIENT_PATTERN).expect("ingredient pattern should be valid");
    static ref INLINE_INGREDIENT_REGEX: Regex =
        Regex::new(INLINE_INGREDIENT_PATTERN).expect("inline ingredient pattern should be valid");
    static ref TABLE_ROW_REGEX: Regex =
        Regex::new(TABLE_ROW_PATTERN).expect("table row pattern should be valid");
    static ref UNIT_GRAMS_REGEX: Regex =
        Regex::new(UNIT_GRAMS_PATTERN).expect("unit list pattern should be valid");
}

/// A declared recipe yield, raw text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct YieldMatch<'t> {
    pub amount: &'t str,
    pub unit: &'t str,
}

/// A unit with its gram equivalent, raw text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConversionMatch<'t> {
    pub unit: &'t str,
    pub grams: &'t str,
}

/// An ingredient reference, raw text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IngredientMatch<'t> {
    pub name: &'t str,
    pub amount: &'t str,
    pub unit: &'t str,
}

/// One nutrient table row, raw text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TableRowMatch<'t> {
    pub name: &'t str,
    pub kcal: &'t str,
    pub fat: &'t str,
    pub kh: &'t str,
    pub prot: &'t str,
    pub units: &'t str,
}

fn group<'t>(caps: &Captures<'t>, name: &str) -> &'t str {
    caps.name(name).map_or("", |m| m.as_str())
}

fn ingredient_from<'t>(caps: &Captures<'t>) -> IngredientMatch<'t> {
    IngredientMatch {
        name: group(caps, "ingredient"),
        amount: group(caps, "amount"),
        unit: group(caps, "unit"),
    }
}

/// Every yield declaration, in document order
pub fn yields(text: &str) -> impl Iterator<Item = YieldMatch<'_>> {
    YIELD_REGEX.captures_iter(text).map(|caps| YieldMatch {
        amount: group(&caps, "amount"),
        unit: group(&caps, "unit"),
    })
}

/// Every `- <unit>: <amount> g` line, in document order
pub fn conversions(text: &str) -> impl Iterator<Item = ConversionMatch<'_>> {
    CONVERSION_REGEX.captures_iter(text).map(|caps| ConversionMatch {
        unit: group(&caps, "unit"),
        grams: group(&caps, "amount"),
    })
}

/// Every ingredient list line, in document order
pub fn ingredients(text: &str) -> impl Iterator<Item = IngredientMatch<'_>> {
    INGREDIENT_REGEX
        .captures_iter(text)
        .map(|caps| ingredient_from(&caps))
}

/// The first inline ingredient reference in `text`
pub fn inline_ingredient(text: &str) -> Option<IngredientMatch<'_>> {
    INLINE_INGREDIENT_REGEX
        .captures(text)
        .map(|caps| ingredient_from(&caps))
}

/// Every nutrient table row with four numeric columns
pub fn table_rows(text: &str) -> impl Iterator<Item = TableRowMatch<'_>> {
    TABLE_ROW_REGEX.captures_iter(text).map(|caps| TableRowMatch {
        name: group(&caps, "name"),
        kcal: group(&caps, "kcal"),
        fat: group(&caps, "fat"),
        kh: group(&caps, "kh"),
        prot: group(&caps, "prot"),
        units: group(&caps, "units"),
    })
}

/// Every `<unit>: <grams>` pair of a table row's unit list
pub fn unit_grams(text: &str) -> impl Iterator<Item = ConversionMatch<'_>> {
    UNIT_GRAMS_REGEX.captures_iter(text).map(|caps| ConversionMatch {
        unit: group(&caps, "unit"),
        grams: group(&caps, "gram"),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_yield_line() {
        let found: Vec<_> = yields("# Suppe\n- Ergibt 4 Portionen\n").collect();
        assert_eq!(found, vec![YieldMatch { amount: "4", unit: "Portionen" }]);
    }

    #[test]
    fn test_yield_is_case_insensitive() {
        let found: Vec<_> = yields("- ergibt 1000 g").collect();
        assert_eq!(found, vec![YieldMatch { amount: "1000", unit: "g" }]);
    }

    #[test]
    fn test_conversion_lines() {
        let text = "- Scheibe: 30 g\n-Tasse: 2,5g\n- Ergibt 2 Tassen";
        let found: Vec<_> = conversions(text).collect();
        assert_eq!(
            found,
            vec![
                ConversionMatch { unit: "Scheibe", grams: "30" },
                ConversionMatch { unit: "Tasse", grams: "2,5" },
            ]
        );
    }

    #[test]
    fn test_ingredient_lines() {
        let text = "## Zutaten\n- Äpfel, geschält - 200g\n- Knoblauch - 2 Zehen\n- Mehl - 1/2 Tasse";
        let found: Vec<_> = ingredients(text).collect();
        assert_eq!(found.len(), 3);
        assert_eq!(found[0].amount, "200");
        assert_eq!(found[0].unit, "g");
        assert_eq!(found[1], IngredientMatch { name: "Knoblauch", amount: "2", unit: "Zehen" });
        assert_eq!(found[2].amount, "1/2");
        assert_eq!(found[2].unit, "Tasse");
    }

    #[test]
    fn test_ingredient_name_with_umlauts() {
        let found: Vec<_> = ingredients("- Kürbis - 500 g").collect();
        assert_eq!(found, vec![IngredientMatch { name: "Kürbis", amount: "500", unit: "g" }]);
    }

    #[test]
    fn test_yield_and_conversion_lines_are_not_ingredients() {
        assert_eq!(ingredients("- Ergibt 1000 g\n- Scheibe: 30 g").count(), 0);
    }

    #[test]
    fn test_inline_ingredient_without_list_marker() {
        let found = inline_ingredient("Apple - 2 Stück").unwrap();
        assert_eq!(found, IngredientMatch { name: "Apple", amount: "2", unit: "Stück" });
        assert!(inline_ingredient("no reference here").is_none());
    }

    #[test]
    fn test_table_rows_skip_header_and_separator() {
        let text = "| Name | kcal | Fett | KH | Prot | Einheiten |\n\
                    |------|------|------|----|------|-----------|\n\
                    | Apple | 52 | 0.2 | 14 | 0.3 | Stück: 180 |\n\
                    | Milch | 64 | 3,5 | 4,8 | 3,3 |  |\n";
        let rows: Vec<_> = table_rows(text).collect();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].name.trim(), "Apple");
        assert_eq!(rows[0].fat, "0.2");
        assert_eq!(rows[0].units, "Stück: 180");
        assert_eq!(rows[1].kh, "4,8");
        assert_eq!(rows[1].units, "");
    }

    #[test]
    fn test_unit_grams_list() {
        let found: Vec<_> = unit_grams("Stück: 180, Tasse:240, kleine Dose: 400").collect();
        assert_eq!(found.len(), 3);
        // the gram field swallows the list separator; "180," still parses
        assert_eq!(found[0], ConversionMatch { unit: "Stück", grams: "180," });
        assert_eq!(found[1], ConversionMatch { unit: " Tasse", grams: "240," });
        assert_eq!(found[2].grams, "400");
        assert_eq!(found[2].unit.trim(), "kleine Dose");
    }
}
