//! Calorie badges for Markdown list items
//!
//! For every list item that references an ingredient, the calories it
//! contributes, formatted the way an editor would show them next to the line.

use serde::Serialize;

use crate::library::RecipeLibrary;
use crate::models::ParsedIngredient;

/// One badge for a list line
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CalorieBadge {
    /// 1-based line number in the submitted text
    pub line: usize,
    /// The list line as written
    pub text: String,
    pub ingredient: ParsedIngredient,
    pub kcal: f64,
    /// e.g. "94 kCal"
    pub label: String,
}

/// Response for calorie_badges
#[derive(Debug, Serialize)]
pub struct CalorieBadgesResponse {
    pub badges: Vec<CalorieBadge>,
    pub total_kcal: f64,
}

/// Badges for every list line with a resolvable, non-zero calorie count
pub fn calorie_badges(library: &RecipeLibrary, text: &str) -> CalorieBadgesResponse {
    let badges: Vec<CalorieBadge> = text
        .lines()
        .enumerate()
        .filter(|(_, line)| is_list_item(line))
        .filter_map(|(index, line)| {
            let ingredient = library.parse_ingredient(line)?;
            let kcal = library
                .calculate_nutrients(&ingredient.name, ingredient.amount, &ingredient.unit)
                .kcal;
            // NaN and zero both mean there is nothing worth showing
            if !kcal.is_finite() || kcal == 0.0 {
                return None;
            }
            Some(CalorieBadge {
                line: index + 1,
                text: line.to_string(),
                label: format_kcal(kcal),
                ingredient,
                kcal,
            })
        })
        .collect();

    CalorieBadgesResponse {
        total_kcal: badges.iter().map(|b| b.kcal).sum(),
        badges,
    }
}

/// Rounded calorie label
pub fn format_kcal(kcal: f64) -> String {
    format!("{} kCal", kcal.round() as i64)
}

/// `- item`, `* item`, `+ item` or `1. item`, at any indentation
fn is_list_item(line: &str) -> bool {
    let trimmed = line.trim_start();
    if let Some(rest) = trimmed
        .strip_prefix('-')
        .or_else(|| trimmed.strip_prefix('*'))
        .or_else(|| trimmed.strip_prefix('+'))
    {
        return rest.starts_with(char::is_whitespace);
    }

    let digits = trimmed.chars().take_while(char::is_ascii_digit).count();
    digits > 0
        && trimmed[digits..]
            .strip_prefix('.')
            .map_or(false, |rest| rest.starts_with(char::is_whitespace))
}
