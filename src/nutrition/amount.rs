//! Quantity literal parsing

/// Fraction literals recognized verbatim
const FRACTIONS: &[(&str, f64)] = &[("1/8", 0.125), ("1/4", 0.25), ("1/2", 0.5)];

/// Parse a quantity token into an amount
///
/// Accepts the fraction literals `1/8`, `1/4` and `1/2`, and decimal numbers
/// using either `.` or `,` as separator ("2,5" is 2.5). Only the first comma is
/// treated as a separator, so "1,000,5" does not parse.
///
/// Never fails: unparseable input yields `NaN`, which callers carry through
/// arithmetic as "unknown".
pub fn parse_amount(raw: &str) -> f64 {
    let trimmed = raw.trim();

    if let Some((_, value)) = FRACTIONS.iter().find(|(literal, _)| *literal == trimmed) {
        return *value;
    }

    trimmed
        .replacen(',', ".", 1)
        .parse::<f64>()
        .unwrap_or(f64::NAN)
}
