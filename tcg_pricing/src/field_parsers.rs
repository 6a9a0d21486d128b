//! Parse-or-default helpers for individual CSV cells.
//!
//! A single bad cell must never abort a run, so every parser here has a
//! documented fallback instead of an error path.

use log::debug;

/// Parses a quantity cell.
///
/// # Arguments
/// * `cell` - The raw cell, or `None` if the column is absent
///
/// # Returns
/// The quantity as an integer. Finite decimals such as `"3.0"` are truncated
/// toward zero. Missing, empty or non-numeric cells yield `0`.
pub fn parse_quantity(cell: Option<&str>) -> i64 {
    let Some(raw) = cell else {
        return 0;
    };
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return 0;
    }

    if let Ok(quantity) = trimmed.parse::<i64>() {
        return quantity;
    }

    match trimmed.parse::<f64>() {
        Ok(value) if value.is_finite() => value.trunc() as i64,
        _ => {
            debug!("Quantity '{raw}' is not a number, using 0");
            0
        }
    }
}

/// Parses a price cell.
///
/// # Arguments
/// * `cell` - The raw cell, or `None` if the column is absent
///
/// # Returns
/// The price, or `None` if the cell is missing, empty, non-numeric or not finite.
pub fn parse_price(cell: Option<&str>) -> Option<f64> {
    let trimmed = cell?.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse::<f64>().ok().filter(|value| value.is_finite())
}

/// Formats a price with exactly two decimals.
///
/// Rounds half to even on the exact binary value.
pub fn format_price(price: f64) -> String {
    format!("{price:.2}")
}

/// Rounds a price to whole cents, consistently with [`format_price`]
pub fn round_to_cents(price: f64) -> f64 {
    format_price(price).parse::<f64>().unwrap_or(price)
}

#[cfg(test)]
#[path = "field_parsers_tests.rs"]
mod tests;
