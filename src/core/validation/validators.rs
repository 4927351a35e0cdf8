//! Reusable field validators and their messages

use rust_decimal::Decimal;

pub const REQUIRED: &str = "This field is required.";
pub const BLANK: &str = "This field may not be blank.";

/// True for empty or whitespace-only text
pub fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

/// Message for a code outside its enumerated set
pub fn invalid_choice(value: &str, allowed: &[&str]) -> String {
    format!(
        "\"{}\" is not a valid choice. Valid choices: [{}]",
        value,
        allowed.join(", ")
    )
}

/// Check that a value fits a NUMERIC(digits, places) column
///
/// Trailing zeros do not count against `places`.
pub fn fits_numeric(value: &Decimal, digits: u32, places: u32) -> Result<(), String> {
    let normalized = value.normalize();
    if normalized.scale() > places {
        return Err(format!(
            "Ensure that there are no more than {} decimal places.",
            places
        ));
    }

    let whole_digits = digits - places;
    let limit = Decimal::from(10_i64.pow(whole_digits));
    if normalized.abs().trunc() >= limit {
        return Err(format!(
            "Ensure that there are no more than {} digits before the decimal point.",
            whole_digits
        ));
    }
    Ok(())
}

/// Same value stored with exactly `places` decimals
pub fn to_scale(value: Decimal, places: u32) -> Decimal {
    let mut value = value.round_dp(places);
    value.rescale(places);
    value
}
