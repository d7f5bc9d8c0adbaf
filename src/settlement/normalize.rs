use crate::libraries::safe_cast::f64_to_i64_saturating;

use super::types::MinorUnits;

/// Clamps an amount and a discount into a non-negative subtotal.
///
/// `subtotal = max(0, amount - max(0, discount))`, with a negative amount treated as zero.
/// A discount larger than the amount yields exactly zero.
pub fn subtotal_minor_units(amount_minor_units: i64, discount_minor_units: i64) -> MinorUnits {
    let amount = amount_minor_units.max(0) as u64;
    let discount = discount_minor_units.max(0) as u64;

    amount.saturating_sub(discount)
}

/// Rounds a raw form value (possibly fractional, negative, NaN or infinite) to whole minor units.
pub fn normalize_raw_minor_units(value: f64) -> i64 {
    f64_to_i64_saturating(value)
}
