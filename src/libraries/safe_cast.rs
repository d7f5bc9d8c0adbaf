use candid::{Int, Nat};
use ethnum::U256;
use num_bigint::Sign;
use num_traits::ToPrimitive;

/// Narrows a `U256` to `u64`, saturating at `u64::MAX`.
pub fn u256_to_u64_saturating(value: U256) -> u64 {
    if value > U256::from(u64::MAX) {
        u64::MAX
    } else {
        value.as_u64()
    }
}

/// Narrows an arbitrary precision candid `Int` to `i64`, saturating at the bounds.
pub fn int_to_i64_saturating(value: &Int) -> i64 {
    value.0.to_i64().unwrap_or(match value.0.sign() {
        Sign::Minus => i64::MIN,
        _ => i64::MAX,
    })
}

/// Narrows an arbitrary precision candid `Nat` to `u64`, saturating at `u64::MAX`.
pub fn nat_to_u64_saturating(value: &Nat) -> u64 {
    value.0.to_u64().unwrap_or(u64::MAX)
}

/// Rounds a float half away from zero into an `i64`.
/// NaN maps to 0, infinities and out of range values saturate.
pub fn f64_to_i64_saturating(value: f64) -> i64 {
    if value.is_nan() {
        return 0;
    }
    value.round().to_i64().unwrap_or(if value.is_sign_negative() {
        i64::MIN
    } else {
        i64::MAX
    })
}
