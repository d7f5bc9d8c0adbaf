use ethnum::U256;

use super::{
    constants::BPS_DENOMINATOR,
    full_math::{mul_div_round_half_up, FullMathError},
};

/// Applies a percentage plus fixed fee schedule to an amount.
///
/// `fee = round(amount * rate_bps / 10_000) + fixed`, rounding ties up.
///
/// # Arguments
/// * `amount` - The base amount in minor units.
/// * `rate_bps` - The percentage part of the schedule in basis points (100 bps = 1%).
/// * `fixed` - The fixed part of the schedule in minor units.
///
/// # Errors
/// Returns `FullMathError::Overflow` if the fee does not fit in a `U256`.
pub fn schedule_fee(amount: U256, rate_bps: u32, fixed: u64) -> Result<U256, FullMathError> {
    let percentage = mul_div_round_half_up(
        amount,
        U256::from(rate_bps),
        U256::from(BPS_DENOMINATOR),
    )?;

    percentage
        .checked_add(U256::from(fixed))
        .ok_or(FullMathError::Overflow)
}

/// Grosses a net amount up so that a percentage taken from the result leaves the net amount.
///
/// Solves `gross = net + gross * rate` for `gross`, which is
/// `gross = round(net * 10_000 / (10_000 - rate_bps))`.
///
/// # Returns
/// `None` when `rate_bps >= 10_000`: there is no finite gross amount a rate of 100% or more
/// leaves anything from, and the caller has to pick a fallback.
///
/// # Errors
/// Returns `FullMathError::Overflow` if the gross amount does not fit in a `U256`.
pub fn gross_up(net: U256, rate_bps: u32) -> Option<Result<U256, FullMathError>> {
    if rate_bps >= BPS_DENOMINATOR {
        return None;
    }

    Some(mul_div_round_half_up(
        net,
        U256::from(BPS_DENOMINATOR),
        U256::from(BPS_DENOMINATOR - rate_bps),
    ))
}
