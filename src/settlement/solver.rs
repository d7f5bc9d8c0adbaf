use ethnum::U256;
use ic_canister_log::log;

use crate::{
    libraries::{
        fee_math::{gross_up, schedule_fee},
        full_math::FullMathError,
    },
    logs::DEBUG,
};

use super::{mode::FeeMode, types::FeeSchedule, types::MinorUnits};

/// Fee components before composition. Values are unbounded and may exceed `u64`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SolvedFees {
    pub platform_fee: U256,
    pub processor_fee: U256,
    pub total: U256,
}

impl SolvedFees {
    pub const ZERO: SolvedFees = SolvedFees {
        platform_fee: U256::ZERO,
        processor_fee: U256::ZERO,
        total: U256::ZERO,
    };
}

// Amounts here are bounded by u64 inputs, an overflow of U256 can only come from
// absurd basis points and is treated as "as large as possible".
fn saturate(result: Result<U256, FullMathError>) -> U256 {
    result.unwrap_or(U256::MAX)
}

/// Computes the platform fee, the processor fee estimate and the amount charged to the buyer.
///
/// * `INCLUDED`: the buyer pays the subtotal, both fees are estimated on it.
/// * `ADDED`: the buyer pays `total = round((subtotal + platform + processor_fixed) / (1 - r))`
///   where `r` is the processor rate, so the processor's cut of the total is covered as well.
///   The processor fee is then recomputed from the rounded total which makes
///   `total - platform - processor == subtotal`.
///
/// A zero subtotal returns zeros for every component in both modes, fixed fees included.
pub fn solve(
    subtotal: MinorUnits,
    mode: FeeMode,
    platform: &FeeSchedule,
    processor: &FeeSchedule,
) -> SolvedFees {
    if subtotal == 0 {
        return SolvedFees::ZERO;
    }

    let subtotal = U256::from(subtotal);
    let platform_fee = saturate(schedule_fee(
        subtotal,
        platform.rate_basis_points,
        platform.fixed_minor_units,
    ));

    let total = match mode {
        FeeMode::Included => subtotal,
        FeeMode::Added => solve_added_total(subtotal, platform_fee, processor),
    };

    let processor_fee = saturate(schedule_fee(
        total,
        processor.rate_basis_points,
        processor.fixed_minor_units,
    ));

    SolvedFees {
        platform_fee,
        processor_fee,
        total,
    }
}

/// Solves `total = subtotal + platform_fee + processor_fixed + total * processor_rate`.
fn solve_added_total(subtotal: U256, platform_fee: U256, processor: &FeeSchedule) -> U256 {
    let net = subtotal
        .checked_add(platform_fee)
        .and_then(|sum| sum.checked_add(U256::from(processor.fixed_minor_units)))
        .unwrap_or(U256::MAX);

    match gross_up(net, processor.rate_basis_points) {
        Some(total) => saturate(total),
        None => {
            log!(
                DEBUG,
                "[solve_added_total]: processor rate of {} bps leaves nothing to gross up, charging the additive total {net}",
                processor.rate_basis_points
            );
            net
        }
    }
}
