use crate::libraries::safe_cast::u256_to_u64_saturating;

use super::{
    mode::FeeMode,
    solver::SolvedFees,
    types::{FeeBreakdown, MinorUnits},
};

/// Assembles the breakdown from solved components.
///
/// Fees are capped against the total so the organizer payout can never go negative:
/// the platform fee at `total`, the processor fee at `total - platform_fee`. The cap only
/// bites when fixed fees exceed a tiny INCLUDED price or the processor rate is 100% or more.
/// The combined fee is always recomputed from the capped parts.
pub fn compose(subtotal: MinorUnits, mode: FeeMode, solved: SolvedFees) -> FeeBreakdown {
    if subtotal == 0 {
        return FeeBreakdown::zero(mode);
    }

    let total = u256_to_u64_saturating(solved.total);
    let platform_fee = u256_to_u64_saturating(solved.platform_fee).min(total);
    let processor_fee = u256_to_u64_saturating(solved.processor_fee).min(total - platform_fee);

    FeeBreakdown {
        subtotal_minor_units: subtotal,
        mode,
        platform_fee_minor_units: platform_fee,
        processor_fee_estimate_minor_units: processor_fee,
        // cannot overflow, both parts together are at most `total`
        combined_fee_minor_units: platform_fee + processor_fee,
        total_minor_units: total,
    }
}
