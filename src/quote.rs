use crate::{
    candid_types::settlement::{CandidFeeBreakdown, FeeSettlementArgs},
    schedule::FeeSchedules,
    settlement::{compute_fee_settlement, FeeSchedule, FeeSettlementInput},
};

/// Quotes a ticket charge for candid callers, using the default schedules for any
/// schedule the caller did not send.
pub fn quote_fee_settlement(args: FeeSettlementArgs) -> CandidFeeBreakdown {
    quote_fee_settlement_with_fallback(args, &FeeSchedules::default())
}

/// Quotes a ticket charge, using `fallback` for any schedule the caller did not send.
pub fn quote_fee_settlement_with_fallback(
    args: FeeSettlementArgs,
    fallback: &FeeSchedules,
) -> CandidFeeBreakdown {
    let input = settlement_input(args, fallback);
    compute_fee_settlement(&input).into()
}

fn settlement_input(args: FeeSettlementArgs, fallback: &FeeSchedules) -> FeeSettlementInput {
    let amount_minor_units = args.amount_minor_units();
    let discount_minor_units = args.discount_minor_units();

    FeeSettlementInput {
        amount_minor_units,
        discount_minor_units,
        fee_mode: args.fee_mode.into(),
        platform_fee: args
            .platform_fee
            .map(FeeSchedule::from)
            .unwrap_or(fallback.platform),
        processor_fee: args
            .processor_fee
            .map(FeeSchedule::from)
            .unwrap_or(fallback.processor),
    }
}
