use candid::{Decode, Encode, Int, Nat};
use num_bigint::BigInt;

use crate::{
    candid_types::settlement::{
        CandidFeeBreakdown, CandidFeeMode, CandidFeeSchedule, FeeSettlementArgs,
    },
    quote::{quote_fee_settlement, quote_fee_settlement_with_fallback},
    schedule::FeeSchedules,
    settlement::FeeSchedule,
};

fn args(amount: i64, discount: i64, fee_mode: CandidFeeMode) -> FeeSettlementArgs {
    FeeSettlementArgs {
        amount_minor_units: Int::from(amount),
        discount_minor_units: Int::from(discount),
        fee_mode,
        platform_fee: None,
        processor_fee: None,
    }
}

#[test]
fn test_quote_with_default_schedules() {
    let quote = quote_fee_settlement(args(1000, 0, CandidFeeMode::Added));

    assert_eq!(
        quote,
        CandidFeeBreakdown {
            subtotal_minor_units: Nat::from(1000_u32),
            mode: CandidFeeMode::Added,
            platform_fee_minor_units: Nat::from(110_u32),
            processor_fee_estimate_minor_units: Nat::from(41_u32),
            combined_fee_minor_units: Nat::from(151_u32),
            total_minor_units: Nat::from(1151_u32),
            organizer_receives_minor_units: Nat::from(1000_u32),
        }
    );
}

#[test]
fn test_on_top_is_reported_as_added() {
    let quote = quote_fee_settlement(args(1000, 0, CandidFeeMode::OnTop));
    assert_eq!(quote.mode, CandidFeeMode::Added);
    assert_eq!(quote, quote_fee_settlement(args(1000, 0, CandidFeeMode::Added)));
}

#[test]
fn test_caller_schedules_override_defaults() {
    let mut args = args(1000, 0, CandidFeeMode::Included);
    args.platform_fee = Some(CandidFeeSchedule {
        rate_basis_points: 500,
        fixed_minor_units: Nat::from(0_u32),
    });

    let quote = quote_fee_settlement(args);
    assert_eq!(quote.platform_fee_minor_units, Nat::from(50_u32));
    // processor fell back to 1.4% + 25
    assert_eq!(quote.processor_fee_estimate_minor_units, Nat::from(39_u32));
    assert_eq!(quote.organizer_receives_minor_units, Nat::from(911_u32));
}

#[test]
fn test_fallback_schedules_are_used_for_missing_ones() {
    let fallback = FeeSchedules {
        platform: FeeSchedule::new(0, 0),
        processor: FeeSchedule::new(0, 0),
    };

    let quote = quote_fee_settlement_with_fallback(args(1000, 0, CandidFeeMode::Added), &fallback);
    assert_eq!(quote.total_minor_units, Nat::from(1000_u32));
    assert_eq!(quote.combined_fee_minor_units, Nat::from(0_u32));
}

#[test]
fn test_out_of_range_amounts_are_clamped() {
    let huge = BigInt::from(i64::MAX) * BigInt::from(1_000);

    let negative = FeeSettlementArgs {
        amount_minor_units: Int(-huge.clone()),
        ..args(0, 0, CandidFeeMode::Added)
    };
    assert_eq!(quote_fee_settlement(negative).total_minor_units, Nat::from(0_u32));

    let discounted_away = FeeSettlementArgs {
        discount_minor_units: Int(huge),
        ..args(1000, 0, CandidFeeMode::Added)
    };
    assert_eq!(
        quote_fee_settlement(discounted_away).total_minor_units,
        Nat::from(0_u32)
    );
}

#[test]
fn test_candid_encoding_keeps_wire_names() {
    let encoded = Encode!(&args(1000, 0, CandidFeeMode::OnTop)).unwrap();
    let decoded = Decode!(&encoded, FeeSettlementArgs).unwrap();
    assert_eq!(decoded.fee_mode, CandidFeeMode::OnTop);

    let quote = quote_fee_settlement(decoded);
    assert_eq!(quote.total_minor_units, Nat::from(1151_u32));
}
