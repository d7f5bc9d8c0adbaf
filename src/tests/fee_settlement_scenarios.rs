use crate::{
    schedule::FeeSchedules,
    settlement::{
        compute_fee_settlement, FeeBreakdown, FeeMode, FeeModeToken, FeeSchedule,
        FeeSettlementInput,
    },
};

fn input(amount: i64, discount: i64, fee_mode: FeeModeToken) -> FeeSettlementInput {
    FeeSettlementInput::new(amount, discount, fee_mode, &FeeSchedules::default())
}

#[test]
fn test_added_recovers_the_exact_subtotal() {
    let breakdown = compute_fee_settlement(&input(1000, 0, FeeModeToken::Added));

    assert_eq!(
        breakdown,
        FeeBreakdown {
            subtotal_minor_units: 1000,
            mode: FeeMode::Added,
            platform_fee_minor_units: 110,
            processor_fee_estimate_minor_units: 41,
            combined_fee_minor_units: 151,
            total_minor_units: 1151,
        }
    );
    assert_eq!(breakdown.organizer_receives_minor_units(), 1000);
}

#[test]
fn test_included_carves_fees_out_of_the_price() {
    let breakdown = compute_fee_settlement(&input(1000, 0, FeeModeToken::Included));

    assert_eq!(
        breakdown,
        FeeBreakdown {
            subtotal_minor_units: 1000,
            mode: FeeMode::Included,
            platform_fee_minor_units: 110,
            processor_fee_estimate_minor_units: 39,
            combined_fee_minor_units: 149,
            total_minor_units: 1000,
        }
    );
    assert_eq!(breakdown.organizer_receives_minor_units(), 851);
}

#[test]
fn test_free_ticket_is_all_zero() {
    for mode in [FeeModeToken::Included, FeeModeToken::Added, FeeModeToken::OnTop] {
        let breakdown = compute_fee_settlement(&input(0, 0, mode));
        assert_eq!(breakdown, FeeBreakdown::zero(FeeMode::from(mode)));
    }
}

#[test]
fn test_discount_exceeding_price_is_all_zero() {
    for mode in [FeeModeToken::Included, FeeModeToken::Added, FeeModeToken::OnTop] {
        let breakdown = compute_fee_settlement(&input(500, 800, mode));
        assert_eq!(breakdown, FeeBreakdown::zero(FeeMode::from(mode)));
    }
}

#[test]
fn test_on_top_is_added() {
    for amount in [1, 99, 1000, 2_499, 1_000_000] {
        assert_eq!(
            compute_fee_settlement(&input(amount, 50, FeeModeToken::OnTop)),
            compute_fee_settlement(&input(amount, 50, FeeModeToken::Added))
        );
    }
}

#[test]
fn test_discount_applies_before_fees() {
    let breakdown = compute_fee_settlement(&input(1250, 250, FeeModeToken::Added));
    assert_eq!(breakdown.subtotal_minor_units, 1000);
    assert_eq!(breakdown.total_minor_units, 1151);
}

#[test]
fn test_one_cent_ticket_is_priced() {
    // platform round(0.08) + 30, total round(56 / 0.986)
    let breakdown = compute_fee_settlement(&input(1, 0, FeeModeToken::Added));
    assert_eq!(breakdown.platform_fee_minor_units, 30);
    assert_eq!(breakdown.total_minor_units, 57);
    assert_eq!(breakdown.processor_fee_estimate_minor_units, 26);
    assert_eq!(breakdown.organizer_receives_minor_units(), 1);
}

#[test]
fn test_one_cent_included_ticket_pays_out_nothing() {
    let breakdown = compute_fee_settlement(&input(1, 0, FeeModeToken::Included));
    assert_eq!(breakdown.total_minor_units, 1);
    assert_eq!(breakdown.combined_fee_minor_units, 1);
    assert_eq!(breakdown.organizer_receives_minor_units(), 0);
}

#[test]
fn test_full_processor_rate_uses_additive_total() {
    let schedules = FeeSchedules {
        platform: FeeSchedule::new(800, 30),
        processor: FeeSchedule::new(10_000, 25),
    };
    let breakdown = compute_fee_settlement(&FeeSettlementInput::new(
        1000,
        0,
        FeeModeToken::Added,
        &schedules,
    ));

    assert_eq!(breakdown.total_minor_units, 1135);
    assert_eq!(breakdown.platform_fee_minor_units, 110);
    assert_eq!(breakdown.processor_fee_estimate_minor_units, 1025);
    assert_eq!(breakdown.combined_fee_minor_units, 1135);
    assert_eq!(breakdown.organizer_receives_minor_units(), 0);
}

#[test]
fn test_raw_form_values() {
    let schedules = FeeSchedules::default();

    let typed = FeeSettlementInput::from_raw(999.5, f64::NAN, FeeModeToken::Added, &schedules);
    assert_eq!(typed.amount_minor_units, 1000);
    assert_eq!(typed.discount_minor_units, 0);
    assert_eq!(compute_fee_settlement(&typed).total_minor_units, 1151);

    let negative = FeeSettlementInput::from_raw(-12.0, 0.0, FeeModeToken::Included, &schedules);
    assert_eq!(
        compute_fee_settlement(&negative),
        FeeBreakdown::zero(FeeMode::Included)
    );
}

#[test]
fn test_extreme_amount_saturates_without_panicking() {
    let breakdown = compute_fee_settlement(&input(i64::MAX, i64::MIN, FeeModeToken::Added));

    assert_eq!(breakdown.subtotal_minor_units, i64::MAX as u64);
    assert_eq!(
        breakdown.combined_fee_minor_units,
        breakdown.platform_fee_minor_units + breakdown.processor_fee_estimate_minor_units
    );
    assert!(breakdown.total_minor_units >= breakdown.combined_fee_minor_units);
}
