use serde::{Deserialize, Serialize};

use crate::schedule::FeeSchedules;

use super::mode::{FeeMode, FeeModeToken};

/// A count of minor currency units (e.g. cents).
pub type MinorUnits = u64;

/// A percentage plus fixed fee, e.g. 140 bps + 25 for 1.4% + 0.25.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct FeeSchedule {
    pub rate_basis_points: u32,
    pub fixed_minor_units: MinorUnits,
}

impl FeeSchedule {
    pub const fn new(rate_basis_points: u32, fixed_minor_units: MinorUnits) -> Self {
        Self {
            rate_basis_points,
            fixed_minor_units,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FeeSettlementInput {
    // may be negative, the normalizer clamps it
    pub amount_minor_units: i64,
    // may be negative or exceed the amount
    pub discount_minor_units: i64,
    pub fee_mode: FeeModeToken,
    pub platform_fee: FeeSchedule,
    pub processor_fee: FeeSchedule,
}

impl FeeSettlementInput {
    pub fn new(
        amount_minor_units: i64,
        discount_minor_units: i64,
        fee_mode: FeeModeToken,
        schedules: &FeeSchedules,
    ) -> Self {
        Self {
            amount_minor_units,
            discount_minor_units,
            fee_mode,
            platform_fee: schedules.platform,
            processor_fee: schedules.processor,
        }
    }

    /// Builds an input from raw form values which may be fractional, negative or NaN.
    pub fn from_raw(
        amount: f64,
        discount: f64,
        fee_mode: FeeModeToken,
        schedules: &FeeSchedules,
    ) -> Self {
        Self::new(
            super::normalize::normalize_raw_minor_units(amount),
            super::normalize::normalize_raw_minor_units(discount),
            fee_mode,
            schedules,
        )
    }
}

/// How a ticket charge decomposes. Every field is in minor units.
///
/// `combined_fee_minor_units == platform_fee_minor_units + processor_fee_estimate_minor_units`
/// and `combined_fee_minor_units <= total_minor_units` hold for every value
/// produced by [`compute_fee_settlement`](super::compute_fee_settlement).
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct FeeBreakdown {
    pub subtotal_minor_units: MinorUnits,
    pub mode: FeeMode,
    pub platform_fee_minor_units: MinorUnits,
    pub processor_fee_estimate_minor_units: MinorUnits,
    pub combined_fee_minor_units: MinorUnits,
    pub total_minor_units: MinorUnits,
}

impl FeeBreakdown {
    pub fn zero(mode: FeeMode) -> Self {
        Self {
            subtotal_minor_units: 0,
            mode,
            platform_fee_minor_units: 0,
            processor_fee_estimate_minor_units: 0,
            combined_fee_minor_units: 0,
            total_minor_units: 0,
        }
    }

    /// What the organizer is paid out: total charged minus combined fee, never negative.
    pub fn organizer_receives_minor_units(&self) -> MinorUnits {
        self.total_minor_units
            .saturating_sub(self.combined_fee_minor_units)
    }
}
