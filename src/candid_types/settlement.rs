use super::*;

#[derive(CandidType, Deserialize, Serialize, Clone, Copy, Debug, PartialEq, Eq)]
pub enum CandidFeeMode {
    #[serde(rename = "INCLUDED")]
    Included,
    #[serde(rename = "ADDED")]
    Added,
    // legacy spelling of ADDED, still sent by older clients
    #[serde(rename = "ON_TOP")]
    OnTop,
}

#[derive(CandidType, Deserialize, Serialize, Clone, Debug, PartialEq, Eq)]
pub struct CandidFeeSchedule {
    pub rate_basis_points: u32,
    pub fixed_minor_units: Nat,
}

#[derive(CandidType, Deserialize, Serialize, Clone, Debug, PartialEq, Eq)]
pub struct FeeSettlementArgs {
    pub amount_minor_units: Int,
    pub discount_minor_units: Int,
    pub fee_mode: CandidFeeMode,
    // None when the caller could not fetch the live schedule
    pub platform_fee: Option<CandidFeeSchedule>,
    pub processor_fee: Option<CandidFeeSchedule>,
}

#[derive(CandidType, Deserialize, Serialize, Clone, Debug, PartialEq, Eq)]
pub struct CandidFeeBreakdown {
    pub subtotal_minor_units: Nat,
    pub mode: CandidFeeMode,
    pub platform_fee_minor_units: Nat,
    pub processor_fee_estimate_minor_units: Nat,
    pub combined_fee_minor_units: Nat,
    pub total_minor_units: Nat,
    pub organizer_receives_minor_units: Nat,
}

impl From<CandidFeeMode> for FeeModeToken {
    fn from(value: CandidFeeMode) -> Self {
        match value {
            CandidFeeMode::Included => FeeModeToken::Included,
            CandidFeeMode::Added => FeeModeToken::Added,
            CandidFeeMode::OnTop => FeeModeToken::OnTop,
        }
    }
}

impl From<FeeMode> for CandidFeeMode {
    fn from(value: FeeMode) -> Self {
        match value {
            FeeMode::Included => CandidFeeMode::Included,
            FeeMode::Added => CandidFeeMode::Added,
        }
    }
}

impl From<CandidFeeSchedule> for FeeSchedule {
    fn from(value: CandidFeeSchedule) -> Self {
        FeeSchedule::new(
            value.rate_basis_points,
            nat_to_u64_saturating(&value.fixed_minor_units),
        )
    }
}

impl From<FeeSchedule> for CandidFeeSchedule {
    fn from(value: FeeSchedule) -> Self {
        CandidFeeSchedule {
            rate_basis_points: value.rate_basis_points,
            fixed_minor_units: value.fixed_minor_units.into(),
        }
    }
}

impl From<FeeBreakdown> for CandidFeeBreakdown {
    fn from(value: FeeBreakdown) -> Self {
        CandidFeeBreakdown {
            subtotal_minor_units: value.subtotal_minor_units.into(),
            mode: value.mode.into(),
            platform_fee_minor_units: value.platform_fee_minor_units.into(),
            processor_fee_estimate_minor_units: value.processor_fee_estimate_minor_units.into(),
            combined_fee_minor_units: value.combined_fee_minor_units.into(),
            total_minor_units: value.total_minor_units.into(),
            organizer_receives_minor_units: value.organizer_receives_minor_units().into(),
        }
    }
}

impl FeeSettlementArgs {
    pub fn amount_minor_units(&self) -> i64 {
        int_to_i64_saturating(&self.amount_minor_units)
    }

    pub fn discount_minor_units(&self) -> i64 {
        int_to_i64_saturating(&self.discount_minor_units)
    }
}
