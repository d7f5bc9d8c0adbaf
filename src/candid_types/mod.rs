use candid::{CandidType, Deserialize, Int, Nat};
use serde::Serialize;

use crate::{
    libraries::safe_cast::{int_to_i64_saturating, nat_to_u64_saturating},
    settlement::{FeeBreakdown, FeeMode, FeeModeToken, FeeSchedule},
};

pub mod settlement;
