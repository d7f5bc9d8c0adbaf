
use std::{fmt, fs, path::PathBuf};

use ic_canister_log::log;
use serde::{Deserialize, Serialize};

use crate::{
    libraries::constants::{
        DEFAULT_PLATFORM_FEE_BPS, DEFAULT_PLATFORM_FEE_FIXED, DEFAULT_PROCESSOR_FEE_BPS,
        DEFAULT_PROCESSOR_FEE_FIXED,
    },
    logs::INFO,
    settlement::FeeSchedule,
};

pub const DEFAULT_PLATFORM_FEE: FeeSchedule =
    FeeSchedule::new(DEFAULT_PLATFORM_FEE_BPS, DEFAULT_PLATFORM_FEE_FIXED);

pub const DEFAULT_PROCESSOR_FEE: FeeSchedule =
    FeeSchedule::new(DEFAULT_PROCESSOR_FEE_BPS, DEFAULT_PROCESSOR_FEE_FIXED);

fn default_platform_fee() -> FeeSchedule {
    DEFAULT_PLATFORM_FEE
}

fn default_processor_fee() -> FeeSchedule {
    DEFAULT_PROCESSOR_FEE
}

/// The pair of schedules a settlement needs. A document that omits one of them gets the default.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct FeeSchedules {
    #[serde(default = "default_platform_fee")]
    pub platform: FeeSchedule,
    #[serde(default = "default_processor_fee")]
    pub processor: FeeSchedule,
}

impl Default for FeeSchedules {
    fn default() -> Self {
        Self {
            platform: DEFAULT_PLATFORM_FEE,
            processor: DEFAULT_PROCESSOR_FEE,
        }
    }
}

impl FeeSchedules {
    pub fn from_json(json: &str) -> Result<Self, FeeScheduleError> {
        serde_json::from_str(json).map_err(|err| FeeScheduleError::Malformed(err.to_string()))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FeeScheduleError {
    /// The source could not be reached or read.
    Unavailable(String),
    /// The source answered with something that is not a fee schedule document.
    Malformed(String),
}

impl fmt::Display for FeeScheduleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FeeScheduleError::Unavailable(reason) => {
                write!(f, "fee schedule unavailable: {reason}")
            }
            FeeScheduleError::Malformed(reason) => write!(f, "malformed fee schedule: {reason}"),
        }
    }
}

/// Somewhere current fee schedules can be fetched from.
pub trait FeeScheduleSource {
    fn fetch(&self) -> Result<FeeSchedules, FeeScheduleError>;
}

/// Always answers with the schedules it was built with.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StaticFeeScheduleSource(pub FeeSchedules);

impl FeeScheduleSource for StaticFeeScheduleSource {
    fn fetch(&self) -> Result<FeeSchedules, FeeScheduleError> {
        Ok(self.0)
    }
}

/// Reads a JSON document of the form
/// `{"platform": {"rate_basis_points": 800, "fixed_minor_units": 30}, "processor": {...}}`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct JsonFileFeeScheduleSource {
    path: PathBuf,
}

impl JsonFileFeeScheduleSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl FeeScheduleSource for JsonFileFeeScheduleSource {
    fn fetch(&self) -> Result<FeeSchedules, FeeScheduleError> {
        let json = fs::read_to_string(&self.path).map_err(|err| {
            FeeScheduleError::Unavailable(format!("{}: {err}", self.path.display()))
        })?;
        FeeSchedules::from_json(&json)
    }
}

/// Fetches the current schedules, falling back to the defaults when the source fails.
pub fn resolve_fee_schedules<S: FeeScheduleSource + ?Sized>(source: &S) -> FeeSchedules {
    match source.fetch() {
        Ok(schedules) => schedules,
        Err(err) => {
            log!(
                INFO,
                "[resolve_fee_schedules]: {err}, falling back to default fee schedules"
            );
            FeeSchedules::default()
        }
    }
}
