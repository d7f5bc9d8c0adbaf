use std::{fmt, str::FromStr};

use ic_canister_log::log;
use serde::{Deserialize, Serialize};

use crate::logs::DEBUG;

/// Who absorbs the fees.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FeeMode {
    /// The stated price already contains every fee, the buyer pays exactly the price.
    #[serde(rename = "INCLUDED")]
    Included,
    /// Fees are layered on top of the price the organizer wants to net.
    #[serde(rename = "ADDED")]
    Added,
}

/// A fee mode as requested by a caller, including the legacy `ON_TOP` spelling.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FeeModeToken {
    #[serde(rename = "INCLUDED")]
    Included,
    #[serde(rename = "ADDED")]
    Added,
    #[serde(rename = "ON_TOP")]
    OnTop,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownFeeModeToken(pub String);

impl fmt::Display for UnknownFeeModeToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown fee mode token {:?}", self.0)
    }
}

impl FeeModeToken {
    pub fn as_str(&self) -> &'static str {
        match self {
            FeeModeToken::Included => "INCLUDED",
            FeeModeToken::Added => "ADDED",
            FeeModeToken::OnTop => "ON_TOP",
        }
    }
}

impl FromStr for FeeModeToken {
    type Err = UnknownFeeModeToken;

    fn from_str(token: &str) -> Result<Self, Self::Err> {
        let trimmed = token.trim();
        [FeeModeToken::Included, FeeModeToken::Added, FeeModeToken::OnTop]
            .into_iter()
            .find(|candidate| candidate.as_str().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| UnknownFeeModeToken(token.to_string()))
    }
}

impl From<FeeModeToken> for FeeMode {
    fn from(token: FeeModeToken) -> Self {
        match token {
            FeeModeToken::Included => FeeMode::Included,
            // ON_TOP is the historical name of ADDED
            FeeModeToken::Added | FeeModeToken::OnTop => FeeMode::Added,
        }
    }
}

impl From<FeeMode> for FeeModeToken {
    fn from(mode: FeeMode) -> Self {
        match mode {
            FeeMode::Included => FeeModeToken::Included,
            FeeMode::Added => FeeModeToken::Added,
        }
    }
}

impl fmt::Display for FeeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FeeMode::Included => write!(f, "INCLUDED"),
            FeeMode::Added => write!(f, "ADDED"),
        }
    }
}

/// Resolves a free-form mode token to a canonical fee mode.
///
/// Callers are expected to only send known tokens. As a fallback an unknown token resolves
/// to `FeeMode::Added` and is logged; use `FeeModeToken::from_str` to reject it instead.
pub fn resolve_fee_mode(token: &str) -> FeeMode {
    match token.parse::<FeeModeToken>() {
        Ok(token) => token.into(),
        Err(err) => {
            log!(DEBUG, "[resolve_fee_mode]: {err}, falling back to ADDED");
            FeeMode::Added
        }
    }
}
