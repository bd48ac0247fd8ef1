// ─────────────────────────────────────────────────────────────────────
// Goldstone Dynamics — State
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
use serde::{Deserialize, Serialize};

use crate::error::{GoldstoneError, GoldstoneResult};

/// Side of zero the control signal last occupied outside the safe zone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Domain {
    Positive,
    Initial,
    Negative,
}

impl Domain {
    /// Signed code: +1, 0, -1.
    pub fn value(self) -> i32 {
        match self {
            Domain::Positive => 1,
            Domain::Initial => 0,
            Domain::Negative => -1,
        }
    }

    /// Reconstruct from the `f64` encoding used in Markov state vectors.
    pub fn from_code(code: f64) -> GoldstoneResult<Self> {
        if code == -1.0 {
            Ok(Domain::Negative)
        } else if code == 0.0 {
            Ok(Domain::Initial)
        } else if code == 1.0 {
            Ok(Domain::Positive)
        } else {
            Err(GoldstoneError::InvalidVariant {
                kind: "domain",
                code,
            })
        }
    }
}

impl TryFrom<i32> for Domain {
    type Error = GoldstoneError;

    fn try_from(code: i32) -> GoldstoneResult<Self> {
        Self::from_code(f64::from(code))
    }
}

/// Turn-direction mode of the penalty landscape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SystemResponse {
    Advantageous,
    Disadvantageous,
    Neutral,
}

impl SystemResponse {
    /// Signed code: advantageous +1, disadvantageous -1, neutral 0.
    pub fn value(self) -> i32 {
        match self {
            SystemResponse::Advantageous => 1,
            SystemResponse::Disadvantageous => -1,
            SystemResponse::Neutral => 0,
        }
    }

    pub fn from_code(code: f64) -> GoldstoneResult<Self> {
        if code == -1.0 {
            Ok(SystemResponse::Disadvantageous)
        } else if code == 0.0 {
            Ok(SystemResponse::Neutral)
        } else if code == 1.0 {
            Ok(SystemResponse::Advantageous)
        } else {
            Err(GoldstoneError::InvalidVariant {
                kind: "system response",
                code,
            })
        }
    }
}

impl TryFrom<i32> for SystemResponse {
    type Error = GoldstoneError;

    fn try_from(code: i32) -> GoldstoneResult<Self> {
        Self::from_code(f64::from(code))
    }
}

/// Exact rotation state, enough to replay a trajectory bit-for-bit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RotationSnapshot {
    pub domain: Domain,
    pub system_response: SystemResponse,
    pub angular_index: i64,
}

impl RotationSnapshot {
    /// State right after construction or reset.
    pub const INITIAL: RotationSnapshot = RotationSnapshot {
        domain: Domain::Initial,
        system_response: SystemResponse::Advantageous,
        angular_index: 0,
    };

    /// Markov-state encoding: `[domain, system_response, angular_index]`.
    pub fn to_codes(&self) -> [f64; 3] {
        [
            f64::from(self.domain.value()),
            f64::from(self.system_response.value()),
            self.angular_index as f64,
        ]
    }

    pub fn from_codes(codes: [f64; 3]) -> GoldstoneResult<Self> {
        let [domain, response, index] = codes;
        if !index.is_finite() || index.fract() != 0.0 {
            return Err(GoldstoneError::NonIntegralIndex(index));
        }
        // i64::MIN is exact as f64; 2^63 is the first value past i64::MAX.
        let lower = i64::MIN as f64;
        if !(lower..-lower).contains(&index) {
            return Err(GoldstoneError::IndexOutOfRange(index));
        }
        Ok(RotationSnapshot {
            domain: Domain::from_code(domain)?,
            system_response: SystemResponse::from_code(response)?,
            angular_index: index as i64,
        })
    }
}

impl Default for RotationSnapshot {
    fn default() -> Self {
        Self::INITIAL
    }
}
