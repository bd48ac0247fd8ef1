// ─────────────────────────────────────────────────────────────────────
// Goldstone Dynamics — Config
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
use serde::{Deserialize, Serialize};

use crate::constants::{
    DEFAULT_MAX_REQUIRED_STEP, DEFAULT_NUMBER_STEPS, DEFAULT_SAFE_ZONE, QUARTER_TURNS,
};
use crate::error::{GoldstoneError, GoldstoneResult};

/// Construction parameters of the rotating penalty landscape.
/// Every field is optional in JSON and falls back to the benchmark defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DynamicsConfig {
    /// Steps per full turn; positive multiple of 4.
    #[serde(default = "default_number_steps")]
    pub number_steps: i64,
    /// Largest control magnitude the penalty functions are built for.
    #[serde(default = "default_max_required_step")]
    pub max_required_step: f64,
    /// Deadband half-width around zero (>= 0).
    #[serde(default = "default_safe_zone")]
    pub safe_zone: f64,
}

fn default_number_steps() -> i64 {
    DEFAULT_NUMBER_STEPS
}
fn default_max_required_step() -> f64 {
    DEFAULT_MAX_REQUIRED_STEP
}
fn default_safe_zone() -> f64 {
    DEFAULT_SAFE_ZONE
}

impl Default for DynamicsConfig {
    fn default() -> Self {
        DynamicsConfig {
            number_steps: default_number_steps(),
            max_required_step: default_max_required_step(),
            safe_zone: default_safe_zone(),
        }
    }
}

/// Quarter-turn index `K = number_steps / 4`; rejects grids that are not a
/// positive multiple of 4.
pub fn quarter_index(number_steps: i64) -> GoldstoneResult<i64> {
    if number_steps < 1 || number_steps % QUARTER_TURNS != 0 {
        return Err(GoldstoneError::InvalidGridSize(number_steps));
    }
    Ok(number_steps / QUARTER_TURNS)
}

impl DynamicsConfig {
    /// Load from a JSON file and validate.
    pub fn from_file(path: &str) -> GoldstoneResult<Self> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_json_str(&contents)
    }

    pub fn from_json_str(contents: &str) -> GoldstoneResult<Self> {
        let config: Self = serde_json::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    pub fn quarter_index(&self) -> GoldstoneResult<i64> {
        quarter_index(self.number_steps)
    }

    pub fn validate(&self) -> GoldstoneResult<()> {
        self.quarter_index()?;
        if !self.max_required_step.is_finite() {
            return Err(GoldstoneError::ConfigError(format!(
                "max_required_step must be finite, but is {}",
                self.max_required_step
            )));
        }
        if self.safe_zone.is_nan() || self.safe_zone < 0.0 {
            return Err(GoldstoneError::InvalidSafeZone(self.safe_zone));
        }
        Ok(())
    }
}
