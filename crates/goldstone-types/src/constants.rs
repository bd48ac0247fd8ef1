// ─────────────────────────────────────────────────────────────────────
// Goldstone Dynamics — Constants
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
/// Steps for one full turn of the penalty landscape (15° per step).
pub const DEFAULT_NUMBER_STEPS: i64 = 24;

/// Largest control step the penalty functions must support: sin(15°).
pub const DEFAULT_MAX_REQUIRED_STEP: f64 = 0.258_819_045_102_520_74;

/// Deadband half-width, half of the max required step.
pub const DEFAULT_SAFE_ZONE: f64 = DEFAULT_MAX_REQUIRED_STEP / 2.0;

/// Quarter turns per full rotation. `numberSteps` must be a multiple of this.
pub const QUARTER_TURNS: i64 = 4;
