// ─────────────────────────────────────────────────────────────────────
// Goldstone Dynamics — Goldstone Core
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Rotating penalty landscape ("golden stone" dynamics).
//!
//! Penalty table, symmetry fold, rotation state machine and trajectory replay.

pub mod dynamics;
pub mod penalty;
pub mod symmetry;
pub mod table;
pub mod trajectory;
pub mod transition;

pub use dynamics::GoldstoneDynamics;
pub use penalty::{GoldstonePenalty, PenaltyShape};
