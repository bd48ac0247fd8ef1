// ─────────────────────────────────────────────────────────────────────
// Goldstone Dynamics — Penalty Function
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! One-dimensional penalty functions of the rotating landscape.
//!
//! Each function is bound to one canonical rotation angle `phi` and is
//! immutable once built. The state machine only needs the penalty value at a
//! position and the location/value of the optimum, so the shape is pluggable
//! through [`PenaltyShape`].

/// Closed-form penalty primitive evaluated at a scalar control position.
pub trait PenaltyShape {
    /// Build the function for rotation angle `phi` (radians).
    fn at_angle(phi: f64, max_required_step: f64) -> Self
    where
        Self: Sized;

    /// Penalty at `position`. Lower is better.
    fn penalty(&self, position: f64) -> f64;

    /// Position of the minimum penalty.
    fn optimum_position(&self) -> f64;

    /// Penalty at the optimum.
    fn optimum_value(&self) -> f64;
}

/// Default landscape: a pseudo-Huber bowl whose floor slides along the control
/// axis and rises as the landscape turns away from the reference orientation.
///
/// - optimum at `max_required_step * sin(phi)`
/// - floor at `1 - cos(phi)` (0 at `phi = 0`, 1 at a quarter turn)
/// - `penalty(x) = floor + sqrt(1 + (x - x_opt)^2) - 1`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GoldstonePenalty {
    pub phi: f64,
    pub max_required_step: f64,
    optimum_position: f64,
    optimum_value: f64,
}

impl PenaltyShape for GoldstonePenalty {
    fn at_angle(phi: f64, max_required_step: f64) -> Self {
        GoldstonePenalty {
            phi,
            max_required_step,
            optimum_position: max_required_step * phi.sin(),
            optimum_value: 1.0 - phi.cos(),
        }
    }

    fn penalty(&self, position: f64) -> f64 {
        // sqrt(1 + d^2) - 1 rewritten as |d| * |d| / (sqrt(1 + d^2) + 1): exact
        // zero at the optimum and no overflow for large |d|.
        let d = (position - self.optimum_position).abs();
        self.optimum_value + d * (d / (d.hypot(1.0) + 1.0))
    }

    fn optimum_position(&self) -> f64 {
        self.optimum_position
    }

    fn optimum_value(&self) -> f64 {
        self.optimum_value
    }
}
