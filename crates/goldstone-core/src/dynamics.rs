// ─────────────────────────────────────────────────────────────────────
// Goldstone Dynamics — Rotation State Machine
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Rotating penalty landscape driven by a scalar control position.
//!
//! The machine owns its penalty table and the rotation state
//! `(domain, system_response, angular_index)`. Each control value advances
//! the state through [`transition`] and re-selects the active penalty
//! function; rewards are the negated penalty at the control position.

use goldstone_types::config::DynamicsConfig;
use goldstone_types::error::{GoldstoneError, GoldstoneResult};
use goldstone_types::state::{Domain, RotationSnapshot, SystemResponse};

use crate::penalty::{GoldstonePenalty, PenaltyShape};
use crate::table::PenaltyTable;
use crate::transition::transition;

#[derive(Debug, Clone)]
pub struct GoldstoneDynamics<P = GoldstonePenalty> {
    table: PenaltyTable<P>,
    safe_zone: f64,
    state: RotationSnapshot,
    /// Table slot of the active penalty function, derived from the index.
    active: usize,
}

impl GoldstoneDynamics<GoldstonePenalty> {
    /// Machine over the default landscape.
    ///
    /// `number_steps` must be a positive multiple of 4 and `safe_zone`
    /// non-negative.
    pub fn new(
        number_steps: i64,
        max_required_step: f64,
        safe_zone: f64,
    ) -> GoldstoneResult<Self> {
        Self::with_shape(number_steps, max_required_step, safe_zone)
    }

    pub fn from_config(config: &DynamicsConfig) -> GoldstoneResult<Self> {
        config.validate()?;
        Self::new(
            config.number_steps,
            config.max_required_step,
            config.safe_zone,
        )
    }
}

impl<P: PenaltyShape> GoldstoneDynamics<P> {
    /// Machine over any penalty shape.
    pub fn with_shape(
        number_steps: i64,
        max_required_step: f64,
        safe_zone: f64,
    ) -> GoldstoneResult<Self> {
        if safe_zone.is_nan() || safe_zone < 0.0 {
            return Err(GoldstoneError::InvalidSafeZone(safe_zone));
        }
        let table = PenaltyTable::build(number_steps, max_required_step)?;
        let mut dynamics = GoldstoneDynamics {
            table,
            safe_zone,
            state: RotationSnapshot::INITIAL,
            active: 0,
        };
        dynamics.reset();
        Ok(dynamics)
    }

    /// Back to the reference orientation: initial domain, advantageous
    /// response, index 0.
    pub fn reset(&mut self) {
        self.state = RotationSnapshot::INITIAL;
        self.refresh_penalty_function();
    }

    /// Advance the landscape by one control value.
    pub fn state_transition(&mut self, control: f64) {
        self.state = transition(
            self.state,
            control,
            self.safe_zone,
            self.table.quarter_index(),
        );
        self.refresh_penalty_function();
    }

    /// Negated penalty of the active function at `position`.
    pub fn reward_at(&self, position: f64) -> f64 {
        -self.penalty_function().penalty(position)
    }

    pub fn optimal_position(&self) -> f64 {
        self.penalty_function().optimum_position()
    }

    pub fn optimal_reward(&self) -> f64 {
        -self.penalty_function().optimum_value()
    }

    pub fn penalty_function(&self) -> &P {
        self.table.at_slot(self.active)
    }

    /// Penalty function for an arbitrary raw angular index.
    pub fn penalty_function_at(&self, angular_index: i64) -> &P {
        self.table.get(angular_index)
    }

    /// Re-derive the active penalty function from the current index.
    pub fn refresh_penalty_function(&mut self) {
        self.active = self.table.slot(self.state.angular_index);
    }
}

impl<P> GoldstoneDynamics<P> {
    pub fn domain(&self) -> Domain {
        self.state.domain
    }

    pub fn set_domain(&mut self, domain: Domain) {
        self.state.domain = domain;
    }

    pub fn system_response(&self) -> SystemResponse {
        self.state.system_response
    }

    pub fn set_system_response(&mut self, system_response: SystemResponse) {
        self.state.system_response = system_response;
    }

    pub fn angular_index(&self) -> i64 {
        self.state.angular_index
    }

    /// Force the raw index. The active penalty function follows it.
    pub fn set_angular_index(&mut self, angular_index: i64) {
        self.state.angular_index = angular_index;
        self.active = self.table.slot(angular_index);
    }

    pub fn snapshot(&self) -> RotationSnapshot {
        self.state
    }

    /// Force the full rotation state, e.g. before replaying a trajectory.
    pub fn restore(&mut self, snapshot: RotationSnapshot) {
        self.state = snapshot;
        self.active = self.table.slot(snapshot.angular_index);
    }

    pub fn safe_zone(&self) -> f64 {
        self.safe_zone
    }

    /// Quarter-turn index `K`.
    pub fn quarter_index(&self) -> i64 {
        self.table.quarter_index()
    }

    pub fn table(&self) -> &PenaltyTable<P> {
        &self.table
    }
}
