// ─────────────────────────────────────────────────────────────────────
// Goldstone Dynamics — Trajectory Replay
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Recorded control trajectories and replay verification.
//!
//! Replay check: warm the machine up, memorize its state, record a
//! trajectory, rebuild a fresh machine, restore the memorized state and
//! replay the same controls. Both passes must agree step for step.

use goldstone_types::config::DynamicsConfig;
use goldstone_types::error::GoldstoneResult;
use goldstone_types::state::RotationSnapshot;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

use crate::dynamics::GoldstoneDynamics;
use crate::penalty::PenaltyShape;

/// One control step: the state after the transition and the reward there.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TrajectoryStep {
    pub control: f64,
    pub reward: f64,
    pub state: RotationSnapshot,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Trajectory {
    pub steps: Vec<TrajectoryStep>,
}

impl Trajectory {
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    pub fn rewards(&self) -> Vec<f64> {
        self.steps.iter().map(|s| s.reward).collect()
    }

    pub fn total_reward(&self) -> f64 {
        self.steps.iter().map(|s| s.reward).sum()
    }

    pub fn final_state(&self) -> Option<RotationSnapshot> {
        self.steps.last().map(|s| s.state)
    }
}

impl<P: PenaltyShape> GoldstoneDynamics<P> {
    /// Apply each control in turn, recording reward and post-step state.
    pub fn run(&mut self, controls: &[f64]) -> Trajectory {
        let steps = controls
            .iter()
            .map(|&control| {
                self.state_transition(control);
                TrajectoryStep {
                    control,
                    reward: self.reward_at(control),
                    state: self.snapshot(),
                }
            })
            .collect();
        Trajectory { steps }
    }
}

/// Index of the first step where the two trajectories disagree: differing
/// control, state, or reward beyond `tolerance`. A length mismatch diverges
/// at the end of the shorter one.
pub fn first_divergence(a: &Trajectory, b: &Trajectory, tolerance: f64) -> Option<usize> {
    a.steps
        .iter()
        .zip(&b.steps)
        .position(|(x, y)| {
            x.state != y.state
                || x.control.to_bits() != y.control.to_bits()
                || !rewards_match(x.reward, y.reward, tolerance)
        })
        .or_else(|| (a.len() != b.len()).then_some(a.len().min(b.len())))
}

// Identical bits always match, so NaN rewards from NaN controls replay cleanly.
fn rewards_match(a: f64, b: f64, tolerance: f64) -> bool {
    a.to_bits() == b.to_bits() || (a - b).abs() <= tolerance
}

/// Seeded control sequence, uniform in `[-bound, bound]`.
pub fn uniform_controls(seed: u64, len: usize, bound: f64) -> Vec<f64> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..len)
        .map(|_| bound * (2.0 * rng.gen::<f64>() - 1.0))
        .collect()
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReplayReport {
    pub config: DynamicsConfig,
    pub warmup_steps: usize,
    /// State memorized after warm-up and restored before the replay.
    pub memorized: RotationSnapshot,
    pub recorded: Trajectory,
    pub replayed: Trajectory,
    pub divergence: Option<usize>,
}

impl ReplayReport {
    pub fn is_reproducible(&self) -> bool {
        self.divergence.is_none()
    }
}

/// Run the memorize/replay check for `controls` after `warmup` controls.
pub fn verify_replay(
    config: &DynamicsConfig,
    warmup: &[f64],
    controls: &[f64],
    tolerance: f64,
) -> GoldstoneResult<ReplayReport> {
    let mut first = GoldstoneDynamics::from_config(config)?;
    for &control in warmup {
        first.state_transition(control);
    }
    let memorized = first.snapshot();
    tracing::debug!(?memorized, warmup = warmup.len(), "memorized state after warm-up");
    let recorded = first.run(controls);

    let mut second = GoldstoneDynamics::from_config(config)?;
    second.restore(memorized);
    let replayed = second.run(controls);

    let divergence = first_divergence(&recorded, &replayed, tolerance);
    match divergence {
        Some(step) => tracing::warn!(step, "replay diverged"),
        None => tracing::info!(steps = controls.len(), "replay reproduced trajectory"),
    }

    Ok(ReplayReport {
        config: config.clone(),
        warmup_steps: warmup.len(),
        memorized,
        recorded,
        replayed,
        divergence,
    })
}
