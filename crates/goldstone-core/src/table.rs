// ─────────────────────────────────────────────────────────────────────
// Goldstone Dynamics — Penalty Function Table
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Precomputed penalty functions on the canonical angle grid.
//!
//! One quarter turn is divided into `K = number_steps / 4` steps, so the
//! landscape turns `2π / number_steps` per transition. Only the `2K + 1`
//! angles in `[-π/2, π/2]` are materialised; every other orientation maps
//! onto them through [`fold_angle_index`].

use std::f64::consts::PI;

use goldstone_types::config::quarter_index;
use goldstone_types::error::GoldstoneResult;
use ndarray::Array1;

use crate::penalty::PenaltyShape;
use crate::symmetry::fold_angle_index;

/// Canonical angles `i * 2π / number_steps` for `i` in `[-K, K]`.
pub fn angle_grid(number_steps: i64) -> GoldstoneResult<Array1<f64>> {
    let k = quarter_index(number_steps)?;
    let n = number_steps as f64;
    Ok(Array1::from_shape_fn((2 * k + 1) as usize, |slot| {
        let i = slot as i64 - k;
        i as f64 * 2.0 * PI / n
    }))
}

/// Immutable table of `2K + 1` penalty functions indexed by folded angle.
#[derive(Debug, Clone)]
pub struct PenaltyTable<P> {
    functions: Box<[P]>,
    number_steps: i64,
    k: i64,
}

impl<P: PenaltyShape> PenaltyTable<P> {
    pub fn build(number_steps: i64, max_required_step: f64) -> GoldstoneResult<Self> {
        let k = quarter_index(number_steps)?;
        let functions = angle_grid(number_steps)?
            .iter()
            .map(|&phi| P::at_angle(phi, max_required_step))
            .collect::<Vec<_>>()
            .into_boxed_slice();
        tracing::debug!(number_steps, k, len = functions.len(), "built penalty table");
        Ok(PenaltyTable {
            functions,
            number_steps,
            k,
        })
    }
}

impl<P> PenaltyTable<P> {
    pub fn number_steps(&self) -> i64 {
        self.number_steps
    }

    /// Quarter-turn index `K`.
    pub fn quarter_index(&self) -> i64 {
        self.k
    }

    pub fn len(&self) -> usize {
        self.functions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.functions.is_empty()
    }

    /// Table slot serving raw angular index `idx`.
    pub fn slot(&self, idx: i64) -> usize {
        // In [0, 2K] after the fold.
        (self.k + fold_angle_index(idx, self.k)) as usize
    }

    /// Function for raw angular index `idx` (folded first).
    pub fn get(&self, idx: i64) -> &P {
        &self.functions[self.slot(idx)]
    }

    pub(crate) fn at_slot(&self, slot: usize) -> &P {
        &self.functions[slot]
    }

    pub fn iter(&self) -> impl Iterator<Item = &P> {
        self.functions.iter()
    }
}
