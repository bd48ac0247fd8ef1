// ─────────────────────────────────────────────────────────────────────
// Goldstone Dynamics — Symmetry Folding
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Folding of angular indices into the canonical range `[-K, K]`.
//!
//! A full turn is `4K` steps. Reflecting the landscape through the x-axis
//! (`phi -> pi - phi`) leaves the penalty seen by the control unchanged, so
//! any orientation can be served by one of the `2K + 1` angles between the
//! two quarter-turn extremes `-K` and `+K`. Those extremes are the worst-case
//! orientations of the positive and negative domain respectively.

/// Fold `idx` into `[-k, k]` using 4k-periodicity and reflection about `2k`.
///
/// `k` must be positive.
pub fn fold_angle_index(idx: i64, k: i64) -> i64 {
    debug_assert!(k > 0, "quarter index must be positive, got {k}");
    if idx.unsigned_abs() <= k.unsigned_abs() {
        return idx;
    }
    let period = 4 * k;
    let m = idx.rem_euclid(period);
    if m <= k {
        m
    } else if m >= 3 * k {
        // Already canonical one period down.
        m - period
    } else {
        // (90°, 270°): reflect about 180°.
        2 * k - m
    }
}
