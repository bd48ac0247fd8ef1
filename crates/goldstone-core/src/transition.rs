// ─────────────────────────────────────────────────────────────────────
// Goldstone Dynamics — Rotation Transition
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Pure sub-steps of one rotation state transition.
//!
//! [`transition`] runs them in order on a copy of the state:
//!
//! 1. domain update (unchanged inside the safe zone)
//! 2. system response forced advantageous on a domain change
//! 3. angular step, accumulated into the raw index
//! 4. system response turns disadvantageous at the quarter turn
//! 5. full reset when the index is back at 0 inside the safe zone
//! 6. symmetry fold into `[-K, K]`

use goldstone_types::state::{Domain, RotationSnapshot, SystemResponse};

use crate::symmetry::fold_angle_index;

/// Whether `control` lies in the deadband `[-safe_zone, safe_zone]`.
/// NaN has no sign and is treated as inside.
pub fn in_safe_zone(control: f64, safe_zone: f64) -> bool {
    control.is_nan() || control.abs() <= safe_zone
}

fn sign(control: f64) -> i64 {
    if control > 0.0 {
        1
    } else if control < 0.0 {
        -1
    } else {
        0
    }
}

/// Step 1. Inside the safe zone the turn direction does not depend on the
/// exact position, so the previous domain is kept.
pub fn next_domain(domain: Domain, control: f64, safe_zone: f64) -> Domain {
    if in_safe_zone(control, safe_zone) {
        domain
    } else if control > 0.0 {
        Domain::Positive
    } else {
        Domain::Negative
    }
}

/// Step 3. `state` must already carry the updated domain and response.
pub fn angular_step(state: &RotationSnapshot, control: f64, safe_zone: f64, k: i64) -> i64 {
    // Unwind toward the reference orientation.
    if in_safe_zone(control, safe_zone) {
        return -state.angular_index.signum();
    }
    if state.angular_index == -i64::from(state.domain.value()) * k {
        tracing::trace!(angular_index = state.angular_index, "no turning");
        return 0;
    }
    i64::from(state.system_response.value()) * sign(control)
}

/// Step 4. Only the quarter turn in either direction flips the response.
pub fn response_after_step(
    response: SystemResponse,
    angular_index: i64,
    k: i64,
) -> SystemResponse {
    if angular_index.unsigned_abs() >= k.unsigned_abs() {
        if response != SystemResponse::Disadvantageous {
            tracing::trace!("turning system response -> disadvantageous");
        }
        SystemResponse::Disadvantageous
    } else {
        response
    }
}

/// Raw index after `step`. A restored index at the edge of the `i64` range is
/// first moved one full turn toward zero, which leaves the folded result and
/// the quarter-turn test unchanged.
fn advance_index(angular_index: i64, step: i64, k: i64) -> i64 {
    angular_index
        .checked_add(step)
        .unwrap_or_else(|| angular_index - angular_index.signum() * 4 * k + step)
}

/// Full transition for one control value. Returns the committed state with
/// the angular index already folded.
pub fn transition(
    state: RotationSnapshot,
    control: f64,
    safe_zone: f64,
    k: i64,
) -> RotationSnapshot {
    let mut next = state;

    next.domain = next_domain(state.domain, control, safe_zone);
    if next.domain != state.domain {
        tracing::trace!(
            from = ?state.domain,
            to = ?next.domain,
            "domain change, response -> advantageous"
        );
        next.system_response = SystemResponse::Advantageous;
    }

    let step = angular_step(&next, control, safe_zone, k);
    next.angular_index = advance_index(next.angular_index, step, k);
    next.system_response = response_after_step(next.system_response, next.angular_index, k);

    if next.angular_index == 0 && in_safe_zone(control, safe_zone) {
        tracing::trace!("back at reference orientation inside safe zone, reset");
        return RotationSnapshot::INITIAL;
    }

    next.angular_index = fold_angle_index(next.angular_index, k);
    tracing::trace!(angular_index = next.angular_index, "transition done");
    next
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snap(
        domain: Domain,
        system_response: SystemResponse,
        angular_index: i64,
    ) -> RotationSnapshot {
        RotationSnapshot {
            domain,
            system_response,
            angular_index,
        }
    }

    #[test]
    fn test_safe_zone_bounds_inclusive() {
        assert!(in_safe_zone(0.1, 0.1));
        assert!(in_safe_zone(-0.1, 0.1));
        assert!(!in_safe_zone(0.1000001, 0.1));
        assert!(in_safe_zone(0.0, 0.0));
        assert!(!in_safe_zone(-1e-300, 0.0));
        assert!(in_safe_zone(f64::NAN, 0.0));
    }

    #[test]
    fn test_domain_kept_inside_safe_zone() {
        assert_eq!(next_domain(Domain::Negative, 0.05, 0.1), Domain::Negative);
        assert_eq!(next_domain(Domain::Initial, -0.05, 0.1), Domain::Initial);
        assert_eq!(next_domain(Domain::Negative, 0.5, 0.1), Domain::Positive);
        assert_eq!(next_domain(Domain::Positive, -0.5, 0.1), Domain::Negative);
        assert_eq!(next_domain(Domain::Initial, f64::INFINITY, 0.1), Domain::Positive);
    }

    #[test]
    fn test_step_unwinds_in_safe_zone() {
        let s = snap(Domain::Positive, SystemResponse::Advantageous, 3);
        assert_eq!(angular_step(&s, 0.0, 0.1, 6), -1);
        let s = snap(Domain::Negative, SystemResponse::Disadvantageous, -4);
        assert_eq!(angular_step(&s, 0.05, 0.1, 6), 1);
        let s = snap(Domain::Initial, SystemResponse::Advantageous, 0);
        assert_eq!(angular_step(&s, 0.0, 0.1, 6), 0);
    }

    #[test]
    fn test_step_stalls_at_domain_boundary() {
        let s = snap(Domain::Positive, SystemResponse::Advantageous, -2);
        assert_eq!(angular_step(&s, 0.7, 0.1, 2), 0);
        let s = snap(Domain::Negative, SystemResponse::Disadvantageous, 2);
        assert_eq!(angular_step(&s, -0.7, 0.1, 2), 0);
    }

    #[test]
    fn test_step_follows_response_sign() {
        let adv = snap(Domain::Positive, SystemResponse::Advantageous, 0);
        assert_eq!(angular_step(&adv, 0.5, 0.1, 6), 1);
        let dis = snap(Domain::Positive, SystemResponse::Disadvantageous, 0);
        assert_eq!(angular_step(&dis, 0.5, 0.1, 6), -1);
        let neutral = snap(Domain::Negative, SystemResponse::Neutral, 1);
        assert_eq!(angular_step(&neutral, -0.5, 0.1, 6), 0);
        let adv_neg = snap(Domain::Negative, SystemResponse::Advantageous, 1);
        assert_eq!(angular_step(&adv_neg, -0.5, 0.1, 6), -1);
    }

    #[test]
    fn test_response_flips_at_quarter_turn() {
        let r = SystemResponse::Advantageous;
        assert_eq!(response_after_step(r, 5, 6), r);
        assert_eq!(response_after_step(r, 6, 6), SystemResponse::Disadvantageous);
        assert_eq!(response_after_step(r, -7, 6), SystemResponse::Disadvantageous);
        assert_eq!(
            response_after_step(SystemResponse::Neutral, 0, 6),
            SystemResponse::Neutral
        );
    }

    #[test]
    fn test_first_push_out_of_initial() {
        let next = transition(RotationSnapshot::INITIAL, 0.5, 0.1, 6);
        assert_eq!(next, snap(Domain::Positive, SystemResponse::Advantageous, 1));
    }

    #[test]
    fn test_reaching_quarter_turn_turns_disadvantageous() {
        let s = snap(Domain::Positive, SystemResponse::Advantageous, 5);
        let next = transition(s, 0.5, 0.1, 6);
        assert_eq!(next, snap(Domain::Positive, SystemResponse::Disadvantageous, 6));
        // Disadvantageous turns back toward the reference orientation.
        let back = transition(next, 0.5, 0.1, 6);
        assert_eq!(back, snap(Domain::Positive, SystemResponse::Disadvantageous, 5));
    }

    #[test]
    fn test_crossing_zero_outside_safe_zone_does_not_reset() {
        let s = snap(Domain::Positive, SystemResponse::Disadvantageous, 1);
        let next = transition(s, 0.5, 0.1, 6);
        assert_eq!(next, snap(Domain::Positive, SystemResponse::Disadvantageous, 0));
    }

    #[test]
    fn test_unwind_to_zero_resets() {
        let s = snap(Domain::Negative, SystemResponse::Disadvantageous, -1);
        assert_eq!(transition(s, 0.0, 0.1, 6), RotationSnapshot::INITIAL);
    }

    #[test]
    fn test_overshoot_is_folded() {
        // K=1: advantageous push from +1 lands on +2, the half turn, which
        // folds onto 0 without a reset.
        let s = snap(Domain::Positive, SystemResponse::Advantageous, 1);
        let next = transition(s, 0.5, 0.0, 1);
        assert_eq!(next, snap(Domain::Positive, SystemResponse::Disadvantageous, 0));
    }

    #[test]
    fn test_step_at_i64_edges_matches_one_turn_inside() {
        let k = 6;
        for (domain, response, control, edge) in [
            (Domain::Positive, SystemResponse::Advantageous, 0.5, i64::MAX),
            (Domain::Negative, SystemResponse::Advantageous, -0.5, i64::MIN),
            (Domain::Positive, SystemResponse::Disadvantageous, 0.5, i64::MIN),
            (Domain::Negative, SystemResponse::Disadvantageous, -0.5, i64::MAX),
        ] {
            let at_edge = transition(snap(domain, response, edge), control, 0.1, k);
            let inside = edge - edge.signum() * 4 * k;
            let one_turn_in = transition(snap(domain, response, inside), control, 0.1, k);
            assert_eq!(at_edge, one_turn_in, "edge {edge}");
            assert!(at_edge.angular_index.abs() <= k);
        }
    }

    #[test]
    fn test_nan_control_idles() {
        let s = snap(Domain::Positive, SystemResponse::Advantageous, 2);
        let next = transition(s, f64::NAN, 0.1, 6);
        assert_eq!(next, snap(Domain::Positive, SystemResponse::Advantageous, 1));
    }
}
