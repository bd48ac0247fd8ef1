// ─────────────────────────────────────────────────────────────────────
// Goldstone Dynamics — Property-Based Tests (proptest) for goldstone-types
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Property-based tests for goldstone-types using proptest.
//!
//! Covers: enum code reconstruction, Markov-state snapshot encoding,
//! configuration grid validation.

use goldstone_types::config::DynamicsConfig;
use goldstone_types::error::GoldstoneError;
use goldstone_types::state::{Domain, RotationSnapshot, SystemResponse};
use proptest::prelude::*;

fn domain_strategy() -> impl Strategy<Value = Domain> {
    prop_oneof![
        Just(Domain::Positive),
        Just(Domain::Initial),
        Just(Domain::Negative),
    ]
}

fn response_strategy() -> impl Strategy<Value = SystemResponse> {
    prop_oneof![
        Just(SystemResponse::Advantageous),
        Just(SystemResponse::Disadvantageous),
        Just(SystemResponse::Neutral),
    ]
}

// ── Enum Codes ───────────────────────────────────────────────────────

proptest! {
    /// Only -1, 0 and 1 decode to a domain.
    #[test]
    fn domain_accepts_only_unit_codes(code in -1000i32..1000) {
        let decoded = Domain::try_from(code);
        prop_assert_eq!(decoded.is_ok(), (-1..=1).contains(&code));
        if let Ok(domain) = decoded {
            prop_assert_eq!(domain.value(), code);
        }
    }

    /// Only -1, 0 and 1 decode to a system response.
    #[test]
    fn response_accepts_only_unit_codes(code in -1000i32..1000) {
        let decoded = SystemResponse::try_from(code);
        prop_assert_eq!(decoded.is_ok(), (-1..=1).contains(&code));
        if let Ok(response) = decoded {
            prop_assert_eq!(response.value(), code);
        }
    }

    /// Fractional codes never decode.
    #[test]
    fn fractional_codes_rejected(code in -1.0f64..1.0) {
        prop_assume!(code != 0.0 && code != -1.0);
        let is_invalid_variant = matches!(
            Domain::from_code(code),
            Err(GoldstoneError::InvalidVariant { .. })
        );
        prop_assert!(is_invalid_variant);
        prop_assert!(SystemResponse::from_code(code).is_err());
    }
}

// ── Snapshot Encoding ────────────────────────────────────────────────

proptest! {
    /// Markov codes decode back to the same snapshot.
    #[test]
    fn snapshot_codes_invertible(
        domain in domain_strategy(),
        system_response in response_strategy(),
        angular_index in -1_000_000i64..1_000_000,
    ) {
        let snap = RotationSnapshot { domain, system_response, angular_index };
        let back = RotationSnapshot::from_codes(snap.to_codes()).unwrap();
        prop_assert_eq!(back, snap);
    }

    /// Integral codes past the i64 range are rejected, never saturated.
    #[test]
    fn snapshot_codes_reject_out_of_range(
        magnitude in 9.3e18f64..1e300,
        negative in any::<bool>(),
    ) {
        let index = if negative { -magnitude.trunc() } else { magnitude.trunc() };
        let is_out_of_range = matches!(
            RotationSnapshot::from_codes([1.0, 1.0, index]),
            Err(GoldstoneError::IndexOutOfRange(_))
        );
        prop_assert!(is_out_of_range);
    }
}

// ── Config Validation ────────────────────────────────────────────────

proptest! {
    /// Grid sizes are accepted exactly when positive multiples of 4.
    #[test]
    fn config_grid_validation(number_steps in -64i64..256) {
        let cfg = DynamicsConfig { number_steps, ..DynamicsConfig::default() };
        let valid = number_steps > 0 && number_steps % 4 == 0;
        prop_assert_eq!(cfg.validate().is_ok(), valid);
        if valid {
            prop_assert_eq!(cfg.quarter_index().unwrap() * 4, number_steps);
        }
    }

    /// Any non-negative safe zone is accepted.
    #[test]
    fn config_safe_zone_validation(safe_zone in -10.0f64..10.0) {
        let cfg = DynamicsConfig { safe_zone, ..DynamicsConfig::default() };
        prop_assert_eq!(cfg.validate().is_ok(), safe_zone >= 0.0);
    }
}
