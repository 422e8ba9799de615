//! Two-port stability tests
//!
//! The primary test is the Edwards–Sinsky μ criterion: μ > 1 at a frequency
//! is necessary and sufficient for unconditional stability there, i.e.
//! stability for every passive source and load termination. Rollett's K
//! together with |Δ| is provided as the classic two-parameter alternative.

use std::cmp::Ordering;

use log::debug;
use ndarray::Array1;

use super::sweep::SParameterSweep;
use crate::constants::{NEAR_ZERO, STABILITY_THRESHOLD};

/// Outcome of [`stability_test`]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct StabilityResult {
    /// True iff μ > 1 at every frequency point
    pub is_stable: bool,
    /// μ per frequency, present only when requested
    pub mu: Option<Array1<f64>>,
}

/// Edwards–Sinsky source-side stability factor μ
///
/// μ = (1 - |S11|²) / (|S22 - Δ·S11*| + |S12·S21|)
///
/// A lossless unilateral device yields 0/0 = NaN; a matched unilateral one
/// yields +inf.
pub fn mu_factor(s: &SParameterSweep) -> Array1<f64> {
    Array1::from_shape_fn(s.nfreq(), |f| {
        let (s11, s12, s21, s22) = s.entries(f);
        let delta = s11 * s22 - s12 * s21;
        (1.0 - s11.norm_sqr()) / ((s22 - delta * s11.conj()).norm() + (s12 * s21).norm())
    })
}

/// Edwards–Sinsky load-side stability factor μ'
///
/// μ' = (1 - |S22|²) / (|S11 - Δ·S22*| + |S12·S21|)
///
/// μ' > 1 is equivalent to μ > 1; the two differ in value but not in verdict.
pub fn mu_prime_factor(s: &SParameterSweep) -> Array1<f64> {
    Array1::from_shape_fn(s.nfreq(), |f| {
        let (s11, s12, s21, s22) = s.entries(f);
        let delta = s11 * s22 - s12 * s21;
        (1.0 - s22.norm_sqr()) / ((s11 - delta * s22.conj()).norm() + (s12 * s21).norm())
    })
}

/// NaN has no ordering against the threshold, so it never passes
fn above_threshold(factor: f64) -> bool {
    factor.partial_cmp(&STABILITY_THRESHOLD) == Some(Ordering::Greater)
}

/// μ-test over the whole sweep
///
/// `is_stable` is true only if every point has μ > 1. A NaN μ counts as
/// not stable. An empty sweep is reported stable. The μ sweep is attached
/// when `return_factor` is set.
pub fn stability_test(s: &SParameterSweep, return_factor: bool) -> StabilityResult {
    let mu = mu_factor(s);
    let failing = mu.iter().filter(|&&m| !above_threshold(m)).count();

    debug!(
        "stability_test: {} of {} points fail mu > {}",
        failing,
        mu.len(),
        STABILITY_THRESHOLD
    );

    StabilityResult {
        is_stable: failing == 0,
        mu: return_factor.then_some(mu),
    }
}

/// Rollett stability factor K and determinant magnitude |Δ|
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct RollettStability {
    /// K = (1 - |S11|² - |S22|² + |Δ|²) / (2|S12·S21|)
    pub k: Array1<f64>,
    /// |Δ| = |S11·S22 - S12·S21|
    pub delta: Array1<f64>,
}

impl RollettStability {
    /// K > 1 and |Δ| < 1 at every point
    pub fn is_unconditionally_stable(&self) -> bool {
        self.k.iter().all(|&k| k > STABILITY_THRESHOLD) && self.delta.iter().all(|&d| d < 1.0)
    }
}

/// Rollett K with |S12·S21| floored at `NEAR_ZERO` so a unilateral device
/// gives a large finite K instead of a division by zero.
pub(crate) fn rollett_k_unchecked(s: &SParameterSweep) -> Array1<f64> {
    Array1::from_shape_fn(s.nfreq(), |f| {
        let (s11, s12, s21, s22) = s.entries(f);
        let delta = s11 * s22 - s12 * s21;
        let s12_s21 = (s12 * s21).norm().max(NEAR_ZERO);
        (1.0 - s11.norm_sqr() - s22.norm_sqr() + delta.norm_sqr()) / (2.0 * s12_s21)
    })
}

/// Rollett K and |Δ| per frequency
pub fn rollett_stability(s: &SParameterSweep) -> RollettStability {
    RollettStability {
        k: rollett_k_unchecked(s),
        delta: s.determinant().mapv(|d| d.norm()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use num_complex::Complex64;

    fn c(re: f64, im: f64) -> Complex64 {
        Complex64::new(re, im)
    }

    #[test]
    fn test_mu_concrete_example_is_infinite() {
        // S = {0, 0, 2, 0}: μ = 1 / 0
        let s = SParameterSweep::constant(1, c(0.0, 0.0), c(0.0, 0.0), c(2.0, 0.0), c(0.0, 0.0));
        let result = stability_test(&s, true);

        assert!(result.is_stable);
        let mu = result.mu.unwrap();
        assert!(mu[0].is_infinite() && mu[0] > 0.0);
    }

    #[test]
    fn test_mu_only_when_requested() {
        let s = SParameterSweep::constant(2, c(0.1, 0.0), c(0.0, 0.0), c(2.0, 0.0), c(0.2, 0.0));
        assert_eq!(stability_test(&s, false).mu, None);
        assert_eq!(stability_test(&s, true).mu.map(|m| m.len()), Some(2));
    }

    #[test]
    fn test_mu_unilateral_is_inverse_s22() {
        // s12 = 0: μ = (1 - |S11|²) / (|S22|(1 - |S11|²)) = 1/|S22|
        let s = SParameterSweep::constant(1, c(0.3, 0.4), c(0.0, 0.0), c(4.0, -1.0), c(0.0, 0.5));
        assert_relative_eq!(mu_factor(&s)[0], 2.0, epsilon = 1e-12);
        assert_relative_eq!(mu_prime_factor(&s)[0], 2.0, epsilon = 1e-12);
    }

    #[test]
    fn test_mu_hand_computed_bilateral() {
        // S11 = 0.5, S12 = 0.2, S21 = 2, S22 = 0.5 -> Δ = -0.15
        // μ = 0.75 / (|0.5 + 0.075| + 0.4) = 0.75 / 0.975
        let s = SParameterSweep::constant(1, c(0.5, 0.0), c(0.2, 0.0), c(2.0, 0.0), c(0.5, 0.0));
        assert_relative_eq!(mu_factor(&s)[0], 0.75 / 0.975, epsilon = 1e-12);
        assert!(!stability_test(&s, false).is_stable);
    }

    #[test]
    fn test_mu_and_mu_prime_agree_on_verdict() {
        let devices = [
            (c(0.5, 0.0), c(0.2, 0.0), c(2.0, 0.0), c(0.5, 0.0)),
            (c(0.3, -0.2), c(0.02, 0.01), c(2.0, 1.0), c(0.4, 0.1)),
            (c(0.9, 0.1), c(0.1, 0.0), c(5.0, 0.0), c(0.8, -0.2)),
        ];
        for (s11, s12, s21, s22) in devices {
            let s = SParameterSweep::constant(1, s11, s12, s21, s22);
            assert_eq!(mu_factor(&s)[0] > 1.0, mu_prime_factor(&s)[0] > 1.0);
        }
    }

    #[test]
    fn test_threshold_is_strict_and_rejects_nan() {
        assert!(above_threshold(1.0 + 1e-12));
        assert!(above_threshold(f64::INFINITY));
        assert!(!above_threshold(1.0));
        assert!(!above_threshold(f64::NAN));
        assert!(!above_threshold(f64::NEG_INFINITY));
    }

    #[test]
    fn test_lossless_unilateral_is_nan_and_unstable() {
        // |S11| = 1 with S12 = 0 and S22 = 0 gives 0/0
        let s = SParameterSweep::constant(1, c(1.0, 0.0), c(0.0, 0.0), c(2.0, 0.0), c(0.0, 0.0));
        let result = stability_test(&s, true);
        assert!(result.mu.unwrap()[0].is_nan());
        assert!(!result.is_stable);
    }

    #[test]
    fn test_empty_sweep_is_stable() {
        let s = SParameterSweep::constant(0, c(0.0, 0.0), c(0.0, 0.0), c(0.0, 0.0), c(0.0, 0.0));
        let result = stability_test(&s, true);
        assert!(result.is_stable);
        assert_eq!(result.mu.unwrap().len(), 0);
    }

    #[test]
    fn test_rollett_thru() {
        // Perfect thru: K = 1, |Δ| = 1 -> not unconditionally stable (boundary)
        let s = SParameterSweep::constant(1, c(0.0, 0.0), c(1.0, 0.0), c(1.0, 0.0), c(0.0, 0.0));
        let rollett = rollett_stability(&s);
        assert_relative_eq!(rollett.k[0], 1.0, epsilon = 1e-12);
        assert_relative_eq!(rollett.delta[0], 1.0, epsilon = 1e-12);
        assert!(!rollett.is_unconditionally_stable());
    }

    #[test]
    fn test_rollett_attenuator_is_stable() {
        // Matched 6 dB attenuator
        let s = SParameterSweep::constant(1, c(0.0, 0.0), c(0.5, 0.0), c(0.5, 0.0), c(0.0, 0.0));
        let rollett = rollett_stability(&s);
        // K = (1 + 0.0625) / 0.5
        assert_relative_eq!(rollett.k[0], 2.125, epsilon = 1e-12);
        assert!(rollett.is_unconditionally_stable());
        assert!(stability_test(&s, false).is_stable);
    }
}
