//! Stability Tests
//!
//! Tests for the μ-test, μ', Rollett K and stability circles over
//! multi-point sweeps.

use approx::assert_relative_eq;
use ndarray::{Array1, Array3};
use num_complex::Complex64;
use std::f64::consts::PI;
use twoport_core::twoport::{
    mu_factor, mu_prime_factor, rollett_stability, stability_circle, stability_test, CirclePlane,
    SParameterSweep,
};

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn c(re: f64, im: f64) -> Complex64 {
    Complex64::new(re, im)
}

/// Synthetic FET-like sweep: gain rolls off, feedback grows with frequency
fn create_fet_sweep(nfreq: usize) -> SParameterSweep {
    let mut s = Array3::<Complex64>::zeros((nfreq, 2, 2));
    for f in 0..nfreq {
        let x = f as f64 / nfreq.max(1) as f64;
        s[[f, 0, 0]] = Complex64::from_polar(0.9 - 0.3 * x, -PI * (0.2 + 0.6 * x));
        s[[f, 0, 1]] = Complex64::from_polar(0.02 + 0.08 * x, PI * (0.4 - 0.2 * x));
        s[[f, 1, 0]] = Complex64::from_polar(5.0 - 3.0 * x, PI * (0.9 - 0.5 * x));
        s[[f, 1, 1]] = Complex64::from_polar(0.6 - 0.2 * x, -PI * (0.1 + 0.3 * x));
    }
    SParameterSweep::new(s).unwrap()
}

// ============================================================================
// μ-test
// ============================================================================

#[test]
fn test_unilateral_matched_amplifier_is_stable() {
    init_logging();
    // s12 = 0, |s11| < 1, |s22| < 1, arbitrary s21
    let n = 16;
    let s11 = Array1::from_shape_fn(n, |f| {
        Complex64::from_polar(0.2 + 0.04 * f as f64, 0.3 * f as f64)
    });
    let s22 = Array1::from_shape_fn(n, |f| {
        Complex64::from_polar(0.7 - 0.03 * f as f64, -0.2 * f as f64)
    });
    let s21 = Array1::from_shape_fn(n, |f| {
        Complex64::from_polar(10.0 / (1.0 + f as f64), 1.1 * f as f64)
    });
    let s12 = Array1::<Complex64>::zeros(n);
    let s = SParameterSweep::from_parts(&s11, &s12, &s21, &s22).unwrap();

    let result = stability_test(&s, true);
    assert!(result.is_stable);
    for &mu in result.mu.unwrap().iter() {
        assert!(mu > 1.0, "mu = {}", mu);
    }
}

#[test]
fn test_single_bad_point_makes_sweep_unstable() {
    init_logging();
    let n = 8;
    let mut s = Array3::<Complex64>::zeros((n, 2, 2));
    for f in 0..n {
        // Matched 6 dB attenuator: μ = 4
        s[[f, 0, 1]] = c(0.5, 0.0);
        s[[f, 1, 0]] = c(0.5, 0.0);
    }
    // Point 5: reflective, high-gain, with feedback
    s[[5, 0, 0]] = c(0.9, 0.0);
    s[[5, 1, 1]] = c(0.9, 0.0);
    s[[5, 0, 1]] = c(0.3, 0.0);
    s[[5, 1, 0]] = c(2.0, 0.0);
    let s = SParameterSweep::new(s).unwrap();

    let result = stability_test(&s, true);
    assert!(!result.is_stable);

    let mu = result.mu.unwrap();
    for f in 0..n {
        if f == 5 {
            assert!(mu[f] <= 1.0);
        } else {
            assert_relative_eq!(mu[f], 4.0, epsilon = 1e-12);
        }
    }
}

#[test]
fn test_mu_invariant_under_global_phase() {
    let s = create_fet_sweep(25);
    let mu = mu_factor(&s);

    for theta in [0.1_f64, 1.3, -2.2, PI] {
        let rotated = s.rotated(Complex64::from_polar(1.0, theta));
        let mu_rot = mu_factor(&rotated);
        for f in 0..s.nfreq() {
            assert_relative_eq!(mu_rot[f], mu[f], max_relative = 1e-12);
        }
    }
}

#[test]
fn test_mu_verdict_matches_rollett() {
    // μ > 1  <=>  K > 1 and |Δ| < 1
    let s = create_fet_sweep(40);
    let mu = mu_factor(&s);
    let mu_prime = mu_prime_factor(&s);
    let rollett = rollett_stability(&s);

    for f in 0..s.nfreq() {
        let rollett_stable = rollett.k[f] > 1.0 && rollett.delta[f] < 1.0;
        assert_eq!(mu[f] > 1.0, rollett_stable, "frequency index {}", f);
        assert_eq!(mu[f] > 1.0, mu_prime[f] > 1.0, "frequency index {}", f);
    }
}

#[test]
fn test_stability_test_without_factor() {
    let s = create_fet_sweep(10);
    let result = stability_test(&s, false);
    assert!(result.mu.is_none());
    assert_eq!(result.is_stable, mu_factor(&s).iter().all(|&m| m > 1.0));
}

#[test]
fn test_empty_sweep() {
    let s = SParameterSweep::new(Array3::zeros((0, 2, 2))).unwrap();
    let result = stability_test(&s, true);
    assert!(result.is_stable);
    assert!(result.mu.unwrap().is_empty());
    assert!(mu_prime_factor(&s).is_empty());
    assert!(rollett_stability(&s).is_unconditionally_stable());
}

// ============================================================================
// Stability circles
// ============================================================================

#[test]
fn test_source_stability_circle_maps_to_unit_gamma_out() {
    let s = create_fet_sweep(12);
    let circles = stability_circle(&s, CirclePlane::Source);

    for f in 0..s.nfreq() {
        if !circles.radii[f].is_finite() {
            continue;
        }
        let (s11, s12, s21, s22) = {
            let m = s.at(f);
            (m[[0, 0]], m[[0, 1]], m[[1, 0]], m[[1, 1]])
        };
        for angle in [0.0_f64, 2.0, 4.0] {
            let gs = circles.centers[f] + Complex64::from_polar(circles.radii[f], angle);
            let gamma_out = s22 + s12 * s21 * gs / (c(1.0, 0.0) - s11 * gs);
            assert_relative_eq!(gamma_out.norm(), 1.0, max_relative = 1e-8);
        }
    }
}
