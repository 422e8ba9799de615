//! Stability and constant-gain circles on the Smith chart

use ndarray::Array1;
use num_complex::Complex64;

use super::sweep::SParameterSweep;
use crate::constants::NEAR_ZERO;
use crate::math::conversions::db10_2_mag;

/// Termination plane a circle is drawn in
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CirclePlane {
    /// Γ_S plane (port 1 termination)
    Source,
    /// Γ_L plane (port 2 termination)
    Load,
}

/// One circle per frequency point
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct Circles {
    pub centers: Array1<Complex64>,
    pub radii: Array1<f64>,
}

/// Stability circle: terminations in `plane` that put the opposite port's
/// reflection magnitude exactly at 1
///
/// Load:   C_L = (S22 - Δ·S11*)* / (|S22|² - |Δ|²),  R_L = |S12·S21| / ||S22|² - |Δ|²|
/// Source: C_S = (S11 - Δ·S22*)* / (|S11|² - |Δ|²),  R_S = |S12·S21| / ||S11|² - |Δ|²|
///
/// Where the denominator vanishes the circle degenerates into a straight
/// line; such points get a NaN center and an infinite radius.
pub fn stability_circle(s: &SParameterSweep, plane: CirclePlane) -> Circles {
    let nfreq = s.nfreq();
    let mut centers = Array1::<Complex64>::zeros(nfreq);
    let mut radii = Array1::<f64>::zeros(nfreq);

    for f in 0..nfreq {
        let (s11, s12, s21, s22) = s.entries(f);
        let delta = s11 * s22 - s12 * s21;

        let (s_pp, s_qq) = match plane {
            CirclePlane::Load => (s22, s11),
            CirclePlane::Source => (s11, s22),
        };

        let denom = s_pp.norm_sqr() - delta.norm_sqr();
        if denom.abs() > NEAR_ZERO {
            centers[f] = (s_pp - delta * s_qq.conj()).conj() / denom;
            radii[f] = (s12 * s21).norm() / denom.abs();
        } else {
            centers[f] = Complex64::new(f64::NAN, f64::NAN);
            radii[f] = f64::INFINITY;
        }
    }

    Circles { centers, radii }
}

/// Constant-gain circle for `gain_db`
///
/// - [`CirclePlane::Load`]: operating power gain circle in the Γ_L plane
/// - [`CirclePlane::Source`]: available power gain circle in the Γ_S plane
///
/// With g = G/|S21|², C_p = S_pp - Δ·S_qq* and D = 1 + g(|S_pp|² - |Δ|²):
/// center = g·C_p* / D,
/// radius = sqrt(1 - g(1 - |S11|² - |S22|² + |Δ|²) + g²|S12·S21|²) / |D|.
///
/// A gain above what the device can deliver gives a NaN radius.
pub fn gain_circle(s: &SParameterSweep, plane: CirclePlane, gain_db: f64) -> Circles {
    let nfreq = s.nfreq();
    let gain = db10_2_mag(gain_db);
    let mut centers = Array1::<Complex64>::zeros(nfreq);
    let mut radii = Array1::<f64>::zeros(nfreq);

    for f in 0..nfreq {
        let (s11, s12, s21, s22) = s.entries(f);
        let delta = s11 * s22 - s12 * s21;

        let (s_pp, s_qq) = match plane {
            CirclePlane::Load => (s22, s11),
            CirclePlane::Source => (s11, s22),
        };

        // Normalized gain
        let g = gain / s21.norm_sqr();
        let c_p = s_pp - delta * s_qq.conj();
        let denom = 1.0 + g * (s_pp.norm_sqr() - delta.norm_sqr());

        // 2K|S12·S21| written out so unilateral devices stay finite
        let two_k_s12s21 = 1.0 - s11.norm_sqr() - s22.norm_sqr() + delta.norm_sqr();
        let r_sq = 1.0 - g * two_k_s12s21 + g * g * (s12 * s21).norm_sqr();

        centers[f] = g * c_p.conj() / denom;
        radii[f] = r_sq.sqrt() / denom.abs();
    }

    Circles { centers, radii }
}
