//! Power gain definitions for a terminated two-port
//!
//! All gains are linear power ratios. They are not clamped: a non-physical
//! or unstable operating point may give negative or infinite values.

use log::trace;
use ndarray::Array1;
use num_complex::Complex64;

use super::reflection::{gamma_in_unchecked, gamma_out_unchecked};
use super::stability::rollett_k_unchecked;
use super::sweep::{ReflectionSweep, SParameterSweep};
use crate::constants::{NEAR_ZERO, STABILITY_THRESHOLD};
use crate::error::{check_len, Result};

/// Operating power gain G = P_load / P_in
///
/// G = |S21|²·(1 - |Γ_L|²) / [(1 - |Γ_in|²)·|1 - S22·Γ_L|²]
pub fn power_gain(s: &SParameterSweep, gamma_l: &ReflectionSweep) -> Result<Array1<f64>> {
    check_len("gamma_l", s.nfreq(), gamma_l.len())?;
    trace!("power_gain over {} points", s.nfreq());

    let one = Complex64::new(1.0, 0.0);
    let gamma_in = gamma_in_unchecked(s, gamma_l);

    Ok(Array1::from_shape_fn(s.nfreq(), |f| {
        let (_, _, s21, s22) = s.entries(f);
        let gl = gamma_l[f];
        s21.norm_sqr() * (1.0 - gl.norm_sqr())
            / ((1.0 - gamma_in[f].norm_sqr()) * (one - s22 * gl).norm_sqr())
    }))
}

/// Available power gain G_A = P_avn / P_avs
///
/// G_A = |S21|²·(1 - |Γ_S|²) / [|1 - S11·Γ_S|²·(1 - |Γ_out|²)]
///
/// This is the textbook definition. See [`available_power_gain_complex`] for
/// the variant with the complex square of Γ_out in the denominator.
pub fn available_power_gain(s: &SParameterSweep, gamma_s: &ReflectionSweep) -> Result<Array1<f64>> {
    check_len("gamma_s", s.nfreq(), gamma_s.len())?;
    trace!("available_power_gain over {} points", s.nfreq());

    let one = Complex64::new(1.0, 0.0);
    let gamma_out = gamma_out_unchecked(s, gamma_s);

    Ok(Array1::from_shape_fn(s.nfreq(), |f| {
        let (s11, _, s21, _) = s.entries(f);
        let gs = gamma_s[f];
        s21.norm_sqr() * (1.0 - gs.norm_sqr())
            / ((one - s11 * gs).norm_sqr() * (1.0 - gamma_out[f].norm_sqr()))
    }))
}

/// Available power gain with Γ_out² (complex square) in the denominator
///
/// G = |S21|²·(1 - |Γ_S|²) / [|1 - S11·Γ_S|²·(1 - Γ_out²)]
///
/// Agrees with [`available_power_gain`] only where Γ_out is real. Kept for
/// comparison against results produced with that form.
pub fn available_power_gain_complex(
    s: &SParameterSweep,
    gamma_s: &ReflectionSweep,
) -> Result<Array1<Complex64>> {
    check_len("gamma_s", s.nfreq(), gamma_s.len())?;

    let one = Complex64::new(1.0, 0.0);
    let gamma_out = gamma_out_unchecked(s, gamma_s);

    Ok(Array1::from_shape_fn(s.nfreq(), |f| {
        let (s11, _, s21, _) = s.entries(f);
        let gs = gamma_s[f];
        let numerator = s21.norm_sqr() * (1.0 - gs.norm_sqr());
        Complex64::new(numerator, 0.0)
            / ((one - gamma_out[f] * gamma_out[f]) * (one - s11 * gs).norm_sqr())
    }))
}

/// Transducer power gain G_T = P_load / P_avs
///
/// G_T = |S21|²·(1 - |Γ_S|²)·(1 - |Γ_L|²) / [|1 - Γ_S·Γ_in|²·|1 - S22·Γ_L|²]
pub fn transducer_power_gain(
    s: &SParameterSweep,
    gamma_s: &ReflectionSweep,
    gamma_l: &ReflectionSweep,
) -> Result<Array1<f64>> {
    check_len("gamma_s", s.nfreq(), gamma_s.len())?;
    check_len("gamma_l", s.nfreq(), gamma_l.len())?;
    trace!("transducer_power_gain over {} points", s.nfreq());

    let one = Complex64::new(1.0, 0.0);
    let gamma_in = gamma_in_unchecked(s, gamma_l);

    Ok(Array1::from_shape_fn(s.nfreq(), |f| {
        let (_, _, s21, s22) = s.entries(f);
        let (gs, gl) = (gamma_s[f], gamma_l[f]);
        s21.norm_sqr() * (1.0 - gs.norm_sqr()) * (1.0 - gl.norm_sqr())
            / ((one - gs * gamma_in[f]).norm_sqr() * (one - s22 * gl).norm_sqr())
    }))
}

/// Maximum Stable Gain (MSG)
///
/// MSG = |S21| / |S12|, infinite for a unilateral device.
/// Only meaningful where the device is potentially unstable (K < 1).
pub fn max_stable_gain(s: &SParameterSweep) -> Array1<f64> {
    Array1::from_shape_fn(s.nfreq(), |f| {
        let (_, s12, s21, _) = s.entries(f);
        if s12.norm() > NEAR_ZERO {
            s21.norm() / s12.norm()
        } else {
            f64::INFINITY
        }
    })
}

/// Maximum Available Gain (MAG)
///
/// MAG = MSG·(K - sqrt(K² - 1)) where K > 1; falls back to MSG elsewhere.
/// A unilateral device gets |S21|² / [(1 - |S11|²)(1 - |S22|²)].
pub fn max_available_gain(s: &SParameterSweep) -> Array1<f64> {
    let k = rollett_k_unchecked(s);
    let msg = max_stable_gain(s);

    Array1::from_shape_fn(s.nfreq(), |f| {
        let (s11, s12, s21, s22) = s.entries(f);
        if s12.norm() <= NEAR_ZERO {
            // K diverges here, so MSG·(K - sqrt(K² - 1)) is inf·0
            s21.norm_sqr() / ((1.0 - s11.norm_sqr()) * (1.0 - s22.norm_sqr()))
        } else if k[f] > STABILITY_THRESHOLD {
            msg[f] * (k[f] - (k[f] * k[f] - 1.0).sqrt())
        } else {
            msg[f]
        }
    })
}
