//! Terminated reflection coefficients
//!
//! Reflection seen looking into one port of a two-port while the other port
//! is terminated in a given reflection coefficient.

use ndarray::Array1;
use num_complex::Complex64;

use super::sweep::{ReflectionSweep, SParameterSweep};
use crate::error::{check_len, Result};

/// Input reflection coefficient with port 2 terminated in `gamma_l`
///
/// Γ_in = S11 + S12·S21·Γ_L / (1 - S22·Γ_L)
///
/// A termination with S22·Γ_L = 1 makes the denominator zero; the
/// corresponding point comes back non-finite rather than as an error.
pub fn input_reflection_coefficient(
    s: &SParameterSweep,
    gamma_l: &ReflectionSweep,
) -> Result<Array1<Complex64>> {
    check_len("gamma_l", s.nfreq(), gamma_l.len())?;
    Ok(gamma_in_unchecked(s, gamma_l))
}

/// Output reflection coefficient with port 1 terminated in `gamma_s`
///
/// Γ_out = S22 + S12·S21·Γ_S / (1 - S11·Γ_S)
pub fn output_reflection_coefficient(
    s: &SParameterSweep,
    gamma_s: &ReflectionSweep,
) -> Result<Array1<Complex64>> {
    check_len("gamma_s", s.nfreq(), gamma_s.len())?;
    Ok(gamma_out_unchecked(s, gamma_s))
}

/// Γ_in without the length check, for callers that already validated
pub(crate) fn gamma_in_unchecked(
    s: &SParameterSweep,
    gamma_l: &ReflectionSweep,
) -> Array1<Complex64> {
    let one = Complex64::new(1.0, 0.0);
    Array1::from_shape_fn(s.nfreq(), |f| {
        let (s11, s12, s21, s22) = s.entries(f);
        let gl = gamma_l[f];
        s11 + (s12 * s21 * gl) / (one - s22 * gl)
    })
}

pub(crate) fn gamma_out_unchecked(
    s: &SParameterSweep,
    gamma_s: &ReflectionSweep,
) -> Array1<Complex64> {
    let one = Complex64::new(1.0, 0.0);
    Array1::from_shape_fn(s.nfreq(), |f| {
        let (s11, s12, s21, s22) = s.entries(f);
        let gs = gamma_s[f];
        s22 + (s12 * s21 * gs) / (one - s11 * gs)
    })
}
