//! Frequency-swept two-port S-parameter data

use ndarray::{s, Array1, Array3, ArrayView1, ArrayView2};
use num_complex::Complex64;

use crate::error::{check_len, Result, TwoPortError};

/// Reflection coefficient per frequency point (source or load termination).
///
/// Magnitudes are not validated: active terminations are legal inputs.
pub type ReflectionSweep = Array1<Complex64>;

/// A sweep of 2x2 S-parameter matrices, shape `[nfreq, 2, 2]`
///
/// Entry `[k, i, j]` is S<sub>(i+1)(j+1)</sub> at frequency index `k`.
/// Only the shape is validated; passive, active and unstable networks are all
/// accepted.
#[derive(Debug, Clone, PartialEq)]
pub struct SParameterSweep {
    s: Array3<Complex64>,
}

impl SParameterSweep {
    /// Wrap an `[nfreq, 2, 2]` array
    pub fn new(s: Array3<Complex64>) -> Result<Self> {
        let shape = s.shape();
        if shape[1] != 2 || shape[2] != 2 {
            return Err(TwoPortError::InvalidShape(shape.to_vec()));
        }
        Ok(Self { s })
    }

    /// Assemble a sweep from the four per-frequency parameter vectors
    pub fn from_parts(
        s11: &ReflectionSweep,
        s12: &Array1<Complex64>,
        s21: &Array1<Complex64>,
        s22: &ReflectionSweep,
    ) -> Result<Self> {
        let nfreq = s11.len();
        check_len("s12", nfreq, s12.len())?;
        check_len("s21", nfreq, s21.len())?;
        check_len("s22", nfreq, s22.len())?;

        let s = Array3::from_shape_fn((nfreq, 2, 2), |(f, i, j)| match (i, j) {
            (0, 0) => s11[f],
            (0, 1) => s12[f],
            (1, 0) => s21[f],
            _ => s22[f],
        });
        Ok(Self { s })
    }

    /// Same S matrix repeated over `nfreq` points
    pub fn constant(
        nfreq: usize,
        s11: Complex64,
        s12: Complex64,
        s21: Complex64,
        s22: Complex64,
    ) -> Self {
        let s = Array3::from_shape_fn((nfreq, 2, 2), |(_, i, j)| match (i, j) {
            (0, 0) => s11,
            (0, 1) => s12,
            (1, 0) => s21,
            _ => s22,
        });
        Self { s }
    }

    /// Number of frequency points
    #[inline]
    pub fn nfreq(&self) -> usize {
        self.s.shape()[0]
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nfreq() == 0
    }

    #[inline]
    pub fn s11(&self) -> ArrayView1<'_, Complex64> {
        self.s.slice(s![.., 0, 0])
    }

    #[inline]
    pub fn s12(&self) -> ArrayView1<'_, Complex64> {
        self.s.slice(s![.., 0, 1])
    }

    #[inline]
    pub fn s21(&self) -> ArrayView1<'_, Complex64> {
        self.s.slice(s![.., 1, 0])
    }

    #[inline]
    pub fn s22(&self) -> ArrayView1<'_, Complex64> {
        self.s.slice(s![.., 1, 1])
    }

    /// The 2x2 matrix at frequency index `f`
    pub fn at(&self, f: usize) -> ArrayView2<'_, Complex64> {
        self.s.slice(s![f, .., ..])
    }

    /// (s11, s12, s21, s22) at frequency index `f`
    #[inline]
    pub(crate) fn entries(&self, f: usize) -> (Complex64, Complex64, Complex64, Complex64) {
        (
            self.s[[f, 0, 0]],
            self.s[[f, 0, 1]],
            self.s[[f, 1, 0]],
            self.s[[f, 1, 1]],
        )
    }

    /// Determinant Δ = s11*s22 - s12*s21 per frequency
    pub fn determinant(&self) -> Array1<Complex64> {
        Array1::from_shape_fn(self.nfreq(), |f| {
            let (s11, s12, s21, s22) = self.entries(f);
            s11 * s22 - s12 * s21
        })
    }

    /// Same network with every parameter multiplied by `rotation`
    pub fn rotated(&self, rotation: Complex64) -> Self {
        Self {
            s: self.s.mapv(|x| x * rotation),
        }
    }

    /// Borrow the underlying `[nfreq, 2, 2]` array
    pub fn as_array(&self) -> &Array3<Complex64> {
        &self.s
    }

    pub fn into_array(self) -> Array3<Complex64> {
        self.s
    }
}

impl TryFrom<Array3<Complex64>> for SParameterSweep {
    type Error = TwoPortError;

    fn try_from(s: Array3<Complex64>) -> Result<Self> {
        Self::new(s)
    }
}
