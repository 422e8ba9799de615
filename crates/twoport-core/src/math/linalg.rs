//! Linear algebra helpers
//!
//! All ndarray <-> nalgebra conversions are kept in this file so the rest of
//! the crate only ever sees ndarray types.

use nalgebra::DMatrix;
use ndarray::{Array2, ArrayView2};
use num_complex::Complex64;

#[inline]
fn to_na_complex(a: &ArrayView2<'_, Complex64>) -> DMatrix<Complex64> {
    let (m, n) = a.dim();
    DMatrix::from_fn(m, n, |i, j| a[[i, j]])
}

#[inline]
fn from_na_complex(m: &DMatrix<Complex64>) -> Array2<Complex64> {
    Array2::from_shape_fn((m.nrows(), m.ncols()), |(i, j)| m[(i, j)])
}

/// Invert a complex matrix
///
/// Returns None if the matrix is singular, empty or non-square.
pub fn inv_complex(a: &ArrayView2<'_, Complex64>) -> Option<Array2<Complex64>> {
    let (m, n) = a.dim();
    if m != n || m == 0 {
        return None;
    }

    to_na_complex(a)
        .try_inverse()
        .map(|inv| from_na_complex(&inv))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use ndarray::array;

    #[test]
    fn test_inv_complex_2x2() {
        let a = array![
            [Complex64::new(2.0, 0.0), Complex64::new(0.0, 1.0)],
            [Complex64::new(0.0, -1.0), Complex64::new(3.0, 0.0)],
        ];
        let inv = inv_complex(&a.view()).unwrap();
        let prod = a.dot(&inv);

        for i in 0..2 {
            for j in 0..2 {
                let expected = if i == j { 1.0 } else { 0.0 };
                assert_relative_eq!(prod[[i, j]].re, expected, epsilon = 1e-12);
                assert_relative_eq!(prod[[i, j]].im, 0.0, epsilon = 1e-12);
            }
        }
    }

    #[test]
    fn test_inv_complex_singular() {
        let one = Complex64::new(1.0, 0.0);
        let a = array![[one, one], [one, one]];
        assert!(inv_complex(&a.view()).is_none());
    }

    #[test]
    fn test_inv_complex_non_square() {
        let a = Array2::<Complex64>::zeros((2, 3));
        assert!(inv_complex(&a.view()).is_none());
    }
}
