//! Network parameter transforms into S-parameters
//!
//! Both transforms work for any number of ports and use power-wave
//! normalization with the per-port reference impedance `z0`.

use log::warn;
use ndarray::{s, Array1, Array2, Array3};
use num_complex::Complex64;

use super::linalg::inv_complex;
use crate::error::{Result, TwoPortError};

/// Diagonal matrix of sqrt(z0)
fn sqrt_z0_matrix(z0: &Array1<Complex64>) -> Array2<Complex64> {
    Array2::from_diag(&z0.mapv(|x| x.sqrt()))
}

/// Parameter data must be `[nfreq, n, n]` with one reference impedance per port
fn check_dims(params: &Array3<Complex64>, z0: &Array1<Complex64>) -> Result<usize> {
    let (_, nports, cols) = params.dim();
    if nports != cols {
        return Err(TwoPortError::InvalidShape(params.shape().to_vec()));
    }
    if z0.len() != nports {
        return Err(TwoPortError::ReferenceImpedance {
            nports,
            found: z0.len(),
        });
    }
    Ok(nports)
}

fn nan_matrix(nports: usize) -> Array2<Complex64> {
    Array2::from_elem((nports, nports), Complex64::new(f64::NAN, f64::NAN))
}

/// Convert Z-parameters to S-parameters
///
/// S = F^-1 (Z - Z0) (Z + Z0)^-1 F, with F = diag(sqrt(z0)).
///
/// A frequency at which (Z + Z0) is singular is filled with NaN. Fails if `z`
/// is not square per frequency or `z0` does not have one entry per port.
pub fn z2s(z: &Array3<Complex64>, z0: &Array1<Complex64>) -> Result<Array3<Complex64>> {
    let nports = check_dims(z, z0)?;
    let nfreq = z.dim().0;

    let f_mat = sqrt_z0_matrix(z0);
    let inv_f_mat = Array2::from_diag(&z0.mapv(|x| Complex64::new(1.0, 0.0) / x.sqrt()));
    let z0_diag = Array2::from_diag(z0);

    let mut s = Array3::<Complex64>::zeros((nfreq, nports, nports));
    for f in 0..nfreq {
        let z_f = z.slice(s![f, .., ..]);
        let z_plus_z0 = &z_f + &z0_diag;

        let s_f = match inv_complex(&z_plus_z0.view()) {
            Some(inv) => inv_f_mat.dot(&(&z_f - &z0_diag)).dot(&inv).dot(&f_mat),
            None => {
                warn!("z2s: singular (Z + Z0) at frequency index {}", f);
                nan_matrix(nports)
            }
        };
        s.slice_mut(s![f, .., ..]).assign(&s_f);
    }

    Ok(s)
}

/// Convert Y-parameters to S-parameters
///
/// S = (I - Y') (I + Y')^-1, with the normalized admittance Y' = F Y F.
///
/// A frequency at which (I + Y') is singular is filled with NaN.
pub fn y2s(y: &Array3<Complex64>, z0: &Array1<Complex64>) -> Result<Array3<Complex64>> {
    let nports = check_dims(y, z0)?;
    let nfreq = y.dim().0;

    let f_mat = sqrt_z0_matrix(z0);
    let identity = Array2::<Complex64>::eye(nports);

    let mut s = Array3::<Complex64>::zeros((nfreq, nports, nports));
    for f in 0..nfreq {
        let y_prime = f_mat.dot(&y.slice(s![f, .., ..])).dot(&f_mat);
        let i_plus_y = &identity + &y_prime;

        let s_f = match inv_complex(&i_plus_y.view()) {
            Some(inv) => (&identity - &y_prime).dot(&inv),
            None => {
                warn!("y2s: singular (I + Y') at frequency index {}", f);
                nan_matrix(nports)
            }
        };
        s.slice_mut(s![f, .., ..]).assign(&s_f);
    }

    Ok(s)
}
