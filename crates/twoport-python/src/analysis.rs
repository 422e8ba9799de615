//! Python bindings for the two-port analysis functions
//!
//! Every function takes `s` as a complex array of shape `[N, 2, 2]` and
//! reflection coefficients as complex arrays of shape `[N]`.

use ndarray::Array1;
use num_complex::Complex64;
use numpy::{IntoPyArray, PyArray1, PyReadonlyArray1, PyReadonlyArray3};
use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;
use twoport_core::twoport::{self, SParameterSweep};
use twoport_core::TwoPortError;

fn to_py_err(e: TwoPortError) -> PyErr {
    PyValueError::new_err(e.to_string())
}

fn sweep(s: PyReadonlyArray3<'_, Complex64>) -> PyResult<SParameterSweep> {
    SParameterSweep::new(s.as_array().to_owned()).map_err(to_py_err)
}

fn gamma(g: PyReadonlyArray1<'_, Complex64>) -> Array1<Complex64> {
    g.as_array().to_owned()
}

/// Input reflection coefficient with port 2 terminated in `gamma_l`
///
/// Args:
///     s: S-parameters [N, 2, 2]
///     gamma_l: Load reflection coefficient [N]
///
/// Returns:
///     Complex array [N]
#[pyfunction]
pub fn input_reflection_coefficient<'py>(
    py: Python<'py>,
    s: PyReadonlyArray3<'py, Complex64>,
    gamma_l: PyReadonlyArray1<'py, Complex64>,
) -> PyResult<Bound<'py, PyArray1<Complex64>>> {
    twoport::input_reflection_coefficient(&sweep(s)?, &gamma(gamma_l))
        .map(|g| g.into_pyarray(py))
        .map_err(to_py_err)
}

/// Output reflection coefficient with port 1 terminated in `gamma_s`
#[pyfunction]
pub fn output_reflection_coefficient<'py>(
    py: Python<'py>,
    s: PyReadonlyArray3<'py, Complex64>,
    gamma_s: PyReadonlyArray1<'py, Complex64>,
) -> PyResult<Bound<'py, PyArray1<Complex64>>> {
    twoport::output_reflection_coefficient(&sweep(s)?, &gamma(gamma_s))
        .map(|g| g.into_pyarray(py))
        .map_err(to_py_err)
}

/// Operating power gain (linear) for load `gamma_l`
#[pyfunction]
pub fn power_gain<'py>(
    py: Python<'py>,
    s: PyReadonlyArray3<'py, Complex64>,
    gamma_l: PyReadonlyArray1<'py, Complex64>,
) -> PyResult<Bound<'py, PyArray1<f64>>> {
    twoport::power_gain(&sweep(s)?, &gamma(gamma_l))
        .map(|g| g.into_pyarray(py))
        .map_err(to_py_err)
}

/// Available power gain (linear) for source `gamma_s`
#[pyfunction]
pub fn available_power_gain<'py>(
    py: Python<'py>,
    s: PyReadonlyArray3<'py, Complex64>,
    gamma_s: PyReadonlyArray1<'py, Complex64>,
) -> PyResult<Bound<'py, PyArray1<f64>>> {
    twoport::available_power_gain(&sweep(s)?, &gamma(gamma_s))
        .map(|g| g.into_pyarray(py))
        .map_err(to_py_err)
}

/// Transducer power gain (linear) for source `gamma_s` and load `gamma_l`
#[pyfunction]
pub fn transducer_power_gain<'py>(
    py: Python<'py>,
    s: PyReadonlyArray3<'py, Complex64>,
    gamma_s: PyReadonlyArray1<'py, Complex64>,
    gamma_l: PyReadonlyArray1<'py, Complex64>,
) -> PyResult<Bound<'py, PyArray1<f64>>> {
    twoport::transducer_power_gain(&sweep(s)?, &gamma(gamma_s), &gamma(gamma_l))
        .map(|g| g.into_pyarray(py))
        .map_err(to_py_err)
}

/// Edwards-Sinsky μ-test
///
/// Args:
///     s: S-parameters [N, 2, 2]
///     return_factor: Also return the μ array (default: False)
///
/// Returns:
///     (is_stable, mu) where mu is None unless return_factor is set
#[pyfunction]
#[pyo3(signature = (s, return_factor=false))]
pub fn stability_test<'py>(
    py: Python<'py>,
    s: PyReadonlyArray3<'py, Complex64>,
    return_factor: bool,
) -> PyResult<(bool, Option<Bound<'py, PyArray1<f64>>>)> {
    let result = twoport::stability_test(&sweep(s)?, return_factor);
    Ok((result.is_stable, result.mu.map(|mu| mu.into_pyarray(py))))
}

/// Stability factor μ per frequency point
#[pyfunction]
pub fn mu_factor<'py>(
    py: Python<'py>,
    s: PyReadonlyArray3<'py, Complex64>,
) -> PyResult<Bound<'py, PyArray1<f64>>> {
    Ok(twoport::mu_factor(&sweep(s)?).into_pyarray(py))
}

/// Maximum available gain (linear) per frequency point
#[pyfunction]
pub fn max_available_gain<'py>(
    py: Python<'py>,
    s: PyReadonlyArray3<'py, Complex64>,
) -> PyResult<Bound<'py, PyArray1<f64>>> {
    Ok(twoport::max_available_gain(&sweep(s)?).into_pyarray(py))
}
