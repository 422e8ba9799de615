//! Python bindings for twoport-core
//!
//! This module exposes the two-port amplifier analysis to Python via PyO3.
//!
//! ## Functions
//!
//! - `input_reflection_coefficient`, `output_reflection_coefficient`
//! - `power_gain`, `available_power_gain`, `transducer_power_gain`
//! - `stability_test`, `mu_factor`, `max_available_gain`

use pyo3::prelude::*;

mod analysis;

use analysis::{
    available_power_gain, input_reflection_coefficient, max_available_gain, mu_factor,
    output_reflection_coefficient, power_gain, stability_test, transducer_power_gain,
};

/// twoport_python - two-port amplifier analysis in Rust
///
/// Example:
///     >>> import numpy as np
///     >>> import twoport_python as tp
///     >>> s = np.zeros((1, 2, 2), dtype=complex)
///     >>> s[:, 1, 0] = 2.0
///     >>> tp.power_gain(s, np.zeros(1, dtype=complex))
///     array([4.])
#[pymodule]
fn twoport_python(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(input_reflection_coefficient, m)?)?;
    m.add_function(wrap_pyfunction!(output_reflection_coefficient, m)?)?;
    m.add_function(wrap_pyfunction!(power_gain, m)?)?;
    m.add_function(wrap_pyfunction!(available_power_gain, m)?)?;
    m.add_function(wrap_pyfunction!(transducer_power_gain, m)?)?;
    m.add_function(wrap_pyfunction!(stability_test, m)?)?;
    m.add_function(wrap_pyfunction!(mu_factor, m)?)?;
    m.add_function(wrap_pyfunction!(max_available_gain, m)?)?;

    m.add("__version__", env!("CARGO_PKG_VERSION"))?;

    Ok(())
}
