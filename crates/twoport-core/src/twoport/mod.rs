//! Two-port amplifier analysis
//!
//! Stateless functions over a frequency sweep of 2x2 S-parameter matrices:
//! terminated reflection coefficients, power gains, stability tests and
//! Smith-chart circles. Every formula is applied independently at each
//! frequency index.
//!
//! Functions that take a reflection-coefficient sweep check that it has the
//! same length as the S-parameter sweep and return
//! [`TwoPortError::LengthMismatch`](crate::error::TwoPortError::LengthMismatch)
//! otherwise. Degenerate denominators produce non-finite values, not errors.
//!
//! # Example
//! ```
//! use ndarray::array;
//! use num_complex::Complex64;
//! use twoport_core::twoport::{power_gain, stability_test, SParameterSweep};
//!
//! let zero = Complex64::new(0.0, 0.0);
//! let s = SParameterSweep::constant(1, zero, zero, Complex64::new(2.0, 0.0), zero);
//!
//! let g = power_gain(&s, &array![zero]).unwrap();
//! assert_eq!(g[0], 4.0);
//!
//! let stability = stability_test(&s, true);
//! assert!(stability.is_stable);
//! ```

mod circles;
mod gain;
mod reflection;
mod stability;
mod sweep;

pub use circles::{gain_circle, stability_circle, CirclePlane, Circles};
pub use gain::{
    available_power_gain, available_power_gain_complex, max_available_gain, max_stable_gain,
    power_gain, transducer_power_gain,
};
pub use reflection::{input_reflection_coefficient, output_reflection_coefficient};
pub use stability::{
    mu_factor, mu_prime_factor, rollett_stability, stability_test, RollettStability,
    StabilityResult,
};
pub use sweep::{ReflectionSweep, SParameterSweep};
