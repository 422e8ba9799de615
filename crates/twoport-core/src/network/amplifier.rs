//! Amplifier figures of merit on a 2-port Network
//!
//! Thin wrappers over [`crate::twoport`]. Every call converts the native
//! parameters into a new S-parameter snapshot, so a network that is edited
//! between calls is always analyzed in its current state.

use ndarray::Array1;
use num_complex::Complex64;

use super::core::Network;
use crate::error::Result;
use crate::twoport::{self, CirclePlane, Circles, RollettStability, StabilityResult};

impl Network {
    /// Input reflection coefficient with port 2 terminated in `gamma_l`
    pub fn gamma_in(&self, gamma_l: &Array1<Complex64>) -> Result<Array1<Complex64>> {
        twoport::input_reflection_coefficient(&self.s_parameters()?, gamma_l)
    }

    /// Output reflection coefficient with port 1 terminated in `gamma_s`
    pub fn gamma_out(&self, gamma_s: &Array1<Complex64>) -> Result<Array1<Complex64>> {
        twoport::output_reflection_coefficient(&self.s_parameters()?, gamma_s)
    }

    /// Operating power gain for load `gamma_l`
    pub fn power_gain(&self, gamma_l: &Array1<Complex64>) -> Result<Array1<f64>> {
        twoport::power_gain(&self.s_parameters()?, gamma_l)
    }

    /// Available power gain for source `gamma_s`
    pub fn available_power_gain(&self, gamma_s: &Array1<Complex64>) -> Result<Array1<f64>> {
        twoport::available_power_gain(&self.s_parameters()?, gamma_s)
    }

    /// Transducer power gain for source `gamma_s` and load `gamma_l`
    pub fn transducer_power_gain(
        &self,
        gamma_s: &Array1<Complex64>,
        gamma_l: &Array1<Complex64>,
    ) -> Result<Array1<f64>> {
        twoport::transducer_power_gain(&self.s_parameters()?, gamma_s, gamma_l)
    }

    /// μ-test; see [`twoport::stability_test`]
    pub fn stability_test(&self, return_factor: bool) -> Result<StabilityResult> {
        let s = self.s_parameters()?;
        Ok(twoport::stability_test(&s, return_factor))
    }

    /// Source-side stability factor μ
    pub fn mu(&self) -> Result<Array1<f64>> {
        Ok(twoport::mu_factor(&self.s_parameters()?))
    }

    /// Load-side stability factor μ'
    pub fn mu_prime(&self) -> Result<Array1<f64>> {
        Ok(twoport::mu_prime_factor(&self.s_parameters()?))
    }

    pub fn rollett_stability(&self) -> Result<RollettStability> {
        Ok(twoport::rollett_stability(&self.s_parameters()?))
    }

    pub fn max_stable_gain(&self) -> Result<Array1<f64>> {
        Ok(twoport::max_stable_gain(&self.s_parameters()?))
    }

    pub fn max_available_gain(&self) -> Result<Array1<f64>> {
        Ok(twoport::max_available_gain(&self.s_parameters()?))
    }

    pub fn stability_circle(&self, plane: CirclePlane) -> Result<Circles> {
        Ok(twoport::stability_circle(&self.s_parameters()?, plane))
    }

    pub fn gain_circle(&self, plane: CirclePlane, gain_db: f64) -> Result<Circles> {
        Ok(twoport::gain_circle(&self.s_parameters()?, plane, gain_db))
    }
}
