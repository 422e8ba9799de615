//! Core Network struct and constructors
//!
//! A `Network` stores its parameters in whatever format they were measured
//! or simulated in. S-parameters are derived on request and never cached.

use log::debug;
use ndarray::{Array1, Array3};
use num_complex::Complex64;

use crate::error::{Result, TwoPortError};
use crate::frequency::Frequency;
use crate::math::transforms::{y2s, z2s};
use crate::twoport::SParameterSweep;

/// Native parameter format of a network
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ParameterType {
    /// Scattering parameters
    #[default]
    S,
    /// Impedance parameters, in ohms
    Z,
    /// Admittance parameters, in siemens
    Y,
}

/// An N-port electrical network
#[derive(Debug, Clone)]
pub struct Network {
    /// Frequency data
    pub frequency: Frequency,
    /// Parameter data [nfreq, nports, nports] in `param_type` format
    pub params: Array3<Complex64>,
    /// Format of `params`
    pub param_type: ParameterType,
    /// Reference impedance (per port)
    pub z0: Array1<Complex64>,
    /// Network name
    pub name: Option<String>,
}

impl Network {
    /// Create a network from S-parameters
    pub fn new(frequency: Frequency, s: Array3<Complex64>, z0: Array1<Complex64>) -> Result<Self> {
        Self::from_params(frequency, s, ParameterType::S, z0)
    }

    /// Create a network from parameters in any supported format
    ///
    /// Fails if the data is not `[nfreq, n, n]`, or if the frequency axis or
    /// `z0` do not line up with it.
    pub fn from_params(
        frequency: Frequency,
        params: Array3<Complex64>,
        param_type: ParameterType,
        z0: Array1<Complex64>,
    ) -> Result<Self> {
        let (nfreq, rows, cols) = params.dim();
        if rows != cols {
            return Err(TwoPortError::InvalidShape(params.shape().to_vec()));
        }
        if frequency.npoints() != nfreq {
            return Err(TwoPortError::FrequencyMismatch {
                expected: nfreq,
                found: frequency.npoints(),
            });
        }
        if z0.len() != rows {
            return Err(TwoPortError::ReferenceImpedance {
                nports: rows,
                found: z0.len(),
            });
        }

        Ok(Self {
            frequency,
            params,
            param_type,
            z0,
            name: None,
        })
    }

    /// Attach a display name
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Get the number of ports
    #[inline]
    pub fn nports(&self) -> usize {
        self.params.shape()[1]
    }

    /// Get the number of frequency points
    #[inline]
    pub fn nfreq(&self) -> usize {
        self.params.shape()[0]
    }

    /// Frequency vector in Hz
    pub fn f(&self) -> &[f64] {
        self.frequency.f()
    }

    /// S-parameters [nfreq, nports, nports], converted from the native format
    ///
    /// Always returns a fresh array; mutating it does not touch the network.
    /// `params` and `z0` are public, so Z/Y conversion re-checks that they
    /// still agree on the port count.
    pub fn s(&self) -> Result<Array3<Complex64>> {
        match self.param_type {
            ParameterType::S => Ok(self.params.clone()),
            ParameterType::Z => {
                debug!("converting {}-port Z-parameters to S", self.nports());
                z2s(&self.params, &self.z0)
            }
            ParameterType::Y => {
                debug!("converting {}-port Y-parameters to S", self.nports());
                y2s(&self.params, &self.z0)
            }
        }
    }

    /// Fresh two-port S-parameter snapshot for the analysis functions
    ///
    /// Fails with [`TwoPortError::NotTwoPort`] for any other port count.
    pub fn s_parameters(&self) -> Result<SParameterSweep> {
        if self.nports() != 2 {
            return Err(TwoPortError::NotTwoPort(self.nports()));
        }
        SParameterSweep::new(self.s()?)
    }
}
