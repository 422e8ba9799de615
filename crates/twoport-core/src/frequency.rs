//! Frequency axis carried by a [`Network`](crate::network::Network).
//!
//! The two-port analysis never reads it; it only travels alongside the
//! parameter data so callers can label their results.

use std::str::FromStr;

/// Frequency unit
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FrequencyUnit {
    Hz,
    KHz,
    MHz,
    #[default]
    GHz,
    THz,
}

impl FrequencyUnit {
    /// Multiplier to convert to Hz
    pub fn multiplier(&self) -> f64 {
        match self {
            FrequencyUnit::Hz => 1.0,
            FrequencyUnit::KHz => 1e3,
            FrequencyUnit::MHz => 1e6,
            FrequencyUnit::GHz => 1e9,
            FrequencyUnit::THz => 1e12,
        }
    }
}

impl FromStr for FrequencyUnit {
    type Err = String;

    /// Case-insensitive, e.g. `"ghz"`, `"MHz"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "hz" => Ok(FrequencyUnit::Hz),
            "khz" => Ok(FrequencyUnit::KHz),
            "mhz" => Ok(FrequencyUnit::MHz),
            "ghz" => Ok(FrequencyUnit::GHz),
            "thz" => Ok(FrequencyUnit::THz),
            other => Err(format!("unknown frequency unit '{}'", other)),
        }
    }
}

#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SweepType {
    #[default]
    Linear,
    Log,
}

/// An ordered set of frequency points, stored in Hz
#[derive(Debug, Clone, PartialEq)]
pub struct Frequency {
    f: Vec<f64>,
    unit: FrequencyUnit,
}

impl Frequency {
    /// Create a sweep of `npoints` points from `start` to `stop` (inclusive).
    ///
    /// # Example
    /// ```
    /// use twoport_core::frequency::{Frequency, FrequencyUnit, SweepType};
    /// let freq = Frequency::new(1.0, 10.0, 10, FrequencyUnit::GHz, SweepType::Linear);
    /// assert_eq!(freq.npoints(), 10);
    /// ```
    pub fn new(
        start: f64,
        stop: f64,
        npoints: usize,
        unit: FrequencyUnit,
        sweep_type: SweepType,
    ) -> Self {
        let mult = unit.multiplier();
        let (start_hz, stop_hz) = (start * mult, stop * mult);

        let f = match (npoints, sweep_type) {
            (0, _) => Vec::new(),
            (1, _) => vec![start_hz],
            (n, SweepType::Linear) => {
                let step = (stop_hz - start_hz) / (n - 1) as f64;
                (0..n).map(|i| start_hz + i as f64 * step).collect()
            }
            (n, SweepType::Log) => {
                let (log_start, log_stop) = (start_hz.ln(), stop_hz.ln());
                let step = (log_stop - log_start) / (n - 1) as f64;
                (0..n)
                    .map(|i| (log_start + i as f64 * step).exp())
                    .collect()
            }
        };

        Self { f, unit }
    }

    /// Wrap an existing vector of frequencies already expressed in Hz
    pub fn from_hz(f: Vec<f64>) -> Self {
        Self {
            f,
            unit: FrequencyUnit::Hz,
        }
    }

    /// Frequency points in Hz
    #[inline]
    pub fn f(&self) -> &[f64] {
        &self.f
    }

    /// Frequency points in the display unit
    pub fn f_scaled(&self) -> Vec<f64> {
        let mult = self.unit.multiplier();
        self.f.iter().map(|&x| x / mult).collect()
    }

    #[inline]
    pub fn npoints(&self) -> usize {
        self.f.len()
    }

    #[inline]
    pub fn unit(&self) -> FrequencyUnit {
        self.unit
    }

    /// First point in Hz (0 for an empty axis)
    pub fn start(&self) -> f64 {
        self.f.first().copied().unwrap_or(0.0)
    }

    /// Last point in Hz (0 for an empty axis)
    pub fn stop(&self) -> f64 {
        self.f.last().copied().unwrap_or(0.0)
    }
}
