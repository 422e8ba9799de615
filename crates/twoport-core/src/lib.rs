//! twoport-core: two-port amplifier figures of merit
//!
//! Computes reflection coefficients, power gains and stability metrics for a
//! two-port network described by a frequency sweep of S-parameters.
//!
//! ## Modules
//!
//! - `twoport` - Reflection, gain, stability and circle formulas (the analysis)
//! - `network` - N-port network representation and conversion to S-parameters
//! - `frequency` - Frequency axis carried by a network
//! - `math` - Parameter transforms, linear algebra, dB conversions
//! - `error` - Error type

pub mod constants;
pub mod error;
pub mod frequency;
pub mod math;
pub mod network;
pub mod twoport;

pub use error::{Result, TwoPortError};
pub use frequency::Frequency;
pub use network::{Network, ParameterType};
pub use twoport::{SParameterSweep, StabilityResult};
