//! Network module - N-port electrical network representation
//!
//! Holds parameter data in its native format (S, Z or Y) and converts it to
//! S-parameters for the two-port analysis.

mod amplifier;
mod core;

pub use self::core::{Network, ParameterType};
