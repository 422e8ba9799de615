//! Numerical constants for RF calculations

/// Tolerance for detecting near-zero values in division and singularity checks.
///
/// Only the supplementary metrics (MSG/MAG, Rollett K, circle geometry) use
/// it. The core gain and reflection formulas divide unguarded.
pub const NEAR_ZERO: f64 = 1e-15;

/// Threshold above which μ, μ' and Rollett K certify unconditional stability.
pub const STABILITY_THRESHOLD: f64 = 1.0;
