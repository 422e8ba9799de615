//! Power-ratio <-> dB conversions used for gain values

/// Convert a power ratio to dB (10*log10(g))
pub fn mag_2_db10(g: f64) -> f64 {
    10.0 * g.log10()
}

/// Convert dB to a power ratio (10^(dB/10))
pub fn db10_2_mag(db: f64) -> f64 {
    10.0_f64.powf(db / 10.0)
}
