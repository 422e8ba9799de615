//! Error type shared by the network collaborator and the two-port analysis.

use thiserror::Error;

/// Errors raised on malformed input.
///
/// Numerically degenerate inputs (a zero denominator, an unstable operating
/// point) are not errors: they surface as non-finite values in the result.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum TwoPortError {
    #[error("length mismatch: S-parameter sweep has {expected} points but {name} has {found}")]
    LengthMismatch {
        name: &'static str,
        expected: usize,
        found: usize,
    },

    #[error("invalid parameter shape {0:?}: expected [nfreq, nports, nports]")]
    InvalidShape(Vec<usize>),

    #[error("two-port analysis requires a 2-port network, got {0} ports")]
    NotTwoPort(usize),

    #[error("reference impedance has {found} entries but the network has {nports} ports")]
    ReferenceImpedance { nports: usize, found: usize },

    #[error("frequency axis has {found} points but the parameter data has {expected}")]
    FrequencyMismatch { expected: usize, found: usize },
}

pub type Result<T> = std::result::Result<T, TwoPortError>;

/// Fail fast when a per-frequency argument does not line up with the S sweep.
pub(crate) fn check_len(name: &'static str, expected: usize, found: usize) -> Result<()> {
    if expected != found {
        return Err(TwoPortError::LengthMismatch {
            name,
            expected,
            found,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_len() {
        assert!(check_len("gamma_l", 3, 3).is_ok());
        assert_eq!(
            check_len("gamma_l", 3, 2),
            Err(TwoPortError::LengthMismatch {
                name: "gamma_l",
                expected: 3,
                found: 2
            })
        );
    }

    #[test]
    fn test_error_display() {
        let err = TwoPortError::LengthMismatch {
            name: "gamma_s",
            expected: 10,
            found: 9,
        };
        assert_eq!(
            err.to_string(),
            "length mismatch: S-parameter sweep has 10 points but gamma_s has 9"
        );
        assert_eq!(
            TwoPortError::NotTwoPort(3).to_string(),
            "two-port analysis requires a 2-port network, got 3 ports"
        );
    }
}
