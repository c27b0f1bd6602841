use thiserror::Error;
use witness::WitnessError;

use crate::color::Color;

/// Errors from coin arithmetic. All are fatal to the calling evaluation;
/// the same inputs always reproduce the same error.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum CoinError {
    #[error("colors must be the same")]
    ColorMismatch { left: Color, right: Color },
    #[error("result would be negative")]
    NegativeResult,
    #[error("division by zero")]
    DivisionByZero,
    /// A witness came back that does not satisfy its law.
    #[error("witness rejected: {0}")]
    Witness(#[source] WitnessError),
    #[error("invalid 32-byte hex literal `{0}`")]
    InvalidHex(String),
}

impl From<WitnessError> for CoinError {
    fn from(err: WitnessError) -> Self {
        match err {
            WitnessError::DivisionByZero => CoinError::DivisionByZero,
            other => CoinError::Witness(other),
        }
    }
}
