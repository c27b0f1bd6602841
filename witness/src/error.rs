use num_bigint::BigUint;
use thiserror::Error;

/// Errors from computing or checking a witness.
///
/// `DivisionByZero` is the only error a computer returns. The remaining
/// variants come from the checkers and name the law the witness broke.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum WitnessError {
    #[error("division by zero")]
    DivisionByZero,
    #[error("division witness breaks q * b + r == a: {quotient} * {divisor} + {remainder} != {dividend}")]
    DivisionLaw {
        dividend: BigUint,
        divisor: BigUint,
        quotient: BigUint,
        remainder: BigUint,
    },
    #[error("division witness remainder {remainder} is not below divisor {divisor}")]
    RemainderOutOfRange { remainder: BigUint, divisor: BigUint },
    #[error("square root witness {root} squared exceeds radicand {radicand}")]
    SqrtLowerBound { radicand: BigUint, root: BigUint },
    #[error("square root witness {root} is below the floor root of {radicand}")]
    SqrtUpperBound { radicand: BigUint, root: BigUint },
}
