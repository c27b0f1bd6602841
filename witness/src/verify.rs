//! Independent checks for division and square-root witnesses.
//!
//! These re-derive the algebraic laws from the claimed result and never call
//! the computers, so a faulty or adversarial witness is caught here.

use limbs::{DivResultU128, DivResultU256};
use num_bigint::BigUint;
use num_traits::Zero;

use crate::error::WitnessError;

/// Check `quotient * divisor + remainder == dividend` and `remainder < divisor`.
///
/// ```
/// use num_bigint::BigUint;
/// use witness::{verify_div, WitnessError};
///
/// let n = |v: u32| BigUint::from(v);
/// assert!(verify_div(&n(7), &n(3), &n(2), &n(1)).is_ok());
/// assert!(matches!(
///     verify_div(&n(7), &n(3), &n(1), &n(4)),
///     Err(WitnessError::RemainderOutOfRange { .. })
/// ));
/// ```
pub fn verify_div(
    dividend: &BigUint,
    divisor: &BigUint,
    quotient: &BigUint,
    remainder: &BigUint,
) -> Result<(), WitnessError> {
    if divisor.is_zero() {
        return Err(WitnessError::DivisionByZero);
    }
    if remainder >= divisor {
        return Err(WitnessError::RemainderOutOfRange {
            remainder: remainder.clone(),
            divisor: divisor.clone(),
        });
    }
    if quotient * divisor + remainder != *dividend {
        return Err(WitnessError::DivisionLaw {
            dividend: dividend.clone(),
            divisor: divisor.clone(),
            quotient: quotient.clone(),
            remainder: remainder.clone(),
        });
    }
    Ok(())
}

pub fn verify_div_u128(
    dividend: &BigUint,
    divisor: &BigUint,
    result: &DivResultU128,
) -> Result<(), WitnessError> {
    verify_div(
        dividend,
        divisor,
        &result.quotient.to_biguint(),
        &result.remainder.to_biguint(),
    )
}

pub fn verify_div_u256(
    dividend: &BigUint,
    divisor: &BigUint,
    result: &DivResultU256,
) -> Result<(), WitnessError> {
    verify_div(
        dividend,
        divisor,
        &result.quotient.to_biguint(),
        &result.remainder.to_biguint(),
    )
}

/// Check `root^2 <= radicand < (root + 1)^2`.
pub fn verify_sqrt(radicand: &BigUint, root: &BigUint) -> Result<(), WitnessError> {
    if root * root > *radicand {
        return Err(WitnessError::SqrtLowerBound {
            radicand: radicand.clone(),
            root: root.clone(),
        });
    }
    let next = root.clone() + 1u32;
    if &next * &next <= *radicand {
        return Err(WitnessError::SqrtUpperBound {
            radicand: radicand.clone(),
            root: root.clone(),
        });
    }
    Ok(())
}
