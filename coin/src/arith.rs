//! Same-asset arithmetic over coins.
//!
//! Every binary operation fails with [`CoinError::ColorMismatch`] unless both
//! operands share a color, and the result keeps the first operand's identity
//! fields. Division and square roots are computed by the narrowest witness
//! that fits the operands and checked against their laws before use.

use limbs::{Width, U128, U256};
use num_bigint::BigUint;
use num_integer::Integer;
use num_traits::Zero;
use tracing::trace;
use witness::{
    div_uint128_locally, div_uint254_locally, div_uint256_locally, sqrt_u128_locally,
    sqrt_u256_locally, sqrt_uint_locally, verify_div, verify_div_u128, verify_div_u256,
    verify_sqrt,
};

use crate::error::CoinError;
use crate::info::Coin;

/// Quotient and remainder coins, both carrying the dividend's identity.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DivRem<C> {
    pub quotient: C,
    pub remainder: C,
}

pub(crate) fn ensure_same_color<C: Coin>(a: &C, b: &C) -> Result<(), CoinError> {
    if a.color() != b.color() {
        return Err(CoinError::ColorMismatch {
            left: *a.color(),
            right: *b.color(),
        });
    }
    Ok(())
}

// ============================================================================
// Witnessed primitives
// ============================================================================

/// Floor division through the narrowest fitting witness, checked.
fn witnessed_div_rem(a: &BigUint, b: &BigUint) -> Result<(BigUint, BigUint), CoinError> {
    if b.is_zero() {
        return Err(CoinError::DivisionByZero);
    }
    let result = match Width::narrowest(&[a, b]) {
        Some(Width::W128) => {
            let w = div_uint128_locally(a, b)?;
            verify_div_u128(a, b, &w)?;
            (w.quotient.to_biguint(), w.remainder.to_biguint())
        }
        Some(width) => {
            let w = if width == Width::W254 {
                div_uint254_locally(a, b)?
            } else {
                div_uint256_locally(a, b)?
            };
            verify_div_u256(a, b, &w)?;
            (w.quotient.to_biguint(), w.remainder.to_biguint())
        }
        None => {
            trace!(
                dividend_bits = a.bits(),
                divisor_bits = b.bits(),
                "division wider than any witness"
            );
            let (q, r) = a.div_rem(b);
            verify_div(a, b, &q, &r)?;
            (q, r)
        }
    };
    Ok(result)
}

/// Floor square root through the narrowest fitting witness, checked.
fn witnessed_sqrt(radicand: &BigUint) -> Result<BigUint, CoinError> {
    let root = match Width::narrowest(&[radicand]) {
        Some(Width::W128) => sqrt_u128_locally(U128::from_biguint(radicand)),
        Some(_) => sqrt_u256_locally(U256::from_biguint(radicand)),
        None => sqrt_uint_locally(radicand),
    };
    verify_sqrt(radicand, &root)?;
    Ok(root)
}

// ============================================================================
// Operations
// ============================================================================

/// `a.value + b.value`.
pub fn add<C: Coin>(a: &C, b: &C) -> Result<C, CoinError> {
    ensure_same_color(a, b)?;
    Ok(a.with_value(a.value() + b.value()))
}

/// `a.value - b.value`; never wraps or saturates.
pub fn sub<C: Coin>(a: &C, b: &C) -> Result<C, CoinError> {
    ensure_same_color(a, b)?;
    if b.value() > a.value() {
        return Err(CoinError::NegativeResult);
    }
    Ok(a.with_value(a.value() - b.value()))
}

/// `a.value * b.value`.
pub fn mul<C: Coin>(a: &C, b: &C) -> Result<C, CoinError> {
    ensure_same_color(a, b)?;
    Ok(a.with_value(a.value() * b.value()))
}

/// Floor quotient and remainder, both as coins with `a`'s identity.
pub fn div_rem<C: Coin>(a: &C, b: &C) -> Result<DivRem<C>, CoinError> {
    ensure_same_color(a, b)?;
    let (quotient, remainder) = witnessed_div_rem(a.value(), b.value())?;
    Ok(DivRem {
        quotient: a.with_value(quotient),
        remainder: a.with_value(remainder),
    })
}

/// Floor `a.value / b.value`.
pub fn div<C: Coin>(a: &C, b: &C) -> Result<C, CoinError> {
    div_rem(a, b).map(|r| r.quotient)
}

/// `a.value % b.value`.
pub fn rem<C: Coin>(a: &C, b: &C) -> Result<C, CoinError> {
    div_rem(a, b).map(|r| r.remainder)
}

/// Floor of the real square root of `a.value`.
pub fn sqrt<C: Coin>(a: &C) -> Result<C, CoinError> {
    let root = witnessed_sqrt(a.value())?;
    Ok(a.with_value(root))
}

/// The coin with the smaller value; `a` on a tie.
pub fn min<C: Coin>(a: &C, b: &C) -> Result<C, CoinError> {
    ensure_same_color(a, b)?;
    Ok(if b.value() < a.value() { b.clone() } else { a.clone() })
}

/// The coin with the larger value; `a` on a tie.
pub fn max<C: Coin>(a: &C, b: &C) -> Result<C, CoinError> {
    ensure_same_color(a, b)?;
    Ok(if b.value() > a.value() { b.clone() } else { a.clone() })
}
