//! Division witnesses.
//!
//! Each computer reconstructs its operands as `BigUint`, divides natively,
//! and decomposes quotient and remainder into limbs. Both results are never
//! larger than the dividend, so they always fit the operand width.

use limbs::{DivResultU128, DivResultU256, Width, U128, U256};
use num_bigint::BigUint;
use num_integer::Integer;
use num_traits::Zero;
use tracing::trace;

use crate::error::WitnessError;

fn div_rem_native(
    a: &BigUint,
    b: &BigUint,
    width: Width,
) -> Result<(BigUint, BigUint), WitnessError> {
    if b.is_zero() {
        return Err(WitnessError::DivisionByZero);
    }
    debug_assert!(
        width.fits(a) && width.fits(b),
        "{width} division witness called with {}-bit and {}-bit operands",
        a.bits(),
        b.bits()
    );
    let (quotient, remainder) = a.div_rem(b);
    trace!(
        %width,
        dividend_bits = a.bits(),
        divisor_bits = b.bits(),
        "division witness computed"
    );
    Ok((quotient, remainder))
}

fn pack_u128((quotient, remainder): (BigUint, BigUint)) -> DivResultU128 {
    DivResultU128 {
        quotient: U128::from_biguint(&quotient),
        remainder: U128::from_biguint(&remainder),
    }
}

fn pack_u256((quotient, remainder): (BigUint, BigUint)) -> DivResultU256 {
    DivResultU256 {
        quotient: U256::from_biguint(&quotient),
        remainder: U256::from_biguint(&remainder),
    }
}

/// Floor division of operands up to 128 bits.
///
/// ```
/// use num_bigint::BigUint;
/// use witness::div_uint128_locally;
///
/// let r = div_uint128_locally(&BigUint::from(7u32), &BigUint::from(3u32)).unwrap();
/// assert_eq!(r.quotient.to_u128(), 2);
/// assert_eq!(r.remainder.to_u128(), 1);
/// ```
pub fn div_uint128_locally(a: &BigUint, b: &BigUint) -> Result<DivResultU128, WitnessError> {
    div_rem_native(a, b, Width::W128).map(pack_u128)
}

/// [`div_uint128_locally`] over limb-typed operands.
pub fn div_u128_locally(a: U128, b: U128) -> Result<DivResultU128, WitnessError> {
    div_uint128_locally(&a.to_biguint(), &b.to_biguint())
}

/// Floor division of operands up to 254 bits (scalar-field sized).
///
/// The full quotient and remainder are decomposed, including the upper
/// `U128` half, so operands above 2^128 divide correctly.
pub fn div_uint254_locally(a: &BigUint, b: &BigUint) -> Result<DivResultU256, WitnessError> {
    div_rem_native(a, b, Width::W254).map(pack_u256)
}

/// Floor division of operands up to 256 bits.
pub fn div_uint256_locally(a: &BigUint, b: &BigUint) -> Result<DivResultU256, WitnessError> {
    div_rem_native(a, b, Width::W256).map(pack_u256)
}

/// [`div_uint256_locally`] over limb-typed operands.
pub fn div_u256_locally(a: U256, b: U256) -> Result<DivResultU256, WitnessError> {
    div_uint256_locally(&a.to_biguint(), &b.to_biguint())
}

#[cfg(test)]
mod tests {
    use super::*;
    use num_traits::One;

    fn big(v: u128) -> BigUint {
        BigUint::from(v)
    }

    #[test]
    fn test_div_uint128_basic() {
        let r = div_uint128_locally(&big(100), &big(50)).unwrap();
        assert_eq!(r.quotient, U128::from(2u64));
        assert_eq!(r.remainder, U128::ZERO);
    }

    #[test]
    fn test_div_uint128_by_zero() {
        assert_eq!(
            div_uint128_locally(&big(1), &BigUint::zero()),
            Err(WitnessError::DivisionByZero)
        );
    }

    #[test]
    fn test_div_uint128_max_operands() {
        let r = div_uint128_locally(&big(u128::MAX), &big(u128::MAX)).unwrap();
        assert_eq!(r.quotient, U128::from(1u64));
        assert!(r.remainder.is_zero());

        let r = div_uint128_locally(&big(u128::MAX), &big(2)).unwrap();
        assert_eq!(r.quotient.to_u128(), u128::MAX / 2);
        assert_eq!(r.remainder, U128::from(1u64));
    }

    #[test]
    fn test_div_u128_agrees_with_native() {
        let a = U128::new(0xdead_beef, 0x1234);
        let b = U128::new(0x10_0000, 0);
        let r = div_u128_locally(a, b).unwrap();
        assert_eq!(r.quotient.to_u128(), a.to_u128() / b.to_u128());
        assert_eq!(r.remainder.to_u128(), a.to_u128() % b.to_u128());
    }

    #[test]
    fn test_div_u128_by_zero() {
        assert_eq!(
            div_u128_locally(U128::from(9u64), U128::ZERO),
            Err(WitnessError::DivisionByZero)
        );
    }

    #[test]
    fn test_div_uint254_keeps_upper_half() {
        // 2^200 / 3 has a quotient well above 2^128.
        let a = BigUint::one() << 200u32;
        let b = big(3);
        let r = div_uint254_locally(&a, &b).unwrap();
        assert!(!r.quotient.high.is_zero());
        assert_eq!(r.quotient.to_biguint(), &a / &b);
        assert_eq!(r.remainder.to_biguint(), &a % &b);
    }

    #[test]
    fn test_div_uint256_full_width() {
        let a = U256::MAX.to_biguint();
        let b = (BigUint::one() << 255u32) + 1u32;
        let r = div_uint256_locally(&a, &b).unwrap();
        assert_eq!(r.quotient, U256::from(1u64));
        assert_eq!(r.remainder.to_biguint(), &a - &b);
    }

    #[test]
    fn test_div_u256_small_divisor_large_dividend() {
        let a = U256::from_limbs([5, 0, 0, 1]);
        let r = div_u256_locally(a, U256::from(1u64 << 32)).unwrap();
        assert_eq!(r.quotient, U256::from_limbs([0, 0, 1 << 32, 0]));
        assert_eq!(r.remainder, U256::from(5u64));
    }

    #[test]
    fn test_divisor_larger_than_dividend() {
        let r = div_uint256_locally(&big(3), &big(7)).unwrap();
        assert!(r.quotient.is_zero());
        assert_eq!(r.remainder, U256::from(3u64));
    }

    #[test]
    fn test_deterministic() {
        let a = (BigUint::one() << 250u32) + 12345u32;
        let b = big(987_654_321);
        assert_eq!(
            div_uint254_locally(&a, &b).unwrap(),
            div_uint254_locally(&a, &b).unwrap()
        );
    }
}
