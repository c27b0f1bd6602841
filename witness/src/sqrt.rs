//! Integer square-root witnesses: the floor of the real root.

use limbs::{Width, U128, U256};
use num_bigint::BigUint;
use num_integer::Roots;
use tracing::trace;

fn floor_sqrt(radicand: &BigUint, width: Option<Width>) -> BigUint {
    let root = Roots::sqrt(radicand);
    match width {
        Some(width) => trace!(%width, radicand_bits = radicand.bits(), "sqrt witness computed"),
        None => trace!(radicand_bits = radicand.bits(), "unbounded sqrt witness computed"),
    }
    root
}

/// Floor square root of a 128-bit radicand.
///
/// ```
/// use limbs::U128;
/// use num_bigint::BigUint;
/// use witness::sqrt_u128_locally;
///
/// assert_eq!(sqrt_u128_locally(U128::from(15u64)), BigUint::from(3u32));
/// assert_eq!(sqrt_u128_locally(U128::ZERO), BigUint::from(0u32));
/// ```
pub fn sqrt_u128_locally(radicand: U128) -> BigUint {
    floor_sqrt(&radicand.to_biguint(), Some(Width::W128))
}

/// Floor square root of a 256-bit radicand.
pub fn sqrt_u256_locally(radicand: U256) -> BigUint {
    floor_sqrt(&radicand.to_biguint(), Some(Width::W256))
}

/// Floor square root of a radicand of any size.
pub fn sqrt_uint_locally(radicand: &BigUint) -> BigUint {
    floor_sqrt(radicand, None)
}
