//! Witness computation for coin division and integer square roots.
//!
//! The computers in [`div`] and [`sqrt`] run outside the constrained
//! evaluation path and return results in limb form. They do not check
//! themselves: the checkers in [`verify`] re-derive the numeric laws
//! (`q * b + r == a`, `r < b`, `root^2 <= n < (root + 1)^2`) so the caller
//! can assert them independently.

pub mod div;
pub mod error;
pub mod sqrt;
pub mod verify;

pub use div::{
    div_u128_locally, div_u256_locally, div_uint128_locally, div_uint254_locally,
    div_uint256_locally,
};
pub use error::WitnessError;
pub use sqrt::{sqrt_u128_locally, sqrt_u256_locally, sqrt_uint_locally};
pub use verify::{verify_div, verify_div_u128, verify_div_u256, verify_sqrt};
