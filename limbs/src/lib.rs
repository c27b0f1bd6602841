//! Limb model for the coin arithmetic core.
//!
//! Unsigned integers wider than a machine word are carried as 64-bit limbs:
//! [`U128`] is two limbs, [`U256`] is two [`U128`] halves. Both convert
//! losslessly to and from [`num_bigint::BigUint`] when the value fits.

pub mod uint;
pub mod width;

pub use uint::{DivResultU128, DivResultU256, LimbError, U128, U256};
pub use width::Width;
