//! `U128` and `U256`: unsigned integers composed from 64-bit limbs.
//!
//! `U128 { low, high }` represents `high * 2^64 + low`.
//! `U256 { low, high }` represents `high * 2^128 + low`, each half a `U128`.
//!
//! Conversion from `BigUint` masks each limb to 64 bits and shifts for the
//! next. A value wider than the target is a defect in the caller's width
//! choice: the unchecked constructors `debug_assert!` on it, the `try_`
//! variants report it as [`LimbError::TooWide`].

use std::cmp::Ordering;
use std::fmt;

use num_bigint::BigUint;
use num_traits::ToPrimitive;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::width::Width;

const LIMB_MASK: u64 = 0xFFFF_FFFF_FFFF_FFFF;

/// Errors from checked limb conversion and parsing.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum LimbError {
    #[error("value needs {bits} bits, wider than {width}")]
    TooWide { bits: u64, width: Width },
    #[error("invalid hex literal `{0}`")]
    InvalidHex(String),
}

// ============================================================================
// Low-level helpers
// ============================================================================

/// Split off the least significant limb: `(value & MASK, value >> 64)`.
#[inline]
fn take_limb(value: &BigUint) -> (u64, BigUint) {
    let low = (value & &BigUint::from(LIMB_MASK))
        .to_u64()
        .unwrap_or_default();
    (low, value >> 64u32)
}

fn check_fits(value: &BigUint, width: Width) -> Result<(), LimbError> {
    if width.fits(value) {
        Ok(())
    } else {
        Err(LimbError::TooWide {
            bits: value.bits(),
            width,
        })
    }
}

/// Strip an optional `0x` prefix and validate hex digits and length.
fn hex_digits(s: &str, max_chars: usize) -> Result<&str, LimbError> {
    let hex = s.strip_prefix("0x").unwrap_or(s);
    if hex.is_empty() || hex.len() > max_chars || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(LimbError::InvalidHex(s.to_string()));
    }
    Ok(hex)
}

// ============================================================================
// U128
// ============================================================================

/// 128-bit unsigned integer as two 64-bit limbs.
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct U128 {
    pub low: u64,
    pub high: u64,
}

impl U128 {
    pub const ZERO: Self = Self { low: 0, high: 0 };
    pub const MAX: Self = Self {
        low: u64::MAX,
        high: u64::MAX,
    };

    #[inline]
    pub const fn new(low: u64, high: u64) -> Self {
        Self { low, high }
    }

    /// Construct from limbs in little-endian order.
    #[inline]
    pub const fn from_limbs(limbs: [u64; 2]) -> Self {
        Self {
            low: limbs[0],
            high: limbs[1],
        }
    }

    /// Limbs in little-endian order (`limbs()[0]` is least significant).
    #[inline]
    pub const fn limbs(&self) -> [u64; 2] {
        [self.low, self.high]
    }

    #[inline]
    pub const fn to_u128(self) -> u128 {
        ((self.high as u128) << 64) | self.low as u128
    }

    #[inline]
    pub fn is_zero(&self) -> bool {
        self.low == 0 && self.high == 0
    }

    /// Number of significant bits (0 for zero).
    #[inline]
    pub fn bits(&self) -> u64 {
        u64::from(128 - self.to_u128().leading_zeros())
    }

    /// `high << 64 | low`.
    ///
    /// ```
    /// use limbs::U128;
    /// use num_bigint::BigUint;
    ///
    /// let v = U128::new(5, 1);
    /// assert_eq!(v.to_biguint(), (BigUint::from(1u32) << 64u32) + 5u32);
    /// ```
    pub fn to_biguint(&self) -> BigUint {
        (BigUint::from(self.high) << 64u32) | BigUint::from(self.low)
    }

    /// Decompose `value` into two limbs. Bits above 128 are a caller defect.
    pub fn from_biguint(value: &BigUint) -> Self {
        debug_assert!(
            Width::W128.fits(value),
            "U128::from_biguint truncates a {}-bit value",
            value.bits()
        );
        let (low, rest) = take_limb(value);
        let (high, _) = take_limb(&rest);
        Self { low, high }
    }

    /// Checked decomposition; fails instead of dropping high bits.
    pub fn try_from_biguint(value: &BigUint) -> Result<Self, LimbError> {
        check_fits(value, Width::W128)?;
        Ok(Self::from_biguint(value))
    }

    pub fn to_be_bytes(&self) -> [u8; 16] {
        self.to_u128().to_be_bytes()
    }

    pub fn from_be_bytes(bytes: [u8; 16]) -> Self {
        u128::from_be_bytes(bytes).into()
    }

    /// Minimal lowercase hex, no prefix.
    pub fn to_hex_string(&self) -> String {
        format!("{:x}", self.to_u128())
    }

    /// Parse hex with or without a `0x` prefix, at most 32 digits.
    pub fn from_hex_str(s: &str) -> Result<Self, LimbError> {
        let hex = hex_digits(s, 32)?;
        u128::from_str_radix(hex, 16)
            .map(Self::from)
            .map_err(|_| LimbError::InvalidHex(s.to_string()))
    }
}

impl From<u64> for U128 {
    fn from(value: u64) -> Self {
        Self::new(value, 0)
    }
}

impl From<u128> for U128 {
    fn from(value: u128) -> Self {
        Self::new(value as u64, (value >> 64) as u64)
    }
}

impl From<U128> for u128 {
    fn from(value: U128) -> Self {
        value.to_u128()
    }
}

impl TryFrom<&BigUint> for U128 {
    type Error = LimbError;

    fn try_from(value: &BigUint) -> Result<Self, Self::Error> {
        Self::try_from_biguint(value)
    }
}

impl Ord for U128 {
    fn cmp(&self, other: &Self) -> Ordering {
        self.high
            .cmp(&other.high)
            .then_with(|| self.low.cmp(&other.low))
    }
}

impl PartialOrd for U128 {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Debug for U128 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "U128(0x{})", self.to_hex_string())
    }
}

impl fmt::Display for U128 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{}", self.to_hex_string())
    }
}

// ============================================================================
// U256
// ============================================================================

/// 256-bit unsigned integer as two `U128` halves.
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct U256 {
    pub low: U128,
    pub high: U128,
}

impl U256 {
    pub const ZERO: Self = Self {
        low: U128::ZERO,
        high: U128::ZERO,
    };
    pub const MAX: Self = Self {
        low: U128::MAX,
        high: U128::MAX,
    };

    #[inline]
    pub const fn new(low: U128, high: U128) -> Self {
        Self { low, high }
    }

    /// Construct from limbs in little-endian order.
    ///
    /// ```
    /// use limbs::{U128, U256};
    ///
    /// let v = U256::from_limbs([1, 2, 3, 4]);
    /// assert_eq!(v.low, U128::new(1, 2));
    /// assert_eq!(v.high, U128::new(3, 4));
    /// assert_eq!(v.limbs(), [1, 2, 3, 4]);
    /// ```
    #[inline]
    pub const fn from_limbs(limbs: [u64; 4]) -> Self {
        Self {
            low: U128::new(limbs[0], limbs[1]),
            high: U128::new(limbs[2], limbs[3]),
        }
    }

    #[inline]
    pub const fn limbs(&self) -> [u64; 4] {
        [self.low.low, self.low.high, self.high.low, self.high.high]
    }

    #[inline]
    pub fn is_zero(&self) -> bool {
        self.low.is_zero() && self.high.is_zero()
    }

    pub fn bits(&self) -> u64 {
        if self.high.is_zero() {
            self.low.bits()
        } else {
            128 + self.high.bits()
        }
    }

    /// `high << 128 | low`.
    pub fn to_biguint(&self) -> BigUint {
        (self.high.to_biguint() << 128u32) | self.low.to_biguint()
    }

    /// Decompose `value` into four limbs. Bits above 256 are a caller defect.
    pub fn from_biguint(value: &BigUint) -> Self {
        debug_assert!(
            Width::W256.fits(value),
            "U256::from_biguint truncates a {}-bit value",
            value.bits()
        );
        let mut limbs = [0u64; 4];
        let mut rest = value.clone();
        for limb in limbs.iter_mut() {
            let (l, next) = take_limb(&rest);
            *limb = l;
            rest = next;
        }
        Self::from_limbs(limbs)
    }

    /// Checked decomposition; fails instead of dropping high bits.
    pub fn try_from_biguint(value: &BigUint) -> Result<Self, LimbError> {
        check_fits(value, Width::W256)?;
        Ok(Self::from_biguint(value))
    }

    pub fn to_be_bytes(&self) -> [u8; 32] {
        let mut bytes = [0u8; 32];
        bytes[..16].copy_from_slice(&self.high.to_be_bytes());
        bytes[16..].copy_from_slice(&self.low.to_be_bytes());
        bytes
    }

    pub fn from_be_bytes(bytes: [u8; 32]) -> Self {
        let mut high = [0u8; 16];
        let mut low = [0u8; 16];
        high.copy_from_slice(&bytes[..16]);
        low.copy_from_slice(&bytes[16..]);
        Self::new(U128::from_be_bytes(low), U128::from_be_bytes(high))
    }

    /// Minimal lowercase hex, no prefix.
    pub fn to_hex_string(&self) -> String {
        if self.high.is_zero() {
            self.low.to_hex_string()
        } else {
            format!("{:x}{:032x}", self.high.to_u128(), self.low.to_u128())
        }
    }

    /// Parse hex with or without a `0x` prefix, at most 64 digits.
    pub fn from_hex_str(s: &str) -> Result<Self, LimbError> {
        let hex = hex_digits(s, 64)?;
        let padded = format!("{:0>64}", hex);
        let high = U128::from_hex_str(&padded[..32])?;
        let low = U128::from_hex_str(&padded[32..])?;
        Ok(Self::new(low, high))
    }
}

impl From<U128> for U256 {
    fn from(low: U128) -> Self {
        Self::new(low, U128::ZERO)
    }
}

impl From<u128> for U256 {
    fn from(value: u128) -> Self {
        U128::from(value).into()
    }
}

impl From<u64> for U256 {
    fn from(value: u64) -> Self {
        U128::from(value).into()
    }
}

impl TryFrom<&BigUint> for U256 {
    type Error = LimbError;

    fn try_from(value: &BigUint) -> Result<Self, Self::Error> {
        Self::try_from_biguint(value)
    }
}

impl Ord for U256 {
    fn cmp(&self, other: &Self) -> Ordering {
        self.high
            .cmp(&other.high)
            .then_with(|| self.low.cmp(&other.low))
    }
}

impl PartialOrd for U256 {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Debug for U256 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "U256(0x{})", self.to_hex_string())
    }
}

impl fmt::Display for U256 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{}", self.to_hex_string())
    }
}

// ============================================================================
// Division results
// ============================================================================

/// Quotient and remainder of a 128-bit division witness.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DivResultU128 {
    pub quotient: U128,
    pub remainder: U128,
}

/// Quotient and remainder of a 254/256-bit division witness.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DivResultU256 {
    pub quotient: U256,
    pub remainder: U256,
}

// ============================================================================
// Tests
// ============================================================================
