//! 32-byte opaque identifiers: asset `Color` and coin `Nonce`.
//!
//! Neither is ever read as a number. `Color` orders lexicographically by
//! byte, index 0 most significant, which is what canonical pair ordering
//! relies on.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::CoinError;

fn write_hex(f: &mut fmt::Formatter<'_>, bytes: &[u8; 32]) -> fmt::Result {
    for b in bytes {
        write!(f, "{b:02x}")?;
    }
    Ok(())
}

fn parse_hex(s: &str) -> Option<[u8; 32]> {
    let hex = s.strip_prefix("0x").unwrap_or(s);
    if hex.len() != 64 || !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }
    let mut out = [0u8; 32];
    for (i, byte) in out.iter_mut().enumerate() {
        *byte = u8::from_str_radix(&hex[2 * i..2 * i + 2], 16).ok()?;
    }
    Some(out)
}

/// Asset-type identifier.
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Color([u8; 32]);

impl Color {
    pub const fn new(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    #[inline]
    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    /// Parse exactly 64 hex digits, with or without a `0x` prefix.
    ///
    /// ```
    /// use coin::Color;
    ///
    /// let c = Color::from_hex_str(&format!("02{}", "00".repeat(31))).unwrap();
    /// assert_eq!(c.as_bytes()[0], 0x02);
    /// assert!(Color::from_hex_str("02").is_err());
    /// ```
    pub fn from_hex_str(s: &str) -> Result<Self, CoinError> {
        parse_hex(s)
            .map(Self)
            .ok_or_else(|| CoinError::InvalidHex(s.to_string()))
    }
}

impl From<[u8; 32]> for Color {
    fn from(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }
}

impl fmt::Debug for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Color(0x")?;
        write_hex(f, &self.0)?;
        f.write_str(")")
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("0x")?;
        write_hex(f, &self.0)
    }
}

/// Per-coin randomness. Carried through arithmetic untouched.
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Nonce([u8; 32]);

impl Nonce {
    pub const fn new(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    #[inline]
    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    pub fn from_hex_str(s: &str) -> Result<Self, CoinError> {
        parse_hex(s)
            .map(Self)
            .ok_or_else(|| CoinError::InvalidHex(s.to_string()))
    }
}

impl From<[u8; 32]> for Nonce {
    fn from(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }
}

impl fmt::Debug for Nonce {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Nonce(0x")?;
        write_hex(f, &self.0)?;
        f.write_str(")")
    }
}

impl fmt::Display for Nonce {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("0x")?;
        write_hex(f, &self.0)
    }
}
