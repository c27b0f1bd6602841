//! Coin data model: `CoinInfo`, `QualifiedCoinInfo`, and the `Coin` trait
//! that lets arithmetic and comparison treat both the same way.

use num_bigint::BigUint;
use serde::{Deserialize, Serialize};

use crate::color::{Color, Nonce};

/// Shared view of a coin for the arithmetic and comparison engines.
pub trait Coin: Clone {
    fn color(&self) -> &Color;

    fn value(&self) -> &BigUint;

    /// A copy of `self` carrying `value`. Nonce, color and any location
    /// fields are kept as they are.
    fn with_value(&self, value: BigUint) -> Self;

    /// Whether two coins sit at the same location. Plain coins have no
    /// location, so this is always true for them.
    fn same_location(&self, other: &Self) -> bool;
}

/// An amount `value` of asset `color`.
///
/// The derived `PartialEq` is structural and includes `nonce`; coin-level
/// equality (color and value only) is [`crate::compare::eq`].
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CoinInfo {
    pub nonce: Nonce,
    pub color: Color,
    #[serde(with = "crate::decimal")]
    pub value: BigUint,
}

impl CoinInfo {
    pub fn new(nonce: Nonce, color: Color, value: impl Into<BigUint>) -> Self {
        Self {
            nonce,
            color,
            value: value.into(),
        }
    }
}

impl Coin for CoinInfo {
    #[inline]
    fn color(&self) -> &Color {
        &self.color
    }

    #[inline]
    fn value(&self) -> &BigUint {
        &self.value
    }

    fn with_value(&self, value: BigUint) -> Self {
        Self {
            nonce: self.nonce,
            color: self.color,
            value,
        }
    }

    fn same_location(&self, _other: &Self) -> bool {
        true
    }
}

/// A coin located at `mt_index` in an external commitment tree.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct QualifiedCoinInfo {
    pub nonce: Nonce,
    pub color: Color,
    #[serde(with = "crate::decimal")]
    pub value: BigUint,
    #[serde(with = "crate::decimal")]
    pub mt_index: BigUint,
}

impl QualifiedCoinInfo {
    pub fn new(
        nonce: Nonce,
        color: Color,
        value: impl Into<BigUint>,
        mt_index: impl Into<BigUint>,
    ) -> Self {
        Self {
            nonce,
            color,
            value: value.into(),
            mt_index: mt_index.into(),
        }
    }

    /// Attach a tree position to a plain coin.
    ///
    /// ```
    /// use coin::{CoinInfo, Color, Nonce, QualifiedCoinInfo};
    ///
    /// let coin = CoinInfo::new(Nonce::default(), Color::default(), 10u64);
    /// let q = QualifiedCoinInfo::from_coin(coin.clone(), 3u64);
    /// assert_eq!(q.to_coin(), coin);
    /// ```
    pub fn from_coin(coin: CoinInfo, mt_index: impl Into<BigUint>) -> Self {
        Self {
            nonce: coin.nonce,
            color: coin.color,
            value: coin.value,
            mt_index: mt_index.into(),
        }
    }

    /// Drop the tree position.
    pub fn to_coin(&self) -> CoinInfo {
        CoinInfo {
            nonce: self.nonce,
            color: self.color,
            value: self.value.clone(),
        }
    }
}

impl From<QualifiedCoinInfo> for CoinInfo {
    fn from(q: QualifiedCoinInfo) -> Self {
        Self {
            nonce: q.nonce,
            color: q.color,
            value: q.value,
        }
    }
}

impl Coin for QualifiedCoinInfo {
    #[inline]
    fn color(&self) -> &Color {
        &self.color
    }

    #[inline]
    fn value(&self) -> &BigUint {
        &self.value
    }

    fn with_value(&self, value: BigUint) -> Self {
        Self {
            nonce: self.nonce,
            color: self.color,
            value,
            mt_index: self.mt_index.clone(),
        }
    }

    fn same_location(&self, other: &Self) -> bool {
        self.mt_index == other.mt_index
    }
}
