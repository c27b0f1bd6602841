use std::fmt;

use num_bigint::BigUint;
use serde::{Deserialize, Serialize};

/// Native operand width of a witnessed primitive.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Width {
    W128,
    /// Scalar-field sized operands (BN254 Fr is just under 2^254).
    W254,
    W256,
}

impl Width {
    /// All widths, narrowest first.
    pub const ALL: [Width; 3] = [Width::W128, Width::W254, Width::W256];

    /// Number of bits for this width.
    #[inline]
    pub fn num_bits(self) -> u64 {
        match self {
            Width::W128 => 128,
            Width::W254 => 254,
            Width::W256 => 256,
        }
    }

    /// Whether `value` fits without truncation.
    #[inline]
    pub fn fits(self, value: &BigUint) -> bool {
        value.bits() <= self.num_bits()
    }

    /// The narrowest width that holds every value, or `None` when some value
    /// needs more than 256 bits.
    ///
    /// ```
    /// use limbs::Width;
    /// use num_bigint::BigUint;
    ///
    /// let small = BigUint::from(7u32);
    /// let wide = BigUint::from(1u32) << 200u32;
    /// assert_eq!(Width::narrowest(&[&small]), Some(Width::W128));
    /// assert_eq!(Width::narrowest(&[&small, &wide]), Some(Width::W254));
    /// assert_eq!(Width::narrowest(&[&(BigUint::from(1u32) << 256u32)]), None);
    /// ```
    pub fn narrowest(values: &[&BigUint]) -> Option<Width> {
        Self::ALL
            .into_iter()
            .find(|w| values.iter().all(|v| w.fits(v)))
    }
}

impl fmt::Display for Width {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-bit", self.num_bits())
    }
}
