//! Value and color comparisons, coin equality, and canonical pair ordering.
//!
//! Value comparisons are defined across colors. Color comparisons are
//! byte-wise lexicographic over the 32-byte identifier.
//!
//! [`sort_gt`] and [`sort_lt`] are the single rule that maps a pair of
//! coins, passed in either order, to one ordering. Ties on color keep the
//! input order.

use std::cmp::Ordering;

use crate::color::Color;
use crate::info::Coin;

// ============================================================================
// Value comparisons
// ============================================================================

#[inline]
pub fn cmp_value<C: Coin>(a: &C, b: &C) -> Ordering {
    a.value().cmp(b.value())
}

pub fn eq_value<C: Coin>(a: &C, b: &C) -> bool {
    cmp_value(a, b) == Ordering::Equal
}

pub fn lt_value<C: Coin>(a: &C, b: &C) -> bool {
    cmp_value(a, b) == Ordering::Less
}

pub fn lte_value<C: Coin>(a: &C, b: &C) -> bool {
    cmp_value(a, b) != Ordering::Greater
}

pub fn gt_value<C: Coin>(a: &C, b: &C) -> bool {
    cmp_value(a, b) == Ordering::Greater
}

pub fn gte_value<C: Coin>(a: &C, b: &C) -> bool {
    cmp_value(a, b) != Ordering::Less
}

// ============================================================================
// Color comparisons
// ============================================================================

#[inline]
pub fn cmp_color<C: Coin>(a: &C, b: &C) -> Ordering {
    a.color().cmp(b.color())
}

pub fn eq_color<C: Coin>(a: &C, b: &C) -> bool {
    cmp_color(a, b) == Ordering::Equal
}

pub fn lt_color<C: Coin>(a: &C, b: &C) -> bool {
    cmp_color(a, b) == Ordering::Less
}

pub fn lte_color<C: Coin>(a: &C, b: &C) -> bool {
    cmp_color(a, b) != Ordering::Greater
}

pub fn gt_color<C: Coin>(a: &C, b: &C) -> bool {
    cmp_color(a, b) == Ordering::Greater
}

pub fn gte_color<C: Coin>(a: &C, b: &C) -> bool {
    cmp_color(a, b) != Ordering::Less
}

// ============================================================================
// Equality
// ============================================================================

pub fn is_same_color<C: Coin>(a: &C, b: &C) -> bool {
    eq_color(a, b)
}

pub fn is_same_value<C: Coin>(a: &C, b: &C) -> bool {
    eq_value(a, b)
}

/// Same color and value. Qualified coins must also share `mt_index`.
///
/// ```
/// use coin::{compare, CoinInfo, Color, Nonce, QualifiedCoinInfo};
///
/// let c = CoinInfo::new(Nonce::from([1; 32]), Color::default(), 5u64);
/// let d = CoinInfo::new(Nonce::from([2; 32]), Color::default(), 5u64);
/// assert!(compare::eq(&c, &d));
///
/// let qc = QualifiedCoinInfo::from_coin(c, 0u64);
/// let qd = QualifiedCoinInfo::from_coin(d, 1u64);
/// assert!(!compare::eq(&qc, &qd));
/// ```
pub fn eq<C: Coin>(a: &C, b: &C) -> bool {
    is_same_color(a, b) && is_same_value(a, b) && a.same_location(b)
}

// ============================================================================
// Canonical ordering
// ============================================================================

/// Descending by color: `(b, a)` if `b`'s color is greater, else `(a, b)`.
pub fn sort_gt<'a, C: Coin>(a: &'a C, b: &'a C) -> (&'a C, &'a C) {
    if gt_color(b, a) {
        (b, a)
    } else {
        (a, b)
    }
}

/// Ascending by color: `(b, a)` if `b`'s color is smaller, else `(a, b)`.
pub fn sort_lt<'a, C: Coin>(a: &'a C, b: &'a C) -> (&'a C, &'a C) {
    if lt_color(b, a) {
        (b, a)
    } else {
        (a, b)
    }
}

/// Pool identity for a pair: `(greater color, lesser color)` under
/// [`sort_gt`], the same whichever order the coins arrive in.
pub fn pair_key<C: Coin>(a: &C, b: &C) -> (Color, Color) {
    let (first, second) = sort_gt(a, b);
    (*first.color(), *second.color())
}
