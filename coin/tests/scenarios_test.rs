//! The concrete settlement scenarios, end to end through the public API.

use coin::{arith, compare, CoinError, CoinInfo, Color, Nonce, QualifiedCoinInfo};
use num_bigint::BigUint;

fn color(first: u8) -> Color {
    let mut bytes = [0u8; 32];
    bytes[0] = first;
    Color::from(bytes)
}

fn coin(value: u64) -> CoinInfo {
    CoinInfo::new(Nonce::from([0x5a; 32]), color(0x01), value)
}

fn n(v: u64) -> BigUint {
    BigUint::from(v)
}

#[test]
fn test_add_100_50() {
    assert_eq!(arith::add(&coin(100), &coin(50)).unwrap().value, n(150));
}

#[test]
fn test_sub_50_100_is_negative() {
    let err = arith::sub(&coin(50), &coin(100)).unwrap_err();
    assert_eq!(err, CoinError::NegativeResult);
    assert_eq!(err.to_string(), "result would be negative");
}

#[test]
fn test_div_100_50() {
    assert_eq!(arith::div(&coin(100), &coin(50)).unwrap().value, n(2));
}

#[test]
fn test_div_rem_7_3() {
    let r = arith::div_rem(&coin(7), &coin(3)).unwrap();
    assert_eq!(r.quotient.value, n(2));
    assert_eq!(r.remainder.value, n(1));
}

#[test]
fn test_sqrt_scenarios() {
    assert_eq!(arith::sqrt(&coin(100)).unwrap().value, n(10));
    assert_eq!(arith::sqrt(&coin(15)).unwrap().value, n(3));
    assert_eq!(arith::sqrt(&coin(0)).unwrap().value, n(0));
}

#[test]
fn test_mul_and_zero_division() {
    assert_eq!(arith::mul(&coin(100), &coin(50)).unwrap().value, n(5000));
    let err = arith::div(&coin(100), &coin(0)).unwrap_err();
    assert_eq!(err, CoinError::DivisionByZero);
    assert_eq!(err.to_string(), "division by zero");
}

#[test]
fn test_sort_gt_puts_greater_color_first() {
    let low = CoinInfo::new(Nonce::default(), color(0x01), 1u64);
    let high = CoinInfo::new(Nonce::default(), color(0x02), 1u64);
    let (first, second) = compare::sort_gt(&low, &high);
    assert_eq!(first.color, color(0x02));
    assert_eq!(second.color, color(0x01));
}

#[test]
fn test_cross_color_message() {
    let other = CoinInfo::new(Nonce::default(), color(0x02), 1u64);
    let err = arith::add(&coin(1), &other).unwrap_err();
    assert_eq!(err.to_string(), "colors must be the same");
}

#[test]
fn test_qualified_round_trip_through_arithmetic() {
    let a = QualifiedCoinInfo::from_coin(coin(90), 12u64);
    let b = QualifiedCoinInfo::from_coin(coin(30), 13u64);
    let diff = arith::sub(&a, &b).unwrap();
    assert_eq!(diff.mt_index, n(12));
    assert_eq!(diff.to_coin(), coin(60));
}
