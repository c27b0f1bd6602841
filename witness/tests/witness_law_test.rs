//! Property tests: every witness the computers produce passes its checker,
//! and perturbed witnesses do not.

use limbs::{U128, U256};
use num_bigint::BigUint;
use proptest::prelude::*;
use witness::*;

fn u254() -> impl Strategy<Value = BigUint> {
    any::<[u64; 4]>().prop_map(|mut limbs| {
        limbs[3] &= (1u64 << 62) - 1;
        U256::from_limbs(limbs).to_biguint()
    })
}

fn nonzero_u254() -> impl Strategy<Value = BigUint> {
    (u254(), 0u32..254).prop_map(|(v, shift)| (v >> shift).max(BigUint::from(1u32)))
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    #[test]
    fn prop_div_u128_law(a in any::<u128>(), b in 1u128..) {
        let r = div_u128_locally(U128::from(a), U128::from(b)).unwrap();
        prop_assert!(verify_div_u128(&BigUint::from(a), &BigUint::from(b), &r).is_ok());
        prop_assert_eq!(r.quotient.to_u128(), a / b);
        prop_assert_eq!(r.remainder.to_u128(), a % b);
    }

    #[test]
    fn prop_div_uint254_law(a in u254(), b in nonzero_u254()) {
        let r = div_uint254_locally(&a, &b).unwrap();
        prop_assert!(verify_div_u256(&a, &b, &r).is_ok());
    }

    #[test]
    fn prop_div_u256_law(a in any::<[u64; 4]>(), b in any::<[u64; 4]>()) {
        let (a, b) = (U256::from_limbs(a), U256::from_limbs(b));
        prop_assume!(!b.is_zero());
        let r = div_u256_locally(a, b).unwrap();
        prop_assert!(verify_div_u256(&a.to_biguint(), &b.to_biguint(), &r).is_ok());
        prop_assert!(r.remainder < b);
    }

    #[test]
    fn prop_div_off_by_one_rejected(a in any::<u128>(), b in 1u128..) {
        let r = div_u128_locally(U128::from(a), U128::from(b)).unwrap();
        let (a, b) = (BigUint::from(a), BigUint::from(b));
        let q = r.quotient.to_biguint() + 1u32;
        prop_assert!(verify_div(&a, &b, &q, &r.remainder.to_biguint()).is_err());
    }

    #[test]
    fn prop_sqrt_u128_law(n in any::<u128>()) {
        let radicand = U128::from(n);
        let root = sqrt_u128_locally(radicand);
        prop_assert!(verify_sqrt(&radicand.to_biguint(), &root).is_ok());
    }

    #[test]
    fn prop_sqrt_u256_law(limbs in any::<[u64; 4]>()) {
        let radicand = U256::from_limbs(limbs);
        let root = sqrt_u256_locally(radicand);
        prop_assert!(verify_sqrt(&radicand.to_biguint(), &root).is_ok());
        prop_assert!(verify_sqrt(&radicand.to_biguint(), &(root.clone() + 1u32)).is_err());
    }
}

#[test]
fn test_division_by_zero_everywhere() {
    let zero = BigUint::default();
    let one = BigUint::from(1u32);
    assert_eq!(div_uint128_locally(&one, &zero), Err(WitnessError::DivisionByZero));
    assert_eq!(div_uint254_locally(&one, &zero), Err(WitnessError::DivisionByZero));
    assert_eq!(div_uint256_locally(&one, &zero), Err(WitnessError::DivisionByZero));
    assert_eq!(div_u256_locally(U256::from(1u64), U256::ZERO), Err(WitnessError::DivisionByZero));
    assert_eq!(WitnessError::DivisionByZero.to_string(), "division by zero");
}
