//! Explicit evaluation context for chaining coin operations.
//!
//! Each operation takes the context by value and hands back the next one
//! along with its result, so an evaluation reads as
//! `let (ctx, out) = ctx.op(&a, &b)?;`. Division and square-root steps
//! leave a [`WitnessRecord`] behind that anyone can re-check with
//! [`Context::verify`].

use num_bigint::BigUint;
use tracing::debug;
use witness::{verify_div, verify_sqrt, WitnessError};

use crate::arith::{self, DivRem};
use crate::error::CoinError;
use crate::info::Coin;

/// A witness consumed during evaluation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum WitnessRecord {
    Div {
        dividend: BigUint,
        divisor: BigUint,
        quotient: BigUint,
        remainder: BigUint,
    },
    Sqrt {
        radicand: BigUint,
        root: BigUint,
    },
}

impl WitnessRecord {
    /// Re-check the record against its law.
    pub fn verify(&self) -> Result<(), WitnessError> {
        match self {
            WitnessRecord::Div {
                dividend,
                divisor,
                quotient,
                remainder,
            } => verify_div(dividend, divisor, quotient, remainder),
            WitnessRecord::Sqrt { radicand, root } => verify_sqrt(radicand, root),
        }
    }
}

#[must_use]
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Context {
    steps: u64,
    witnesses: Vec<WitnessRecord>,
}

impl Context {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of operations performed so far.
    pub fn steps(&self) -> u64 {
        self.steps
    }

    pub fn witnesses(&self) -> &[WitnessRecord] {
        &self.witnesses
    }

    /// Replay every recorded witness. Stops at the first that fails.
    pub fn verify(&self) -> Result<(), WitnessError> {
        for (index, record) in self.witnesses.iter().enumerate() {
            if let Err(err) = record.verify() {
                debug!(index, error = %err, "witness replay failed");
                return Err(err);
            }
        }
        Ok(())
    }

    fn step(mut self) -> Self {
        self.steps += 1;
        self
    }

    fn record(mut self, record: WitnessRecord) -> Self {
        debug!(step = self.steps, ?record, "witness recorded");
        self.witnesses.push(record);
        self.step()
    }

    // ========================================================================
    // Threaded operations
    // ========================================================================

    pub fn add<C: Coin>(self, a: &C, b: &C) -> Result<(Self, C), CoinError> {
        let out = arith::add(a, b)?;
        Ok((self.step(), out))
    }

    pub fn sub<C: Coin>(self, a: &C, b: &C) -> Result<(Self, C), CoinError> {
        let out = arith::sub(a, b)?;
        Ok((self.step(), out))
    }

    pub fn mul<C: Coin>(self, a: &C, b: &C) -> Result<(Self, C), CoinError> {
        let out = arith::mul(a, b)?;
        Ok((self.step(), out))
    }

    pub fn div_rem<C: Coin>(self, a: &C, b: &C) -> Result<(Self, DivRem<C>), CoinError> {
        let out = arith::div_rem(a, b)?;
        let record = WitnessRecord::Div {
            dividend: a.value().clone(),
            divisor: b.value().clone(),
            quotient: out.quotient.value().clone(),
            remainder: out.remainder.value().clone(),
        };
        Ok((self.record(record), out))
    }

    pub fn div<C: Coin>(self, a: &C, b: &C) -> Result<(Self, C), CoinError> {
        let (ctx, out) = self.div_rem(a, b)?;
        Ok((ctx, out.quotient))
    }

    pub fn rem<C: Coin>(self, a: &C, b: &C) -> Result<(Self, C), CoinError> {
        let (ctx, out) = self.div_rem(a, b)?;
        Ok((ctx, out.remainder))
    }

    pub fn sqrt<C: Coin>(self, a: &C) -> Result<(Self, C), CoinError> {
        let out = arith::sqrt(a)?;
        let record = WitnessRecord::Sqrt {
            radicand: a.value().clone(),
            root: out.value().clone(),
        };
        Ok((self.record(record), out))
    }

    pub fn min<C: Coin>(self, a: &C, b: &C) -> Result<(Self, C), CoinError> {
        let out = arith::min(a, b)?;
        Ok((self.step(), out))
    }

    pub fn max<C: Coin>(self, a: &C, b: &C) -> Result<(Self, C), CoinError> {
        let out = arith::max(a, b)?;
        Ok((self.step(), out))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::{Color, Nonce};
    use crate::info::CoinInfo;

    fn coin(value: u64) -> CoinInfo {
        CoinInfo::new(Nonce::default(), Color::new([5; 32]), value)
    }

    #[test]
    fn test_fresh_context() {
        let ctx = Context::new();
        assert_eq!(ctx.steps(), 0);
        assert!(ctx.witnesses().is_empty());
        assert!(ctx.verify().is_ok());
    }

    #[test]
    fn test_steps_and_records() {
        let ctx = Context::new();
        let (ctx, sum) = ctx.add(&coin(40), &coin(60)).unwrap();
        let (ctx, root) = ctx.sqrt(&sum).unwrap();
        let (ctx, q) = ctx.div(&sum, &root).unwrap();
        assert_eq!(q.value, BigUint::from(10u32));
        assert_eq!(ctx.steps(), 3);
        assert_eq!(ctx.witnesses().len(), 2);
        assert_eq!(
            ctx.witnesses()[0],
            WitnessRecord::Sqrt {
                radicand: BigUint::from(100u32),
                root: BigUint::from(10u32),
            }
        );
        assert!(ctx.verify().is_ok());
    }

    #[test]
    fn test_failed_operation_returns_error_only() {
        let ctx = Context::new();
        let err = ctx.sub(&coin(1), &coin(2)).unwrap_err();
        assert_eq!(err, CoinError::NegativeResult);
    }

    #[test]
    fn test_verify_catches_tampered_record() {
        let ctx = Context {
            steps: 1,
            witnesses: vec![WitnessRecord::Div {
                dividend: BigUint::from(7u32),
                divisor: BigUint::from(3u32),
                quotient: BigUint::from(2u32),
                remainder: BigUint::from(2u32),
            }],
        };
        assert!(matches!(ctx.verify(), Err(WitnessError::DivisionLaw { .. })));
    }

    #[test]
    fn test_record_verify_sqrt() {
        let bad = WitnessRecord::Sqrt {
            radicand: BigUint::from(10u32),
            root: BigUint::from(4u32),
        };
        assert!(matches!(bad.verify(), Err(WitnessError::SqrtLowerBound { .. })));
    }
}
