//! Colored coin arithmetic for DEX settlement.
//!
//! A coin is an amount (`value`) of one asset (`color`). Arithmetic is only
//! defined between coins of the same color and keeps the first operand's
//! identity fields. Division and square roots go through the witnesses in
//! the `witness` crate and are checked before a result is returned.
//!
//! ```
//! use coin::{arith, compare, CoinInfo, Color, Nonce};
//!
//! let usd = Color::from([1u8; 32]);
//! let a = CoinInfo::new(Nonce::from([7u8; 32]), usd, 100u64);
//! let b = CoinInfo::new(Nonce::from([8u8; 32]), usd, 50u64);
//!
//! let sum = arith::add(&a, &b).unwrap();
//! assert_eq!(sum.value, num_bigint::BigUint::from(150u32));
//! assert_eq!(sum.nonce, a.nonce);
//! assert!(compare::gt_value(&sum, &a));
//! ```

pub mod arith;
pub mod color;
pub mod compare;
pub mod context;
mod decimal;
pub mod error;
pub mod info;

pub use arith::DivRem;
pub use color::{Color, Nonce};
pub use context::{Context, WitnessRecord};
pub use error::CoinError;
pub use info::{Coin, CoinInfo, QualifiedCoinInfo};
