//! Payment allocation core of the ascii-pay point of sale.
//!
//! A basket of [`transaction::TransactionItem`]s can be paid with cents, coffee stamps or bottle
//! stamps. [`engine`] decides which of each product's [`product::PaymentOptions`] to use given the
//! paying [`account::Account`] balance.

pub mod account;
pub mod coin_amount;
pub mod engine;
pub mod product;
pub mod transaction;
