//! Payment allocation engine.
//!
//! Provides [`CheckoutEngine`] which decides how a basket of [`crate::transaction::TransactionItem`]s
//! is paid out of an [`crate::account::Account`] balance. The two allocation algorithms are exposed too:
//! - [`exhaustive`] searches every combination of payment options and returns the cheapest affordable one.
//! - [`stamp_rewriter`] greedily moves the most expensive items onto stamps.
//!
//! [`running_total`] tracks basket totals for stamp eligibility, [`sufficiency`] validates a final allocation.

pub mod checkout;
pub mod exhaustive;
pub mod running_total;
pub mod stamp_rewriter;
pub mod sufficiency;

pub use checkout::Allocation;
pub use checkout::AllocationStrategy;
pub use checkout::CheckoutConfig;
pub use checkout::CheckoutEngine;
pub use checkout::CheckoutError;
pub use exhaustive::AllocationError;
pub use exhaustive::enumerate_allocations;
pub use exhaustive::find_optimal_allocation;
pub use running_total::RunningTotal;
pub use stamp_rewriter::calculate_stamp_payment_items;
pub use sufficiency::is_sufficient;
