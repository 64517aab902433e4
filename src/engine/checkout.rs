use serde::Serialize;

use crate::account::Account;
use crate::coin_amount::CoinAmount;
use crate::engine::AllocationError;
use crate::engine::calculate_stamp_payment_items;
use crate::engine::find_optimal_allocation;
use crate::engine::is_sufficient;
use crate::transaction::TransactionItem;
use crate::transaction::items_total;

#[cfg(test)]
#[path = "tests/checkout_tests.rs"]
mod checkout_tests;

pub const DEFAULT_MAX_EXHAUSTIVE_ITEMS: usize = 8;

#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Serialize, parse_display::Display, parse_display::FromStr)]
#[display(style = "lowercase")]
pub enum AllocationStrategy {
    /// Exhaustive search for baskets up to the configured size, greedy above it.
    #[default]
    Auto,
    Exhaustive,
    Greedy,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct CheckoutConfig {
    pub strategy: AllocationStrategy,
    pub max_exhaustive_items: usize,
}

impl Default for CheckoutConfig {
    fn default() -> Self {
        Self {
            strategy: AllocationStrategy::Auto,
            max_exhaustive_items: DEFAULT_MAX_EXHAUSTIVE_ITEMS,
        }
    }
}

/// The payment chosen for a basket.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Allocation {
    pub items: Vec<TransactionItem>,
    pub total: CoinAmount,
    /// Algorithm that produced `items`, never [`AllocationStrategy::Auto`].
    pub strategy: AllocationStrategy,
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum CheckoutError {
    #[error("insufficient balance, balance=({balance}) total=({total})")]
    InsufficientBalance { balance: CoinAmount, total: CoinAmount },
    #[error(transparent)]
    Allocation(#[from] AllocationError),
}

pub struct CheckoutEngine {
    config: CheckoutConfig,
}

impl CheckoutEngine {
    pub const fn new(config: CheckoutConfig) -> Self {
        Self { config }
    }

    /// Allocates `items` against the `account` balance.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The exhaustive search fails ([`CheckoutError::Allocation`]).
    /// - Neither the greedy rewrite nor the basket as given fit the balance
    ///   ([`CheckoutError::InsufficientBalance`]).
    pub fn checkout(&self, account: &Account, items: &[TransactionItem]) -> Result<Allocation, CheckoutError> {
        let strategy = self.resolve_strategy(items.len());
        tracing::debug!(%strategy, items = items.len(), account_id = %account.id, "allocating basket");

        let allocated = match strategy {
            // The rewriter may land on a stamp kind the balance can't pay, the basket as given is kept then.
            AllocationStrategy::Greedy => calculate_stamp_payment_items(account, items)
                .filter(|rewritten| is_sufficient(account, rewritten))
                .unwrap_or_else(|| items.to_vec()),
            AllocationStrategy::Exhaustive | AllocationStrategy::Auto => {
                find_optimal_allocation(account, items, self.config.max_exhaustive_items)?
            }
        };

        let total = items_total(&allocated);
        if !is_sufficient(account, &allocated) {
            return Err(CheckoutError::InsufficientBalance {
                balance: account.balance,
                total,
            });
        }

        Ok(Allocation {
            items: allocated,
            total,
            strategy,
        })
    }

    fn resolve_strategy(&self, basket_size: usize) -> AllocationStrategy {
        match self.config.strategy {
            AllocationStrategy::Auto if basket_size <= self.config.max_exhaustive_items => {
                AllocationStrategy::Exhaustive
            }
            AllocationStrategy::Auto => AllocationStrategy::Greedy,
            explicit => explicit,
        }
    }
}

impl Default for CheckoutEngine {
    fn default() -> Self {
        Self::new(CheckoutConfig::default())
    }
}
