//! Brute force allocation search.
//!
//! Walks the Cartesian product of every item's payment options, so the cost is exponential in the
//! basket size. [`find_optimal_allocation`] refuses baskets above a caller supplied cap.

use crate::account::Account;
use crate::coin_amount::CoinAmount;
use crate::engine::sufficiency::covers;
use crate::product::PaymentOptions;
use crate::product::payment_options;
use crate::transaction::TransactionItem;
use crate::transaction::items_total;

#[cfg(test)]
#[path = "tests/exhaustive_tests.rs"]
mod exhaustive_tests;

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum AllocationError {
    #[error("basket too large for exhaustive search items={items}, max_items={max_items}")]
    BasketTooLarge { items: usize, max_items: usize },
    #[error("no affordable allocation for balance=({balance})")]
    NoAffordableAllocation { balance: CoinAmount },
}

/// Every fully allocated basket, the first item's options varying slowest.
///
/// An empty basket has exactly one (empty) allocation.
pub fn enumerate_allocations(items: &[TransactionItem]) -> Vec<Vec<TransactionItem>> {
    let mut allocations = Vec::new();
    for_each_allocation(items, |allocation| allocations.push(allocation.to_vec()));
    allocations
}

/// Cheapest allocation of `items` the `account` can afford.
///
/// Allocations the balance doesn't [`covers`] are discarded, the rest are ranked by cent total and
/// then by stamp total. Ties go to the allocation enumerated first.
///
/// # Errors
///
/// Returns an error if:
/// - `items` holds more than `max_items` items ([`AllocationError::BasketTooLarge`]).
/// - No allocation fits the balance ([`AllocationError::NoAffordableAllocation`]).
pub fn find_optimal_allocation(
    account: &Account,
    items: &[TransactionItem],
    max_items: usize,
) -> Result<Vec<TransactionItem>, AllocationError> {
    if items.len() > max_items {
        return Err(AllocationError::BasketTooLarge {
            items: items.len(),
            max_items,
        });
    }

    let balance = account.balance;
    let mut candidates = 0usize;
    let mut best: Option<(Rank, Vec<TransactionItem>)> = None;

    for_each_allocation(items, |allocation| {
        candidates += 1;
        let total = items_total(allocation);
        if !covers(balance, total) {
            return;
        }
        let rank = Rank::of(total);
        if best.as_ref().is_none_or(|(best_rank, _)| rank < *best_rank) {
            best = Some((rank, allocation.to_vec()));
        }
    });

    tracing::trace!(candidates, items = items.len(), "exhaustive search done");

    best.map(|(_, allocation)| allocation)
        .ok_or(AllocationError::NoAffordableAllocation { balance })
}

/// Ordering key of an allocation total, lower is better.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct Rank {
    cent: i64,
    stamps: i64,
}

impl Rank {
    pub const fn of(total: CoinAmount) -> Self {
        Self {
            cent: total.cent,
            stamps: total.stamp_total(),
        }
    }
}

fn for_each_allocation<F>(items: &[TransactionItem], mut visit: F)
where
    F: FnMut(&[TransactionItem]),
{
    let options: Vec<PaymentOptions> = items.iter().map(|item| payment_options(&item.product)).collect();
    let mut current = Vec::with_capacity(items.len());
    visit_allocations(items, &options, &mut current, &mut visit);
}

fn visit_allocations<F>(
    items: &[TransactionItem],
    options: &[PaymentOptions],
    current: &mut Vec<TransactionItem>,
    visit: &mut F,
) where
    F: FnMut(&[TransactionItem]),
{
    let idx = current.len();
    let Some(item) = items.get(idx) else {
        visit(current);
        return;
    };

    for price in options[idx].iter() {
        current.push(item.repriced(*price));
        visit_allocations(items, options, current, visit);
        current.pop();
    }
}
