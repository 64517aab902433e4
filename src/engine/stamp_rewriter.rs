//! Greedy shift of basket items from currency onto stamps.
//!
//! At every step the most expensive item (by effective cent price) that could be paid with stamps
//! is advanced to its next payment option. Only items with a positive cent price are moved and the
//! option after the currency option is always a stamp option, so an item moves at most twice.
//! The result is a local heuristic: no backtracking, no optimality guarantee.

use crate::account::Account;
use crate::engine::RunningTotal;
use crate::product::select_next_price;
use crate::transaction::TransactionItem;

#[cfg(test)]
#[path = "tests/stamp_rewriter_tests.rs"]
mod stamp_rewriter_tests;

/// Rewrites `items` to use as many stamps of the `account` as the greedy strategy finds.
///
/// Returns [`None`] when not a single item could be moved onto stamps. The input is never mutated,
/// every step produces a new list.
pub fn calculate_stamp_payment_items(account: &Account, items: &[TransactionItem]) -> Option<Vec<TransactionItem>> {
    let mut rewritten: Option<Vec<TransactionItem>> = None;

    loop {
        let current = rewritten.as_deref().unwrap_or(items);
        let Some(idx) = most_expensive_stamp_payable_item(account, current) else {
            return rewritten;
        };

        let item = &current[idx];
        let next_price = select_next_price(&item.product, item.effective_price);
        tracing::debug!(
            product = %item.product.name,
            from = %item.effective_price,
            to = %next_price,
            "moving item onto stamps"
        );

        let mut next_items = current.to_vec();
        next_items[idx] = item.repriced(next_price);
        rewritten = Some(next_items);
    }
}

fn most_expensive_stamp_payable_item(account: &Account, items: &[TransactionItem]) -> Option<usize> {
    let running_total = RunningTotal::from_items(items);

    running_total
        .find_stamp_payable_items(account, items)
        .into_iter()
        .filter(|idx| items[*idx].effective_price.cent > 0)
        // `max_by_key` keeps the last maximum, reversing keeps the first index on ties.
        .rev()
        .max_by_key(|idx| items[*idx].effective_price.cent)
}
