use crate::account::Account;
use crate::coin_amount::CoinAmount;
use crate::transaction::TransactionItem;

/// Accumulated effective price of a basket.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
pub struct RunningTotal {
    total: CoinAmount,
}

impl RunningTotal {
    pub const fn new(total: CoinAmount) -> Self {
        Self { total }
    }

    pub fn from_items(items: &[TransactionItem]) -> Self {
        let mut running_total = Self::default();
        for item in items {
            running_total.add_item(item);
        }
        running_total
    }

    pub const fn total(&self) -> CoinAmount {
        self.total
    }

    pub fn add_item(&mut self, item: &TransactionItem) {
        self.total += item.effective_price;
    }

    pub fn remove_item(&mut self, item: &TransactionItem) {
        self.total -= item.effective_price;
    }

    /// Whether `item` could switch to a stamp price it isn't already paying, given what is left of
    /// the `account` balance after this running total.
    ///
    /// Coffee stamps take priority: when the item has an unused coffee stamp price the bottle
    /// stamp price is not looked at, even if the coffee stamps don't suffice.
    pub fn can_pay_with_stamps(&self, account: &Account, item: &TransactionItem) -> bool {
        let available = account.balance - self.total;
        let price = item.product.price;

        if price.coffee_stamp > 0 && price.coffee_stamp != item.effective_price.coffee_stamp {
            return available.coffee_stamp >= price.coffee_stamp;
        }
        if price.bottle_stamp > 0 && price.bottle_stamp != item.effective_price.bottle_stamp {
            return available.bottle_stamp >= price.bottle_stamp;
        }
        false
    }

    /// Indices of the `items` that could be paid with stamps, each checked against this total
    /// without its own contribution.
    pub fn find_stamp_payable_items(&self, account: &Account, items: &[TransactionItem]) -> Vec<usize> {
        items
            .iter()
            .enumerate()
            .filter(|(_, item)| {
                let mut others = *self;
                others.remove_item(item);
                others.can_pay_with_stamps(account, item)
            })
            .map(|(idx, _)| idx)
            .collect()
    }
}
