use crate::account::Account;
use crate::coin_amount::CoinAmount;
use crate::transaction::TransactionItem;
use crate::transaction::items_total;

/// Whether the `account` balance covers the `items` in every dimension independently.
pub fn is_sufficient(account: &Account, items: &[TransactionItem]) -> bool {
    covers(account.balance, items_total(items))
}

/// Whether `balance` can pay `total` without borrowing across dimensions.
///
/// A dimension only fails when paying pushes it below zero *and* below where it started, so a
/// balance that is already negative doesn't fail on a total that doesn't charge it.
pub const fn covers(balance: CoinAmount, total: CoinAmount) -> bool {
    const fn fails(balance: i64, total: i64) -> bool {
        let remainder = balance - total;
        remainder < 0 && remainder < balance
    }

    !(fails(balance.cent, total.cent)
        || fails(balance.coffee_stamp, total.coffee_stamp)
        || fails(balance.bottle_stamp, total.bottle_stamp))
}
