//! Derivation of the mutually exclusive ways a [`Product`] can be paid for.
//!
//! A product is paid in exactly one primary dimension (cent, bottle stamps or coffee stamps).
//! Bonus stamps of the other dimensions are still credited, as negative amounts.

use crate::coin_amount::CoinAmount;
use crate::product::Product;

/// Ordered, never empty, list of payment options of a product.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaymentOptions(Vec<CoinAmount>);

impl PaymentOptions {
    pub fn first(&self) -> CoinAmount {
        self.0[0]
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn as_slice(&self) -> &[CoinAmount] {
        &self.0
    }

    pub fn iter(&self) -> impl Iterator<Item = &CoinAmount> {
        self.0.iter()
    }

    /// The option following `current`, wrapping around after the last one.
    /// Falls back to the first option if `current` isn't one of them.
    pub fn next_after(&self, current: CoinAmount) -> CoinAmount {
        self.0
            .iter()
            .position(|option| *option == current)
            .map_or_else(|| self.first(), |idx| self.0[(idx + 1) % self.0.len()])
    }
}

/// Enumerates the payment options of `product` in priority order: cent, bottle stamps, coffee stamps.
///
/// If the product has no price at all the only option is the bonus credit.
pub fn payment_options(product: &Product) -> PaymentOptions {
    let Product { price, bonus, .. } = product;
    let mut options = Vec::with_capacity(3);

    if price.cent != 0 {
        options.push(CoinAmount {
            cent: price.cent - bonus.cent,
            coffee_stamp: -bonus.coffee_stamp,
            bottle_stamp: -bonus.bottle_stamp,
        });
    }
    if price.bottle_stamp != 0 {
        options.push(CoinAmount {
            cent: 0,
            coffee_stamp: -bonus.coffee_stamp,
            bottle_stamp: price.bottle_stamp,
        });
    }
    if price.coffee_stamp != 0 {
        options.push(CoinAmount {
            cent: 0,
            coffee_stamp: price.coffee_stamp,
            bottle_stamp: -bonus.bottle_stamp,
        });
    }
    if options.is_empty() {
        options.push(-*bonus);
    }

    PaymentOptions(options)
}

/// Advances `current` to the next payment option of `product`.
pub fn select_next_price(product: &Product, current: CoinAmount) -> CoinAmount {
    payment_options(product).next_after(current)
}
