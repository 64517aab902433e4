use serde::Deserialize;
use serde::Serialize;

use crate::coin_amount::CoinAmount;
use crate::product::Product;
use crate::product::payment_options;

#[derive(Debug, Serialize, Deserialize, Copy, Clone, Hash, PartialEq, Eq, Ord, PartialOrd, parse_display::Display)]
pub struct TransactionId(pub u64);

/// A [`Product`] in a basket together with the payment option chosen for it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransactionItem {
    pub product: Product,
    pub effective_price: CoinAmount,
}

impl TransactionItem {
    /// Creates an item paid with the first payment option of `product`.
    pub fn new(product: Product) -> Self {
        let effective_price = payment_options(&product).first();
        Self {
            product,
            effective_price,
        }
    }

    pub const fn with_effective_price(product: Product, effective_price: CoinAmount) -> Self {
        Self {
            product,
            effective_price,
        }
    }

    /// Returns a copy of `self` paid with `effective_price`.
    #[must_use]
    pub fn repriced(&self, effective_price: CoinAmount) -> Self {
        Self {
            product: self.product.clone(),
            effective_price,
        }
    }
}

/// A completed purchase as recorded by the backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    pub id: TransactionId,
    pub timestamp: String,
    pub items: Vec<TransactionItem>,
}

impl Transaction {
    /// Total of the effective prices of all the items.
    pub fn sum(&self) -> CoinAmount {
        items_total(&self.items)
    }
}

/// Total of the effective prices of `items`.
pub fn items_total(items: &[TransactionItem]) -> CoinAmount {
    items.iter().map(|item| item.effective_price).sum()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::product::ProductId;

    #[test]
    fn new_selects_the_first_payment_option() {
        let product = Product::new(
            Some(ProductId(1)),
            "Club Mate",
            CoinAmount::new(150, 0, 10),
            CoinAmount::bottle_stamps(1),
        );
        let item = TransactionItem::new(product);
        assert_eq!(CoinAmount::new(150, 0, -1), item.effective_price);
    }

    #[test]
    fn transaction_sum_adds_up_effective_prices() {
        let coffee = Product::new(
            Some(ProductId(1)),
            "Coffee",
            CoinAmount::new(100, 10, 0),
            CoinAmount::coffee_stamps(1),
        );
        let mate = Product::new(Some(ProductId(2)), "Mate", CoinAmount::cent(150), CoinAmount::bottle_stamps(1));
        let transaction = Transaction {
            id: TransactionId(7),
            timestamp: "2023-04-01T10:00:00Z".to_string(),
            items: vec![
                TransactionItem::with_effective_price(coffee, CoinAmount::coffee_stamps(10)),
                TransactionItem::new(mate),
            ],
        };
        assert_eq!(CoinAmount::new(150, 10, -1), transaction.sum());
    }

    #[test]
    fn items_total_of_an_empty_basket_is_zero() {
        assert!(items_total(&[]).is_empty());
    }

    #[test]
    fn deserialize_transaction_from_backend_json() {
        let json = r#"{
            "id": 3,
            "timestamp": "2023-04-01T10:00:00Z",
            "items": [{
                "product": {
                    "id": 5,
                    "name": "Coffee",
                    "price": {"Cent": 100, "CoffeeStamp": 10},
                    "bonus": {"CoffeeStamp": 1}
                },
                "effective_price": {"Cent": 100, "CoffeeStamp": -1}
            }]
        }"#;
        let transaction: Transaction = serde_json::from_str(json).unwrap();
        assert_eq!(Some(ProductId(5)), transaction.items[0].product.id);
        assert_eq!(CoinAmount::new(100, -1, 0), transaction.sum());
    }
}
