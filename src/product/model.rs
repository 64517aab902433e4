use serde::Deserialize;
use serde::Serialize;

use crate::coin_amount::CoinAmount;

#[derive(Debug, Serialize, Deserialize, Copy, Clone, Hash, PartialEq, Eq, Ord, PartialOrd, parse_display::Display)]
pub struct ProductId(pub u64);

/// A priceable item.
///
/// `id` is `None` for pseudo products created at the terminal (e.g. a custom amount).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub id: Option<ProductId>,
    pub name: String,
    pub price: CoinAmount,
    #[serde(default)]
    pub bonus: CoinAmount,
}

impl Product {
    pub fn new(id: Option<ProductId>, name: impl Into<String>, price: CoinAmount, bonus: CoinAmount) -> Self {
        Self {
            id,
            name: name.into(),
            price,
            bonus,
        }
    }
}
