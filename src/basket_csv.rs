use ascii_pay_checkout::coin_amount::CoinAmount;
use ascii_pay_checkout::product::Product;
use ascii_pay_checkout::product::ProductId;
use color_eyre::eyre::bail;
use serde::Deserialize;
use serde::Deserializer;

/// A basket CSV row. Empty numeric columns count as zero.
#[derive(Debug, Deserialize)]
pub struct BasketRow {
    product_id: Option<ProductId>,
    name: String,
    price_cent: Option<BoundedAmount>,
    price_coffee_stamp: Option<BoundedAmount>,
    price_bottle_stamp: Option<BoundedAmount>,
    bonus_cent: Option<BoundedAmount>,
    bonus_coffee_stamp: Option<BoundedAmount>,
    bonus_bottle_stamp: Option<BoundedAmount>,
}

impl From<BasketRow> for Product {
    fn from(row: BasketRow) -> Self {
        let amount =
            |cent: Option<BoundedAmount>, coffee_stamp: Option<BoundedAmount>, bottle_stamp: Option<BoundedAmount>| {
                CoinAmount::new(
                    cent.map_or(0, BoundedAmount::as_inner),
                    coffee_stamp.map_or(0, BoundedAmount::as_inner),
                    bottle_stamp.map_or(0, BoundedAmount::as_inner),
                )
            };
        Self {
            id: row.product_id,
            name: row.name,
            price: amount(row.price_cent, row.price_coffee_stamp, row.price_bottle_stamp),
            bonus: amount(row.bonus_cent, row.bonus_coffee_stamp, row.bonus_bottle_stamp),
        }
    }
}

/// Keeps basket totals clear of `i64` overflow.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
struct BoundedAmount(i64);

impl TryFrom<i64> for BoundedAmount {
    type Error = color_eyre::Report;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        if value.unsigned_abs() > CoinAmount::MAX_INPUT.unsigned_abs() {
            bail!("amount out of range value={value} max={}", CoinAmount::MAX_INPUT);
        }
        Ok(Self(value))
    }
}

impl BoundedAmount {
    const fn as_inner(self) -> i64 {
        self.0
    }
}

impl<'de> Deserialize<'de> for BoundedAmount {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = <i64 as serde::Deserialize>::deserialize(deserializer)?;
        Self::try_from(value).map_err(|error| serde::de::Error::custom(error.to_string()))
    }
}
