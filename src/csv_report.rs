use std::io::Write;

use ascii_pay_checkout::product::ProductId;
use ascii_pay_checkout::transaction::TransactionItem;
use csv::Writer;
use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CsvReportError {
    #[error("csv serialization error for item={name}, source_error={source:?}")]
    Csv {
        name: String,
        #[source]
        source: csv::Error,
    },
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Write the allocated `items` to stdout as CSV, in basket order.
pub fn write_to_stdout(items: &[TransactionItem]) -> Result<(), CsvReportError> {
    write_report(std::io::stdout(), items)
}

pub fn write_report<W: Write>(out: W, items: &[TransactionItem]) -> Result<(), CsvReportError> {
    let mut writer = Writer::from_writer(out);
    for item in items {
        writer
            .serialize(ItemReport::from(item))
            .map_err(|source| CsvReportError::Csv {
                name: item.product.name.clone(),
                source,
            })?;
    }
    writer.flush()?;
    Ok(())
}

#[derive(Serialize)]
struct ItemReport<'a> {
    product_id: Option<ProductId>,
    name: &'a str,
    cent: i64,
    coffee_stamp: i64,
    bottle_stamp: i64,
}

impl<'a> From<&'a TransactionItem> for ItemReport<'a> {
    fn from(item: &'a TransactionItem) -> Self {
        Self {
            product_id: item.product.id,
            name: &item.product.name,
            cent: item.effective_price.cent,
            coffee_stamp: item.effective_price.coffee_stamp,
            bottle_stamp: item.effective_price.bottle_stamp,
        }
    }
}

#[cfg(test)]
mod tests {
    use ascii_pay_checkout::coin_amount::CoinAmount;
    use ascii_pay_checkout::product::Product;

    use super::*;

    #[test]
    fn write_report_writes_one_row_per_item() {
        let items = [
            TransactionItem::with_effective_price(
                Product::new(Some(ProductId(1)), "Coffee", CoinAmount::new(100, 10, 0), CoinAmount::ZERO),
                CoinAmount::coffee_stamps(10),
            ),
            TransactionItem::new(Product::new(None, "Custom", CoinAmount::cent(250), CoinAmount::ZERO)),
        ];
        let mut out = Vec::new();
        assert2::let_assert!(Ok(()) = write_report(&mut out, &items));
        insta::assert_snapshot!(String::from_utf8_lossy(&out), @r"
        product_id,name,cent,coffee_stamp,bottle_stamp
        1,Coffee,0,10,0
        ,Custom,250,0,0
        ");
    }
}
