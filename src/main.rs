use ascii_pay_checkout::engine::CheckoutEngine;
use ascii_pay_checkout::product::Product;
use ascii_pay_checkout::transaction::TransactionItem;
use clap::Parser as _;
use color_eyre::eyre::WrapErr as _;
use csv::ReaderBuilder;
use csv::Trim;
use tracing_subscriber::EnvFilter;

use crate::basket_csv::BasketRow;
use crate::cli::CliArgs;

mod basket_csv;
mod cli;
mod csv_report;

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let args = CliArgs::parse();

    let mut basket_reader = ReaderBuilder::new()
        .trim(Trim::All)
        .from_path(&args.basket)
        .wrap_err_with(|| format!("cannot open basket path={}", args.basket.display()))?;

    let mut items = Vec::new();
    for row_res in basket_reader.deserialize::<BasketRow>() {
        match row_res {
            Ok(row) => items.push(TransactionItem::new(Product::from(row))),
            Err(error) => tracing::warn!(%error, "skipping basket row, failed to deserialize"),
        }
    }

    let account = args.account();
    let allocation = CheckoutEngine::new(args.checkout_config())
        .checkout(&account, &items)
        .wrap_err_with(|| format!("cannot check out basket path={}", args.basket.display()))?;
    tracing::info!(total = %allocation.total, strategy = %allocation.strategy, "basket allocated");

    csv_report::write_to_stdout(&allocation.items)?;

    Ok(())
}
