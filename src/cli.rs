use std::path::PathBuf;

use ascii_pay_checkout::account::Account;
use ascii_pay_checkout::account::AccountId;
use ascii_pay_checkout::coin_amount::CoinAmount;
use ascii_pay_checkout::engine::AllocationStrategy;
use ascii_pay_checkout::engine::CheckoutConfig;
use ascii_pay_checkout::engine::checkout::DEFAULT_MAX_EXHAUSTIVE_ITEMS;
use clap::Parser;

/// Allocate a basket of products onto an account balance of cents and stamps
#[derive(Parser, Debug)]
#[command(name = "ascii-pay-checkout", about, long_about = None)]
pub struct CliArgs {
    /// Basket CSV file path
    #[arg(value_name = "BASKET")]
    pub basket: PathBuf,

    /// Cents available on the account
    #[arg(long, default_value_t = 0, allow_negative_numbers = true, value_parser = balance_parser())]
    pub cent: i64,

    /// Coffee stamps available on the account
    #[arg(long, default_value_t = 0, allow_negative_numbers = true, value_parser = balance_parser())]
    pub coffee_stamps: i64,

    /// Bottle stamps available on the account
    #[arg(long, default_value_t = 0, allow_negative_numbers = true, value_parser = balance_parser())]
    pub bottle_stamps: i64,

    /// Allocation strategy: auto, exhaustive or greedy
    #[arg(long, value_name = "STRATEGY", default_value_t = AllocationStrategy::Auto)]
    pub strategy: AllocationStrategy,

    /// Largest basket searched exhaustively
    #[arg(long, value_name = "COUNT", default_value_t = DEFAULT_MAX_EXHAUSTIVE_ITEMS)]
    pub max_exhaustive_items: usize,
}

fn balance_parser() -> clap::builder::RangedI64ValueParser<i64> {
    clap::value_parser!(i64).range(-CoinAmount::MAX_INPUT..=CoinAmount::MAX_INPUT)
}

impl CliArgs {
    pub fn account(&self) -> Account {
        Account::new(
            AccountId(0),
            "terminal",
            CoinAmount::new(self.cent, self.coffee_stamps, self.bottle_stamps),
        )
    }

    pub const fn checkout_config(&self) -> CheckoutConfig {
        CheckoutConfig {
            strategy: self.strategy,
            max_exhaustive_items: self.max_exhaustive_items,
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case::defaults(&["program", "basket.csv"], CoinAmount::ZERO)]
    #[case::full_balance(
        &["program", "--cent", "500", "--coffee-stamps", "3", "--bottle-stamps", "10", "basket.csv"],
        CoinAmount::new(500, 3, 10)
    )]
    #[case::negative_balance(&["program", "--cent", "-20", "basket.csv"], CoinAmount::cent(-20))]
    #[case::largest_balance(
        &["program", "--cent", "1000000000", "--bottle-stamps", "-1000000000", "basket.csv"],
        CoinAmount::new(CoinAmount::MAX_INPUT, 0, -CoinAmount::MAX_INPUT)
    )]
    fn account_uses_the_supplied_balance(#[case] args: &[&str], #[case] expected: CoinAmount) {
        let parsed = CliArgs::try_parse_from(args).unwrap();
        assert_eq!(expected, parsed.account().balance());
    }

    #[rstest]
    #[case::defaults(&["program", "basket.csv"], AllocationStrategy::Auto, DEFAULT_MAX_EXHAUSTIVE_ITEMS)]
    #[case::greedy(&["program", "--strategy", "greedy", "basket.csv"], AllocationStrategy::Greedy, 8)]
    #[case::exhaustive_cap(
        &["program", "--strategy", "exhaustive", "--max-exhaustive-items", "3", "basket.csv"],
        AllocationStrategy::Exhaustive,
        3
    )]
    fn checkout_config_uses_the_supplied_options(
        #[case] args: &[&str],
        #[case] strategy: AllocationStrategy,
        #[case] max_exhaustive_items: usize,
    ) {
        let parsed = CliArgs::try_parse_from(args).unwrap();
        assert_eq!(
            CheckoutConfig {
                strategy,
                max_exhaustive_items
            },
            parsed.checkout_config()
        );
    }

    #[rstest]
    #[case::missing_basket(&["program"])]
    #[case::invalid_strategy(&["program", "--strategy", "optimal", "basket.csv"])]
    #[case::invalid_balance(&["program", "--cent", "ten", "basket.csv"])]
    #[case::cent_too_large(&["program", "--cent", "1000000001", "basket.csv"])]
    #[case::coffee_stamps_too_small(&["program", "--coffee-stamps", "-9223372036854775808", "basket.csv"])]
    fn try_parse_from_rejects_invalid_arguments(#[case] args: &[&str]) {
        assert!(CliArgs::try_parse_from(args).is_err());
    }
}
