use serde::Deserialize;
use serde::Serialize;

use crate::coin_amount::CoinAmount;

#[derive(Debug, Serialize, Deserialize, Copy, Clone, Hash, PartialEq, Eq, Ord, PartialOrd, parse_display::Display)]
pub struct AccountId(pub u64);

#[derive(Debug, Default, Serialize, Deserialize, Copy, Clone, PartialEq, Eq)]
pub enum Role {
    #[default]
    Basic,
    Member,
    Admin,
}

/// Snapshot of a paying account.
///
/// Only [`Account::balance`] takes part in payment allocation and it is never mutated by it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Account {
    pub id: AccountId,
    pub name: String,
    pub role: Role,
    pub email: Option<String>,
    pub balance: CoinAmount,
}

impl Account {
    pub fn new(id: AccountId, name: impl Into<String>, balance: CoinAmount) -> Self {
        Self {
            id,
            name: name.into(),
            role: Role::default(),
            email: None,
            balance,
        }
    }

    pub const fn balance(&self) -> CoinAmount {
        self.balance
    }
}
