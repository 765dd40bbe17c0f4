//! Per-account frozen amounts, overlaid on balances.

use crate::types::{AccountId, Balance};
use std::collections::BTreeMap;

/// Non-spendable portion of each account's balance.
///
/// Values are set absolutely, never added or subtracted. Keeping each entry
/// at or below the account's balance is the ledger's job.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FrozenBalances {
    entries: BTreeMap<AccountId, Balance>,
}

impl FrozenBalances {
    pub fn get(&self, account: &AccountId) -> Balance {
        self.entries.get(account).copied().unwrap_or_default()
    }

    pub fn set(&mut self, account: AccountId, amount: Balance) {
        if amount == 0 {
            self.entries.remove(&account);
        } else {
            self.entries.insert(account, amount);
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (&AccountId, &Balance)> {
        self.entries.iter()
    }
}
