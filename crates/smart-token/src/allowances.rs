//! Delegated spending budgets, keyed by `(owner, spender)`.

use crate::{
    errors::{Error, LedgerResult},
    types::{AccountId, Balance},
};
use std::collections::BTreeMap;

/// Allowance table. An absent pair reads as zero and zero entries are not stored.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Allowances {
    entries: BTreeMap<(AccountId, AccountId), Balance>,
}

impl Allowances {
    pub fn get(&self, owner: &AccountId, spender: &AccountId) -> Balance {
        self.entries.get(&(*owner, *spender)).copied().unwrap_or_default()
    }

    /// Overwrites the allowance. No reset-to-zero step is required first.
    pub fn set(&mut self, owner: AccountId, spender: AccountId, amount: Balance) {
        if amount == 0 {
            self.entries.remove(&(owner, spender));
        } else {
            self.entries.insert((owner, spender), amount);
        }
    }

    /// Allowance after adding `delta`, without applying it.
    pub fn increased(
        &self,
        owner: &AccountId,
        spender: &AccountId,
        delta: Balance,
    ) -> LedgerResult<Balance> {
        self.get(owner, spender).checked_add(delta).ok_or(Error::Overflow)
    }

    /// Allowance after removing `delta`, without applying it. Never clamps.
    pub fn decreased(
        &self,
        owner: &AccountId,
        spender: &AccountId,
        delta: Balance,
    ) -> LedgerResult<Balance> {
        self.get(owner, spender).checked_sub(delta).ok_or(Error::Underflow)
    }

    /// Allowance left after `spender` moves `amount` of `owner`'s tokens.
    pub fn remaining_after_spend(
        &self,
        owner: &AccountId,
        spender: &AccountId,
        amount: Balance,
    ) -> LedgerResult<Balance> {
        self.get(owner, spender).checked_sub(amount).ok_or(Error::InsufficientAllowance)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
