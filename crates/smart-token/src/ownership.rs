//! Single-owner access control.

use crate::{
    errors::{Error, LedgerResult},
    events::Event,
    types::AccountId,
};
use codec::{Decode, Encode};
use scale_info::TypeInfo;

/// Tracks the privileged account that may run administrative operations.
///
/// Once renounced the owner is [`AccountId::ZERO`] and no caller can pass
/// [`Ownership::ensure_owner`] again, including a caller presenting the zero
/// account itself.
#[derive(Clone, Debug, PartialEq, Eq, Encode, Decode, TypeInfo)]
pub struct Ownership {
    owner: AccountId,
}

impl Ownership {
    pub fn new(owner: AccountId) -> Self {
        Self { owner }
    }

    pub fn current_owner(&self) -> AccountId {
        self.owner
    }

    pub fn is_renounced(&self) -> bool {
        self.owner.is_zero()
    }

    pub fn ensure_owner(&self, caller: &AccountId) -> LedgerResult<()> {
        if self.is_renounced() || *caller != self.owner {
            return Err(Error::Unauthorized);
        }
        Ok(())
    }

    pub fn transfer_ownership(
        &mut self,
        caller: &AccountId,
        new_owner: AccountId,
    ) -> LedgerResult<Event> {
        self.ensure_owner(caller)?;
        if new_owner.is_zero() {
            return Err(Error::InvalidAddress);
        }
        let previous_owner = core::mem::replace(&mut self.owner, new_owner);
        Ok(Event::OwnershipTransferred { previous_owner, new_owner })
    }

    pub fn renounce_ownership(&mut self, caller: &AccountId) -> LedgerResult<Event> {
        self.ensure_owner(caller)?;
        let previous_owner = core::mem::replace(&mut self.owner, AccountId::ZERO);
        Ok(Event::OwnershipRenounced { previous_owner })
    }
}
