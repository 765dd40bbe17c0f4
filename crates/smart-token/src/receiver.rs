//! Transfer notifications for recipients that opt in.
//!
//! A recipient is either [`Recipient::NotificationCapable`] or
//! [`Recipient::Plain`]. Which one is decided by a [`ReceiverRegistry`] lookup
//! before anything is called, so a plain account is never probed with a call
//! that is expected to fail.

use crate::{
    errors::Error,
    ledger::Ledger,
    types::{AccountId, Balance},
};
use std::collections::BTreeMap;

/// Rejection raised by a [`TokenReceiver`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{reason}")]
pub struct ReceiverError {
    pub reason: String,
}

impl ReceiverError {
    pub fn new(reason: impl Into<String>) -> Self {
        Self { reason: reason.into() }
    }
}

impl From<Error> for ReceiverError {
    fn from(err: Error) -> Self {
        Self { reason: err.to_string() }
    }
}

/// Handler invoked by `transfer_and_call` after the tokens have been credited.
///
/// The handler gets the ledger back and may call into it; balances already
/// include the transfer being notified. Returning an error undoes the transfer
/// and anything the handler did to the ledger.
pub trait TokenReceiver {
    fn on_token_transfer(
        &mut self,
        ledger: &mut Ledger,
        sender: AccountId,
        amount: Balance,
        data: &[u8],
    ) -> Result<(), ReceiverError>;
}

/// Resolved kind of a transfer destination.
pub enum Recipient<'a> {
    NotificationCapable(&'a mut dyn TokenReceiver),
    Plain,
}

impl Recipient<'_> {
    pub fn is_notification_capable(&self) -> bool {
        matches!(self, Recipient::NotificationCapable(_))
    }
}

/// Lookup from account to [`Recipient`]. Resolving must not change anything.
pub trait ReceiverRegistry {
    fn resolve(&mut self, account: &AccountId) -> Recipient<'_>;
}

/// Registry in which every account is a plain value holder.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoReceivers;

impl ReceiverRegistry for NoReceivers {
    fn resolve(&mut self, _account: &AccountId) -> Recipient<'_> {
        Recipient::Plain
    }
}

/// Map of accounts to their notification handlers.
#[derive(Default)]
pub struct Receivers {
    handlers: BTreeMap<AccountId, Box<dyn TokenReceiver>>,
}

impl Receivers {
    pub fn new() -> Self {
        Self::default()
    }

    /// Installs `handler` for `account`, returning the handler it replaces.
    pub fn register(
        &mut self,
        account: AccountId,
        handler: Box<dyn TokenReceiver>,
    ) -> Option<Box<dyn TokenReceiver>> {
        self.handlers.insert(account, handler)
    }

    pub fn unregister(&mut self, account: &AccountId) -> Option<Box<dyn TokenReceiver>> {
        self.handlers.remove(account)
    }

    pub fn is_notification_capable(&self, account: &AccountId) -> bool {
        self.handlers.contains_key(account)
    }
}

impl ReceiverRegistry for Receivers {
    fn resolve(&mut self, account: &AccountId) -> Recipient<'_> {
        match self.handlers.get_mut(account) {
            Some(handler) => Recipient::NotificationCapable(handler.as_mut()),
            None => Recipient::Plain,
        }
    }
}
