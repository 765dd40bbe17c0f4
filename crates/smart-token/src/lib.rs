//! Smart token ledger.
//!
//! An in-memory token with a fixed supply, an owner who may freeze part of any
//! account's balance, ERC-20 style allowances, and `transfer_and_call`
//! notifications for recipients that register a handler.
//!
//! # Key Types
//!
//! - [`Ledger`]: the state and every operation on it
//! - [`GenesisConfig`]: construction parameters, loadable from JSON
//! - [`TokenReceiver`] / [`ReceiverRegistry`]: the notification protocol
//! - [`Event`]: what observers are told after each committed change
//!
//! # Example
//!
//! ```
//! use smart_token::{AccountId, GenesisConfig, Ledger, NoReceivers, TOKEN_UNIT};
//!
//! let holder = AccountId::from_index(1);
//! let alice = AccountId::from_index(2);
//! let config = GenesisConfig::new(holder, 1_000 * TOKEN_UNIT, AccountId::from_index(0xff));
//! let mut ledger = Ledger::new(config).unwrap();
//!
//! ledger.transfer(holder, alice, 10 * TOKEN_UNIT).unwrap();
//! ledger.transfer_and_call(alice, holder, TOKEN_UNIT, b"memo", &mut NoReceivers).unwrap();
//! assert_eq!(ledger.balance_of(&alice), 9 * TOKEN_UNIT);
//! ```

pub mod allowances;
pub mod errors;
pub mod events;
pub mod frozen;
pub mod genesis;
pub mod ledger;
pub mod ownership;
pub mod receiver;
pub mod types;

#[cfg(test)]
mod mock;


pub use errors::{Error, GenesisError, LedgerResult};
pub use events::Event;
pub use genesis::GenesisConfig;
pub use ledger::Ledger;
pub use receiver::{NoReceivers, ReceiverError, ReceiverRegistry, Receivers, Recipient, TokenReceiver};
pub use types::*;
