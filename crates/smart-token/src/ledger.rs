//! Ledger core: supply, balances and the transfer state machine.

use crate::{
    allowances::Allowances,
    errors::{Error, GenesisError, LedgerResult},
    events::Event,
    frozen::FrozenBalances,
    genesis::GenesisConfig,
    ownership::Ownership,
    receiver::{Recipient, ReceiverRegistry},
    types::{AccountId, Balance},
};
use codec::Encode;
use std::collections::BTreeMap;

const LOG_TARGET: &str = "runtime::smart-token";

/// Everything a failed `transfer_and_call` has to put back.
#[derive(Clone, Debug, PartialEq, Eq)]
struct LedgerState {
    total_supply: Balance,
    balances: BTreeMap<AccountId, Balance>,
    allowances: Allowances,
    frozen: FrozenBalances,
    ownership: Ownership,
}

/// Balance changes of a validated move, computed before anything is written.
#[derive(Clone, Copy, Debug)]
struct PendingMove {
    from: AccountId,
    to: AccountId,
    amount: Balance,
    from_balance: Balance,
    to_balance: Balance,
}

/// Token ledger.
///
/// All state lives in this value and every operation takes it by `&mut`.
/// Operations validate first and write last, so an `Err` never leaves a
/// partial update behind.
///
/// Committed changes are recorded in an event journal that only shrinks when
/// drained with [`Ledger::take_events`] (or [`Ledger::take_encoded_events`]).
/// A long-lived ledger needs an observer that drains it regularly.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Ledger {
    name: String,
    symbol: String,
    decimals: u8,
    self_account: AccountId,
    state: LedgerState,
    events: Vec<Event>,
}

impl Ledger {
    /// Builds a ledger with the whole supply held by `config.initial_holder`.
    pub fn new(config: GenesisConfig) -> Result<Self, GenesisError> {
        config.validate()?;
        let owner = config.owner();

        let mut balances = BTreeMap::new();
        if config.total_supply > 0 {
            balances.insert(config.initial_holder, config.total_supply);
        }

        let mut ledger = Self {
            name: config.token_name,
            symbol: config.token_symbol,
            decimals: config.decimals,
            self_account: config.self_account,
            state: LedgerState {
                total_supply: config.total_supply,
                balances,
                allowances: Allowances::default(),
                frozen: FrozenBalances::default(),
                ownership: Ownership::new(owner),
            },
            events: Vec::new(),
        };
        ledger.deposit_event(Event::Transfer {
            from: AccountId::ZERO,
            to: config.initial_holder,
            amount: config.total_supply,
        });
        log::info!(
            target: LOG_TARGET,
            "ledger {} created: supply {} held by {}, owner {}",
            ledger.self_account,
            config.total_supply,
            config.initial_holder,
            owner,
        );
        Ok(ledger)
    }

    // ---- reads ----

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    pub fn decimals(&self) -> u8 {
        self.decimals
    }

    /// The ledger's own identity.
    pub fn self_account(&self) -> AccountId {
        self.self_account
    }

    pub fn total_supply(&self) -> Balance {
        self.state.total_supply
    }

    pub fn balance_of(&self, account: &AccountId) -> Balance {
        self.state.balances.get(account).copied().unwrap_or_default()
    }

    pub fn allowance(&self, owner: &AccountId, spender: &AccountId) -> Balance {
        self.state.allowances.get(owner, spender)
    }

    pub fn frozen_of(&self, account: &AccountId) -> Balance {
        self.state.frozen.get(account)
    }

    /// Balance minus frozen amount: what the account may send.
    pub fn spendable_of(&self, account: &AccountId) -> Balance {
        self.balance_of(account).saturating_sub(self.frozen_of(account))
    }

    pub fn current_owner(&self) -> AccountId {
        self.state.ownership.current_owner()
    }

    /// Events deposited since the last [`Ledger::take_events`].
    pub fn events(&self) -> &[Event] {
        &self.events
    }

    pub fn last_event(&self) -> Option<&Event> {
        self.events.last()
    }

    /// Drains the event journal for delivery to observers.
    pub fn take_events(&mut self) -> Vec<Event> {
        core::mem::take(&mut self.events)
    }

    /// Drains the event journal as a SCALE-encoded `Vec<Event>`.
    pub fn take_encoded_events(&mut self) -> Vec<u8> {
        self.take_events().encode()
    }

    // ---- ownership ----

    pub fn transfer_ownership(&mut self, caller: &AccountId, new_owner: AccountId) -> LedgerResult<()> {
        let event = self.state.ownership.transfer_ownership(caller, new_owner)?;
        log::info!(target: LOG_TARGET, "ownership transferred from {} to {}", caller, new_owner);
        self.deposit_event(event);
        Ok(())
    }

    /// Gives up ownership for good. Owner-gated operations fail afterwards.
    pub fn renounce_ownership(&mut self, caller: &AccountId) -> LedgerResult<()> {
        let event = self.state.ownership.renounce_ownership(caller)?;
        log::info!(target: LOG_TARGET, "ownership renounced by {}", caller);
        self.deposit_event(event);
        Ok(())
    }

    // ---- frozen overlay ----

    /// Sets the frozen portion of `account` to exactly `amount`.
    pub fn freeze(&mut self, caller: &AccountId, account: AccountId, amount: Balance) -> LedgerResult<()> {
        self.set_frozen(caller, account, amount)?;
        self.deposit_event(Event::Frozen { account, amount });
        Ok(())
    }

    /// Sets the frozen portion of `account` to exactly `amount`.
    ///
    /// This is not a subtraction: pass the target frozen value, e.g. `0` to
    /// release everything. It may also raise the frozen amount.
    pub fn melt(&mut self, caller: &AccountId, account: AccountId, amount: Balance) -> LedgerResult<()> {
        self.set_frozen(caller, account, amount)?;
        self.deposit_event(Event::Melted { account, amount });
        Ok(())
    }

    fn set_frozen(&mut self, caller: &AccountId, account: AccountId, amount: Balance) -> LedgerResult<()> {
        self.state.ownership.ensure_owner(caller)?;
        if amount > self.balance_of(&account) {
            return Err(Error::InsufficientBalance);
        }
        self.state.frozen.set(account, amount);
        log::debug!(target: LOG_TARGET, "frozen amount of {} set to {}", account, amount);
        Ok(())
    }

    // ---- allowances ----

    /// Overwrites the allowance of `spender` over `owner`'s tokens.
    pub fn approve(&mut self, owner: AccountId, spender: AccountId, amount: Balance) -> LedgerResult<()> {
        self.ensure_valid_target(&spender)?;
        self.set_allowance(owner, spender, amount);
        Ok(())
    }

    pub fn increase_allowance(
        &mut self,
        owner: AccountId,
        spender: AccountId,
        delta: Balance,
    ) -> LedgerResult<()> {
        self.ensure_valid_target(&spender)?;
        let amount = self.state.allowances.increased(&owner, &spender, delta)?;
        self.set_allowance(owner, spender, amount);
        Ok(())
    }

    /// Fails with [`Error::Underflow`] if `delta` exceeds the current allowance.
    pub fn decrease_allowance(
        &mut self,
        owner: AccountId,
        spender: AccountId,
        delta: Balance,
    ) -> LedgerResult<()> {
        self.ensure_valid_target(&spender)?;
        let amount = self.state.allowances.decreased(&owner, &spender, delta)?;
        self.set_allowance(owner, spender, amount);
        Ok(())
    }

    fn set_allowance(&mut self, owner: AccountId, spender: AccountId, amount: Balance) {
        self.state.allowances.set(owner, spender, amount);
        log::debug!(target: LOG_TARGET, "allowance of {} over {} set to {}", spender, owner, amount);
        self.deposit_event(Event::Approval { owner, spender, amount });
    }

    // ---- transfers ----

    /// Moves `amount` from `sender` to `recipient`. Never notifies the recipient.
    pub fn transfer(&mut self, sender: AccountId, recipient: AccountId, amount: Balance) -> LedgerResult<()> {
        self.ensure_valid_target(&recipient)?;
        let pending = self.prepare_move(sender, recipient, amount)?;
        self.commit_move(pending);
        Ok(())
    }

    /// Moves `amount` of `owner`'s tokens to `recipient` on behalf of `spender`,
    /// consuming that much of the allowance.
    pub fn transfer_from(
        &mut self,
        spender: AccountId,
        owner: AccountId,
        recipient: AccountId,
        amount: Balance,
    ) -> LedgerResult<()> {
        self.ensure_valid_target(&recipient)?;
        let remaining = self.state.allowances.remaining_after_spend(&owner, &spender, amount)?;
        let pending = self.prepare_move(owner, recipient, amount)?;

        self.set_allowance(owner, spender, remaining);
        self.commit_move(pending);
        Ok(())
    }

    /// Transfers like [`Ledger::transfer`], then notifies the recipient if the
    /// registry resolves it as notification-capable.
    ///
    /// A plain recipient just receives the tokens. A capable recipient's
    /// handler runs after the balances are updated; if it fails, the transfer
    /// and everything the handler did to the ledger are rolled back and the
    /// call fails with [`Error::RecipientRejected`].
    pub fn transfer_and_call<R>(
        &mut self,
        sender: AccountId,
        recipient: AccountId,
        amount: Balance,
        data: &[u8],
        registry: &mut R,
    ) -> LedgerResult<()>
    where
        R: ReceiverRegistry + ?Sized,
    {
        self.ensure_valid_target(&recipient)?;
        let pending = self.prepare_move(sender, recipient, amount)?;

        match registry.resolve(&recipient) {
            Recipient::Plain => {
                self.commit_move(pending);
                Ok(())
            }
            Recipient::NotificationCapable(handler) => self.with_transaction(|ledger| {
                ledger.commit_move(pending);
                handler.on_token_transfer(ledger, sender, amount, data).map_err(|err| {
                    log::warn!(
                        target: LOG_TARGET,
                        "{} rejected transfer of {} from {}: {}",
                        recipient,
                        amount,
                        sender,
                        err,
                    );
                    Error::RecipientRejected
                })
            }),
        }
    }

    fn ensure_valid_target(&self, account: &AccountId) -> LedgerResult<()> {
        if account.is_zero() || *account == self.self_account {
            return Err(Error::InvalidAddress);
        }
        Ok(())
    }

    fn prepare_move(&self, from: AccountId, to: AccountId, amount: Balance) -> LedgerResult<PendingMove> {
        let balance = self.balance_of(&from);
        let spendable = balance.checked_sub(self.frozen_of(&from)).ok_or(Error::Underflow)?;
        if amount > spendable {
            return Err(Error::InsufficientSpendable);
        }
        let from_balance = balance.checked_sub(amount).ok_or(Error::Underflow)?;
        let to_balance = if from == to {
            balance
        } else {
            self.balance_of(&to).checked_add(amount).ok_or(Error::Overflow)?
        };
        Ok(PendingMove { from, to, amount, from_balance, to_balance })
    }

    fn commit_move(&mut self, pending: PendingMove) {
        let PendingMove { from, to, amount, from_balance, to_balance } = pending;
        if from != to {
            self.set_balance(from, from_balance);
            self.set_balance(to, to_balance);
        }
        log::debug!(target: LOG_TARGET, "transferred {} from {} to {}", amount, from, to);
        self.deposit_event(Event::Transfer { from, to, amount });
    }

    fn set_balance(&mut self, account: AccountId, balance: Balance) {
        if balance == 0 {
            self.state.balances.remove(&account);
        } else {
            self.state.balances.insert(account, balance);
        }
    }

    /// Runs `f` and restores state and event journal if it fails.
    ///
    /// The checkpoint is a full copy of the tables and the journal, so this
    /// costs O(accounts + pending events) per call. `f` may drain the journal
    /// through a reentrant call; a failure still puts back the journal as it
    /// was before `f` ran.
    fn with_transaction<T>(&mut self, f: impl FnOnce(&mut Self) -> LedgerResult<T>) -> LedgerResult<T> {
        let checkpoint = self.state.clone();
        let journal = self.events.clone();
        let result = f(self);
        if result.is_err() {
            self.state = checkpoint;
            self.events = journal;
        }
        result
    }

    fn deposit_event(&mut self, event: Event) {
        self.events.push(event);
    }

    /// Checks the accounting invariants: balances sum to the total supply and
    /// no account has more frozen than it holds.
    pub fn try_state(&self) -> Result<(), &'static str> {
        let mut sum: Balance = 0;
        for balance in self.state.balances.values() {
            sum = sum.checked_add(*balance).ok_or("sum of balances overflows")?;
        }
        if sum != self.state.total_supply {
            return Err("sum of balances does not match total supply");
        }
        for (account, frozen) in self.state.frozen.iter() {
            if *frozen > self.balance_of(account) {
                return Err("frozen amount exceeds balance");
            }
        }
        Ok(())
    }
}
