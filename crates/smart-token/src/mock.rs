use crate::{
    AccountId, Balance, Event, GenesisConfig, Ledger, ReceiverError, ReceiverRegistry, Recipient,
    TokenReceiver, TOKEN_UNIT,
};

pub const OWNER: AccountId = AccountId::from_index(1);
pub const ALICE: AccountId = AccountId::from_index(2);
pub const BOB: AccountId = AccountId::from_index(3);
pub const CHARLIE: AccountId = AccountId::from_index(4);
pub const RECEIVER: AccountId = AccountId::from_index(10);
pub const LEDGER_ACCOUNT: AccountId = AccountId::from_index(0xff);

pub const TOTAL_SUPPLY: Balance = 10_000_000_000 * TOKEN_UNIT;

/// Asserts the call succeeded.
macro_rules! assert_ok {
    ($call:expr $(,)?) => {
        assert_eq!($call, Ok(()))
    };
}

/// Asserts the call failed with `$err` and left the ledger untouched.
macro_rules! assert_noop {
    ($ledger:ident, $call:expr, $err:expr $(,)?) => {{
        let before = $ledger.clone();
        assert_eq!($call, Err($err));
        assert_eq!($ledger, before, "failed call changed ledger state");
    }};
}

pub(crate) use assert_noop;
pub(crate) use assert_ok;

/// Ledger with the whole supply held by [`OWNER`], events cleared.
pub fn new_test_ledger() -> Ledger {
    let config = GenesisConfig::new(OWNER, TOTAL_SUPPLY, LEDGER_ACCOUNT).with_metadata(
        "Bridge Token",
        "BRG",
        6,
    );
    let mut ledger = Ledger::new(config).unwrap();
    ledger.take_events();
    ledger
}

/// Records every notification it receives.
#[derive(Default)]
pub struct MockReceiver {
    pub calls: u32,
    pub token_sender: Option<AccountId>,
    pub sent_value: Balance,
    pub data: Vec<u8>,
}

impl TokenReceiver for MockReceiver {
    fn on_token_transfer(
        &mut self,
        _ledger: &mut Ledger,
        sender: AccountId,
        amount: Balance,
        data: &[u8],
    ) -> Result<(), ReceiverError> {
        self.calls += 1;
        self.token_sender = Some(sender);
        self.sent_value = amount;
        self.data = data.to_vec();
        Ok(())
    }
}

/// Fails every notification.
#[derive(Default)]
pub struct RejectingReceiver {
    pub calls: u32,
}

impl TokenReceiver for RejectingReceiver {
    fn on_token_transfer(
        &mut self,
        _ledger: &mut Ledger,
        _sender: AccountId,
        _amount: Balance,
        _data: &[u8],
    ) -> Result<(), ReceiverError> {
        self.calls += 1;
        Err(ReceiverError::new("not accepting tokens"))
    }
}

/// Re-enters the ledger: passes what it received on to `forward_to`, then
/// fails if `fail_after_forward` is set.
pub struct ForwardingReceiver {
    pub own_account: AccountId,
    pub forward_to: AccountId,
    pub fail_after_forward: bool,
    pub balance_seen: Option<Balance>,
}

impl ForwardingReceiver {
    pub fn new(own_account: AccountId, forward_to: AccountId) -> Self {
        Self { own_account, forward_to, fail_after_forward: false, balance_seen: None }
    }
}

impl TokenReceiver for ForwardingReceiver {
    fn on_token_transfer(
        &mut self,
        ledger: &mut Ledger,
        _sender: AccountId,
        amount: Balance,
        _data: &[u8],
    ) -> Result<(), ReceiverError> {
        self.balance_seen = Some(ledger.balance_of(&self.own_account));
        ledger.transfer(self.own_account, self.forward_to, amount)?;
        if self.fail_after_forward {
            return Err(ReceiverError::new("forwarded, then gave up"));
        }
        Ok(())
    }
}

/// Drains the ledger's event journal, moves `transfers` single tokens to
/// `forward_to` and then fails.
pub struct DrainingReceiver {
    pub own_account: AccountId,
    pub forward_to: AccountId,
    pub transfers: u32,
    pub drained: Vec<Event>,
}

impl TokenReceiver for DrainingReceiver {
    fn on_token_transfer(
        &mut self,
        ledger: &mut Ledger,
        _sender: AccountId,
        _amount: Balance,
        _data: &[u8],
    ) -> Result<(), ReceiverError> {
        self.drained = ledger.take_events();
        for _ in 0..self.transfers {
            ledger.transfer(self.own_account, self.forward_to, 1)?;
        }
        Err(ReceiverError::new("drained the journal, then gave up"))
    }
}

/// Registry where exactly one account is notification-capable. Keeps the
/// concrete receiver reachable so tests can inspect it afterwards.
pub struct SingleReceiver<R> {
    pub account: AccountId,
    pub receiver: R,
}

impl<R> SingleReceiver<R> {
    pub fn new(account: AccountId, receiver: R) -> Self {
        Self { account, receiver }
    }
}

impl<R: TokenReceiver> ReceiverRegistry for SingleReceiver<R> {
    fn resolve(&mut self, account: &AccountId) -> Recipient<'_> {
        if *account == self.account {
            Recipient::NotificationCapable(&mut self.receiver)
        } else {
            Recipient::Plain
        }
    }
}
