//! Primitive ledger types.

use codec::{Decode, Encode, MaxEncodedLen};
use core::{fmt, str::FromStr};
use scale_info::TypeInfo;
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

/// Amount of tokens, in the smallest unit.
pub type Balance = u128;

/// One whole token expressed in the smallest unit (6 decimals).
pub const TOKEN_UNIT: Balance = 1_000_000;

/// Decimals reported by a ledger whose genesis does not override them.
pub const DEFAULT_DECIMALS: u8 = 6;

/// Maximum token name length in bytes.
pub const MAX_NAME_LEN: usize = 64;

/// Maximum token symbol length in bytes.
pub const MAX_SYMBOL_LEN: usize = 16;

/// Width of an account identifier in bytes.
pub const ACCOUNT_ID_LEN: usize = 20;

/// Opaque fixed-width account identifier.
///
/// [`AccountId::ZERO`] is reserved: it means "no account", is the owner after
/// renouncement, and is never a valid destination or spender.
#[derive(
    Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Encode, Decode, MaxEncodedLen, TypeInfo,
)]
pub struct AccountId(pub [u8; ACCOUNT_ID_LEN]);

impl AccountId {
    /// The sentinel "no account" identifier.
    pub const ZERO: AccountId = AccountId([0u8; ACCOUNT_ID_LEN]);

    /// Identifier whose last byte is `n`. Handy for fixtures and tooling.
    pub const fn from_index(n: u8) -> Self {
        let mut raw = [0u8; ACCOUNT_ID_LEN];
        raw[ACCOUNT_ID_LEN - 1] = n;
        AccountId(raw)
    }

    pub fn is_zero(&self) -> bool {
        *self == Self::ZERO
    }

    pub fn as_bytes(&self) -> &[u8; ACCOUNT_ID_LEN] {
        &self.0
    }
}

impl From<[u8; ACCOUNT_ID_LEN]> for AccountId {
    fn from(raw: [u8; ACCOUNT_ID_LEN]) -> Self {
        AccountId(raw)
    }
}

impl fmt::Display for AccountId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{}", hex::encode(self.0))
    }
}

impl fmt::Debug for AccountId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

/// Failure to parse an [`AccountId`] from text.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseAccountError {
    #[error("invalid hex: {0}")]
    Hex(String),

    #[error("expected {expected} bytes, got {got}")]
    Length { expected: usize, got: usize },
}

impl FromStr for AccountId {
    type Err = ParseAccountError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let digits = s.strip_prefix("0x").unwrap_or(s);
        let bytes = hex::decode(digits).map_err(|e| ParseAccountError::Hex(e.to_string()))?;
        let raw: [u8; ACCOUNT_ID_LEN] = bytes.as_slice().try_into().map_err(|_| {
            ParseAccountError::Length { expected: ACCOUNT_ID_LEN, got: bytes.len() }
        })?;
        Ok(AccountId(raw))
    }
}

impl Serialize for AccountId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for AccountId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(de::Error::custom)
    }
}
