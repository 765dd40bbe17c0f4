//! Construction parameters for a [`Ledger`](crate::Ledger).

use crate::{
    errors::GenesisError,
    types::{AccountId, Balance, DEFAULT_DECIMALS, MAX_NAME_LEN, MAX_SYMBOL_LEN},
};
use serde::{Deserialize, Serialize};

/// Initial ledger state.
///
/// The whole `total_supply` is credited to `initial_holder`. Deserializes from
/// camelCase JSON, e.g.
///
/// ```json
/// {
///   "initialHolder": "0x0000000000000000000000000000000000000001",
///   "totalSupply": 10000000000000000,
///   "selfAccount": "0x00000000000000000000000000000000000000ff",
///   "tokenName": "Bridge Token",
///   "tokenSymbol": "BRG"
/// }
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct GenesisConfig {
    /// Privileged account. Defaults to `initial_holder`.
    #[serde(default)]
    pub owner: Option<AccountId>,
    pub initial_holder: AccountId,
    pub total_supply: Balance,
    /// The ledger's own identity; never a valid destination or spender.
    pub self_account: AccountId,
    #[serde(default)]
    pub token_name: String,
    #[serde(default)]
    pub token_symbol: String,
    #[serde(default = "default_decimals")]
    pub decimals: u8,
}

fn default_decimals() -> u8 {
    DEFAULT_DECIMALS
}

impl GenesisConfig {
    pub fn new(initial_holder: AccountId, total_supply: Balance, self_account: AccountId) -> Self {
        Self {
            owner: None,
            initial_holder,
            total_supply,
            self_account,
            token_name: String::new(),
            token_symbol: String::new(),
            decimals: DEFAULT_DECIMALS,
        }
    }

    pub fn with_owner(mut self, owner: AccountId) -> Self {
        self.owner = Some(owner);
        self
    }

    pub fn with_metadata(mut self, name: impl Into<String>, symbol: impl Into<String>, decimals: u8) -> Self {
        self.token_name = name.into();
        self.token_symbol = symbol.into();
        self.decimals = decimals;
        self
    }

    pub fn from_json(json: &str) -> Result<Self, GenesisError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn owner(&self) -> AccountId {
        self.owner.unwrap_or(self.initial_holder)
    }

    pub fn validate(&self) -> Result<(), GenesisError> {
        if self.initial_holder.is_zero() {
            return Err(GenesisError::ZeroAccount("initial holder"));
        }
        if self.self_account.is_zero() {
            return Err(GenesisError::ZeroAccount("self account"));
        }
        if self.owner().is_zero() {
            return Err(GenesisError::ZeroAccount("owner"));
        }
        if self.initial_holder == self.self_account {
            return Err(GenesisError::HolderIsLedger);
        }
        if self.token_name.len() > MAX_NAME_LEN {
            return Err(GenesisError::NameTooLong { max: MAX_NAME_LEN, got: self.token_name.len() });
        }
        if self.token_symbol.len() > MAX_SYMBOL_LEN {
            return Err(GenesisError::SymbolTooLong {
                max: MAX_SYMBOL_LEN,
                got: self.token_symbol.len(),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const HOLDER: AccountId = AccountId::from_index(1);
    const LEDGER: AccountId = AccountId::from_index(0xff);

    #[test]
    fn owner_defaults_to_holder() {
        let config = GenesisConfig::new(HOLDER, 100, LEDGER);
        assert_eq!(config.owner(), HOLDER);
        let other = AccountId::from_index(9);
        assert_eq!(config.with_owner(other).owner(), other);
    }

    #[test]
    fn parses_camel_case_json() {
        let json = r#"{
            "initialHolder": "0x0000000000000000000000000000000000000001",
            "totalSupply": 1000,
            "selfAccount": "0x00000000000000000000000000000000000000ff",
            "tokenName": "Bridge Token",
            "tokenSymbol": "BRG"
        }"#;
        let config = GenesisConfig::from_json(json).unwrap();
        assert_eq!(config.initial_holder, HOLDER);
        assert_eq!(config.self_account, LEDGER);
        assert_eq!(config.total_supply, 1000);
        assert_eq!(config.decimals, DEFAULT_DECIMALS);
        assert_eq!(config.owner, None);
        assert_eq!(config.token_symbol, "BRG");
    }

    #[test]
    fn malformed_json_is_reported() {
        assert!(matches!(GenesisConfig::from_json("{"), Err(GenesisError::Json(_))));
        let bad_account = r#"{"initialHolder":"0x01","totalSupply":1,"selfAccount":"0x02"}"#;
        assert!(matches!(GenesisConfig::from_json(bad_account), Err(GenesisError::Json(_))));
    }

    #[test]
    fn validate_rejects_bad_accounts() {
        assert!(matches!(
            GenesisConfig::new(AccountId::ZERO, 1, LEDGER).validate(),
            Err(GenesisError::ZeroAccount("initial holder"))
        ));
        assert!(matches!(
            GenesisConfig::new(HOLDER, 1, AccountId::ZERO).validate(),
            Err(GenesisError::ZeroAccount("self account"))
        ));
        assert!(matches!(
            GenesisConfig::new(HOLDER, 1, LEDGER).with_owner(AccountId::ZERO).validate(),
            Err(GenesisError::ZeroAccount("owner"))
        ));
        assert!(matches!(
            GenesisConfig::new(LEDGER, 1, LEDGER).validate(),
            Err(GenesisError::HolderIsLedger)
        ));
    }

    #[test]
    fn validate_bounds_metadata() {
        let long_name = "n".repeat(MAX_NAME_LEN + 1);
        assert!(matches!(
            GenesisConfig::new(HOLDER, 1, LEDGER).with_metadata(long_name, "TST", 6).validate(),
            Err(GenesisError::NameTooLong { .. })
        ));
        let long_symbol = "S".repeat(MAX_SYMBOL_LEN + 1);
        assert!(matches!(
            GenesisConfig::new(HOLDER, 1, LEDGER).with_metadata("Test", long_symbol, 6).validate(),
            Err(GenesisError::SymbolTooLong { .. })
        ));
    }
}
