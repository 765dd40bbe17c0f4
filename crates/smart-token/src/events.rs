//! Events deposited by the ledger for external observers.

use crate::types::{AccountId, Balance};
use codec::{Decode, Encode};
use scale_info::TypeInfo;

#[derive(Clone, Debug, PartialEq, Eq, Encode, Decode, TypeInfo)]
pub enum Event {
    /// Ownership moved to a new account
    OwnershipTransferred { previous_owner: AccountId, new_owner: AccountId },
    /// Ownership given up; owner-gated operations are disabled for good
    OwnershipRenounced { previous_owner: AccountId },
    /// Tokens moved from one account to another. `from` is the zero account at genesis.
    Transfer { from: AccountId, to: AccountId, amount: Balance },
    /// Allowance of `spender` over `owner`'s tokens is now `amount`
    Approval { owner: AccountId, spender: AccountId, amount: Balance },
    /// Frozen portion of an account set by `freeze`
    Frozen { account: AccountId, amount: Balance },
    /// Frozen portion of an account set by `melt`
    Melted { account: AccountId, amount: Balance },
}

#[cfg(test)]
mod tests {
    use super::*;
    use scale_info::{TypeDef, TypeInfo};

    #[test]
    fn event_scale_round_trip() {
        let event = Event::Approval {
            owner: AccountId::from_index(1),
            spender: AccountId::from_index(2),
            amount: 1_000,
        };
        let encoded = event.encode();
        // variant index, two 20-byte accounts, a 16-byte u128
        assert_eq!(encoded.len(), 1 + 20 + 20 + 16);
        assert_eq!(encoded[0], 3);
        assert_eq!(Event::decode(&mut &encoded[..]).unwrap(), event);
    }

    #[test]
    fn type_info_lists_every_event() {
        let info = Event::type_info();
        let TypeDef::Variant(def) = info.type_def else {
            panic!("Event should be described as a variant type");
        };
        let names: Vec<_> = def.variants.iter().map(|v| v.name).collect();
        assert_eq!(
            names,
            [
                "OwnershipTransferred",
                "OwnershipRenounced",
                "Transfer",
                "Approval",
                "Frozen",
                "Melted"
            ]
        );
    }
}
