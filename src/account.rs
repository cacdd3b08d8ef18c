//! The closed set of wallet accounts a bridge can operate on

use std::fmt;
use std::sync::Arc;

use crate::traits::{EvmAccount, ReadOnlyEvmAccount, ReadOnlySmartAccount, SmartAccount};

/// Wallet account injected into the bridge
///
/// Standard accounts approve and send in two transactions. Abstracted
/// (ERC-4337) accounts bundle both calls into one user operation. Read-only
/// variants can quote but never bridge.
///
/// # Example
///
/// ```rust,ignore
/// use std::sync::Arc;
/// use usdt0_bridge::BridgeAccount;
///
/// let account = BridgeAccount::ReadOnlyStandard(Arc::new(my_watch_only_wallet));
/// assert!(account.is_read_only());
/// ```
#[derive(Clone)]
pub enum BridgeAccount {
    Standard(Arc<dyn EvmAccount>),
    Abstracted(Arc<dyn SmartAccount>),
    ReadOnlyStandard(Arc<dyn ReadOnlyEvmAccount>),
    ReadOnlyAbstracted(Arc<dyn ReadOnlySmartAccount>),
}

impl BridgeAccount {
    /// Returns the static name of the account variant, used in logs and errors
    pub fn kind(&self) -> &'static str {
        match self {
            BridgeAccount::Standard(_) => "standard",
            BridgeAccount::Abstracted(_) => "abstracted",
            BridgeAccount::ReadOnlyStandard(_) => "read_only_standard",
            BridgeAccount::ReadOnlyAbstracted(_) => "read_only_abstracted",
        }
    }

    pub fn is_read_only(&self) -> bool {
        matches!(
            self,
            BridgeAccount::ReadOnlyStandard(_) | BridgeAccount::ReadOnlyAbstracted(_)
        )
    }
}

impl fmt::Debug for BridgeAccount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("BridgeAccount").field(&self.kind()).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{FakeEvmAccount, FakeSmartAccount};
    use alloy_primitives::Address;
    use rstest::rstest;

    #[rstest]
    #[case(
        BridgeAccount::Standard(Arc::new(FakeEvmAccount::new(Address::ZERO))),
        "standard",
        false
    )]
    #[case(
        BridgeAccount::Abstracted(Arc::new(FakeSmartAccount::new(Address::ZERO))),
        "abstracted",
        false
    )]
    #[case(
        BridgeAccount::ReadOnlyStandard(Arc::new(FakeEvmAccount::new(Address::ZERO))),
        "read_only_standard",
        true
    )]
    #[case(
        BridgeAccount::ReadOnlyAbstracted(Arc::new(FakeSmartAccount::new(Address::ZERO))),
        "read_only_abstracted",
        true
    )]
    fn test_account_kind(
        #[case] account: BridgeAccount,
        #[case] kind: &str,
        #[case] read_only: bool,
    ) {
        assert_eq!(account.kind(), kind);
        assert_eq!(account.is_read_only(), read_only);
        assert_eq!(format!("{account:?}"), format!("BridgeAccount({kind:?})"));
    }
}
