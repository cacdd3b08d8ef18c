// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0
//! ERC20 contract bindings for approval operations
//!
//! Every bridge flow approves the spender (the OFT contract, or the value
//! helper for ERC-4337 accounts) before the send call.

use alloy_primitives::{Address, U256};
use alloy_sol_types::{sol, SolCall};
use tracing::info;

use crate::bridge::BridgeTransaction;

/// Create a transaction approving `spender` to move `amount` of `token`
///
/// `from` is set for externally-owned accounts and left empty for calls that
/// end up inside a user operation.
///
/// # Example
///
/// ```rust
/// use usdt0_bridge::contracts::erc20;
/// use alloy_primitives::{address, U256};
///
/// let token = address!("dac17f958d2ee523a2206206994597c13d831ec7");
/// let oft = address!("6c96de32cea08842dcc4058c14d3aaad7fa41dee");
/// let tx = erc20::approve_transaction(token, oft, U256::from(100), None);
/// assert_eq!(tx.to, token);
/// assert!(tx.value.is_zero());
/// ```
pub fn approve_transaction(
    token: Address,
    spender: Address,
    amount: U256,
    from: Option<Address>,
) -> BridgeTransaction {
    info!(
        spender = %spender,
        amount = %amount,
        contract_address = %token,
        event = "approve_transaction_created"
    );

    BridgeTransaction {
        to: token,
        value: U256::ZERO,
        data: Erc20::approveCall { spender, amount }.abi_encode().into(),
        from,
    }
}

sol!(
    #[allow(missing_docs)]
    contract Erc20 {
        function approve(address spender, uint256 amount) external returns (bool);
    }
);

#[cfg(test)]
mod tests {
    use super::*;
    use alloy_primitives::{address, hex};

    #[test]
    fn test_approve_calldata() {
        let token = address!("dac17f958d2ee523a2206206994597c13d831ec7");
        let spender = address!("6c96de32cea08842dcc4058c14d3aaad7fa41dee");
        let tx = approve_transaction(token, spender, U256::from(100), None);

        insta::assert_snapshot!(
            hex::encode(&tx.data),
            @"095ea7b30000000000000000000000006c96de32cea08842dcc4058c14d3aaad7fa41dee0000000000000000000000000000000000000000000000000000000000000064"
        );
        assert_eq!(tx.from, None);
    }

    #[test]
    fn test_approve_decodes() {
        let owner = address!("a460aebce0d3a4becad8ccf9d6d4861296c503bd");
        let tx = approve_transaction(Address::ZERO, owner, U256::MAX, Some(owner));
        let decoded = Erc20::approveCall::abi_decode(&tx.data).unwrap();
        assert_eq!(decoded.spender, owner);
        assert_eq!(decoded.amount, U256::MAX);
        assert_eq!(tx.from, Some(owner));
    }
}
