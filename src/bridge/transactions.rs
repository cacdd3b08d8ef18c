// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0
//! Assembly of the approve and send calls for both account flows

use alloy_primitives::{Address, Bytes, U256};
use alloy_rpc_types::TransactionRequest;

use crate::contracts::oft::{self, MessagingFee, SendParam};
use crate::contracts::{erc20, value_helper};
use crate::protocol::buffered_approval_amount;

/// A call handed to the wallet layer for quoting or submission
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BridgeTransaction {
    pub to: Address,
    /// Native value attached to the call
    pub value: U256,
    pub data: Bytes,
    /// Sender, only set for externally-owned accounts
    pub from: Option<Address>,
}

impl From<BridgeTransaction> for TransactionRequest {
    fn from(tx: BridgeTransaction) -> Self {
        let request = TransactionRequest::default()
            .to(tx.to)
            .value(tx.value)
            .input(tx.data.into());
        match tx.from {
            Some(from) => request.from(from),
            None => request,
        }
    }
}

/// Approve and send transactions of an externally-owned account, in submission order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StandardTransactions {
    pub approve: BridgeTransaction,
    pub send: BridgeTransaction,
}

/// Builds the two sequential transactions of the standard flow.
///
/// The OFT is approved for exactly `send_param.amountLD` and the native fee is
/// attached to the send.
pub fn standard_transactions(
    owner: Address,
    token: Address,
    oft_address: Address,
    send_param: SendParam,
    native_fee: U256,
) -> StandardTransactions {
    let approve =
        erc20::approve_transaction(token, oft_address, send_param.amountLD, Some(owner));
    let send = oft::send_transaction(oft_address, owner, send_param, native_fee);
    StandardTransactions { approve, send }
}

/// Builds the calls bundled into one user operation.
///
/// The value helper is approved for the amount plus the token-denominated
/// bridge fee with a 10% margin, so a fee that moves between quote and
/// execution does not revert the bundle.
pub fn bundled_transactions(
    token: Address,
    helper: Address,
    oft_address: Address,
    send_param: SendParam,
    messaging_fee: &MessagingFee,
    bridge_fee: U256,
) -> Vec<BridgeTransaction> {
    let allowance = buffered_approval_amount(send_param.amountLD, bridge_fee);
    vec![
        erc20::approve_transaction(token, helper, allowance, None),
        value_helper::send_transaction(
            helper,
            oft_address,
            send_param,
            messaging_fee.nativeFee,
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::contracts::erc20::Erc20;
    use crate::contracts::oft::IOFT;
    use crate::contracts::value_helper::ITransactionValueHelper;
    use crate::protocol::build_send_param;
    use alloy_primitives::address;
    use alloy_sol_types::SolCall;

    const OWNER: Address = address!("a460aebce0d3a4becad8ccf9d6d4861296c503bd");
    const TOKEN: Address = address!("fd086bc7cd5c481dcc9c85ebe478a1c0b69fcbb9");
    const OFT: Address = address!("14e4a1b13bf7f943c8ff7c51fb60fa964a298d92");
    const HELPER: Address = address!("a90bf68787fd0d6fb5d4b6fa1e7d16ad2ec1ea5a");

    fn send_param() -> SendParam {
        build_send_param("ethereum", &OWNER.to_string(), U256::from(100)).unwrap()
    }

    #[test]
    fn test_standard_transactions() {
        let txs = standard_transactions(OWNER, TOKEN, OFT, send_param(), U256::from(7));

        assert_eq!(txs.approve.to, TOKEN);
        assert_eq!(txs.approve.from, Some(OWNER));
        assert!(txs.approve.value.is_zero());
        let approve = Erc20::approveCall::abi_decode(&txs.approve.data).unwrap();
        assert_eq!(approve.spender, OFT);
        assert_eq!(approve.amount, U256::from(100));

        assert_eq!(txs.send.to, OFT);
        assert_eq!(txs.send.from, Some(OWNER));
        assert_eq!(txs.send.value, U256::from(7));
        let send = IOFT::sendCall::abi_decode(&txs.send.data).unwrap();
        assert_eq!(send.sendParam, send_param());
        assert_eq!(send.fee.nativeFee, U256::from(7));
        assert!(send.fee.lzTokenFee.is_zero());
        assert_eq!(send.refundAddress, OWNER);
    }

    #[test]
    fn test_bundled_transactions() {
        let fee = MessagingFee {
            nativeFee: U256::from(7),
            lzTokenFee: U256::from(3),
        };
        let calls = bundled_transactions(TOKEN, HELPER, OFT, send_param(), &fee, U256::from(25));
        assert_eq!(calls.len(), 2);

        let approve = Erc20::approveCall::abi_decode(&calls[0].data).unwrap();
        assert_eq!(calls[0].to, TOKEN);
        assert_eq!(approve.spender, HELPER);
        assert_eq!(approve.amount, U256::from(128));

        assert_eq!(calls[1].to, HELPER);
        assert!(calls[1].value.is_zero());
        assert!(calls.iter().all(|call| call.from.is_none()));
        let send = ITransactionValueHelper::sendCall::abi_decode(&calls[1].data).unwrap();
        assert_eq!(send.oft, OFT);
        assert_eq!(send.sendParam, send_param());
        assert_eq!(send.fee.nativeFee, U256::from(7));
        assert!(send.fee.lzTokenFee.is_zero());
    }

    #[test]
    fn test_transaction_request_conversion() {
        let txs = standard_transactions(OWNER, TOKEN, OFT, send_param(), U256::from(7));
        let request: TransactionRequest = txs.send.clone().into();
        assert_eq!(request.from, Some(OWNER));
        assert_eq!(request.value, Some(U256::from(7)));
        assert_eq!(request.input.input(), Some(&txs.send.data));
    }
}
