//! LayerZero OFT contract bindings
//!
//! The USDT0 OFT, the legacy mesh and the XAUt0 OFT all expose the same
//! `IOFT` surface, so a single binding covers every [`ContractKind`](crate::ContractKind).

use alloy_network::Ethereum;
use alloy_primitives::{Address, U256};
use alloy_provider::Provider;
use alloy_sol_types::{sol, SolCall};
use tracing::{debug, info};

use crate::bridge::BridgeTransaction;
use IOFT::IOFTInstance;

sol! {
    /// Parameters of an OFT `send`, shared by `quoteSend` and the value helper
    #[derive(Debug, Default, PartialEq, Eq)]
    struct SendParam {
        uint32 dstEid;
        bytes32 to;
        uint256 amountLD;
        uint256 minAmountLD;
        bytes extraOptions;
        bytes composeMsg;
        bytes oftCmd;
    }

    /// LayerZero messaging fee split into native and ZRO parts
    #[derive(Debug, Default, PartialEq, Eq)]
    struct MessagingFee {
        uint256 nativeFee;
        uint256 lzTokenFee;
    }

    #[derive(Debug, PartialEq, Eq)]
    struct MessagingReceipt {
        bytes32 guid;
        uint64 nonce;
        MessagingFee fee;
    }

    #[derive(Debug, PartialEq, Eq)]
    struct OFTReceipt {
        uint256 amountSentLD;
        uint256 amountReceivedLD;
    }

    #[allow(missing_docs)]
    #[sol(rpc)]
    interface IOFT {
        function token() external view returns (address);
        function quoteSend(SendParam calldata sendParam, bool payInLzToken) external view returns (MessagingFee memory msgFee);
        function send(SendParam calldata sendParam, MessagingFee calldata fee, address refundAddress) external payable returns (MessagingReceipt memory msgReceipt, OFTReceipt memory oftReceipt);
    }

    /// Fee-conversion helper used by ERC-4337 accounts
    #[allow(missing_docs)]
    #[sol(rpc)]
    interface ITransactionValueHelper {
        function quote(address oft, MessagingFee calldata fee) external view returns (uint256);
        function send(address oft, SendParam calldata sendParam, MessagingFee calldata fee) external payable;
    }
}

/// OFT contract wrapper for the read-only calls used during bridging
pub struct OftContract<P: Provider<Ethereum>> {
    instance: IOFTInstance<P>,
}

impl<P: Provider<Ethereum>> OftContract<P> {
    pub fn new(address: Address, provider: P) -> Self {
        debug!(
            contract_address = %address,
            event = "oft_contract_initialized"
        );
        Self {
            instance: IOFTInstance::new(address, provider),
        }
    }

    /// Returns the ERC20 token the OFT moves
    pub async fn token(&self) -> Result<Address, alloy_contract::Error> {
        let token = self.instance.token().call().await?;

        debug!(
            token = %token,
            contract_address = %self.instance.address(),
            event = "oft_token_retrieved"
        );

        Ok(token)
    }

    /// Simulates `quoteSend` for the given parameters
    pub async fn quote_send(
        &self,
        send_param: SendParam,
        pay_in_lz_token: bool,
    ) -> Result<MessagingFee, alloy_contract::Error> {
        let fee = self
            .instance
            .quoteSend(send_param, pay_in_lz_token)
            .call()
            .await?;

        info!(
            native_fee = %fee.nativeFee,
            lz_token_fee = %fee.lzTokenFee,
            contract_address = %self.instance.address(),
            event = "oft_fee_quoted"
        );

        Ok(fee)
    }

    pub fn address(&self) -> Address {
        *self.instance.address()
    }
}

/// Builds the `send` transaction for an externally-owned account
///
/// The native fee is attached as value and the sender receives any refund.
pub fn send_transaction(
    oft: Address,
    from: Address,
    send_param: SendParam,
    native_fee: U256,
) -> BridgeTransaction {
    let data = IOFT::sendCall {
        sendParam: send_param,
        fee: MessagingFee {
            nativeFee: native_fee,
            lzTokenFee: U256::ZERO,
        },
        refundAddress: from,
    }
    .abi_encode();

    info!(
        from = %from,
        native_fee = %native_fee,
        contract_address = %oft,
        event = "oft_send_transaction_created"
    );

    BridgeTransaction {
        to: oft,
        value: native_fee,
        data: data.into(),
        from: Some(from),
    }
}
