//! Transaction value helper bindings
//!
//! ERC-4337 accounts cannot attach a native value that tracks a volatile
//! LayerZero fee, so on supported chains they route the send through this
//! helper. It converts the native `MessagingFee` into token units, pulls that
//! amount together with the bridged amount, and pays the fee itself.

use alloy_network::Ethereum;
use alloy_primitives::{Address, U256};
use alloy_provider::Provider;
use alloy_sol_types::SolCall;
use tracing::{debug, info};

use super::oft::{MessagingFee, SendParam};
use crate::bridge::BridgeTransaction;

// Declared next to `SendParam` and `MessagingFee` so both bindings share those types.
pub use super::oft::ITransactionValueHelper;
use super::oft::ITransactionValueHelper::ITransactionValueHelperInstance;

pub struct ValueHelperContract<P: Provider<Ethereum>> {
    instance: ITransactionValueHelperInstance<P>,
}

impl<P: Provider<Ethereum>> ValueHelperContract<P> {
    pub fn new(address: Address, provider: P) -> Self {
        debug!(
            contract_address = %address,
            event = "value_helper_contract_initialized"
        );
        Self {
            instance: ITransactionValueHelperInstance::new(address, provider),
        }
    }

    /// Converts a native messaging fee into the token amount the helper charges
    pub async fn quote(
        &self,
        oft: Address,
        fee: MessagingFee,
    ) -> Result<U256, alloy_contract::Error> {
        let token_fee = self.instance.quote(oft, fee).call().await?;

        info!(
            oft = %oft,
            token_fee = %token_fee,
            contract_address = %self.instance.address(),
            event = "value_helper_fee_quoted"
        );

        Ok(token_fee)
    }
}

/// Builds the helper `send` call bundled into a user operation
///
/// The ZRO part of the fee is always zeroed and no value is attached.
pub fn send_transaction(
    helper: Address,
    oft: Address,
    send_param: SendParam,
    native_fee: U256,
) -> BridgeTransaction {
    let data = ITransactionValueHelper::sendCall {
        oft,
        sendParam: send_param,
        fee: MessagingFee {
            nativeFee: native_fee,
            lzTokenFee: U256::ZERO,
        },
    }
    .abi_encode();

    info!(
        oft = %oft,
        native_fee = %native_fee,
        contract_address = %helper,
        event = "value_helper_send_transaction_created"
    );

    BridgeTransaction {
        to: helper,
        value: U256::ZERO,
        data: data.into(),
        from: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::protocol::build_send_param;
    use alloy_primitives::address;

    const HELPER: Address = address!("a90bf68787fd0d6fb5d4b6fa1e7d16ad2ec1ea5a");
    const OFT: Address = address!("14e4a1b13bf7f943c8ff7c51fb60fa964a298d92");

    #[test]
    fn test_send_calldata_carries_the_oft_send_param() {
        let send_param = build_send_param(
            "tron",
            "TR7NHqjeKQxGTCi8q8ZY4pL8otSzgjLj6t",
            U256::from(5_000_000),
        )
        .unwrap();

        let tx = send_transaction(HELPER, OFT, send_param.clone(), U256::from(9));
        assert_eq!(tx.to, HELPER);
        assert!(tx.value.is_zero());
        assert_eq!(tx.from, None);

        let call = ITransactionValueHelper::sendCall::abi_decode(&tx.data).unwrap();
        assert_eq!(call.oft, OFT);
        assert_eq!(call.sendParam, send_param);
        assert_eq!(
            call.fee,
            MessagingFee {
                nativeFee: U256::from(9),
                lzTokenFee: U256::ZERO,
            }
        );
    }

    #[test]
    fn test_quote_calldata_takes_the_oft_messaging_fee() {
        let fee = MessagingFee {
            nativeFee: U256::from(1_000),
            lzTokenFee: U256::ZERO,
        };
        let data = ITransactionValueHelper::quoteCall {
            oft: OFT,
            fee: fee.clone(),
        }
        .abi_encode();

        let decoded = ITransactionValueHelper::quoteCall::abi_decode(&data).unwrap();
        assert_eq!(decoded.oft, OFT);
        assert_eq!(decoded.fee, fee);
    }
}
