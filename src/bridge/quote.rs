//! LayerZero fee quoting for both account flows

use alloy_primitives::{Address, U256};
use tracing::{info, Instrument};

use super::deadline::Deadline;
use super::resolver::OftContractHandle;
use crate::chain::ChainEntry;
use crate::contracts::oft::{MessagingFee, SendParam};
use crate::error::{BridgeError, Result};
use crate::spans;
use crate::traits::BridgeReader;

/// Quotes the native messaging fee of a standard send.
pub(crate) async fn quote_native_fee<R: BridgeReader + ?Sized>(
    reader: &R,
    oft: &OftContractHandle,
    send_param: &SendParam,
    deadline: Deadline,
) -> Result<MessagingFee> {
    let span = spans::quote_fees(&oft.address, send_param.dstEid, false);
    async {
        let fee = deadline
            .run(
                "oft.quote_send",
                reader.quote_send(oft.address, send_param, false),
            )
            .await?;
        info!(
            native_fee = %fee.nativeFee,
            event = "native_fee_quoted"
        );
        Ok(fee)
    }
    .instrument(span)
    .await
}

/// Quote of a bundled send: the messaging fee and its value helper price in token units
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct TokenFeeQuote {
    pub helper: Address,
    pub messaging_fee: MessagingFee,
    pub bridge_fee: U256,
}

/// Quotes the token-denominated fee charged by the source chain's value helper.
///
/// # Errors
///
/// Returns [`BridgeError::UnsupportedOperation`] before any network call if
/// the source chain has no value helper.
pub(crate) async fn quote_token_fee<R: BridgeReader + ?Sized>(
    reader: &R,
    source: &ChainEntry,
    oft: &OftContractHandle,
    send_param: &SendParam,
    deadline: Deadline,
) -> Result<TokenFeeQuote> {
    let helper = source.value_helper().ok_or_else(|| {
        BridgeError::UnsupportedOperation(format!(
            "ERC-4337 bridging is not available on {}: no transaction value helper",
            source.name()
        ))
    })?;

    let span = spans::quote_fees(&oft.address, send_param.dstEid, true);
    async {
        let messaging_fee = deadline
            .run(
                "oft.quote_send",
                reader.quote_send(oft.address, send_param, false),
            )
            .await?;
        let bridge_fee = deadline
            .run(
                "value_helper.quote",
                reader.quote_value_helper(helper, oft.address, &messaging_fee),
            )
            .await?;

        info!(
            native_fee = %messaging_fee.nativeFee,
            bridge_fee = %bridge_fee,
            helper = %helper,
            event = "token_fee_quoted"
        );

        Ok(TokenFeeQuote {
            helper,
            messaging_fee,
            bridge_fee,
        })
    }
    .instrument(span)
    .await
}
