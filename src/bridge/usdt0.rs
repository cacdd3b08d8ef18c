use std::sync::OnceLock;

use alloy_primitives::Address;
use async_trait::async_trait;
use bon::Builder;
use tracing::{error, field, info, Instrument, Span};

use super::bridge_trait::BridgeProtocol;
use super::config::{BridgeConfig, BridgeOverrides};
use super::deadline::Deadline;
use super::params::{BridgeOptions, BridgeQuote, BridgeResult};
use super::quote::{quote_native_fee, quote_token_fee};
use super::resolver::{probe_oft_contract, OftContractHandle};
use super::transactions::{
    bundled_transactions, standard_transactions, BridgeTransaction, StandardTransactions,
};
use crate::account::BridgeAccount;
use crate::chain::{by_chain_id, lookup, ChainEntry};
use crate::contracts::oft::SendParam;
use crate::error::{BridgeError, Result};
use crate::protocol::{encode_recipient, exceeds_max_fee, send_param_for};
use crate::spans;
use crate::traits::{
    BridgeReader, EvmAccount, ReadOnlyEvmAccount, ReadOnlySmartAccount, SmartAccount,
    UserOperationConfig,
};

/// USDT0 bridge over LayerZero OFT
///
/// Moves USDT0, XAUt0 or legacy-mesh USDT from the connected EVM chain to any
/// chain in the registry. Standard accounts approve and send in two
/// transactions; ERC-4337 accounts submit both calls as one user operation
/// routed through the source chain's transaction value helper.
///
/// # Example
///
/// ```rust,no_run
/// # use std::sync::Arc;
/// # use usdt0_bridge::{BridgeAccount, BridgeConfig, BridgeOptions, BridgeOverrides, Usdt0Bridge, EvmAccount};
/// # use usdt0_bridge::providers::AlloyBridgeReader;
/// # use alloy_primitives::{address, U256};
/// # async fn example(wallet: Arc<dyn EvmAccount>) -> Result<(), Box<dyn std::error::Error>> {
/// let bridge = Usdt0Bridge::builder()
///     .account(BridgeAccount::Standard(wallet))
///     .reader(AlloyBridgeReader::connect_http("https://eth.llamarpc.com")?)
///     .config(BridgeConfig::default().with_bridge_max_fee(U256::from(10u64.pow(16))))
///     .build();
///
/// let options = BridgeOptions::builder()
///     .target_chain("arbitrum")
///     .recipient("0xa460AEbce0d3A4BecAd8ccf9D6D4861296c503Bd")
///     .token(address!("dac17f958d2ee523a2206206994597c13d831ec7"))
///     .amount(U256::from(1_000_000u64))
///     .build();
///
/// let quote = bridge.quote_bridge(&options, &BridgeOverrides::default()).await?;
/// let result = bridge.bridge(&options, &BridgeOverrides::default()).await?;
/// # Ok(())
/// # }
/// ```
#[derive(Builder)]
pub struct Usdt0Bridge<R: BridgeReader> {
    account: BridgeAccount,
    /// Connection to the source chain; operations fail with
    /// [`BridgeError::NoProvider`] without one
    reader: Option<R>,
    #[builder(default)]
    config: BridgeConfig,
    #[builder(skip)]
    source_chain_id: OnceLock<u64>,
}

/// Everything resolved about a transfer before any wallet is involved
struct Transfer {
    source: &'static ChainEntry,
    oft: OftContractHandle,
    token: Address,
    send_param: SendParam,
}

impl<R: BridgeReader> Usdt0Bridge<R> {
    pub fn account(&self) -> &BridgeAccount {
        &self.account
    }

    pub fn config(&self) -> &BridgeConfig {
        &self.config
    }

    fn reader(&self) -> Result<&R> {
        self.reader.as_ref().ok_or(BridgeError::NoProvider)
    }

    /// Returns the registry entry of the connected network
    ///
    /// The chain id is read once and memoized for the lifetime of the bridge.
    pub async fn source_chain(&self) -> Result<&'static ChainEntry> {
        self.resolve_source_chain(Deadline::after(self.config.timeout()))
            .await
    }

    async fn resolve_source_chain(&self, deadline: Deadline) -> Result<&'static ChainEntry> {
        let reader = self.reader()?;
        let chain_id = match self.source_chain_id.get() {
            Some(chain_id) => *chain_id,
            None => {
                let chain_id = deadline.run("chain_id", reader.chain_id()).await?;
                // A concurrent caller may have won the race with the same id.
                let _ = self.source_chain_id.set(chain_id);
                chain_id
            }
        };
        by_chain_id(chain_id)
    }

    /// Finds the contract on the source chain that bridges `token` to `target_chain`
    ///
    /// # Errors
    ///
    /// - [`BridgeError::UnsupportedChain`] if either chain is not registered
    /// - [`BridgeError::InvalidTarget`] if the target is the source chain
    /// - [`BridgeError::UnsupportedToken`] if no candidate contract is bound to `token`
    pub async fn resolve_oft_contract(
        &self,
        token: Address,
        target_chain: &str,
    ) -> Result<OftContractHandle> {
        let target = lookup(target_chain)?;
        let deadline = Deadline::after(self.config.timeout());
        let (_, handle) = self.resolve_with(target, token, deadline).await?;
        Ok(handle)
    }

    async fn resolve_with(
        &self,
        target: &'static ChainEntry,
        token: Address,
        deadline: Deadline,
    ) -> Result<(&'static ChainEntry, OftContractHandle)> {
        let reader = self.reader()?;
        let span = spans::resolve_oft_contract(&token, target.name());
        async {
            let source = self.resolve_source_chain(deadline).await?;
            Span::current().record("source_chain", source.name());

            if source.name() == target.name() {
                return Err(BridgeError::InvalidTarget {
                    chain: target.name().to_string(),
                });
            }

            let handle = probe_oft_contract(reader, source, target, token, deadline).await?;
            Ok((source, handle))
        }
        .instrument(span)
        .await
    }

    /// Validates the options and resolves the source contract and `SendParam`.
    ///
    /// The target and recipient are checked before any network call.
    async fn resolve_transfer(
        &self,
        options: &BridgeOptions,
        deadline: Deadline,
    ) -> Result<Transfer> {
        let target = lookup(options.target_chain())?;
        let to = encode_recipient(options.recipient(), target.family())?;
        let (source, oft) = self.resolve_with(target, options.token(), deadline).await?;

        Ok(Transfer {
            source,
            oft,
            token: options.token(),
            send_param: send_param_for(target, to, options.amount()),
        })
    }

    /// Quotes the execution and LayerZero fees of bridging with `options`
    ///
    /// Only read-only calls are made, so read-only accounts are accepted as
    /// long as their wallet layer can simulate fees.
    ///
    /// # Errors
    ///
    /// - [`BridgeError::NoProvider`] if the bridge has no reader
    /// - any resolution error of [`resolve_oft_contract`](Self::resolve_oft_contract)
    /// - [`BridgeError::InvalidRecipient`] if the recipient does not fit the target chain
    /// - [`BridgeError::UnsupportedOperation`] for ERC-4337 accounts on chains without a
    ///   value helper
    pub async fn quote_bridge(
        &self,
        options: &BridgeOptions,
        overrides: &BridgeOverrides,
    ) -> Result<BridgeQuote> {
        let span = spans::quote_bridge(
            options.target_chain(),
            &options.token(),
            &options.amount(),
            self.account.kind(),
        );

        async {
            let result = self.quote_with(options, overrides).await;
            match &result {
                Ok(quote) => info!(
                    fee = %quote.fee,
                    bridge_fee = %quote.bridge_fee,
                    event = "bridge_quoted"
                ),
                Err(e) => {
                    spans::record_error(e);
                    error!(error = %e, event = "bridge_quote_failed");
                }
            }
            result
        }
        .instrument(span)
        .await
    }

    async fn quote_with(
        &self,
        options: &BridgeOptions,
        overrides: &BridgeOverrides,
    ) -> Result<BridgeQuote> {
        let reader = self.reader()?;
        let deadline = Deadline::after(self.config.timeout());
        let transfer = self.resolve_transfer(options, deadline).await?;
        let user_op_config = overrides.user_operation_config();

        let quote = match &self.account {
            BridgeAccount::Standard(account) => {
                quote_standard(account.as_ref(), reader, transfer, deadline).await?.1
            }
            BridgeAccount::ReadOnlyStandard(account) => {
                quote_standard(account.as_ref(), reader, transfer, deadline).await?.1
            }
            BridgeAccount::Abstracted(account) => {
                quote_bundled(account.as_ref(), reader, transfer, &user_op_config, deadline)
                    .await?
                    .1
            }
            BridgeAccount::ReadOnlyAbstracted(account) => {
                quote_bundled(account.as_ref(), reader, transfer, &user_op_config, deadline)
                    .await?
                    .1
            }
        };
        Ok(quote)
    }

    /// Bridges a token with `options`
    ///
    /// The quote is re-derived first and checked against the effective fee
    /// ceiling (`overrides.bridge_max_fee`, else the configured one). Standard
    /// accounts then submit the approval and, once it returns, the send.
    /// ERC-4337 accounts submit a single user operation.
    ///
    /// # Errors
    ///
    /// - [`BridgeError::UnsupportedAccountType`] for read-only accounts, before any network call
    /// - [`BridgeError::FeeExceeded`] if `fee + bridge_fee` reaches the ceiling; nothing is sent
    /// - every error of [`quote_bridge`](Self::quote_bridge)
    ///
    /// If the send fails after the approval was submitted, the approval stays on chain.
    pub async fn bridge(
        &self,
        options: &BridgeOptions,
        overrides: &BridgeOverrides,
    ) -> Result<BridgeResult> {
        let span = spans::bridge(
            options.target_chain(),
            &options.token(),
            &options.amount(),
            self.account.kind(),
        );

        async {
            let result = self.bridge_with(options, overrides).await;
            match &result {
                Ok(result) => info!(
                    hash = %result.hash,
                    approve_hash = ?result.approve_hash,
                    fee = %result.fee,
                    bridge_fee = %result.bridge_fee,
                    event = "bridge_submitted"
                ),
                Err(e) => {
                    spans::record_error(e);
                    error!(error = %e, event = "bridge_failed");
                }
            }
            result
        }
        .instrument(span)
        .await
    }

    async fn bridge_with(
        &self,
        options: &BridgeOptions,
        overrides: &BridgeOverrides,
    ) -> Result<BridgeResult> {
        match &self.account {
            BridgeAccount::ReadOnlyStandard(_) | BridgeAccount::ReadOnlyAbstracted(_) => {
                Err(BridgeError::UnsupportedAccountType(format!(
                    "{} accounts cannot submit transactions",
                    self.account.kind()
                )))
            }
            BridgeAccount::Standard(account) => {
                let reader = self.reader()?;
                let deadline = Deadline::after(self.config.timeout());
                let transfer = self.resolve_transfer(options, deadline).await?;

                let (txs, quote) =
                    quote_standard(account.as_ref(), reader, transfer, deadline).await?;
                self.ensure_within_max_fee(&quote, overrides)?;
                dispatch_standard(account.as_ref(), txs, quote, deadline).await
            }
            BridgeAccount::Abstracted(account) => {
                let reader = self.reader()?;
                let deadline = Deadline::after(self.config.timeout());
                let transfer = self.resolve_transfer(options, deadline).await?;
                let user_op_config = overrides.user_operation_config();

                let (calls, quote) =
                    quote_bundled(account.as_ref(), reader, transfer, &user_op_config, deadline)
                        .await?;
                self.ensure_within_max_fee(&quote, overrides)?;
                dispatch_bundled(account.as_ref(), calls, quote, &user_op_config, deadline).await
            }
        }
    }

    fn ensure_within_max_fee(
        &self,
        quote: &BridgeQuote,
        overrides: &BridgeOverrides,
    ) -> Result<()> {
        let span = Span::current();
        span.record("fee", field::display(quote.fee));
        span.record("bridge_fee", field::display(quote.bridge_fee));

        let Some(max_fee) = overrides.bridge_max_fee.or(self.config.bridge_max_fee) else {
            return Ok(());
        };

        if exceeds_max_fee(quote.fee, quote.bridge_fee, max_fee) {
            spans::record_error_with_context(
                "FeeExceeded",
                "Quoted fees meet or exceed the bridge max fee",
                Some(&format!(
                    "fee={} bridge_fee={} max_fee={max_fee}",
                    quote.fee, quote.bridge_fee
                )),
            );
            return Err(BridgeError::FeeExceeded {
                fee: quote.fee.saturating_add(quote.bridge_fee),
                max_fee,
            });
        }
        Ok(())
    }
}

async fn quote_standard<A, R>(
    account: &A,
    reader: &R,
    transfer: Transfer,
    deadline: Deadline,
) -> Result<(StandardTransactions, BridgeQuote)>
where
    A: ReadOnlyEvmAccount + ?Sized,
    R: BridgeReader + ?Sized,
{
    let owner = deadline.run("wallet.address", account.address()).await?;
    let messaging_fee =
        quote_native_fee(reader, &transfer.oft, &transfer.send_param, deadline).await?;

    let txs = standard_transactions(
        owner,
        transfer.token,
        transfer.oft.address,
        transfer.send_param,
        messaging_fee.nativeFee,
    );

    let approve_fee = deadline
        .run(
            "wallet.quote_send_transaction",
            account.quote_send_transaction(&txs.approve),
        )
        .await?;
    let send_fee = deadline
        .run(
            "wallet.quote_send_transaction",
            account.quote_send_transaction(&txs.send),
        )
        .await?;

    let quote = BridgeQuote {
        fee: approve_fee.saturating_add(send_fee),
        bridge_fee: messaging_fee.nativeFee,
    };
    Ok((txs, quote))
}

async fn quote_bundled<A, R>(
    account: &A,
    reader: &R,
    transfer: Transfer,
    config: &UserOperationConfig,
    deadline: Deadline,
) -> Result<(Vec<BridgeTransaction>, BridgeQuote)>
where
    A: ReadOnlySmartAccount + ?Sized,
    R: BridgeReader + ?Sized,
{
    let token_fee = quote_token_fee(
        reader,
        transfer.source,
        &transfer.oft,
        &transfer.send_param,
        deadline,
    )
    .await?;

    let calls = bundled_transactions(
        transfer.token,
        token_fee.helper,
        transfer.oft.address,
        transfer.send_param,
        &token_fee.messaging_fee,
        token_fee.bridge_fee,
    );

    let fee = deadline
        .run(
            "wallet.quote_send_transaction",
            account.quote_send_transaction(&calls, config),
        )
        .await?;

    let quote = BridgeQuote {
        fee,
        bridge_fee: token_fee.bridge_fee,
    };
    Ok((calls, quote))
}

async fn dispatch_standard<A: EvmAccount + ?Sized>(
    account: &A,
    txs: StandardTransactions,
    quote: BridgeQuote,
    deadline: Deadline,
) -> Result<BridgeResult> {
    let span = spans::dispatch("standard", 2);
    async {
        let approve = deadline
            .run(
                "wallet.send_transaction",
                account.send_transaction(txs.approve),
            )
            .await?;
        info!(
            hash = %approve.hash,
            fee = %approve.fee,
            event = "approve_transaction_sent"
        );

        let send = deadline
            .run("wallet.send_transaction", account.send_transaction(txs.send))
            .await?;
        info!(
            hash = %send.hash,
            fee = %send.fee,
            event = "send_transaction_sent"
        );

        Ok(BridgeResult {
            hash: send.hash,
            fee: approve.fee.saturating_add(send.fee),
            bridge_fee: quote.bridge_fee,
            approve_hash: Some(approve.hash),
        })
    }
    .instrument(span)
    .await
}

async fn dispatch_bundled<A: SmartAccount + ?Sized>(
    account: &A,
    calls: Vec<BridgeTransaction>,
    quote: BridgeQuote,
    config: &UserOperationConfig,
    deadline: Deadline,
) -> Result<BridgeResult> {
    let span = spans::dispatch("abstracted", calls.len());
    async {
        let outcome = deadline
            .run(
                "wallet.send_transaction",
                account.send_transaction(calls, config),
            )
            .await?;
        info!(
            hash = %outcome.hash,
            fee = %outcome.fee,
            event = "user_operation_sent"
        );

        Ok(BridgeResult {
            hash: outcome.hash,
            fee: outcome.fee,
            bridge_fee: quote.bridge_fee,
            approve_hash: None,
        })
    }
    .instrument(span)
    .await
}

#[async_trait]
impl<R: BridgeReader> BridgeProtocol for Usdt0Bridge<R> {
    fn account(&self) -> &BridgeAccount {
        &self.account
    }

    fn config(&self) -> &BridgeConfig {
        &self.config
    }

    async fn quote_bridge(
        &self,
        options: &BridgeOptions,
        overrides: &BridgeOverrides,
    ) -> Result<BridgeQuote> {
        Usdt0Bridge::quote_bridge(self, options, overrides).await
    }

    async fn bridge(
        &self,
        options: &BridgeOptions,
        overrides: &BridgeOverrides,
    ) -> Result<BridgeResult> {
        Usdt0Bridge::bridge(self, options, overrides).await
    }
}
