//! Core trait abstractions for USDT0 bridge operations.
//!
//! The bridge never talks to a node or a wallet directly. Contract reads go
//! through [`BridgeReader`] and fee simulation or submission goes through the
//! wallet account traits, so both can be replaced by fakes that simulate
//! failure modes, hung providers and arbitrary token bindings.
//!
//! # Example: Implementing a Test Fake
//!
//! ```rust,ignore
//! use usdt0_bridge::{BridgeReader, MessagingFee, SendParam, Result};
//!
//! struct FixedChainReader;
//!
//! #[async_trait::async_trait]
//! impl BridgeReader for FixedChainReader {
//!     async fn chain_id(&self) -> Result<u64> {
//!         Ok(42161)
//!     }
//!     // ...
//! }
//! ```

use alloy_primitives::{Address, B256, U256};
use async_trait::async_trait;
use serde::Serialize;

use crate::bridge::BridgeTransaction;
use crate::contracts::oft::{MessagingFee, SendParam};
use crate::error::Result;

/// Trait for the read-only network calls the bridge performs.
///
/// # Test Scenarios
///
/// Implementing this trait with fakes enables testing:
/// - Unregistered source networks
/// - Tokens bound to a lower-priority contract kind
/// - Fee quotes of arbitrary size
/// - Providers that never answer
#[async_trait]
pub trait BridgeReader: Send + Sync {
    /// Returns the chain id of the connected network.
    async fn chain_id(&self) -> Result<u64>;

    /// Returns the token an OFT contract is bound to.
    async fn oft_token(&self, oft: Address) -> Result<Address>;

    /// Simulates `quoteSend` on an OFT contract.
    async fn quote_send(
        &self,
        oft: Address,
        send_param: &SendParam,
        pay_in_lz_token: bool,
    ) -> Result<MessagingFee>;

    /// Converts a messaging fee into token units through the value helper.
    async fn quote_value_helper(
        &self,
        helper: Address,
        oft: Address,
        fee: &MessagingFee,
    ) -> Result<U256>;
}

/// Outcome of a submitted transaction or user operation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TransactionOutcome {
    /// Transaction hash, or user operation hash for bundled submissions
    pub hash: B256,
    /// Execution fee actually paid
    pub fee: U256,
}

/// Options forwarded verbatim to an ERC-4337 wallet
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserOperationConfig {
    /// Token the paymaster should charge gas in
    pub paymaster_token: Option<Address>,
}

/// Externally-owned account that can only simulate transactions.
#[async_trait]
pub trait ReadOnlyEvmAccount: Send + Sync {
    async fn address(&self) -> Result<Address>;

    /// Estimates the execution fee of a transaction without sending it.
    async fn quote_send_transaction(&self, tx: &BridgeTransaction) -> Result<U256>;
}

/// Externally-owned account that signs and submits transactions.
#[async_trait]
pub trait EvmAccount: ReadOnlyEvmAccount {
    /// Submits a transaction and returns once its hash and fee are known.
    async fn send_transaction(&self, tx: BridgeTransaction) -> Result<TransactionOutcome>;
}

/// ERC-4337 smart account that can only simulate user operations.
#[async_trait]
pub trait ReadOnlySmartAccount: Send + Sync {
    async fn address(&self) -> Result<Address>;

    /// Estimates the fee of a user operation bundling `calls`.
    async fn quote_send_transaction(
        &self,
        calls: &[BridgeTransaction],
        config: &UserOperationConfig,
    ) -> Result<U256>;
}

/// ERC-4337 smart account that submits bundled user operations.
#[async_trait]
pub trait SmartAccount: ReadOnlySmartAccount {
    /// Submits `calls` as a single user operation.
    async fn send_transaction(
        &self,
        calls: Vec<BridgeTransaction>,
        config: &UserOperationConfig,
    ) -> Result<TransactionOutcome>;
}
