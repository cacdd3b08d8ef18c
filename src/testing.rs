//! Test utilities and fake implementations of the bridge seams
//!
//! This module provides fake implementations of [`BridgeReader`] and the
//! wallet account traits that enable testing the bridge flows, including
//! adversarial scenarios, without a node or a wallet.
//!
//! All fakes share their state behind an `Arc`, so a clone kept by the test
//! observes every call made through the copy handed to the bridge.

use alloy_primitives::{Address, B256, U256};
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use crate::bridge::BridgeTransaction;
use crate::contracts::oft::{MessagingFee, SendParam};
use crate::traits::{
    BridgeReader, EvmAccount, ReadOnlyEvmAccount, ReadOnlySmartAccount, SmartAccount,
    TransactionOutcome, UserOperationConfig,
};
use crate::{BridgeError, Result};

// ============================================================================
// Fake Bridge Reader
// ============================================================================

/// Number of calls a [`FakeBridgeReader`] has served, per method
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReaderCalls {
    pub chain_id: usize,
    pub oft_token: usize,
    pub quote_send: usize,
    pub quote_value_helper: usize,
}

impl ReaderCalls {
    pub fn total(&self) -> usize {
        self.chain_id + self.oft_token + self.quote_send + self.quote_value_helper
    }
}

#[derive(Debug, Default)]
struct ReaderState {
    chain_id: Option<u64>,
    tokens: HashMap<Address, Address>,
    messaging_fee: MessagingFee,
    helper_quote: U256,
    hang: bool,
    quoted_send_params: Vec<SendParam>,
    calls: ReaderCalls,
}

/// A fake source chain that serves pre-configured contract reads.
///
/// This allows testing scenarios like:
/// - Unregistered source networks
/// - Tokens bound to a lower-priority contract kind
/// - Arbitrary native and token-denominated fees
/// - Providers that never answer
///
/// OFT contracts without a binding report the zero address as their token.
#[derive(Clone, Debug, Default)]
pub struct FakeBridgeReader {
    state: Arc<Mutex<ReaderState>>,
}

impl FakeBridgeReader {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the chain id the reader reports
    pub fn with_chain_id(self, chain_id: u64) -> Self {
        self.state.lock().unwrap().chain_id = Some(chain_id);
        self
    }

    /// Makes `oft.token()` return `token`
    pub fn bind_token(self, oft: Address, token: Address) -> Self {
        self.state.lock().unwrap().tokens.insert(oft, token);
        self
    }

    /// Sets the native fee returned by every `quoteSend`
    pub fn with_native_fee(self, native_fee: U256) -> Self {
        self.state.lock().unwrap().messaging_fee = MessagingFee {
            nativeFee: native_fee,
            lzTokenFee: U256::ZERO,
        };
        self
    }

    /// Sets the token-denominated fee returned by the value helper
    pub fn with_helper_quote(self, quote: U256) -> Self {
        self.state.lock().unwrap().helper_quote = quote;
        self
    }

    /// Makes every call pend forever
    pub fn hanging(self) -> Self {
        self.state.lock().unwrap().hang = true;
        self
    }

    pub fn calls(&self) -> ReaderCalls {
        self.state.lock().unwrap().calls
    }

    /// Returns every `SendParam` passed to `quoteSend`, in call order
    pub fn quoted_send_params(&self) -> Vec<SendParam> {
        self.state.lock().unwrap().quoted_send_params.clone()
    }

    async fn pend_if_hanging(&self) {
        let hang = self.state.lock().unwrap().hang;
        if hang {
            std::future::pending::<()>().await;
        }
    }
}

#[async_trait]
impl BridgeReader for FakeBridgeReader {
    async fn chain_id(&self) -> Result<u64> {
        self.state.lock().unwrap().calls.chain_id += 1;
        self.pend_if_hanging().await;

        self.state
            .lock()
            .unwrap()
            .chain_id
            .ok_or_else(|| BridgeError::Provider("Simulated RPC error: no chain id".to_string()))
    }

    async fn oft_token(&self, oft: Address) -> Result<Address> {
        self.state.lock().unwrap().calls.oft_token += 1;
        self.pend_if_hanging().await;

        Ok(self
            .state
            .lock()
            .unwrap()
            .tokens
            .get(&oft)
            .copied()
            .unwrap_or(Address::ZERO))
    }

    async fn quote_send(
        &self,
        _oft: Address,
        send_param: &SendParam,
        _pay_in_lz_token: bool,
    ) -> Result<MessagingFee> {
        self.state.lock().unwrap().calls.quote_send += 1;
        self.pend_if_hanging().await;

        let mut state = self.state.lock().unwrap();
        state.quoted_send_params.push(send_param.clone());
        Ok(state.messaging_fee.clone())
    }

    async fn quote_value_helper(
        &self,
        _helper: Address,
        _oft: Address,
        _fee: &MessagingFee,
    ) -> Result<U256> {
        self.state.lock().unwrap().calls.quote_value_helper += 1;
        self.pend_if_hanging().await;

        Ok(self.state.lock().unwrap().helper_quote)
    }
}

// ============================================================================
// Fake Externally-Owned Account
// ============================================================================

#[derive(Debug, Default)]
struct EvmAccountState {
    fees: Vec<U256>,
    quote_index: usize,
    send_index: usize,
    fail_after: Option<usize>,
    quoted: Vec<BridgeTransaction>,
    submitted: Vec<BridgeTransaction>,
}

/// A fake externally-owned account.
///
/// Quotes and submissions each walk the fee schedule in order, wrapping
/// around at its end. The n-th submission returns the hash
/// `B256::repeat_byte(n)`, starting at 1.
#[derive(Clone, Debug)]
pub struct FakeEvmAccount {
    address: Address,
    state: Arc<Mutex<EvmAccountState>>,
}

impl FakeEvmAccount {
    pub fn new(address: Address) -> Self {
        Self {
            address,
            state: Arc::default(),
        }
    }

    /// Sets the fees returned by successive quotes and submissions
    pub fn with_fees(self, fees: impl IntoIterator<Item = U256>) -> Self {
        self.state.lock().unwrap().fees = fees.into_iter().collect();
        self
    }

    /// Fails every submission after the first `count` succeed
    pub fn failing_after(self, count: usize) -> Self {
        self.state.lock().unwrap().fail_after = Some(count);
        self
    }

    /// Returns every transaction that was quoted, in call order
    pub fn quoted(&self) -> Vec<BridgeTransaction> {
        self.state.lock().unwrap().quoted.clone()
    }

    /// Returns every transaction that was submitted, in call order
    pub fn submitted(&self) -> Vec<BridgeTransaction> {
        self.state.lock().unwrap().submitted.clone()
    }
}

fn scheduled_fee(fees: &[U256], index: usize) -> U256 {
    if fees.is_empty() {
        U256::ZERO
    } else {
        fees[index % fees.len()]
    }
}

#[async_trait]
impl ReadOnlyEvmAccount for FakeEvmAccount {
    async fn address(&self) -> Result<Address> {
        Ok(self.address)
    }

    async fn quote_send_transaction(&self, tx: &BridgeTransaction) -> Result<U256> {
        let mut state = self.state.lock().unwrap();
        let fee = scheduled_fee(&state.fees, state.quote_index);
        state.quote_index += 1;
        state.quoted.push(tx.clone());
        Ok(fee)
    }
}

#[async_trait]
impl EvmAccount for FakeEvmAccount {
    async fn send_transaction(&self, tx: BridgeTransaction) -> Result<TransactionOutcome> {
        let mut state = self.state.lock().unwrap();
        if state.fail_after.is_some_and(|count| state.send_index >= count) {
            return Err(BridgeError::Wallet(
                "Simulated wallet error: transaction rejected".to_string(),
            ));
        }

        let fee = scheduled_fee(&state.fees, state.send_index);
        state.send_index += 1;
        let hash = B256::repeat_byte(state.send_index as u8);
        state.submitted.push(tx);
        Ok(TransactionOutcome { hash, fee })
    }
}

// ============================================================================
// Fake Smart Account
// ============================================================================

#[derive(Debug, Default)]
struct SmartAccountState {
    fee: U256,
    quoted: Vec<Vec<BridgeTransaction>>,
    submitted: Vec<Vec<BridgeTransaction>>,
    configs: Vec<UserOperationConfig>,
}

/// A fake ERC-4337 smart account.
///
/// Every user operation costs the configured fee and is submitted under
/// [`FakeSmartAccount::USER_OPERATION_HASH`].
#[derive(Clone, Debug)]
pub struct FakeSmartAccount {
    address: Address,
    state: Arc<Mutex<SmartAccountState>>,
}

impl FakeSmartAccount {
    pub const USER_OPERATION_HASH: B256 = B256::repeat_byte(0xaa);

    pub fn new(address: Address) -> Self {
        Self {
            address,
            state: Arc::default(),
        }
    }

    pub fn with_fee(self, fee: U256) -> Self {
        self.state.lock().unwrap().fee = fee;
        self
    }

    /// Returns every batch that was quoted, in call order
    pub fn quoted(&self) -> Vec<Vec<BridgeTransaction>> {
        self.state.lock().unwrap().quoted.clone()
    }

    /// Returns every batch that was submitted, in call order
    pub fn submitted(&self) -> Vec<Vec<BridgeTransaction>> {
        self.state.lock().unwrap().submitted.clone()
    }

    /// Returns the user operation config of every quote and submission
    pub fn configs(&self) -> Vec<UserOperationConfig> {
        self.state.lock().unwrap().configs.clone()
    }
}

#[async_trait]
impl ReadOnlySmartAccount for FakeSmartAccount {
    async fn address(&self) -> Result<Address> {
        Ok(self.address)
    }

    async fn quote_send_transaction(
        &self,
        calls: &[BridgeTransaction],
        config: &UserOperationConfig,
    ) -> Result<U256> {
        let mut state = self.state.lock().unwrap();
        state.quoted.push(calls.to_vec());
        state.configs.push(config.clone());
        Ok(state.fee)
    }
}

#[async_trait]
impl SmartAccount for FakeSmartAccount {
    async fn send_transaction(
        &self,
        calls: Vec<BridgeTransaction>,
        config: &UserOperationConfig,
    ) -> Result<TransactionOutcome> {
        let mut state = self.state.lock().unwrap();
        state.submitted.push(calls);
        state.configs.push(config.clone());
        Ok(TransactionOutcome {
            hash: Self::USER_OPERATION_HASH,
            fee: state.fee,
        })
    }
}
