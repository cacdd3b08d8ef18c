//! # usdt0-bridge
//!
//! A Rust SDK for bridging USDT0 and XAUt0 across chains over LayerZero's
//! Omnichain Fungible Token (OFT) standard.
//!
//! The bridge runs on the source EVM chain: it finds the OFT contract the
//! token is bound to, quotes the LayerZero fee, builds the approve and send
//! calls and hands them to an injected wallet account. Destinations include
//! EVM chains as well as TON and TRON.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use usdt0_bridge::{BridgeAccount, BridgeOptions, BridgeOverrides, EvmAccount, Usdt0Bridge};
//! use usdt0_bridge::providers::AlloyBridgeReader;
//! use alloy_primitives::{address, U256};
//!
//! # async fn example(wallet: Arc<dyn EvmAccount>) -> Result<(), Box<dyn std::error::Error>> {
//! let bridge = Usdt0Bridge::builder()
//!     .account(BridgeAccount::Standard(wallet))
//!     .reader(AlloyBridgeReader::connect_http("https://arb1.arbitrum.io/rpc")?)
//!     .build();
//!
//! let options = BridgeOptions::builder()
//!     .target_chain("ton")
//!     .recipient("EQCD39VS5jcptHL8vMjEXrzGaRcCVYto7HUn4bpAOg8xqB2N")
//!     .token(address!("fd086bc7cd5c481dcc9c85ebe478a1c0b69fcbb9"))
//!     .amount(U256::from(5_000_000u64))
//!     .build();
//!
//! let quote = bridge.quote_bridge(&options, &BridgeOverrides::default()).await?;
//! println!("fee: {} bridge fee: {}", quote.fee, quote.bridge_fee);
//!
//! let overrides = BridgeOverrides::default().with_bridge_max_fee(U256::from(10u64.pow(16)));
//! let result = bridge.bridge(&options, &overrides).await?;
//! println!("sent {} (approval {:?})", result.hash, result.approve_hash);
//! # Ok(())
//! # }
//! ```
//!
//! ## Protocol helpers
//!
//! ```rust
//! use usdt0_bridge::{encode_recipient, min_amount_after_tolerance, ChainFamily};
//! use alloy_primitives::U256;
//!
//! let to = encode_recipient("TR7NHqjeKQxGTCi8q8ZY4pL8otSzgjLj6t", ChainFamily::Tron).unwrap();
//! assert_eq!(to[11], 0x41);
//! assert_eq!(min_amount_after_tolerance(U256::from(1_000_000)), U256::from(999_000));
//! ```
//!
//! ## Public API
//!
//! - [`Usdt0Bridge`] and [`BridgeProtocol`] - the bridge orchestrator and its object-safe interface
//! - [`BridgeAccount`] - the closed set of wallet accounts the bridge operates on
//! - [`BridgeReader`] and the wallet traits - injection seams for the node and the wallet
//! - [`BridgeError`] and [`Result`] - error types for error handling
//! - [`chains`], [`lookup`] and [`by_chain_id`] - the static chain registry
//! - [`contracts`] - OFT, value helper and ERC-20 bindings

mod account;
mod bridge;
mod chain;
pub mod contracts;
mod error;
mod protocol;
pub mod providers;
mod traits;

pub use account::BridgeAccount;
pub use bridge::{
    bundled_transactions, standard_transactions, BridgeConfig, BridgeOptions, BridgeOverrides,
    BridgeProtocol, BridgeQuote, BridgeResult, BridgeTransaction, OftContractHandle,
    StandardTransactions, Usdt0Bridge, DEFAULT_TIMEOUT_SECS,
};
pub use chain::addresses;
pub use chain::{by_chain_id, chains, lookup, ChainEntry, ChainFamily, ContractKind};
pub use contracts::oft::{MessagingFee, SendParam};
pub use error::{BridgeError, Result};
pub use protocol::{
    buffered_approval_amount, buffered_fee, build_send_param, encode_recipient, exceeds_max_fee,
    min_amount_after_tolerance, send_param_for, EMPTY_OPTIONS, FEE_BUFFER_DENOMINATOR,
    FEE_BUFFER_NUMERATOR, TOLERANCE_DENOMINATOR, TOLERANCE_NUMERATOR,
};
pub use traits::{
    BridgeReader, EvmAccount, ReadOnlyEvmAccount, ReadOnlySmartAccount, SmartAccount,
    TransactionOutcome, UserOperationConfig,
};

// Public module for advanced users who need custom instrumentation
pub mod spans;

// Fakes for the reader and wallet seams, used by the integration tests
pub mod testing;
