// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0
//! Core USDT0 bridge implementation
//!
//! This module provides the orchestrator that resolves the bridge contract,
//! quotes LayerZero fees, assembles the wallet calls and dispatches them for
//! both standard and ERC-4337 accounts.

mod bridge_trait;
mod config;
mod deadline;
mod params;
mod quote;
mod resolver;
mod transactions;
mod usdt0;

pub use bridge_trait::BridgeProtocol;
pub use config::{BridgeConfig, BridgeOverrides, DEFAULT_TIMEOUT_SECS};
pub use params::{BridgeOptions, BridgeQuote, BridgeResult};
pub use resolver::OftContractHandle;
pub use transactions::{
    bundled_transactions, standard_transactions, BridgeTransaction, StandardTransactions,
};
pub use usdt0::Usdt0Bridge;
