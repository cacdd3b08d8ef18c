//! Contract bindings used by the USDT0 bridge
//!
//! This module contains Alloy-generated bindings for the LayerZero OFT
//! contracts, the transaction value helper and the ERC20 approval call.
//!
//! Read-only calls go through the provider-backed wrappers
//! ([`OftContract`](oft::OftContract), [`ValueHelperContract`](value_helper::ValueHelperContract));
//! state-changing calls are only ever encoded into [`BridgeTransaction`](crate::BridgeTransaction)s
//! and handed to the wallet layer.

pub mod erc20;
pub mod oft;
pub mod value_helper;
