// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0
//! Quotes a USDT0 transfer from Arbitrum to TRON with a watch-only account
//!
//! The execution fee is a rough estimate (gas price times a fixed gas limit
//! per call), the LayerZero fee comes straight from the OFT contract.
//!
//! Configure with a `.env` file or the environment:
//!
//! - `ARBITRUM_RPC_URL` (defaults to the public Arbitrum endpoint)
//! - `OWNER_ADDRESS` (the account paying for the transfer)
//!
//! Run with: `RUST_LOG=usdt0_bridge=debug cargo run --example quote_bridge`

use std::sync::Arc;

use alloy_network::Ethereum;
use alloy_primitives::{address, Address, U256};
use alloy_provider::{DynProvider, Provider};
use async_trait::async_trait;
use tracing_subscriber::EnvFilter;
use usdt0_bridge::providers::AlloyBridgeReader;
use usdt0_bridge::{
    BridgeAccount, BridgeError, BridgeOptions, BridgeOverrides, BridgeTransaction,
    ReadOnlyEvmAccount, Usdt0Bridge,
};

const ARBITRUM_USDT0: Address = address!("fd086bc7cd5c481dcc9c85ebe478a1c0b69fcbb9");
const GAS_LIMIT_PER_CALL: u64 = 250_000;

/// Account that can only estimate fees
struct WatchOnlyAccount {
    address: Address,
    provider: DynProvider<Ethereum>,
}

#[async_trait]
impl ReadOnlyEvmAccount for WatchOnlyAccount {
    async fn address(&self) -> usdt0_bridge::Result<Address> {
        Ok(self.address)
    }

    async fn quote_send_transaction(&self, _tx: &BridgeTransaction) -> usdt0_bridge::Result<U256> {
        let gas_price = self.provider.get_gas_price().await?;
        Ok(U256::from(gas_price) * U256::from(GAS_LIMIT_PER_CALL))
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("💸 USDT0 Bridge Quote Example");
    println!("=============================\n");

    let rpc_url = std::env::var("ARBITRUM_RPC_URL")
        .unwrap_or_else(|_| "https://arb1.arbitrum.io/rpc".to_string());
    let owner: Address = std::env::var("OWNER_ADDRESS")
        .unwrap_or_else(|_| "0xa460AEbce0d3A4BecAd8ccf9D6D4861296c503Bd".to_string())
        .parse()?;

    let reader = AlloyBridgeReader::connect_http(&rpc_url)?;
    let account = WatchOnlyAccount {
        address: owner,
        provider: reader.inner().clone(),
    };

    let bridge = Usdt0Bridge::builder()
        .account(BridgeAccount::ReadOnlyStandard(Arc::new(account)))
        .reader(reader)
        .build();

    let options = BridgeOptions::builder()
        .target_chain("tron")
        .recipient("TR7NHqjeKQxGTCi8q8ZY4pL8otSzgjLj6t")
        .token(ARBITRUM_USDT0)
        .amount(U256::from(10_000_000u64))
        .build();

    let handle = bridge
        .resolve_oft_contract(options.token(), options.target_chain())
        .await?;
    println!("🔍 Bridging through {} at {}", handle.kind, handle.address);

    let quote = bridge
        .quote_bridge(&options, &BridgeOverrides::default())
        .await?;
    println!("⛽ Execution fee (wei): {}", quote.fee);
    println!("🌉 LayerZero fee (wei): {}", quote.bridge_fee);

    // Watch-only accounts quote but never submit
    match bridge.bridge(&options, &BridgeOverrides::default()).await {
        Err(BridgeError::UnsupportedAccountType(reason)) => println!("\n🚫 {reason}"),
        other => println!("\nUnexpected bridge outcome: {other:?}"),
    }

    Ok(())
}
