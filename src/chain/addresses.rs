// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0
//! Contract addresses for the USDT0 deployments across all supported chains
//!
//! This module centralizes the OFT, legacy mesh, XAUt0 and transaction value
//! helper addresses referenced by the chain registry.

use alloy_primitives::{address, Address};

// USDT0 OFT Addresses

/// USDT0 `OAdapterUpgradeable` locking native USDT on Ethereum
pub const ETHEREUM_USDT0_OFT_ADDRESS: Address =
    address!("6c96de32cea08842dcc4058c14d3aaad7fa41dee");

/// USDT0 `OUpgradeable` on Arbitrum One
pub const ARBITRUM_USDT0_OFT_ADDRESS: Address =
    address!("14e4a1b13bf7f943c8ff7c51fb60fa964a298d92");

/// USDT0 `OAdapterUpgradeable` on Polygon PoS
pub const POLYGON_USDT0_OFT_ADDRESS: Address =
    address!("6ba10300f0dc58b7a1e4c0e41f5dabb7d7829e13");

pub const BERACHAIN_USDT0_OFT_ADDRESS: Address =
    address!("3dc96399109df5ceb2c226664a086140bd0379cb");

pub const INK_USDT0_OFT_ADDRESS: Address =
    address!("1cb6de532588fca4a21b7209de7c456af8434a65");

pub const OPTIMISM_USDT0_OFT_ADDRESS: Address =
    address!("f03b4d9ac1d5d1e7c4cef54c2a313b9fe051a0ad");

pub const UNICHAIN_USDT0_OFT_ADDRESS: Address =
    address!("c07be8994d035631c36fb4a89c918cefb2f03ec3");

pub const MANTLE_USDT0_OFT_ADDRESS: Address =
    address!("cb768e263fb1c62214e7cab4aa8d036d76dc59cc");

pub const PLASMA_USDT0_OFT_ADDRESS: Address =
    address!("02ca37966753bdddf11216b73b16c1de756a7cf9");

// Legacy Mesh Addresses
//
// The legacy mesh bridges native USDT between Ethereum, Arbitrum, TON and TRON
// and predates the USDT0 OFT deployment.

pub const ETHEREUM_LEGACY_MESH_ADDRESS: Address =
    address!("1f748c76de468e9d11bd340fa9d5cbadf315dfb0");

pub const ARBITRUM_LEGACY_MESH_ADDRESS: Address =
    address!("238a52455a39f3c1d2c9d8c5d0fb81efd5d8e3ae");

// XAUt0 OFT Addresses

pub const ETHEREUM_XAUT0_OFT_ADDRESS: Address =
    address!("b9c2321bb7d0db468f570d10a424d1cc8efd696c");

pub const ARBITRUM_XAUT0_OFT_ADDRESS: Address =
    address!("40461291347e1ecbb09499f3371d3f17f10d7159");

// Transaction Value Helper Addresses
//
// Only deployed on chains where ERC-4337 accounts may bridge with the fee
// collected in token units.

pub const ARBITRUM_VALUE_HELPER_ADDRESS: Address =
    address!("a90bf68787fd0d6fb5d4b6fa1e7d16ad2ec1ea5a");

pub const POLYGON_VALUE_HELPER_ADDRESS: Address =
    address!("aa1fc4a5f1fb8a2e37a05e8ed3bc84b2f3a9a7b1");

pub const INK_VALUE_HELPER_ADDRESS: Address =
    address!("3c1cd872a02e6c2a62d2916b1fb1c9a5d4e0f3a8");
