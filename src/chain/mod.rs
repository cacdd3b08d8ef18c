//! Chain configuration and contract addresses for the USDT0 mesh
//!
//! This module contains the static chain registry: LayerZero endpoint ids,
//! EVM chain ids, and the bridge contracts deployed on each supported chain.

pub mod addresses;
mod registry;

pub use registry::{by_chain_id, chains, lookup, ChainEntry, ChainFamily, ContractKind};
