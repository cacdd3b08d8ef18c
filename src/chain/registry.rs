//! Static registry of chains reachable through the USDT0 OFT mesh
//!
//! Each entry maps a logical chain name to its LayerZero endpoint id, its EVM
//! chain id (when it can act as a source), and the bridge contracts deployed
//! on it. The table is immutable for the lifetime of the process.

use std::fmt;

use alloy_chains::NamedChain;
use alloy_primitives::Address;

use super::addresses::*;
use crate::{BridgeError, Result};

/// Address format family of a chain, used to encode recipients
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChainFamily {
    /// 20-byte hex addresses
    Evm,
    /// TON friendly or raw addresses
    Ton,
    /// TRON base58check addresses
    Tron,
}

impl ChainFamily {
    /// Returns true for families that cannot receive from the primary OFT kind
    pub const fn is_non_evm(self) -> bool {
        !matches!(self, ChainFamily::Evm)
    }
}

/// Kind of bridge contract deployed on a chain
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContractKind {
    /// USDT0 OFT contract
    Oft,
    /// Legacy mesh contract for native USDT
    LegacyMesh,
    /// XAUt0 OFT contract
    XautOft,
}

impl ContractKind {
    /// Order in which candidate contracts are probed during resolution
    pub const PRIORITY: [ContractKind; 3] = [
        ContractKind::Oft,
        ContractKind::LegacyMesh,
        ContractKind::XautOft,
    ];
}

impl fmt::Display for ContractKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ContractKind::Oft => "oft",
            ContractKind::LegacyMesh => "legacy_mesh",
            ContractKind::XautOft => "xaut_oft",
        };
        f.write_str(name)
    }
}

/// Configuration of a single chain in the registry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChainEntry {
    name: &'static str,
    chain_id: Option<u64>,
    eid: u32,
    family: ChainFamily,
    oft: Option<Address>,
    legacy_mesh: Option<Address>,
    xaut_oft: Option<Address>,
    value_helper: Option<Address>,
}

impl ChainEntry {
    /// The logical chain name used in bridge options
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// The EVM chain id, `None` for chains that can only be bridged to
    pub fn chain_id(&self) -> Option<u64> {
        self.chain_id
    }

    /// The LayerZero endpoint id of the chain: <https://docs.layerzero.network/v2/deployments/deployed-contracts>
    pub fn eid(&self) -> u32 {
        self.eid
    }

    pub fn family(&self) -> ChainFamily {
        self.family
    }

    /// The address of the bridge contract of the given kind, if deployed
    pub fn contract(&self, kind: ContractKind) -> Option<Address> {
        match kind {
            ContractKind::Oft => self.oft,
            ContractKind::LegacyMesh => self.legacy_mesh,
            ContractKind::XautOft => self.xaut_oft,
        }
    }

    /// The address of the transaction value helper used by ERC-4337 accounts
    pub fn value_helper(&self) -> Option<Address> {
        self.value_helper
    }
}

const fn evm(name: &'static str, chain_id: u64, eid: u32) -> ChainEntry {
    ChainEntry {
        name,
        chain_id: Some(chain_id),
        eid,
        family: ChainFamily::Evm,
        oft: None,
        legacy_mesh: None,
        xaut_oft: None,
        value_helper: None,
    }
}

static REGISTRY: [ChainEntry; 11] = [
    ChainEntry {
        oft: Some(ETHEREUM_USDT0_OFT_ADDRESS),
        legacy_mesh: Some(ETHEREUM_LEGACY_MESH_ADDRESS),
        xaut_oft: Some(ETHEREUM_XAUT0_OFT_ADDRESS),
        ..evm("ethereum", NamedChain::Mainnet as u64, 30101)
    },
    ChainEntry {
        oft: Some(ARBITRUM_USDT0_OFT_ADDRESS),
        legacy_mesh: Some(ARBITRUM_LEGACY_MESH_ADDRESS),
        xaut_oft: Some(ARBITRUM_XAUT0_OFT_ADDRESS),
        value_helper: Some(ARBITRUM_VALUE_HELPER_ADDRESS),
        ..evm("arbitrum", NamedChain::Arbitrum as u64, 30110)
    },
    ChainEntry {
        oft: Some(POLYGON_USDT0_OFT_ADDRESS),
        value_helper: Some(POLYGON_VALUE_HELPER_ADDRESS),
        ..evm("polygon", NamedChain::Polygon as u64, 30109)
    },
    ChainEntry {
        oft: Some(BERACHAIN_USDT0_OFT_ADDRESS),
        ..evm("berachain", 80094, 30362)
    },
    ChainEntry {
        oft: Some(INK_USDT0_OFT_ADDRESS),
        value_helper: Some(INK_VALUE_HELPER_ADDRESS),
        ..evm("ink", 57073, 30339)
    },
    ChainEntry {
        oft: Some(OPTIMISM_USDT0_OFT_ADDRESS),
        ..evm("optimism", NamedChain::Optimism as u64, 30111)
    },
    ChainEntry {
        oft: Some(UNICHAIN_USDT0_OFT_ADDRESS),
        ..evm("unichain", 130, 30320)
    },
    ChainEntry {
        oft: Some(MANTLE_USDT0_OFT_ADDRESS),
        ..evm("mantle", NamedChain::Mantle as u64, 30181)
    },
    ChainEntry {
        oft: Some(PLASMA_USDT0_OFT_ADDRESS),
        ..evm("plasma", 9745, 30383)
    },
    // Destination-only chains
    ChainEntry {
        name: "ton",
        chain_id: None,
        eid: 30343,
        family: ChainFamily::Ton,
        oft: None,
        legacy_mesh: None,
        xaut_oft: None,
        value_helper: None,
    },
    ChainEntry {
        name: "tron",
        chain_id: None,
        eid: 30420,
        family: ChainFamily::Tron,
        oft: None,
        legacy_mesh: None,
        xaut_oft: None,
        value_helper: None,
    },
];

/// Returns every registered chain
pub fn chains() -> &'static [ChainEntry] {
    &REGISTRY
}

/// Looks up a chain by its logical name
pub fn lookup(name: &str) -> Result<&'static ChainEntry> {
    REGISTRY
        .iter()
        .find(|entry| entry.name == name)
        .ok_or_else(|| BridgeError::UnsupportedChain {
            chain: name.to_string(),
        })
}

/// Looks up the chain an EVM network connection belongs to
pub fn by_chain_id(chain_id: u64) -> Result<&'static ChainEntry> {
    REGISTRY
        .iter()
        .find(|entry| entry.chain_id == Some(chain_id))
        .ok_or_else(|| BridgeError::UnsupportedChain {
            chain: chain_id.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::collections::HashSet;

    #[rstest]
    #[case("ethereum", Some(1), 30101)]
    #[case("arbitrum", Some(42161), 30110)]
    #[case("polygon", Some(137), 30109)]
    #[case("ton", None, 30343)]
    #[case("tron", None, 30420)]
    fn test_lookup_known_chains(
        #[case] name: &str,
        #[case] chain_id: Option<u64>,
        #[case] eid: u32,
    ) {
        let entry = lookup(name).unwrap();
        assert_eq!(entry.name(), name);
        assert_eq!(entry.chain_id(), chain_id);
        assert_eq!(entry.eid(), eid);
    }

    #[test]
    fn test_lookup_unknown_chain_names_the_chain() {
        let err = lookup("solana").unwrap_err();
        assert!(matches!(err, BridgeError::UnsupportedChain { ref chain } if chain == "solana"));
        insta::assert_snapshot!(err.to_string(), @"Chain not supported: solana");
    }

    #[test]
    fn test_by_chain_id_unknown_names_the_id() {
        let err = by_chain_id(56).unwrap_err();
        insta::assert_snapshot!(err.to_string(), @"Chain not supported: 56");
    }

    #[test]
    fn test_by_chain_id_round_trips_names() {
        for entry in chains().iter().filter(|e| e.chain_id().is_some()) {
            let found = by_chain_id(entry.chain_id().unwrap()).unwrap();
            assert_eq!(found.name(), entry.name());
        }
    }

    #[test]
    fn test_chain_ids_and_names_are_unique() {
        let ids: Vec<u64> = chains().iter().filter_map(|e| e.chain_id()).collect();
        let unique_ids: HashSet<u64> = ids.iter().copied().collect();
        assert_eq!(ids.len(), unique_ids.len());

        let names: HashSet<&str> = chains().iter().map(|e| e.name()).collect();
        assert_eq!(names.len(), chains().len());

        let eids: HashSet<u32> = chains().iter().map(|e| e.eid()).collect();
        assert_eq!(eids.len(), chains().len());
    }

    #[test]
    fn test_value_helper_presence() {
        assert!(lookup("arbitrum").unwrap().value_helper().is_some());
        assert!(lookup("ethereum").unwrap().value_helper().is_none());
        assert!(lookup("ton").unwrap().value_helper().is_none());
    }

    #[test]
    fn test_non_evm_chains_have_no_source_contracts() {
        for name in ["ton", "tron"] {
            let entry = lookup(name).unwrap();
            assert!(entry.family().is_non_evm());
            for kind in ContractKind::PRIORITY {
                assert!(entry.contract(kind).is_none());
            }
        }
    }

    #[test]
    fn test_registered_chain_names() {
        let names: Vec<&str> = chains().iter().map(|e| e.name()).collect();
        insta::assert_snapshot!(
            names.join(","),
            @"ethereum,arbitrum,polygon,berachain,ink,optimism,unichain,mantle,plasma,ton,tron"
        );
    }
}
