use alloy_primitives::{Address, B256, U256};
use bon::Builder;
use serde::Serialize;

/// Parameters for bridging a token to another chain
#[derive(Builder, Debug, Clone, PartialEq, Eq)]
pub struct BridgeOptions {
    /// Registry name of the destination chain, e.g. `"tron"`
    #[builder(into)]
    target_chain: String,
    /// Recipient in the destination chain's own address format
    #[builder(into)]
    recipient: String,
    /// Token contract on the source chain
    token: Address,
    /// Amount in the token's smallest unit
    amount: U256,
}

impl BridgeOptions {
    pub fn target_chain(&self) -> &str {
        &self.target_chain
    }

    pub fn recipient(&self) -> &str {
        &self.recipient
    }

    pub fn token(&self) -> Address {
        self.token
    }

    pub fn amount(&self) -> U256 {
        self.amount
    }
}

/// Fees a bridge operation is expected to cost
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BridgeQuote {
    /// Execution fee summed over every transaction or the user operation
    pub fee: U256,
    /// LayerZero fee: native for standard accounts, token units for bundled ones
    pub bridge_fee: U256,
}

/// Result of a submitted bridge operation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BridgeResult {
    /// Send transaction hash, or user operation hash for bundled accounts
    pub hash: B256,
    pub fee: U256,
    pub bridge_fee: U256,
    /// Approval transaction hash, only set for standard accounts
    #[serde(skip_serializing_if = "Option::is_none")]
    pub approve_hash: Option<B256>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bridge_options_builder() {
        let options = BridgeOptions::builder()
            .target_chain("tron")
            .recipient("TR7NHqjeKQxGTCi8q8ZY4pL8otSzgjLj6t")
            .token(Address::ZERO)
            .amount(U256::from(1000))
            .build();

        assert_eq!(options.target_chain(), "tron");
        assert_eq!(options.recipient(), "TR7NHqjeKQxGTCi8q8ZY4pL8otSzgjLj6t");
        assert_eq!(options.token(), Address::ZERO);
        assert_eq!(options.amount(), U256::from(1000));
    }

    #[test]
    fn test_bridge_result_omits_missing_approve_hash() {
        let result = BridgeResult {
            hash: B256::repeat_byte(0x01),
            fee: U256::from(3),
            bridge_fee: U256::from(4),
            approve_hash: None,
        };
        let json = serde_json::to_value(result).unwrap();
        assert!(json.get("approve_hash").is_none());
        assert_eq!(json["fee"], "0x3");
    }
}
