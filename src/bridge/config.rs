use std::time::Duration;

use alloy_primitives::{Address, U256};
use serde::Deserialize;

use crate::traits::UserOperationConfig;

/// Default deadline for a whole quote or bridge operation
pub const DEFAULT_TIMEOUT_SECS: u64 = 60;

/// Configuration stored on the bridge at construction time.
///
/// # Examples
///
/// ```rust
/// use usdt0_bridge::BridgeConfig;
/// use alloy_primitives::U256;
///
/// // Defaults: no fee ceiling, 60 second deadline
/// let config = BridgeConfig::default();
///
/// // Refuse to bridge when fees reach 0.01 ETH and allow up to two minutes
/// let config = BridgeConfig::default()
///     .with_bridge_max_fee(U256::from(10_000_000_000_000_000u64))
///     .with_timeout_secs(120);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct BridgeConfig {
    /// Ceiling on `fee + bridge_fee`; `bridge` fails once the total reaches it.
    pub bridge_max_fee: Option<U256>,
    /// Deadline in seconds for every network call of a single operation.
    /// `None` waits indefinitely.
    pub timeout_secs: Option<u64>,
}

impl Default for BridgeConfig {
    fn default() -> Self {
        Self {
            bridge_max_fee: None,
            timeout_secs: Some(DEFAULT_TIMEOUT_SECS),
        }
    }
}

impl BridgeConfig {
    pub fn with_bridge_max_fee(mut self, max_fee: U256) -> Self {
        self.bridge_max_fee = Some(max_fee);
        self
    }

    pub fn with_timeout_secs(mut self, secs: u64) -> Self {
        self.timeout_secs = Some(secs);
        self
    }

    /// Disables the operation deadline.
    pub fn without_timeout(mut self) -> Self {
        self.timeout_secs = None;
        self
    }

    /// Returns the operation deadline as a [`Duration`]
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs.map(Duration::from_secs)
    }
}

/// Per-call overrides for [`quote_bridge`](crate::Usdt0Bridge::quote_bridge)
/// and [`bridge`](crate::Usdt0Bridge::bridge)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BridgeOverrides {
    /// Replaces [`BridgeConfig::bridge_max_fee`] for this call
    pub bridge_max_fee: Option<U256>,
    /// Paymaster token for ERC-4337 accounts, ignored by standard accounts
    pub paymaster_token: Option<Address>,
}

impl BridgeOverrides {
    pub fn with_bridge_max_fee(mut self, max_fee: U256) -> Self {
        self.bridge_max_fee = Some(max_fee);
        self
    }

    pub fn with_paymaster_token(mut self, token: Address) -> Self {
        self.paymaster_token = Some(token);
        self
    }

    pub(crate) fn user_operation_config(&self) -> UserOperationConfig {
        UserOperationConfig {
            paymaster_token: self.paymaster_token,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = BridgeConfig::default();
        assert_eq!(config.bridge_max_fee, None);
        assert_eq!(config.timeout(), Some(Duration::from_secs(60)));
    }

    #[test]
    fn test_builder_methods() {
        let config = BridgeConfig::default()
            .with_bridge_max_fee(U256::from(1_000))
            .with_timeout_secs(5);
        assert_eq!(config.bridge_max_fee, Some(U256::from(1_000)));
        assert_eq!(config.timeout(), Some(Duration::from_secs(5)));

        assert_eq!(config.without_timeout().timeout(), None);
    }

    #[test]
    fn test_config_deserializes_with_defaults() {
        let config: BridgeConfig = serde_json::from_str(r#"{"bridge_max_fee":"0x3e8"}"#).unwrap();
        assert_eq!(config.bridge_max_fee, Some(U256::from(1_000)));
        assert_eq!(config.timeout_secs, Some(DEFAULT_TIMEOUT_SECS));

        let config: BridgeConfig = serde_json::from_str(r#"{"timeout_secs":null}"#).unwrap();
        assert_eq!(config.timeout(), None);
    }

    #[test]
    fn test_overrides_forward_paymaster_token() {
        let token = Address::repeat_byte(0x11);
        let overrides = BridgeOverrides::default().with_paymaster_token(token);
        assert_eq!(
            overrides.user_operation_config(),
            UserOperationConfig {
                paymaster_token: Some(token)
            }
        );
    }
}
