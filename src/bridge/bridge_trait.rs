use async_trait::async_trait;

use super::config::{BridgeConfig, BridgeOverrides};
use super::params::{BridgeOptions, BridgeQuote, BridgeResult};
use crate::account::BridgeAccount;
use crate::error::Result;

/// Common interface of a bridge protocol bound to one wallet account
///
/// Wallet integrations that support several bridge protocols can hold any of
/// them behind this trait. It is object-safe:
///
/// ```rust,no_run
/// # use usdt0_bridge::{BridgeOptions, BridgeOverrides, BridgeProtocol};
/// # async fn example(bridge: &dyn BridgeProtocol, options: BridgeOptions) -> Result<(), Box<dyn std::error::Error>> {
/// let quote = bridge.quote_bridge(&options, &BridgeOverrides::default()).await?;
/// if !bridge.account().is_read_only() {
///     bridge.bridge(&options, &BridgeOverrides::default()).await?;
/// }
/// # Ok(())
/// # }
/// ```
#[async_trait]
pub trait BridgeProtocol: Send + Sync {
    /// Returns the account operations are performed with
    fn account(&self) -> &BridgeAccount;

    fn config(&self) -> &BridgeConfig;

    /// Quotes the execution fee and the protocol fee of a transfer
    ///
    /// Makes no state-changing calls.
    async fn quote_bridge(
        &self,
        options: &BridgeOptions,
        overrides: &BridgeOverrides,
    ) -> Result<BridgeQuote>;

    /// Submits a transfer and returns its transaction hashes and fees
    async fn bridge(
        &self,
        options: &BridgeOptions,
        overrides: &BridgeOverrides,
    ) -> Result<BridgeResult>;
}
