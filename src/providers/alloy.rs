// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0
//! Alloy-based bridge reader implementation.

use alloy_network::Ethereum;
use alloy_primitives::{Address, U256};
use alloy_provider::{DynProvider, Provider, ProviderBuilder};
use async_trait::async_trait;
use tracing::{debug, instrument, trace};
use url::Url;

use crate::contracts::oft::{MessagingFee, OftContract, SendParam};
use crate::contracts::value_helper::ValueHelperContract;
use crate::error::{BridgeError, Result};
use crate::traits::BridgeReader;

/// Production bridge reader wrapping Alloy's [`Provider`] trait.
///
/// # Examples
///
/// ```rust,no_run
/// use usdt0_bridge::providers::AlloyBridgeReader;
/// use alloy_provider::ProviderBuilder;
///
/// # fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let provider = ProviderBuilder::new().connect_http("https://arb1.arbitrum.io/rpc".parse()?);
/// let reader = AlloyBridgeReader::new(provider);
///
/// // Or straight from an endpoint string
/// let reader = AlloyBridgeReader::connect_http("https://arb1.arbitrum.io/rpc")?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct AlloyBridgeReader<P>
where
    P: Provider<Ethereum> + Clone,
{
    provider: P,
}

impl<P> AlloyBridgeReader<P>
where
    P: Provider<Ethereum> + Clone,
{
    /// Creates a new [`AlloyBridgeReader`] wrapping the given Alloy provider.
    pub fn new(provider: P) -> Self {
        Self { provider }
    }

    /// Returns a reference to the underlying Alloy provider.
    pub fn inner(&self) -> &P {
        &self.provider
    }
}

impl AlloyBridgeReader<DynProvider> {
    /// Wraps a plain JSON-RPC endpoint into a reader.
    ///
    /// # Errors
    ///
    /// Returns [`BridgeError::Provider`] if the URL cannot be parsed.
    pub fn connect_http(rpc_url: &str) -> Result<Self> {
        let url = Url::parse(rpc_url)
            .map_err(|e| BridgeError::Provider(format!("Invalid RPC URL {rpc_url}: {e}")))?;
        let provider = ProviderBuilder::new().connect_http(url).erased();
        Ok(Self::new(provider))
    }
}

#[async_trait]
impl<P> BridgeReader for AlloyBridgeReader<P>
where
    P: Provider<Ethereum> + Clone + Send + Sync,
{
    #[instrument(skip(self))]
    async fn chain_id(&self) -> Result<u64> {
        trace!("Fetching chain id");
        let chain_id = self.provider.get_chain_id().await?;
        debug!(chain_id = chain_id, "Chain id retrieved");
        Ok(chain_id)
    }

    #[instrument(skip_all, fields(oft = %oft))]
    async fn oft_token(&self, oft: Address) -> Result<Address> {
        Ok(OftContract::new(oft, &self.provider).token().await?)
    }

    #[instrument(skip_all, fields(oft = %oft, dst_eid = send_param.dstEid))]
    async fn quote_send(
        &self,
        oft: Address,
        send_param: &SendParam,
        pay_in_lz_token: bool,
    ) -> Result<MessagingFee> {
        Ok(OftContract::new(oft, &self.provider)
            .quote_send(send_param.clone(), pay_in_lz_token)
            .await?)
    }

    #[instrument(skip_all, fields(helper = %helper, oft = %oft))]
    async fn quote_value_helper(
        &self,
        helper: Address,
        oft: Address,
        fee: &MessagingFee,
    ) -> Result<U256> {
        Ok(ValueHelperContract::new(helper, &self.provider)
            .quote(oft, fee.clone())
            .await?)
    }
}
