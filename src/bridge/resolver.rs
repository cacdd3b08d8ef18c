//! Discovery of the bridge contract bound to a token on the source chain

use alloy_primitives::Address;
use tracing::{debug, error, info};

use super::deadline::Deadline;
use crate::chain::{ChainEntry, ContractKind};
use crate::error::{BridgeError, Result};
use crate::spans;
use crate::traits::BridgeReader;

/// OFT contract resolved for a token on the source chain
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OftContractHandle {
    pub kind: ContractKind,
    pub address: Address,
}

/// Probes the source chain's candidate contracts in priority order.
///
/// The binding can only be learned from `token()` reads, so each present
/// candidate is asked in turn and the first match wins. The primary OFT kind
/// does not reach non-EVM destinations and is skipped for them.
pub(crate) async fn probe_oft_contract<R: BridgeReader + ?Sized>(
    reader: &R,
    source: &ChainEntry,
    target: &ChainEntry,
    token: Address,
    deadline: Deadline,
) -> Result<OftContractHandle> {
    let span = tracing::Span::current();

    for kind in ContractKind::PRIORITY {
        if kind == ContractKind::Oft && target.family().is_non_evm() {
            debug!(
                target_chain = target.name(),
                event = "primary_oft_skipped_for_non_evm_target"
            );
            continue;
        }
        let Some(candidate) = source.contract(kind) else {
            continue;
        };

        let bound_token = deadline
            .run("oft.token", reader.oft_token(candidate))
            .await?;
        debug!(
            contract_kind = %kind,
            candidate = %candidate,
            bound_token = %bound_token,
            event = "oft_candidate_probed"
        );

        if bound_token == token {
            span.record("contract_kind", kind.to_string());
            span.record("oft", candidate.to_string());
            info!(
                contract_kind = %kind,
                oft = %candidate,
                source_chain = source.name(),
                event = "oft_contract_resolved"
            );
            return Ok(OftContractHandle {
                kind,
                address: candidate,
            });
        }
    }

    spans::record_error_with_context(
        "UnsupportedToken",
        &format!("No bridge contract on {} is bound to {token}", source.name()),
        Some(&format!("target_chain={}", target.name())),
    );
    error!(
        token = %token,
        source_chain = source.name(),
        event = "oft_contract_not_found"
    );
    Err(BridgeError::UnsupportedToken {
        token,
        chain: source.name().to_string(),
    })
}
