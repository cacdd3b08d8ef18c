//! OpenTelemetry span helpers for USDT0 bridge operations
//!
//! This module provides orthogonal span instrumentation: static span names,
//! structured attributes, and separation from business logic.
//!
//! # Usage
//!
//! These span helpers are used internally by the [`Usdt0Bridge`](crate::Usdt0Bridge)
//! implementation but are exposed publicly for advanced users who need custom
//! instrumentation or want to integrate with existing OpenTelemetry setups.
//!
//! # Example
//!
//! ```rust,no_run
//! use usdt0_bridge::spans;
//! use alloy_primitives::{Address, U256};
//! use tracing::Instrument;
//!
//! # async fn example() {
//! let span = spans::quote_bridge("tron", &Address::ZERO, &U256::from(100), "standard");
//! async {
//!     // Your custom quoting logic here
//! }
//! .instrument(span)
//! .await;
//! # }
//! ```

use alloy_primitives::{Address, U256};
use tracing::Span;

/// Create span for a full fee quote.
///
/// Parent: Caller's span
/// Children: usdt0_bridge.resolve_oft_contract, usdt0_bridge.quote_fees
#[inline]
pub fn quote_bridge(
    target_chain: &str,
    token: &Address,
    amount: &U256,
    account_kind: &'static str,
) -> Span {
    tracing::info_span!(
        "usdt0_bridge.quote_bridge",
        target_chain = target_chain,
        token = %token,
        amount = %amount,
        account_kind = account_kind,
        error.type = tracing::field::Empty,
        error.message = tracing::field::Empty,
        error.source = tracing::field::Empty,
        error.context = tracing::field::Empty,
        otel.status_code = "OK",
    )
}

/// Create span for a bridge operation that ends in a submission.
///
/// Parent: Caller's span
/// Children: usdt0_bridge.resolve_oft_contract, usdt0_bridge.quote_fees, usdt0_bridge.dispatch
#[inline]
pub fn bridge(
    target_chain: &str,
    token: &Address,
    amount: &U256,
    account_kind: &'static str,
) -> Span {
    tracing::info_span!(
        "usdt0_bridge.bridge",
        target_chain = target_chain,
        token = %token,
        amount = %amount,
        account_kind = account_kind,
        fee = tracing::field::Empty,
        bridge_fee = tracing::field::Empty,
        error.type = tracing::field::Empty,
        error.message = tracing::field::Empty,
        error.source = tracing::field::Empty,
        error.context = tracing::field::Empty,
        otel.status_code = "OK",
    )
}

/// Create span for finding the OFT contract bound to a token.
///
/// Parent: quote_bridge or bridge
/// Children: Reader calls (chain id, `token()` probes)
#[inline]
pub fn resolve_oft_contract(token: &Address, target_chain: &str) -> Span {
    tracing::debug_span!(
        "usdt0_bridge.resolve_oft_contract",
        token = %token,
        target_chain = target_chain,
        source_chain = tracing::field::Empty,
        contract_kind = tracing::field::Empty,
        oft = tracing::field::Empty,
    )
}

/// Create span for quoting the LayerZero fee.
///
/// Parent: quote_bridge or bridge
/// Children: Reader calls (`quoteSend`, value helper `quote`)
#[inline]
pub fn quote_fees(oft: &Address, dst_eid: u32, bundled: bool) -> Span {
    tracing::debug_span!(
        "usdt0_bridge.quote_fees",
        oft = %oft,
        dst_eid = dst_eid,
        bundled = bundled,
    )
}

/// Create span for handing the assembled calls to the wallet.
///
/// Parent: bridge
/// Children: Wallet submission calls
#[inline]
pub fn dispatch(account_kind: &'static str, call_count: usize) -> Span {
    tracing::info_span!(
        "usdt0_bridge.dispatch",
        account_kind = account_kind,
        call_count = call_count,
    )
}

/// Record error attributes on the current span.
///
/// Follows OpenTelemetry semantic conventions for error tracking:
/// - error.type: The error type/variant
/// - error.message: Human-readable error message
/// - error.source: The underlying error, if any
pub fn record_error<E: std::error::Error>(error: &E) {
    let current_span = tracing::Span::current();
    current_span.record(
        "error.type",
        error.to_string().split(':').next().unwrap_or("Unknown"),
    );
    current_span.record("error.message", error.to_string());
    current_span.record("otel.status_code", "ERROR");

    if let Some(source) = error.source() {
        current_span.record("error.source", source.to_string());
    }
}

/// Record error attributes with custom context on the current span.
///
/// # Example
///
/// ```rust,no_run
/// use usdt0_bridge::spans;
///
/// # fn example() {
/// let span = tracing::info_span!("usdt0_bridge.operation");
/// let _guard = span.enter();
///
/// spans::record_error_with_context(
///     "FeeExceeded",
///     "Bridge fee meets or exceeds the configured maximum",
///     Some("max_fee=1000"),
/// );
/// # }
/// ```
pub fn record_error_with_context(
    error_type: &str,
    error_message: &str,
    additional_context: Option<&str>,
) {
    let current_span = tracing::Span::current();
    current_span.record("error.type", error_type);
    current_span.record("error.message", error_message);
    current_span.record("otel.status_code", "ERROR");

    if let Some(context) = additional_context {
        current_span.record("error.context", context);
    }
}
