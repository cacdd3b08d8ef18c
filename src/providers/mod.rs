//! Production implementations of the bridge trait abstractions.
//!
//! This module provides the "real" [`BridgeReader`](crate::BridgeReader)
//! that performs contract reads against an actual network. Wallet accounts
//! are supplied by the caller; test code will implement custom fakes or use
//! the ones in [`crate::testing`].

mod alloy;

pub use self::alloy::AlloyBridgeReader;
