use alloy_primitives::{Address, U256};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum BridgeError {
    #[error("Chain not supported: {chain}")]
    UnsupportedChain { chain: String },

    #[error("Invalid target chain: {chain} is also the source chain")]
    InvalidTarget { chain: String },

    #[error("Token {token} is not supported on chain {chain}")]
    UnsupportedToken { token: Address, chain: String },

    #[error("Unsupported operation: {0}")]
    UnsupportedOperation(String),

    #[error("Unsupported account type: {0}")]
    UnsupportedAccountType(String),

    #[error("No provider configured, a network connection is required")]
    NoProvider,

    #[error("Bridge fee {fee} meets or exceeds the configured maximum {max_fee}")]
    FeeExceeded { fee: U256, max_fee: U256 },

    #[error("Invalid recipient {recipient}: {reason}")]
    InvalidRecipient { recipient: String, reason: String },

    #[error("Deadline exceeded while waiting for {operation}")]
    Timeout { operation: String },

    #[error("Provider error: {0}")]
    Provider(String),

    #[error("Contract call failed: {0}")]
    ContractCall(String),

    #[error("Wallet error: {0}")]
    Wallet(String),

    #[error("RPC error: {0}")]
    Rpc(#[from] alloy_json_rpc::RpcError<alloy_transport::TransportErrorKind>),
}

impl From<alloy_contract::Error> for BridgeError {
    fn from(e: alloy_contract::Error) -> Self {
        BridgeError::ContractCall(e.to_string())
    }
}

pub type Result<T> = std::result::Result<T, BridgeError>;
