//! OFT protocol types and definitions
//!
//! This module contains the protocol-level pieces of an OFT transfer: the
//! `bytes32` recipient encoding, `SendParam` construction with its slippage
//! tolerance, and the fee arithmetic used by the bridge flows.

mod fees;
mod recipient;
mod send_param;

pub use fees::{
    buffered_approval_amount, buffered_fee, exceeds_max_fee, FEE_BUFFER_DENOMINATOR,
    FEE_BUFFER_NUMERATOR,
};
pub use recipient::encode_recipient;
pub use send_param::{
    build_send_param, min_amount_after_tolerance, send_param_for, EMPTY_OPTIONS,
    TOLERANCE_DENOMINATOR, TOLERANCE_NUMERATOR,
};
