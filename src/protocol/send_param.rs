//! Construction of the OFT [`SendParam`]

use alloy_primitives::{bytes, Bytes, B256, U256};

use super::recipient::encode_recipient;
use crate::chain::{lookup, ChainEntry};
use crate::contracts::oft::SendParam;
use crate::Result;

/// Numerator of the slippage tolerance applied to `minAmountLD` (99.9%)
pub const TOLERANCE_NUMERATOR: u64 = 999;

/// Denominator of the slippage tolerance applied to `minAmountLD`
pub const TOLERANCE_DENOMINATOR: u64 = 1000;

/// LayerZero type-3 options with no executor or DVN options set
pub const EMPTY_OPTIONS: Bytes = bytes!("0003");

/// Returns `floor(amount * 999 / 1000)`
///
/// Splits `amount` into quotient and remainder so the multiplication cannot
/// overflow, even for `U256::MAX`.
///
/// ```rust
/// use usdt0_bridge::min_amount_after_tolerance;
/// use alloy_primitives::U256;
///
/// assert_eq!(min_amount_after_tolerance(U256::from(100)), U256::from(99));
/// ```
pub fn min_amount_after_tolerance(amount: U256) -> U256 {
    let numerator = U256::from(TOLERANCE_NUMERATOR);
    let denominator = U256::from(TOLERANCE_DENOMINATOR);

    let quotient = amount / denominator;
    let remainder = amount % denominator;
    quotient * numerator + remainder * numerator / denominator
}

/// Builds the `SendParam` for an already resolved destination and recipient
pub fn send_param_for(target: &ChainEntry, to: B256, amount: U256) -> SendParam {
    SendParam {
        dstEid: target.eid(),
        to,
        amountLD: amount,
        minAmountLD: min_amount_after_tolerance(amount),
        extraOptions: EMPTY_OPTIONS,
        composeMsg: Bytes::new(),
        oftCmd: Bytes::new(),
    }
}

/// Builds the `SendParam` for a transfer of `amount` to `recipient` on `target_chain`
///
/// # Errors
///
/// - [`BridgeError::UnsupportedChain`](crate::BridgeError::UnsupportedChain) if the chain is not registered
/// - [`BridgeError::InvalidRecipient`](crate::BridgeError::InvalidRecipient) if the recipient does not match the chain family
pub fn build_send_param(target_chain: &str, recipient: &str, amount: U256) -> Result<SendParam> {
    let target = lookup(target_chain)?;
    let to = encode_recipient(recipient, target.family())?;
    Ok(send_param_for(target, to, amount))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::BridgeError;
    use alloy_primitives::hex;
    use rstest::rstest;

    #[rstest]
    #[case(0u64, 0u64)]
    #[case(1, 0)]
    #[case(100, 99)]
    #[case(999, 998)]
    #[case(1000, 999)]
    #[case(1001, 999)]
    #[case(1_000_000, 999_000)]
    #[case(123_456_789, 123_333_332)]
    fn test_min_amount_is_floored(#[case] amount: u64, #[case] expected: u64) {
        assert_eq!(
            min_amount_after_tolerance(U256::from(amount)),
            U256::from(expected)
        );
    }

    #[test]
    fn test_min_amount_does_not_overflow() {
        let min = min_amount_after_tolerance(U256::MAX);
        let expected = U256::MAX - U256::MAX.div_ceil(U256::from(1000));
        assert_eq!(min, expected);
    }

    #[test]
    fn test_min_amount_matches_direct_formula() {
        for amount in [7u64, 1_999, 250_001, 10u64.pow(18) + 3] {
            let amount = U256::from(amount);
            assert_eq!(
                min_amount_after_tolerance(amount),
                amount * U256::from(999) / U256::from(1000)
            );
        }
    }

    #[test]
    fn test_build_send_param_evm() {
        let param = build_send_param(
            "ethereum",
            "0xa460AEbce0d3A4BecAd8ccf9D6D4861296c503Bd",
            U256::from(100),
        )
        .unwrap();

        assert_eq!(param.dstEid, 30101);
        assert_eq!(param.amountLD, U256::from(100));
        assert_eq!(param.minAmountLD, U256::from(99));
        assert_eq!(hex::encode(&param.extraOptions), "0003");
        assert!(param.composeMsg.is_empty());
        assert!(param.oftCmd.is_empty());
        assert_eq!(
            hex::encode(param.to),
            "000000000000000000000000a460aebce0d3a4becad8ccf9d6d4861296c503bd"
        );
    }

    #[test]
    fn test_build_send_param_tron() {
        let param =
            build_send_param("tron", "TR7NHqjeKQxGTCi8q8ZY4pL8otSzgjLj6t", U256::from(5_000))
                .unwrap();
        assert_eq!(param.dstEid, 30420);
        assert_eq!(param.minAmountLD, U256::from(4_995));
    }

    #[test]
    fn test_build_send_param_unknown_chain() {
        let err = build_send_param("solana", "whatever", U256::from(1)).unwrap_err();
        assert!(matches!(err, BridgeError::UnsupportedChain { .. }));
    }

    #[test]
    fn test_build_send_param_wrong_family() {
        let err = build_send_param(
            "ton",
            "0xa460AEbce0d3A4BecAd8ccf9D6D4861296c503Bd",
            U256::from(1),
        )
        .unwrap_err();
        assert!(matches!(err, BridgeError::InvalidRecipient { .. }));
    }
}
