//! Fee arithmetic shared by the quoting and dispatch paths

use alloy_primitives::U256;

/// Numerator of the safety margin applied to token-denominated bridge fees (110%)
pub const FEE_BUFFER_NUMERATOR: u64 = 110;

/// Denominator of the safety margin applied to token-denominated bridge fees
pub const FEE_BUFFER_DENOMINATOR: u64 = 100;

/// Returns `ceil(bridge_fee * 1.10)`
pub fn buffered_fee(bridge_fee: U256) -> U256 {
    let numerator = U256::from(FEE_BUFFER_NUMERATOR);
    let denominator = U256::from(FEE_BUFFER_DENOMINATOR);

    let quotient = bridge_fee / denominator;
    let remainder = bridge_fee % denominator;
    let scaled_remainder = remainder * numerator;

    let mut buffered = quotient
        .saturating_mul(numerator)
        .saturating_add(scaled_remainder / denominator);
    if !(scaled_remainder % denominator).is_zero() {
        buffered = buffered.saturating_add(U256::from(1));
    }
    buffered
}

/// Allowance granted to the value helper: `ceil(amount + bridge_fee * 1.10)`
///
/// Saturates at `U256::MAX` rather than wrapping.
pub fn buffered_approval_amount(amount: U256, bridge_fee: U256) -> U256 {
    amount.saturating_add(buffered_fee(bridge_fee))
}

/// Returns true when `fee + bridge_fee` reaches the configured ceiling
pub fn exceeds_max_fee(fee: U256, bridge_fee: U256, max_fee: U256) -> bool {
    fee.saturating_add(bridge_fee) >= max_fee
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(0u64, 0u64)]
    #[case(1, 2)]
    #[case(9, 10)]
    #[case(10, 11)]
    #[case(100, 110)]
    #[case(101, 112)]
    #[case(1_000_000, 1_100_000)]
    fn test_buffered_fee_rounds_up(#[case] fee: u64, #[case] expected: u64) {
        assert_eq!(buffered_fee(U256::from(fee)), U256::from(expected));
    }

    #[test]
    fn test_buffered_approval_amount() {
        assert_eq!(
            buffered_approval_amount(U256::from(100), U256::from(25)),
            U256::from(128)
        );
        assert_eq!(
            buffered_approval_amount(U256::MAX, U256::from(1)),
            U256::MAX
        );
    }

    #[rstest]
    #[case(10, 5, 15, true)]
    #[case(10, 5, 16, false)]
    #[case(0, 0, 0, true)]
    #[case(10, 0, 9, true)]
    fn test_exceeds_max_fee(
        #[case] fee: u64,
        #[case] bridge_fee: u64,
        #[case] max_fee: u64,
        #[case] expected: bool,
    ) {
        assert_eq!(
            exceeds_max_fee(U256::from(fee), U256::from(bridge_fee), U256::from(max_fee)),
            expected
        );
    }
}
