//! Recipient encoding for OFT `SendParam.to`
//!
//! LayerZero addresses every recipient as a `bytes32`. How a human-readable
//! address maps onto those 32 bytes depends on the destination chain family:
//!
//! - **EVM**: the 20-byte address, left-padded with zeros
//! - **TON**: the 32-byte account hash of the friendly or raw address; the
//!   tag and workchain are not part of the encoding
//! - **TRON**: the 21-byte base58check payload (`0x41` prefix included),
//!   left-padded with zeros

use std::str::FromStr;

use alloy_primitives::{Address, B256};
use base64::{
    engine::general_purpose::{STANDARD, URL_SAFE},
    Engine as _,
};

use crate::{BridgeError, ChainFamily, Result};

/// Length of a TON friendly address once base64-decoded
const TON_FRIENDLY_LEN: usize = 36;

/// Valid TON friendly tags: bounceable, non-bounceable, and their testnet variants
const TON_TAGS: [u8; 4] = [0x11, 0x51, 0x91, 0xd1];

/// TRON mainnet address prefix
const TRON_ADDRESS_PREFIX: u8 = 0x41;

/// Encodes a recipient address into the 32-byte form expected by the OFT
///
/// # Example
///
/// ```rust
/// use usdt0_bridge::{encode_recipient, ChainFamily};
///
/// let to = encode_recipient("0xa460AEbce0d3A4BecAd8ccf9D6D4861296c503Bd", ChainFamily::Evm).unwrap();
/// assert_eq!(&to[..12], &[0u8; 12]);
/// ```
///
/// # Errors
///
/// Returns [`BridgeError::InvalidRecipient`] if the string is not a valid
/// address for the given family.
pub fn encode_recipient(recipient: &str, family: ChainFamily) -> Result<B256> {
    let recipient = recipient.trim();
    match family {
        ChainFamily::Evm => encode_evm(recipient),
        ChainFamily::Ton => encode_ton(recipient),
        ChainFamily::Tron => encode_tron(recipient),
    }
}

fn invalid(recipient: &str, reason: impl Into<String>) -> BridgeError {
    BridgeError::InvalidRecipient {
        recipient: recipient.to_string(),
        reason: reason.into(),
    }
}

fn encode_evm(recipient: &str) -> Result<B256> {
    let address = Address::from_str(recipient).map_err(|e| invalid(recipient, e.to_string()))?;
    Ok(address.into_word())
}

fn encode_ton(recipient: &str) -> Result<B256> {
    if let Some((workchain, hash)) = recipient.split_once(':') {
        return encode_ton_raw(recipient, workchain, hash);
    }

    let engine = if recipient.contains(['-', '_']) {
        &URL_SAFE
    } else {
        &STANDARD
    };
    let bytes = engine
        .decode(recipient)
        .map_err(|e| invalid(recipient, format!("not a TON friendly address: {e}")))?;

    if bytes.len() != TON_FRIENDLY_LEN {
        return Err(invalid(
            recipient,
            format!(
                "TON friendly address must be {TON_FRIENDLY_LEN} bytes, got {}",
                bytes.len()
            ),
        ));
    }
    if !TON_TAGS.contains(&bytes[0]) {
        return Err(invalid(
            recipient,
            format!("unknown TON address tag 0x{:02x}", bytes[0]),
        ));
    }

    let (body, checksum) = bytes.split_at(34);
    let expected = u16::from_be_bytes([checksum[0], checksum[1]]);
    if crc16_xmodem(body) != expected {
        return Err(invalid(recipient, "TON address checksum mismatch"));
    }

    Ok(B256::from_slice(&body[2..]))
}

fn encode_ton_raw(recipient: &str, workchain: &str, hash: &str) -> Result<B256> {
    match workchain.parse::<i32>() {
        Ok(0 | -1) => {}
        _ => {
            return Err(invalid(
                recipient,
                format!("unsupported TON workchain {workchain}"),
            ))
        }
    }
    if hash.len() != 64 {
        return Err(invalid(recipient, "TON account hash must be 64 hex characters"));
    }
    B256::from_str(hash).map_err(|e| invalid(recipient, e.to_string()))
}

fn encode_tron(recipient: &str) -> Result<B256> {
    let payload = bs58::decode(recipient)
        .with_check(None)
        .into_vec()
        .map_err(|e| invalid(recipient, format!("not a TRON base58check address: {e}")))?;

    if payload.len() != 21 || payload[0] != TRON_ADDRESS_PREFIX {
        return Err(invalid(
            recipient,
            "TRON address must be 21 bytes starting with 0x41",
        ));
    }

    Ok(B256::left_padding_from(&payload))
}

/// CRC-16/XMODEM as used by TON friendly addresses
fn crc16_xmodem(data: &[u8]) -> u16 {
    let mut crc: u16 = 0;
    for byte in data {
        crc ^= (*byte as u16) << 8;
        for _ in 0..8 {
            crc = if crc & 0x8000 != 0 {
                (crc << 1) ^ 0x1021
            } else {
                crc << 1
            };
        }
    }
    crc
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy_primitives::{b256, hex};
    use rstest::rstest;

    const TON_HASH: B256 =
        b256!("83dfd552e63729b472fcbcc8c45ebcc6691702558b68ec7527e1ba403a0f31a8");

    #[test]
    fn test_evm_recipient_is_left_padded() {
        let encoded =
            encode_recipient("0xa460AEbce0d3A4BecAd8ccf9D6D4861296c503Bd", ChainFamily::Evm)
                .unwrap();
        insta::assert_snapshot!(
            hex::encode(encoded),
            @"000000000000000000000000a460aebce0d3a4becad8ccf9d6d4861296c503bd"
        );
    }

    #[rstest]
    #[case("EQCD39VS5jcptHL8vMjEXrzGaRcCVYto7HUn4bpAOg8xqB2N")]
    #[case("UQCD39VS5jcptHL8vMjEXrzGaRcCVYto7HUn4bpAOg8xqEBI")]
    #[case("Ef-D39VS5jcptHL8vMjEXrzGaRcCVYto7HUn4bpAOg8xqOLF")]
    #[case("Ef+D39VS5jcptHL8vMjEXrzGaRcCVYto7HUn4bpAOg8xqOLF")]
    #[case("0:83dfd552e63729b472fcbcc8c45ebcc6691702558b68ec7527e1ba403a0f31a8")]
    #[case("-1:83dfd552e63729b472fcbcc8c45ebcc6691702558b68ec7527e1ba403a0f31a8")]
    fn test_ton_recipient_encodes_account_hash(#[case] recipient: &str) {
        assert_eq!(
            encode_recipient(recipient, ChainFamily::Ton).unwrap(),
            TON_HASH
        );
    }

    #[test]
    fn test_tron_recipient_is_left_padded() {
        let encoded =
            encode_recipient("TR7NHqjeKQxGTCi8q8ZY4pL8otSzgjLj6t", ChainFamily::Tron).unwrap();
        insta::assert_snapshot!(
            hex::encode(encoded),
            @"000000000000000000000041a614f803b6fd780986a42c78ec9c7f77e6ded13c"
        );
    }

    #[rstest]
    #[case("0x1234", ChainFamily::Evm)]
    #[case("TR7NHqjeKQxGTCi8q8ZY4pL8otSzgjLj6t", ChainFamily::Evm)]
    #[case("EQCD39VS5jcptHL8vMjEXrzGaRcCVYto7HUn4bpAOg8xqB2M", ChainFamily::Ton)]
    #[case("EQCD39VS5jcptHL8vMjEXrzGaRcCVYto7HUn4bpAOg8x", ChainFamily::Ton)]
    #[case("5:83dfd552e63729b472fcbcc8c45ebcc6691702558b68ec7527e1ba403a0f31a8", ChainFamily::Ton)]
    #[case("0xa460AEbce0d3A4BecAd8ccf9D6D4861296c503Bd", ChainFamily::Ton)]
    #[case("TR7NHqjeKQxGTCi8q8ZY4pL8otSzgjLj6u", ChainFamily::Tron)]
    #[case("0xa460AEbce0d3A4BecAd8ccf9D6D4861296c503Bd", ChainFamily::Tron)]
    fn test_malformed_recipient_is_rejected(
        #[case] recipient: &str,
        #[case] family: ChainFamily,
    ) {
        let err = encode_recipient(recipient, family).unwrap_err();
        assert!(
            matches!(err, BridgeError::InvalidRecipient { recipient: ref r, .. } if r == recipient),
            "unexpected error: {err}"
        );
    }

    #[test]
    fn test_crc16_xmodem_check_value() {
        assert_eq!(crc16_xmodem(b"123456789"), 0x31c3);
    }
}
