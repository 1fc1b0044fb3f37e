//! Cross-codec behaviour over generated inputs.

use alloy::primitives::{Address, B256, U256, hex, keccak256};
use eth_codecs::{
    AddressCodec, BytesLike, CodecError, HashCodec, HexCodec, NULL_ADDRESS, SENTINEL_ADDRESS,
    StorageCodec, Uint256Codec,
};

/// Deterministic pseudo-random addresses.
fn addresses(count: u64) -> impl Iterator<Item = Address> {
    (0..count).map(|i| Address::from_word(keccak256(i.to_be_bytes())))
}

/// Flip the case of every hex letter whose position matches `mask`.
fn scramble_case(hex_digits: &str, mask: u64) -> String {
    hex_digits
        .chars()
        .enumerate()
        .map(|(i, c)| match (mask >> (i % 64)) & 1 {
            1 => c.to_ascii_uppercase(),
            _ => c.to_ascii_lowercase(),
        })
        .collect()
}

#[test]
fn any_case_pattern_normalizes_to_checksum() {
    for (i, address) in addresses(64).enumerate() {
        let checksum = AddressCodec::normalize(address).unwrap().to_string();
        let digits = hex::encode(address);
        for mask in [0, u64::MAX, 0xAAAA_AAAA_AAAA_AAAA, i as u64 * 0x9E37_79B9] {
            let input = format!("0x{}", scramble_case(&digits, mask));
            assert_eq!(AddressCodec::normalize(input.as_str()).unwrap().to_string(), checksum);
        }
    }
}

#[test]
fn checksum_case_is_load_bearing() {
    for address in addresses(64) {
        let checksum = AddressCodec::normalize(address).unwrap().to_string();
        assert!(AddressCodec::validate(&checksum));

        let lower = checksum.to_lowercase();
        let has_letters = checksum[2..].chars().any(|c| c.is_ascii_alphabetic());
        assert_eq!(AddressCodec::validate(&lower), !has_letters);
    }
}

#[test]
fn reserved_addresses_validate() {
    let null = AddressCodec::normalize(NULL_ADDRESS).unwrap().to_string();
    assert_eq!(null, "0x0000000000000000000000000000000000000000");
    assert!(AddressCodec::validate(&null));
    assert!(AddressCodec::validate(&SENTINEL_ADDRESS.to_checksum(None)));
}

#[test]
fn hash_lengths_other_than_32_fail() {
    for len in [0usize, 1, 20, 31, 33, 64] {
        let bytes = vec![0x11u8; len];
        assert!(matches!(
            HashCodec::normalize(bytes.clone()),
            Err(CodecError::InvalidLength { expected: 32, got, .. }) if got == len
        ));
        assert!(matches!(
            HashCodec::normalize(hex::encode_prefixed(&bytes)),
            Err(CodecError::InvalidLength { expected: 32, got, .. }) if got == len
        ));
    }
}

#[test]
fn hash_forms_compare_equal() {
    let hash: B256 = keccak256(b"Vitalik Buterin");
    let forms: [BytesLike; 3] =
        [hash.into(), hex::encode_prefixed(hash).into(), hex::encode(hash).into()];

    let normalized: Vec<_> =
        forms.iter().map(|f| HashCodec::normalize(f.clone()).unwrap()).collect();
    assert!(normalized.windows(2).all(|w| w[0] == w[1]));
    for value in &normalized {
        assert_eq!(value.to_string(), hex::encode_prefixed(hash));
    }

    let stored: Vec<_> = forms.into_iter().map(|f| HashCodec.to_storage(f).unwrap()).collect();
    assert!(stored.iter().all(|s| *s == hash));
}

#[test]
fn hash_with_trailing_digit_fails() {
    let input = format!("{}a", hex::encode_prefixed(keccak256(b"trailing")));
    assert!(matches!(
        HashCodec::normalize(input.as_str()),
        Err(CodecError::InvalidHex { .. } | CodecError::InvalidLength { .. })
    ));
}

#[test]
fn uint256_roundtrip_and_bounds() {
    let values = [
        U256::ZERO,
        U256::from(2u64),
        U256::from(u64::MAX),
        U256::from(u128::MAX),
        U256::MAX - U256::from(1u64),
        U256::MAX,
    ];
    for value in values {
        let stored = Uint256Codec.to_storage(value.into()).unwrap();
        assert_eq!(Uint256Codec.from_storage(stored).unwrap(), value);
    }

    let two_pow_256 =
        "115792089237316195423570985008687907853269984665640564039457584007913129639936";
    assert!(matches!(Uint256Codec::encode(two_pow_256), Err(CodecError::Overflow { .. })));
    assert!(matches!(Uint256Codec::encode(-2i64), Err(CodecError::Overflow { .. })));
}

#[test]
fn none_passes_through_every_codec() {
    assert_eq!(AddressCodec::maybe_normalize(None::<&str>), Ok(None));
    assert_eq!(AddressCodec.maybe_to_storage(None), Ok(None));
    assert_eq!(AddressCodec.maybe_from_storage(None), Ok(None));

    assert_eq!(HashCodec::maybe_normalize(None::<&str>), Ok(None));
    assert_eq!(HashCodec.maybe_to_storage(None), Ok(None));
    assert_eq!(HashCodec.maybe_from_storage(None), Ok(None));

    assert_eq!(HexCodec::maybe_to_stored(None::<Vec<u8>>), Ok(None));
    assert_eq!(HexCodec::maybe_display(None), Ok(None));
    assert_eq!(HexCodec.maybe_from_storage(None), Ok(None));

    assert_eq!(Uint256Codec::maybe_encode(None::<i64>), Ok(None));
    assert_eq!(Uint256Codec::maybe_decode(None), Ok(None));
    assert_eq!(Uint256Codec.maybe_to_storage(None), Ok(None));
}
