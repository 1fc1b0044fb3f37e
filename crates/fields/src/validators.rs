//! Form-level validators over raw external strings.

use crate::{FieldResult, ValidationError};
use eth_codecs::{AddressCodec, CodecError, HashCodec, HexCodec, Uint256Codec};

/// Reject anything that is not an EIP-55 checksummed address.
pub fn validate_checksummed_address(value: &str) -> FieldResult<()> {
    AddressCodec::parse_checksummed(value)
        .map(drop)
        .map_err(|err| ValidationError::invalid_address(value).with_source(err).rejected())
}

/// Reject anything that is not hex text encoding exactly 32 bytes.
pub fn validate_hash(value: &str) -> FieldResult<()> {
    HashCodec::normalize(value).map(drop).map_err(|err| hash_error(value, err).rejected())
}

/// Reject hex text that does not encode exactly `len` bytes.
pub fn validate_bounded_hex(value: &str, len: usize) -> FieldResult<()> {
    HexCodec::validate_bounded(value, len)
        .map_err(|err| ValidationError::invalid_hex(value).with_source(err).rejected())
}

/// Reject anything that is not decimal text in `[0, 2**256 - 1]`.
pub fn validate_uint256(value: &str) -> FieldResult<()> {
    Uint256Codec::decode(value).map(drop).map_err(|err| uint256_error(value, err).rejected())
}

pub(crate) fn hash_error(value: &str, err: CodecError) -> ValidationError {
    let error = match err {
        CodecError::InvalidLength { .. } => ValidationError::hash_length(value),
        _ => ValidationError::invalid_hash(value),
    };
    error.with_source(err)
}

pub(crate) fn uint256_error(value: &str, err: CodecError) -> ValidationError {
    let code = match err {
        CodecError::Overflow { .. } => ValidationError::OVERFLOW,
        _ => ValidationError::INVALID,
    };
    ValidationError::invalid_uint256(value, code).with_source(err)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn address_validator() {
        assert!(validate_checksummed_address("0x5aAeb6053F3E94C9b9A09f33669435E7Ef1BeAed").is_ok());

        let err = validate_checksummed_address("0x5aaeb6053f3e94c9b9a09f33669435e7ef1beaed")
            .unwrap_err();
        assert!(matches!(err.codec_error(), Some(CodecError::InvalidChecksum { .. })));

        let err = validate_checksummed_address("0x23").unwrap_err();
        assert_eq!(err.message(), r#""0x23" value must be an EIP55 checksummed address."#);
    }

    #[test]
    fn hash_validator_codes() {
        assert!(validate_hash(&"ab".repeat(32)).is_ok());
        assert_eq!(validate_hash("0x1234").unwrap_err().code(), ValidationError::LENGTH);
        assert_eq!(validate_hash("0xzz").unwrap_err().code(), ValidationError::INVALID);
    }

    #[test]
    fn bounded_hex_validator() {
        assert!(validate_bounded_hex(&"cd".repeat(32), 32).is_ok());
        assert!(validate_bounded_hex(&"cd".repeat(16), 32).is_err());
    }

    #[test]
    fn uint256_validator_codes() {
        assert!(validate_uint256("42").is_ok());
        assert_eq!(validate_uint256("-2").unwrap_err().code(), ValidationError::OVERFLOW);
        assert_eq!(validate_uint256("4.2").unwrap_err().code(), ValidationError::INVALID);
    }
}
