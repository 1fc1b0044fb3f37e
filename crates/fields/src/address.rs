//! Address columns, as checksummed text or as raw bytes.

use crate::{Field, FieldResult, ValidationError, field::is_empty};
use alloy::primitives::Bytes;
use eth_codecs::{ADDRESS_LEN, AddressCodec, BytesLike, ChecksummedAddress};

/// Normalize a non-empty input, mapping failures to the address message.
fn normalize(value: Option<BytesLike>) -> FieldResult<Option<ChecksummedAddress>> {
    let Some(input) = value.filter(|input| !is_empty(input)) else {
        return Ok(None);
    };
    let raw = input.to_string();
    AddressCodec::normalize(input)
        .map(Some)
        .map_err(|err| ValidationError::invalid_address(&raw).with_source(err).rejected())
}

/// Address stored as its 42-character EIP-55 text.
///
/// Empty input is treated as absent.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AddressField;

impl AddressField {
    /// Column length in characters.
    pub const MAX_LENGTH: usize = 2 + ADDRESS_LEN * 2;
}

impl Field for AddressField {
    type Input = BytesLike;
    type Value = ChecksummedAddress;
    type Column = String;

    fn to_db(&self, value: Option<BytesLike>) -> FieldResult<Option<String>> {
        normalize(value).map(|address| address.map(|address| address.to_checksum()))
    }

    fn from_db(&self, raw: Option<String>) -> FieldResult<Option<ChecksummedAddress>> {
        normalize(raw.map(BytesLike::from))
    }

    fn clean(&self, value: Option<BytesLike>) -> FieldResult<Option<ChecksummedAddress>> {
        normalize(value)
    }
}

/// Address stored as its 20 raw bytes.
///
/// An empty column reads back as absent.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AddressBinaryField;

impl AddressBinaryField {
    /// Column length in bytes.
    pub const MAX_LENGTH: usize = ADDRESS_LEN;
}

impl Field for AddressBinaryField {
    type Input = BytesLike;
    type Value = ChecksummedAddress;
    type Column = Bytes;

    fn to_db(&self, value: Option<BytesLike>) -> FieldResult<Option<Bytes>> {
        normalize(value).map(|address| {
            address.map(|address| Bytes::copy_from_slice(address.address().as_slice()))
        })
    }

    fn from_db(&self, raw: Option<Bytes>) -> FieldResult<Option<ChecksummedAddress>> {
        normalize(raw.map(BytesLike::from))
    }

    fn clean(&self, value: Option<BytesLike>) -> FieldResult<Option<ChecksummedAddress>> {
        normalize(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use eth_codecs::{NULL_ADDRESS, SENTINEL_ADDRESS};

    const CHECKSUMMED: &str = "0xfB6916095ca1df60bB79Ce92cE3Ea74c37c5d359";

    #[test]
    fn text_column_roundtrip() {
        let field = AddressField;
        let stored = field.to_db(Some(CHECKSUMMED.to_lowercase().into())).unwrap().unwrap();
        assert_eq!(stored, CHECKSUMMED);
        assert_eq!(stored.len(), AddressField::MAX_LENGTH);
        assert_eq!(field.from_db(Some(stored)).unwrap().unwrap().to_string(), CHECKSUMMED);
    }

    #[test]
    fn binary_column_roundtrip() {
        let field = AddressBinaryField;
        let stored = field.to_db(Some(CHECKSUMMED.into())).unwrap().unwrap();
        assert_eq!(stored.len(), AddressBinaryField::MAX_LENGTH);
        assert_eq!(field.from_db(Some(stored)).unwrap().unwrap().to_string(), CHECKSUMMED);
    }

    #[test]
    fn absent_and_empty() {
        assert_eq!(AddressField.to_db(None), Ok(None));
        assert_eq!(AddressField.to_db(Some("".into())), Ok(None));
        assert_eq!(AddressField.from_db(None), Ok(None));
        assert_eq!(AddressBinaryField.from_db(Some(Bytes::new())), Ok(None));
        assert_eq!(AddressBinaryField.from_db(None), Ok(None));
    }

    #[test]
    fn reserved_addresses_store() {
        for address in [NULL_ADDRESS, SENTINEL_ADDRESS] {
            let stored = AddressBinaryField.to_db(Some(address.into())).unwrap();
            let read = AddressBinaryField.from_db(stored).unwrap().unwrap();
            assert_eq!(read.address(), address);
        }
    }

    #[test]
    fn short_address_message() {
        let err = AddressField.to_db(Some("0x23".into())).unwrap_err();
        assert_eq!(err.to_string(), r#""0x23" value must be an EIP55 checksummed address."#);

        let err = AddressBinaryField.clean(Some("0x23".into())).unwrap_err();
        assert_eq!(err.code(), ValidationError::INVALID);
    }

    #[test]
    fn truncated_binary_column_is_rejected() {
        let err = AddressBinaryField.from_db(Some(Bytes::from_static(&[1, 2, 3]))).unwrap_err();
        assert_eq!(err.to_string(), r#""0x010203" value must be an EIP55 checksummed address."#);
    }
}
