//! 32-byte hash columns, as raw bytes or as hex text.

use crate::{Field, FieldConfig, FieldResult, HexField, field::is_empty, validators::hash_error};
use alloy::primitives::Bytes;
use eth_codecs::{BytesLike, HASH_LEN, HashCodec, HashHex, HexBlob, HexCodec};

/// Keccak-256 hash stored as its 32 raw bytes.
///
/// Empty input is treated as absent, as is an empty column.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Keccak256Field;

impl Keccak256Field {
    /// Column length in bytes.
    pub const MAX_LENGTH: usize = HASH_LEN;

    fn normalize(value: Option<BytesLike>) -> FieldResult<Option<HashHex>> {
        let Some(input) = value.filter(|input| !is_empty(input)) else {
            return Ok(None);
        };
        let raw = input.to_string();
        HashCodec::normalize(input).map(Some).map_err(|err| hash_error(&raw, err).rejected())
    }
}

impl Field for Keccak256Field {
    type Input = BytesLike;
    type Value = HashHex;
    type Column = Bytes;

    fn to_db(&self, value: Option<BytesLike>) -> FieldResult<Option<Bytes>> {
        Self::normalize(value).map(|hash| hash.map(|hash| Bytes::copy_from_slice(hash.as_bytes())))
    }

    fn from_db(&self, raw: Option<Bytes>) -> FieldResult<Option<HashHex>> {
        Self::normalize(raw.map(BytesLike::from))
    }

    fn clean(&self, value: Option<BytesLike>) -> FieldResult<Option<HashHex>> {
        Self::normalize(value)
    }
}

/// SHA3 hash stored as 64 hex digits without prefix.
///
/// A [`HexField`] fixed at 32 bytes: reads back as `0x`-prefixed hex, and both
/// directions enforce the exact length.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Sha3HashField {
    inner: HexField,
}

impl Default for Sha3HashField {
    fn default() -> Self {
        Self::new()
    }
}

impl Sha3HashField {
    /// Column length in hex digits.
    pub const MAX_LENGTH: usize = HASH_LEN * 2;

    /// Create a non-nullable field.
    pub const fn new() -> Self {
        Self { inner: HexField::new(Some(Self::MAX_LENGTH)) }
    }

    /// Allow absent values in the column.
    pub const fn nullable(self) -> Self {
        Self { inner: self.inner.nullable() }
    }

    /// Maximum length of form input, which may carry a `0x` prefix.
    pub const fn form_max_length(&self) -> usize {
        Self::MAX_LENGTH + 2
    }

    /// Clean raw form input.
    ///
    /// Empty input on a nullable field means absent, unless the store already
    /// turns empty strings into `NULL`.
    pub fn clean_form(&self, raw: &str, config: &FieldConfig) -> FieldResult<Option<HexBlob>> {
        if raw.is_empty() && self.inner.empty_means_absent(config) {
            return Ok(None);
        }
        self.clean(Some(raw.into()))
    }

    fn stored(input: BytesLike) -> FieldResult<String> {
        let raw = input.to_string();
        let stored = HexCodec::to_stored(input).map_err(|err| hash_error(&raw, err).rejected())?;
        HexCodec::validate_bounded(&raw, HASH_LEN)
            .map_err(|err| hash_error(&raw, err).rejected())?;
        Ok(stored)
    }
}

impl Field for Sha3HashField {
    type Input = BytesLike;
    type Value = HexBlob;
    type Column = String;

    fn to_db(&self, value: Option<BytesLike>) -> FieldResult<Option<String>> {
        value.map(Self::stored).transpose()
    }

    fn from_db(&self, raw: Option<String>) -> FieldResult<Option<HexBlob>> {
        self.clean(raw.map(BytesLike::from))
    }

    fn clean(&self, value: Option<BytesLike>) -> FieldResult<Option<HexBlob>> {
        let Some(stored) = self.to_db(value)? else {
            return Ok(None);
        };
        self.inner.from_db(Some(stored))
    }
}
