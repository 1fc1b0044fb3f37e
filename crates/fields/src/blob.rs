//! Hex text column for variable-length blobs.

use crate::{Field, FieldConfig, FieldResult, ValidationError};
use eth_codecs::{BytesLike, HexBlob, HexCodec};

/// Blob stored as lowercase hex text without prefix.
///
/// Reads back as `0x`-prefixed hex. Unlike the fixed-size fields, empty input
/// is a valid empty blob, not an absent value.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HexField {
    max_length: Option<usize>,
    null: bool,
}

impl HexField {
    /// Create a non-nullable field, optionally bounded to `max_length` hex
    /// digits.
    pub const fn new(max_length: Option<usize>) -> Self {
        Self { max_length, null: false }
    }

    /// Allow absent values in the column.
    pub const fn nullable(mut self) -> Self {
        self.null = true;
        self
    }

    /// Column length in hex digits, if bounded.
    pub const fn max_length(&self) -> Option<usize> {
        self.max_length
    }

    /// Maximum length of form input, which may carry a `0x` prefix.
    pub const fn form_max_length(&self) -> Option<usize> {
        match self.max_length {
            Some(max) => Some(max + 2),
            None => None,
        }
    }

    /// Whether empty form input should be read as absent.
    ///
    /// Only nullable fields on stores that keep `''` distinct from `NULL` need
    /// the conversion; other stores do it themselves.
    pub const fn empty_means_absent(&self, config: &FieldConfig) -> bool {
        self.null && !config.interprets_empty_strings_as_nulls()
    }

    /// Clean raw form input.
    pub fn clean_form(&self, raw: &str, config: &FieldConfig) -> FieldResult<Option<HexBlob>> {
        if raw.is_empty() && self.empty_means_absent(config) {
            return Ok(None);
        }
        self.clean(Some(raw.into()))
    }

    fn stored(&self, input: BytesLike) -> FieldResult<String> {
        let raw = input.to_string();
        let stored = HexCodec::to_stored(input)
            .map_err(|err| ValidationError::invalid_hex(&raw).with_source(err).rejected())?;
        match self.max_length {
            Some(max) if stored.len() > max => {
                Err(ValidationError::max_length(max, stored.len()).rejected())
            }
            _ => Ok(stored),
        }
    }
}

impl Field for HexField {
    type Input = BytesLike;
    type Value = HexBlob;
    type Column = String;

    fn to_db(&self, value: Option<BytesLike>) -> FieldResult<Option<String>> {
        value.map(|input| self.stored(input)).transpose()
    }

    fn from_db(&self, raw: Option<String>) -> FieldResult<Option<HexBlob>> {
        raw.map(|stored| {
            HexCodec::display(&stored)
                .map_err(|err| ValidationError::invalid_hex(&stored).with_source(err).rejected())
        })
        .transpose()
    }

    fn clean(&self, value: Option<BytesLike>) -> FieldResult<Option<HexBlob>> {
        let stored = self.to_db(value)?;
        self.from_db(stored)
    }
}
