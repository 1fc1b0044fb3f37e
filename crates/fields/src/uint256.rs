//! Decimal column for uint256 values.

use crate::{Field, FieldResult, validators::uint256_error};
use alloy::primitives::U256;
use eth_codecs::{DECIMAL_PLACES, IntegerLike, MAX_DIGITS, Uint256Codec};

/// uint256 stored as a decimal with no fractional digits.
///
/// The column holds [`MAX_DIGITS`] digits, but values are range-checked
/// against `2**256 - 1`, so the extra digit is never used.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Uint256Field;

impl Uint256Field {
    /// Column precision in decimal digits.
    pub const MAX_DIGITS: usize = MAX_DIGITS;

    /// Column scale.
    pub const DECIMAL_PLACES: usize = DECIMAL_PLACES;
}

impl Field for Uint256Field {
    type Input = IntegerLike;
    type Value = U256;
    type Column = String;

    fn to_db(&self, value: Option<IntegerLike>) -> FieldResult<Option<String>> {
        value
            .map(|input| {
                let raw = input.to_string();
                Uint256Codec::encode(input).map_err(|err| uint256_error(&raw, err).rejected())
            })
            .transpose()
    }

    fn from_db(&self, raw: Option<String>) -> FieldResult<Option<U256>> {
        raw.map(|stored| {
            Uint256Codec::decode(&stored).map_err(|err| uint256_error(&stored, err).rejected())
        })
        .transpose()
    }

    fn clean(&self, value: Option<IntegerLike>) -> FieldResult<Option<U256>> {
        value
            .map(|input| {
                input.to_u256().map_err(|err| uint256_error(&input.to_string(), err).rejected())
            })
            .transpose()
    }
}
