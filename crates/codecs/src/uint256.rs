//! Unsigned 256-bit integer codec.
//!
//! Values are stored as plain decimal text. The column is sized for
//! [`MAX_DIGITS`] digits, one more than `2**256` needs, but the range check is
//! semantic: anything outside `[0, 2**256 - 1]` is rejected even if it would
//! fit in the column.

use crate::{CodecError, CodecResult, StorageCodec};
use alloy::primitives::U256;
use core::fmt;

/// Decimal digit capacity of the storage column.
pub const MAX_DIGITS: usize = 79;

/// Fractional digits of the storage column.
pub const DECIMAL_PLACES: usize = 0;

/// An integer as supplied by a caller.
///
/// [`IntegerLike::Decimal`] carries arbitrary-precision text and may hold
/// values that are negative or exceed 256 bits; those are rejected when
/// converted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IntegerLike {
    /// An in-range unsigned value.
    Native(U256),
    /// A signed machine integer.
    Int(i128),
    /// Base-10 text, optionally with a leading `-`.
    Decimal(String),
}

impl IntegerLike {
    /// Convert to a `U256`.
    ///
    /// # Errors
    ///
    /// - [`CodecError::Overflow`] if the value is negative or exceeds
    ///   `2**256 - 1`.
    /// - [`CodecError::InvalidDecimal`] if decimal text is malformed.
    pub fn to_u256(&self) -> CodecResult<U256> {
        match self {
            Self::Native(value) => Ok(*value),
            Self::Int(value) => u128::try_from(*value)
                .map(U256::from)
                .map_err(|_| CodecError::overflow(value.to_string())),
            Self::Decimal(text) => parse_decimal(text),
        }
    }
}

impl fmt::Display for IntegerLike {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Native(value) => write!(f, "{value}"),
            Self::Int(value) => write!(f, "{value}"),
            Self::Decimal(text) => f.write_str(text),
        }
    }
}

impl From<U256> for IntegerLike {
    fn from(value: U256) -> Self {
        Self::Native(value)
    }
}

macro_rules! integer_like_from_int {
    ($($ty:ty),* $(,)?) => {
        $(
            impl From<$ty> for IntegerLike {
                fn from(value: $ty) -> Self {
                    Self::Int(value.into())
                }
            }
        )*
    };
}

integer_like_from_int!(u8, u16, u32, u64, i8, i16, i32, i64, i128);

impl From<u128> for IntegerLike {
    fn from(value: u128) -> Self {
        Self::Native(U256::from(value))
    }
}

impl From<String> for IntegerLike {
    fn from(text: String) -> Self {
        Self::Decimal(text)
    }
}

impl From<&str> for IntegerLike {
    fn from(text: &str) -> Self {
        Self::Decimal(text.to_owned())
    }
}

/// Parse base-10 text into a `U256`.
///
/// A leading `-` is accepted only to report negative values as overflow; `-0`
/// parses as zero.
fn parse_decimal(text: &str) -> CodecResult<U256> {
    let (negative, digits) = match text.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, text),
    };
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(CodecError::InvalidDecimal { value: text.to_owned() });
    }
    if negative && digits.bytes().any(|b| b != b'0') {
        return Err(CodecError::overflow(text));
    }
    // Digits are validated above, so the only possible failure is overflow.
    U256::from_str_radix(digits, 10).map_err(|_| CodecError::overflow(text))
}

/// Codec for unsigned 256-bit integers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Uint256Codec;

impl Uint256Codec {
    /// Encode an integer as decimal text for storage.
    ///
    /// # Errors
    ///
    /// Returns [`CodecError::Overflow`] if the value lies outside
    /// `[0, 2**256 - 1]`, or [`CodecError::InvalidDecimal`] for malformed
    /// text.
    pub fn encode(value: impl Into<IntegerLike>) -> CodecResult<String> {
        value.into().to_u256().map(|value| value.to_string())
    }

    /// Encode an optional integer, passing `None` through.
    pub fn maybe_encode<T>(value: Option<T>) -> CodecResult<Option<String>>
    where
        T: Into<IntegerLike>,
    {
        value.map(Self::encode).transpose()
    }

    /// Decode stored decimal text.
    ///
    /// # Errors
    ///
    /// Returns [`CodecError::InvalidDecimal`] if the text is not a plain
    /// base-10 integer, or [`CodecError::Overflow`] if it is out of range.
    pub fn decode(stored: &str) -> CodecResult<U256> {
        parse_decimal(stored)
    }

    /// Decode optional stored text, passing `None` through.
    pub fn maybe_decode(stored: Option<&str>) -> CodecResult<Option<U256>> {
        stored.map(Self::decode).transpose()
    }

    /// True iff `value` is decimal text in `[0, 2**256 - 1]`.
    pub fn validate(value: &str) -> bool {
        parse_decimal(value).is_ok()
    }
}

impl StorageCodec for Uint256Codec {
    type Input = IntegerLike;
    type Value = U256;
    type Stored = String;

    fn to_storage(&self, input: IntegerLike) -> CodecResult<String> {
        Self::encode(input)
    }

    fn from_storage(&self, raw: String) -> CodecResult<U256> {
        Self::decode(&raw)
    }

    fn validate(&self, external: &str) -> bool {
        parse_decimal(external).is_ok()
    }
}
