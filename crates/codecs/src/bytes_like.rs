//! Multi-form byte input shared by the fixed-size codecs.

use crate::{CodecError, CodecResult};
use alloy::primitives::{Address, Bytes, FixedBytes, hex};
use core::fmt;

/// A byte value as supplied by a caller: either raw bytes or hex text.
///
/// Hex text may carry a `0x`/`0X` prefix and may use any letter case. All
/// codecs normalize through [`BytesLike::to_bytes`] before comparing or
/// storing, so equality between inputs is always byte equality.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BytesLike {
    /// Raw bytes.
    Raw(Bytes),
    /// Hexadecimal text, with or without prefix.
    HexText(String),
}

impl BytesLike {
    /// Decode to raw bytes.
    ///
    /// # Errors
    ///
    /// Returns [`CodecError::InvalidHex`] if hex text contains non-hex
    /// characters or an odd number of digits.
    pub fn to_bytes(&self) -> CodecResult<Bytes> {
        match self {
            Self::Raw(bytes) => Ok(bytes.clone()),
            Self::HexText(text) => decode_hex(text).map(Bytes::from),
        }
    }

    /// Decode to exactly `N` bytes.
    ///
    /// # Errors
    ///
    /// Returns [`CodecError::InvalidHex`] for undecodable text, and
    /// [`CodecError::InvalidLength`] if the decoded length is not `N`.
    pub fn to_fixed<const N: usize>(&self) -> CodecResult<FixedBytes<N>> {
        let bytes = self.to_bytes()?;
        if bytes.len() != N {
            return Err(CodecError::invalid_length(self.to_string(), N, bytes.len()));
        }
        Ok(FixedBytes::from_slice(&bytes))
    }
}

impl fmt::Display for BytesLike {
    /// Renders the value as it was supplied: hex text verbatim, raw bytes as
    /// `0x`-prefixed hex.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Raw(bytes) => f.write_str(&hex::encode_prefixed(bytes)),
            Self::HexText(text) => f.write_str(text),
        }
    }
}

impl From<Bytes> for BytesLike {
    fn from(bytes: Bytes) -> Self {
        Self::Raw(bytes)
    }
}

impl From<Vec<u8>> for BytesLike {
    fn from(bytes: Vec<u8>) -> Self {
        Self::Raw(bytes.into())
    }
}

impl From<&[u8]> for BytesLike {
    fn from(bytes: &[u8]) -> Self {
        Self::Raw(Bytes::copy_from_slice(bytes))
    }
}

impl<const N: usize> From<[u8; N]> for BytesLike {
    fn from(bytes: [u8; N]) -> Self {
        Self::Raw(Bytes::copy_from_slice(&bytes))
    }
}

impl<const N: usize> From<FixedBytes<N>> for BytesLike {
    fn from(bytes: FixedBytes<N>) -> Self {
        Self::Raw(Bytes::copy_from_slice(bytes.as_slice()))
    }
}

impl From<Address> for BytesLike {
    fn from(address: Address) -> Self {
        Self::Raw(Bytes::copy_from_slice(address.as_slice()))
    }
}

impl From<String> for BytesLike {
    fn from(text: String) -> Self {
        Self::HexText(text)
    }
}

impl From<&str> for BytesLike {
    fn from(text: &str) -> Self {
        Self::HexText(text.to_owned())
    }
}

/// Strip a leading `0x` or `0X`, if present.
pub fn strip_hex_prefix(text: &str) -> &str {
    text.strip_prefix("0x").or_else(|| text.strip_prefix("0X")).unwrap_or(text)
}

/// Decode hex text with an optional `0x`/`0X` prefix.
///
/// Exactly one prefix is accepted, and the digit count must be even.
///
/// # Errors
///
/// Returns [`CodecError::InvalidHex`] carrying `text` on failure.
pub fn decode_hex(text: &str) -> CodecResult<Vec<u8>> {
    let digits = strip_hex_prefix(text);
    if digits.len() % 2 != 0 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(CodecError::invalid_hex(text));
    }
    hex::decode(digits).map_err(|_| CodecError::invalid_hex(text))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strip_prefix_variants() {
        assert_eq!(strip_hex_prefix("0xab"), "ab");
        assert_eq!(strip_hex_prefix("0Xab"), "ab");
        assert_eq!(strip_hex_prefix("ab"), "ab");
        assert_eq!(strip_hex_prefix("0x"), "");
    }

    #[test]
    fn decode_hex_accepts_any_case() {
        assert_eq!(decode_hex("0xDeAdBeEf").unwrap(), vec![0xde, 0xad, 0xbe, 0xef]);
        assert_eq!(decode_hex("deadbeef").unwrap(), vec![0xde, 0xad, 0xbe, 0xef]);
        assert_eq!(decode_hex("").unwrap(), Vec::<u8>::new());
    }

    #[test]
    fn decode_hex_rejects_malformed() {
        assert_eq!(decode_hex("0x123"), Err(CodecError::invalid_hex("0x123")));
        assert_eq!(decode_hex("0xzz"), Err(CodecError::invalid_hex("0xzz")));
        assert_eq!(decode_hex("0x0x12"), Err(CodecError::invalid_hex("0x0x12")));
        assert_eq!(decode_hex(" 12"), Err(CodecError::invalid_hex(" 12")));
    }

    #[test]
    fn to_fixed_checks_length() {
        let short = BytesLike::from("0x23");
        assert_eq!(short.to_fixed::<20>(), Err(CodecError::invalid_length("0x23", 20, 1)));

        let raw = BytesLike::from([7u8; 20]);
        assert_eq!(raw.to_fixed::<20>().unwrap(), FixedBytes::<20>::from([7u8; 20]));
    }

    #[test]
    fn raw_display_is_prefixed_hex() {
        assert_eq!(BytesLike::from(vec![0xabu8, 0xcd]).to_string(), "0xabcd");
        assert_eq!(BytesLike::from("ABCD").to_string(), "ABCD");
    }
}
