//! Fixed-length 32-byte hash codec.

use crate::{BytesLike, CodecResult, StorageCodec};
use alloy::primitives::{B256, hex};
use core::fmt;

/// Length of a hash in bytes.
pub const HASH_LEN: usize = 32;

/// A 32-byte hash in canonical form.
///
/// Displays as lowercase `0x`-prefixed hex, 66 characters long. Equality is
/// byte equality, regardless of the form the hash was supplied in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct HashHex(B256);

impl HashHex {
    /// Wrap a hash.
    pub const fn new(hash: B256) -> Self {
        Self(hash)
    }

    /// Returns the underlying hash.
    pub const fn hash(&self) -> B256 {
        self.0
    }

    /// Returns the raw bytes.
    pub const fn as_bytes(&self) -> &[u8; HASH_LEN] {
        &self.0.0
    }
}

impl fmt::Display for HashHex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&hex::encode_prefixed(self.0))
    }
}

impl From<B256> for HashHex {
    fn from(hash: B256) -> Self {
        Self(hash)
    }
}

impl From<HashHex> for B256 {
    fn from(hash: HashHex) -> Self {
        hash.0
    }
}

/// Codec for 32-byte hashes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HashCodec;

impl HashCodec {
    /// Normalize raw bytes or hex text to the canonical hash.
    ///
    /// # Errors
    ///
    /// - [`CodecError::InvalidHex`] if text input is not valid hex.
    /// - [`CodecError::InvalidLength`] if the input is not exactly 32 bytes.
    ///
    /// [`CodecError::InvalidHex`]: crate::CodecError::InvalidHex
    /// [`CodecError::InvalidLength`]: crate::CodecError::InvalidLength
    pub fn normalize(input: impl Into<BytesLike>) -> CodecResult<HashHex> {
        input.into().to_fixed::<HASH_LEN>().map(HashHex)
    }

    /// Normalize an optional input, passing `None` through.
    pub fn maybe_normalize<T>(input: Option<T>) -> CodecResult<Option<HashHex>>
    where
        T: Into<BytesLike>,
    {
        input.map(Self::normalize).transpose()
    }

    /// True iff `value` decodes to exactly 32 bytes.
    pub fn validate(value: &str) -> bool {
        Self::normalize(value).is_ok()
    }
}

impl StorageCodec for HashCodec {
    type Input = BytesLike;
    type Value = HashHex;
    type Stored = B256;

    fn to_storage(&self, input: BytesLike) -> CodecResult<B256> {
        Self::normalize(input).map(|hash| hash.hash())
    }

    fn from_storage(&self, raw: B256) -> CodecResult<HashHex> {
        Ok(HashHex(raw))
    }

    fn validate(&self, external: &str) -> bool {
        Self::normalize(external).is_ok()
    }
}
