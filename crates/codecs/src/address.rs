//! EIP-55 checksummed address codec.
//!
//! Addresses are stored as their 20 raw bytes and presented as the EIP-55
//! mixed-case hex string. The checksum sets the case of each hex letter from
//! the keccak-256 hash of the lowercase hex digits, so the capitalization of
//! a valid external form is fully determined by its bytes.

use crate::{BytesLike, CodecError, CodecResult, StorageCodec, bytes_like::strip_hex_prefix};
use alloy::primitives::{Address, address};
use core::fmt;

/// Length of an address in bytes.
pub const ADDRESS_LEN: usize = 20;

/// The all-zero address.
pub const NULL_ADDRESS: Address = Address::ZERO;

/// Placeholder address with application-level meaning.
///
/// Structurally an ordinary address; the codecs do not treat it specially.
pub const SENTINEL_ADDRESS: Address = address!("0x0000000000000000000000000000000000000001");

/// An address in canonical form.
///
/// Displays as the `0x`-prefixed EIP-55 checksummed string, 42 characters
/// long.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ChecksummedAddress(Address);

impl ChecksummedAddress {
    /// Wrap an address.
    pub const fn new(address: Address) -> Self {
        Self(address)
    }

    /// Returns the underlying address.
    pub const fn address(&self) -> Address {
        self.0
    }

    /// Returns the EIP-55 checksummed string.
    pub fn to_checksum(&self) -> String {
        self.0.to_checksum(None)
    }
}

impl fmt::Display for ChecksummedAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_checksum())
    }
}

impl From<Address> for ChecksummedAddress {
    fn from(address: Address) -> Self {
        Self(address)
    }
}

impl From<ChecksummedAddress> for Address {
    fn from(address: ChecksummedAddress) -> Self {
        address.0
    }
}

/// Codec for 20-byte addresses.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AddressCodec;

impl AddressCodec {
    /// Normalize raw bytes or hex text of any case to the canonical address.
    ///
    /// Capitalization of hex input is ignored; use
    /// [`AddressCodec::parse_checksummed`] to enforce it.
    ///
    /// # Errors
    ///
    /// - [`CodecError::InvalidHex`] if text input is not valid hex.
    /// - [`CodecError::InvalidLength`] if the input is not exactly 20 bytes.
    pub fn normalize(input: impl Into<BytesLike>) -> CodecResult<ChecksummedAddress> {
        input.into().to_fixed::<ADDRESS_LEN>().map(|bytes| ChecksummedAddress(Address::from(bytes)))
    }

    /// Normalize an optional input, passing `None` through.
    pub fn maybe_normalize<T>(input: Option<T>) -> CodecResult<Option<ChecksummedAddress>>
    where
        T: Into<BytesLike>,
    {
        input.map(Self::normalize).transpose()
    }

    /// Strictly parse an external address, enforcing the EIP-55 case pattern.
    ///
    /// The `0x` prefix is optional.
    ///
    /// # Errors
    ///
    /// Fails as [`AddressCodec::normalize`] does, and additionally with
    /// [`CodecError::InvalidChecksum`] if the capitalization is wrong.
    pub fn parse_checksummed(value: &str) -> CodecResult<ChecksummedAddress> {
        let address = Self::normalize(value)?;
        let checksum = address.to_checksum();
        if strip_hex_prefix(&checksum) != strip_hex_prefix(value) {
            return Err(CodecError::InvalidChecksum { value: value.to_owned() });
        }
        Ok(address)
    }

    /// True iff `value` is 40 hex digits whose case matches the EIP-55
    /// checksum.
    pub fn validate(value: &str) -> bool {
        Self::parse_checksummed(value).is_ok()
    }
}

impl StorageCodec for AddressCodec {
    type Input = BytesLike;
    type Value = ChecksummedAddress;
    type Stored = Address;

    fn to_storage(&self, input: BytesLike) -> CodecResult<Address> {
        Self::normalize(input).map(|address| address.address())
    }

    fn from_storage(&self, raw: Address) -> CodecResult<ChecksummedAddress> {
        Ok(ChecksummedAddress(raw))
    }

    fn validate(&self, external: &str) -> bool {
        Self::parse_checksummed(external).is_ok()
    }
}
