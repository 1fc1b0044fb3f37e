//! Storage codecs for Ethereum primitives.
//!
//! This crate converts between the human-facing representations of Ethereum
//! primitives and their canonical storage forms. It holds no state and performs
//! no I/O; storage backends call into it before writing and after reading.
//!
//! # Codecs
//!
//! | Codec | External form | Stored form |
//! |-------|---------------|-------------|
//! | [`AddressCodec`] | EIP-55 checksummed `0x` hex | 20 raw bytes |
//! | [`HashCodec`] | lowercase `0x` hex, 64 digits | 32 raw bytes |
//! | [`HexCodec`] | `0x` hex | lowercase hex, no prefix |
//! | [`Uint256Codec`] | integer | base-10 text |
//!
//! Fixed-size codecs accept either raw bytes or hex text through
//! [`BytesLike`]; the integer codec accepts [`IntegerLike`]. Every codec
//! implements [`StorageCodec`], and absent values pass through the `maybe_*`
//! helpers as `None`.
//!
//! # Example
//!
//! ```rust
//! use eth_codecs::{AddressCodec, HashCodec, Uint256Codec};
//!
//! let address = AddressCodec::normalize("0x5aaeb6053f3e94c9b9a09f33669435e7ef1beaed").unwrap();
//! assert_eq!(address.to_string(), "0x5aAeb6053F3E94C9b9A09f33669435E7Ef1BeAed");
//! assert!(AddressCodec::validate("0x5aAeb6053F3E94C9b9A09f33669435E7Ef1BeAed"));
//!
//! assert!(HashCodec::normalize("0x1234").is_err());
//! assert!(Uint256Codec::encode(-2i64).is_err());
//! ```

#![warn(
    missing_copy_implementations,
    missing_debug_implementations,
    missing_docs,
    unreachable_pub,
    clippy::missing_const_for_fn,
    rustdoc::all
)]
#![cfg_attr(not(test), warn(unused_crate_dependencies))]
#![deny(unused_must_use, rust_2018_idioms)]
#![cfg_attr(docsrs, feature(doc_cfg))]

mod address;
pub use address::{ADDRESS_LEN, AddressCodec, ChecksummedAddress, NULL_ADDRESS, SENTINEL_ADDRESS};

mod blob;
pub use blob::{HexBlob, HexCodec};

mod bytes_like;
pub use bytes_like::{BytesLike, decode_hex, strip_hex_prefix};

mod error;
pub use error::{CodecError, CodecResult};

mod hash;
pub use hash::{HASH_LEN, HashCodec, HashHex};

mod traits;
pub use traits::StorageCodec;

mod uint256;
pub use uint256::{DECIMAL_PLACES, IntegerLike, MAX_DIGITS, Uint256Codec};
