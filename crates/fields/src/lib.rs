//! Column adapters and form validators for Ethereum primitives.
//!
//! This crate is the boundary between a storage layer and the
//! [`eth_codecs`] codecs. Each [`Field`] describes one column kind and
//! converts values on the way in ([`Field::to_db`]), on the way out
//! ([`Field::from_db`]), and for form input ([`Field::clean`]). Failures are
//! reported as [`ValidationError`]s carrying user-facing messages.
//!
//! # Fields
//!
//! | Field | Value | Column |
//! |-------|-------|--------|
//! | [`AddressField`] | checksummed address | 42-char text |
//! | [`AddressBinaryField`] | checksummed address | 20 bytes |
//! | [`Keccak256Field`] | 32-byte hash | 32 bytes |
//! | [`Sha3HashField`] | 32-byte hash | 64-char hex text |
//! | [`HexField`] | hex blob | hex text |
//! | [`Uint256Field`] | uint256 | 79-digit decimal |
//!
//! Store-specific behaviour is passed in explicitly through
//! [`FieldConfig`]; see the [`config`] module.

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
pub use address::{AddressBinaryField, AddressField};

mod blob;
pub use blob::HexField;

pub mod config;
pub use config::{ConfigError, FieldConfig};

mod error;
pub use error::{FieldResult, ValidationError};

mod field;
pub use field::Field;

mod hash;
pub use hash::{Keccak256Field, Sha3HashField};

mod uint256;
pub use uint256::Uint256Field;

pub mod validators;
