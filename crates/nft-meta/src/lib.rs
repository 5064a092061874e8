//! Byte-exact JSON encoding for NFT metadata documents.
//!
//! This crate builds the metadata JSON that NFT marketplaces and
//! wallets read: a document of optional top-level fields plus an
//! ordered `attributes` array of typed trait entries.
//!
//! # Overview
//!
//! The encoder is hand-built rather than derived because the output
//! shape is load-bearing:
//!
//! - **Order-exact**: members appear in a fixed declaration order
//! - **Omit-if-absent**: an unset field produces no output at all,
//!   which is distinct from a field set to the empty string
//! - **Lossless numbers**: arbitrary-precision integers and decimals
//!   keep every digit, unquoted, never in exponent notation
//!
//! # Quick Start
//!
//! ```rust
//! use nft_meta::{encode_metadata, Attribute, MetaData};
//!
//! let mut metadata = MetaData::new();
//! metadata.set_name("super-nft-0000001-holesky");
//! metadata.set_description("super-nft-token on holesky");
//! metadata.append_attribute(Attribute::string("Maturity", "2024-06-20T18:03:14.636Z"));
//!
//! let bytes = encode_metadata(&metadata).unwrap();
//! assert_eq!(
//!     std::str::from_utf8(&bytes).unwrap(),
//!     r#"{"description":"super-nft-token on holesky","name":"super-nft-0000001-holesky","attributes":[{"trait_type":"Maturity","value":"2024-06-20T18:03:14.636Z"}]}"#
//! );
//! ```
//!
//! # Modules
//!
//! - [`model`]: Core data types (MetaData, Attribute, AttributeValue)
//! - [`codec`]: JSON encoding
//! - [`error`]: Error types
//!
//! # Numbers
//!
//! Attribute values can be `i64`, `u64`, [`num_bigint::BigInt`], or
//! [`bigdecimal::BigDecimal`]. The big kinds serialize from their own
//! digits, so a 192-bit integer or an exact `1.4` survives encoding
//! byte-for-byte; decimals are written in fixed-point notation with
//! trailing zeros stripped.

pub mod codec;
pub mod error;
pub mod model;

// Re-export commonly used types at crate root
pub use codec::{encode_attribute, encode_metadata};
pub use error::EncodeError;
pub use model::{Attribute, AttributeValue, MetaData, MetaDataBuilder, ValueKind};

/// Crate version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
