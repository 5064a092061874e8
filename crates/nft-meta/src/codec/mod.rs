//! JSON encoding for NFT metadata.
//!
//! The encoder is hand-built: member order is fixed, unset fields are
//! omitted entirely, and numeric values keep their exact digits.

pub mod attribute;
pub mod metadata;
pub mod primitives;
pub mod value;

pub use attribute::encode_attribute;
pub use metadata::encode_metadata;
pub use primitives::JsonWriter;
pub use value::write_value;
