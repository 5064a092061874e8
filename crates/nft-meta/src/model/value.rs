//! Value types for metadata attributes.
//!
//! Values are typed trait instances carried by attributes.

use bigdecimal::BigDecimal;
use num_bigint::BigInt;

/// Value kinds an attribute can carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueKind {
    String,
    Int64,
    Uint64,
    BigInt,
    Decimal,
}

impl ValueKind {
    /// Returns the kind's name, used for error context.
    pub fn name(&self) -> &'static str {
        match self {
            ValueKind::String => "string",
            ValueKind::Int64 => "int64",
            ValueKind::Uint64 => "uint64",
            ValueKind::BigInt => "bigint",
            ValueKind::Decimal => "decimal",
        }
    }
}

/// A typed value carried by an attribute.
///
/// The set of kinds is closed. The arbitrary-precision kinds exist so
/// that large integers and exact decimals keep every digit through
/// encoding instead of being rounded through f64.
#[derive(Debug, Clone, PartialEq)]
pub enum AttributeValue {
    /// UTF-8 text.
    String(String),

    /// 64-bit signed integer.
    Int64(i64),

    /// 64-bit unsigned integer.
    Uint64(u64),

    /// Arbitrary-precision signed integer.
    BigInt(BigInt),

    /// Arbitrary-precision decimal.
    Decimal(BigDecimal),
}

impl AttributeValue {
    /// Returns the kind of this value.
    pub fn kind(&self) -> ValueKind {
        match self {
            AttributeValue::String(_) => ValueKind::String,
            AttributeValue::Int64(_) => ValueKind::Int64,
            AttributeValue::Uint64(_) => ValueKind::Uint64,
            AttributeValue::BigInt(_) => ValueKind::BigInt,
            AttributeValue::Decimal(_) => ValueKind::Decimal,
        }
    }
}
