//! Attribute entries for the metadata "attributes" array.

use bigdecimal::BigDecimal;
use num_bigint::BigInt;

use crate::model::AttributeValue;

/// One trait entry in the metadata "attributes" array.
///
/// Construct attributes through the factory functions; each stores a
/// trait_type and fixes the value kind for the lifetime of the entry.
/// The `typed_*` variants additionally carry a display_type hint for
/// marketplaces (e.g. `"boost_number"`).
///
/// The zero value (`Attribute::default()`) has no trait_type and
/// cannot be encoded.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Attribute {
    display_type: Option<String>,
    trait_type: Option<String>,
    value: Option<AttributeValue>,
}

impl Attribute {
    /// Creates a string attribute.
    pub fn string(trait_type: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            display_type: None,
            trait_type: Some(trait_type.into()),
            value: Some(AttributeValue::String(value.into())),
        }
    }

    /// Creates a string attribute with a display_type hint.
    pub fn typed_string(
        trait_type: impl Into<String>,
        value: impl Into<String>,
        display_type: impl Into<String>,
    ) -> Self {
        Self {
            display_type: Some(display_type.into()),
            trait_type: Some(trait_type.into()),
            value: Some(AttributeValue::String(value.into())),
        }
    }

    /// Creates a signed 64-bit integer attribute.
    pub fn int64(trait_type: impl Into<String>, value: i64) -> Self {
        Self {
            display_type: None,
            trait_type: Some(trait_type.into()),
            value: Some(AttributeValue::Int64(value)),
        }
    }

    /// Creates a signed 64-bit integer attribute with a display_type hint.
    pub fn typed_int64(
        trait_type: impl Into<String>,
        value: i64,
        display_type: impl Into<String>,
    ) -> Self {
        Self {
            display_type: Some(display_type.into()),
            trait_type: Some(trait_type.into()),
            value: Some(AttributeValue::Int64(value)),
        }
    }

    /// Creates an unsigned 64-bit integer attribute.
    pub fn uint64(trait_type: impl Into<String>, value: u64) -> Self {
        Self {
            display_type: None,
            trait_type: Some(trait_type.into()),
            value: Some(AttributeValue::Uint64(value)),
        }
    }

    /// Creates an unsigned 64-bit integer attribute with a display_type hint.
    pub fn typed_uint64(
        trait_type: impl Into<String>,
        value: u64,
        display_type: impl Into<String>,
    ) -> Self {
        Self {
            display_type: Some(display_type.into()),
            trait_type: Some(trait_type.into()),
            value: Some(AttributeValue::Uint64(value)),
        }
    }

    /// Creates an arbitrary-precision integer attribute.
    ///
    /// The value is moved into the attribute; nothing outside can
    /// mutate the stored digits afterwards.
    pub fn big_int(trait_type: impl Into<String>, value: BigInt) -> Self {
        Self {
            display_type: None,
            trait_type: Some(trait_type.into()),
            value: Some(AttributeValue::BigInt(value)),
        }
    }

    /// Creates an arbitrary-precision integer attribute with a display_type hint.
    pub fn typed_big_int(
        trait_type: impl Into<String>,
        value: BigInt,
        display_type: impl Into<String>,
    ) -> Self {
        Self {
            display_type: Some(display_type.into()),
            trait_type: Some(trait_type.into()),
            value: Some(AttributeValue::BigInt(value)),
        }
    }

    /// Creates an arbitrary-precision decimal attribute.
    ///
    /// The value is moved into the attribute; nothing outside can
    /// mutate the stored digits afterwards.
    pub fn decimal(trait_type: impl Into<String>, value: BigDecimal) -> Self {
        Self {
            display_type: None,
            trait_type: Some(trait_type.into()),
            value: Some(AttributeValue::Decimal(value)),
        }
    }

    /// Creates an arbitrary-precision decimal attribute with a display_type hint.
    pub fn typed_decimal(
        trait_type: impl Into<String>,
        value: BigDecimal,
        display_type: impl Into<String>,
    ) -> Self {
        Self {
            display_type: Some(display_type.into()),
            trait_type: Some(trait_type.into()),
            value: Some(AttributeValue::Decimal(value)),
        }
    }

    /// Returns the display_type hint, if set.
    pub fn display_type(&self) -> Option<&str> {
        self.display_type.as_deref()
    }

    /// Returns the trait_type, if set.
    pub fn trait_type(&self) -> Option<&str> {
        self.trait_type.as_deref()
    }

    /// Returns the value, if set.
    pub fn value(&self) -> Option<&AttributeValue> {
        self.value.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ValueKind;

    #[test]
    fn test_factories_store_trait_type() {
        let attributes = [
            Attribute::string("a", "x"),
            Attribute::int64("a", -1),
            Attribute::uint64("a", 1),
            Attribute::big_int("a", BigInt::from(2)),
            Attribute::decimal("a", BigDecimal::from(3)),
        ];
        for attribute in &attributes {
            assert_eq!(attribute.trait_type(), Some("a"));
            assert_eq!(attribute.display_type(), None);
            assert!(attribute.value().is_some());
        }
    }

    #[test]
    fn test_typed_factories_store_display_type() {
        let attributes = [
            Attribute::typed_string("a", "x", "d"),
            Attribute::typed_int64("a", -1, "d"),
            Attribute::typed_uint64("a", 1, "d"),
            Attribute::typed_big_int("a", BigInt::from(2), "d"),
            Attribute::typed_decimal("a", BigDecimal::from(3), "d"),
        ];
        for attribute in &attributes {
            assert_eq!(attribute.trait_type(), Some("a"));
            assert_eq!(attribute.display_type(), Some("d"));
        }
    }

    #[test]
    fn test_value_kind_fixed_at_construction() {
        assert_eq!(
            Attribute::uint64("Level", 5).value().map(AttributeValue::kind),
            Some(ValueKind::Uint64)
        );
        assert_eq!(
            Attribute::typed_decimal("Stamina", BigDecimal::from(1), "boost_number")
                .value()
                .map(AttributeValue::kind),
            Some(ValueKind::Decimal)
        );
    }

    #[test]
    fn test_zero_value_has_nothing_set() {
        let attribute = Attribute::default();
        assert_eq!(attribute.trait_type(), None);
        assert_eq!(attribute.display_type(), None);
        assert!(attribute.value().is_none());
    }

    #[test]
    fn test_stored_big_value_is_independent() {
        let mut source = BigInt::from(100);
        let attribute = Attribute::big_int("Max", source.clone());
        source += 1;
        assert_eq!(
            attribute.value(),
            Some(&AttributeValue::BigInt(BigInt::from(100)))
        );
    }
}
