//! Error types for metadata encoding.

use thiserror::Error;

/// Error during JSON encoding.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EncodeError {
    /// An attribute was encoded without a trait_type set.
    ///
    /// The factory constructors always store a trait_type, so only the
    /// zero-value `Attribute` can reach this. The invalid attribute
    /// must be rebuilt through a factory; the error is not retryable.
    #[error("attribute ({value_kind} value) has no trait_type set")]
    TraitTypeMissing {
        /// Kind of the offending attribute's value, or `"none"` when
        /// no value is set either.
        value_kind: &'static str,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_message_names_value_kind() {
        let error = EncodeError::TraitTypeMissing { value_kind: "uint64" };
        assert_eq!(
            error.to_string(),
            "attribute (uint64 value) has no trait_type set"
        );
    }
}
