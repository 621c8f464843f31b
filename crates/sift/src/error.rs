//! Error types for the sift crate.
//!
//! Evaluating a predicate or filtering a collection never fails. Errors only
//! arise when a predicate is built from untyped input (field names and values
//! given as strings) that does not fit the item's schema.

use thiserror::Error;

/// Errors that can occur when building predicates from untyped input.
///
/// Every variant is a schema mismatch: the input names a field the item type
/// does not have, or a value that field cannot hold.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SiftError {
    /// The item type has no field with this name.
    #[error("schema mismatch: {type_name} has no field '{field}'")]
    UnknownField {
        type_name: &'static str,
        field: String,
    },

    /// The value cannot be parsed into the field's type.
    #[error("schema mismatch: '{value}' is not a valid {field}")]
    InvalidValue { field: &'static str, value: String },

    /// A condition string was not of the form `field=value`.
    #[error("malformed condition '{0}': expected field=value")]
    MalformedCondition(String),
}

/// Result type for sift operations.
pub type Result<T> = std::result::Result<T, SiftError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_messages() {
        let err = SiftError::UnknownField {
            type_name: "Product",
            field: "weight".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "schema mismatch: Product has no field 'weight'"
        );

        let err = SiftError::InvalidValue {
            field: "color",
            value: "purple".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "schema mismatch: 'purple' is not a valid color"
        );

        let err = SiftError::MalformedCondition("color".to_string());
        assert_eq!(
            err.to_string(),
            "malformed condition 'color': expected field=value"
        );
    }
}
