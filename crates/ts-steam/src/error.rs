//! Steam table and state resolution errors.

use crate::property::PropertyId;
use thiserror::Error;

/// Result type for steam table lookups.
pub type TableResult<T> = Result<T, TableError>;

/// Errors produced by a property table backend.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum TableError {
    /// Input outside the table's validity range.
    #[error("Value out of range for {what}: {value}")]
    OutOfRange { what: &'static str, value: f64 },

    /// Backend (IF97) error.
    #[error("Backend error: {message}")]
    Backend { message: String },
}

/// Result type for state resolution.
pub type ResolveResult<T> = Result<T, ResolveError>;

/// Errors that can occur while resolving a state from two properties.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ResolveError {
    /// The two identifiers of a specification are identical.
    #[error("You cannot specify the same property twice")]
    DuplicateProperty { id: PropertyId },

    /// Any pair other than {p,t} or {p,x}.
    #[error("Unsupported property combination: {first} and {second}")]
    UnsupportedPair {
        first: PropertyId,
        second: PropertyId,
    },

    /// Quality input outside [0,1].
    #[error("Quality must be between 0 and 1, got {x}")]
    QualityOutOfRange { x: f64 },

    /// A specified value was NaN or infinite.
    #[error("Non-finite numeric value for {what}")]
    NonFinite { what: &'static str },

    /// The table could not produce a value.
    #[error("{0}")]
    Table(#[from] TableError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = ResolveError::DuplicateProperty {
            id: PropertyId::Pressure,
        };
        assert_eq!(err.to_string(), "You cannot specify the same property twice");

        let err = ResolveError::UnsupportedPair {
            first: PropertyId::SpecificVolume,
            second: PropertyId::Enthalpy,
        };
        assert_eq!(err.to_string(), "Unsupported property combination: v and h");
    }

    #[test]
    fn table_error_passes_through() {
        let err = ResolveError::from(TableError::OutOfRange {
            what: "saturation pressure [MPa]",
            value: 30.0,
        });
        assert!(err.to_string().contains("saturation pressure"));
    }
}
