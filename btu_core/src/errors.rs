//! # Error Types
//!
//! Structured error types for btu_core. Every failure carries enough context
//! for a front end to point at the offending field or catalog key.
//!
//! ## Example
//!
//! ```rust
//! use btu_core::errors::{CalcError, CalcResult};
//!
//! fn validate_r_value(r_value: f64) -> CalcResult<()> {
//!     if r_value <= 0.0 {
//!         return Err(CalcError::InvalidInput {
//!             field: "r_value".to_string(),
//!             value: r_value.to_string(),
//!             reason: "R-value must be positive".to_string(),
//!         });
//!     }
//!     Ok(())
//! }
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for btu_core operations
pub type CalcResult<T> = Result<T, CalcError>;

/// Structured error type for heat-loss operations.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum CalcError {
    /// An input value is invalid (non-positive R-value, non-finite number, etc.)
    #[error("Invalid input for '{field}': {value} - {reason}")]
    InvalidInput {
        field: String,
        value: String,
        reason: String,
    },

    /// A material key is not present in its catalog table
    #[error("Material not found: '{key}' in {table}")]
    MaterialNotFound { table: String, key: String },

    /// A catalog could not be parsed or contains invalid entries
    #[error("Invalid catalog: {reason}")]
    InvalidCatalog { reason: String },

    /// File I/O error
    #[error("File error: {operation} on '{path}' - {reason}")]
    FileError {
        operation: String,
        path: String,
        reason: String,
    },

    /// JSON serialization/deserialization error
    #[error("Serialization error: {reason}")]
    SerializationError { reason: String },
}

impl CalcError {
    /// Create an InvalidInput error
    pub fn invalid_input(field: impl Into<String>, value: impl Into<String>, reason: impl Into<String>) -> Self {
        CalcError::InvalidInput {
            field: field.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Create a MaterialNotFound error
    pub fn material_not_found(table: impl Into<String>, key: impl Into<String>) -> Self {
        CalcError::MaterialNotFound {
            table: table.into(),
            key: key.into(),
        }
    }

    /// Create an InvalidCatalog error
    pub fn invalid_catalog(reason: impl Into<String>) -> Self {
        CalcError::InvalidCatalog {
            reason: reason.into(),
        }
    }

    /// Create a FileError
    pub fn file_error(operation: impl Into<String>, path: impl Into<String>, reason: impl Into<String>) -> Self {
        CalcError::FileError {
            operation: operation.into(),
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// True when the error comes from the catalog or the keys chosen from it,
    /// rather than from numeric input.
    pub fn is_configuration_error(&self) -> bool {
        matches!(
            self,
            CalcError::MaterialNotFound { .. } | CalcError::InvalidCatalog { .. }
        )
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            CalcError::InvalidInput { .. } => "INVALID_INPUT",
            CalcError::MaterialNotFound { .. } => "MATERIAL_NOT_FOUND",
            CalcError::InvalidCatalog { .. } => "INVALID_CATALOG",
            CalcError::FileError { .. } => "FILE_ERROR",
            CalcError::SerializationError { .. } => "SERIALIZATION_ERROR",
        }
    }
}

impl From<serde_json::Error> for CalcError {
    fn from(e: serde_json::Error) -> Self {
        CalcError::SerializationError {
            reason: e.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_serialization() {
        let error = CalcError::invalid_input("roof_r_value", "0", "R-value must be positive");
        let json = serde_json::to_string(&error).unwrap();
        assert!(json.contains("\"type\":\"InvalidInput\""));
        let roundtrip: CalcError = serde_json::from_str(&json).unwrap();
        assert_eq!(error, roundtrip);
    }

    #[test]
    fn test_error_codes() {
        assert_eq!(
            CalcError::material_not_found("coverings", "glassBrick").error_code(),
            "MATERIAL_NOT_FOUND"
        );
        assert_eq!(CalcError::invalid_catalog("empty").error_code(), "INVALID_CATALOG");
    }

    #[test]
    fn test_configuration_errors() {
        assert!(CalcError::material_not_found("frames", "bamboo").is_configuration_error());
        assert!(CalcError::invalid_catalog("bad toml").is_configuration_error());
        assert!(!CalcError::invalid_input("length_ft", "NaN", "not finite").is_configuration_error());
    }

    #[test]
    fn test_display_names_key_and_table() {
        let error = CalcError::material_not_found("insulations", "strawWall");
        assert_eq!(error.to_string(), "Material not found: 'strawWall' in insulations");
    }
}
