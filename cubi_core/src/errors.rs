//! # Error Types
//!
//! Structured error types for cubi_core. Every failure the engine can
//! produce is a distinct variant with enough context to handle it
//! programmatically: a UI can match on [`CubiError::error_code`] instead
//! of parsing messages.
//!
//! ## Example
//!
//! ```rust
//! use cubi_core::errors::{CubiError, CubiResult};
//!
//! fn validar_largo(largo_m: f64) -> CubiResult<()> {
//!     if largo_m <= 0.0 {
//!         return Err(CubiError::invalid_input(
//!             "largo_m",
//!             largo_m.to_string(),
//!             "El largo debe ser positivo",
//!         ));
//!     }
//!     Ok(())
//! }
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for cubi_core operations
pub type CubiResult<T> = Result<T, CubiError>;

/// Structured error type for takeoff operations.
///
/// Calculation errors are deterministic: the same invalid input always
/// produces the same variant, and nothing here is retryable except a
/// foreign file lock.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum CubiError {
    /// A dimension or count is out of its valid domain (non-finite,
    /// zero or negative where a positive value is required)
    #[error("Entrada inválida en '{field}': {value} - {reason}")]
    InvalidInput {
        field: String,
        value: String,
        reason: String,
    },

    /// A required field is missing
    #[error("Falta el campo requerido: {field}")]
    MissingField { field: String },

    /// A material selector does not match any catalog entry
    /// (concrete grade, brick type, mesh type, rebar diameter)
    #[error("Material no encontrado en catálogo: {material}")]
    MaterialNotFound { material: String },

    /// The requested element type has no calculator
    #[error("Tipo de elemento no soportado: {requested}")]
    UnsupportedCalculation { requested: String },

    /// Calculation could not produce a result
    #[error("Cálculo fallido: {calculation_type} - {reason}")]
    CalculationFailed {
        calculation_type: String,
        reason: String,
    },

    /// File I/O error
    #[error("Error de archivo: {operation} en '{path}' - {reason}")]
    FileError {
        operation: String,
        path: String,
        reason: String,
    },

    /// File is locked by another user/process
    #[error("Archivo bloqueado: '{path}' en uso por {locked_by} desde {locked_at}")]
    FileLocked {
        path: String,
        locked_by: String,
        locked_at: String,
    },

    /// JSON serialization/deserialization error
    #[error("Error de serialización: {reason}")]
    SerializationError { reason: String },

    /// Schema version mismatch
    #[error("Versión incompatible: archivo {file_version}, se esperaba {expected_version}")]
    VersionMismatch {
        file_version: String,
        expected_version: String,
    },

    /// Generic internal error (should be rare)
    #[error("Error interno: {message}")]
    Internal { message: String },
}

impl CubiError {
    /// Create an InvalidInput error
    pub fn invalid_input(
        field: impl Into<String>,
        value: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        CubiError::InvalidInput {
            field: field.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Create a MissingField error
    pub fn missing_field(field: impl Into<String>) -> Self {
        CubiError::MissingField {
            field: field.into(),
        }
    }

    /// Create a MaterialNotFound error
    pub fn material_not_found(material: impl Into<String>) -> Self {
        CubiError::MaterialNotFound {
            material: material.into(),
        }
    }

    /// Create an UnsupportedCalculation error
    pub fn unsupported_calculation(requested: impl Into<String>) -> Self {
        CubiError::UnsupportedCalculation {
            requested: requested.into(),
        }
    }

    /// Create a CalculationFailed error
    pub fn calculation_failed(
        calculation_type: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        CubiError::CalculationFailed {
            calculation_type: calculation_type.into(),
            reason: reason.into(),
        }
    }

    /// Create a FileError
    pub fn file_error(
        operation: impl Into<String>,
        path: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        CubiError::FileError {
            operation: operation.into(),
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// Create a FileLocked error
    pub fn file_locked(
        path: impl Into<String>,
        locked_by: impl Into<String>,
        locked_at: impl Into<String>,
    ) -> Self {
        CubiError::FileLocked {
            path: path.into(),
            locked_by: locked_by.into(),
            locked_at: locked_at.into(),
        }
    }

    /// Check if this is a recoverable error (e.g., can retry later).
    ///
    /// Calculation errors are never recoverable: a pure function fed the
    /// same input fails the same way every time.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, CubiError::FileLocked { .. })
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            CubiError::InvalidInput { .. } => "INVALID_INPUT",
            CubiError::MissingField { .. } => "MISSING_FIELD",
            CubiError::MaterialNotFound { .. } => "MATERIAL_NOT_FOUND",
            CubiError::UnsupportedCalculation { .. } => "UNSUPPORTED_CALCULATION",
            CubiError::CalculationFailed { .. } => "CALCULATION_FAILED",
            CubiError::FileError { .. } => "FILE_ERROR",
            CubiError::FileLocked { .. } => "FILE_LOCKED",
            CubiError::SerializationError { .. } => "SERIALIZATION_ERROR",
            CubiError::VersionMismatch { .. } => "VERSION_MISMATCH",
            CubiError::Internal { .. } => "INTERNAL_ERROR",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_serialization() {
        let error = CubiError::invalid_input("largo_m", "-5.0", "El largo debe ser positivo");
        let json = serde_json::to_string(&error).unwrap();
        let roundtrip: CubiError = serde_json::from_str(&json).unwrap();
        assert_eq!(error, roundtrip);
    }

    #[test]
    fn test_error_codes() {
        assert_eq!(
            CubiError::missing_field("grado").error_code(),
            "MISSING_FIELD"
        );
        assert_eq!(
            CubiError::material_not_found("H50").error_code(),
            "MATERIAL_NOT_FOUND"
        );
        assert_eq!(
            CubiError::unsupported_calculation("piscina").error_code(),
            "UNSUPPORTED_CALCULATION"
        );
    }

    #[test]
    fn test_only_lock_is_recoverable() {
        assert!(CubiError::file_locked("obra.cubi", "otro", "ayer").is_recoverable());
        assert!(!CubiError::invalid_input("alto_m", "0", "debe ser positivo").is_recoverable());
    }
}
