//! # Error Types
//!
//! Domain-specific error types for tipsplit-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  tipsplit-core errors (this file)                                      │
//! │  ├── CoreError        - Preset lookup failures                         │
//! │  └── ValidationError  - Configuration validation failures              │
//! │                                                                         │
//! │  tipsplit-session errors (separate crate)                              │
//! │  └── SessionError     - What the browser sees (serialized)             │
//! │                                                                         │
//! │  Flow: CoreError / ValidationError → SessionError → Browser            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The calculation itself has no error type. Invalid bills, tips and people
//! counts all collapse into a zero result (see [`crate::engine`]); these
//! errors only cover the preset configuration around it.

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Core domain errors.
#[derive(Debug, Error)]
pub enum CoreError {
    /// A preset id was clicked that is not part of the configured set.
    ///
    /// ## When This Occurs
    /// - The browser and the session disagree on the preset list
    /// - A stale page sends an id from an older configuration
    #[error("Tip preset not found: {0}")]
    PresetNotFound(String),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Configuration validation errors.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: f64, max: f64 },

    /// Value is NaN or infinite.
    #[error("{field} must be a finite number")]
    NotFinite { field: String },

    /// Invalid format (e.g., a preset id with spaces).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },

    /// Too many entries in a collection.
    #[error("{field} cannot have more than {max} entries")]
    TooMany { field: String, max: usize },

    /// Duplicate value (e.g., two presets sharing an id).
    #[error("{field} '{value}' already exists")]
    Duplicate { field: String, value: String },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = CoreError::PresetNotFound("18".to_string());
        assert_eq!(err.to_string(), "Tip preset not found: 18");
    }

    #[test]
    fn test_validation_error_messages() {
        let err = ValidationError::Required {
            field: "preset id".to_string(),
        };
        assert_eq!(err.to_string(), "preset id is required");

        let err = ValidationError::OutOfRange {
            field: "tip percentage".to_string(),
            min: 0.0,
            max: 1000.0,
        };
        assert_eq!(err.to_string(), "tip percentage must be between 0 and 1000");
    }
}
