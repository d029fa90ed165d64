//! # Session Error Type
//!
//! Errors the adapter can return to the browser.
//!
//! None of these come from bad form input: a garbled bill or a zero people
//! count still produces a (zero) result. They cover malformed event
//! payloads and preset ids the session does not know.
//!
//! ## Serialization
//! The browser receives `{ code, message }`:
//! ```json
//! {
//!   "code": "UNKNOWN_PRESET",
//!   "message": "Unknown tip preset: 18"
//! }
//! ```

use serde::Serialize;
use thiserror::Error;
use ts_rs::TS;

use tipsplit_core::{CoreError, ValidationError};

/// Adapter errors.
#[derive(Debug, Error)]
pub enum SessionError {
    /// The event payload is not valid JSON or not a known event.
    #[error("Invalid event payload: {0}")]
    InvalidPayload(#[from] serde_json::Error),

    /// A preset id outside the configured set was clicked.
    #[error("Unknown tip preset: {0}")]
    UnknownPreset(String),

    /// The session configuration failed validation.
    #[error("Invalid configuration: {0}")]
    Config(#[from] ValidationError),
}

impl From<CoreError> for SessionError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::PresetNotFound(id) => SessionError::UnknownPreset(id),
        }
    }
}

/// Machine-readable error codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, TS)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[ts(export)]
pub enum ErrorCode {
    InvalidPayload,
    UnknownPreset,
    InvalidConfig,
}

/// Serialized form of a [`SessionError`].
#[derive(Debug, Clone, Serialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct ErrorPayload {
    pub code: ErrorCode,
    pub message: String,
}

impl SessionError {
    /// Error code for programmatic handling.
    pub fn code(&self) -> ErrorCode {
        match self {
            SessionError::InvalidPayload(_) => ErrorCode::InvalidPayload,
            SessionError::UnknownPreset(_) => ErrorCode::UnknownPreset,
            SessionError::Config(_) => ErrorCode::InvalidConfig,
        }
    }

    /// Code plus display message, ready to serialize.
    pub fn to_payload(&self) -> ErrorPayload {
        ErrorPayload {
            code: self.code(),
            message: self.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_core_error_conversion() {
        let err: SessionError = CoreError::PresetNotFound("18".to_string()).into();
        assert!(matches!(err, SessionError::UnknownPreset(ref id) if id == "18"));
        assert_eq!(err.code(), ErrorCode::UnknownPreset);

        let err: SessionError = ValidationError::Required {
            field: "presets".to_string(),
        }
        .into();
        assert_eq!(err.code(), ErrorCode::InvalidConfig);
    }

    #[test]
    fn test_payload_serialization() {
        let payload = SessionError::UnknownPreset("18".to_string()).to_payload();
        let json = serde_json::to_value(&payload).unwrap();
        assert_eq!(json["code"], "UNKNOWN_PRESET");
        assert_eq!(json["message"], "Unknown tip preset: 18");
    }

    #[test]
    fn test_invalid_payload_from_json_error() {
        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err: SessionError = json_err.into();
        assert_eq!(err.code(), ErrorCode::InvalidPayload);
        assert!(err.to_string().starts_with("Invalid event payload"));
    }
}
