//! # Validation Module
//!
//! Two kinds of checks live here, and neither one gates the calculation:
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Preset configuration (hard errors)                                     │
//! │  ├── validate_tip_percentage   finite, 0..=MAX_TIP_PERCENTAGE           │
//! │  ├── validate_preset_id        short, url-safe                          │
//! │  └── validate_preset_set       non-empty, bounded, unique ids           │
//! │                                                                         │
//! │  Field feedback (optional hints for validation styling)                 │
//! │  ├── bill_feedback             "Can't be negative"                      │
//! │  └── people_feedback           "Can't be zero"                          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The engine still returns a zero result for bad field input whether or
//! not the display shows feedback.

use std::collections::HashSet;

use serde::Serialize;
use ts_rs::TS;

use crate::error::ValidationError;
use crate::parse::{parse_decimal, parse_integer};
use crate::types::TipPreset;
use crate::{MAX_PRESETS, MAX_PRESET_ID_LEN, MAX_TIP_PERCENTAGE};

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// Preset Validators
// =============================================================================

/// Validates a configured tip percentage.
///
/// ## Example
/// ```rust
/// use tipsplit_core::validation::validate_tip_percentage;
///
/// assert!(validate_tip_percentage(15.0).is_ok());
/// assert!(validate_tip_percentage(0.0).is_ok());
/// assert!(validate_tip_percentage(-1.0).is_err());
/// assert!(validate_tip_percentage(f64::NAN).is_err());
/// ```
pub fn validate_tip_percentage(percentage: f64) -> ValidationResult<()> {
    if !percentage.is_finite() {
        return Err(ValidationError::NotFinite {
            field: "tip percentage".to_string(),
        });
    }

    if !(0.0..=MAX_TIP_PERCENTAGE).contains(&percentage) {
        return Err(ValidationError::OutOfRange {
            field: "tip percentage".to_string(),
            min: 0.0,
            max: MAX_TIP_PERCENTAGE,
        });
    }

    Ok(())
}

/// Validates a preset id.
///
/// ## Rules
/// - Must not be empty
/// - At most `MAX_PRESET_ID_LEN` characters
/// - Letters, digits, `.`, `-` and `_` only
pub fn validate_preset_id(id: &str) -> ValidationResult<()> {
    if id.is_empty() {
        return Err(ValidationError::Required {
            field: "preset id".to_string(),
        });
    }

    if id.chars().count() > MAX_PRESET_ID_LEN {
        return Err(ValidationError::TooLong {
            field: "preset id".to_string(),
            max: MAX_PRESET_ID_LEN,
        });
    }

    if !id
        .chars()
        .all(|c| c.is_alphanumeric() || matches!(c, '.' | '-' | '_'))
    {
        return Err(ValidationError::InvalidFormat {
            field: "preset id".to_string(),
            reason: "must contain only letters, numbers, dots, hyphens, and underscores"
                .to_string(),
        });
    }

    Ok(())
}

/// Validates a full preset set.
///
/// ## Example
/// ```rust
/// use tipsplit_core::{validation::validate_preset_set, TipPreset};
///
/// assert!(validate_preset_set(&TipPreset::defaults()).is_ok());
/// assert!(validate_preset_set(&[]).is_err());
///
/// let twice = vec![TipPreset::from_percentage(10.0), TipPreset::from_percentage(10.0)];
/// assert!(validate_preset_set(&twice).is_err());
/// ```
pub fn validate_preset_set(presets: &[TipPreset]) -> ValidationResult<()> {
    if presets.is_empty() {
        return Err(ValidationError::Required {
            field: "presets".to_string(),
        });
    }

    if presets.len() > MAX_PRESETS {
        return Err(ValidationError::TooMany {
            field: "presets".to_string(),
            max: MAX_PRESETS,
        });
    }

    let mut seen = HashSet::new();
    for preset in presets {
        validate_preset_id(&preset.id)?;
        validate_tip_percentage(preset.percentage)?;

        if !seen.insert(preset.id.as_str()) {
            return Err(ValidationError::Duplicate {
                field: "preset id".to_string(),
                value: preset.id.clone(),
            });
        }
    }

    Ok(())
}

// =============================================================================
// Field Feedback
// =============================================================================

/// Hint the display may show next to a form field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub enum FieldFeedback {
    /// Text is present but has no number in it.
    NotANumber,
    /// A negative bill.
    Negative,
    /// A people count of zero or less.
    ZeroOrLess,
}

impl FieldFeedback {
    /// Short message for the field's error slot.
    pub const fn message(&self) -> &'static str {
        match self {
            FieldFeedback::NotANumber => "Must be a number",
            FieldFeedback::Negative => "Can't be negative",
            FieldFeedback::ZeroOrLess => "Can't be zero",
        }
    }
}

/// Feedback for the bill field. Empty text gets none.
pub fn bill_feedback(text: &str) -> Option<FieldFeedback> {
    if text.trim().is_empty() {
        return None;
    }

    match parse_decimal(text) {
        None => Some(FieldFeedback::NotANumber),
        Some(amount) if amount < 0.0 => Some(FieldFeedback::Negative),
        Some(_) => None,
    }
}

/// Feedback for the people field. Empty text gets none.
///
/// ## Example
/// ```rust
/// use tipsplit_core::validation::{people_feedback, FieldFeedback};
///
/// assert_eq!(people_feedback("0"), Some(FieldFeedback::ZeroOrLess));
/// assert_eq!(people_feedback("3"), None);
/// assert_eq!(people_feedback(""), None);
/// ```
pub fn people_feedback(text: &str) -> Option<FieldFeedback> {
    if text.trim().is_empty() {
        return None;
    }

    match parse_integer(text) {
        None => Some(FieldFeedback::NotANumber),
        Some(count) if count <= 0 => Some(FieldFeedback::ZeroOrLess),
        Some(_) => None,
    }
}
