//! # tipsplit-core: Pure Calculation Logic for Tip Split
//!
//! This crate holds everything the tip calculator *knows*: how to parse the
//! form fields, how the tip selection moves between presets and a custom
//! value, and how a bill is split. There is no I/O, no logging and no
//! global state here.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Tip Split Architecture                           │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    Browser form                                 │   │
//! │  │    Bill ──► Tip presets / custom ──► People ──► Reset           │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ InputEvent (JSON)                      │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                    tipsplit-session                             │   │
//! │  │    CalculatorSession ──► DisplaySurface                         │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ tipsplit-core (THIS CRATE) ★                    │   │
//! │  │                                                                 │   │
//! │  │   ┌──────────┐ ┌───────────┐ ┌─────────┐ ┌───────┐ ┌─────────┐  │   │
//! │  │   │  engine  │ │ selection │ │  parse  │ │ money │ │validation│ │   │
//! │  │   └──────────┘ └───────────┘ └─────────┘ └───────┘ └─────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO UI FRAMEWORK • PURE FUNCTIONS                     │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`engine`] - `compute_result`, the split arithmetic with its zero fallback
//! - [`selection`] - the tip selection state machine
//! - [`parse`] - lenient parsing of raw form text
//! - [`money`] - cent-based display formatting
//! - [`types`] - `CalculatorState`, `CalculationResult`, `TipPreset`
//! - [`validation`] - configuration checks and field feedback
//! - [`error`] - domain error types
//!
//! ## Example Usage
//!
//! ```rust
//! use tipsplit_core::{compute_result, money::format_amount};
//!
//! let result = compute_result(Some(100.0), 15.0, Some(4));
//! assert_eq!(format_amount(result.tip_per_person()), "$3.75");
//! assert_eq!(format_amount(result.total_per_person()), "$28.75");
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod engine;
pub mod error;
pub mod money;
pub mod parse;
pub mod selection;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use engine::compute_result;
pub use error::{CoreError, CoreResult, ValidationError};
pub use money::Money;
pub use selection::TipSelection;
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Tip percentages offered as one-click presets when nothing else is configured.
pub const DEFAULT_PRESET_PERCENTAGES: [f64; 5] = [5.0, 10.0, 15.0, 25.0, 50.0];

/// Largest tip percentage accepted for a configured preset.
///
/// Custom tips typed into the form are not capped; this only guards the
/// preset configuration against typos such as `150` for `15.0`.
pub const MAX_TIP_PERCENTAGE: f64 = 1000.0;

/// Maximum number of presets a form can offer.
pub const MAX_PRESETS: usize = 12;

/// Maximum length of a preset identifier.
pub const MAX_PRESET_ID_LEN: usize = 16;
