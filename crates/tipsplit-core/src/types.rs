//! # Domain Types
//!
//! Core domain types used throughout Tip Split.
//!
//! ## Type Overview
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌──────────────────────┐        ┌──────────────────────┐              │
//! │  │   CalculatorState    │        │  CalculationResult   │              │
//! │  │  ──────────────────  │ compute│  ──────────────────  │              │
//! │  │  bill_amount         │ ──────►│  tip_per_person      │              │
//! │  │  selection ──────┐   │        │  total_per_person    │              │
//! │  │  number_of_people│   │        └──────────────────────┘              │
//! │  └──────────────────┼───┘                                              │
//! │                     ▼                                                   │
//! │  ┌──────────────────────┐        ┌──────────────────────┐              │
//! │  │    TipSelection      │ ──────►│      TipPreset       │              │
//! │  │  NoneSelected        │        │  id: "15"            │              │
//! │  │  PresetSelected      │        │  percentage: 15.0    │              │
//! │  │  CustomEntered       │        └──────────────────────┘              │
//! │  └──────────────────────┘                                              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! All of these are transient: they live as long as the form is open and
//! are rebuilt from the inputs on every event.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::engine::compute_result;
use crate::selection::TipSelection;
use crate::DEFAULT_PRESET_PERCENTAGES;

// =============================================================================
// Tip Preset
// =============================================================================

/// One of the fixed, one-click tip percentages.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct TipPreset {
    /// Identifier the browser sends back when the preset is clicked.
    pub id: String,

    /// Tip percentage, e.g. `15.0` for 15%.
    pub percentage: f64,
}

impl TipPreset {
    /// Creates a preset with an explicit id.
    pub fn new(id: impl Into<String>, percentage: f64) -> Self {
        TipPreset {
            id: id.into(),
            percentage,
        }
    }

    /// Creates a preset whose id is the percentage itself (`15.0` → `"15"`).
    pub fn from_percentage(percentage: f64) -> Self {
        TipPreset::new(percentage.to_string(), percentage)
    }

    /// The default preset set: 5%, 10%, 15%, 25% and 50%.
    pub fn defaults() -> Vec<TipPreset> {
        DEFAULT_PRESET_PERCENTAGES
            .iter()
            .copied()
            .map(TipPreset::from_percentage)
            .collect()
    }
}

// =============================================================================
// Calculation Result
// =============================================================================

/// Per-person amounts produced by the engine.
///
/// ## Invariant
/// Both amounts are finite and non-negative. The only constructors are
/// [`CalculationResult::zero`] and [`CalculationResult::new`], and `new`
/// replaces anything else with `0`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct CalculationResult {
    tip_per_person: f64,
    total_per_person: f64,
}

impl CalculationResult {
    /// The `{0, 0}` result shown for any invalid input.
    #[inline]
    pub const fn zero() -> Self {
        CalculationResult {
            tip_per_person: 0.0,
            total_per_person: 0.0,
        }
    }

    /// Builds a result, replacing NaN, infinite or negative amounts with `0`.
    ///
    /// ## Example
    /// ```rust
    /// use tipsplit_core::CalculationResult;
    ///
    /// let result = CalculationResult::new(f64::INFINITY, 12.5);
    /// assert_eq!(result.tip_per_person(), 0.0);
    /// assert_eq!(result.total_per_person(), 12.5);
    /// ```
    pub fn new(tip_per_person: f64, total_per_person: f64) -> Self {
        CalculationResult {
            tip_per_person: sanitize(tip_per_person),
            total_per_person: sanitize(total_per_person),
        }
    }

    /// Tip amount each person pays.
    #[inline]
    pub const fn tip_per_person(&self) -> f64 {
        self.tip_per_person
    }

    /// Bill plus tip, per person.
    #[inline]
    pub const fn total_per_person(&self) -> f64 {
        self.total_per_person
    }

    /// Checks if this is the zero result.
    pub fn is_zero(&self) -> bool {
        self.tip_per_person == 0.0 && self.total_per_person == 0.0
    }
}

impl Default for CalculationResult {
    fn default() -> Self {
        CalculationResult::zero()
    }
}

/// Keeps finite positive amounts, maps everything else (including `-0.0`) to `0`.
fn sanitize(amount: f64) -> f64 {
    if amount.is_finite() && amount > 0.0 {
        amount
    } else {
        0.0
    }
}

// =============================================================================
// Calculator State
// =============================================================================

/// Everything the calculator knows at one moment.
///
/// `None` marks a field whose text could not be parsed. The tip percentage
/// is not stored separately; it is derived from [`TipSelection`] so the two
/// can never disagree.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct CalculatorState {
    /// Parsed bill, `None` when invalid.
    pub bill_amount: Option<f64>,

    /// Current tip selection.
    pub selection: TipSelection,

    /// Parsed people count, `None` when unparsable.
    pub number_of_people: Option<i64>,
}

impl CalculatorState {
    /// Creates the initial state: no bill, no tip, no people.
    pub fn new() -> Self {
        CalculatorState::default()
    }

    /// Effective tip percentage (`0` when nothing is selected).
    #[inline]
    pub fn tip_percentage(&self) -> f64 {
        self.selection.percentage()
    }

    /// Runs the engine over the current fields.
    ///
    /// ## Example
    /// ```rust
    /// use tipsplit_core::{CalculatorState, TipPreset};
    ///
    /// let mut state = CalculatorState::new();
    /// state.bill_amount = Some(100.0);
    /// state.number_of_people = Some(4);
    /// state.selection = state.selection.select_preset(TipPreset::from_percentage(15.0));
    ///
    /// let result = state.compute();
    /// assert_eq!(result.tip_per_person(), 3.75);
    /// assert_eq!(result.total_per_person(), 28.75);
    /// ```
    pub fn compute(&self) -> CalculationResult {
        compute_result(self.bill_amount, self.tip_percentage(), self.number_of_people)
    }

    /// Restores the initial state, including the tip selection.
    pub fn reset(&mut self) {
        *self = CalculatorState::new();
    }
}
