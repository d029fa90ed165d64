//! # Tip Selection
//!
//! The tip percentage comes from exactly one place at a time: a preset
//! button, the custom field, or nothing.
//!
//! ## State Machine
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │                 ┌────────────────┐                                      │
//! │      ──────────►│  NoneSelected  │◄──────────── reset() ──────┐         │
//! │      (initial)  │     (0%)       │                            │         │
//! │                 └───┬────────┬───┘                            │         │
//! │     select_preset() │        │ enter_custom()                 │         │
//! │                     ▼        ▼                                │         │
//! │   ┌──────────────────┐      ┌──────────────────────┐          │         │
//! │   │  PresetSelected  │─────►│    CustomEntered     │──────────┤         │
//! │   │  (preset %)      │◄─────│  (parsed %, or 0)    │          │         │
//! │   └──────────────────┘      └──────────────────────┘          │         │
//! │            │  select_preset() clears the custom text          │         │
//! │            └──────────────────────────────────────────────────┘         │
//! │                                                                         │
//! │  No terminal state. Every transition is allowed from every state.      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Transitions consume the current state and return the next one, so the
//! selection is an ordinary value that can live inside
//! [`CalculatorState`](crate::CalculatorState) and be tested without a UI.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::{CoreError, CoreResult};
use crate::parse::parse_custom_tip;
use crate::types::TipPreset;

/// Where the current tip percentage comes from.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize, TS)]
#[serde(tag = "state", rename_all = "camelCase")]
#[ts(export)]
pub enum TipSelection {
    /// Nothing chosen yet; tip is 0%.
    #[default]
    NoneSelected,

    /// A preset button is active.
    PresetSelected { preset: TipPreset },

    /// The custom field has text in it.
    ///
    /// `raw` is what the user typed; `percentage` is its coerced value.
    CustomEntered { percentage: f64, raw: String },
}

impl TipSelection {
    /// Activates a preset. Any custom text is dropped.
    pub fn select_preset(self, preset: TipPreset) -> Self {
        TipSelection::PresetSelected { preset }
    }

    /// Activates the preset with `id` from `presets`.
    ///
    /// ## Errors
    /// `CoreError::PresetNotFound` when `id` is not in the set. The current
    /// selection is consumed either way; callers that need to keep it on
    /// failure should clone first.
    ///
    /// ## Example
    /// ```rust
    /// use tipsplit_core::{TipPreset, TipSelection};
    ///
    /// let presets = TipPreset::defaults();
    /// let selection = TipSelection::default().select_preset_by_id(&presets, "25").unwrap();
    /// assert_eq!(selection.percentage(), 25.0);
    /// assert!(TipSelection::default().select_preset_by_id(&presets, "18").is_err());
    /// ```
    pub fn select_preset_by_id(self, presets: &[TipPreset], id: &str) -> CoreResult<Self> {
        let preset = presets
            .iter()
            .find(|p| p.id == id)
            .ok_or_else(|| CoreError::PresetNotFound(id.to_string()))?;
        Ok(self.select_preset(preset.clone()))
    }

    /// Records new custom text. Unparsable or negative text counts as 0%.
    /// No preset stays selected.
    pub fn enter_custom(self, raw: impl Into<String>) -> Self {
        let raw = raw.into();
        TipSelection::CustomEntered {
            percentage: parse_custom_tip(&raw),
            raw,
        }
    }

    /// Back to the initial state.
    pub fn reset(self) -> Self {
        TipSelection::NoneSelected
    }

    /// Effective tip percentage for the engine.
    pub fn percentage(&self) -> f64 {
        match self {
            TipSelection::NoneSelected => 0.0,
            TipSelection::PresetSelected { preset } => preset.percentage,
            TipSelection::CustomEntered { percentage, .. } => *percentage,
        }
    }

    /// Id of the highlighted preset, if any.
    pub fn selected_preset_id(&self) -> Option<&str> {
        match self {
            TipSelection::PresetSelected { preset } => Some(preset.id.as_str()),
            _ => None,
        }
    }

    /// Text to show in the custom field (empty unless a custom tip is active).
    pub fn custom_text(&self) -> &str {
        match self {
            TipSelection::CustomEntered { raw, .. } => raw,
            _ => "",
        }
    }
}
