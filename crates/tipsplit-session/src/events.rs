//! # Input Events
//!
//! What the browser form sends, one event per user interaction.
//!
//! ```json
//! { "type": "billChanged", "text": "142.55" }
//! { "type": "presetClicked", "presetId": "15" }
//! { "type": "customTipChanged", "text": "18" }
//! { "type": "peopleChanged", "text": "4" }
//! { "type": "reset" }
//! ```
//!
//! Field text is passed through untouched; parsing happens in the core.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// A single user interaction with the form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(tag = "type", rename_all = "camelCase")]
#[ts(export)]
pub enum InputEvent {
    /// The bill field changed.
    BillChanged { text: String },

    /// A preset tip button was clicked.
    PresetClicked {
        #[serde(rename = "presetId")]
        preset_id: String,
    },

    /// The custom tip field changed.
    CustomTipChanged { text: String },

    /// The people field changed.
    PeopleChanged { text: String },

    /// The reset button was clicked.
    Reset,
}

impl InputEvent {
    /// Short name for log lines.
    pub fn kind(&self) -> &'static str {
        match self {
            InputEvent::BillChanged { .. } => "bill_changed",
            InputEvent::PresetClicked { .. } => "preset_clicked",
            InputEvent::CustomTipChanged { .. } => "custom_tip_changed",
            InputEvent::PeopleChanged { .. } => "people_changed",
            InputEvent::Reset => "reset",
        }
    }

    /// Decodes an event from the browser's JSON payload.
    pub fn from_json(payload: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(payload)
    }
}
