//! # Calculator Session
//!
//! One open form: its raw field text, its [`CalculatorState`], and the
//! display it draws on.
//!
//! ## Event Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Browser event (JSON)                                                   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  handle_json ──► InputEvent ──► handle                                  │
//! │                                   │                                     │
//! │       ┌───────────────┬───────────┼────────────────┬──────────┐         │
//! │       ▼               ▼           ▼                ▼          ▼         │
//! │  BillChanged   PresetClicked  CustomTipChanged PeopleChanged  Reset     │
//! │  parse_bill    select_preset  enter_custom     parse_people   reset     │
//! │       └───────────────┴───────────┬────────────────┴──────────┘         │
//! │                                   ▼                                     │
//! │                         CalculatorState::compute                        │
//! │                                   │                                     │
//! │                                   ▼                                     │
//! │           DisplaySurface::render_result / render_selection_state        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Every event is handled synchronously to completion before `handle`
//! returns. The session is driven through `&mut self`; nothing is shared.

use std::mem;

use serde::Serialize;
use tracing::{debug, info, warn};
use ts_rs::TS;

use tipsplit_core::parse::{parse_bill, parse_people};
use tipsplit_core::validation::{bill_feedback, people_feedback, FieldFeedback};
use tipsplit_core::{CalculationResult, CalculatorState, TipSelection};

use crate::config::SessionConfig;
use crate::display::{DisplaySurface, ResultView};
use crate::error::SessionError;
use crate::events::InputEvent;

/// Raw text of the free-form fields, kept so the form can be redrawn.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct FormFields {
    pub bill: String,
    pub people: String,
}

/// Everything the browser needs to redraw the form.
#[derive(Debug, Clone, Serialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct SessionSnapshot {
    pub fields: FormFields,
    pub custom_tip: String,
    pub selection: TipSelection,
    pub tip_percentage: f64,
    pub result: CalculationResult,
    pub view: ResultView,
    pub bill_feedback: Option<FieldFeedback>,
    pub people_feedback: Option<FieldFeedback>,
}

/// A running calculator bound to a display surface.
#[derive(Debug)]
pub struct CalculatorSession<D: DisplaySurface> {
    config: SessionConfig,
    state: CalculatorState,
    fields: FormFields,
    result: CalculationResult,
    display: D,
}

impl<D: DisplaySurface> CalculatorSession<D> {
    /// Starts a session and renders the initial `$0.00 / $0.00`.
    ///
    /// ## Errors
    /// `SessionError::Config` when the preset set is invalid.
    pub fn new(config: SessionConfig, display: D) -> Result<Self, SessionError> {
        config.validate()?;

        info!(
            presets = config.presets.len(),
            currency = %config.currency_symbol,
            "Calculator session started"
        );

        let mut session = CalculatorSession {
            config,
            state: CalculatorState::new(),
            fields: FormFields::default(),
            result: CalculationResult::zero(),
            display,
        };
        session.recalculate();
        Ok(session)
    }

    /// Applies one input event, recomputes and renders.
    ///
    /// ## Errors
    /// `SessionError::UnknownPreset` for a preset id outside the configured
    /// set. State and display are left untouched in that case.
    pub fn handle(&mut self, event: InputEvent) -> Result<CalculationResult, SessionError> {
        debug!(event = event.kind(), "Handling input event");

        match event {
            InputEvent::BillChanged { text } => {
                self.state.bill_amount = parse_bill(&text);
                self.fields.bill = text;
            }
            InputEvent::PresetClicked { preset_id } => {
                let next = self
                    .state
                    .selection
                    .clone()
                    .select_preset_by_id(&self.config.presets, &preset_id)
                    .map_err(|err| {
                        warn!(preset_id = %preset_id, "Rejected unknown preset");
                        SessionError::from(err)
                    })?;
                self.state.selection = next;
            }
            InputEvent::CustomTipChanged { text } => {
                let current = mem::take(&mut self.state.selection);
                self.state.selection = current.enter_custom(text);
            }
            InputEvent::PeopleChanged { text } => {
                self.state.number_of_people = parse_people(&text);
                self.fields.people = text;
            }
            InputEvent::Reset => self.reset_state(),
        }

        Ok(self.recalculate())
    }

    /// Decodes a JSON event payload and handles it.
    pub fn handle_json(&mut self, payload: &str) -> Result<CalculationResult, SessionError> {
        let event = InputEvent::from_json(payload)?;
        self.handle(event)
    }

    /// Clears every field and the tip selection, then renders zeros.
    pub fn reset(&mut self) -> CalculationResult {
        self.reset_state();
        self.recalculate()
    }

    /// Current state snapshot for the browser.
    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            fields: self.fields.clone(),
            custom_tip: self.state.selection.custom_text().to_string(),
            selection: self.state.selection.clone(),
            tip_percentage: self.state.tip_percentage(),
            result: self.result,
            view: ResultView::new(&self.result, &self.config),
            bill_feedback: bill_feedback(&self.fields.bill),
            people_feedback: people_feedback(&self.fields.people),
        }
    }

    /// Last computed result.
    pub fn result(&self) -> CalculationResult {
        self.result
    }

    /// Parsed calculator state.
    pub fn state(&self) -> &CalculatorState {
        &self.state
    }

    /// Presets and currency settings this session was built with.
    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    /// The surface results are rendered to.
    pub fn display(&self) -> &D {
        &self.display
    }

    /// Ends the session, handing back the display.
    pub fn into_display(self) -> D {
        self.display
    }

    fn reset_state(&mut self) {
        self.state.reset();
        self.fields = FormFields::default();
        info!("Calculator reset");
    }

    fn recalculate(&mut self) -> CalculationResult {
        self.result = self.state.compute();

        self.display
            .render_result(self.result.tip_per_person(), self.result.total_per_person());
        self.display
            .render_selection_state(self.state.selection.selected_preset_id());

        debug!(
            tip_percentage = self.state.tip_percentage(),
            tip_per_person = self.result.tip_per_person(),
            total_per_person = self.result.total_per_person(),
            "Recalculated"
        );

        self.result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::display::RecordingDisplay;

    fn session() -> CalculatorSession<RecordingDisplay> {
        let config = SessionConfig::default();
        let display = RecordingDisplay::new(&config);
        CalculatorSession::new(config, display).unwrap()
    }

    fn text(s: &str) -> String {
        s.to_string()
    }

    #[test]
    fn test_initial_render() {
        let session = session();
        assert_eq!(session.display().tip_text(), "$0.00");
        assert_eq!(session.display().total_text(), "$0.00");
        assert_eq!(session.display().selected_preset(), None);
        assert_eq!(session.display().render_count(), 1);
        assert_eq!(session.config(), &SessionConfig::default());
    }

    #[test]
    fn test_invalid_config_rejected() {
        let config = SessionConfig {
            presets: Vec::new(),
            ..SessionConfig::default()
        };
        let display = RecordingDisplay::new(&config);
        let err = CalculatorSession::new(config, display).unwrap_err();
        assert!(matches!(err, SessionError::Config(_)));
    }

    #[test]
    fn test_each_event_renders() {
        let mut session = session();
        session.handle(InputEvent::BillChanged { text: text("100") }).unwrap();
        session.handle(InputEvent::PeopleChanged { text: text("4") }).unwrap();
        session
            .handle(InputEvent::PresetClicked { preset_id: text("15") })
            .unwrap();

        assert_eq!(session.display().render_count(), 4);
        assert_eq!(session.display().tip_text(), "$3.75");
        assert_eq!(session.display().total_text(), "$28.75");
        assert_eq!(session.display().selected_preset(), Some("15"));
    }

    #[test]
    fn test_unknown_preset_leaves_state() {
        let mut session = session();
        session.handle(InputEvent::CustomTipChanged { text: text("12") }).unwrap();
        let renders = session.display().render_count();

        let err = session
            .handle(InputEvent::PresetClicked { preset_id: text("18") })
            .unwrap_err();

        assert!(matches!(err, SessionError::UnknownPreset(ref id) if id == "18"));
        assert_eq!(session.state().tip_percentage(), 12.0);
        assert_eq!(session.display().render_count(), renders);
    }

    #[test]
    fn test_reset_clears_fields() {
        let mut session = session();
        session.handle(InputEvent::BillChanged { text: text("60") }).unwrap();
        session.handle(InputEvent::PeopleChanged { text: text("2") }).unwrap();
        session.handle(InputEvent::CustomTipChanged { text: text("10") }).unwrap();
        assert!(!session.result().is_zero());

        let result = session.reset();
        assert!(result.is_zero());

        let snapshot = session.snapshot();
        assert_eq!(snapshot.fields, FormFields::default());
        assert_eq!(snapshot.custom_tip, "");
        assert_eq!(snapshot.selection, TipSelection::NoneSelected);
    }

    #[test]
    fn test_snapshot_feedback() {
        let mut session = session();
        session.handle(InputEvent::PeopleChanged { text: text("0") }).unwrap();
        session.handle(InputEvent::BillChanged { text: text("-5") }).unwrap();

        let snapshot = session.snapshot();
        assert_eq!(snapshot.people_feedback, Some(FieldFeedback::ZeroOrLess));
        assert_eq!(snapshot.bill_feedback, Some(FieldFeedback::Negative));
        assert_eq!(snapshot.view.tip_per_person, "$0.00");
    }
}
