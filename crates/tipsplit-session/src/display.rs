//! # Display Surface
//!
//! The session pushes results out through [`DisplaySurface`]; whatever sits
//! behind it (a DOM bridge, a test recorder) decides how to draw them.
//!
//! ```text
//! CalculatorSession ──render_result(3.75, 28.75)──────────► DisplaySurface
//!                   ──render_selection_state(Some("15"))──►
//! ```

use serde::Serialize;
use ts_rs::TS;

use tipsplit_core::CalculationResult;

use crate::config::SessionConfig;

/// Receiver for everything the form shows.
pub trait DisplaySurface {
    /// Shows the two per-person amounts. Expected to format each as
    /// currency with exactly two decimals.
    fn render_result(&mut self, tip_per_person: f64, total_per_person: f64);

    /// Highlights the active preset, or none.
    fn render_selection_state(&mut self, selected_preset_id: Option<&str>);
}

impl<T: DisplaySurface + ?Sized> DisplaySurface for Box<T> {
    fn render_result(&mut self, tip_per_person: f64, total_per_person: f64) {
        (**self).render_result(tip_per_person, total_per_person);
    }

    fn render_selection_state(&mut self, selected_preset_id: Option<&str>) {
        (**self).render_selection_state(selected_preset_id);
    }
}

/// Formatted amounts, as shown to the user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct ResultView {
    pub tip_per_person: String,
    pub total_per_person: String,
}

impl ResultView {
    /// Formats a result with the configured currency symbol.
    pub fn new(result: &CalculationResult, config: &SessionConfig) -> Self {
        ResultView {
            tip_per_person: config.format_currency(result.tip_per_person()),
            total_per_person: config.format_currency(result.total_per_person()),
        }
    }
}

/// In-memory surface that keeps the last thing rendered.
///
/// Useful for headless hosts and tests.
#[derive(Debug, Clone)]
pub struct RecordingDisplay {
    config: SessionConfig,
    tip_text: String,
    total_text: String,
    selected_preset: Option<String>,
    render_count: usize,
}

impl RecordingDisplay {
    /// Creates an empty recorder that formats like `config`.
    pub fn new(config: &SessionConfig) -> Self {
        RecordingDisplay {
            config: config.clone(),
            tip_text: String::new(),
            total_text: String::new(),
            selected_preset: None,
            render_count: 0,
        }
    }

    /// Last rendered tip-per-person text.
    pub fn tip_text(&self) -> &str {
        &self.tip_text
    }

    /// Last rendered total-per-person text.
    pub fn total_text(&self) -> &str {
        &self.total_text
    }

    /// Currently highlighted preset.
    pub fn selected_preset(&self) -> Option<&str> {
        self.selected_preset.as_deref()
    }

    /// Number of `render_result` calls so far.
    pub fn render_count(&self) -> usize {
        self.render_count
    }
}

impl DisplaySurface for RecordingDisplay {
    fn render_result(&mut self, tip_per_person: f64, total_per_person: f64) {
        self.tip_text = self.config.format_currency(tip_per_person);
        self.total_text = self.config.format_currency(total_per_person);
        self.render_count += 1;
    }

    fn render_selection_state(&mut self, selected_preset_id: Option<&str>) {
        self.selected_preset = selected_preset_id.map(str::to_string);
    }
}
