//! # Session Configuration
//!
//! Settings a calculator session is created with.
//!
//! ## Configuration Sources (Priority Order)
//! 1. Environment variables (`TIPSPLIT_*`)
//! 2. Defaults (this file)
//!
//! Configuration is read-only once a session is running.

use serde::{Deserialize, Serialize};
use tracing::warn;
use ts_rs::TS;

use tipsplit_core::validation::validate_preset_set;
use tipsplit_core::{Money, TipPreset, ValidationError};

/// Comma-separated preset percentages, e.g. `"10,15,20"`.
pub const ENV_PRESETS: &str = "TIPSPLIT_PRESETS";

/// Currency symbol shown in front of amounts.
pub const ENV_CURRENCY_SYMBOL: &str = "TIPSPLIT_CURRENCY_SYMBOL";

/// Session configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct SessionConfig {
    /// Preset buttons offered by the form, in display order.
    pub presets: Vec<TipPreset>,

    /// Symbol for display (e.g. `"$"`).
    pub currency_symbol: String,
}

impl Default for SessionConfig {
    /// Presets 5/10/15/25/50 and `$`.
    fn default() -> Self {
        SessionConfig {
            presets: TipPreset::defaults(),
            currency_symbol: "$".to_string(),
        }
    }
}

impl SessionConfig {
    /// Creates a SessionConfig from environment variables and defaults.
    ///
    /// ## Environment Variables
    /// - `TIPSPLIT_PRESETS`: Override presets (e.g., "10,15,20")
    /// - `TIPSPLIT_CURRENCY_SYMBOL`: Override currency symbol
    pub fn from_env() -> Self {
        SessionConfig::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`from_env`](Self::from_env) with an injectable variable source.
    ///
    /// Values that fail to parse or validate are logged and ignored.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = SessionConfig::default();

        if let Some(raw) = lookup(ENV_PRESETS) {
            match parse_presets(&raw) {
                Ok(presets) => config.presets = presets,
                Err(reason) => {
                    warn!(value = %raw, %reason, "Ignoring {}", ENV_PRESETS);
                }
            }
        }

        if let Some(symbol) = lookup(ENV_CURRENCY_SYMBOL) {
            let symbol = symbol.trim();
            if symbol.is_empty() {
                warn!("Ignoring empty {}", ENV_CURRENCY_SYMBOL);
            } else {
                config.currency_symbol = symbol.to_string();
            }
        }

        config
    }

    /// Checks the preset set.
    pub fn validate(&self) -> Result<(), ValidationError> {
        validate_preset_set(&self.presets)
    }

    /// Formats a calculated amount as currency with two decimals.
    ///
    /// ## Example
    /// ```rust
    /// use tipsplit_session::SessionConfig;
    ///
    /// let config = SessionConfig::default();
    /// assert_eq!(config.format_currency(12.345), "$12.35");
    /// assert_eq!(config.format_currency(0.0), "$0.00");
    /// ```
    pub fn format_currency(&self, amount: f64) -> String {
        Money::from_amount(amount).format_with_symbol(&self.currency_symbol)
    }
}

/// Parses `"10, 15,20"` into presets and validates the set.
fn parse_presets(raw: &str) -> Result<Vec<TipPreset>, String> {
    let presets = raw
        .split(',')
        .map(|part| {
            let part = part.trim();
            part.parse::<f64>()
                .map(TipPreset::from_percentage)
                .map_err(|_| format!("'{part}' is not a percentage"))
        })
        .collect::<Result<Vec<_>, _>>()?;

    validate_preset_set(&presets).map_err(|e| e.to_string())?;
    Ok(presets)
}
