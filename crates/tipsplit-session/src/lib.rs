//! # tipsplit-session
//!
//! The thin layer between the browser form and `tipsplit-core`.
//!
//! ## Module Organization
//! ```text
//! tipsplit_session/
//! ├── lib.rs          ◄─── You are here (exports & logging setup)
//! ├── config.rs       ◄─── Presets and currency symbol
//! ├── events.rs       ◄─── InputEvent, decoded from the browser's JSON
//! ├── session.rs      ◄─── CalculatorSession: event ► state ► render
//! ├── display.rs      ◄─── DisplaySurface trait + RecordingDisplay
//! └── error.rs        ◄─── SessionError and its serialized payload
//! ```
//!
//! ## Example
//! ```rust
//! use tipsplit_session::{CalculatorSession, InputEvent, RecordingDisplay, SessionConfig};
//!
//! let config = SessionConfig::default();
//! let display = RecordingDisplay::new(&config);
//! let mut session = CalculatorSession::new(config, display).unwrap();
//!
//! session.handle_json(r#"{"type":"billChanged","text":"100"}"#).unwrap();
//! session.handle_json(r#"{"type":"presetClicked","presetId":"15"}"#).unwrap();
//! session.handle(InputEvent::PeopleChanged { text: "4".into() }).unwrap();
//!
//! assert_eq!(session.display().tip_text(), "$3.75");
//! assert_eq!(session.display().total_text(), "$28.75");
//! ```

pub mod config;
pub mod display;
pub mod error;
pub mod events;
pub mod session;

pub use config::SessionConfig;
pub use display::{DisplaySurface, RecordingDisplay, ResultView};
pub use error::{ErrorCode, ErrorPayload, SessionError};
pub use events::InputEvent;
pub use session::{CalculatorSession, FormFields, SessionSnapshot};

use tracing_subscriber::EnvFilter;

/// Default filter when `RUST_LOG` is not set.
pub const DEFAULT_LOG_FILTER: &str = "info,tipsplit=debug";

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show every event and recalculation
/// - `RUST_LOG=tipsplit_session=trace` - Session crate only
/// - Default: `info,tipsplit=debug`
///
/// Safe to call more than once; later calls leave the first subscriber in place.
pub fn init_tracing() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    // Err only means a global subscriber is already installed.
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}
