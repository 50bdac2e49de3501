//! User interface components.
//!
//! This module provides:
//! - [`UserInterface`] trait for UI abstraction
//! - [`TerminalUI`] writing diagnostic lines to stdout
//! - [`MockUI`] capturing output for tests
//! - A spinner shown while the request is in flight
//!
//! # Example
//!
//! ```
//! use insight_probe::ui::{MockUI, UserInterface};
//!
//! let mut ui = MockUI::new();
//! ui.message("📡 Status Code: 200");
//! ui.success("✅ API Response received");
//! assert_eq!(ui.lines().len(), 2);
//! ```

pub mod icons;
pub mod mock;
pub mod output;
pub mod spinner;
pub mod terminal;
pub mod theme;

pub use icons::Marker;
pub use mock::{MockSpinner, MockUI, SpinnerStatus};
pub use output::OutputMode;
pub use spinner::ProgressSpinner;
pub use terminal::{create_ui, TerminalUI};
pub use theme::{should_use_colors, ProbeTheme};

/// Trait for user interface interactions.
///
/// This trait allows mocking the UI in tests.
pub trait UserInterface {
    /// Get the current output mode.
    fn output_mode(&self) -> OutputMode;

    /// Display an informational line. Hidden in quiet mode.
    fn message(&mut self, msg: &str);

    /// Display a passing verdict line.
    fn success(&mut self, msg: &str);

    /// Display a failing verdict line.
    fn error(&mut self, msg: &str);

    /// Start a spinner for an operation.
    fn start_spinner(&mut self, message: &str) -> Box<dyn SpinnerHandle>;
}

/// Handle for controlling a spinner.
pub trait SpinnerHandle {
    /// Mark the operation as successful.
    fn finish_success(&mut self, msg: &str);

    /// Mark the operation as failed.
    fn finish_error(&mut self, msg: &str);
}
