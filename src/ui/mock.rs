//! Mock UI implementation for testing.
//!
//! `MockUI` implements the `UserInterface` trait and captures all
//! output for later assertion, both per kind and as one ordered
//! transcript.
//!
//! # Example
//!
//! ```
//! use insight_probe::ui::{MockUI, UserInterface};
//!
//! let mut ui = MockUI::new();
//! ui.message("📦 Found 3 insights");
//! ui.error("❌ insight_contents field NOT found");
//!
//! assert!(ui.has_message("Found 3"));
//! assert!(ui.has_error("NOT found"));
//! assert_eq!(ui.lines()[1], "❌ insight_contents field NOT found");
//! ```

use std::cell::RefCell;
use std::rc::Rc;

use super::{OutputMode, SpinnerHandle, UserInterface};

/// Mock UI implementation for testing.
///
/// Captures every line regardless of output mode; mode filtering is the
/// job of the real UI.
#[derive(Debug, Default)]
pub struct MockUI {
    mode: OutputMode,
    lines: Vec<String>,
    messages: Vec<String>,
    successes: Vec<String>,
    errors: Vec<String>,
    spinners: Vec<Rc<RefCell<MockSpinner>>>,
}

impl MockUI {
    /// Create a new MockUI with Normal output mode.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a new MockUI with a specific output mode.
    pub fn with_mode(mode: OutputMode) -> Self {
        Self {
            mode,
            ..Default::default()
        }
    }

    /// Every captured line, in the order it was written.
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Get all captured informational messages.
    pub fn messages(&self) -> &[String] {
        &self.messages
    }

    /// Get all captured success lines.
    pub fn successes(&self) -> &[String] {
        &self.successes
    }

    /// Get all captured error lines.
    pub fn errors(&self) -> &[String] {
        &self.errors
    }

    /// Get the spinners that were started, with their final state.
    pub fn spinners(&self) -> Vec<MockSpinner> {
        self.spinners.iter().map(|s| s.borrow().clone()).collect()
    }

    /// Check if a message containing `msg` was shown.
    pub fn has_message(&self, msg: &str) -> bool {
        self.messages.iter().any(|m| m.contains(msg))
    }

    /// Check if a success line containing `msg` was shown.
    pub fn has_success(&self, msg: &str) -> bool {
        self.successes.iter().any(|m| m.contains(msg))
    }

    /// Check if an error line containing `msg` was shown.
    pub fn has_error(&self, msg: &str) -> bool {
        self.errors.iter().any(|m| m.contains(msg))
    }
}

impl UserInterface for MockUI {
    fn output_mode(&self) -> OutputMode {
        self.mode
    }

    fn message(&mut self, msg: &str) {
        self.lines.push(msg.to_string());
        self.messages.push(msg.to_string());
    }

    fn success(&mut self, msg: &str) {
        self.lines.push(msg.to_string());
        self.successes.push(msg.to_string());
    }

    fn error(&mut self, msg: &str) {
        self.lines.push(msg.to_string());
        self.errors.push(msg.to_string());
    }

    fn start_spinner(&mut self, message: &str) -> Box<dyn SpinnerHandle> {
        let spinner = Rc::new(RefCell::new(MockSpinner::new(message)));
        self.spinners.push(Rc::clone(&spinner));
        Box::new(SharedSpinner(spinner))
    }
}

/// Mock spinner that captures its message and finish state.
#[derive(Debug, Clone, Default)]
pub struct MockSpinner {
    message: String,
    finish_message: Option<String>,
    status: Option<SpinnerStatus>,
}

/// Status of a mock spinner when finished.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SpinnerStatus {
    /// Finished successfully.
    Success,
    /// Finished with error.
    Error,
}

impl MockSpinner {
    /// Create a new mock spinner with its starting message.
    pub fn new(message: &str) -> Self {
        Self {
            message: message.to_string(),
            ..Default::default()
        }
    }

    /// Get the message the spinner was started with.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Get the final finish message.
    pub fn finish_message(&self) -> Option<&str> {
        self.finish_message.as_deref()
    }

    /// Get the final status.
    pub fn status(&self) -> Option<SpinnerStatus> {
        self.status
    }
}

impl SpinnerHandle for MockSpinner {
    fn finish_success(&mut self, msg: &str) {
        self.finish_message = Some(msg.to_string());
        self.status = Some(SpinnerStatus::Success);
    }

    fn finish_error(&mut self, msg: &str) {
        self.finish_message = Some(msg.to_string());
        self.status = Some(SpinnerStatus::Error);
    }
}

/// Handle given out by `MockUI` so the UI can still see the spinner's state.
struct SharedSpinner(Rc<RefCell<MockSpinner>>);

impl SpinnerHandle for SharedSpinner {
    fn finish_success(&mut self, msg: &str) {
        self.0.borrow_mut().finish_success(msg);
    }

    fn finish_error(&mut self, msg: &str) {
        self.0.borrow_mut().finish_error(msg);
    }
}
