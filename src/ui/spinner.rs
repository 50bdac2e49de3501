//! Progress spinner shown while waiting for the response.

use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

use super::theme::ProbeTheme;
use super::SpinnerHandle;

/// A spinner drawn on stderr while the request is in flight.
pub struct ProgressSpinner {
    bar: ProgressBar,
    theme: ProbeTheme,
}

impl ProgressSpinner {
    /// Create a new spinner with a message.
    pub fn new(message: &str, theme: ProbeTheme) -> Self {
        let bar = ProgressBar::new_spinner();
        if let Ok(style) = ProgressStyle::default_spinner()
            .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏")
            .template("{spinner:.magenta} {msg}")
        {
            bar.set_style(style);
        }
        bar.set_message(message.to_string());
        bar.enable_steady_tick(Duration::from_millis(80));

        Self { bar, theme }
    }

    /// Create a spinner that doesn't draw anything.
    pub fn hidden() -> Self {
        Self {
            bar: ProgressBar::hidden(),
            theme: ProbeTheme::plain(),
        }
    }

    /// Whether this spinner draws nothing.
    pub fn is_hidden(&self) -> bool {
        self.bar.is_hidden()
    }
}

impl SpinnerHandle for ProgressSpinner {
    fn finish_success(&mut self, msg: &str) {
        self.bar
            .finish_with_message(self.theme.format_dim(&format!("✓ {}", msg)));
    }

    fn finish_error(&mut self, msg: &str) {
        self.bar
            .finish_with_message(self.theme.format_dim(&format!("✗ {}", msg)));
    }
}
