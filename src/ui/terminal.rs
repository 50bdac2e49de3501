//! Terminal UI writing to stdout.

use console::Term;
use std::io::Write;

use super::{
    should_use_colors, OutputMode, ProbeTheme, ProgressSpinner, SpinnerHandle, UserInterface,
};

/// Terminal UI implementation.
///
/// All diagnostic lines go to stdout, including failures. Only the
/// spinner is drawn, on stderr, and only when stderr is a terminal.
pub struct TerminalUI {
    term: Term,
    theme: ProbeTheme,
    mode: OutputMode,
}

impl TerminalUI {
    /// Create a new terminal UI.
    pub fn new(mode: OutputMode, colors: bool) -> Self {
        Self {
            term: Term::stdout(),
            theme: ProbeTheme::for_colors(colors),
            mode,
        }
    }
}

impl UserInterface for TerminalUI {
    fn output_mode(&self) -> OutputMode {
        self.mode
    }

    fn message(&mut self, msg: &str) {
        if self.mode.shows_status() {
            writeln!(self.term, "{}", msg).ok();
        }
    }

    fn success(&mut self, msg: &str) {
        writeln!(self.term, "{}", self.theme.format_success(msg)).ok();
    }

    fn error(&mut self, msg: &str) {
        writeln!(self.term, "{}", self.theme.format_error(msg)).ok();
    }

    fn start_spinner(&mut self, message: &str) -> Box<dyn SpinnerHandle> {
        if spinner_visible(self.mode, Term::stderr().is_term()) {
            Box::new(ProgressSpinner::new(message, self.theme.clone()))
        } else {
            Box::new(ProgressSpinner::hidden())
        }
    }
}

/// Whether a spinner should be drawn on stderr.
fn spinner_visible(mode: OutputMode, stderr_is_term: bool) -> bool {
    mode.shows_spinners() && stderr_is_term
}

/// Create the UI for this process.
///
/// Colors are used only when `no_color` is unset and stdout is a terminal.
pub fn create_ui(mode: OutputMode, no_color: bool) -> Box<dyn UserInterface> {
    let colors = !no_color && should_use_colors();
    Box::new(TerminalUI::new(mode, colors))
}
