//! Visual theme and styling.

use console::Style;

/// Styles applied to probe output.
#[derive(Debug, Clone)]
pub struct ProbeTheme {
    /// Style for verdict lines that passed (green).
    pub success: Style,
    /// Style for verdict lines that failed (red bold).
    pub error: Style,
    /// Style for dim/secondary text.
    pub dim: Style,
}

impl Default for ProbeTheme {
    fn default() -> Self {
        Self::new()
    }
}

impl ProbeTheme {
    /// Create the default colored theme.
    pub fn new() -> Self {
        Self {
            success: Style::new().green(),
            error: Style::new().red().bold(),
            dim: Style::new().dim(),
        }
    }

    /// Create a theme without colors (for non-TTY or --no-color).
    pub fn plain() -> Self {
        Self {
            success: Style::new(),
            error: Style::new(),
            dim: Style::new(),
        }
    }

    /// Pick the colored or plain theme.
    pub fn for_colors(colors: bool) -> Self {
        if colors {
            Self::new()
        } else {
            Self::plain()
        }
    }

    /// Format a success line.
    pub fn format_success(&self, msg: &str) -> String {
        self.success.apply_to(msg).to_string()
    }

    /// Format an error line.
    pub fn format_error(&self, msg: &str) -> String {
        self.error.apply_to(msg).to_string()
    }

    /// Format secondary text.
    pub fn format_dim(&self, msg: &str) -> String {
        self.dim.apply_to(msg).to_string()
    }
}

/// Check if colors should be enabled.
pub fn should_use_colors() -> bool {
    // https://no-color.org/
    if std::env::var("NO_COLOR").is_ok() {
        return false;
    }

    console::Term::stdout().is_term()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_theme_leaves_text_untouched() {
        let theme = ProbeTheme::plain();
        assert_eq!(theme.format_success("✅ ok"), "✅ ok");
        assert_eq!(theme.format_error("❌ bad"), "❌ bad");
        assert_eq!(theme.format_dim("waiting"), "waiting");
    }

    #[test]
    fn colored_theme_keeps_text() {
        let theme = ProbeTheme::new();
        assert!(theme.format_success("found").contains("found"));
        assert!(theme.format_error("missing").contains("missing"));
    }

    #[test]
    fn for_colors_false_is_plain() {
        let theme = ProbeTheme::for_colors(false);
        assert_eq!(theme.format_error("x"), "x");
    }
}
