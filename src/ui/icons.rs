//! Line markers used in probe output.
//!
//! Every diagnostic line starts with one of these so the output stays
//! scannable in CI logs.

/// Marker placed in front of a diagnostic line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Marker {
    /// The request about to be sent.
    Probe,
    /// Request parameters or a payload dump.
    Detail,
    /// HTTP status line.
    Status,
    /// Top-level document keys.
    Keys,
    /// Record count.
    Count,
    /// Keys found while looking inside a record.
    Inspect,
    /// Timing information.
    Timing,
    /// Something that was expected was found.
    Success,
    /// Something that was expected was missing or failed.
    Failed,
}

impl Marker {
    /// Emoji for this marker.
    pub fn icon(self) -> &'static str {
        match self {
            Self::Probe => "🧪",
            Self::Detail => "📋",
            Self::Status => "📡",
            Self::Keys => "📊",
            Self::Count => "📦",
            Self::Inspect => "🔍",
            Self::Timing => "⏱",
            Self::Success => "✅",
            Self::Failed => "❌",
        }
    }

    /// Format a line: icon + message.
    pub fn format(self, msg: &str) -> String {
        format!("{} {}", self.icon(), msg)
    }
}
