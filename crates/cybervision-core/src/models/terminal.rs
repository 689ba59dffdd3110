//! Terminal-related data types for output rendering.

use serde::{Deserialize, Serialize};

/// Style class of a transcript line.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LineStyle {
    /// Plain output and echoed input
    #[default]
    Normal,
    /// Boot log and positive confirmations
    Success,
    /// User mistakes and alarming messages
    Warning,
}

impl LineStyle {
    /// CSS class name the rendering layer applies.
    pub fn class_name(self) -> &'static str {
        match self {
            Self::Normal => "normal",
            Self::Success => "success",
            Self::Warning => "warning",
        }
    }
}

/// A single immutable line of terminal output.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TerminalLine {
    pub text: String,
    pub style: LineStyle,
}

impl TerminalLine {
    pub fn new(text: impl Into<String>, style: LineStyle) -> Self {
        Self {
            text: text.into(),
            style,
        }
    }

    pub fn normal(text: impl Into<String>) -> Self {
        Self::new(text, LineStyle::Normal)
    }

    pub fn success(text: impl Into<String>) -> Self {
        Self::new(text, LineStyle::Success)
    }

    pub fn warning(text: impl Into<String>) -> Self {
        Self::new(text, LineStyle::Warning)
    }

    /// Create an empty-content line
    pub fn empty() -> Self {
        Self::normal(String::new())
    }
}

/// Lifecycle of a terminal session.
///
/// `Booting -> Active -> Closed`. `Closed` is terminal until the page reloads.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SessionState {
    #[default]
    Booting,
    Active,
    Closed,
}

impl SessionState {
    /// Whether command input is accepted.
    pub fn accepts_input(self) -> bool {
        matches!(self, Self::Active)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_constructors() {
        assert_eq!(TerminalLine::normal("a").style, LineStyle::Normal);
        assert_eq!(TerminalLine::success("b").style, LineStyle::Success);
        assert_eq!(TerminalLine::warning("c").style, LineStyle::Warning);
        assert_eq!(TerminalLine::empty().text, "");
    }

    #[test]
    fn test_style_serializes_as_class_name() {
        for style in [LineStyle::Normal, LineStyle::Success, LineStyle::Warning] {
            let json = serde_json::to_string(&style).unwrap();
            assert_eq!(json, format!("\"{}\"", style.class_name()));
        }
    }

    #[test]
    fn test_only_active_accepts_input() {
        assert!(!SessionState::Booting.accepts_input());
        assert!(SessionState::Active.accepts_input());
        assert!(!SessionState::Closed.accepts_input());
    }
}
