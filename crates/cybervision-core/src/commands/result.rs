//! Command execution result type.

use crate::models::{Effect, TerminalLine};
use crate::theme::ThemeName;

/// State change a handler asks its owner to perform.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SessionRequest {
    /// Replace the current directory (applied by the interpreter).
    ChangeDirectory(String),
    /// Truncate the transcript.
    Clear,
    /// Close the session.
    Close,
    /// Replace the active style variables with this theme's.
    ApplyTheme(ThemeName),
    /// Forward an effect to the rendering layer right away.
    Effect(Effect),
    /// Request a page reload after the configured delay.
    ScheduleReload,
    /// Reveal this line character by character.
    TypeOut(String),
}

/// Result of executing a command.
///
/// Commands produce output lines and optionally request state changes.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CommandResult {
    /// Output lines to append to the transcript
    pub output: Vec<TerminalLine>,
    /// Requests applied after the output is appended
    pub requests: Vec<SessionRequest>,
}

impl CommandResult {
    /// Create a result with just output, no requests.
    pub fn output(lines: Vec<TerminalLine>) -> Self {
        Self {
            output: lines,
            requests: vec![],
        }
    }

    /// Create a single-line result.
    pub fn line(line: TerminalLine) -> Self {
        Self::output(vec![line])
    }

    /// Create a request-only result.
    pub fn request(request: SessionRequest) -> Self {
        Self {
            output: vec![],
            requests: vec![request],
        }
    }

    /// Create an empty result (no output, no requests).
    pub fn empty() -> Self {
        Self::default()
    }

    /// Add a request to this result.
    pub fn with_request(mut self, request: SessionRequest) -> Self {
        self.requests.push(request);
        self
    }

    /// Whether the owner must truncate the transcript.
    pub fn clears(&self) -> bool {
        self.requests.contains(&SessionRequest::Clear)
    }
}
