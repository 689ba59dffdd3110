//! Front-end configuration.
//!
//! Terminal behavior constants (timings, themes, texts) live in
//! [`cybervision_core::config`]; this module only holds what the browser
//! shell needs.

// =============================================================================
// Mounting
// =============================================================================

/// Id of the element the application mounts into.
pub const MOUNT_ID: &str = "app";

// =============================================================================
// Timing
// =============================================================================

/// Period of the timer that advances the session scheduler.
pub const TICK_INTERVAL_MS: u32 = 16;

// =============================================================================
// Effects
// =============================================================================

/// Body class toggled on by `sudo hack`.
pub const GLITCH_BODY_CLASS: &str = "site-glitch";

/// Body class toggled on by `sudo matrix`.
pub const MATRIX_BODY_CLASS: &str = "matrix-rain";

// =============================================================================
// Prompt
// =============================================================================

/// Marker rendered before echoed commands and the input line.
pub const PROMPT: &str = ">";
