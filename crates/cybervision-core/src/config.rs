//! Terminal configuration.
//!
//! Centralizes the constants the terminal core runs on: product metadata,
//! storage keys, timings, and the static tables behind the fake filesystem,
//! the theme registry and the AI replies. Text assets are loaded at compile
//! time using `include_str!`.

use serde::{Deserialize, Serialize};

// =============================================================================
// Text Assets (loaded at compile time)
// =============================================================================

/// Help text for the `help` command.
pub const HELP_TEXT: &str = include_str!("../assets/text/help.txt");

/// Boot log, one line per entry, emitted while the session is booting.
pub const BOOT_LOG: &str = include_str!("../assets/text/boot.txt");

// =============================================================================
// Application Metadata
// =============================================================================

/// Product name shown by `about`.
pub const APP_NAME: &str = "CyberVision Terminal";

/// Product version shown by `about`.
pub const APP_VERSION: &str = "2.5";

/// Edition tag appended to the `about` line.
pub const APP_EDITION: &str = "neon edition";

// =============================================================================
// Persistence
// =============================================================================

/// localStorage key holding the serialized command history.
pub const HISTORY_STORAGE_KEY: &str = "terminalHistory";

// =============================================================================
// Timing
// =============================================================================

/// Scheduler delays in milliseconds.
pub mod delays {
    /// Interval between two boot log lines.
    pub const BOOT_LINE_INTERVAL_MS: u64 = 700;
    /// Interval between two revealed characters of a typed reply.
    pub const TYPING_INTERVAL_MS: u64 = 30;
    /// Delay between `sudo @kill` and the reload request.
    pub const KILL_RELOAD_DELAY_MS: u64 = 1500;
}

/// Session timings, overridable by the host.
///
/// Missing fields fall back to the [`delays`] constants when deserialized.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    pub boot_line_interval_ms: u64,
    pub typing_interval_ms: u64,
    pub reload_delay_ms: u64,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            boot_line_interval_ms: delays::BOOT_LINE_INTERVAL_MS,
            typing_interval_ms: delays::TYPING_INTERVAL_MS,
            reload_delay_ms: delays::KILL_RELOAD_DELAY_MS,
        }
    }
}

// =============================================================================
// Fake Filesystem
// =============================================================================

/// Directory table of the built-in filesystem: path and ordered children.
pub const FILESYSTEM: &[(&str, &[&str])] = &[
    ("/", &["home", "system", "readme.txt"]),
    ("/home", &["user", "projects"]),
    ("/system", &["kernel.log", "drivers", "secrets"]),
    ("/home/user", &["notes.txt", "diary.log"]),
    ("/home/projects", &["hack.js", "ai-core.bin"]),
];

/// Placeholder content printed by `cat` for names containing `txt`.
pub const CAT_TEXT_CONTENT: &str = ">>> Encrypted neon data...";

/// Placeholder content printed by `cat` for every other file.
pub const CAT_BINARY_CONTENT: &str = ">>> Binary stream...";

// =============================================================================
// Themes
// =============================================================================

/// Style variables of the `dark` theme.
pub const THEME_DARK: &[(&str, &str)] = &[
    ("--primary-color", "#0ff"),
    ("--secondary-color", "#0f0"),
    ("--bg-color", "#000"),
    ("--success-color", "#0f0"),
    ("--warning-color", "#ff0"),
];

/// Style variables of the `neon` theme.
pub const THEME_NEON: &[(&str, &str)] = &[
    ("--primary-color", "#ff00ff"),
    ("--secondary-color", "#00ffff"),
    ("--bg-color", "#0a0a0a"),
    ("--success-color", "#0f0"),
    ("--warning-color", "#f80"),
];

/// Style variables of the `green` theme.
pub const THEME_GREEN: &[(&str, &str)] = &[
    ("--primary-color", "#0f0"),
    ("--secondary-color", "#9f9"),
    ("--bg-color", "#001100"),
    ("--success-color", "#0f0"),
    ("--warning-color", "#ff0"),
];

// =============================================================================
// AI Replies
// =============================================================================

/// Canned replies for the `ai` command, chosen uniformly at random.
pub const AI_RESPONSES: &[&str] = &[
    "The grid hums with neon life.",
    "Data flows like rivers in the dark.",
    "Your words are fragments of the machine.",
    "I sense corruption... in the code.",
    "Your query is absorbed into the void.",
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filesystem_has_root() {
        assert!(FILESYSTEM.iter().any(|(path, _)| *path == "/"));
    }

    #[test]
    fn test_boot_log_lines() {
        let lines: Vec<&str> = BOOT_LOG.lines().collect();
        assert_eq!(lines.len(), 5);
        assert!(lines[0].starts_with("[OK]"));
        assert!(lines[4].starts_with("[READY]"));
    }

    #[test]
    fn test_session_config_partial_json() {
        let config: SessionConfig = serde_json::from_str(r#"{"typing_interval_ms": 5}"#)
            .expect("partial config should deserialize");
        assert_eq!(config.typing_interval_ms, 5);
        assert_eq!(config.boot_line_interval_ms, delays::BOOT_LINE_INTERVAL_MS);
        assert_eq!(config.reload_delay_ms, delays::KILL_RELOAD_DELAY_MS);
    }
}
