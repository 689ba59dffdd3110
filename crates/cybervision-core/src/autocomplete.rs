//! Tab completion of command names.
//!
//! Matches the trimmed input as a case-sensitive prefix against the fixed
//! command set in its declared order. The first match wins, so blank input
//! completes to `help`. There is no cycling and arguments are never
//! completed.

use crate::commands::COMMAND_NAMES;

/// Complete a partially typed command name.
///
/// Returns `None` when nothing matches.
pub fn autocomplete(input: &str) -> Option<&'static str> {
    let partial = input.trim();
    COMMAND_NAMES
        .iter()
        .copied()
        .find(|name| name.starts_with(partial))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_match() {
        assert_eq!(autocomplete("su"), Some("sudo"));
        assert_eq!(autocomplete("th"), Some("theme"));
    }

    #[test]
    fn test_first_match_wins() {
        assert_eq!(autocomplete("c"), Some("clear"));
        assert_eq!(autocomplete("a"), Some("about"));
        assert_eq!(autocomplete("t"), Some("time"));
    }

    #[test]
    fn test_padding_trimmed_case_kept() {
        assert_eq!(autocomplete("  he "), Some("help"));
        assert_eq!(autocomplete("HE"), None);
    }

    #[test]
    fn test_blank_completes_to_first_command() {
        assert_eq!(autocomplete(""), Some("help"));
        assert_eq!(autocomplete("   "), Some("help"));
    }

    #[test]
    fn test_complete_name_is_stable() {
        assert_eq!(autocomplete("ls"), Some("ls"));
    }

    #[test]
    fn test_no_match() {
        assert_eq!(autocomplete("xyz"), None);
        assert_eq!(autocomplete("cd home"), None);
    }
}
