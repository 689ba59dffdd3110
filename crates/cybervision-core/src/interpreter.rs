//! Command interpreter: parsing, dispatch and current-directory state.

use rand::RngCore;

use crate::commands::{CommandContext, CommandResult, CommandTable, SessionRequest};
use crate::filesystem::{ROOT, VirtualFs};
use crate::host::Clock;
use crate::parser::{ParsedCommand, parse_input};
use crate::theme::ThemeRegistry;

/// Session services a dispatch needs besides the interpreter's own state.
pub struct Runtime<'a> {
    pub clock: &'a dyn Clock,
    pub rng: &'a mut dyn RngCore,
    pub compromised: bool,
}

/// Parses input lines and runs them through the command table.
///
/// Owns the current directory, which starts at `/` and only changes when
/// `cd` succeeds.
#[derive(Clone)]
pub struct CommandInterpreter {
    cwd: String,
    fs: VirtualFs,
    themes: ThemeRegistry,
    table: CommandTable,
}

impl CommandInterpreter {
    pub fn new(fs: VirtualFs, themes: ThemeRegistry) -> Self {
        Self::with_table(fs, themes, CommandTable::builtin())
    }

    pub fn with_table(fs: VirtualFs, themes: ThemeRegistry, table: CommandTable) -> Self {
        Self {
            cwd: ROOT.to_string(),
            fs,
            themes,
            table,
        }
    }

    pub fn cwd(&self) -> &str {
        &self.cwd
    }

    pub fn themes(&self) -> &ThemeRegistry {
        &self.themes
    }

    pub fn parse(&self, raw: &str) -> ParsedCommand {
        parse_input(raw)
    }

    /// Run a parsed command.
    ///
    /// Directory changes are applied here and removed from the returned
    /// requests; every other request is left for the caller.
    pub fn dispatch(&mut self, command: &ParsedCommand, runtime: Runtime<'_>) -> CommandResult {
        let mut ctx = CommandContext {
            cwd: &self.cwd,
            fs: &self.fs,
            themes: &self.themes,
            clock: runtime.clock,
            rng: runtime.rng,
            compromised: runtime.compromised,
        };
        let mut result = self.table.dispatch(&command.name, &command.args, &mut ctx);

        let mut new_cwd = None;
        result.requests.retain(|request| match request {
            SessionRequest::ChangeDirectory(path) => {
                new_cwd = Some(path.clone());
                false
            }
            _ => true,
        });
        if let Some(path) = new_cwd {
            log::debug!("cwd {} -> {}", self.cwd, path);
            self.cwd = path;
        }

        result
    }
}

impl Default for CommandInterpreter {
    fn default() -> Self {
        Self::new(VirtualFs::builtin(), ThemeRegistry::builtin())
    }
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::*;
    use crate::host::FixedClock;
    use crate::models::TerminalLine;

    fn exec(interp: &mut CommandInterpreter, line: &str) -> CommandResult {
        let clock = FixedClock(String::new());
        let mut rng = StdRng::seed_from_u64(1);
        let parsed = interp.parse(line);
        interp.dispatch(
            &parsed,
            Runtime {
                clock: &clock,
                rng: &mut rng,
                compromised: false,
            },
        )
    }

    #[test]
    fn test_starts_at_root() {
        assert_eq!(CommandInterpreter::default().cwd(), "/");
    }

    #[test]
    fn test_cd_then_ls_lists_registered_children() {
        let mut interp = CommandInterpreter::default();
        for (dir, expected) in [
            ("home", "user   projects"),
            ("user", "notes.txt   diary.log"),
            ("/system", "kernel.log   drivers   secrets"),
        ] {
            let result = exec(&mut interp, &format!("cd {}", dir));
            assert!(result.requests.is_empty(), "cd request must be consumed");
            assert_eq!(exec(&mut interp, "ls").output, vec![TerminalLine::normal(expected)]);
        }
        assert_eq!(interp.cwd(), "/system");
    }

    #[test]
    fn test_failed_cd_keeps_cwd() {
        let mut interp = CommandInterpreter::default();
        exec(&mut interp, "cd home");
        exec(&mut interp, "cd nowhere");
        exec(&mut interp, "cd ..");
        assert_eq!(interp.cwd(), "/home");
    }

    #[test]
    fn test_cat_is_relative_to_cwd() {
        let mut interp = CommandInterpreter::default();
        exec(&mut interp, "cd /home/user");
        let result = exec(&mut interp, "cat notes.txt");
        assert_eq!(result.output.len(), 2);
        let result = exec(&mut interp, "cat readme.txt");
        assert_eq!(
            result.output,
            vec![TerminalLine::warning("No such file: readme.txt")]
        );
    }

    #[test]
    fn test_command_name_case_insensitive() {
        let mut interp = CommandInterpreter::default();
        let result = exec(&mut interp, "CD home");
        assert_eq!(
            result.output,
            vec![TerminalLine::normal("Directory changed: /home")]
        );
        assert_eq!(interp.cwd(), "/home");
    }

    #[test]
    fn test_other_requests_pass_through() {
        let mut interp = CommandInterpreter::default();
        assert_eq!(
            exec(&mut interp, "clear").requests,
            vec![SessionRequest::Clear]
        );
    }
}
