//! Command table and dispatch.
//!
//! This module provides:
//! - [`CommandTable`], a mapping from command name to [`Handler`]
//! - [`CommandContext`], the read-only view a handler works against
//! - [`CommandResult`] and [`SessionRequest`] for what a handler produces
//!
//! # Architecture
//!
//! Every handler has the same signature: it receives the arguments and a
//! [`CommandContext`], and returns output lines plus the state changes it
//! wants. Handlers never mutate session state themselves; the interpreter
//! applies directory changes and the session applies everything else.

mod builtins;
mod result;

pub use result::{CommandResult, SessionRequest};

use std::collections::HashMap;

use rand::RngCore;

use crate::filesystem::VirtualFs;
use crate::host::Clock;
use crate::models::TerminalLine;
use crate::theme::ThemeRegistry;

/// Recognized command names, in completion order.
pub const COMMAND_NAMES: &[&str] = &[
    "help", "clear", "sudo", "exit", "about", "time", "ls", "cd", "cat", "theme", "ai",
];

/// Everything a handler may read while it runs.
pub struct CommandContext<'a> {
    /// Current directory.
    pub cwd: &'a str,
    pub fs: &'a VirtualFs,
    pub themes: &'a ThemeRegistry,
    pub clock: &'a dyn Clock,
    pub rng: &'a mut dyn RngCore,
    /// Whether `sudo hack` already ran in this session.
    pub compromised: bool,
}

/// Uniform handler signature.
pub type Handler = fn(&[String], &mut CommandContext<'_>) -> CommandResult;

/// Registered mapping from command name to handler.
#[derive(Clone)]
pub struct CommandTable {
    handlers: HashMap<&'static str, Handler>,
}

impl CommandTable {
    /// Create an empty table.
    pub fn new() -> Self {
        Self {
            handlers: HashMap::new(),
        }
    }

    /// The terminal's built-in commands.
    pub fn builtin() -> Self {
        let mut table = Self::new();
        table.register("help", builtins::help);
        table.register("clear", builtins::clear);
        table.register("exit", builtins::exit);
        table.register("about", builtins::about);
        table.register("time", builtins::time);
        table.register("ls", builtins::ls);
        table.register("cd", builtins::cd);
        table.register("cat", builtins::cat);
        table.register("theme", builtins::theme);
        table.register("ai", builtins::ai);
        table.register("sudo", builtins::sudo);
        table
    }

    /// Register a handler. Replaces any existing handler with the same name.
    pub fn register(&mut self, name: &'static str, handler: Handler) {
        self.handlers.insert(name, handler);
    }

    pub fn get(&self, name: &str) -> Option<Handler> {
        self.handlers.get(name).copied()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.handlers.contains_key(name)
    }

    /// Run `name` with `args`, answering unknown names with a warning.
    pub fn dispatch(
        &self,
        name: &str,
        args: &[String],
        ctx: &mut CommandContext<'_>,
    ) -> CommandResult {
        match self.get(name) {
            Some(handler) => {
                log::debug!("dispatch {} {:?}", name, args);
                handler(args, ctx)
            }
            None => {
                log::debug!("unknown command {:?}", name);
                CommandResult::line(TerminalLine::warning(format!(
                    "Command not found: {}",
                    name
                )))
            }
        }
    }
}

impl Default for CommandTable {
    fn default() -> Self {
        Self::builtin()
    }
}
