//! Browser-independent core of the CyberVision terminal.
//!
//! This crate provides:
//! - [`VirtualFs`] and [`ThemeRegistry`], the static data the commands work on
//! - [`CommandHistory`] with a pluggable [`HistoryStore`]
//! - [`CommandInterpreter`], parsing and dispatch of the built-in commands
//! - [`TerminalSession`], which ties everything to a lifecycle and a
//!   virtual-time [`Scheduler`]
//!
//! Hosts supply an [`EffectTrigger`] and a [`Clock`], and drive the session
//! with [`TerminalSession::submit`] and [`TerminalSession::tick`].

mod autocomplete;
pub mod commands;
pub mod config;
pub mod error;
mod filesystem;
pub mod history;
mod host;
mod interpreter;
pub mod models;
mod parser;
mod scheduler;
mod session;
pub mod theme;
mod transcript;

pub use autocomplete::autocomplete;
pub use commands::{COMMAND_NAMES, CommandResult, CommandTable, SessionRequest};
pub use config::SessionConfig;
pub use error::{HistoryError, ThemeError};
pub use filesystem::{ROOT, VirtualFs};
pub use history::{CommandHistory, HistoryStore, MemoryHistoryStore};
pub use host::{Clock, EffectTrigger, FixedClock};
pub use interpreter::{CommandInterpreter, Runtime};
pub use models::{Effect, LineStyle, SessionState, TerminalLine};
pub use parser::{ParsedCommand, parse_input};
pub use scheduler::{Fired, Scheduler, TaskId};
pub use session::{SessionTask, TerminalSession};
pub use theme::{StyleVars, Theme, ThemeName, ThemeRegistry};
pub use transcript::{Transcript, TypingLine};
