//! Data models shared by the terminal core and its hosts.
//!
//! - [`TerminalLine`], [`LineStyle`] - Transcript output
//! - [`SessionState`] - Session lifecycle
//! - [`Effect`] - Visual effect requests for the rendering layer

mod effect;
mod terminal;

pub use effect::Effect;
pub use terminal::{LineStyle, SessionState, TerminalLine};
