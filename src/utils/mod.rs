//! Browser-side utilities.
//!
//! Provides:
//! - [`dom`] - safe access to window, document and storage
//! - [`LocalStorageHistory`] - command history persisted in localStorage
//! - [`DomEffects`], [`BrowserClock`] - session collaborators
//! - [`logger`] - `log` backend writing to the console

pub mod dom;
mod effects;
pub mod logger;
mod storage;

pub use effects::{BrowserClock, DomEffects};
pub use storage::LocalStorageHistory;
