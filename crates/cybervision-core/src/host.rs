//! Collaborators a host injects into a [`TerminalSession`](crate::TerminalSession).

use crate::models::Effect;

/// Receives effect requests and performs the visual side effect.
pub trait EffectTrigger {
    fn trigger(&mut self, effect: Effect);
}

/// Wall-clock source for the `time` command.
pub trait Clock {
    /// Current local date and time, formatted for the user's locale.
    fn local_timestamp(&self) -> String;
}

/// [`Clock`] that always reports the same timestamp.
#[derive(Clone, Debug)]
pub struct FixedClock(pub String);

impl Clock for FixedClock {
    fn local_timestamp(&self) -> String {
        self.0.clone()
    }
}
