//! Root application module.
//!
//! Owns the [`TerminalSession`] for the page and mirrors the parts the view
//! renders into Leptos signals. The session itself is not reactive: every
//! mutation goes through [`AppContext`], which re-syncs the signals
//! afterwards.

use cybervision_core::{CommandHistory, SessionState, StyleVars, TerminalLine, TerminalSession};
use gloo_timers::callback::Interval;
use leptos::prelude::*;

use crate::components::Terminal;
use crate::config::TICK_INTERVAL_MS;
use crate::utils::dom;
use crate::utils::{BrowserClock, DomEffects, LocalStorageHistory};

// ============================================================================
// TerminalView
// ============================================================================

/// Render-side snapshot of a session.
///
/// This struct is `Copy` because all fields are Leptos signals.
#[derive(Clone, Copy)]
pub struct TerminalView {
    /// Committed transcript lines with their stable keys.
    pub lines: RwSignal<Vec<(u64, TerminalLine)>>,
    /// Visible prefix of the line being typed out, if any.
    pub typing: RwSignal<Option<String>>,
    pub state: RwSignal<SessionState>,
    /// Variables of the active theme.
    pub style_vars: RwSignal<StyleVars>,
}

impl TerminalView {
    fn new() -> Self {
        Self {
            lines: RwSignal::new(Vec::new()),
            typing: RwSignal::new(None),
            state: RwSignal::new(SessionState::Booting),
            style_vars: RwSignal::new(StyleVars::new()),
        }
    }
}

// ============================================================================
// AppContext
// ============================================================================

/// Handle to the page's session, shared with every component.
#[derive(Clone, Copy)]
pub struct AppContext {
    session: StoredValue<TerminalSession, LocalStorage>,
    /// `(next_key, len)` of the transcript at the last sync.
    synced: StoredValue<(u64, usize)>,
    pub view: TerminalView,
}

impl AppContext {
    pub fn new(session: TerminalSession) -> Self {
        let ctx = Self {
            session: StoredValue::new_local(session),
            synced: StoredValue::new((u64::MAX, 0)),
            view: TerminalView::new(),
        };
        ctx.sync();
        ctx
    }

    /// Start the boot sequence with the scheduler aligned to page time.
    pub fn boot(&self) {
        self.session.update_value(|s| {
            s.tick(dom::now_ms());
            s.boot();
        });
        self.sync();
    }

    /// Advance the session to `now_ms`, re-syncing only if something ran.
    pub fn tick(&self, now_ms: u64) {
        let ran = self
            .session
            .try_update_value(|s| {
                let due = s.next_deadline().is_some_and(|d| d <= now_ms);
                s.tick(now_ms);
                due
            })
            .unwrap_or(false);
        if ran {
            self.sync();
        }
    }

    pub fn submit(&self, line: &str) {
        self.session.update_value(|s| s.submit(line));
        self.sync();
    }

    pub fn recall_previous(&self) -> Option<String> {
        self.session
            .try_update_value(|s| s.recall_previous().map(str::to_string))
            .flatten()
    }

    pub fn recall_next(&self) -> Option<String> {
        self.session
            .try_update_value(|s| s.recall_next().map(str::to_string))
            .flatten()
    }

    pub fn complete(&self, partial: &str) -> Option<&'static str> {
        self.session.try_with_value(|s| s.complete(partial)).flatten()
    }

    /// Cancel every pending task of the session.
    pub fn shutdown(&self) {
        self.session.try_update_value(|s| s.shutdown());
    }

    /// Copy session state into the view signals, touching only what changed.
    fn sync(&self) {
        let Some((lines, typing, state, vars)) = self.session.try_with_value(|s| {
            let transcript = s.transcript();
            let signature = (transcript.next_key(), transcript.len());
            let lines = (self.synced.get_value() != signature).then(|| {
                self.synced.set_value(signature);
                transcript
                    .keyed()
                    .map(|(key, line)| (key, line.clone()))
                    .collect::<Vec<_>>()
            });
            let typing = transcript.typing().map(|t| t.visible().to_string());
            (lines, typing, s.state(), s.style_vars().clone())
        }) else {
            return;
        };

        if let Some(lines) = lines {
            self.view.lines.set(lines);
        }
        if self.view.typing.with_untracked(|t| *t != typing) {
            self.view.typing.set(typing);
        }
        if self.view.state.get_untracked() != state {
            self.view.state.set(state);
        }
        if self.view.style_vars.with_untracked(|v| *v != vars) {
            self.view.style_vars.set(vars);
        }
    }
}

// ============================================================================
// Setup
// ============================================================================

fn build_session() -> TerminalSession {
    let history = CommandHistory::load(Box::new(LocalStorageHistory::new()));
    TerminalSession::new(history, Box::new(DomEffects), Box::new(BrowserClock))
}

/// Drive the scheduler from a repeating timer until the app is disposed.
fn setup_ticker(ctx: AppContext) {
    let interval = Interval::new(TICK_INTERVAL_MS, move || ctx.tick(dom::now_ms()));
    let handle = StoredValue::new_local(Some(interval));

    on_cleanup(move || {
        ctx.shutdown();
        handle.try_update_value(|h| h.take());
        log::debug!("terminal ticker stopped");
    });
}

/// Root application component.
#[component]
pub fn App() -> impl IntoView {
    let ctx = AppContext::new(build_session());
    provide_context(ctx);

    ctx.boot();
    setup_ticker(ctx);

    view! { <Terminal /> }
}
