//! Terminal session orchestration.
//!
//! A [`TerminalSession`] owns everything one terminal needs: the
//! interpreter (with its current directory), the command history, the
//! transcript, the lifecycle state and a [`Scheduler`] for the timed parts
//! (boot log, typed AI replies, delayed reload). Hosts drive it with two
//! calls: [`TerminalSession::submit`] for input lines and
//! [`TerminalSession::tick`] with the current monotonic time.

use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::autocomplete::autocomplete;
use crate::commands::SessionRequest;
use crate::config::{BOOT_LOG, SessionConfig};
use crate::history::CommandHistory;
use crate::host::{Clock, EffectTrigger};
use crate::interpreter::{CommandInterpreter, Runtime};
use crate::models::{Effect, SessionState, TerminalLine};
use crate::scheduler::{Scheduler, TaskId};
use crate::theme::{StyleVars, ThemeName};
use crate::transcript::Transcript;

/// Timed work owned by a session.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionTask {
    /// Emit the next boot log line.
    BootLine,
    /// Reveal one more character of the typed line.
    TypeReveal,
    /// Ask the rendering layer for a page reload.
    Reload,
}

pub struct TerminalSession {
    state: SessionState,
    interpreter: CommandInterpreter,
    history: CommandHistory,
    transcript: Transcript,
    scheduler: Scheduler<SessionTask>,
    effects: Box<dyn EffectTrigger>,
    clock: Box<dyn Clock>,
    rng: StdRng,
    config: SessionConfig,
    boot_started: bool,
    boot_emitted: usize,
    active_theme: Option<ThemeName>,
    style_vars: StyleVars,
    compromised: bool,
}

impl TerminalSession {
    /// Create a session in the `Booting` state with the built-in
    /// filesystem, themes and commands.
    pub fn new(
        history: CommandHistory,
        effects: Box<dyn EffectTrigger>,
        clock: Box<dyn Clock>,
    ) -> Self {
        Self {
            state: SessionState::Booting,
            interpreter: CommandInterpreter::default(),
            history,
            transcript: Transcript::new(),
            scheduler: Scheduler::new(),
            effects,
            clock,
            rng: StdRng::from_entropy(),
            config: SessionConfig::default(),
            boot_started: false,
            boot_emitted: 0,
            active_theme: None,
            style_vars: StyleVars::new(),
            compromised: false,
        }
    }

    pub fn with_interpreter(mut self, interpreter: CommandInterpreter) -> Self {
        self.interpreter = interpreter;
        self
    }

    pub fn with_rng(mut self, rng: StdRng) -> Self {
        self.rng = rng;
        self
    }

    pub fn with_config(mut self, config: SessionConfig) -> Self {
        self.config = config;
        self
    }

    // -- Lifecycle --

    /// Start the boot sequence.
    ///
    /// Boot log lines are emitted one per boot interval as the session is
    /// ticked; the session turns `Active` right after the last one. Calling
    /// this more than once has no effect.
    pub fn boot(&mut self) {
        if self.state != SessionState::Booting || self.boot_started {
            return;
        }
        self.boot_started = true;
        log::info!("terminal booting");

        if BOOT_LOG.lines().next().is_none() {
            self.activate();
            return;
        }
        self.scheduler
            .schedule_repeating(self.config.boot_line_interval_ms, SessionTask::BootLine);
    }

    /// Advance the session clock and run every task that came due.
    pub fn tick(&mut self, now_ms: u64) {
        for fired in self.scheduler.advance_to(now_ms) {
            self.run_task(fired.id, fired.task, fired.runs);
        }
    }

    /// Tear the session down: cancel pending tasks and stop accepting input.
    pub fn shutdown(&mut self) {
        let canceled = self.scheduler.cancel_all();
        log::debug!("session shutdown, {} pending tasks canceled", canceled);
        self.state = SessionState::Closed;
    }

    // -- Input --

    /// Submit an input line.
    ///
    /// Ignored unless the session is `Active` and the line is non-blank.
    /// The echoed line precedes the command output; a `clear` truncates the
    /// transcript instead.
    pub fn submit(&mut self, raw: &str) {
        if !self.state.accepts_input() {
            return;
        }
        let line = raw.trim();
        if line.is_empty() {
            return;
        }

        // Output of the previous command lands before the next echo.
        self.stop_typing(true);

        self.transcript.push(TerminalLine::normal(line));
        self.history.record(line);

        let parsed = self.interpreter.parse(line);
        let result = self.interpreter.dispatch(
            &parsed,
            Runtime {
                clock: self.clock.as_ref(),
                rng: &mut self.rng,
                compromised: self.compromised,
            },
        );

        if result.clears() {
            self.stop_typing(false);
            self.transcript.clear();
        } else {
            self.transcript.extend(result.output);
        }

        for request in result.requests {
            self.apply(request);
        }
    }

    /// Previous history entry for the input line.
    pub fn recall_previous(&mut self) -> Option<&str> {
        if !self.state.accepts_input() {
            return None;
        }
        self.history.recall_previous()
    }

    /// Next history entry for the input line, `""` for the fresh line.
    pub fn recall_next(&mut self) -> Option<&str> {
        if !self.state.accepts_input() {
            return None;
        }
        self.history.recall_next()
    }

    /// Tab completion of the command name.
    pub fn complete(&self, partial: &str) -> Option<&'static str> {
        autocomplete(partial)
    }

    // -- Accessors --

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn cwd(&self) -> &str {
        self.interpreter.cwd()
    }

    pub fn transcript(&self) -> &Transcript {
        &self.transcript
    }

    pub fn history(&self) -> &CommandHistory {
        &self.history
    }

    pub fn active_theme(&self) -> Option<ThemeName> {
        self.active_theme
    }

    /// Style variables of the active theme, empty before any `theme`.
    pub fn style_vars(&self) -> &StyleVars {
        &self.style_vars
    }

    pub fn is_compromised(&self) -> bool {
        self.compromised
    }

    /// Deadline of the next scheduled task, in host milliseconds.
    pub fn next_deadline(&self) -> Option<u64> {
        self.scheduler.next_deadline()
    }

    pub fn pending_tasks(&self) -> usize {
        self.scheduler.len()
    }

    // -- Internals --

    fn activate(&mut self) {
        self.state = SessionState::Active;
        log::info!("terminal active");
    }

    /// Run `task` for `runs` elapsed periods, stopping as soon as it has
    /// nothing left to do.
    fn run_task(&mut self, id: TaskId, task: SessionTask, runs: u64) {
        match task {
            SessionTask::BootLine => {
                for _ in 0..runs {
                    if self.emit_boot_line() {
                        self.scheduler.cancel(id);
                        self.activate();
                        break;
                    }
                }
            }
            SessionTask::TypeReveal => {
                for _ in 0..runs {
                    if self.transcript.advance_typing() {
                        self.scheduler.cancel(id);
                        break;
                    }
                }
            }
            SessionTask::Reload => {
                log::info!("reloading page");
                self.effects.trigger(Effect::Reload);
            }
        }
    }

    /// Append the next boot log line. Returns `true` once the log is done.
    fn emit_boot_line(&mut self) -> bool {
        if let Some(text) = BOOT_LOG.lines().nth(self.boot_emitted) {
            self.transcript.push(TerminalLine::success(text));
            self.boot_emitted += 1;
        }
        BOOT_LOG.lines().nth(self.boot_emitted).is_none()
    }

    fn apply(&mut self, request: SessionRequest) {
        match request {
            SessionRequest::Clear => {}
            SessionRequest::Close => {
                self.scheduler.cancel_all();
                self.state = SessionState::Closed;
                log::info!("terminal closed");
            }
            SessionRequest::ApplyTheme(name) => {
                if let Some(theme) = self.interpreter.themes().get(name) {
                    self.style_vars = theme.vars.clone();
                    self.active_theme = Some(name);
                }
            }
            SessionRequest::Effect(effect) => {
                if effect == Effect::Glitch {
                    self.compromised = true;
                }
                self.effects.trigger(effect);
            }
            SessionRequest::ScheduleReload => {
                self.scheduler
                    .schedule_once(self.config.reload_delay_ms, SessionTask::Reload);
            }
            SessionRequest::TypeOut(text) => {
                self.stop_typing(true);
                self.transcript.start_typing(TerminalLine::normal(text));
                self.scheduler
                    .schedule_repeating(self.config.typing_interval_ms, SessionTask::TypeReveal);
            }
            SessionRequest::ChangeDirectory(path) => {
                log::warn!("unapplied directory change to {}", path);
            }
        }
    }

    /// Cancel reveal ticks, committing or dropping the partial line.
    fn stop_typing(&mut self, commit: bool) {
        self.scheduler
            .cancel_where(|task| *task == SessionTask::TypeReveal);
        if commit {
            self.transcript.finish_typing();
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use super::*;
    use crate::history::MemoryHistoryStore;
    use crate::host::FixedClock;
    use crate::models::LineStyle;

    #[derive(Clone, Default)]
    struct Recorder(Rc<RefCell<Vec<Effect>>>);

    impl EffectTrigger for Recorder {
        fn trigger(&mut self, effect: Effect) {
            self.0.borrow_mut().push(effect);
        }
    }

    fn session() -> (TerminalSession, Recorder) {
        let effects = Recorder::default();
        let session = TerminalSession::new(
            CommandHistory::load(Box::new(MemoryHistoryStore::new())),
            Box::new(effects.clone()),
            Box::new(FixedClock("noon".to_string())),
        )
        .with_rng(StdRng::seed_from_u64(3));
        (session, effects)
    }

    fn active_session() -> (TerminalSession, Recorder) {
        let (mut s, effects) = session();
        s.boot();
        s.tick(10_000);
        assert_eq!(s.state(), SessionState::Active);
        (s, effects)
    }

    fn texts(s: &TerminalSession) -> Vec<&str> {
        s.transcript().lines().iter().map(|l| l.text.as_str()).collect()
    }

    #[test]
    fn test_boot_emits_lines_on_schedule() {
        let (mut s, _) = session();
        assert_eq!(s.state(), SessionState::Booting);
        s.boot();
        s.tick(699);
        assert!(s.transcript().is_empty());
        s.tick(700);
        assert_eq!(texts(&s), vec!["[OK] Initializing CyberVision Terminal v2.5"]);
        s.tick(2800);
        assert_eq!(s.transcript().len(), 4);
        assert_eq!(s.state(), SessionState::Booting);
        s.tick(3500);
        assert_eq!(s.transcript().len(), 5);
        assert!(s.transcript().lines().iter().all(|l| l.style == LineStyle::Success));
        assert_eq!(s.state(), SessionState::Active);
        assert_eq!(s.pending_tasks(), 0);
    }

    #[test]
    fn test_input_ignored_while_booting() {
        let (mut s, _) = session();
        s.boot();
        s.submit("help");
        s.tick(700);
        assert_eq!(s.transcript().len(), 1);
        assert!(s.history().is_empty());
    }

    #[test]
    fn test_boot_twice_is_noop() {
        let (mut s, _) = session();
        s.boot();
        s.boot();
        s.tick(700);
        assert_eq!(s.transcript().len(), 1);
    }

    #[test]
    fn test_submit_echo_then_output() {
        let (mut s, _) = active_session();
        let before = s.transcript().len();
        s.submit("  about  ");
        let lines = &s.transcript().lines()[before..];
        assert_eq!(lines[0], TerminalLine::normal("about"));
        assert_eq!(
            lines[1],
            TerminalLine::normal("CyberVision Terminal v2.5 - neon edition")
        );
        assert_eq!(s.history().entries(), ["about"]);
    }

    #[test]
    fn test_blank_submit_is_noop() {
        let (mut s, _) = active_session();
        let before = s.transcript().len();
        s.submit("   ");
        assert_eq!(s.transcript().len(), before);
        assert!(s.history().is_empty());
    }

    #[test]
    fn test_unknown_command_is_recorded() {
        let (mut s, _) = active_session();
        s.submit("Dance");
        assert_eq!(
            s.transcript().lines().last(),
            Some(&TerminalLine::warning("Command not found: dance"))
        );
        assert_eq!(s.history().entries(), ["Dance"]);
    }

    #[test]
    fn test_clear_keeps_state_and_cwd() {
        let (mut s, _) = active_session();
        s.submit("cd home");
        s.submit("clear");
        assert!(s.transcript().is_empty());
        assert_eq!(s.state(), SessionState::Active);
        assert_eq!(s.cwd(), "/home");
        assert_eq!(s.history().entries(), ["cd home", "clear"]);
    }

    #[test]
    fn test_ai_reply_typed_out() {
        let (mut s, _) = active_session();
        s.submit("ai hello");
        let echo_len = s.transcript().len();
        let reply = s
            .transcript()
            .typing()
            .map(|t| t.line().text.clone())
            .expect("reply is being typed");
        assert!(reply.starts_with("AI: "));

        let start = 10_000;
        s.tick(start + 30);
        assert_eq!(s.transcript().typing().map(|t| t.visible()), Some("A"));
        s.tick(start + 30 * reply.chars().count() as u64);
        assert!(s.transcript().typing().is_none());
        assert_eq!(s.transcript().len(), echo_len + 1);
        assert_eq!(s.transcript().lines().last(), Some(&TerminalLine::normal(reply)));
        assert_eq!(s.pending_tasks(), 0);
    }

    #[test]
    fn test_ai_reply_survives_long_gap() {
        let (mut s, _) = active_session();
        s.submit("ai hello");
        let reply = s.transcript().typing().unwrap().line().clone();
        s.tick(10_000 + 86_400_000);
        assert!(s.transcript().typing().is_none());
        assert_eq!(s.transcript().lines().last(), Some(&reply));
        assert_eq!(s.pending_tasks(), 0);
    }

    #[test]
    fn test_submit_flushes_typing_first() {
        let (mut s, _) = active_session();
        s.submit("ai hi");
        let reply = s.transcript().typing().unwrap().line().clone();
        s.submit("time");
        let tail: Vec<&TerminalLine> = s.transcript().lines().iter().rev().take(3).collect();
        assert_eq!(*tail[2], reply);
        assert_eq!(*tail[1], TerminalLine::normal("time"));
        assert_eq!(*tail[0], TerminalLine::normal("noon"));
        assert_eq!(s.pending_tasks(), 0);
    }

    #[test]
    fn test_clear_cancels_typing() {
        let (mut s, _) = active_session();
        s.submit("ai hi");
        s.submit("clear");
        assert!(s.transcript().typing().is_none());
        s.tick(20_000);
        assert!(s.transcript().is_empty());
    }

    #[test]
    fn test_theme_replaces_style_vars() {
        let (mut s, _) = active_session();
        assert!(s.style_vars().is_empty());
        s.submit("theme neon");
        assert_eq!(s.active_theme(), Some(ThemeName::Neon));
        assert_eq!(
            s.style_vars().get("--bg-color").map(String::as_str),
            Some("#0a0a0a")
        );
        s.submit("theme pink");
        assert_eq!(s.active_theme(), Some(ThemeName::Neon));
    }

    #[test]
    fn test_theme_full_replace_with_disjoint_sets() {
        use crate::filesystem::VirtualFs;
        use crate::theme::ThemeRegistry;

        const DARK: &[(&str, &str)] = &[("--only-dark", "1"), ("--shared", "d")];
        const GREEN: &[(&str, &str)] = &[("--shared", "g")];
        let themes =
            ThemeRegistry::from_table(&[(ThemeName::Dark, DARK), (ThemeName::Green, GREEN)]);
        let (s, _) = active_session();
        let mut s = s.with_interpreter(CommandInterpreter::new(VirtualFs::builtin(), themes));
        s.submit("theme dark");
        s.submit("theme green");
        assert_eq!(s.style_vars().len(), 1);
        assert!(!s.style_vars().contains_key("--only-dark"));
        assert_eq!(s.style_vars().get("--shared").map(String::as_str), Some("g"));
    }

    #[test]
    fn test_hack_triggers_glitch_once() {
        let (mut s, effects) = active_session();
        s.submit("sudo hack");
        s.submit("sudo hack");
        assert_eq!(*effects.0.borrow(), vec![Effect::Glitch]);
        assert!(s.is_compromised());
        assert_eq!(
            s.transcript().lines().last(),
            Some(&TerminalLine::warning("System already compromised."))
        );
    }

    #[test]
    fn test_matrix_every_time() {
        let (mut s, effects) = active_session();
        s.submit("sudo matrix");
        s.submit("sudo matrix");
        assert_eq!(*effects.0.borrow(), vec![Effect::MatrixRain, Effect::MatrixRain]);
    }

    #[test]
    fn test_kill_reloads_after_delay() {
        let (mut s, effects) = active_session();
        s.submit("sudo @kill");
        s.tick(11_499);
        assert!(effects.0.borrow().is_empty());
        s.tick(11_500);
        assert_eq!(*effects.0.borrow(), vec![Effect::Reload]);
    }

    #[test]
    fn test_exit_closes_and_cancels() {
        let (mut s, effects) = active_session();
        s.submit("sudo @kill");
        s.submit("exit");
        assert_eq!(s.state(), SessionState::Closed);
        assert_eq!(s.pending_tasks(), 0);
        s.tick(60_000);
        assert!(effects.0.borrow().is_empty());

        let len = s.transcript().len();
        s.submit("help");
        assert_eq!(s.transcript().len(), len);
        assert_eq!(s.history().len(), 2);
        assert_eq!(s.recall_previous(), None);
    }

    #[test]
    fn test_recall_through_session() {
        let (mut s, _) = active_session();
        s.submit("ls");
        s.submit("about");
        assert_eq!(s.recall_previous(), Some("about"));
        assert_eq!(s.recall_previous(), Some("ls"));
        assert_eq!(s.recall_next(), Some("about"));
        assert_eq!(s.recall_next(), Some(""));
        assert_eq!(s.recall_next(), None);
    }

    #[test]
    fn test_shutdown_cancels_pending() {
        let (mut s, _) = session();
        s.boot();
        s.shutdown();
        s.tick(10_000);
        assert!(s.transcript().is_empty());
        assert_eq!(s.state(), SessionState::Closed);
    }
}
