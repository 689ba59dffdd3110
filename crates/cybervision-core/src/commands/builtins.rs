//! Built-in command handlers.

use rand::seq::SliceRandom;

use crate::config::{
    AI_RESPONSES, APP_EDITION, APP_NAME, APP_VERSION, CAT_BINARY_CONTENT, CAT_TEXT_CONTENT,
    HELP_TEXT,
};
use crate::filesystem::VirtualFs;
use crate::models::{Effect, TerminalLine};

use super::{CommandContext, CommandResult, SessionRequest};

pub(super) fn help(_args: &[String], _ctx: &mut CommandContext<'_>) -> CommandResult {
    CommandResult::output(HELP_TEXT.lines().map(TerminalLine::normal).collect())
}

pub(super) fn clear(_args: &[String], _ctx: &mut CommandContext<'_>) -> CommandResult {
    CommandResult::request(SessionRequest::Clear)
}

pub(super) fn exit(_args: &[String], _ctx: &mut CommandContext<'_>) -> CommandResult {
    CommandResult::line(TerminalLine::normal("Session closed."))
        .with_request(SessionRequest::Close)
}

pub(super) fn about(_args: &[String], _ctx: &mut CommandContext<'_>) -> CommandResult {
    CommandResult::line(TerminalLine::normal(format!(
        "{} v{} - {}",
        APP_NAME, APP_VERSION, APP_EDITION
    )))
}

pub(super) fn time(_args: &[String], ctx: &mut CommandContext<'_>) -> CommandResult {
    CommandResult::line(TerminalLine::normal(ctx.clock.local_timestamp()))
}

/// List the current directory on one line.
pub(super) fn ls(_args: &[String], ctx: &mut CommandContext<'_>) -> CommandResult {
    let children = ctx.fs.list_children(ctx.cwd);
    CommandResult::line(TerminalLine::normal(children.join("   ")))
}

pub(super) fn cd(args: &[String], ctx: &mut CommandContext<'_>) -> CommandResult {
    let Some(dir) = args.first() else {
        return CommandResult::line(TerminalLine::warning("Usage: cd <dir>"));
    };

    let resolved = VirtualFs::resolve(ctx.cwd, dir);
    if ctx.fs.exists(&resolved) {
        CommandResult::line(TerminalLine::normal(format!(
            "Directory changed: {}",
            resolved
        )))
        .with_request(SessionRequest::ChangeDirectory(resolved))
    } else {
        CommandResult::line(TerminalLine::warning(format!(
            "No such directory: {}",
            dir
        )))
    }
}

/// Simulated file read: the content only depends on the name.
pub(super) fn cat(args: &[String], ctx: &mut CommandContext<'_>) -> CommandResult {
    let Some(file) = args.first() else {
        return CommandResult::line(TerminalLine::warning("Usage: cat <file>"));
    };

    if !ctx.fs.list_children(ctx.cwd).contains(file) {
        return CommandResult::line(TerminalLine::warning(format!("No such file: {}", file)));
    }

    let content = if file.contains("txt") {
        CAT_TEXT_CONTENT
    } else {
        CAT_BINARY_CONTENT
    };
    CommandResult::output(vec![
        TerminalLine::normal(format!("[{}]", file)),
        TerminalLine::normal(content),
    ])
}

pub(super) fn theme(args: &[String], ctx: &mut CommandContext<'_>) -> CommandResult {
    match args.first().and_then(|name| ctx.themes.lookup(name)) {
        Some(theme) => CommandResult::line(TerminalLine::normal(format!(
            "Theme set to {}",
            theme.name
        )))
        .with_request(SessionRequest::ApplyTheme(theme.name)),
        None => CommandResult::line(TerminalLine::warning("Theme not found")),
    }
}

/// Canned reply, revealed by the session one character at a time.
pub(super) fn ai(args: &[String], ctx: &mut CommandContext<'_>) -> CommandResult {
    if args.is_empty() {
        return CommandResult::line(TerminalLine::warning("AI: ..."));
    }

    match AI_RESPONSES.choose(&mut *ctx.rng) {
        Some(reply) => CommandResult::request(SessionRequest::TypeOut(format!("AI: {}", reply))),
        None => CommandResult::line(TerminalLine::warning("AI: ...")),
    }
}

pub(super) fn sudo(args: &[String], ctx: &mut CommandContext<'_>) -> CommandResult {
    let Some(sub) = args.first() else {
        return CommandResult::line(TerminalLine::warning("Usage: sudo <cmd>"));
    };

    match sub.to_lowercase().as_str() {
        "@kill" => CommandResult::line(TerminalLine::warning("System refresh..."))
            .with_request(SessionRequest::ScheduleReload),
        "hack" if ctx.compromised => {
            CommandResult::line(TerminalLine::warning("System already compromised."))
        }
        "hack" => CommandResult::line(TerminalLine::warning("Glitch mode activated!"))
            .with_request(SessionRequest::Effect(Effect::Glitch)),
        "matrix" => CommandResult::line(TerminalLine::normal("Matrix mode engaged."))
            .with_request(SessionRequest::Effect(Effect::MatrixRain)),
        other => CommandResult::line(TerminalLine::warning(format!(
            "Unknown sudo command: {}",
            other
        ))),
    }
}
