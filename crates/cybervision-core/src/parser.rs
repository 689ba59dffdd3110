//! Input line parsing.
//!
//! Lines split on whitespace: the first token, lower-cased, names the
//! command and the remaining tokens are passed verbatim. There is no
//! quoting, escaping or expansion.

/// A parsed input line.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ParsedCommand {
    /// Lower-cased command name, empty for a blank line.
    pub name: String,
    /// Arguments in input order, case preserved.
    pub args: Vec<String>,
}

impl ParsedCommand {
    pub fn is_empty(&self) -> bool {
        self.name.is_empty()
    }

    /// Arguments joined by single spaces.
    pub fn rest(&self) -> String {
        self.args.join(" ")
    }
}

/// Parse a raw input line.
pub fn parse_input(raw: &str) -> ParsedCommand {
    let mut tokens = raw.split_whitespace();
    let Some(first) = tokens.next() else {
        return ParsedCommand::default();
    };

    ParsedCommand {
        name: first.to_lowercase(),
        args: tokens.map(str::to_string).collect(),
    }
}
