//! Terminal transcript: the ordered output log shown to the user.

use crate::models::TerminalLine;

/// A line being revealed one character at a time.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TypingLine {
    line: TerminalLine,
    /// Byte length of the revealed prefix, always on a char boundary.
    revealed: usize,
}

impl TypingLine {
    fn new(line: TerminalLine) -> Self {
        Self { line, revealed: 0 }
    }

    /// The currently visible prefix.
    pub fn visible(&self) -> &str {
        &self.line.text[..self.revealed]
    }

    pub fn line(&self) -> &TerminalLine {
        &self.line
    }

    pub fn is_complete(&self) -> bool {
        self.revealed >= self.line.text.len()
    }

    fn reveal_next(&mut self) {
        if let Some(c) = self.line.text[self.revealed..].chars().next() {
            self.revealed += c.len_utf8();
        }
    }
}

/// Ordered transcript with stable rendering keys.
///
/// Grows without bound until [`Transcript::clear`]. Each line's key is its
/// position counted from session start, including cleared lines, so keys
/// are never reused.
#[derive(Clone, Debug, Default)]
pub struct Transcript {
    lines: Vec<TerminalLine>,
    cleared: u64,
    typing: Option<TypingLine>,
}

impl Transcript {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, line: TerminalLine) {
        self.lines.push(line);
    }

    pub fn extend(&mut self, lines: impl IntoIterator<Item = TerminalLine>) {
        self.lines.extend(lines);
    }

    /// Drop every line and any in-progress typing.
    pub fn clear(&mut self) {
        self.cleared += self.lines.len() as u64;
        self.lines.clear();
        self.typing = None;
    }

    pub fn lines(&self) -> &[TerminalLine] {
        &self.lines
    }

    /// Lines with their rendering keys.
    pub fn keyed(&self) -> impl Iterator<Item = (u64, &TerminalLine)> + '_ {
        let base = self.cleared;
        self.lines
            .iter()
            .enumerate()
            .map(move |(i, line)| (base + i as u64, line))
    }

    /// Key the next committed line will get.
    pub fn next_key(&self) -> u64 {
        self.cleared + self.lines.len() as u64
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Begin revealing `line`, committing any reveal already in progress.
    pub fn start_typing(&mut self, line: TerminalLine) {
        self.finish_typing();
        self.typing = Some(TypingLine::new(line));
    }

    /// Reveal one more character. Returns `true` once the line is committed.
    pub fn advance_typing(&mut self) -> bool {
        let Some(typing) = self.typing.as_mut() else {
            return true;
        };
        typing.reveal_next();
        if typing.is_complete() {
            self.finish_typing();
            true
        } else {
            false
        }
    }

    /// Commit the in-progress line in full, if any.
    pub fn finish_typing(&mut self) {
        if let Some(typing) = self.typing.take() {
            self.lines.push(typing.line);
        }
    }

    pub fn typing(&self) -> Option<&TypingLine> {
        self.typing.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keys_survive_clear() {
        let mut t = Transcript::new();
        t.push(TerminalLine::normal("a"));
        t.push(TerminalLine::normal("b"));
        t.clear();
        assert!(t.is_empty());
        t.push(TerminalLine::normal("c"));
        let keys: Vec<u64> = t.keyed().map(|(k, _)| k).collect();
        assert_eq!(keys, vec![2]);
        assert_eq!(t.next_key(), 3);
    }

    #[test]
    fn test_typing_reveals_by_char() {
        let mut t = Transcript::new();
        t.start_typing(TerminalLine::normal("añb"));
        assert_eq!(t.typing().map(TypingLine::visible), Some(""));
        assert!(!t.advance_typing());
        assert!(!t.advance_typing());
        assert_eq!(t.typing().map(TypingLine::visible), Some("añ"));
        assert!(t.is_empty());
        assert!(t.advance_typing());
        assert!(t.typing().is_none());
        assert_eq!(t.lines(), [TerminalLine::normal("añb")]);
    }

    #[test]
    fn test_start_typing_commits_previous() {
        let mut t = Transcript::new();
        t.start_typing(TerminalLine::normal("first"));
        t.advance_typing();
        t.start_typing(TerminalLine::normal("second"));
        assert_eq!(t.lines(), [TerminalLine::normal("first")]);
        t.finish_typing();
        assert_eq!(t.len(), 2);
    }

    #[test]
    fn test_clear_drops_typing() {
        let mut t = Transcript::new();
        t.start_typing(TerminalLine::normal("secret"));
        t.clear();
        assert!(t.typing().is_none());
        assert!(t.advance_typing());
        assert!(t.is_empty());
    }
}
