//! Command history with cursor-based recall and durable persistence.
//!
//! Entries are kept in submission order: never reordered, deduplicated or
//! truncated. The whole list is serialized as a JSON array of strings and
//! written through a [`HistoryStore`] after every [`CommandHistory::record`].

use crate::error::HistoryError;

/// Durable storage for the serialized history payload.
///
/// Implemented over localStorage by the web front-end and by
/// [`MemoryHistoryStore`] for tests and headless hosts.
pub trait HistoryStore {
    /// Read the stored payload, `None` when nothing was stored yet.
    fn load(&self) -> Result<Option<String>, HistoryError>;

    /// Overwrite the stored payload.
    fn save(&mut self, payload: &str) -> Result<(), HistoryError>;
}

/// In-memory [`HistoryStore`].
#[derive(Clone, Debug, Default)]
pub struct MemoryHistoryStore {
    payload: Option<String>,
}

impl MemoryHistoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start with an existing raw payload (possibly malformed).
    pub fn with_payload(payload: impl Into<String>) -> Self {
        Self {
            payload: Some(payload.into()),
        }
    }

    pub fn payload(&self) -> Option<&str> {
        self.payload.as_deref()
    }
}

impl HistoryStore for MemoryHistoryStore {
    fn load(&self) -> Result<Option<String>, HistoryError> {
        Ok(self.payload.clone())
    }

    fn save(&mut self, payload: &str) -> Result<(), HistoryError> {
        self.payload = Some(payload.to_string());
        Ok(())
    }
}

/// Decode a stored payload.
pub fn decode(payload: &str) -> Result<Vec<String>, HistoryError> {
    serde_json::from_str(payload).map_err(HistoryError::Malformed)
}

/// Encode entries for storage.
pub fn encode(entries: &[String]) -> Result<String, HistoryError> {
    serde_json::to_string(entries).map_err(HistoryError::Serialize)
}

/// Append-only command log with a recall cursor.
///
/// The cursor ranges over `0..=len`; `len` means "fresh line, not browsing".
pub struct CommandHistory {
    entries: Vec<String>,
    cursor: usize,
    store: Box<dyn HistoryStore>,
}

impl CommandHistory {
    /// Load history from `store`.
    ///
    /// Absent, unreadable or malformed payloads yield an empty history.
    pub fn load(store: Box<dyn HistoryStore>) -> Self {
        let entries = match store.load().and_then(|p| p.as_deref().map(decode).transpose()) {
            Ok(entries) => entries.unwrap_or_default(),
            Err(e) => {
                log::warn!("discarding stored command history: {}", e.report());
                Vec::new()
            }
        };
        log::debug!("loaded {} history entries", entries.len());

        Self {
            cursor: entries.len(),
            entries,
            store,
        }
    }

    /// Append `line`, persist the full list and reset the cursor.
    ///
    /// Persistence failures are logged; the in-memory entry is kept.
    pub fn record(&mut self, line: &str) {
        self.entries.push(line.to_string());
        self.cursor = self.entries.len();

        if let Err(e) = encode(&self.entries).and_then(|payload| self.store.save(&payload)) {
            log::warn!("failed to persist command history: {}", e.report());
        }
    }

    /// Step back one entry. `None` at the oldest entry (no wraparound).
    pub fn recall_previous(&mut self) -> Option<&str> {
        if self.cursor == 0 {
            return None;
        }
        self.cursor -= 1;
        self.entries.get(self.cursor).map(String::as_str)
    }

    /// Step forward one entry.
    ///
    /// Stepping past the newest entry yields an empty fresh line once, then
    /// `None` while the cursor stays at the fresh line.
    pub fn recall_next(&mut self) -> Option<&str> {
        let len = self.entries.len();
        if self.cursor + 1 < len {
            self.cursor += 1;
            self.entries.get(self.cursor).map(String::as_str)
        } else if self.cursor + 1 == len {
            self.cursor = len;
            Some("")
        } else {
            None
        }
    }

    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use super::*;

    /// Store whose payload is observable after being boxed.
    #[derive(Clone, Default)]
    struct SharedStore(Rc<RefCell<Option<String>>>);

    impl HistoryStore for SharedStore {
        fn load(&self) -> Result<Option<String>, HistoryError> {
            Ok(self.0.borrow().clone())
        }

        fn save(&mut self, payload: &str) -> Result<(), HistoryError> {
            *self.0.borrow_mut() = Some(payload.to_string());
            Ok(())
        }
    }

    struct BrokenStore;

    impl HistoryStore for BrokenStore {
        fn load(&self) -> Result<Option<String>, HistoryError> {
            Err(HistoryError::StorageUnavailable)
        }

        fn save(&mut self, _payload: &str) -> Result<(), HistoryError> {
            Err(HistoryError::WriteFailed("quota exceeded".to_string()))
        }
    }

    fn history_with(entries: &[&str]) -> CommandHistory {
        let mut history = CommandHistory::load(Box::new(MemoryHistoryStore::new()));
        for entry in entries {
            history.record(entry);
        }
        history
    }

    #[test]
    fn test_load_absent_is_empty() {
        let history = CommandHistory::load(Box::new(MemoryHistoryStore::new()));
        assert!(history.is_empty());
        assert_eq!(history.cursor(), 0);
    }

    #[test]
    fn test_load_existing_payload() {
        let store = MemoryHistoryStore::with_payload(r#"["ls","cd home"]"#);
        let history = CommandHistory::load(Box::new(store));
        assert_eq!(history.entries(), ["ls", "cd home"]);
        assert_eq!(history.cursor(), 2);
    }

    #[test]
    fn test_load_malformed_payload_is_empty() {
        for payload in ["{not json", r#"{"a":1}"#, "[1,2,3]", r#"["ok", null]"#] {
            let history = CommandHistory::load(Box::new(MemoryHistoryStore::with_payload(payload)));
            assert!(history.is_empty(), "payload {payload:?} should be discarded");
        }
    }

    #[test]
    fn test_load_unavailable_storage_is_empty() {
        let history = CommandHistory::load(Box::new(BrokenStore));
        assert!(history.is_empty());
    }

    #[test]
    fn test_record_persists_whole_list() {
        let store = SharedStore::default();
        let mut history = CommandHistory::load(Box::new(store.clone()));
        history.record("ls");
        history.record("ls");
        assert_eq!(store.0.borrow().as_deref(), Some(r#"["ls","ls"]"#));

        let reloaded = CommandHistory::load(Box::new(store));
        assert_eq!(reloaded.entries(), ["ls", "ls"]);
    }

    #[test]
    fn test_record_survives_write_failure() {
        let mut history = CommandHistory::load(Box::new(BrokenStore));
        history.record("help");
        assert_eq!(history.entries(), ["help"]);
        assert_eq!(history.cursor(), 1);
    }

    #[test]
    fn test_recall_previous_stops_at_oldest() {
        let mut history = history_with(&["a", "b"]);
        assert_eq!(history.recall_previous(), Some("b"));
        assert_eq!(history.recall_previous(), Some("a"));
        assert_eq!(history.recall_previous(), None);
        assert_eq!(history.recall_previous(), None);
        assert_eq!(history.cursor(), 0);
    }

    #[test]
    fn test_recall_next_fresh_line_once() {
        let mut history = history_with(&["a", "b"]);
        history.recall_previous();
        history.recall_previous();
        assert_eq!(history.recall_next(), Some("b"));
        assert_eq!(history.recall_next(), Some(""));
        assert_eq!(history.recall_next(), None);
        assert_eq!(history.recall_next(), None);
        assert_eq!(history.cursor(), 2);
    }

    #[test]
    fn test_recall_on_empty_history() {
        let mut history = history_with(&[]);
        assert_eq!(history.recall_previous(), None);
        assert_eq!(history.recall_next(), None);
    }

    #[test]
    fn test_record_resets_cursor() {
        let mut history = history_with(&["a", "b", "c"]);
        history.recall_previous();
        history.recall_previous();
        history.record("d");
        assert_eq!(history.cursor(), 4);
        assert_eq!(history.recall_previous(), Some("d"));
    }
}
