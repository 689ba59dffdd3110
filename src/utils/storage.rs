//! localStorage-backed command history.

use cybervision_core::HistoryStore;
use cybervision_core::config::HISTORY_STORAGE_KEY;
use cybervision_core::error::HistoryError;

use super::dom;

/// [`HistoryStore`] over `window.localStorage`.
///
/// When storage is disabled (private mode, sandboxed iframes) every call
/// reports [`HistoryError::StorageUnavailable`] and history lives in memory
/// only.
#[derive(Clone, Debug)]
pub struct LocalStorageHistory {
    key: String,
}

impl LocalStorageHistory {
    pub fn new() -> Self {
        Self::with_key(HISTORY_STORAGE_KEY)
    }

    pub fn with_key(key: impl Into<String>) -> Self {
        Self { key: key.into() }
    }
}

impl Default for LocalStorageHistory {
    fn default() -> Self {
        Self::new()
    }
}

impl HistoryStore for LocalStorageHistory {
    fn load(&self) -> Result<Option<String>, HistoryError> {
        let storage = dom::local_storage().ok_or(HistoryError::StorageUnavailable)?;
        storage
            .get_item(&self.key)
            .map_err(|_| HistoryError::StorageUnavailable)
    }

    fn save(&mut self, payload: &str) -> Result<(), HistoryError> {
        let storage = dom::local_storage().ok_or(HistoryError::StorageUnavailable)?;
        storage
            .set_item(&self.key, payload)
            .map_err(|e| HistoryError::WriteFailed(format!("{:?}", e)))
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    fn fresh(key: &str) -> LocalStorageHistory {
        if let Some(storage) = dom::local_storage() {
            let _ = storage.remove_item(key);
        }
        LocalStorageHistory::with_key(key)
    }

    #[wasm_bindgen_test]
    fn test_load_missing_is_none() {
        let store = fresh("cybervision-test-missing");
        assert_eq!(store.load().unwrap(), None);
    }

    #[wasm_bindgen_test]
    fn test_save_then_load() {
        let mut store = fresh("cybervision-test-roundtrip");
        store.save(r#"["ls","help"]"#).unwrap();
        assert_eq!(store.load().unwrap().as_deref(), Some(r#"["ls","help"]"#));
    }

    #[wasm_bindgen_test]
    fn test_history_recovers_from_garbage() {
        use cybervision_core::CommandHistory;

        let mut store = fresh("cybervision-test-garbage");
        store.save("not json").unwrap();
        let mut history = CommandHistory::load(Box::new(store.clone()));
        assert!(history.is_empty());
        history.record("about");
        assert_eq!(store.load().unwrap().as_deref(), Some(r#"["about"]"#));
    }
}
