use std::collections::HashMap;
use std::sync::Mutex;

use super::record::ConfigRecord;
use super::store::{Persistence, StoreError, next_revision};

/// An in-process document store.
///
/// Follows the same revision rules as [`super::SqliteStore`], which makes it
/// a drop-in stand-in for tests and embedders that manage persistence
/// themselves.
#[derive(Debug, Default)]
pub struct MemoryStore {
    documents: Mutex<HashMap<String, ConfigRecord>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored documents.
    pub fn len(&self) -> usize {
        self.documents.lock().map_or(0, |docs| docs.len())
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Persistence for MemoryStore {
    fn get(&self, id: &str) -> Result<Option<ConfigRecord>, StoreError> {
        let documents = self
            .documents
            .lock()
            .map_err(|_| std::io::Error::other("memory store lock poisoned"))?;
        Ok(documents.get(id).cloned())
    }

    fn revision(&self, id: &str) -> Result<Option<String>, StoreError> {
        Ok(self.get(id)?.and_then(|doc| doc.rev))
    }

    fn put(&self, record: &ConfigRecord) -> Result<String, StoreError> {
        let mut documents = self
            .documents
            .lock()
            .map_err(|_| std::io::Error::other("memory store lock poisoned"))?;

        let current = documents.get(&record.id).and_then(|doc| doc.rev.clone());
        if current != record.rev {
            return Err(StoreError::Conflict {
                id: record.id.clone(),
            });
        }

        let rev = next_revision(current.as_deref(), &record.body()?);
        let mut stored = record.clone();
        stored.rev = Some(rev.clone());
        documents.insert(record.id.clone(), stored);

        Ok(rev)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::config::{CONFIG_ID, default_config};

    #[test]
    fn test_get_missing_document() {
        let store = MemoryStore::new();
        assert!(store.get(CONFIG_ID).unwrap().is_none());
        assert!(store.is_empty());
    }

    #[test]
    fn test_put_then_get() {
        let store = MemoryStore::new();
        let mut record = default_config();
        record.api_key = "secret".to_string();

        let rev = store.put(&record).unwrap();
        let loaded = store.get(CONFIG_ID).unwrap().unwrap();

        assert_eq!(loaded.api_key, "secret");
        assert_eq!(loaded.rev, Some(rev));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_stale_revision_conflicts() {
        let store = MemoryStore::new();
        let mut record = default_config();

        let rev = store.put(&record).unwrap();
        record.rev = Some(rev);
        let mut stale = record.clone();

        store.put(&record).unwrap();

        stale.model = "gemini-2.5-pro".to_string();
        let err = store.put(&stale).unwrap_err();
        assert!(matches!(err, StoreError::Conflict { .. }));
    }

    #[test]
    fn test_unrevisioned_write_over_existing_conflicts() {
        let store = MemoryStore::new();
        store.put(&default_config()).unwrap();

        let err = store.put(&default_config()).unwrap_err();
        assert!(err.to_string().contains("conflict"));
    }
}
