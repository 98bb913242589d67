//! Entry store: the owner of the journal's entry collection

use crate::domain::{JournalEntry, TradeRecord};
use crate::error::{ProtradeError, Result};
use crate::infrastructure::EntryStorage;
use chrono::{DateTime, Utc};
use uuid::Uuid;

/// Ordered collection of entries backed by a durable slot.
///
/// Entries are kept newest first. Every mutation rewrites the whole slot
/// before returning.
pub struct EntryStore<S: EntryStorage> {
    storage: S,
    entries: Vec<JournalEntry>,
    loaded: bool,
}

impl<S: EntryStorage> EntryStore<S> {
    /// Create an empty, not yet loaded store
    pub fn new(storage: S) -> Self {
        EntryStore {
            storage,
            entries: Vec::new(),
            loaded: false,
        }
    }

    /// Create a store and load it from the slot
    pub fn open(storage: S) -> Result<Self> {
        let mut store = EntryStore::new(storage);
        store.load()?;
        Ok(store)
    }

    /// Read the slot into memory.
    ///
    /// Missing, blank or unparseable content gives an empty collection. Only
    /// read failures on an existing slot are errors.
    pub fn load(&mut self) -> Result<()> {
        self.entries = match self.storage.load()? {
            None => Vec::new(),
            Some(document) if document.trim().is_empty() => Vec::new(),
            Some(document) => match serde_json::from_str::<Vec<JournalEntry>>(&document) {
                Ok(entries) => entries,
                Err(e) => {
                    log::warn!("Discarding unreadable journal entries: {}", e);
                    Vec::new()
                }
            },
        };
        self.loaded = true;
        log::debug!("Loaded {} entries", self.entries.len());
        Ok(())
    }

    /// Write the full collection to the slot
    pub fn persist(&self) -> Result<()> {
        if !self.loaded {
            return Err(ProtradeError::StoreNotLoaded);
        }
        let document = serde_json::to_string_pretty(&self.entries)?;
        self.storage.persist(&document)
    }

    /// Entries in display order, newest first
    pub fn entries(&self) -> &[JournalEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&JournalEntry> {
        self.entries.iter().find(|e| e.id == id)
    }

    /// Find one entry by its full id or a unique prefix of it
    pub fn resolve(&self, id_or_prefix: &str) -> Result<&JournalEntry> {
        let needle = id_or_prefix.trim();
        if needle.is_empty() {
            return Err(ProtradeError::EntryNotFound(id_or_prefix.to_string()));
        }
        if let Some(entry) = self.get(needle) {
            return Ok(entry);
        }

        let mut matches = self.entries.iter().filter(|e| e.id.starts_with(needle));
        match (matches.next(), matches.next()) {
            (Some(entry), None) => Ok(entry),
            (Some(_), Some(_)) => Err(ProtradeError::AmbiguousId(needle.to_string())),
            (None, _) => Err(ProtradeError::EntryNotFound(needle.to_string())),
        }
    }

    /// Add a new entry at the front with a fresh id and the current time
    pub fn create(&mut self, record: TradeRecord) -> Result<JournalEntry> {
        self.ensure_loaded()?;

        let mut id = Uuid::new_v4().to_string();
        while self.get(&id).is_some() {
            id = Uuid::new_v4().to_string();
        }

        // The slot keeps millisecond timestamps
        let now = Utc::now();
        let timestamp = DateTime::from_timestamp_millis(now.timestamp_millis()).unwrap_or(now);

        let entry = JournalEntry::new(id, timestamp, record);
        self.entries.insert(0, entry.clone());
        self.persist()?;

        log::info!("Created entry {} ({})", entry.id, entry.record.symbol);
        Ok(entry)
    }

    /// Replace every field of an entry except its id and timestamp
    pub fn update(&mut self, id: &str, record: TradeRecord) -> Result<JournalEntry> {
        self.ensure_loaded()?;

        let entry = self
            .entries
            .iter_mut()
            .find(|e| e.id == id)
            .ok_or_else(|| ProtradeError::EntryNotFound(id.to_string()))?;
        entry.record = record;
        let updated = entry.clone();
        self.persist()?;

        log::info!("Updated entry {}", id);
        Ok(updated)
    }

    /// Remove an entry. Unknown ids leave the store and the slot untouched.
    pub fn delete(&mut self, id: &str) -> Result<Option<JournalEntry>> {
        self.ensure_loaded()?;

        let Some(position) = self.entries.iter().position(|e| e.id == id) else {
            return Ok(None);
        };
        let removed = self.entries.remove(position);
        self.persist()?;

        log::info!("Deleted entry {}", id);
        Ok(Some(removed))
    }

    /// Store coaching feedback on an entry
    pub fn set_feedback(&mut self, id: &str, feedback: String) -> Result<JournalEntry> {
        let mut record = self
            .get(id)
            .ok_or_else(|| ProtradeError::EntryNotFound(id.to_string()))?
            .record
            .clone();
        record.ai_feedback = Some(feedback).filter(|f| !f.trim().is_empty());
        self.update(id, record)
    }

    fn ensure_loaded(&self) -> Result<()> {
        if self.loaded {
            Ok(())
        } else {
            Err(ProtradeError::StoreNotLoaded)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{ResultType, TradeSide};
    use crate::infrastructure::MemoryStorage;

    fn record(symbol: &str) -> TradeRecord {
        TradeRecord {
            plan_no: "001".to_string(),
            date: "2025-01-17".to_string(),
            symbol: symbol.to_string(),
            logic: "Breakout".to_string(),
            ..TradeRecord::default()
        }
    }

    #[test]
    fn test_create_prepends_and_persists() {
        let storage = MemoryStorage::new();
        let mut store = EntryStore::open(&storage).unwrap();

        let first = store.create(record("XAUUSD")).unwrap();
        let second = store.create(record("BTCUSD")).unwrap();

        assert_eq!(store.len(), 2);
        assert_eq!(store.entries()[0].id, second.id);
        assert_eq!(store.entries()[1].id, first.id);
        assert_ne!(first.id, second.id);
        assert_eq!(storage.writes(), 2);
    }

    #[test]
    fn test_persist_before_load_is_refused() {
        let storage = MemoryStorage::with_document("[]");
        let mut store = EntryStore::new(&storage);

        assert!(matches!(store.persist(), Err(ProtradeError::StoreNotLoaded)));
        assert!(matches!(
            store.create(record("XAUUSD")),
            Err(ProtradeError::StoreNotLoaded)
        ));
        assert_eq!(storage.writes(), 0);
        assert_eq!(storage.document().as_deref(), Some("[]"));
    }

    #[test]
    fn test_load_discards_corrupt_document() {
        for document in ["not json", "{\"id\": 1}", "[{\"id\": \"x\"}]", "   "] {
            let storage = MemoryStorage::with_document(document);
            let store = EntryStore::open(&storage).unwrap();
            assert!(store.is_empty(), "document {:?} should load empty", document);
        }
    }

    #[test]
    fn test_update_keeps_identity() {
        let storage = MemoryStorage::new();
        let mut store = EntryStore::open(&storage).unwrap();
        let created = store.create(record("XAUUSD")).unwrap();

        let mut changed = record("EURUSD");
        changed.side = TradeSide::Short;
        changed.result_type = ResultType::Loss;
        let updated = store.update(&created.id, changed.clone()).unwrap();

        assert_eq!(updated.id, created.id);
        assert_eq!(updated.timestamp, created.timestamp);
        assert_eq!(updated.record, changed);
        assert_eq!(store.get(&created.id).unwrap().record, changed);
    }

    #[test]
    fn test_update_unknown_id() {
        let storage = MemoryStorage::new();
        let mut store = EntryStore::open(&storage).unwrap();
        store.create(record("XAUUSD")).unwrap();

        let result = store.update("missing", record("EURUSD"));
        assert!(matches!(result, Err(ProtradeError::EntryNotFound(_))));
        assert_eq!(store.len(), 1);
        assert_eq!(storage.writes(), 1);
    }

    #[test]
    fn test_delete() {
        let storage = MemoryStorage::new();
        let mut store = EntryStore::open(&storage).unwrap();
        let keep = store.create(record("XAUUSD")).unwrap();
        let gone = store.create(record("BTCUSD")).unwrap();

        let removed = store.delete(&gone.id).unwrap();
        assert_eq!(removed.map(|e| e.id), Some(gone.id.clone()));
        assert_eq!(store.len(), 1);
        assert!(store.get(&gone.id).is_none());
        assert!(store.get(&keep.id).is_some());

        let writes = storage.writes();
        assert_eq!(store.delete("missing").unwrap(), None);
        assert_eq!(store.len(), 1);
        assert_eq!(storage.writes(), writes);
    }

    #[test]
    fn test_resolve_by_prefix() {
        let storage = MemoryStorage::new();
        let mut store = EntryStore::open(&storage).unwrap();
        let entry = store.create(record("XAUUSD")).unwrap();

        assert_eq!(store.resolve(&entry.id).unwrap().id, entry.id);
        assert_eq!(store.resolve(&entry.id[..6]).unwrap().id, entry.id);
        assert!(matches!(
            store.resolve("zzzz"),
            Err(ProtradeError::EntryNotFound(_))
        ));
        assert!(matches!(
            store.resolve(""),
            Err(ProtradeError::EntryNotFound(_))
        ));
    }

    #[test]
    fn test_resolve_ambiguous_prefix() {
        let a = JournalEntry::new("abc-1".to_string(), Utc::now(), record("A"));
        let b = JournalEntry::new("abc-2".to_string(), Utc::now(), record("B"));
        let storage = MemoryStorage::with_document(serde_json::to_string(&vec![a, b]).unwrap());
        let store = EntryStore::open(&storage).unwrap();

        assert!(matches!(
            store.resolve("abc"),
            Err(ProtradeError::AmbiguousId(_))
        ));
        assert_eq!(store.resolve("abc-2").unwrap().record.symbol, "B");
    }

    #[test]
    fn test_set_feedback() {
        let storage = MemoryStorage::new();
        let mut store = EntryStore::open(&storage).unwrap();
        let entry = store.create(record("XAUUSD")).unwrap();

        let updated = store
            .set_feedback(&entry.id, "Respect your stop.".to_string())
            .unwrap();
        assert_eq!(updated.record.ai_feedback.as_deref(), Some("Respect your stop."));
        assert_eq!(updated.timestamp, entry.timestamp);
    }
}
