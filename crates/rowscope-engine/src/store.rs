//! Record Store.
//!
//! The store is built once per session and never changes afterwards. It is
//! cheap to clone; clones share the same records.

use std::collections::HashMap;
use std::io::Read;
use std::path::Path;
use std::sync::Arc;

use rowscope_core::{Record, RecordId, StoreError};

/// Immutable, ordered sequence of records with an id index.
#[derive(Debug, Clone)]
pub struct RecordStore {
    records: Arc<[Record]>,
    index: Arc<HashMap<RecordId, usize>>,
}

impl RecordStore {
    /// Build a store, rejecting duplicate ids.
    pub fn new(records: Vec<Record>) -> Result<Self, StoreError> {
        let mut index = HashMap::with_capacity(records.len());
        for (position, record) in records.iter().enumerate() {
            if index.insert(record.id.clone(), position).is_some() {
                return Err(StoreError::DuplicateId(record.id.to_string()));
            }
        }
        tracing::debug!("Built record store with {} records", records.len());
        Ok(Self {
            records: records.into(),
            index: Arc::new(index),
        })
    }

    /// Build a store from a JSON array of records.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, StoreError> {
        let records: Vec<Record> = serde_json::from_reader(reader)?;
        Self::new(records)
    }

    /// Build a store from a JSON file.
    pub fn from_path(path: &Path) -> Result<Self, StoreError> {
        let file = std::fs::File::open(path).map_err(|source| StoreError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let store = Self::from_reader(std::io::BufReader::new(file))?;
        tracing::info!("Loaded {} records from {:?}", store.len(), path);
        Ok(store)
    }

    /// All records in source order.
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    /// Iterate records in source order.
    pub fn iter(&self) -> std::slice::Iter<'_, Record> {
        self.records.iter()
    }

    /// Look up a record by id.
    pub fn get(&self, id: &RecordId) -> Option<&Record> {
        self.index.get(id).map(|&i| &self.records[i])
    }

    /// Check if an id belongs to the store.
    pub fn contains(&self, id: &RecordId) -> bool {
        self.index.contains_key(id)
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Check if the store is empty.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rowscope_core::fixture::sample_records;
    use std::io::Write;

    #[test]
    fn test_store_lookup() {
        let store = RecordStore::new(sample_records(5)).unwrap();
        assert_eq!(store.len(), 5);
        assert!(!store.is_empty());

        let id = RecordId::from("3");
        assert_eq!(store.get(&id).unwrap().name, "Bob Johnson");
        assert!(!store.contains(&RecordId::from("99")));
    }

    #[test]
    fn test_store_rejects_duplicate_ids() {
        let mut records = sample_records(3);
        records[2].id = RecordId::from("1");

        let err = RecordStore::new(records).unwrap_err();
        assert!(matches!(err, StoreError::DuplicateId(id) if id == "1"));
    }

    #[test]
    fn test_store_from_json_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        let json = serde_json::to_string(&sample_records(4)).unwrap();
        file.write_all(json.as_bytes()).unwrap();

        let store = RecordStore::from_path(file.path()).unwrap();
        assert_eq!(store.len(), 4);
        assert_eq!(store.records()[0].id.as_ref(), "1");
    }

    #[test]
    fn test_store_from_malformed_json() {
        let err = RecordStore::from_reader("[{".as_bytes()).unwrap_err();
        assert!(matches!(err, StoreError::Json(_)));
    }

    #[test]
    fn test_store_missing_file() {
        let err = RecordStore::from_path(Path::new("/nonexistent/records.json")).unwrap_err();
        assert!(matches!(err, StoreError::Io { .. }));
    }
}
