//! Audit storage backends.
//!
//! Both backends keep the log in process memory. `DualStorage` additionally
//! mirrors each record to stdout as a JSON line, written while the log is
//! locked so stdout order matches log order.

use chrono::Utc;
use std::sync::{Mutex, MutexGuard};

use crate::error::AuditError;
use crate::record::{AuditEntry, AuditRecord};

/// Trait for audit storage backends.
///
/// Implementations must be append-only: records are never removed or changed
/// once stored, and `snapshot` returns them in insertion order.
pub trait AuditStorage: Send + Sync {
    /// Stamp an entry with the current UTC time and append it.
    fn append(&self, entry: AuditEntry) -> Result<AuditRecord, AuditError>;

    /// Copy of every stored record, oldest first.
    fn snapshot(&self) -> Result<Vec<AuditRecord>, AuditError>;

    /// Number of stored records.
    fn len(&self) -> Result<usize, AuditError>;
}

/// In-memory storage, a mutex-guarded vector.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    records: Mutex<Vec<AuditRecord>>,
}

impl MemoryStorage {
    /// Create an empty storage.
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> Result<MutexGuard<'_, Vec<AuditRecord>>, AuditError> {
        self.records.lock().map_err(|e| {
            AuditError::StorageError(format!("Failed to acquire audit log lock: {}", e))
        })
    }

    /// Stamp and append an entry, running `on_append` under the lock first.
    ///
    /// If `on_append` fails the record is not stored.
    fn append_with<F>(&self, entry: AuditEntry, on_append: F) -> Result<AuditRecord, AuditError>
    where
        F: FnOnce(&AuditRecord) -> Result<(), AuditError>,
    {
        let mut records = self.lock()?;
        // Stamped under the lock so timestamps never go backwards in the log
        let record = entry.stamp(Utc::now());
        on_append(&record)?;
        records.push(record.clone());
        Ok(record)
    }
}

impl AuditStorage for MemoryStorage {
    fn append(&self, entry: AuditEntry) -> Result<AuditRecord, AuditError> {
        self.append_with(entry, |_| Ok(()))
    }

    fn snapshot(&self) -> Result<Vec<AuditRecord>, AuditError> {
        Ok(self.lock()?.clone())
    }

    fn len(&self) -> Result<usize, AuditError> {
        Ok(self.lock()?.len())
    }
}

/// In-memory storage that also prints each record to stdout as JSON.
#[derive(Debug, Default)]
pub struct DualStorage {
    memory: MemoryStorage,
}

impl DualStorage {
    /// Create an empty storage.
    pub fn new() -> Self {
        Self::default()
    }
}

impl AuditStorage for DualStorage {
    fn append(&self, entry: AuditEntry) -> Result<AuditRecord, AuditError> {
        self.memory.append_with(entry, |record| {
            let json = serde_json::to_string(record)?;
            println!("{}", json);
            Ok(())
        })
    }

    fn snapshot(&self) -> Result<Vec<AuditRecord>, AuditError> {
        self.memory.snapshot()
    }

    fn len(&self) -> Result<usize, AuditError> {
        self.memory.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::thread;

    #[test]
    fn test_memory_storage_preserves_order() {
        let storage = MemoryStorage::new();
        assert_eq!(storage.len().unwrap(), 0);

        storage.append(AuditEntry::new("first", false, "Allowed", 0.0)).unwrap();
        storage.append(AuditEntry::new("second", true, "Prompt too long", 0.0)).unwrap();

        let records = storage.snapshot().unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].prompt_preview, "first");
        assert_eq!(records[1].prompt_preview, "second");
        assert!(records[0].timestamp <= records[1].timestamp);
    }

    #[test]
    fn test_snapshot_is_a_copy() {
        let storage = MemoryStorage::new();
        storage.append(AuditEntry::new("a", false, "Allowed", 0.0)).unwrap();

        let before = storage.snapshot().unwrap();
        storage.append(AuditEntry::new("b", false, "Allowed", 0.0)).unwrap();

        assert_eq!(before.len(), 1);
        assert_eq!(storage.len().unwrap(), 2);
    }

    #[test]
    fn test_concurrent_appends_are_not_lost() {
        let storage = Arc::new(MemoryStorage::new());

        let handles: Vec<_> = (0..8)
            .map(|t| {
                let storage = Arc::clone(&storage);
                thread::spawn(move || {
                    for i in 0..50 {
                        storage
                            .append(AuditEntry::new(&format!("{}-{}", t, i), false, "Allowed", 0.0))
                            .unwrap();
                    }
                })
            })
            .collect();

        for handle in handles {
            handle.join().unwrap();
        }

        let records = storage.snapshot().unwrap();
        assert_eq!(records.len(), 400);
        assert!(records.windows(2).all(|w| w[0].timestamp <= w[1].timestamp));
    }

    #[test]
    fn test_append_hook_runs_in_log_order() {
        let storage = Arc::new(MemoryStorage::new());
        let observed = Arc::new(Mutex::new(Vec::new()));

        let handles: Vec<_> = (0..8)
            .map(|t| {
                let storage = Arc::clone(&storage);
                let observed = Arc::clone(&observed);
                thread::spawn(move || {
                    for i in 0..25 {
                        let entry = AuditEntry::new(&format!("{}-{}", t, i), false, "Allowed", 0.0);
                        storage
                            .append_with(entry, |record| {
                                observed.lock().unwrap().push(record.prompt_preview.clone());
                                Ok(())
                            })
                            .unwrap();
                    }
                })
            })
            .collect();

        for handle in handles {
            handle.join().unwrap();
        }

        let logged: Vec<_> = storage
            .snapshot()
            .unwrap()
            .into_iter()
            .map(|record| record.prompt_preview)
            .collect();
        assert_eq!(logged.len(), 200);
        assert_eq!(*observed.lock().unwrap(), logged);
    }

    #[test]
    fn test_failed_hook_stores_nothing() {
        let storage = MemoryStorage::new();
        let err = storage
            .append_with(AuditEntry::new("dropped", false, "Allowed", 0.0), |_| {
                Err(AuditError::StorageError("mirror unavailable".to_string()))
            })
            .unwrap_err();

        assert!(matches!(err, AuditError::StorageError(_)));
        assert_eq!(storage.len().unwrap(), 0);
    }

    #[test]
    fn test_dual_storage() {
        let storage = DualStorage::new();
        let record = storage
            .append(AuditEntry::new("hello", false, "Allowed", 0.000002))
            .unwrap();

        assert_eq!(record.prompt_preview, "hello");
        assert_eq!(storage.snapshot().unwrap(), vec![record]);
    }
}
