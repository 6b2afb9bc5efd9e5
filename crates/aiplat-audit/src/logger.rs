//! Audit logger implementation.
//!
//! Provides the `AuditLogger` type used by request handlers to record each
//! guardrail decision and to read back the full trail.

use aiplat_core::AuditConfig;
use serde::Serialize;
use std::sync::Arc;

use crate::error::AuditError;
use crate::record::{AuditEntry, AuditRecord};
use crate::storage::{AuditStorage, DualStorage, MemoryStorage};

/// The full audit trail at the time of a query.
#[derive(Debug, Clone, Serialize)]
pub struct AuditSnapshot {
    /// Number of records in the trail.
    pub total_requests: usize,
    /// Every record, oldest first.
    pub logs: Vec<AuditRecord>,
}

/// The main audit logger.
///
/// Cloning is cheap; clones share the same underlying log.
#[derive(Clone)]
pub struct AuditLogger {
    storage: Arc<dyn AuditStorage>,
}

impl AuditLogger {
    /// Create a new audit logger with the given configuration.
    pub fn new(config: &AuditConfig) -> Self {
        let storage: Arc<dyn AuditStorage> = if config.stdout {
            Arc::new(DualStorage::new())
        } else {
            Arc::new(MemoryStorage::new())
        };
        Self { storage }
    }

    /// Create a logger with a custom storage backend.
    pub fn with_storage(storage: Arc<dyn AuditStorage>) -> Self {
        Self { storage }
    }

    /// Create a logger that only keeps records in memory.
    pub fn in_memory() -> Self {
        Self::with_storage(Arc::new(MemoryStorage::new()))
    }

    /// Record one guardrail decision.
    ///
    /// The prompt is truncated to its first 100 characters and the cost is
    /// rounded to 4 decimal places before storage.
    pub fn record(
        &self,
        prompt: &str,
        blocked: bool,
        reason: &str,
        cost: f64,
    ) -> Result<AuditRecord, AuditError> {
        let record = self
            .storage
            .append(AuditEntry::new(prompt, blocked, reason, cost))?;

        tracing::debug!(
            blocked = record.blocked,
            reason = %record.reason,
            cost_usd = record.estimated_cost_usd,
            "Audit record"
        );

        Ok(record)
    }

    /// Return the whole trail.
    ///
    /// `total_requests` always equals `logs.len()`; both come from one read of
    /// the log.
    pub fn query(&self) -> Result<AuditSnapshot, AuditError> {
        let logs = self.storage.snapshot()?;
        Ok(AuditSnapshot {
            total_requests: logs.len(),
            logs,
        })
    }

    /// Number of records in the trail.
    pub fn total_requests(&self) -> Result<usize, AuditError> {
        self.storage.len()
    }
}

impl Default for AuditLogger {
    fn default() -> Self {
        Self::in_memory()
    }
}

impl std::fmt::Debug for AuditLogger {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuditLogger").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_logger() {
        let logger = AuditLogger::in_memory();
        let snapshot = logger.query().unwrap();
        assert_eq!(snapshot.total_requests, 0);
        assert!(snapshot.logs.is_empty());
    }

    #[test]
    fn test_record_and_query() {
        let logger = AuditLogger::in_memory();

        logger
            .record("my ssn is 123", true, "Blocked due to unsafe word: ssn", 0.000006)
            .unwrap();
        logger.record("hello there", false, "Allowed", 0.000004).unwrap();

        let snapshot = logger.query().unwrap();
        assert_eq!(snapshot.total_requests, 2);
        assert_eq!(snapshot.logs[0].reason, "Blocked due to unsafe word: ssn");
        assert!(snapshot.logs[0].blocked);
        assert_eq!(snapshot.logs[1].reason, "Allowed");
        assert!(!snapshot.logs[1].blocked);
        assert_eq!(logger.total_requests().unwrap(), 2);
    }

    #[test]
    fn test_clones_share_the_log() {
        let logger = AuditLogger::in_memory();
        let clone = logger.clone();

        clone.record("a", false, "Allowed", 0.0).unwrap();
        assert_eq!(logger.query().unwrap().total_requests, 1);
    }

    #[test]
    fn test_config_selects_backend() {
        let logger = AuditLogger::new(&AuditConfig { stdout: true });
        logger.record("mirrored", false, "Allowed", 0.0).unwrap();
        assert_eq!(logger.total_requests().unwrap(), 1);

        let logger = AuditLogger::new(&AuditConfig::default());
        assert_eq!(logger.total_requests().unwrap(), 0);
    }

    #[test]
    fn test_snapshot_json_shape() {
        let logger = AuditLogger::in_memory();
        logger.record(&"z".repeat(120), true, "Prompt too long", 0.00006).unwrap();

        let json = serde_json::to_value(logger.query().unwrap()).unwrap();
        assert_eq!(json["total_requests"], 1);
        assert_eq!(json["logs"][0]["prompt_preview"].as_str().unwrap().len(), 100);
        assert_eq!(json["logs"][0]["estimated_cost_usd"], 0.0001);
    }
}
