//! # aiplat-audit
//!
//! Audit trail for guardrail decisions.
//!
//! Every chat request that reaches the guardrail evaluator is recorded exactly
//! once, whether it was allowed or blocked. Records are kept in process memory,
//! in insertion order, for the lifetime of the process. There is no deletion,
//! mutation or eviction.
//!
//! ## Record Format
//!
//! | Field | Description |
//! |-------|-------------|
//! | `timestamp` | UTC time the record was appended (RFC 3339) |
//! | `prompt_preview` | First 100 characters of the prompt |
//! | `blocked` | Whether the prompt was blocked |
//! | `reason` | Block reason, or `"Allowed"` |
//! | `estimated_cost_usd` | Estimated cost rounded to 4 decimal places |
//!
//! ## Example Usage
//!
//! ```rust
//! use aiplat_audit::AuditLogger;
//!
//! # fn example() -> Result<(), aiplat_audit::AuditError> {
//! let logger = AuditLogger::in_memory();
//!
//! logger.record("What is my password?", true, "Blocked due to unsafe word: password", 0.00001)?;
//! logger.record("Hello", false, "Allowed", 0.000002)?;
//!
//! let snapshot = logger.query()?;
//! assert_eq!(snapshot.total_requests, 2);
//! assert!(snapshot.logs[0].blocked);
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

pub mod error;
pub mod logger;
pub mod record;
pub mod storage;

pub use error::AuditError;
pub use logger::{AuditLogger, AuditSnapshot};
pub use record::{AuditEntry, AuditRecord, PROMPT_PREVIEW_CHARS};
pub use storage::{AuditStorage, DualStorage, MemoryStorage};
