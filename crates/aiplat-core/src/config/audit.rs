//! Audit trail configuration.

use serde::{Deserialize, Serialize};

/// Configuration for the in-memory audit trail.
///
/// Records always live in process memory only; there is no persistent backend.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditConfig {
    /// Also write each record to stdout as a JSON line.
    #[serde(default)]
    pub stdout: bool,
}
