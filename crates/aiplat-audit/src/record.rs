//! Audit record types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Maximum number of prompt characters kept in a record.
pub const PROMPT_PREVIEW_CHARS: usize = 100;

/// A decision waiting to be appended to the audit trail.
///
/// The timestamp is assigned by the storage at append time, so insertion
/// order and timestamp order always agree.
#[derive(Debug, Clone, PartialEq)]
pub struct AuditEntry {
    /// Truncated prompt.
    pub prompt_preview: String,
    /// Whether the prompt was blocked.
    pub blocked: bool,
    /// Block reason, or "Allowed".
    pub reason: String,
    /// Estimated cost, already rounded.
    pub estimated_cost_usd: f64,
}

impl AuditEntry {
    /// Build an entry from a full prompt and its unrounded cost.
    pub fn new(prompt: &str, blocked: bool, reason: impl Into<String>, cost: f64) -> Self {
        Self {
            prompt_preview: preview(prompt),
            blocked,
            reason: reason.into(),
            estimated_cost_usd: round_cost(cost),
        }
    }

    /// Stamp the entry, producing an immutable record.
    pub fn stamp(self, timestamp: DateTime<Utc>) -> AuditRecord {
        AuditRecord {
            timestamp,
            prompt_preview: self.prompt_preview,
            blocked: self.blocked,
            reason: self.reason,
            estimated_cost_usd: self.estimated_cost_usd,
        }
    }
}

/// One guardrail decision in the audit trail.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuditRecord {
    /// When the record was appended.
    pub timestamp: DateTime<Utc>,
    /// First 100 characters of the prompt.
    pub prompt_preview: String,
    /// Whether the prompt was blocked.
    pub blocked: bool,
    /// Block reason, or "Allowed".
    pub reason: String,
    /// Estimated cost in USD, rounded to 4 decimal places.
    pub estimated_cost_usd: f64,
}

/// First [`PROMPT_PREVIEW_CHARS`] characters of a prompt; not word aware.
fn preview(prompt: &str) -> String {
    prompt.chars().take(PROMPT_PREVIEW_CHARS).collect()
}

/// Round to 4 decimal places from the exact binary value, as `{:.4}` prints it.
fn round_cost(cost: f64) -> f64 {
    format!("{:.4}", cost).parse().unwrap_or(cost)
}
