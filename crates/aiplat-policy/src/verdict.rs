//! Guardrail decisions.
//!
//! A decision is kept as a tagged [`Verdict`] and only rendered to the wire
//! reason string at the boundary. The rendered wording is part of the public
//! HTTP contract and must not change.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Reason stored in the audit trail for allowed prompts.
pub const ALLOWED_REASON: &str = "Allowed";

/// Outcome of evaluating a prompt.
#[derive(Debug, Clone, PartialEq)]
pub enum Verdict {
    /// Every check passed.
    Allowed,
    /// The prompt has more characters than allowed.
    TooLong,
    /// The prompt contains a banned term (as configured).
    BannedTerm(String),
    /// The estimated cost in USD exceeds the limit.
    CostExceeded(f64),
}

impl Verdict {
    /// Whether the prompt may proceed to generation.
    pub fn is_allowed(&self) -> bool {
        matches!(self, Self::Allowed)
    }

    /// The check that produced this verdict.
    pub fn kind(&self) -> VerdictKind {
        match self {
            Self::Allowed => VerdictKind::Allowed,
            Self::TooLong => VerdictKind::TooLong,
            Self::BannedTerm(_) => VerdictKind::BannedTerm,
            Self::CostExceeded(_) => VerdictKind::CostExceeded,
        }
    }

    /// Block reason, or `None` when allowed.
    pub fn reason(&self) -> Option<String> {
        if self.is_allowed() {
            None
        } else {
            Some(self.to_string())
        }
    }

    /// Reason as written to the audit trail.
    pub fn audit_reason(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Allowed => write!(f, "{}", ALLOWED_REASON),
            Self::TooLong => write!(f, "Prompt too long"),
            Self::BannedTerm(term) => write!(f, "Blocked due to unsafe word: {}", term),
            Self::CostExceeded(cost) => write!(f, "Estimated cost ${:.4} exceeds limit", cost),
        }
    }
}

/// Discriminant of a [`Verdict`], used for structured logging.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VerdictKind {
    Allowed,
    TooLong,
    BannedTerm,
    CostExceeded,
}

impl fmt::Display for VerdictKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Allowed => write!(f, "ALLOWED"),
            Self::TooLong => write!(f, "TOO_LONG"),
            Self::BannedTerm => write!(f, "BANNED_TERM"),
            Self::CostExceeded => write!(f, "COST_EXCEEDED"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reason_wording() {
        assert_eq!(Verdict::TooLong.to_string(), "Prompt too long");
        assert_eq!(
            Verdict::BannedTerm("credit card".to_string()).to_string(),
            "Blocked due to unsafe word: credit card"
        );
        assert_eq!(
            Verdict::CostExceeded(0.020002).to_string(),
            "Estimated cost $0.0200 exceeds limit"
        );
        assert_eq!(
            Verdict::CostExceeded(0.12345).to_string(),
            "Estimated cost $0.1235 exceeds limit"
        );
    }

    #[test]
    fn test_allowed_has_no_reason() {
        assert!(Verdict::Allowed.is_allowed());
        assert_eq!(Verdict::Allowed.reason(), None);
        assert_eq!(Verdict::Allowed.audit_reason(), "Allowed");
    }

    #[test]
    fn test_blocked_reason_matches_audit_reason() {
        let verdict = Verdict::BannedTerm("ssn".to_string());
        assert!(!verdict.is_allowed());
        assert_eq!(verdict.reason(), Some(verdict.audit_reason()));
    }

    #[test]
    fn test_kind_serializes_snake_case() {
        let json = serde_json::to_string(&Verdict::CostExceeded(1.0).kind()).unwrap();
        assert_eq!(json, "\"cost_exceeded\"");
        assert_eq!(Verdict::TooLong.kind().to_string(), "TOO_LONG");
    }
}
