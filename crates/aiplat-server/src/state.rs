//! Gateway application state.

use aiplat_audit::AuditLogger;
use aiplat_core::GatewayConfig;
use aiplat_policy::GuardrailEvaluator;
use std::sync::Arc;

use crate::backend::{CannedBackend, CompletionBackend};

/// Shared application state for the gateway.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    /// Guardrail evaluator built from configuration.
    evaluator: GuardrailEvaluator,
    /// Process-wide audit trail.
    audit: AuditLogger,
    /// Response generator for allowed prompts.
    backend: Arc<dyn CompletionBackend>,
}

impl AppState {
    /// Create state from configuration, with the canned backend.
    pub fn new(config: &GatewayConfig) -> Self {
        Self::from_parts(
            GuardrailEvaluator::new(config.guardrails.clone(), config.pricing.clone()),
            AuditLogger::new(&config.audit),
            Arc::new(CannedBackend::new()),
        )
    }

    /// Create state from already-built components.
    pub fn from_parts(
        evaluator: GuardrailEvaluator,
        audit: AuditLogger,
        backend: Arc<dyn CompletionBackend>,
    ) -> Self {
        Self {
            inner: Arc::new(AppStateInner {
                evaluator,
                audit,
                backend,
            }),
        }
    }

    /// Get the guardrail evaluator.
    pub fn evaluator(&self) -> &GuardrailEvaluator {
        &self.inner.evaluator
    }

    /// Get the audit logger.
    pub fn audit(&self) -> &AuditLogger {
        &self.inner.audit
    }

    /// Get the completion backend.
    pub fn backend(&self) -> &dyn CompletionBackend {
        self.inner.backend.as_ref()
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(&GatewayConfig::default())
    }
}
