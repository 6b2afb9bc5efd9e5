//! Completion backend abstraction.
//!
//! The gateway never calls a real model. `CompletionBackend` marks the seam
//! where one would plug in; `CannedBackend` acknowledges the prompt and quotes
//! the estimated cost.

use aiplat_policy::CostEstimate;
use async_trait::async_trait;

use crate::error::ServerError;

/// Produces the response text for an allowed prompt.
#[async_trait]
pub trait CompletionBackend: Send + Sync {
    async fn complete(&self, prompt: &str, estimate: &CostEstimate) -> Result<String, ServerError>;
}

/// Backend that answers every prompt with a fixed acknowledgement.
#[derive(Debug, Clone, Copy, Default)]
pub struct CannedBackend;

impl CannedBackend {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl CompletionBackend for CannedBackend {
    async fn complete(&self, _prompt: &str, estimate: &CostEstimate) -> Result<String, ServerError> {
        Ok(format!(
            "🤖 AI Response: Received your prompt.\nEstimated cost: ${:.4}",
            estimate.usd
        ))
    }
}
