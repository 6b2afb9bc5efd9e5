//! Request and response bodies.

use serde::{Deserialize, Serialize};

/// Body of `POST /ai/chat`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatRequest {
    pub prompt: String,
}

/// Body of a `POST /ai/chat` response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ChatResponse {
    Blocked {
        blocked: bool,
        reason: String,
    },
    Allowed {
        blocked: bool,
        response: String,
        estimated_cost_usd: f64,
    },
}

impl ChatResponse {
    pub fn blocked(reason: impl Into<String>) -> Self {
        Self::Blocked {
            blocked: true,
            reason: reason.into(),
        }
    }

    pub fn allowed(response: impl Into<String>, estimated_cost_usd: f64) -> Self {
        Self::Allowed {
            blocked: false,
            response: response.into(),
            estimated_cost_usd,
        }
    }
}

/// Body of `GET /health`.
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub service: &'static str,
    pub message: &'static str,
}

impl Default for HealthResponse {
    fn default() -> Self {
        Self {
            status: "ok",
            service: "ai-platform",
            message: "AI Platform is running",
        }
    }
}
