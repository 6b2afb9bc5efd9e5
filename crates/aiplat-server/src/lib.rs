//! # aiplat-server
//!
//! HTTP gateway for the AI Platform.
//!
//! Each chat request is evaluated by the guardrails, recorded in the audit
//! trail exactly once, and only then answered:
//!
//! ```text
//! POST /ai/chat ──> GuardrailEvaluator ──> AuditLogger ──> CompletionBackend
//!                        │                                     (allowed only)
//!                        └── blocked: {"blocked": true, "reason": ...}
//! ```
//!
//! ## Endpoints
//!
//! | Method | Path | Description |
//! |--------|------|-------------|
//! | `GET` | `/health` | Liveness check |
//! | `POST` | `/ai/chat` | Evaluate a prompt and respond |
//! | `GET` | `/ai/audit-logs` | Full audit trail |

pub mod backend;
pub mod error;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod server;
pub mod state;

pub use backend::{CannedBackend, CompletionBackend};
pub use error::ServerError;
pub use routes::create_router;
pub use server::GatewayServer;
pub use state::AppState;
