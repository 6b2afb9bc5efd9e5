//! # aiplat-core
//!
//! Configuration shared by the AI Platform gateway crates.
//!
//! The gateway is configured from a single YAML file. Every section and field
//! has a default, so an empty file (or no file at all) yields the stock policy:
//!
//! ```yaml
//! server:
//!   bind: "0.0.0.0:8000"
//! guardrails:
//!   max_prompt_length: 500
//!   max_cost_usd: 0.02
//!   banned_terms: ["password", "ssn", "credit card"]
//! pricing:
//!   chars_per_token: 4
//!   usd_per_1k_tokens: 0.002
//! audit:
//!   stdout: false
//! ```

pub mod config;
pub mod error;

pub use config::{AuditConfig, GatewayConfig, GuardrailsConfig, PricingConfig, ServerConfig};
pub use error::ConfigError;
