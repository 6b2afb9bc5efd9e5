//! Configuration types for the AI Platform gateway.
//!
//! A single `GatewayConfig` is loaded at startup and handed to the evaluator,
//! the audit logger and the HTTP server. Configuration is read from YAML; all
//! sections are optional and fall back to the stock policy values.

pub mod audit;
pub mod guardrails;
pub mod server;

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs;
use std::path::Path;

use crate::error::ConfigError;

pub use audit::AuditConfig;
pub use guardrails::{GuardrailsConfig, PricingConfig};
pub use server::ServerConfig;

/// Complete gateway configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GatewayConfig {
    /// HTTP listener settings.
    #[serde(default)]
    pub server: ServerConfig,

    /// Guardrail thresholds and banned terms.
    #[serde(default)]
    pub guardrails: GuardrailsConfig,

    /// Cost estimation parameters.
    #[serde(default)]
    pub pricing: PricingConfig,

    /// Audit trail settings.
    #[serde(default)]
    pub audit: AuditConfig,
}

impl GatewayConfig {
    /// Load and validate configuration from a YAML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let raw = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_yaml_str(&raw)
    }

    /// Parse and validate configuration from a YAML string.
    ///
    /// An empty document yields the default configuration.
    pub fn from_yaml_str(raw: &str) -> Result<Self, ConfigError> {
        let config: Self = if raw.trim().is_empty() {
            Self::default()
        } else {
            serde_yaml::from_str(raw)?
        };
        config.validate()?;
        Ok(config)
    }

    /// Check that every value is usable.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.server.bind.trim().is_empty() {
            return Err(ConfigError::invalid("server.bind", "must not be empty"));
        }

        validate_money("guardrails.max_cost_usd", self.guardrails.max_cost_usd)?;
        validate_money("pricing.usd_per_1k_tokens", self.pricing.usd_per_1k_tokens)?;

        if self.pricing.chars_per_token == 0 {
            return Err(ConfigError::invalid(
                "pricing.chars_per_token",
                "must be greater than zero",
            ));
        }

        let mut seen = HashSet::new();
        for term in &self.guardrails.banned_terms {
            if term.trim().is_empty() {
                return Err(ConfigError::invalid(
                    "guardrails.banned_terms",
                    "terms must not be empty",
                ));
            }
            if !seen.insert(term.to_lowercase()) {
                return Err(ConfigError::invalid(
                    "guardrails.banned_terms",
                    format!("duplicate term '{}'", term),
                ));
            }
        }

        Ok(())
    }
}

fn validate_money(field: &'static str, value: f64) -> Result<(), ConfigError> {
    if !value.is_finite() || value < 0.0 {
        return Err(ConfigError::invalid(
            field,
            format!("must be a non-negative amount, got {}", value),
        ));
    }
    Ok(())
}
