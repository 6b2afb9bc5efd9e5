//! Guardrail and pricing configuration.

use serde::{Deserialize, Serialize};

/// Policy thresholds applied to every prompt.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GuardrailsConfig {
    /// Maximum prompt length in characters (not tokens).
    #[serde(default = "default_max_prompt_length")]
    pub max_prompt_length: usize,

    /// Maximum estimated cost per request, in USD.
    #[serde(default = "default_max_cost_usd")]
    pub max_cost_usd: f64,

    /// Terms that block a prompt when found as a case-insensitive substring.
    /// Checked in the listed order; the first match is reported.
    #[serde(default = "default_banned_terms")]
    pub banned_terms: Vec<String>,
}

impl Default for GuardrailsConfig {
    fn default() -> Self {
        Self {
            max_prompt_length: default_max_prompt_length(),
            max_cost_usd: default_max_cost_usd(),
            banned_terms: default_banned_terms(),
        }
    }
}

fn default_max_prompt_length() -> usize {
    500
}

fn default_max_cost_usd() -> f64 {
    0.02
}

fn default_banned_terms() -> Vec<String> {
    vec![
        "password".to_string(),
        "ssn".to_string(),
        "credit card".to_string(),
    ]
}

/// Parameters of the character-based cost estimate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PricingConfig {
    /// Characters counted as one token.
    #[serde(default = "default_chars_per_token")]
    pub chars_per_token: usize,

    /// Price per 1000 tokens, in USD.
    #[serde(default = "default_usd_per_1k_tokens")]
    pub usd_per_1k_tokens: f64,
}

impl Default for PricingConfig {
    fn default() -> Self {
        Self {
            chars_per_token: default_chars_per_token(),
            usd_per_1k_tokens: default_usd_per_1k_tokens(),
        }
    }
}

fn default_chars_per_token() -> usize {
    4
}

fn default_usd_per_1k_tokens() -> f64 {
    0.002
}
