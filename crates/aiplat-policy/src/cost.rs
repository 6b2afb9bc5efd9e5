//! Character-based cost estimation.
//!
//! Tokens are approximated from the character count:
//! `tokens = max(1, chars / chars_per_token)` (integer division), and
//! `cost = (tokens / 1000) * usd_per_1k_tokens`. The minimum of one token
//! means even an empty prompt has a small non-zero cost.

use aiplat_core::PricingConfig;
use serde::Serialize;

/// Estimated cost of serving a prompt.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CostEstimate {
    /// Approximate token count.
    pub tokens: u64,
    /// Estimated cost in USD.
    pub usd: f64,
}

impl CostEstimate {
    /// Estimate the cost of a prompt.
    pub fn for_prompt(prompt: &str, pricing: &PricingConfig) -> Self {
        let chars = prompt.chars().count();
        let per_token = pricing.chars_per_token.max(1);
        let tokens = ((chars / per_token) as u64).max(1);
        let usd = (tokens as f64 / 1000.0) * pricing.usd_per_1k_tokens;
        Self { tokens, usd }
    }
}

/// Estimate the cost of a prompt in USD.
pub fn estimate_cost(prompt: &str, pricing: &PricingConfig) -> f64 {
    CostEstimate::for_prompt(prompt, pricing).usd
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pricing() -> PricingConfig {
        PricingConfig::default()
    }

    #[test]
    fn test_empty_prompt_costs_one_token() {
        let estimate = CostEstimate::for_prompt("", &pricing());
        assert_eq!(estimate.tokens, 1);
        assert_eq!(estimate.usd, 0.000002);
    }

    #[test]
    fn test_short_prompt_floors_to_one_token() {
        assert_eq!(CostEstimate::for_prompt("abc", &pricing()).tokens, 1);
        assert_eq!(CostEstimate::for_prompt("abcdefg", &pricing()).tokens, 1);
        assert_eq!(CostEstimate::for_prompt("abcdefgh", &pricing()).tokens, 2);
    }

    #[test]
    fn test_four_thousand_chars() {
        let prompt = "a".repeat(4000);
        let estimate = CostEstimate::for_prompt(&prompt, &pricing());
        assert_eq!(estimate.tokens, 1000);
        assert_eq!(estimate.usd, 0.002);
    }

    #[test]
    fn test_forty_thousand_chars_is_exactly_the_default_limit() {
        let prompt = "a".repeat(40_000);
        let estimate = CostEstimate::for_prompt(&prompt, &pricing());
        assert_eq!(estimate.tokens, 10_000);
        assert_eq!(estimate.usd, 0.02);
    }

    #[test]
    fn test_remainder_chars_do_not_add_tokens() {
        let prompt = "a".repeat(40_001);
        assert_eq!(CostEstimate::for_prompt(&prompt, &pricing()).tokens, 10_000);

        let prompt = "a".repeat(40_004);
        let estimate = CostEstimate::for_prompt(&prompt, &pricing());
        assert_eq!(estimate.tokens, 10_001);
        assert!(estimate.usd > 0.02);
    }

    #[test]
    fn test_counts_characters_not_bytes() {
        // 8 characters, 24 bytes
        let prompt = "日本語日本語日本";
        assert_eq!(CostEstimate::for_prompt(prompt, &pricing()).tokens, 2);
    }

    #[test]
    fn test_custom_pricing() {
        let pricing = PricingConfig {
            chars_per_token: 2,
            usd_per_1k_tokens: 1.0,
        };
        let prompt = "a".repeat(2000);
        assert_eq!(estimate_cost(&prompt, &pricing), 1.0);
    }
}
