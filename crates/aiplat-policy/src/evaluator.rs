//! Guardrail evaluator that runs the length, banned-term and cost checks.
//!
//! The `GuardrailEvaluator` is the entry point for deciding whether a prompt
//! may reach the generation backend. Checks run in a fixed order and the first
//! failure wins:
//!
//! 1. **Length** - character count against `max_prompt_length`
//! 2. **Banned terms** - case-insensitive substring match, in configured order
//! 3. **Cost** - estimated cost against `max_cost_usd`

use aiplat_core::{GuardrailsConfig, PricingConfig};

use crate::cost::CostEstimate;
use crate::verdict::Verdict;

/// Result of evaluating one prompt.
#[derive(Debug, Clone, PartialEq)]
pub struct Evaluation {
    /// The decision.
    pub verdict: Verdict,
    /// Estimated cost, computed regardless of the verdict.
    pub cost: CostEstimate,
}

impl Evaluation {
    /// Whether the prompt is allowed.
    pub fn allowed(&self) -> bool {
        self.verdict.is_allowed()
    }

    /// Block reason, or `None` when allowed.
    pub fn reason(&self) -> Option<String> {
        self.verdict.reason()
    }
}

/// Evaluates prompts against the configured guardrails.
///
/// Evaluation is pure and synchronous; the evaluator holds no mutable state and
/// can be shared freely between request handlers.
#[derive(Debug, Clone)]
pub struct GuardrailEvaluator {
    guardrails: GuardrailsConfig,
    pricing: PricingConfig,
    /// Banned terms lowercased once, paired with the configured spelling.
    banned_terms: Vec<(String, String)>,
}

impl GuardrailEvaluator {
    /// Create an evaluator from guardrail and pricing configuration.
    pub fn new(guardrails: GuardrailsConfig, pricing: PricingConfig) -> Self {
        let banned_terms = guardrails
            .banned_terms
            .iter()
            .map(|term| (term.to_lowercase(), term.clone()))
            .collect();

        Self {
            guardrails,
            pricing,
            banned_terms,
        }
    }

    /// Estimate the cost of a prompt with this evaluator's pricing.
    pub fn estimate(&self, prompt: &str) -> CostEstimate {
        CostEstimate::for_prompt(prompt, &self.pricing)
    }

    /// Evaluate a prompt.
    pub fn evaluate(&self, prompt: &str) -> Evaluation {
        let cost = self.estimate(prompt);

        let verdict = match self.run_checks(prompt, &cost) {
            Ok(()) => Verdict::Allowed,
            Err(verdict) => verdict,
        };

        tracing::trace!(
            verdict = %verdict.kind(),
            tokens = cost.tokens,
            cost_usd = cost.usd,
            "Guardrail evaluation"
        );

        Evaluation { verdict, cost }
    }

    fn run_checks(&self, prompt: &str, cost: &CostEstimate) -> Result<(), Verdict> {
        self.check_length(prompt)?;
        self.check_banned_terms(prompt)?;
        self.check_cost(cost)?;
        Ok(())
    }

    fn check_length(&self, prompt: &str) -> Result<(), Verdict> {
        if prompt.chars().count() > self.guardrails.max_prompt_length {
            return Err(Verdict::TooLong);
        }
        Ok(())
    }

    fn check_banned_terms(&self, prompt: &str) -> Result<(), Verdict> {
        let lowered = prompt.to_lowercase();
        for (needle, term) in &self.banned_terms {
            if lowered.contains(needle.as_str()) {
                return Err(Verdict::BannedTerm(term.clone()));
            }
        }
        Ok(())
    }

    fn check_cost(&self, cost: &CostEstimate) -> Result<(), Verdict> {
        if cost.usd > self.guardrails.max_cost_usd {
            return Err(Verdict::CostExceeded(cost.usd));
        }
        Ok(())
    }
}

impl Default for GuardrailEvaluator {
    fn default() -> Self {
        Self::new(GuardrailsConfig::default(), PricingConfig::default())
    }
}
