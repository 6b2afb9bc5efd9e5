//! # aiplat-policy
//!
//! Guardrail evaluation for the AI Platform gateway.
//!
//! A prompt passes through three checks, in this order, and the first failure
//! decides the outcome:
//!
//! 1. **Length** - more characters than `max_prompt_length` blocks the prompt
//! 2. **Banned terms** - any configured term, matched case-insensitively
//! 3. **Cost** - an estimated cost above `max_cost_usd`
//!
//! The estimated cost is always computed, even when an earlier check already
//! blocked the prompt, because callers record it in the audit trail.
//!
//! ```rust
//! use aiplat_core::{GuardrailsConfig, PricingConfig};
//! use aiplat_policy::{GuardrailEvaluator, Verdict};
//!
//! let evaluator = GuardrailEvaluator::new(GuardrailsConfig::default(), PricingConfig::default());
//!
//! let evaluation = evaluator.evaluate("What is my password?");
//! assert!(!evaluation.allowed());
//! assert_eq!(evaluation.verdict, Verdict::BannedTerm("password".to_string()));
//! assert_eq!(
//!     evaluation.reason().as_deref(),
//!     Some("Blocked due to unsafe word: password")
//! );
//! ```

pub mod cost;
pub mod evaluator;
pub mod verdict;

pub use cost::{CostEstimate, estimate_cost};
pub use evaluator::{Evaluation, GuardrailEvaluator};
pub use verdict::{Verdict, VerdictKind};
