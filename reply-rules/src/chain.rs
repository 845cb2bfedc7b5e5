//! # Rule chain
//!
//! Runs an ordered sequence of rules over one user message. The first rule that
//! returns a reply ends the run; rules that don't match return Continue and the
//! chain moves on. A chain whose rules all pass yields [`RuleError::NoMatch`];
//! the default chain never does, since its fallback always replies.

use std::sync::Arc;

use async_trait::async_trait;
use nova_core::RuleError;
use tracing::{debug, instrument};

/// One user message, pre-lowercased and trimmed once for the whole run.
pub struct RuleInput<'a> {
    /// The message as the user typed it.
    pub raw: &'a str,
    /// Lowercased, whitespace-trimmed form used for keyword tests.
    pub lower: String,
}

impl<'a> RuleInput<'a> {
    pub fn new(raw: &'a str) -> Self {
        Self {
            raw,
            lower: raw.trim().to_lowercase(),
        }
    }
}

/// Result of applying one rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RuleOutcome {
    /// Not this rule's message; try the next one.
    Continue,
    /// Matched; stop the chain and return this reply.
    Reply(String),
}

/// A single classification rule. Rules are stateless keyword/substring tests;
/// the trait is async so rules sit behind the same kind of seam the store does.
#[async_trait]
pub trait Rule: Send + Sync {
    /// Short name used in tracing output.
    fn name(&self) -> &'static str;

    /// Returns Reply when the rule matches, Continue otherwise.
    async fn apply(&self, input: &RuleInput<'_>) -> Result<RuleOutcome, RuleError>;
}

/// Ordered chain of rules; first Reply wins.
#[derive(Clone, Default)]
pub struct RuleChain {
    rules: Vec<Arc<dyn Rule>>,
}

impl RuleChain {
    /// Creates an empty chain.
    pub fn new() -> Self {
        Self { rules: Vec::new() }
    }

    /// Appends a rule. Order is precedence: earlier rules shadow later ones.
    pub fn add_rule(mut self, rule: Arc<dyn Rule>) -> Self {
        self.rules.push(rule);
        self
    }

    /// Number of rules in the chain.
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// True when the chain holds no rules.
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Runs the chain over one message and returns the first matching reply.
    #[instrument(skip(self, message))]
    pub async fn run(&self, message: &str) -> Result<String, RuleError> {
        let input = RuleInput::new(message);

        for rule in &self.rules {
            let outcome = rule.apply(&input).await?;
            debug!(rule = rule.name(), outcome = ?outcome, "Rule applied");
            if let RuleOutcome::Reply(reply) = outcome {
                debug!(rule = rule.name(), reply_len = reply.len(), "Chain matched");
                return Ok(reply);
            }
        }

        Err(RuleError::NoMatch)
    }
}
