//! Knowledge rules: canned definitions and safe arithmetic.
//!
//! Ordering quirk: definition requests and arithmetic requests share the
//! "what is" trigger. The definition rule yields to the arithmetic rule whenever
//! the message would also trigger it (contains "what is" plus an operator), so
//! "what is 2+2" reaches the parser instead of the dictionary miss path.

use async_trait::async_trait;
use nova_core::RuleError;
use tracing::debug;

use crate::calc;
use crate::chain::{Rule, RuleInput, RuleOutcome};
use crate::definitions;
use crate::rules::strip_first_trigger;

const DEFINITION_TRIGGERS: &[&str] = &["what is", "define", "explain"];
const OPERATORS: &[char] = &['+', '-', '*', '/'];

const CLARIFICATION_REPLY: &str =
    "I can try simple calculations! Please ensure it's a valid mathematical expression.";

fn looks_like_arithmetic(lower: &str) -> bool {
    lower.contains("what is") && lower.contains(OPERATORS)
}

/// Definition requests: "what is X" / "define X" / "explain X".
pub struct DefinitionRule;

#[async_trait]
impl Rule for DefinitionRule {
    fn name(&self) -> &'static str {
        "definition"
    }

    async fn apply(&self, input: &RuleInput<'_>) -> Result<RuleOutcome, RuleError> {
        if !DEFINITION_TRIGGERS.iter().any(|t| input.lower.contains(t)) {
            return Ok(RuleOutcome::Continue);
        }
        if looks_like_arithmetic(&input.lower) {
            return Ok(RuleOutcome::Continue);
        }

        let term = strip_first_trigger(input.raw, DEFINITION_TRIGGERS);
        match definitions::lookup(&term.to_lowercase()) {
            Some(definition) => Ok(RuleOutcome::Reply(definition.to_string())),
            None => {
                debug!(term = %term, "Unknown definition term");
                Ok(RuleOutcome::Reply(format!(
                    "\"{}\" is an interesting concept! While I don't have a specific \
                     definition readily available, I'm constantly learning. Can you tell me \
                     more about it, or would you like to ask something else?",
                    term
                )))
            }
        }
    }
}

/// Arithmetic requests: "what is <expr>" with at least one operator. The
/// expression goes through the restricted parser; malformed input and
/// non-finite results map to the fixed clarification reply.
pub struct ArithmeticRule;

#[async_trait]
impl Rule for ArithmeticRule {
    fn name(&self) -> &'static str {
        "arithmetic"
    }

    async fn apply(&self, input: &RuleInput<'_>) -> Result<RuleOutcome, RuleError> {
        if !looks_like_arithmetic(&input.lower) {
            return Ok(RuleOutcome::Continue);
        }

        let expr = strip_first_trigger(input.raw, &["what is"]);
        match calc::eval(&expr) {
            Ok(value) if value.is_finite() => Ok(RuleOutcome::Reply(format!(
                "The answer to {} is {}.",
                expr,
                format_number(value)
            ))),
            Ok(_) => Ok(RuleOutcome::Reply(CLARIFICATION_REPLY.to_string())),
            Err(e) => {
                debug!(expr = %expr, error = %e, "Arithmetic parse failed");
                Ok(RuleOutcome::Reply(CLARIFICATION_REPLY.to_string()))
            }
        }
    }
}

/// Prints whole results without a trailing ".0" so "2+2" answers with "4".
fn format_number(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else {
        format!("{}", value)
    }
}

#[cfg(test)]
mod tests {
    use super::format_number;

    #[test]
    fn test_format_number() {
        assert_eq!(format_number(4.0), "4");
        assert_eq!(format_number(-12.0), "-12");
        assert_eq!(format_number(2.5), "2.5");
    }
}
