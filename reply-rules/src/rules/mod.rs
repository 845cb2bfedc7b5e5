//! The cascade rules, in precedence order. [`default_chain`] assembles them the
//! way the responder evaluates them: small-talk first, then knowledge and
//! arithmetic, then creative prompts, then the fallbacks.

mod creative;
mod fallback;
mod knowledge;
mod smalltalk;

use std::sync::Arc;

pub use creative::{PoemRule, StoryRule};
pub use fallback::{FallbackRule, LongInputRule, FALLBACK_REPLIES};
pub use knowledge::{ArithmeticRule, DefinitionRule};
pub use smalltalk::{
    CreatorRule, EmptyInputRule, FarewellRule, GratitudeRule, GreetingRule, HelpRule,
    IdentityRule, WellBeingRule,
};

use crate::chain::RuleChain;
use crate::picker::Picker;

/// Builds the full cascade with the given fallback picker.
pub fn default_chain(picker: Arc<dyn Picker>) -> RuleChain {
    RuleChain::new()
        .add_rule(Arc::new(EmptyInputRule))
        .add_rule(Arc::new(GreetingRule))
        .add_rule(Arc::new(FarewellRule))
        .add_rule(Arc::new(GratitudeRule))
        .add_rule(Arc::new(HelpRule))
        .add_rule(Arc::new(IdentityRule))
        .add_rule(Arc::new(CreatorRule))
        .add_rule(Arc::new(WellBeingRule))
        .add_rule(Arc::new(DefinitionRule))
        .add_rule(Arc::new(ArithmeticRule))
        .add_rule(Arc::new(StoryRule))
        .add_rule(Arc::new(PoemRule))
        .add_rule(Arc::new(LongInputRule))
        .add_rule(Arc::new(FallbackRule::new(picker)))
}

/// Removes the earliest case-insensitive occurrence of any trigger phrase and
/// trims the remainder. Ties on position keep the first-listed trigger.
///
/// Extraction slices the original text so the remainder keeps its casing; when
/// lowercasing changed byte lengths (rare non-ASCII input) the lowercased form
/// is sliced instead.
pub(crate) fn strip_first_trigger(raw: &str, triggers: &[&str]) -> String {
    let lower = raw.to_lowercase();

    let mut earliest: Option<(usize, usize)> = None;
    for trigger in triggers {
        if let Some(pos) = lower.find(trigger) {
            if earliest.map_or(true, |(best, _)| pos < best) {
                earliest = Some((pos, trigger.len()));
            }
        }
    }

    let Some((pos, len)) = earliest else {
        return raw.trim().to_string();
    };

    // Positions are only guaranteed valid in `lower`.
    let aligned = raw.len() == lower.len()
        && raw.is_char_boundary(pos)
        && raw.is_char_boundary(pos + len);
    let source = if aligned { raw } else { lower.as_str() };
    let mut remainder = String::with_capacity(source.len() - len);
    remainder.push_str(&source[..pos]);
    remainder.push_str(&source[pos + len..]);
    remainder.trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::strip_first_trigger;

    #[test]
    fn test_strips_earliest_trigger_case_insensitively() {
        assert_eq!(
            strip_first_trigger("What is the capital?", &["what is", "define"]),
            "the capital?"
        );
        assert_eq!(
            strip_first_trigger("please DEFINE recursion", &["what is", "define"]),
            "please  recursion"
        );
    }

    #[test]
    fn test_no_trigger_just_trims() {
        assert_eq!(strip_first_trigger("  plain text  ", &["define"]), "plain text");
    }
}
