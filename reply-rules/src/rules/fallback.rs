//! Terminal rules: the long-input acknowledgment and the randomized generic
//! fallback that makes the cascade total.

use std::sync::Arc;

use async_trait::async_trait;
use nova_core::RuleError;

use crate::chain::{Rule, RuleInput, RuleOutcome};
use crate::picker::Picker;

/// Generic continuation replies the fallback draws from.
pub const FALLBACK_REPLIES: &[&str] = &[
    "That's a great point! What else would you like to know or discuss?",
    "Hmm, that's an interesting thought. Can you elaborate a bit?",
    "I'm still learning and growing! Could you rephrase your question, or perhaps ask me something different?",
    "My apologies, I'm not entirely sure how to respond to that specific query yet. Is there another way I can help?",
    "I understand you're asking about that. What specific aspect are you most interested in?",
    "Thanks for that! What's next on your mind?",
];

/// Messages over 50 characters that nothing classified get a processing note.
pub struct LongInputRule;

#[async_trait]
impl Rule for LongInputRule {
    fn name(&self) -> &'static str {
        "long_input"
    }

    async fn apply(&self, input: &RuleInput<'_>) -> Result<RuleOutcome, RuleError> {
        if input.lower.chars().count() > 50 {
            return Ok(RuleOutcome::Reply(
                "That's a lot to think about! Let me process that for a moment...".to_string(),
            ));
        }
        Ok(RuleOutcome::Continue)
    }
}

/// Always matches: picks one of [`FALLBACK_REPLIES`] through the injected
/// picker so tests can pin the choice.
pub struct FallbackRule {
    picker: Arc<dyn Picker>,
}

impl FallbackRule {
    pub fn new(picker: Arc<dyn Picker>) -> Self {
        Self { picker }
    }
}

#[async_trait]
impl Rule for FallbackRule {
    fn name(&self) -> &'static str {
        "fallback"
    }

    async fn apply(&self, _input: &RuleInput<'_>) -> Result<RuleOutcome, RuleError> {
        let index = self.picker.pick(FALLBACK_REPLIES.len());
        let reply = FALLBACK_REPLIES
            .get(index)
            .ok_or(RuleError::PickOutOfRange(index, FALLBACK_REPLIES.len()))?;
        Ok(RuleOutcome::Reply((*reply).to_string()))
    }
}
