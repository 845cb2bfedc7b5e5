//! Creative prompts: short stories and poems with the requested topic embedded.

use async_trait::async_trait;
use nova_core::RuleError;

use crate::chain::{Rule, RuleInput, RuleOutcome};
use crate::rules::strip_first_trigger;

const STORY_TRIGGERS: &[&str] = &["write a short story about", "tell me a story about"];
const POEM_TRIGGER: &str = "give me a poem about";

pub struct StoryRule;

#[async_trait]
impl Rule for StoryRule {
    fn name(&self) -> &'static str {
        "story"
    }

    async fn apply(&self, input: &RuleInput<'_>) -> Result<RuleOutcome, RuleError> {
        if !STORY_TRIGGERS.iter().any(|t| input.lower.contains(t)) {
            return Ok(RuleOutcome::Continue);
        }

        let topic = strip_first_trigger(input.raw, STORY_TRIGGERS);
        let setting = if topic.is_empty() {
            "of magic and mystery".to_string()
        } else {
            format!("where {} was commonplace", topic)
        };
        Ok(RuleOutcome::Reply(format!(
            "Once upon a time, in a world {}, there lived... a curious AI trying to \
             generate a good story! How about you help me with the next line?",
            setting
        )))
    }
}

pub struct PoemRule;

#[async_trait]
impl Rule for PoemRule {
    fn name(&self) -> &'static str {
        "poem"
    }

    async fn apply(&self, input: &RuleInput<'_>) -> Result<RuleOutcome, RuleError> {
        if !input.lower.contains(POEM_TRIGGER) {
            return Ok(RuleOutcome::Continue);
        }

        let topic = strip_first_trigger(input.raw, &[POEM_TRIGGER]);
        let third_line = if topic.is_empty() {
            "Of wonders vast, and futures sleek,".to_string()
        } else {
            format!("Of {}'s grace, we'll softly speak,", topic)
        };
        Ok(RuleOutcome::Reply(format!(
            "In realms of code, where thoughts reside,\n\
             A poem for you, with joy and pride.\n\
             {}\n\
             A digital verse, for all to seek.",
            third_line
        )))
    }
}
