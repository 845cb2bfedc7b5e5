//! Small-talk rules: empty input, greetings, farewells, gratitude, help,
//! identity, creator, and well-being. All are plain substring tests against the
//! lowercased message.

use async_trait::async_trait;
use nova_core::RuleError;

use crate::chain::{Rule, RuleInput, RuleOutcome};

fn reply(text: &str) -> Result<RuleOutcome, RuleError> {
    Ok(RuleOutcome::Reply(text.to_string()))
}

fn matches_any(lower: &str, keywords: &[&str]) -> bool {
    keywords.iter().any(|k| lower.contains(k))
}

/// Empty or whitespace-only input, e.g. an image-only send.
pub struct EmptyInputRule;

#[async_trait]
impl Rule for EmptyInputRule {
    fn name(&self) -> &'static str {
        "empty_input"
    }

    async fn apply(&self, input: &RuleInput<'_>) -> Result<RuleOutcome, RuleError> {
        if input.lower.is_empty() {
            return reply(
                "You've sent an image! Is there anything specific you'd like to discuss \
                 about it, or perhaps something else on your mind?",
            );
        }
        Ok(RuleOutcome::Continue)
    }
}

pub struct GreetingRule;

#[async_trait]
impl Rule for GreetingRule {
    fn name(&self) -> &'static str {
        "greeting"
    }

    async fn apply(&self, input: &RuleInput<'_>) -> Result<RuleOutcome, RuleError> {
        if matches_any(&input.lower, &["hello", "hi", "hey"]) {
            return reply("Hello! 👋 I'm Nova, your AI assistant. How can I help you today?");
        }
        Ok(RuleOutcome::Continue)
    }
}

pub struct FarewellRule;

#[async_trait]
impl Rule for FarewellRule {
    fn name(&self) -> &'static str {
        "farewell"
    }

    async fn apply(&self, input: &RuleInput<'_>) -> Result<RuleOutcome, RuleError> {
        if matches_any(&input.lower, &["bye", "goodbye", "see you"]) {
            return reply("Goodbye! It was nice chatting with you. Take care! 👋");
        }
        Ok(RuleOutcome::Continue)
    }
}

pub struct GratitudeRule;

#[async_trait]
impl Rule for GratitudeRule {
    fn name(&self) -> &'static str {
        "gratitude"
    }

    async fn apply(&self, input: &RuleInput<'_>) -> Result<RuleOutcome, RuleError> {
        if input.lower.contains("thank") {
            return reply(
                "You're very welcome! 😊 Always happy to assist. Let me know if there's \
                 anything else I can do.",
            );
        }
        Ok(RuleOutcome::Continue)
    }
}

pub struct HelpRule;

#[async_trait]
impl Rule for HelpRule {
    fn name(&self) -> &'static str {
        "help"
    }

    async fn apply(&self, input: &RuleInput<'_>) -> Result<RuleOutcome, RuleError> {
        if matches_any(&input.lower, &["help", "what can you do"]) {
            return reply(
                "Sure! I'm here to assist with a wide range of tasks: I can help with \
                 writing, provide information, answer questions, brainstorm ideas, and even \
                 generate creative content. What's on your mind?",
            );
        }
        Ok(RuleOutcome::Continue)
    }
}

pub struct IdentityRule;

#[async_trait]
impl Rule for IdentityRule {
    fn name(&self) -> &'static str {
        "identity"
    }

    async fn apply(&self, input: &RuleInput<'_>) -> Result<RuleOutcome, RuleError> {
        if matches_any(&input.lower, &["your name", "who are you"]) {
            return reply("I'm Nova, your helpful AI assistant! ✨ I was built by the Novachat team.");
        }
        Ok(RuleOutcome::Continue)
    }
}

pub struct CreatorRule;

#[async_trait]
impl Rule for CreatorRule {
    fn name(&self) -> &'static str {
        "creator"
    }

    async fn apply(&self, input: &RuleInput<'_>) -> Result<RuleOutcome, RuleError> {
        if input.lower.contains("who created you") {
            return reply("I was built by the Novachat team to assist and chat with you.");
        }
        Ok(RuleOutcome::Continue)
    }
}

pub struct WellBeingRule;

#[async_trait]
impl Rule for WellBeingRule {
    fn name(&self) -> &'static str {
        "well_being"
    }

    async fn apply(&self, input: &RuleInput<'_>) -> Result<RuleOutcome, RuleError> {
        if input.lower.contains("how are you") {
            return reply(
                "I'm just a program, so I don't have feelings, but I'm functioning \
                 smoothly! Thanks for asking 😊",
            );
        }
        Ok(RuleOutcome::Continue)
    }
}
