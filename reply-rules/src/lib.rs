//! # reply-rules
//!
//! The synthetic responder: an ordered chain of pattern rules evaluated
//! first-match-wins over user text, producing a canned reply. The final
//! fallback always matches, so classification is total. [`Responder`] wraps the
//! chain with the simulated latency callers must await.
//!
//! ## Modules
//!
//! - [`chain`] – Rule trait, RuleInput/RuleOutcome, RuleChain runner
//! - [`calc`] – safe arithmetic expression parser (no dynamic evaluation)
//! - [`picker`] – injectable choice source for the randomized fallback
//! - [`rules`] – the cascade rules in order
//! - [`responder`] – delaying façade over the default chain

pub mod calc;
pub mod chain;
pub mod picker;
pub mod responder;
pub mod rules;

mod definitions;

pub use chain::{Rule, RuleChain, RuleInput, RuleOutcome};
pub use picker::{FixedPicker, Picker, RandomPicker};
pub use responder::Responder;
pub use rules::default_chain;
