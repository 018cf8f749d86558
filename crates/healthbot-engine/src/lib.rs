//! healthbot-engine
//!
//! Composes the literal matcher, the similarity tier and the fallback chain
//! into a [`ResponseEngine`] that always produces a reply.

pub mod chat;
pub mod engine;
pub mod fallback;
pub mod matcher;

pub use chat::{handle_json, ChatReply, ChatRequest};
pub use engine::ResponseEngine;
pub use fallback::FallbackResolver;
pub use matcher::TieredMatcher;
