//! JSON chat envelope: `{"message": ...}` in, `{"reply": ...}` out.

use healthbot_core::traits::Retriever;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::engine::ResponseEngine;

pub const APOLOGY_REPLY: &str = "I'm having trouble processing your request. Please try again.";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ChatRequest {
	pub message: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ChatReply {
	pub reply: String,
}

impl<R: Retriever> ResponseEngine<R> {
	pub fn chat(&self, request: &ChatRequest) -> ChatReply { ChatReply { reply: self.respond(&request.message) } }
}

/// Decodes `body`, answers it, and never fails: a body without a string
/// `message` gets the apology reply.
pub fn handle_json<R: Retriever>(engine: &ResponseEngine<R>, body: &str) -> ChatReply {
	match serde_json::from_str::<ChatRequest>(body) {
		Ok(request) => engine.chat(&request),
		Err(e) => {
			warn!(error = %e, "rejected chat request");
			ChatReply { reply: APOLOGY_REPLY.to_string() }
		}
	}
}
