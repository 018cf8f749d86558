use healthbot_core::knowledge::{EMPTY_INPUT_REPLY, GREETING_TOKENS, THANKS_REPLY, THANKS_TOKENS};
use healthbot_core::traits::{pick, ChoiceSource};
use healthbot_core::types::{MatchMode, MatchTier, Reply};
use healthbot_core::KnowledgeBase;

/// Literal keyword tiers, checked in a fixed order on normalized text:
/// empty input, greeting, thanks, emergency, symptom.
#[derive(Debug, Clone, Copy, Default)]
pub struct TieredMatcher {
	mode: MatchMode,
}

impl TieredMatcher {
	pub fn new(mode: MatchMode) -> Self { Self { mode } }
	pub fn mode(&self) -> MatchMode { self.mode }

	/// `normalized` must already be lowercased and trimmed.
	pub fn match_literal<C>(&self, kb: &KnowledgeBase, normalized: &str, chooser: &mut C) -> Option<Reply>
	where
		C: ChoiceSource + ?Sized,
	{
		if normalized.is_empty() { return Some(reply(EMPTY_INPUT_REPLY, MatchTier::EmptyInput)); }

		if self.any(normalized, GREETING_TOKENS) {
			if let Some(greeting) = pick(kb.greetings(), chooser) { return Some(reply(greeting, MatchTier::Greeting)); }
		}
		if self.any(normalized, THANKS_TOKENS) { return Some(reply(THANKS_REPLY, MatchTier::Thanks)); }

		// Table order decides: "chest pain" is listed before "stroke", "headache" before "fever".
		if let Some(e) = kb.emergencies().iter().find(|e| self.mode.contains(normalized, &e.trigger)) {
			return Some(reply(&e.alert, MatchTier::Emergency));
		}
		if let Some(s) = kb.symptoms().iter().find(|s| self.mode.contains(normalized, &s.symptom)) {
			return Some(Reply { text: s.formatted(), tier: MatchTier::Symptom });
		}
		None
	}

	fn any(&self, text: &str, tokens: &[&str]) -> bool { tokens.iter().any(|t| self.mode.contains(text, t)) }
}

fn reply(text: &str, tier: MatchTier) -> Reply { Reply { text: text.to_string(), tier } }

#[cfg(test)]
mod tests {
	use super::*;
	use healthbot_core::traits::FixedChoice;

	fn kb() -> KnowledgeBase { KnowledgeBase::builtin().expect("kb") }

	#[test]
	fn empty_input_short_circuits() {
		let r = TieredMatcher::default().match_literal(&kb(), "", &mut FixedChoice(0)).expect("reply");
		assert_eq!(r.tier, MatchTier::EmptyInput);
		assert_eq!(r.text, EMPTY_INPUT_REPLY);
	}

	#[test]
	fn greeting_beats_emergency() {
		let r = TieredMatcher::default().match_literal(&kb(), "hey, chest pain", &mut FixedChoice(1)).expect("reply");
		assert_eq!(r.tier, MatchTier::Greeting);
		assert_eq!(r.text, kb().greetings()[1]);
	}

	#[test]
	fn symptom_reply_is_formatted() {
		let r = TieredMatcher::default().match_literal(&kb(), "sore throat since monday", &mut FixedChoice(0)).expect("reply");
		assert_eq!(r.tier, MatchTier::Symptom);
		assert!(r.text.starts_with("**Sore Throat**: "));
	}

	#[test]
	fn unmatched_text_is_absent() {
		assert!(TieredMatcher::default().match_literal(&kb(), "xyz qwerty", &mut FixedChoice(0)).is_none());
	}

	#[test]
	fn word_boundary_skips_embedded_greetings() {
		let substring = TieredMatcher::new(MatchMode::Substring).match_literal(&kb(), "this cough", &mut FixedChoice(0)).expect("reply");
		assert_eq!(substring.tier, MatchTier::Greeting);
		let bounded = TieredMatcher::new(MatchMode::WordBoundary).match_literal(&kb(), "this cough", &mut FixedChoice(0)).expect("reply");
		assert_eq!(bounded.tier, MatchTier::Symptom);
	}
}
