use healthbot_core::knowledge::WELLNESS_TOKENS;
use healthbot_core::traits::{pick, ChoiceSource};
use healthbot_core::types::{Category, MatchMode, MatchTier, Reply};
use healthbot_core::KnowledgeBase;

/// Last-resort tiers: category keywords, then general health, then a
/// generic template. Always answers for a validated knowledge base.
#[derive(Debug, Clone, Copy, Default)]
pub struct FallbackResolver {
	mode: MatchMode,
}

impl FallbackResolver {
	pub fn new(mode: MatchMode) -> Self { Self { mode } }

	pub fn fallback<C>(&self, kb: &KnowledgeBase, normalized: &str, chooser: &mut C) -> Reply
	where
		C: ChoiceSource + ?Sized,
	{
		let hit = kb.category_keywords().iter().find(|ck| ck.keywords.iter().any(|k| self.mode.contains(normalized, k)));
		if let Some(ck) = hit {
			if let Some(advice) = pick(&kb.advice_in(ck.category), chooser) {
				return Reply { text: (*advice).to_string(), tier: MatchTier::Category };
			}
		}
		if WELLNESS_TOKENS.iter().any(|t| self.mode.contains(normalized, t)) {
			if let Some(advice) = pick(&kb.advice_in(Category::GeneralHealth), chooser) {
				return Reply { text: (*advice).to_string(), tier: MatchTier::GeneralHealth };
			}
		}
		let text = pick(kb.fallbacks(), chooser).cloned().unwrap_or_default();
		Reply { text, tier: MatchTier::Generic }
	}
}
