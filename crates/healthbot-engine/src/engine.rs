use healthbot_core::config::EngineSettings;
use healthbot_core::traits::{ChoiceSource, Retriever};
use healthbot_core::types::{normalize, MatchMode, MatchTier, Reply};
use healthbot_core::{KnowledgeBase, Result};
use healthbot_text::SimilaritySearch;
use tracing::{debug, info, warn};

use crate::fallback::FallbackResolver;
use crate::matcher::TieredMatcher;

/// The full response pipeline: literal tiers, similarity, fallbacks.
///
/// Immutable after construction. Share it behind an `Arc` and call
/// [`respond`](Self::respond) from any thread.
pub struct ResponseEngine<R: Retriever = SimilaritySearch> {
	kb: KnowledgeBase,
	matcher: TieredMatcher,
	fallback: FallbackResolver,
	retriever: R,
}

impl ResponseEngine<SimilaritySearch> {
	/// Compiled-in tables with default settings.
	pub fn builtin() -> Result<Self> { Self::from_settings(KnowledgeBase::builtin()?, &EngineSettings::default()) }

	pub fn from_settings(kb: KnowledgeBase, settings: &EngineSettings) -> Result<Self> {
		settings.validate()?;
		let search = healthbot_text::build_search(&kb, &settings.similarity)?;
		info!(threshold = settings.similarity.threshold, mode = ?settings.matching.mode, "response engine ready");
		Ok(Self::new(kb, search, settings.matching.mode))
	}
}

impl<R: Retriever> ResponseEngine<R> {
	pub fn new(kb: KnowledgeBase, retriever: R, mode: MatchMode) -> Self {
		Self { kb, matcher: TieredMatcher::new(mode), fallback: FallbackResolver::new(mode), retriever }
	}

	pub fn knowledge(&self) -> &KnowledgeBase { &self.kb }
	pub fn retriever(&self) -> &R { &self.retriever }
	pub fn mode(&self) -> MatchMode { self.matcher.mode() }

	/// Reply text for `text`, drawing random picks from the thread-local RNG.
	pub fn respond(&self, text: &str) -> String { self.respond_with(text, &mut rand::thread_rng()) }

	pub fn respond_with<C>(&self, text: &str, chooser: &mut C) -> String
	where
		C: ChoiceSource + ?Sized,
	{
		self.reply_with(text, chooser).text
	}

	/// Like [`respond_with`](Self::respond_with) but also reports the tier that answered.
	pub fn reply_with<C>(&self, text: &str, chooser: &mut C) -> Reply
	where
		C: ChoiceSource + ?Sized,
	{
		let normalized = normalize(text);
		if let Some(reply) = self.matcher.match_literal(&self.kb, &normalized, chooser) {
			debug!(tier = ?reply.tier, "literal match");
			return reply;
		}
		match self.retriever.retrieve(&normalized) {
			Ok(Some(hit)) => {
				debug!(index = hit.index, score = hit.score, "similarity match");
				return Reply { text: hit.response, tier: MatchTier::Similarity };
			}
			Ok(None) => {}
			Err(e) => warn!(error = %e, "similarity tier failed, falling back"),
		}
		let reply = self.fallback.fallback(&self.kb, &normalized, chooser);
		debug!(tier = ?reply.tier, "fallback");
		reply
	}
}
