//! healthbot-text
//!
//! TF-IDF vectorization and cosine similarity search over the knowledge
//! corpus. Tokenization goes through a tantivy analyzer; see `tokenize`.

pub mod index;
pub mod search;
pub mod tokenize;

pub use index::{SparseVector, TfidfIndex};
pub use search::SimilaritySearch;
pub use tokenize::Tokenizer;

use healthbot_core::config::SimilaritySettings;
use healthbot_core::{Corpus, KnowledgeBase, Result};

/// Builds the corpus from `kb` and fits the index over it.
pub fn build(kb: &KnowledgeBase, settings: &SimilaritySettings) -> Result<(Corpus, TfidfIndex)> {
	let corpus = kb.corpus()?;
	let index = TfidfIndex::fit(&corpus, Tokenizer::english()?, settings.max_features)?;
	tracing::info!(documents = corpus.len(), vocabulary = index.vocabulary_len(), "similarity index built");
	Ok((corpus, index))
}

/// [`build`] followed by [`SimilaritySearch::new`] with the configured threshold.
pub fn build_search(kb: &KnowledgeBase, settings: &SimilaritySettings) -> Result<SimilaritySearch> {
	let (corpus, index) = build(kb, settings)?;
	SimilaritySearch::new(corpus, index, settings.threshold)
}
