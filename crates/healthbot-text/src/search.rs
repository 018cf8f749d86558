use healthbot_core::traits::Retriever;
use healthbot_core::types::ScoredMatch;
use healthbot_core::{Corpus, Error, Result};
use tracing::{debug, warn};

use crate::index::{cosine, TfidfIndex};

/// Cosine-similarity lookup of a query against every corpus document.
#[derive(Debug, Clone)]
pub struct SimilaritySearch {
	corpus: Corpus,
	index: TfidfIndex,
	threshold: f64,
}

impl SimilaritySearch {
	pub fn new(corpus: Corpus, index: TfidfIndex, threshold: f64) -> Result<Self> {
		if corpus.len() != index.len() {
			return Err(Error::ModelFit(format!("index has {} rows for {} documents", index.len(), corpus.len())));
		}
		Ok(Self { corpus, index, threshold })
	}

	pub fn threshold(&self) -> f64 { self.threshold }
	pub fn corpus(&self) -> &Corpus { &self.corpus }
	pub fn index(&self) -> &TfidfIndex { &self.index }

	/// One score per corpus document, in corpus order. Every score is finite.
	pub fn scores(&self, query: &str) -> Result<Vec<f64>> {
		let q = self.index.transform(query)?;
		check_finite(self.index.documents().iter().map(|d| cosine(&q, d)).collect())
	}

	/// Best document whose score is strictly above the threshold.
	pub fn best(&self, query: &str) -> Result<Option<ScoredMatch>> {
		let scores = self.scores(query)?;
		let Some((index, score)) = select_best(&scores, self.threshold) else { return Ok(None) };
		let doc = self.corpus.get(index).ok_or_else(|| Error::Vectorization(format!("score index {index} outside corpus")))?;
		debug!(index, score, "similarity hit");
		Ok(Some(ScoredMatch { index, score, response: doc.response_text.clone() }))
	}

	/// Response text of the best document; failures are logged and count as no match.
	pub fn search(&self, query: &str) -> Option<String> {
		match self.best(query) {
			Ok(hit) => hit.map(|m| m.response),
			Err(e) => { warn!(error = %e, "similarity search failed"); None }
		}
	}
}

impl Retriever for SimilaritySearch {
	fn retrieve(&self, normalized_query: &str) -> Result<Option<ScoredMatch>> { self.best(normalized_query) }
	fn len(&self) -> usize { self.corpus.len() }
}

fn check_finite(scores: Vec<f64>) -> Result<Vec<f64>> {
	match scores.iter().position(|s| !s.is_finite()) {
		Some(i) => Err(Error::Vectorization(format!("non-finite score {} for document {i}", scores[i]))),
		None => Ok(scores),
	}
}

/// Highest score and its index; the lowest index wins a tie. `None` unless
/// the best score is strictly greater than `threshold`.
pub fn select_best(scores: &[f64], threshold: f64) -> Option<(usize, f64)> {
	let mut best: Option<(usize, f64)> = None;
	for (i, &s) in scores.iter().enumerate() {
		if best.map_or(true, |(_, b)| s > b) { best = Some((i, s)); }
	}
	best.filter(|(_, s)| *s > threshold)
}
