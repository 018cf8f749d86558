//! TF-IDF vector index over a fixed corpus.
//!
//! Weights follow the usual smoothed form: raw term counts times
//! `ln((1 + n) / (1 + df)) + 1`, each row L2-normalized. The vocabulary is
//! capped at `max_features` terms by corpus frequency, ties broken
//! alphabetically. Query terms outside the vocabulary weigh nothing.

use std::collections::{BTreeMap, HashMap};

use healthbot_core::{Corpus, Error, Result};

use crate::tokenize::Tokenizer;

/// Sparse row as `(term_id, weight)` pairs sorted by `term_id`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SparseVector {
	entries: Vec<(u32, f64)>,
}

impl SparseVector {
	fn from_counts(counts: BTreeMap<u32, f64>) -> Self { Self { entries: counts.into_iter().collect() } }

	pub fn is_zero(&self) -> bool { self.entries.iter().all(|(_, w)| *w == 0.0) }
	pub fn norm(&self) -> f64 { self.entries.iter().map(|(_, w)| w * w).sum::<f64>().sqrt() }

	pub fn dot(&self, other: &SparseVector) -> f64 {
		let (mut i, mut j, mut acc) = (0, 0, 0.0);
		while i < self.entries.len() && j < other.entries.len() {
			let (a, wa) = self.entries[i];
			let (b, wb) = other.entries[j];
			match a.cmp(&b) {
				std::cmp::Ordering::Less => i += 1,
				std::cmp::Ordering::Greater => j += 1,
				std::cmp::Ordering::Equal => { acc += wa * wb; i += 1; j += 1; }
			}
		}
		acc
	}

	fn normalized(mut self) -> Self {
		let norm = self.norm();
		if norm > 0.0 { for (_, w) in &mut self.entries { *w /= norm; } }
		self
	}
}

/// Cosine similarity; zero when either side is the zero vector.
pub fn cosine(a: &SparseVector, b: &SparseVector) -> f64 {
	let denom = a.norm() * b.norm();
	if denom == 0.0 { return 0.0; }
	a.dot(b) / denom
}

#[derive(Debug, Clone)]
pub struct TfidfIndex {
	tokenizer: Tokenizer,
	vocabulary: HashMap<String, u32>,
	idf: Vec<f64>,
	documents: Vec<SparseVector>,
}

impl TfidfIndex {
	pub fn fit(corpus: &Corpus, tokenizer: Tokenizer, max_features: usize) -> Result<Self> {
		if max_features == 0 { return Err(Error::ModelFit("max_features must be > 0".into())); }
		let tokenized: Vec<Vec<String>> = corpus.searchable_texts().map(|t| tokenizer.tokenize(t)).collect();

		let mut term_freq: BTreeMap<&str, usize> = BTreeMap::new();
		let mut doc_freq: BTreeMap<&str, usize> = BTreeMap::new();
		for tokens in &tokenized {
			let mut seen: Vec<&str> = Vec::new();
			for t in tokens {
				*term_freq.entry(t.as_str()).or_default() += 1;
				if !seen.contains(&t.as_str()) { seen.push(t.as_str()); }
			}
			for t in seen { *doc_freq.entry(t).or_default() += 1; }
		}
		if term_freq.is_empty() { return Err(Error::ModelFit("corpus produced an empty vocabulary".into())); }

		// BTreeMap iteration is alphabetical, and the stable sort keeps that order among equal counts.
		let mut ranked: Vec<(&str, usize)> = term_freq.into_iter().collect();
		ranked.sort_by(|a, b| b.1.cmp(&a.1));
		ranked.truncate(max_features);
		let mut kept: Vec<&str> = ranked.into_iter().map(|(t, _)| t).collect();
		kept.sort_unstable();

		let n = tokenized.len() as f64;
		let mut vocabulary = HashMap::with_capacity(kept.len());
		let mut idf = Vec::with_capacity(kept.len());
		for (id, term) in kept.iter().enumerate() {
			let df = doc_freq.get(term).copied().unwrap_or(0) as f64;
			idf.push(((1.0 + n) / (1.0 + df)).ln() + 1.0);
			vocabulary.insert((*term).to_string(), id as u32);
		}

		let mut index = Self { tokenizer, vocabulary, idf, documents: Vec::with_capacity(tokenized.len()) };
		for tokens in &tokenized {
			let row = index.weigh(tokens.iter().map(String::as_str)).map_err(|e| Error::ModelFit(e.to_string()))?;
			index.documents.push(row);
		}
		Ok(index)
	}

	/// Vector for `text` in the fitted space.
	pub fn transform(&self, text: &str) -> Result<SparseVector> {
		let tokens = self.tokenizer.tokenize(text);
		self.weigh(tokens.iter().map(String::as_str))
	}

	fn weigh<'a>(&self, tokens: impl Iterator<Item = &'a str>) -> Result<SparseVector> {
		let mut counts: BTreeMap<u32, f64> = BTreeMap::new();
		for t in tokens {
			if let Some(&id) = self.vocabulary.get(t) { *counts.entry(id).or_default() += 1.0; }
		}
		for (id, w) in counts.iter_mut() {
			let idf = self.idf.get(*id as usize).copied().ok_or_else(|| Error::Vectorization(format!("term id {id} outside vocabulary")))?;
			*w *= idf;
			if !w.is_finite() { return Err(Error::Vectorization(format!("non-finite weight for term id {id}"))); }
		}
		Ok(SparseVector::from_counts(counts).normalized())
	}

	pub fn documents(&self) -> &[SparseVector] { &self.documents }
	pub fn len(&self) -> usize { self.documents.len() }
	pub fn is_empty(&self) -> bool { self.documents.is_empty() }
	pub fn vocabulary_len(&self) -> usize { self.vocabulary.len() }
	pub fn contains_term(&self, term: &str) -> bool { self.vocabulary.contains_key(term) }
}
