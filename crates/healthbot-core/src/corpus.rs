use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::knowledge::{KnowledgeBase, GREETING_SEARCH_TEXT};
use crate::types::CorpusDocument;

/// Ordered retrieval corpus. Index `i` of a similarity lookup is document `i`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Corpus {
    documents: Vec<CorpusDocument>,
}

impl Corpus {
    pub fn new(documents: Vec<CorpusDocument>) -> Result<Self> {
        if documents.is_empty() { return Err(Error::EmptyTable("corpus")); }
        Ok(Self { documents })
    }

    /// Greetings, then knowledge by table order, then symptoms, then emergencies.
    pub fn from_knowledge(kb: &KnowledgeBase) -> Result<Self> {
        let mut documents = Vec::with_capacity(kb.greetings().len() + kb.knowledge().len() + kb.symptoms().len() + kb.emergencies().len());
        for greeting in kb.greetings() {
            documents.push(CorpusDocument { searchable_text: GREETING_SEARCH_TEXT.to_string(), response_text: greeting.clone() });
        }
        for entry in kb.knowledge() {
            documents.push(CorpusDocument { searchable_text: format!("{} {}", entry.category, entry.advice.to_lowercase()), response_text: entry.advice.clone() });
        }
        for entry in kb.symptoms() {
            documents.push(CorpusDocument { searchable_text: format!("symptom {} health medical", entry.symptom), response_text: entry.formatted() });
        }
        for entry in kb.emergencies() {
            documents.push(CorpusDocument { searchable_text: format!("emergency {} urgent critical", entry.trigger), response_text: entry.alert.clone() });
        }
        Self::new(documents)
    }

    pub fn documents(&self) -> &[CorpusDocument] { &self.documents }
    pub fn get(&self, index: usize) -> Option<&CorpusDocument> { self.documents.get(index) }
    pub fn len(&self) -> usize { self.documents.len() }
    pub fn is_empty(&self) -> bool { self.documents.is_empty() }
    pub fn searchable_texts(&self) -> impl Iterator<Item = &str> { self.documents.iter().map(|d| d.searchable_text.as_str()) }
}
