//! Domain types shared by the matcher, the similarity index and the engine.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Knowledge categories. The string form is the one folded into the
/// searchable text of every knowledge document.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    GeneralHealth,
    DietNutrition,
    ExerciseFitness,
    MentalHealth,
    WeightManagement,
    DiseasePrevention,
}

impl Category {
    pub const ALL: [Category; 6] = [
        Category::GeneralHealth,
        Category::DietNutrition,
        Category::ExerciseFitness,
        Category::MentalHealth,
        Category::WeightManagement,
        Category::DiseasePrevention,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Category::GeneralHealth => "general_health",
            Category::DietNutrition => "diet_nutrition",
            Category::ExerciseFitness => "exercise_fitness",
            Category::MentalHealth => "mental_health",
            Category::WeightManagement => "weight_management",
            Category::DiseasePrevention => "disease_prevention",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { f.write_str(self.as_str()) }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct KnowledgeEntry {
    pub category: Category,
    pub advice: String,
}

/// Advice for a named symptom. `advice` ends with a "see a doctor if" clause.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SymptomEntry {
    pub symptom: String,
    pub advice: String,
}

impl SymptomEntry {
    /// `**Sore Throat**: <advice>`
    pub fn formatted(&self) -> String {
        format!("**{}**: {}", title_case(&self.symptom.replace('_', " ")), self.advice)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct EmergencyEntry {
    pub trigger: String,
    pub alert: String,
}

/// Keywords that route an unmatched query to one knowledge category.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CategoryKeywords {
    pub category: Category,
    pub keywords: Vec<String>,
}

/// One retrievable unit of the corpus.
///
/// - `searchable_text`: lowercase bag of words, only ever scored
/// - `response_text`: returned verbatim when the document wins
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CorpusDocument {
    pub searchable_text: String,
    pub response_text: String,
}

/// The winning corpus document of a similarity lookup.
///
/// `index` points into the corpus, `score` is the cosine similarity in
/// `[0, 1]` and `response` is that document's `response_text`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ScoredMatch {
    pub index: usize,
    pub score: f64,
    pub response: String,
}

/// How literal keywords are located inside the normalized query.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum MatchMode {
    /// Plain substring containment: "cold shoulder" matches "cold".
    #[default]
    Substring,
    /// The keyword must start and end on a non-alphanumeric boundary.
    WordBoundary,
}

impl MatchMode {
    pub fn contains(self, haystack: &str, needle: &str) -> bool {
        match self {
            MatchMode::Substring => haystack.contains(needle),
            MatchMode::WordBoundary => contains_word(haystack, needle),
        }
    }
}

fn contains_word(haystack: &str, needle: &str) -> bool {
    if needle.is_empty() { return false; }
    haystack.match_indices(needle).any(|(start, _)| {
        let end = start + needle.len();
        let before = haystack[..start].chars().next_back().map_or(true, |c| !c.is_alphanumeric());
        let after = haystack[end..].chars().next().map_or(true, |c| !c.is_alphanumeric());
        before && after
    })
}

/// Which tier produced a reply.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum MatchTier {
    EmptyInput,
    Greeting,
    Thanks,
    Emergency,
    Symptom,
    Similarity,
    Category,
    GeneralHealth,
    Generic,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Reply {
    pub text: String,
    pub tier: MatchTier,
}

/// Lowercase and trim; the form every tier matches against.
pub fn normalize(text: &str) -> String { text.to_lowercase().trim().to_string() }

/// Upper-cases the first letter of every alphabetic run, lower-cases the rest.
pub fn title_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev_alpha = false;
    for c in s.chars() {
        if c.is_alphabetic() {
            if prev_alpha { out.extend(c.to_lowercase()); } else { out.extend(c.to_uppercase()); }
            prev_alpha = true;
        } else {
            out.push(c);
            prev_alpha = false;
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn title_case_handles_separators() {
        assert_eq!(title_case("sore throat"), "Sore Throat");
        assert_eq!(title_case("back-pain"), "Back-Pain");
        assert_eq!(title_case("HEADACHE"), "Headache");
    }

    #[test]
    fn symptom_label_replaces_underscores() {
        let entry = SymptomEntry { symptom: "stomach_pain".into(), advice: "Rest.".into() };
        assert_eq!(entry.formatted(), "**Stomach Pain**: Rest.");
    }

    #[test]
    fn substring_mode_matches_inside_words() {
        assert!(MatchMode::Substring.contains("cold shoulder", "cold"));
        assert!(MatchMode::Substring.contains("this is it", "hi"));
    }

    #[test]
    fn word_boundary_mode_requires_whole_words() {
        assert!(!MatchMode::WordBoundary.contains("this is it", "hi"));
        assert!(MatchMode::WordBoundary.contains("oh hi there", "hi"));
        assert!(MatchMode::WordBoundary.contains("hi", "hi"));
        assert!(MatchMode::WordBoundary.contains("i have chest pain.", "chest pain"));
        assert!(!MatchMode::WordBoundary.contains("a coldness", "cold"));
    }

    #[test]
    fn normalize_lowercases_and_trims() {
        assert_eq!(normalize("  Hello There \n"), "hello there");
        assert_eq!(normalize(" \t "), "");
    }
}
