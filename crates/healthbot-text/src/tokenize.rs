use healthbot_core::{Error, Result};
use tantivy::tokenizer::{LowerCaser, RegexTokenizer, StopWordFilter, TextAnalyzer, TokenStream};

/// Common English function words, dropped before counting.
const ENGLISH_STOP_WORDS: &[&str] = &[
	"a", "about", "above", "across", "after", "afterwards", "again", "against", "all", "almost", "alone", "along",
	"already", "also", "although", "always", "am", "among", "amongst", "amoungst", "amount", "an", "and", "another",
	"any", "anyhow", "anyone", "anything", "anyway", "anywhere", "are", "around", "as", "at", "back", "be", "became",
	"because", "become", "becomes", "becoming", "been", "before", "beforehand", "behind", "being", "below", "beside",
	"besides", "between", "beyond", "bill", "both", "bottom", "but", "by", "call", "can", "cannot", "cant", "co", "con",
	"could", "couldnt", "cry", "de", "describe", "detail", "do", "done", "down", "due", "during", "each", "eg", "eight",
	"either", "eleven", "else", "elsewhere", "empty", "enough", "etc", "even", "ever", "every", "everyone", "everything",
	"everywhere", "except", "few", "fifteen", "fifty", "fill", "find", "fire", "first", "five", "for", "former",
	"formerly", "forty", "found", "four", "from", "front", "full", "further", "get", "give", "go", "had", "has", "hasnt",
	"have", "he", "hence", "her", "here", "hereafter", "hereby", "herein", "hereupon", "hers", "herself", "him",
	"himself", "his", "how", "however", "hundred", "i", "ie", "if", "in", "inc", "indeed", "interest", "into", "is", "it",
	"its", "itself", "keep", "last", "latter", "latterly", "least", "less", "ltd", "made", "many", "may", "me",
	"meanwhile", "might", "mill", "mine", "more", "moreover", "most", "mostly", "move", "much", "must", "my", "myself",
	"name", "namely", "neither", "never", "nevertheless", "next", "nine", "no", "nobody", "none", "noone", "nor", "not",
	"nothing", "now", "nowhere", "of", "off", "often", "on", "once", "one", "only", "onto", "or", "other", "others",
	"otherwise", "our", "ours", "ourselves", "out", "over", "own", "part", "per", "perhaps", "please", "put", "rather",
	"re", "same", "see", "seem", "seemed", "seeming", "seems", "serious", "several", "she", "should", "show", "side",
	"since", "sincere", "six", "sixty", "so", "some", "somehow", "someone", "something", "sometime", "sometimes",
	"somewhere", "still", "such", "system", "take", "ten", "than", "that", "the", "their", "them", "themselves", "then",
	"thence", "there", "thereafter", "thereby", "therefore", "therein", "thereupon", "these", "they", "thick", "thin",
	"third", "this", "those", "though", "three", "through", "throughout", "thru", "thus", "to", "together", "too", "top",
	"toward", "towards", "twelve", "twenty", "two", "un", "under", "until", "up", "upon", "us", "very", "via", "was", "we",
	"well", "were", "what", "whatever", "when", "whence", "whenever", "where", "whereafter", "whereas", "whereby",
	"wherein", "whereupon", "wherever", "whether", "which", "while", "whither", "who", "whoever", "whole", "whom",
	"whose", "why", "will", "with", "within", "without", "would", "yet", "you", "your", "yours", "yourself", "yourselves",
];

/// Runs of two or more word characters. `_` is a word character, so
/// `general_health` stays one token.
const TOKEN_PATTERN: &str = r"\w\w+";

/// Lowercasing, stop-word-removing word splitter.
///
/// Holds a configured tantivy analyzer; each call works on a clone so a
/// shared `Tokenizer` needs no locking.
#[derive(Clone)]
pub struct Tokenizer {
	analyzer: TextAnalyzer,
}

impl Tokenizer {
	pub fn english() -> Result<Self> {
		let words = RegexTokenizer::new(TOKEN_PATTERN).map_err(|e| Error::ModelFit(format!("token pattern: {e}")))?;
		let analyzer = TextAnalyzer::builder(words)
			.filter(LowerCaser)
			.filter(StopWordFilter::remove(ENGLISH_STOP_WORDS.iter().map(|s| s.to_string())))
			.build();
		Ok(Self { analyzer })
	}

	pub fn tokenize(&self, text: &str) -> Vec<String> {
		let mut analyzer = self.analyzer.clone();
		let mut stream = analyzer.token_stream(text);
		let mut tokens = Vec::new();
		while stream.advance() { tokens.push(stream.token().text.clone()); }
		tokens
	}
}

impl std::fmt::Debug for Tokenizer {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result { f.debug_struct("Tokenizer").finish_non_exhaustive() }
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn drops_stop_words_and_short_tokens() {
		let t = Tokenizer::english().expect("tokenizer");
		assert_eq!(t.tokenize("What should I do about a Sore Throat?"), vec!["sore", "throat"]);
		assert_eq!(t.tokenize("Get 7-9 hours of sleep"), vec!["hours", "sleep"]);
	}

	#[test]
	fn keeps_underscored_category_names_whole() {
		let t = Tokenizer::english().expect("tokenizer");
		assert_eq!(t.tokenize("general_health Maintain"), vec!["general_health", "maintain"]);
		assert_eq!(t.tokenize("BMI between 18.5-24.9"), vec!["bmi", "18", "24"]);
	}

	#[test]
	fn empty_and_stop_only_inputs_yield_nothing() {
		let t = Tokenizer::english().expect("tokenizer");
		assert!(t.tokenize("").is_empty());
		assert!(t.tokenize("the and of it").is_empty());
	}
}
