use std::collections::BTreeMap;
use std::ops::Range;

use serde::{Deserialize, Serialize};

use crate::error::ContentSeedError;

const DEF_MIN_WORD_CHAR_COUNT: usize = 3;
const DEF_MAX_WORD_CHAR_COUNT: usize = 10;
const DEF_MIN_SENTENCE_WORD_COUNT: usize = 8;
const DEF_MAX_SENTENCE_WORD_COUNT: usize = 18;
const DEF_MIN_PARAGRAPH_SENTENCE_COUNT: usize = 3;
const DEF_MAX_PARAGRAPH_SENTENCE_COUNT: usize = 7;
const DEF_MIN_PARAGRAPH_COUNT: usize = 1;
const DEF_MAX_PARAGRAPH_COUNT: usize = 6;
const DEF_PARAGRAPH_DELIMITER: &str = "\n\n";

/// Settings driving text generation.
///
/// A `Config` is built once from `Config::default()` and a chain of setters,
/// applied in call order (the last write to a field wins), then handed to a
/// `ContentSeed` which validates it and never mutates it again.
///
/// All bounds are half-open: `min` is reachable, `max` is not.
///
/// # Invariants (checked by `validate`)
/// - Every `max` is strictly greater than its `min`
/// - When punctuation is enabled, `punctuation_weights` is non-empty and
///   every weight is strictly positive
///
/// # Example
/// ```
/// use content_seed_core::Config;
///
/// let config = Config::default()
/// 	.min_word_length(2)
/// 	.max_word_length(6)
/// 	.add_punctuation_item("...", 4);
/// assert_eq!(config.get_word_length(), 2..6);
/// assert_eq!(config.get_punctuation_weights().get("..."), Some(&4));
/// ```
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(default)]
pub struct Config {
	min_word_char_count: usize,
	max_word_char_count: usize,

	min_sentence_word_count: usize,
	max_sentence_word_count: usize,
	capitalize_sentences: bool,
	punctuate_sentences: bool,
	/// Sentence terminators and their selection weights.
	/// Example: { "." => 20, "!" => 1, "?" => 1 }
	punctuation_weights: BTreeMap<String, u32>,

	min_paragraph_sentence_count: usize,
	max_paragraph_sentence_count: usize,
	min_paragraph_count: usize,
	max_paragraph_count: usize,
	indent_paragraphs: bool,
	paragraph_delimiter: String,
}

impl Default for Config {
	fn default() -> Self {
		Self {
			min_word_char_count: DEF_MIN_WORD_CHAR_COUNT,
			max_word_char_count: DEF_MAX_WORD_CHAR_COUNT,
			min_sentence_word_count: DEF_MIN_SENTENCE_WORD_COUNT,
			max_sentence_word_count: DEF_MAX_SENTENCE_WORD_COUNT,
			capitalize_sentences: true,
			punctuate_sentences: true,
			punctuation_weights: BTreeMap::from([
				(".".to_owned(), 20),
				("!".to_owned(), 1),
				("?".to_owned(), 1),
			]),
			min_paragraph_sentence_count: DEF_MIN_PARAGRAPH_SENTENCE_COUNT,
			max_paragraph_sentence_count: DEF_MAX_PARAGRAPH_SENTENCE_COUNT,
			min_paragraph_count: DEF_MIN_PARAGRAPH_COUNT,
			max_paragraph_count: DEF_MAX_PARAGRAPH_COUNT,
			indent_paragraphs: true,
			paragraph_delimiter: DEF_PARAGRAPH_DELIMITER.to_owned(),
		}
	}
}

impl Config {
	/// Sets the minimum number of characters in a word (inclusive).
	///
	/// A minimum of 0 allows empty words; keeping it at 1 or more is the
	/// caller's responsibility.
	pub fn min_word_length(mut self, count: usize) -> Self {
		self.min_word_char_count = count;
		self
	}

	/// Sets the maximum number of characters in a word (exclusive).
	pub fn max_word_length(mut self, count: usize) -> Self {
		self.max_word_char_count = count;
		self
	}

	/// Sets the minimum number of words in a sentence (inclusive).
	pub fn min_sentence_length(mut self, count: usize) -> Self {
		self.min_sentence_word_count = count;
		self
	}

	/// Sets the maximum number of words in a sentence (exclusive).
	pub fn max_sentence_length(mut self, count: usize) -> Self {
		self.max_sentence_word_count = count;
		self
	}

	/// Sets the minimum number of sentences in a paragraph (inclusive).
	pub fn min_paragraph_sentence_count(mut self, count: usize) -> Self {
		self.min_paragraph_sentence_count = count;
		self
	}

	/// Sets the maximum number of sentences in a paragraph (exclusive).
	pub fn max_paragraph_sentence_count(mut self, count: usize) -> Self {
		self.max_paragraph_sentence_count = count;
		self
	}

	/// Sets the minimum number of paragraphs in a passage (inclusive).
	pub fn min_paragraph_count(mut self, count: usize) -> Self {
		self.min_paragraph_count = count;
		self
	}

	/// Sets the maximum number of paragraphs in a passage (exclusive).
	pub fn max_paragraph_count(mut self, count: usize) -> Self {
		self.max_paragraph_count = count;
		self
	}

	/// Enables or disables upper-casing the first letter of each sentence.
	pub fn capitalize_sentences(mut self, enabled: bool) -> Self {
		self.capitalize_sentences = enabled;
		self
	}

	/// Enables or disables terminating each sentence with a punctuation item.
	pub fn punctuate_sentences(mut self, enabled: bool) -> Self {
		self.punctuate_sentences = enabled;
		self
	}

	/// Inserts a punctuation item, or replaces the weight of an existing one.
	///
	/// Punctuation items can be any string, not only single characters.
	/// Weights are relative: with the defaults `{".": 20, "!": 1, "?": 1}`
	/// a period is twenty times more likely than each of the others.
	/// They do not need to add up to any specific sum.
	pub fn add_punctuation_item(mut self, item: impl Into<String>, weight: u32) -> Self {
		self.punctuation_weights.insert(item.into(), weight);
		self
	}

	/// Removes a punctuation item. Unknown items are ignored.
	pub fn remove_punctuation_item(mut self, item: &str) -> Self {
		self.punctuation_weights.remove(item);
		self
	}

	/// Removes every punctuation item.
	///
	/// Useful to replace the defaults entirely before adding new items.
	pub fn clear_punctuation_items(mut self) -> Self {
		self.punctuation_weights.clear();
		self
	}

	/// Enables or disables the two-space indentation at paragraph start.
	pub fn indent_paragraphs(mut self, enabled: bool) -> Self {
		self.indent_paragraphs = enabled;
		self
	}

	/// Sets the terminator appended after every paragraph.
	pub fn paragraph_delimiter(mut self, delimiter: impl Into<String>) -> Self {
		self.paragraph_delimiter = delimiter.into();
		self
	}

	/// Returns the `[min, max)` word length range, in characters.
	pub fn get_word_length(&self) -> Range<usize> {
		self.min_word_char_count..self.max_word_char_count
	}

	/// Returns the `[min, max)` sentence length range, in words.
	pub fn get_sentence_length(&self) -> Range<usize> {
		self.min_sentence_word_count..self.max_sentence_word_count
	}

	/// Returns the `[min, max)` number of sentences per paragraph.
	pub fn get_paragraph_sentence_count(&self) -> Range<usize> {
		self.min_paragraph_sentence_count..self.max_paragraph_sentence_count
	}

	/// Returns the `[min, max)` number of paragraphs per passage.
	pub fn get_paragraph_count(&self) -> Range<usize> {
		self.min_paragraph_count..self.max_paragraph_count
	}

	pub fn get_capitalize_sentences(&self) -> bool {
		self.capitalize_sentences
	}

	pub fn get_punctuate_sentences(&self) -> bool {
		self.punctuate_sentences
	}

	pub fn get_punctuation_weights(&self) -> &BTreeMap<String, u32> {
		&self.punctuation_weights
	}

	pub fn get_indent_paragraphs(&self) -> bool {
		self.indent_paragraphs
	}

	pub fn get_paragraph_delimiter(&self) -> &str {
		&self.paragraph_delimiter
	}

	/// Checks the configuration invariants.
	///
	/// # Errors
	/// - `InvalidRange` if any `max` is not greater than its `min`.
	/// - `EmptyWeightSet` if punctuation is enabled without any item.
	/// - `ZeroWeight` if punctuation is enabled and an item weighs 0.
	pub fn validate(&self) -> Result<(), ContentSeedError> {
		let ranges = [
			("word length", self.get_word_length()),
			("sentence length", self.get_sentence_length()),
			("paragraph sentence count", self.get_paragraph_sentence_count()),
			("paragraph count", self.get_paragraph_count()),
		];
		for (name, range) in ranges {
			if range.end <= range.start {
				return Err(ContentSeedError::invalid_range(name, range.start, range.end));
			}
		}

		if self.punctuate_sentences {
			if self.punctuation_weights.is_empty() {
				return Err(ContentSeedError::EmptyWeightSet);
			}
			if let Some((item, _)) = self.punctuation_weights.iter().find(|(_, weight)| **weight == 0) {
				return Err(ContentSeedError::ZeroWeight { item: item.clone() });
			}
		}

		Ok(())
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::model::generator::ContentSeed;

	#[test]
	fn defaults_are_valid() {
		let config = Config::default();
		assert_eq!(config.validate(), Ok(()));
		assert_eq!(config.get_word_length(), 3..10);
		assert_eq!(config.get_sentence_length(), 8..18);
		assert_eq!(config.get_paragraph_sentence_count(), 3..7);
		assert_eq!(config.get_paragraph_count(), 1..6);
		assert!(config.get_capitalize_sentences());
		assert!(config.get_punctuate_sentences());
		assert!(config.get_indent_paragraphs());
		assert_eq!(config.get_paragraph_delimiter(), "\n\n");
		assert_eq!(config.get_punctuation_weights().len(), 3);
		assert_eq!(config.get_punctuation_weights().get("."), Some(&20));
	}

	#[test]
	fn last_write_wins() {
		let config = Config::default()
			.max_word_length(4)
			.capitalize_sentences(false)
			.max_word_length(12)
			.capitalize_sentences(true)
			.add_punctuation_item(".", 10)
			.add_punctuation_item(".", 5);
		assert_eq!(config.get_word_length(), 3..12);
		assert!(config.get_capitalize_sentences());
		assert_eq!(config.get_punctuation_weights().get("."), Some(&5));
	}

	#[test]
	fn punctuation_items_can_be_replaced() {
		let config = Config::default()
			.clear_punctuation_items()
			.add_punctuation_item(";", 2)
			.add_punctuation_item("?!", 1)
			.remove_punctuation_item("?!")
			.remove_punctuation_item("unknown");
		assert_eq!(config.get_punctuation_weights(), &BTreeMap::from([(";".to_owned(), 2)]));
	}

	#[test]
	fn rejects_empty_ranges() {
		let err = Config::default().min_word_length(5).max_word_length(5).validate();
		assert_eq!(err, Err(ContentSeedError::invalid_range("word length", 5, 5)));

		let err = Config::default().min_paragraph_count(4).max_paragraph_count(2).validate();
		assert_eq!(err, Err(ContentSeedError::invalid_range("paragraph count", 4, 2)));

		let err = Config::default().max_paragraph_sentence_count(0).validate();
		assert!(matches!(err, Err(ContentSeedError::InvalidRange { name: "paragraph sentence count", .. })));
	}

	#[test]
	fn rejects_bad_punctuation_only_when_enabled() {
		let empty = Config::default().clear_punctuation_items();
		assert_eq!(empty.validate(), Err(ContentSeedError::EmptyWeightSet));
		assert_eq!(empty.punctuate_sentences(false).validate(), Ok(()));

		let zero = Config::default().add_punctuation_item("!", 0);
		assert_eq!(zero.validate(), Err(ContentSeedError::ZeroWeight { item: "!".to_owned() }));
		assert_eq!(zero.punctuate_sentences(false).validate(), Ok(()));
	}

	#[test]
	fn loads_from_settings() {
		let config = Config::default().add_punctuation_item("...", 4).indent_paragraphs(false);
		let json = serde_json::to_string(&config).unwrap();
		assert_eq!(serde_json::from_str::<Config>(&json).unwrap(), config);

		let partial: Config = serde_json::from_str(r#"{"max_word_char_count": 12}"#).unwrap();
		assert_eq!(partial.get_word_length(), 3..12);
		assert_eq!(partial, Config::default().max_word_length(12));
	}

	#[test]
	fn loaded_settings_are_still_validated() {
		let empty: Config = serde_json::from_str(r#"{"punctuation_weights": {}}"#).unwrap();
		assert_eq!(ContentSeed::new(empty).err(), Some(ContentSeedError::EmptyWeightSet));

		let inverted: Config =
			serde_json::from_str(r#"{"min_paragraph_count": 4, "max_paragraph_count": 2}"#).unwrap();
		assert!(matches!(
			ContentSeed::new(inverted),
			Err(ContentSeedError::InvalidRange { name: "paragraph count", .. })
		));
	}

	#[test]
	fn smallest_range_is_valid() {
		let config = Config::default().min_word_length(0).max_word_length(1);
		assert_eq!(config.validate(), Ok(()));
	}
}
