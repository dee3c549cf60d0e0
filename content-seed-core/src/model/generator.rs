use log::{debug, trace};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::error::ContentSeedError;
use crate::model::config::Config;
use crate::random::{random_between, random_lowercase, random_weighted};

const PARAGRAPH_INDENT: &str = "  ";

/// Placeholder text generator.
///
/// # Responsibilities
/// - Own one validated `Config` and one random source
/// - Produce words, sentences, paragraphs and passages on demand
/// - Keep the most recently produced text in `output`
///
/// Each `generate_*` call overwrites `output`; it caches the last result and
/// is not a log.
///
/// The random source is injectable: `new` draws a fresh `StdRng` from the
/// thread generator, `seeded` gives reproducible text, and `with_rng` accepts
/// any `Rng`.
///
/// # Example
/// ```
/// use content_seed_core::{Config, ContentSeed};
///
/// let mut seeder = ContentSeed::seeded(Config::default(), 42).unwrap();
/// let sentence = seeder.generate_sentence().unwrap();
/// assert_eq!(sentence, seeder.output());
/// ```
#[derive(Debug)]
pub struct ContentSeed<R: Rng = StdRng> {
	config: Config,
	rng: R,
	output: String,
}

impl ContentSeed<StdRng> {
	/// Creates a generator with a random source seeded from the thread generator.
	///
	/// # Errors
	/// Returns an error if the configuration is invalid.
	pub fn new(config: Config) -> Result<Self, ContentSeedError> {
		Self::with_rng(config, StdRng::from_rng(&mut rand::rng()))
	}

	/// Creates a generator whose output only depends on `config` and `seed`.
	///
	/// # Errors
	/// Returns an error if the configuration is invalid.
	pub fn seeded(config: Config, seed: u64) -> Result<Self, ContentSeedError> {
		debug!("Seeding generator with {seed}");
		Self::with_rng(config, StdRng::seed_from_u64(seed))
	}
}

impl<R: Rng + SeedableRng> ContentSeed<R> {
	/// Resets the random source to the state given by `seed`.
	///
	/// Generating after the same reseed always yields the same text.
	pub fn reseed(&mut self, seed: u64) {
		trace!("Reseeding generator with {seed}");
		self.rng = R::seed_from_u64(seed);
	}
}

impl<R: Rng> ContentSeed<R> {
	/// Creates a generator drawing from the given random source.
	///
	/// # Errors
	/// Returns an error if the configuration is invalid. Nothing is
	/// generated with an invalid configuration.
	pub fn with_rng(config: Config, rng: R) -> Result<Self, ContentSeedError> {
		config.validate()?;
		debug!("Generator ready: {config:?}");
		Ok(Self {
			config,
			rng,
			output: String::new(),
		})
	}

	/// Returns the most recently generated text (empty before any generation).
	pub fn output(&self) -> &str {
		&self.output
	}

	/// Returns the generator configuration.
	pub fn config(&self) -> &Config {
		&self.config
	}

	/// Generates a single lowercase word.
	pub fn generate_word(&mut self) -> Result<String, ContentSeedError> {
		let word = self.word()?;
		Ok(self.store(word))
	}

	/// Generates a single sentence.
	pub fn generate_sentence(&mut self) -> Result<String, ContentSeedError> {
		let sentence = self.sentence()?;
		Ok(self.store(sentence))
	}

	/// Generates a single paragraph, terminated by the paragraph delimiter.
	pub fn generate_paragraph(&mut self) -> Result<String, ContentSeedError> {
		let paragraph = self.paragraph()?;
		Ok(self.store(paragraph))
	}

	/// Generates a full passage.
	///
	/// The passage is the concatenation of its paragraphs; each paragraph
	/// carries its own trailing delimiter.
	pub fn generate_passage(&mut self) -> Result<String, ContentSeedError> {
		let passage = self.passage()?;
		Ok(self.store(passage))
	}

	/// Alias of `generate_passage`.
	pub fn generate(&mut self) -> Result<String, ContentSeedError> {
		self.generate_passage()
	}

	/// Replaces `output` with a fully produced text.
	fn store(&mut self, text: String) -> String {
		self.output = text;
		self.output.clone()
	}

	/// Word of `[min, max)` characters drawn uniformly from `a..=z`.
	fn word(&mut self) -> Result<String, ContentSeedError> {
		let range = self.config.get_word_length();
		let length = random_between(&mut self.rng, "word length", range.start, range.end)?;
		let rng = &mut self.rng;
		(0..length).map(|_| random_lowercase(rng)).collect()
	}

	/// Words joined by single spaces, then capitalized and punctuated.
	///
	/// Both steps are skipped on an empty sentence.
	fn sentence(&mut self) -> Result<String, ContentSeedError> {
		let range = self.config.get_sentence_length();
		let word_count = random_between(&mut self.rng, "sentence length", range.start, range.end)?;
		trace!("Sentence of {word_count} words");

		let mut words = Vec::with_capacity(word_count);
		for _ in 0..word_count {
			words.push(self.word()?);
		}
		let mut sentence = words.join(" ");

		if sentence.is_empty() {
			return Ok(sentence);
		}
		if self.config.get_capitalize_sentences() {
			sentence = capitalize_first(&sentence);
		}
		if self.config.get_punctuate_sentences() {
			let punctuation = random_weighted(&mut self.rng, self.config.get_punctuation_weights())?;
			sentence.push_str(punctuation);
		}
		Ok(sentence)
	}

	/// Optional indent, sentences joined by single spaces, then the delimiter.
	fn paragraph(&mut self) -> Result<String, ContentSeedError> {
		let mut paragraph = String::new();
		if self.config.get_indent_paragraphs() {
			paragraph.push_str(PARAGRAPH_INDENT);
		}

		let range = self.config.get_paragraph_sentence_count();
		let sentence_count = random_between(&mut self.rng, "paragraph sentence count", range.start, range.end)?;
		trace!("Paragraph of {sentence_count} sentences");

		for i in 0..sentence_count {
			if i > 0 {
				paragraph.push(' ');
			}
			paragraph.push_str(&self.sentence()?);
		}

		// Terminator, not separator: the last paragraph ends with it too
		paragraph.push_str(self.config.get_paragraph_delimiter());
		Ok(paragraph)
	}

	fn passage(&mut self) -> Result<String, ContentSeedError> {
		let range = self.config.get_paragraph_count();
		let paragraph_count = random_between(&mut self.rng, "paragraph count", range.start, range.end)?;

		let mut passage = String::new();
		for _ in 0..paragraph_count {
			passage.push_str(&self.paragraph()?);
		}

		debug!("Generated passage of {paragraph_count} paragraphs ({} bytes)", passage.len());
		Ok(passage)
	}
}

/// Upper-cases the first character, leaving the rest untouched.
///
/// Uses the Unicode uppercase mapping, which may expand to several
/// characters (`ß` becomes `SS`).
fn capitalize_first(text: &str) -> String {
	let mut chars = text.chars();
	match chars.next() {
		Some(first) => first.to_uppercase().chain(chars).collect(),
		None => String::new(),
	}
}
