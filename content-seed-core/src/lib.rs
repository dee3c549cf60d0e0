//! Placeholder text generation library.
//!
//! This crate produces "lorem-ipsum"-style filler made of random lowercase
//! words, grouped into sentences, paragraphs and passages:
//! - Builder-style configuration with eager validation
//! - Bounded and weighted random primitives over an injectable source
//! - A generator exposing word, sentence, paragraph and passage production
//!
//! Output is intentionally meaningless. Seed the generator for reproducible
//! text in tests.

/// Configuration and text generation.
pub mod model;

/// Error type shared by configuration and generation.
pub mod error;

/// Random primitives (bounded range, weighted selection).
///
/// Not exposed
pub(crate) mod random;

pub use error::ContentSeedError;
pub use model::config::Config;
pub use model::generator::ContentSeed;
