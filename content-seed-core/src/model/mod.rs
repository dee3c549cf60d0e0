//! Top-level module for placeholder text generation.
//!
//! This module provides:
//! - Generation settings with builder-style setters (`Config`)
//! - The generator producing words, sentences, paragraphs and passages
//!   (`ContentSeed`)

/// Generation settings.
///
/// Holds size bounds (words, sentences, paragraphs), stylistic flags and
/// weighted punctuation items. Validated before any generation.
pub mod config;

/// High-level generator.
///
/// Composes random primitives into words, sentences, paragraphs and
/// passages, and keeps the last produced text.
pub mod generator;
