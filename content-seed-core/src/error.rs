use thiserror::Error;

/// Errors raised while validating a `Config` or drawing random values.
///
/// Every variant is a configuration problem: a validated configuration never
/// fails during generation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ContentSeedError {
	/// A `[min, max)` bound pair where `max <= min`.
	#[error("invalid {name} range: max ({max}) must be greater than min ({min})")]
	InvalidRange {
		name: &'static str,
		min: String,
		max: String,
	},

	/// Weighted selection was asked to pick from nothing.
	#[error("empty weight set")]
	EmptyWeightSet,

	/// A punctuation item carries a zero weight.
	#[error("punctuation item {item:?} has a zero weight")]
	ZeroWeight { item: String },
}

impl ContentSeedError {
	/// Creates an `InvalidRange` error from any displayable bounds.
	pub fn invalid_range(name: &'static str, min: impl ToString, max: impl ToString) -> Self {
		Self::InvalidRange {
			name,
			min: min.to_string(),
			max: max.to_string(),
		}
	}
}
