use std::collections::BTreeMap;
use std::fmt::Display;

use rand::Rng;
use rand::distr::uniform::SampleUniform;

use crate::error::ContentSeedError;

/// First character of the lowercase alphabet.
pub(crate) const LOWERCASE_START: char = 'a';
/// Exclusive end of the lowercase alphabet (one past `'z'`).
pub(crate) const LOWERCASE_END: char = '{';

/// Draws a value uniformly from `[min, max)`.
///
/// Works for any type `rand` can sample uniformly, which covers both the
/// counts used by the generator and `char` codepoints.
///
/// `name` identifies the bound pair in the error.
///
/// # Errors
/// Returns `InvalidRange` if `max <= min`.
pub(crate) fn random_between<T, R>(
	rng: &mut R,
	name: &'static str,
	min: T,
	max: T,
) -> Result<T, ContentSeedError>
where
	T: SampleUniform + PartialOrd + Display,
	R: Rng + ?Sized,
{
	if max <= min {
		return Err(ContentSeedError::invalid_range(name, min, max));
	}
	Ok(rng.random_range(min..max))
}

/// Draws one lowercase ASCII letter.
pub(crate) fn random_lowercase<R: Rng + ?Sized>(rng: &mut R) -> Result<char, ContentSeedError> {
	random_between(rng, "letter", LOWERCASE_START, LOWERCASE_END)
}

/// Picks one item with a probability proportional to its weight.
///
/// Cumulative sums are taken in the map's key order, so the same source
/// state always yields the same item.
///
/// Zero-weight items are never selected.
///
/// # Errors
/// Returns `EmptyWeightSet` if the map is empty or all weights are zero.
pub(crate) fn random_weighted<'a, T, R>(
	rng: &mut R,
	weights: &'a BTreeMap<T, u32>,
) -> Result<&'a T, ContentSeedError>
where
	T: Ord,
	R: Rng + ?Sized,
{
	let total: u64 = weights.values().map(|weight| u64::from(*weight)).sum();
	if total == 0 {
		return Err(ContentSeedError::EmptyWeightSet);
	}

	let r = rng.random_range(0..total);

	let mut cumulative = 0;
	for (item, weight) in weights {
		cumulative += u64::from(*weight);
		if r < cumulative {
			return Ok(item);
		}
	}

	// r < total, the loop always returns
	weights.keys().next_back().ok_or(ContentSeedError::EmptyWeightSet)
}

#[cfg(test)]
mod tests {
	use super::*;
	use rand::SeedableRng;
	use rand::rngs::StdRng;

	fn rng() -> StdRng {
		StdRng::seed_from_u64(7)
	}

	#[test]
	fn between_rejects_empty_range() {
		let mut rng = rng();
		assert_eq!(
			random_between(&mut rng, "word length", 5usize, 5),
			Err(ContentSeedError::invalid_range("word length", 5, 5))
		);
		assert!(matches!(
			random_between(&mut rng, "paragraph count", 6usize, 5),
			Err(ContentSeedError::InvalidRange { name: "paragraph count", .. })
		));
	}

	#[test]
	fn between_excludes_max() {
		let mut rng = rng();
		for _ in 0..1_000 {
			let value = random_between(&mut rng, "test", 3usize, 10).unwrap();
			assert!((3..10).contains(&value));
		}
		for _ in 0..100 {
			assert_eq!(random_between(&mut rng, "test", 4usize, 5).unwrap(), 4);
		}
	}

	#[test]
	fn lowercase_covers_whole_alphabet() {
		let mut rng = rng();
		let mut seen = [false; 26];
		for _ in 0..5_000 {
			let c = random_lowercase(&mut rng).unwrap();
			assert!(c.is_ascii_lowercase(), "unexpected char {c:?}");
			seen[(c as u8 - b'a') as usize] = true;
		}
		assert!(seen.iter().all(|s| *s), "some letters never drawn: {seen:?}");
	}

	#[test]
	fn weighted_rejects_empty_set() {
		let mut rng = rng();
		let weights: BTreeMap<String, u32> = BTreeMap::new();
		assert_eq!(random_weighted(&mut rng, &weights), Err(ContentSeedError::EmptyWeightSet));

		let zeros = BTreeMap::from([("a", 0), ("b", 0)]);
		assert_eq!(random_weighted(&mut rng, &zeros), Err(ContentSeedError::EmptyWeightSet));
	}

	#[test]
	fn weighted_skips_zero_weights() {
		let mut rng = rng();
		let weights = BTreeMap::from([("never", 0), ("always", 3), ("nope", 0)]);
		for _ in 0..1_000 {
			assert_eq!(*random_weighted(&mut rng, &weights).unwrap(), "always");
		}
	}

	#[test]
	fn weighted_follows_weights() {
		let mut rng = rng();
		let weights = BTreeMap::from([(".", 20), ("!", 1), ("?", 1)]);
		let draws = 20_000;
		let mut periods = 0;
		for _ in 0..draws {
			if *random_weighted(&mut rng, &weights).unwrap() == "." {
				periods += 1;
			}
		}
		let ratio = periods as f64 / draws as f64;
		let expected = 20.0 / 22.0;
		assert!((ratio - expected).abs() < 0.015, "period ratio {ratio} too far from {expected}");
	}
}
