use std::collections::HashSet;

use rand::Rng;

use super::frequency_model::FrequencyModel;
use super::symbol::Symbol;
use crate::error::{NameGenError, Result};

/// Default cap on the number of real characters in a generated word.
pub const DEFAULT_MAX_LENGTH: usize = 64;

/// Walks a `FrequencyModel` as a Markov chain to emit new words.
///
/// # Responsibilities
/// - Start each walk from `(0, Start)`
/// - Sample the next symbol from the state's distribution
/// - Stop on `End` or fail once the length cap is exceeded
///
/// The sampler only borrows the model and keeps no state between calls, so
/// any number of samplers may share one model across threads.
#[derive(Clone, Copy, Debug)]
pub struct WordSampler<'a> {
	model: &'a FrequencyModel,
	max_length: usize,
}

impl<'a> WordSampler<'a> {
	/// Creates a sampler with `DEFAULT_MAX_LENGTH`.
	pub fn new(model: &'a FrequencyModel) -> Self {
		Self { model, max_length: DEFAULT_MAX_LENGTH }
	}

	/// Sets the maximum number of real characters a word may contain.
	pub fn with_max_length(mut self, max_length: usize) -> Self {
		self.max_length = max_length;
		self
	}

	pub fn max_length(&self) -> usize {
		self.max_length
	}

	pub fn model(&self) -> &'a FrequencyModel {
		self.model
	}

	/// Generates one word using the thread-local RNG.
	pub fn generate(&self) -> Result<String> {
		self.generate_with(&mut rand::rng())
	}

	/// Generates one word using the given RNG.
	///
	/// # Behavior
	/// - Draws `r` uniformly in `[0, 1)` at each step and picks the next
	///   symbol with `Distribution::choose`.
	/// - Stops on `End` and returns the real characters sampled so far.
	///
	/// # Errors
	/// - `UnknownTransition` if the walk reaches a state absent from the model.
	/// - `GenerationOverrun` if the word would exceed `max_length` characters.
	pub fn generate_with<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<String> {
		let mut word = String::new();
		let mut length = 0;
		let mut previous = Symbol::Start;

		for position in 0.. {
			let unknown = move || NameGenError::UnknownTransition { position, previous };
			let distribution = self.model.distribution(position, previous).ok_or_else(unknown)?;
			let r: f64 = rng.random();

			match distribution.choose(r).ok_or_else(unknown)? {
				Symbol::End => break,
				// Never produced by the builder
				Symbol::Start => return Err(unknown()),
				next @ Symbol::Char(c) => {
					if length == self.max_length {
						return Err(NameGenError::GenerationOverrun { limit: self.max_length });
					}
					word.push(c);
					length += 1;
					previous = next;
				}
			}
		}

		log::trace!("generated word {:?}", word);
		Ok(word)
	}

	/// Generates a word that is not in `known`, trying at most `nb_try + 1` times.
	///
	/// Returns the last attempt if every attempt was a known word.
	/// Errors from generation are propagated immediately.
	pub fn generate_novel<R: Rng + ?Sized>(&self, rng: &mut R, known: &HashSet<String>, mut nb_try: usize) -> Result<String> {
		let mut word = self.generate_with(rng)?;
		while nb_try > 0 && known.contains(&word) {
			word = self.generate_with(rng)?;
			nb_try -= 1;
		}
		Ok(word)
	}
}
