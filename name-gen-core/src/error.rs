use thiserror::Error;

use crate::model::symbol::Symbol;

/// Errors raised while building a `FrequencyModel` or walking it.
#[derive(Error, Debug)]
pub enum NameGenError {
	/// The corpus held no words, so the model has no transitions.
	#[error("empty model: no training words were supplied")]
	EmptyModel,

	/// A seed word contains one of the reserved marker characters (`^` or `$`).
	#[error("invalid character {character:?} in seed word {word:?}")]
	InvalidCharacter { word: String, character: char },

	/// The sampler reached a state the model never observed.
	///
	/// Cannot happen on a model produced by `ModelBuilder`; treat it as an
	/// internal invariant violation.
	#[error("unknown transition at position {position} after {previous}")]
	UnknownTransition { position: usize, previous: Symbol },

	/// The generated word would exceed the sampler's length cap.
	/// Each generation is independent, so the caller may simply retry.
	#[error("generation overrun: word longer than {limit} characters")]
	GenerationOverrun { limit: usize },

	/// Propagated I/O error (seed file loading).
	#[error("I/O error: {0}")]
	Io(#[from] std::io::Error),
}

impl NameGenError {
	/// Whether retrying the same call may succeed.
	pub fn is_retryable(&self) -> bool {
		matches!(self, NameGenError::GenerationOverrun { .. })
	}
}

pub type Result<T> = std::result::Result<T, NameGenError>;
