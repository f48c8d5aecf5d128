use std::collections::HashMap;

use super::state::{Distribution, TransitionCounts};
use super::symbol::Symbol;
use crate::error::{NameGenError, Result};

/// Accumulates positional transition counts from seed words.
///
/// The builder is the only mutable stage of a model. `build` consumes it and
/// normalizes every state, so a `FrequencyModel` can never be observed with
/// raw counts.
///
/// # Notes
/// - Duplicate words are counted again, increasing their weight.
/// - Words are taken as given (no trimming or lowercasing).
#[derive(Debug, Default)]
pub struct ModelBuilder {
	/// `positions[i]` maps a previous symbol to the counts of what followed it
	/// at position `i`.
	positions: Vec<HashMap<Symbol, TransitionCounts>>,
	word_count: usize,
}

impl ModelBuilder {
	pub fn new() -> Self {
		Self::default()
	}

	/// Adds one seed word to the counts.
	///
	/// # Errors
	/// Returns `InvalidCharacter` if the word contains `^` or `$`. The
	/// builder is left untouched in that case.
	pub fn add_word(&mut self, word: &str) -> Result<()> {
		if let Some(character) = word.chars().find(|c| Symbol::is_reserved(*c)) {
			return Err(NameGenError::InvalidCharacter { word: word.to_owned(), character });
		}

		for (position, (previous, next)) in Symbol::pairs(word).enumerate() {
			if self.positions.len() <= position {
				self.positions.push(HashMap::new());
			}
			self.positions[position].entry(previous).or_default().add_transition(next);
		}
		self.word_count += 1;
		Ok(())
	}

	/// Number of words added so far.
	pub fn word_count(&self) -> usize {
		self.word_count
	}

	/// Normalizes the counts into an immutable model.
	///
	/// # Errors
	/// Returns `EmptyModel` if no word was added.
	pub fn build(self) -> Result<FrequencyModel> {
		if self.word_count == 0 {
			return Err(NameGenError::EmptyModel);
		}

		let positions: Vec<HashMap<Symbol, Distribution>> = self
			.positions
			.into_iter()
			.map(|states| {
				states
					.into_iter()
					.filter_map(|(previous, counts)| counts.normalize().map(|d| (previous, d)))
					.collect()
			})
			.collect();

		let model = FrequencyModel { positions, word_count: self.word_count };
		log::debug!(
			"built frequency model: {} words, {} positions, {} states",
			model.word_count,
			model.positions.len(),
			model.state_count()
		);
		Ok(model)
	}
}

/// Positional character-transition probabilities learned from a corpus.
///
/// Maps `position -> previous symbol -> next symbol -> probability`, where
/// position 0 predicts the first real character from `Symbol::Start`.
///
/// # Invariants
/// - Every stored distribution sums to 1.0 (within floating-point tolerance)
/// - `(0, Start)` is always present
/// - The model is never mutated after construction, so it can be shared
///   between threads and read concurrently
#[derive(Clone, Debug)]
pub struct FrequencyModel {
	positions: Vec<HashMap<Symbol, Distribution>>,
	word_count: usize,
}

impl FrequencyModel {
	/// Builds a model from an ordered corpus of lowercase words.
	///
	/// # Errors
	/// - `EmptyModel` if the corpus is empty.
	/// - `InvalidCharacter` if a word contains `^` or `$`.
	pub fn from_words<I, S>(words: I) -> Result<Self>
	where
		I: IntoIterator<Item = S>,
		S: AsRef<str>,
	{
		let mut builder = ModelBuilder::new();
		for word in words {
			builder.add_word(word.as_ref())?;
		}
		builder.build()
	}

	/// Model from raw positional tables, bypassing the builder.
	#[cfg(test)]
	pub(crate) fn from_positions(positions: Vec<HashMap<Symbol, Distribution>>) -> Self {
		Self { positions, word_count: 1 }
	}

	/// Distribution for `(position, previous)`, if observed in training.
	pub fn distribution(&self, position: usize, previous: Symbol) -> Option<&Distribution> {
		self.positions.get(position)?.get(&previous)
	}

	/// Probability of `next` following `previous` at `position`.
	///
	/// Returns 0.0 for unseen states or transitions.
	pub fn probability(&self, position: usize, previous: Symbol, next: Symbol) -> f64 {
		self.distribution(position, previous).map_or(0.0, |d| d.probability(next))
	}

	/// Iterates over every `(position, previous, distribution)` state.
	pub fn states(&self) -> impl Iterator<Item = (usize, Symbol, &Distribution)> {
		self.positions
			.iter()
			.enumerate()
			.flat_map(|(position, states)| states.iter().map(move |(previous, d)| (position, *previous, d)))
	}

	/// Number of `(position, previous)` states.
	pub fn state_count(&self) -> usize {
		self.positions.iter().map(HashMap::len).sum()
	}

	/// Number of positions with at least one state.
	/// Equals the length of the longest training word plus one.
	pub fn position_count(&self) -> usize {
		self.positions.len()
	}

	/// Number of training words, duplicates included.
	pub fn word_count(&self) -> usize {
		self.word_count
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	const EPSILON: f64 = 1e-9;

	#[test]
	fn empty_corpus_is_rejected() {
		let words: [&str; 0] = [];
		assert!(matches!(FrequencyModel::from_words(words), Err(NameGenError::EmptyModel)));
	}

	#[test]
	fn reserved_characters_are_rejected() {
		match FrequencyModel::from_words(["ann", "b$b"]) {
			Err(NameGenError::InvalidCharacter { word, character }) => {
				assert_eq!(word, "b$b");
				assert_eq!(character, '$');
			}
			other => panic!("expected InvalidCharacter, got {:?}", other),
		}
		assert!(matches!(
			FrequencyModel::from_words(["^ann"]),
			Err(NameGenError::InvalidCharacter { character: '^', .. })
		));
	}

	#[test]
	fn rejected_word_leaves_builder_untouched() {
		let mut builder = ModelBuilder::new();
		builder.add_word("ann").unwrap();
		assert!(builder.add_word("a^").is_err());
		assert_eq!(builder.word_count(), 1);
		let model = builder.build().unwrap();
		assert_eq!(model.probability(0, Symbol::Start, Symbol::Char('a')), 1.0);
		assert_eq!(model.position_count(), 4);
	}

	#[test]
	fn shared_prefix_splits_probability() {
		let model = FrequencyModel::from_words(["ann", "amy"]).unwrap();
		assert!((model.probability(0, Symbol::Start, Symbol::Char('a')) - 1.0).abs() < EPSILON);
		assert!((model.probability(1, Symbol::Char('a'), Symbol::Char('n')) - 0.5).abs() < EPSILON);
		assert!((model.probability(1, Symbol::Char('a'), Symbol::Char('m')) - 0.5).abs() < EPSILON);
		assert_eq!(model.probability(2, Symbol::Char('n'), Symbol::Char('n')), 1.0);
		assert_eq!(model.probability(2, Symbol::Char('m'), Symbol::Char('y')), 1.0);
		assert_eq!(model.probability(3, Symbol::Char('y'), Symbol::End), 1.0);
	}

	#[test]
	fn first_letters_split_at_start() {
		let model = FrequencyModel::from_words(["ann", "bob"]).unwrap();
		assert_eq!(model.probability(0, Symbol::Start, Symbol::Char('a')), 0.5);
		assert_eq!(model.probability(0, Symbol::Start, Symbol::Char('b')), 0.5);
	}

	#[test]
	fn duplicates_increase_weight() {
		let model = FrequencyModel::from_words(["ann", "ann", "ann", "bob"]).unwrap();
		assert_eq!(model.word_count(), 4);
		assert_eq!(model.probability(0, Symbol::Start, Symbol::Char('a')), 0.75);
		assert_eq!(model.probability(0, Symbol::Start, Symbol::Char('b')), 0.25);
	}

	#[test]
	fn same_character_at_different_positions_is_independent() {
		let model = FrequencyModel::from_words(["ab", "ba"]).unwrap();
		// first 'a' is always followed by 'b', second 'a' always ends the word
		assert_eq!(model.probability(1, Symbol::Char('a'), Symbol::Char('b')), 1.0);
		assert_eq!(model.probability(1, Symbol::Char('a'), Symbol::End), 0.0);
		assert_eq!(model.probability(2, Symbol::Char('a'), Symbol::End), 1.0);
		assert_eq!(model.probability(2, Symbol::Char('b'), Symbol::End), 1.0);
		assert!(model.distribution(2, Symbol::Char('x')).is_none());
		assert!(model.distribution(7, Symbol::Start).is_none());
	}

	#[test]
	fn empty_word_records_start_to_end() {
		let model = FrequencyModel::from_words([""]).unwrap();
		assert_eq!(model.state_count(), 1);
		assert_eq!(model.probability(0, Symbol::Start, Symbol::End), 1.0);
	}

	#[test]
	fn states_iterates_every_distribution() {
		let model = FrequencyModel::from_words(["ann", "amy"]).unwrap();
		assert_eq!(model.states().count(), model.state_count());
		// ^, a, n|m, n|y
		assert_eq!(model.state_count(), 6);
		for (_, _, d) in model.states() {
			assert!((d.total() - 1.0).abs() < EPSILON);
		}
	}
}
