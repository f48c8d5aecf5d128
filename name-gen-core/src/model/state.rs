use super::symbol::Symbol;

/// Raw transition counts for one `(position, previous)` state.
///
/// Only used while a model is being built. Entries keep the order in which
/// each next symbol was first observed.
///
/// ## Invariants
/// - Each next symbol appears at most once
/// - Each count is strictly positive
#[derive(Clone, Debug, Default)]
pub(crate) struct TransitionCounts {
	counts: Vec<(Symbol, usize)>,
}

impl TransitionCounts {
	/// Records an occurrence of a transition toward `next`.
	///
	/// - If the transition already exists, its occurrence count is increased.
	/// - Otherwise, a new transition is appended with an initial count of 1.
	pub(crate) fn add_transition(&mut self, next: Symbol) {
		match self.counts.iter_mut().find(|(symbol, _)| *symbol == next) {
			Some((_, occurrence)) => *occurrence += 1,
			None => self.counts.push((next, 1)),
		}
	}

	/// Divides each count by the total, producing a distribution.
	///
	/// Returns `None` if no transition was recorded.
	pub(crate) fn normalize(self) -> Option<Distribution> {
		let total: usize = self.counts.iter().map(|(_, occurrence)| occurrence).sum();
		if total == 0 {
			return None;
		}

		let entries = self
			.counts
			.into_iter()
			.map(|(symbol, occurrence)| (symbol, occurrence as f64 / total as f64))
			.collect();
		Some(Distribution { entries })
	}
}

/// Discrete probability distribution over next symbols.
///
/// This is a node of the Markov chain: one `(position, previous)` state and
/// its outgoing edges weighted by probability.
///
/// ## Invariants
/// - Probabilities sum to 1.0 within floating-point tolerance
/// - Entries keep first-observed order; sampling walks them in that order
#[derive(Clone, Debug, PartialEq)]
pub struct Distribution {
	entries: Vec<(Symbol, f64)>,
}

impl Distribution {
	#[cfg(test)]
	pub(crate) fn from_entries(entries: Vec<(Symbol, f64)>) -> Self {
		Self { entries }
	}

	/// Iterates over `(next, probability)` in sampling order.
	pub fn iter(&self) -> impl Iterator<Item = (Symbol, f64)> + '_ {
		self.entries.iter().copied()
	}

	/// Probability of `next`, or 0.0 if it was never observed.
	pub fn probability(&self, next: Symbol) -> f64 {
		self.entries
			.iter()
			.find(|(symbol, _)| *symbol == next)
			.map_or(0.0, |(_, p)| *p)
	}

	pub fn len(&self) -> usize {
		self.entries.len()
	}

	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}

	/// Sum of all probabilities.
	pub fn total(&self) -> f64 {
		self.entries.iter().map(|(_, p)| p).sum()
	}

	/// Picks a symbol for the uniform draw `r` in `[0, 1)`.
	///
	/// Walks the entries accumulating their probabilities and returns the
	/// first one whose cumulative sum is `>= r`. When rounding leaves the
	/// total short of `r`, the last entry is returned.
	///
	/// Returns `None` only if the distribution is empty.
	pub fn choose(&self, r: f64) -> Option<Symbol> {
		let mut cumulative = 0.0;
		for (symbol, p) in &self.entries {
			cumulative += p;
			if cumulative >= r {
				return Some(*symbol);
			}
		}

		let last = self.entries.last().map(|(symbol, _)| *symbol);
		if let Some(symbol) = last {
			log::warn!("cumulative probability {} fell short of draw {}, using last entry {}", cumulative, r, symbol);
		}
		last
	}
}
