use std::fmt;

/// Reserved marker for the start of a word when a model is printed.
pub const START_CHAR: char = '^';

/// Reserved marker for the end of a word when a model is printed.
pub const END_CHAR: char = '$';

/// One step of a word walk.
///
/// Word boundaries are their own variants instead of magic characters, so a
/// real character can never be mistaken for a boundary.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Symbol {
	/// Synthetic symbol before the first real character.
	Start,
	/// A real character of the word.
	Char(char),
	/// Synthetic symbol after the last real character.
	End,
}

impl Symbol {
	/// Returns the real character, if any.
	pub fn as_char(&self) -> Option<char> {
		match self {
			Symbol::Char(c) => Some(*c),
			_ => None,
		}
	}

	/// Returns `true` if `c` is one of the reserved marker characters.
	pub fn is_reserved(c: char) -> bool {
		c == START_CHAR || c == END_CHAR
	}

	/// Expands a word into `Start, c0, c1, ..., End`.
	pub fn augment(word: &str) -> impl Iterator<Item = Symbol> + '_ {
		std::iter::once(Symbol::Start)
			.chain(word.chars().map(Symbol::Char))
			.chain(std::iter::once(Symbol::End))
	}

	/// Positional `(previous, next)` pairs of a word.
	///
	/// Pair `i` is `(augmented[i], augmented[i + 1])`, so the item at index
	/// `i` is the transition used to predict position `i`.
	pub fn pairs(word: &str) -> impl Iterator<Item = (Symbol, Symbol)> + '_ {
		Symbol::augment(word).zip(Symbol::augment(word).skip(1))
	}
}

impl fmt::Display for Symbol {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Symbol::Start => write!(f, "{}", START_CHAR),
			Symbol::Char(c) => write!(f, "{}", c),
			Symbol::End => write!(f, "{}", END_CHAR),
		}
	}
}
