//! Word generation from positional character statistics.
//!
//! This crate learns, for every position in a word, how likely each
//! character is to follow the previous one, and walks those statistics as
//! a Markov chain to invent new, plausible-looking words (e.g. first names).
//!
//! ```no_run
//! use name_gen_core::{FrequencyModel, WordSampler};
//!
//! let model = FrequencyModel::from_words(["ann", "amy", "bob"])?;
//! let word = WordSampler::new(&model).generate()?;
//! println!("{}", word);
//! # Ok::<(), name_gen_core::NameGenError>(())
//! ```

/// Frequency model, symbols and sampling.
pub mod model;

/// Error taxonomy shared by model building and generation.
pub mod error;

/// Seed file loading and display helpers.
pub mod io;

pub use error::{NameGenError, Result};
pub use model::{FrequencyModel, ModelBuilder, Symbol, WordSampler};
