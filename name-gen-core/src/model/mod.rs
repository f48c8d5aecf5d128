//! Positional Markov-chain word model.
//!
//! This module provides:
//! - Tagged boundary symbols (`Symbol`)
//! - Model construction and inspection (`ModelBuilder`, `FrequencyModel`)
//! - Word generation (`WordSampler`)

/// Tagged symbols, including the `Start` and `End` word boundaries.
pub mod symbol;

/// Positional transition tables and their builder.
///
/// Counts transitions per `(position, previous)` state and normalizes
/// them into probability distributions.
pub mod frequency_model;

/// Markov chain walk over a `FrequencyModel`.
pub mod sampler;

/// Per-state transition counts and distributions.
/// Only `Distribution` is exposed.
mod state;

pub use frequency_model::{FrequencyModel, ModelBuilder};
pub use sampler::{DEFAULT_MAX_LENGTH, WordSampler};
pub use state::Distribution;
pub use symbol::{END_CHAR, START_CHAR, Symbol};
