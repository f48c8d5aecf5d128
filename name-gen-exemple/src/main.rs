use std::collections::{BTreeSet, HashSet};
use std::path::PathBuf;

use clap::Parser;
use rand::rngs::StdRng;
use rand::SeedableRng;

use name_gen_core::io::{capitalize, read_words};
use name_gen_core::model::DEFAULT_MAX_LENGTH;
use name_gen_core::{FrequencyModel, WordSampler};

/// Overruns tolerated across the whole run before giving up.
const MAX_OVERRUNS: usize = 1000;

/// Trains on a seed list, generates words and reports how many are real.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Seed list, one word per line
    #[arg(long, default_value = "./data/first-names.txt")]
    corpus: PathBuf,

    /// Number of words to generate
    #[arg(long, default_value_t = 100)]
    count: usize,

    /// Cap on generated word length
    #[arg(long, default_value_t = DEFAULT_MAX_LENGTH)]
    max_length: usize,

    /// RNG seed for reproducible output
    #[arg(long)]
    seed: Option<u64>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let args = Args::parse();

    // Load and normalize the seed list (trimmed, lowercased, no blank lines)
    let words = read_words(&args.corpus)?;

    // Build the model once; it is read-only from here on
    let model = FrequencyModel::from_words(&words)?;
    let sampler = WordSampler::new(&model).with_max_length(args.max_length);

    let mut rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };

    // Overruns are independent draws, so just try again (up to a point)
    let mut generated = Vec::with_capacity(args.count);
    let mut overruns = 0;
    while generated.len() < args.count {
        match sampler.generate_with(&mut rng) {
            Ok(word) => generated.push(word),
            Err(e) if e.is_retryable() && overruns < MAX_OVERRUNS => {
                overruns += 1;
                log::warn!("{e}, retrying");
            }
            Err(e) => return Err(e.into()),
        }
    }

    let known: HashSet<&str> = words.iter().map(String::as_str).collect();
    let real: BTreeSet<&str> = generated.iter().map(String::as_str).filter(|w| known.contains(w)).collect();
    let ratio = if generated.is_empty() { 0.0 } else { real.len() as f64 / generated.len() as f64 };

    println!("Seeded with {} real names", words.len());
    println!("Generated {} names", generated.len());
    println!("{} generated names are real ({:.1}%)", real.len(), ratio * 100.0);
    println!("Real names which were also generated: {}", real.iter().copied().collect::<Vec<_>>().join(", "));
    for (i, word) in generated.iter().enumerate() {
        println!("Generated word {}: {}", i + 1, capitalize(word));
    }

    Ok(())
}
