use std::fs::File;
use std::io::Read;
use std::path::Path;

use crate::error::Result;

/// Reads a text file and returns all its lines as a `Vec<String>`.
///
/// - Reads the entire file into memory
/// - Splits on `\n` / `\r\n`
fn read_file<P: AsRef<Path>>(filename: P) -> std::io::Result<Vec<String>> {
	let mut contents = String::new();
	File::open(filename)?.read_to_string(&mut contents)?;
	Ok(contents.lines().map(str::to_owned).collect())
}

/// Reads a seed list, one word per line.
///
/// Each line is trimmed and lowercased; blank lines are dropped.
/// Reserved characters are not checked here, `ModelBuilder` does it.
pub fn read_words<P: AsRef<Path>>(filename: P) -> Result<Vec<String>> {
	let words: Vec<String> = read_file(&filename)?
		.iter()
		.map(|line| line.trim().to_lowercase())
		.filter(|word| !word.is_empty())
		.collect();
	log::debug!("read {} seed words from {}", words.len(), filename.as_ref().display());
	Ok(words)
}

/// Extracts the base filename without extension.
///
/// Examples:
/// - `"./data/first-names.txt"` → `"first-names"`
/// - `"names.txt"` → `"names"`
pub fn get_filename<P: AsRef<Path>>(input_path: P) -> std::io::Result<String> {
	let stem = input_path
		.as_ref()
		.file_stem()
		.ok_or_else(|| std::io::Error::new(std::io::ErrorKind::InvalidInput, "Path has no filename"))?;

	Ok(stem.to_string_lossy().to_string())
}

/// Upper-cases the first character of a word (UTF-8 aware).
pub fn capitalize(word: &str) -> String {
	let mut chars = word.chars();
	match chars.next() {
		Some(first) => first.to_uppercase().chain(chars).collect(),
		None => String::new(),
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn capitalize_first_character_only() {
		assert_eq!(capitalize("anna"), "Anna");
		assert_eq!(capitalize("élodie"), "Élodie");
		assert_eq!(capitalize("x"), "X");
		assert_eq!(capitalize(""), "");
	}

	#[test]
	fn filename_without_extension() {
		assert_eq!(get_filename("./data/first-names.txt").unwrap(), "first-names");
		assert_eq!(get_filename("names.txt").unwrap(), "names");
		assert!(get_filename("/").is_err());
	}
}
