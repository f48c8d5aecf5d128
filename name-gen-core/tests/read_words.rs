use std::fs;

use name_gen_core::io::read_words;
use name_gen_core::{FrequencyModel, NameGenError, WordSampler};

#[test]
fn lines_are_trimmed_lowercased_and_filtered() {
	let dir = tempfile::tempdir().unwrap();
	let path = dir.path().join("names.txt");
	fs::write(&path, "Ann\n  AMY \r\n\n   \nbob\n").unwrap();
	let words = read_words(&path).unwrap();
	assert_eq!(words, vec!["ann", "amy", "bob"]);
}

#[test]
fn missing_file_is_io_error() {
	let dir = tempfile::tempdir().unwrap();
	let err = read_words(dir.path().join("missing.txt")).unwrap_err();
	assert!(matches!(err, NameGenError::Io(_)));
}

#[test]
fn blank_file_builds_no_model() {
	let dir = tempfile::tempdir().unwrap();
	let path = dir.path().join("blank.txt");
	fs::write(&path, "\n\n").unwrap();
	let words = read_words(&path).unwrap();
	assert!(matches!(FrequencyModel::from_words(&words), Err(NameGenError::EmptyModel)));
}

#[test]
fn seed_file_to_generated_word() {
	let dir = tempfile::tempdir().unwrap();
	let path = dir.path().join("one.txt");
	fs::write(&path, "Ann\n").unwrap();
	let model = FrequencyModel::from_words(read_words(&path).unwrap()).unwrap();
	assert_eq!(WordSampler::new(&model).generate().unwrap(), "ann");
}
