//! High level interface to build the word list
//!
//! A [`Dictionary`] is filled from `WordNet` Prolog sources, each kept word is
//! stored along with its naive inflections. Querying the filled dictionary
//! against puzzle tiles lives in [`crate::solver`].

use crate::{
	forms::{plural, verb_forms, VerbForms},
	trie::Trie,
	wordnet::{PartOfSpeech, Record},
};
use std::{
	fs::File,
	io::{self, BufRead, BufReader},
	path::{Path, PathBuf},
};

/// Words known to the solver
#[derive(Debug, Default)]
pub struct Dictionary {
	/// Underlying word oracle
	words: Trie,
	/// Every insertion made, duplicates included
	inserted: usize,
}

/// Ways loading a [`Dictionary`] could go wrong
///
/// Lines that are not `s/6` facts are never an error, they are skipped.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
	/// Source could not be opened or failed while being read
	#[error("could not read dictionary `{}`: {source}", path.display())]
	Unreadable {
		/// Offending source
		path: PathBuf,
		/// Underlying failure
		source: io::Error,
	},
}

/// Constructors
impl Dictionary {
	/// Loads every fact found in `content`
	#[must_use]
	pub fn from_slice(content: &str) -> Self {
		let mut dict = Self::default();
		content.lines().for_each(|line| dict.load_line(line));
		dict
	}

	/// Loads the `WordNet` Prolog file at `path`, typically `prolog/wn_s.pl`.
	///
	/// # Errors
	///
	/// Will error if the file cannot be opened or fails midway, the partially
	/// filled dictionary is dropped.
	pub fn from_path(path: &Path) -> Result<Self, LoadError> {
		let mut dict = Self::default();
		dict.load_path(path)?;
		Ok(dict)
	}
}

/// Loading
impl Dictionary {
	/// Adds the content of the file at `path` and returns the number of
	/// insertions it made.
	///
	/// # Errors
	///
	/// Will error if the file cannot be opened or fails midway. The words read
	/// before the failure stay inserted, callers should not use the dictionary
	/// any further.
	pub fn load_path(&mut self, path: &Path) -> Result<usize, LoadError> {
		let unreadable = |source| LoadError::Unreadable {
			path: path.to_owned(),
			source,
		};

		let file = File::open(path).map_err(unreadable)?;
		self.load_reader(BufReader::new(file)).map_err(unreadable)
	}

	/// Adds every fact read from `reader` and returns the number of insertions
	/// it made.
	///
	/// A line that is not valid UTF-8 is skipped like any other malformed line.
	///
	/// # Errors
	///
	/// Forwards any read failure, see [`Self::load_path`] for the state left behind.
	pub fn load_reader<R: BufRead>(&mut self, mut reader: R) -> io::Result<usize> {
		let before = self.inserted;

		let mut buffer = Vec::new();
		loop {
			buffer.clear();
			if reader.read_until(b'\n', &mut buffer)? == 0 {
				break;
			}

			match std::str::from_utf8(&buffer) {
				Ok(line) => self.load_line(line.trim_end_matches(&['\n', '\r'][..])),
				Err(err) => log::debug!("skipping line that is not valid UTF-8: {err}"),
			}
		}

		Ok(self.inserted - before)
	}

	/// Inserts the word held by `line` and its inflections, if any
	fn load_line(&mut self, line: &str) {
		log::trace!("reading line: {line}");

		let Some(record) = Record::find(line) else {
			log::debug!("failed to parse line: {line}");
			return;
		};

		let headword = record.headword.trim();
		if headword.is_empty() {
			log::debug!("blank headword in line: {line}");
			return;
		}

		// proper nouns are not puzzle material
		if headword.chars().next().is_some_and(char::is_uppercase) {
			log::debug!("skipping capitalized headword `{headword}`");
			return;
		}

		let word = headword.to_lowercase();
		log::trace!("inserting `{word}` ({})", record.part_of_speech);
		self.insert(&word);

		match record.part_of_speech {
			PartOfSpeech::Noun => self.insert(&plural(&word)),
			PartOfSpeech::Verb => {
				let VerbForms { past, participle } = verb_forms(&word);
				self.insert(&past);
				self.insert(&participle);
			}
			PartOfSpeech::Adjective | PartOfSpeech::Adverb | PartOfSpeech::AdjectiveSatellite => {}
		}
	}

	fn insert(&mut self, word: &str) {
		self.words.insert(word);
		self.inserted += 1;
	}
}

/// Accessors
impl Dictionary {
	/// Whether `word` is known, exactly as written
	#[must_use]
	pub fn contains(&self, word: &str) -> bool {
		self.words.contains(word)
	}

	/// Number of insertions made so far, a word inserted twice counts twice
	#[must_use]
	pub const fn inserted(&self) -> usize {
		self.inserted
	}

	/// Number of distinct words known
	#[must_use]
	pub const fn len(&self) -> usize {
		self.words.len()
	}

	/// Whether no word is known
	#[must_use]
	pub const fn is_empty(&self) -> bool {
		self.words.is_empty()
	}

	/// Underlying prefix tree
	#[must_use]
	pub const fn trie(&self) -> &Trie {
		&self.words
	}
}
