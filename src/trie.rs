//! Prefix tree used as the word oracle

use std::collections::HashMap;

/// Set of words stored character by character, sharing common prefixes
#[derive(Debug, Default)]
pub struct Trie {
	root: TrieNode,
	/// Number of distinct words
	len: usize,
}

#[derive(Debug, Default)]
struct TrieNode {
	leaves: HashMap<char, Self>,
	/// A word ends exactly at this node
	end: bool,
}

impl Trie {
	/// Number of distinct words stored
	#[must_use]
	pub const fn len(&self) -> usize {
		self.len
	}

	/// Whether no word has been inserted, not even the empty one
	#[must_use]
	pub const fn is_empty(&self) -> bool {
		self.len == 0
	}

	/// Inserts `word`, creating the missing nodes along its path.
	///
	/// Inserting the same word again changes nothing.
	pub fn insert(&mut self, word: &str) {
		let mut current = &mut self.root;
		for char in word.chars() {
			current = current.leaves.entry(char).or_default();
		}

		if !current.end {
			current.end = true;
			self.len += 1;
		}
	}

	/// Whether `word` itself was inserted, a stored prefix of a longer word does not count
	#[must_use]
	pub fn contains(&self, word: &str) -> bool {
		let mut current = &self.root;
		for char in word.chars() {
			current = match current.leaves.get(&char) {
				Some(v) => v,
				None => return false,
			};
		}

		current.end
	}
}

impl<'a> Extend<&'a str> for Trie {
	fn extend<I: IntoIterator<Item = &'a str>>(&mut self, iter: I) {
		iter.into_iter().for_each(|word| self.insert(word));
	}
}

impl<'a> FromIterator<&'a str> for Trie {
	fn from_iter<I: IntoIterator<Item = &'a str>>(iter: I) -> Self {
		let mut trie = Self::default();
		trie.extend(iter);
		trie
	}
}
