//! Logic of the [`Dictionary`] to solve a puzzle
//!
//! Every ordered arrangement of up to `max_group` distinct tiles is glued into
//! a candidate, and each candidate is looked up as is.

use crate::Dictionary;
use rayon::prelude::*;
use std::collections::HashSet;

/// What to do with a word reached by several tile arrangements
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum Duplicates {
	/// Report it once per arrangement
	#[default]
	Keep,
	/// Report it at its first arrangement only
	Skip,
}

/// Settings of [`Dictionary::check_candidates`]
#[derive(Debug, Default, Clone)]
pub struct CheckOptions {
	/// Log every candidate that is not a word, at `debug` level
	pub report_misses: bool,
	/// Dedup policy, every occurrence is reported by default
	pub duplicates: Duplicates,
	/// Look candidates up on the `rayon` thread pool
	///
	/// Found words come back in candidate order either way.
	pub parallel: bool,
}

/// A candidate that is a known word
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Found {
	/// Position among found words, starting at 1
	pub rank: usize,
	/// Glued tiles
	pub word: String,
}

/// Outcome of [`Dictionary::solve`]
#[derive(Debug, Clone, Default)]
pub struct Solution {
	/// Words in discovery order
	pub found: Vec<Found>,
	/// Number of candidates looked up
	pub checked: usize,
}

/// Number of candidates [`generate_candidates`] yields for `tiles` tiles,
/// `n!/(n-r)!` summed for every group size `r`
#[must_use]
pub fn candidate_count(tiles: usize, max_group: usize) -> usize {
	let mut arrangements = 1_usize;
	(1..=max_group.min(tiles))
		.map(|size| {
			arrangements = arrangements.saturating_mul(tiles - size + 1);
			arrangements
		})
		.fold(0, usize::saturating_add)
}

/// Glues every ordered arrangement of 1 to `max_group` distinct tiles.
///
/// Group sizes come in increasing order. Inside a size, tile selections come
/// in the order of `tiles` and every arrangement of a selection follows it.
/// `max_group` is clamped to the number of tiles.
#[must_use]
pub fn generate_candidates<S: AsRef<str>>(tiles: &[S], max_group: usize) -> Vec<String> {
	let tiles = tiles.iter().map(AsRef::as_ref).collect::<Vec<_>>();
	let mut candidates = Vec::with_capacity(candidate_count(tiles.len(), max_group));

	for size in 1..=max_group.min(tiles.len()) {
		let mut selection = Vec::with_capacity(size);
		for_each_combination(&tiles, size, 0, &mut selection, &mut |selection: &[&str]| {
			let mut used = vec![false; selection.len()];
			let mut word = String::new();
			for_each_permutation(selection, &mut used, &mut word, &mut |word: &str| {
				candidates.push(word.to_owned());
			});
		});
	}

	candidates
}

/// Calls `visit` with every selection of `size` tiles taken from `start`
/// onwards, keeping their relative order
fn for_each_combination<'t>(
	tiles: &[&'t str],
	size: usize,
	start: usize,
	selection: &mut Vec<&'t str>,
	visit: &mut impl FnMut(&[&'t str]),
) {
	if selection.len() == size {
		visit(selection);
		return;
	}

	for (at, &tile) in tiles.iter().enumerate().skip(start) {
		selection.push(tile);
		for_each_combination(tiles, size, at + 1, selection, visit);
		selection.pop();
	}
}

/// Calls `visit` with `word` followed by every arrangement of the unused tiles
fn for_each_permutation(
	selection: &[&str],
	used: &mut [bool],
	word: &mut String,
	visit: &mut impl FnMut(&str),
) {
	if used.iter().all(|used| *used) {
		visit(word);
		return;
	}

	for (at, tile) in selection.iter().enumerate() {
		if used[at] {
			continue;
		}

		let len = word.len();
		used[at] = true;
		word.push_str(tile);

		for_each_permutation(selection, used, word, visit);

		word.truncate(len);
		used[at] = false;
	}
}

/// Methods for solving puzzles against the dictionary
impl Dictionary {
	/// Keeps the candidates that are words, in candidate order, and ranks them
	#[must_use]
	pub fn check_candidates(&self, candidates: &[String], options: &CheckOptions) -> Vec<Found> {
		let is_word = |candidate: &&String| {
			let found = self.contains(candidate);
			if !found && options.report_misses {
				log::debug!("not found in dictionary: {candidate}");
			}
			found
		};

		let words: Vec<&String> = if options.parallel {
			candidates.par_iter().filter(is_word).collect()
		} else {
			candidates.iter().filter(is_word).collect()
		};

		let mut seen = HashSet::new();
		words
			.into_iter()
			.filter(|word| options.duplicates == Duplicates::Keep || seen.insert(word.as_str()))
			.enumerate()
			.map(|(index, word)| Found {
				rank: index + 1,
				word: word.clone(),
			})
			.collect()
	}

	/// Finds the words made of 1 to `max_group` distinct `tiles`
	#[must_use]
	pub fn solve<S: AsRef<str>>(
		&self,
		tiles: &[S],
		max_group: usize,
		options: &CheckOptions,
	) -> Solution {
		let candidates = generate_candidates(tiles, max_group);
		log::debug!("checking {} candidates", candidates.len());

		let found = self.check_candidates(&candidates, options);
		Solution {
			found,
			checked: candidates.len(),
		}
	}
}
