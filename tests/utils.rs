#![allow(dead_code)]

use quartile::{
	solver::{CheckOptions, Solution},
	Dictionary,
};
use std::{
	fs,
	path::PathBuf,
	sync::atomic::{AtomicUsize, Ordering},
};

#[derive(Debug, thiserror::Error)]
#[error("{0} word failed to be correctly found")]
struct SolveErrors(usize);

/// Writes `content` to a fresh file in the temporary directory
pub(crate) fn temp_file(name: &str, content: impl AsRef<[u8]>) -> PathBuf {
	static COUNTER: AtomicUsize = AtomicUsize::new(0);

	let path = std::env::temp_dir().join(format!(
		"quartile-{}-{}-{name}",
		std::process::id(),
		COUNTER.fetch_add(1, Ordering::Relaxed)
	));
	fs::write(&path, content).expect("temporary file should be writable");
	path
}

/// Whether `word` is among the found words
pub(crate) fn is_found(solution: &Solution, word: &str) -> bool {
	solution.found.iter().any(|f| f.word == word)
}

/// Solves `tiles` against `dic` and checks which words come out
pub(crate) fn test_puzzle(
	dic: &str,
	tiles: &[&str],
	max_group: usize,
	good: &[&str],
	wrong: &[&str],
) -> Result<(), Box<dyn std::error::Error>> {
	let _ = pretty_env_logger::try_init();

	let dict = Dictionary::from_slice(dic);
	let options = CheckOptions {
		report_misses: true,
		..CheckOptions::default()
	};
	let solution = dict.solve(tiles, max_group, &options);

	let mut errors = 0;

	errors += good
		.iter()
		.filter(|w| {
			if is_found(&solution, w) {
				log::info!("{w} is indeed found");
				false
			} else {
				log::error!("{w} is supposed to be found but is not");
				true
			}
		})
		.count();

	errors += wrong
		.iter()
		.filter(|w| {
			if is_found(&solution, w) {
				log::error!("{w} is supposed to be missing but is found");
				true
			} else {
				log::info!("{w} is indeed missing");
				false
			}
		})
		.count();

	if errors == 0 {
		Ok(())
	} else {
		Err(Box::new(SolveErrors(errors)))
	}
}
