//! Reading the tiles of a puzzle

use std::{
	fs, io,
	path::{Path, PathBuf},
};

/// Ways reading a puzzle could go wrong
#[derive(Debug, thiserror::Error)]
pub enum PuzzleError {
	/// Puzzle file could not be opened or read
	#[error("could not read puzzle `{}`: {source}", path.display())]
	Unreadable {
		/// Offending file
		path: PathBuf,
		/// Underlying failure
		source: io::Error,
	},

	/// Puzzle file holds no tile once blank lines are dropped
	#[error("puzzle file `{}` is empty", path.display())]
	Empty {
		/// Offending file
		path: PathBuf,
	},
}

/// One tile per line, surrounding whitespace trimmed and blank lines dropped.
///
/// Tiles are otherwise kept as written.
#[must_use]
pub fn tiles_from_slice(content: &str) -> Vec<String> {
	content
		.lines()
		.map(str::trim)
		.filter(|line| !line.is_empty())
		.map(ToOwned::to_owned)
		.collect()
}

/// Reads the tiles of the puzzle file at `path`
///
/// # Errors
///
/// Will error if the file cannot be read or holds no tile at all.
pub fn read_tiles(path: &Path) -> Result<Vec<String>, PuzzleError> {
	let content = fs::read_to_string(path).map_err(|source| PuzzleError::Unreadable {
		path: path.to_owned(),
		source,
	})?;

	let tiles = tiles_from_slice(&content);
	if tiles.is_empty() {
		return Err(PuzzleError::Empty {
			path: path.to_owned(),
		});
	}

	Ok(tiles)
}
