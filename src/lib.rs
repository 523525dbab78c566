//! quartile
//!
//! Finds the words hidden in a Quartile puzzle: every arrangement of a few
//! letter tiles is looked up in a [`Dictionary`] built from the `WordNet`
//! Prolog export.

mod dictionary;
pub mod forms;
pub mod puzzle;
pub mod solver;
mod trie;
mod wordnet;

pub use dictionary::{Dictionary, LoadError};
pub use trie::Trie;
