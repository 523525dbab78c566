//! Naive English inflections
//!
//! These are plain suffix rules, not a morphological analyser: irregular words
//! get regular forms (`run` gives `runed`).

/// Letters that keep a final `y` when pluralising
const VOWELS: &[char] = &['a', 'e', 'i', 'o', 'u'];

/// Endings that take `es` in the plural
const SIBILANT_ENDINGS: &[&str] = &["s", "sh", "ch", "x", "z"];

/// Plural of a noun, first matching rule wins:
/// - sibilant endings get `es`
/// - a `y` after a consonant becomes `ies`
/// - anything else gets `s`
#[must_use]
pub fn plural(noun: &str) -> String {
	if SIBILANT_ENDINGS.iter().any(|ending| noun.ends_with(ending)) {
		return format!("{noun}es");
	}

	match noun.strip_suffix('y') {
		Some(stem) if stem.chars().last().is_some_and(|c| !VOWELS.contains(&c)) => {
			format!("{stem}ies")
		}
		_ => format!("{noun}s"),
	}
}

/// Derived forms of a verb
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerbForms {
	/// Simple past, `walked`
	pub past: String,
	/// Present participle, `walking`
	pub participle: String,
}

/// Past tense and present participle of a verb
#[must_use]
pub fn verb_forms(verb: &str) -> VerbForms {
	let past = if verb.ends_with('e') {
		format!("{verb}d")
	} else {
		format!("{verb}ed")
	};

	let participle = match verb.strip_suffix('e') {
		Some(stem) if !stem.is_empty() => format!("{stem}ing"),
		_ => format!("{verb}ing"),
	};

	VerbForms { past, participle }
}
