//! Parser for the `WordNet` Prolog export (`wn_s.pl`)
//!
//! Every synset member is written as a `s/6` fact:
//!
//! ```text
//! s(synset_id,w_num,'word',ss_type,sense_number,tag_count).
//! ```

use nom::{
	branch::alt,
	bytes::complete::{is_not, tag},
	character::complete::{char, digit1},
	combinator::value,
	sequence::{terminated, tuple},
	IResult, Parser,
};
use nom_supreme::ParserExt;
use std::fmt;

/// Synset type tag attached to every word
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PartOfSpeech {
	/// `n`
	Noun,
	/// `v`
	Verb,
	/// `a`
	Adjective,
	/// `r`
	Adverb,
	/// `s`
	AdjectiveSatellite,
}

impl PartOfSpeech {
	fn parse(i: &str) -> IResult<&str, Self> {
		alt((
			value(Self::Noun, char('n')),
			value(Self::Verb, char('v')),
			value(Self::Adjective, char('a')),
			value(Self::Adverb, char('r')),
			value(Self::AdjectiveSatellite, char('s')),
		))(i)
	}
}

impl fmt::Display for PartOfSpeech {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		let code = match self {
			Self::Noun => 'n',
			Self::Verb => 'v',
			Self::Adjective => 'a',
			Self::Adverb => 'r',
			Self::AdjectiveSatellite => 's',
		};
		write!(f, "{code}")
	}
}

/// The fields of a `s/6` fact we care about
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Record<'a> {
	/// Word as written in the source, untrimmed and with its original casing
	pub(crate) headword: &'a str,
	pub(crate) part_of_speech: PartOfSpeech,
}

impl<'a> Record<'a> {
	/// Finds the leftmost well-formed fact in `line`, whatever surrounds it
	pub(crate) fn find(line: &'a str) -> Option<Self> {
		line.match_indices("s(")
			.find_map(|(at, _)| Self::parse(&line[at..]).ok())
			.map(|(_, record)| record)
	}

	fn parse(i: &'a str) -> IResult<&'a str, Self> {
		tuple((
			number_field,
			number_field,
			// quotes doubled inside a word (`'o''clock'`) are not supported
			is_not("'").delimited_by(char('\'')).terminated(char(',')),
			PartOfSpeech::parse.terminated(char(',')),
			number_field,
			digit1,
		))
		.preceded_by(tag("s("))
		.terminated(char(')'))
		.map(|(_, _, headword, part_of_speech, _, _)| Self {
			headword,
			part_of_speech,
		})
		.parse(i)
	}
}

/// A number followed by its comma separator
fn number_field(i: &str) -> IResult<&str, &str> {
	terminated(digit1, char(','))(i)
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn can_parse_every_part_of_speech() {
		macro_rules! test {
			($source:literal => $res:expr) => {{
				let (i, pos) = PartOfSpeech::parse($source).unwrap();
				assert_eq!(pos, $res);
				assert_eq!(i, "");
				assert_eq!(pos.to_string(), $source);
			}};
		}

		test!("n" => PartOfSpeech::Noun);
		test!("v" => PartOfSpeech::Verb);
		test!("a" => PartOfSpeech::Adjective);
		test!("r" => PartOfSpeech::Adverb);
		test!("s" => PartOfSpeech::AdjectiveSatellite);

		assert!(PartOfSpeech::parse("x").is_err());
	}

	#[test]
	fn can_find_records() {
		macro_rules! test {
			($source:literal -> $headword:literal, $pos:expr) => {{
				let record = Record::find($source).expect("line should hold a record");
				assert_eq!(record.headword, $headword);
				assert_eq!(record.part_of_speech, $pos);
			}};
		}

		test!("s(100001740,1,'entity',n,1,11)." -> "entity", PartOfSpeech::Noun);
		test!("s(200001740,1,'breathe',v,1,25)" -> "breathe", PartOfSpeech::Verb);
		test!("s(300001740,1,'able',a,1,2)." -> "able", PartOfSpeech::Adjective);
		test!("s(400001740,1,'barely',r,1,2)." -> "barely", PartOfSpeech::Adverb);
		test!("s(300002098,1,'abaxial',s,1,0)." -> "abaxial", PartOfSpeech::AdjectiveSatellite);

		// the fact may sit anywhere in the line
		test!("  s(1,1,'cat',n,1,3).  % trailing" -> "cat", PartOfSpeech::Noun);
		test!("fs(1,1,'cat',n,1,3)." -> "cat", PartOfSpeech::Noun);

		// whitespace and casing are kept for the loader to handle
		test!("s(1,1,'ice cream',n,1,0)." -> "ice cream", PartOfSpeech::Noun);
		test!("s(1,1,'Paris',n,1,0)." -> "Paris", PartOfSpeech::Noun);
	}

	#[test]
	fn skips_earlier_malformed_candidates() {
		let record = Record::find("s(x) s(2,1,'at',n,1,2).").expect("second fact is valid");
		assert_eq!(record.headword, "at");
	}

	#[test]
	fn rejects_malformed_lines() {
		for line in [
			"",
			":- dynamic s/6.",
			"s(1,1,cat,n,1,3).",
			"s(1,1,'cat',x,1,3).",
			"s(1,1,'',n,1,3).",
			"s(1,'cat',n,1,3).",
			"s(1,1,'cat',n,1,3",
			"s(1,1,'o''clock',r,1,0).",
			"g(100001740,'that which is perceived').",
		] {
			assert_eq!(Record::find(line), None, "`{line}` should not parse");
		}
	}
}
