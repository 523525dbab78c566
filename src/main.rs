//! Quartile CLI
//!
//! ```text
//! quartile --dictionary ./prolog/wn_s.pl --puzzle ./samples/puzzle1.txt
//! ```
//!
//! The `WordNet` Prolog export is available at
//! <https://wordnetcode.princeton.edu/3.0/WNprolog-3.0.tar.gz>.

use clap::Parser;
use colored::Colorize;
use log::LevelFilter;
use quartile::{
	puzzle::read_tiles,
	solver::{CheckOptions, Duplicates, Found},
	Dictionary,
};
use std::{error::Error, path::PathBuf, process::ExitCode, time::Instant};

/// Finds the words hidden in a Quartile puzzle
#[derive(clap::Parser)]
#[command(version, about)]
struct Args {
	/// `WordNet` Prolog synset file (`wn_s.pl`), may be given several times
	#[arg(long, short, required = true)]
	dictionary: Vec<PathBuf>,

	/// Puzzle file, one tile per line
	#[arg(long, short)]
	puzzle: PathBuf,

	/// Print parsing details and every candidate that is not a word
	#[arg(long)]
	debug: bool,

	/// Maximum number of tiles glued in a single word
	#[arg(long, short = 'k', default_value_t = 4, value_parser = clap::value_parser!(u8).range(1..))]
	max_group: u8,

	/// Report each word once, even when several arrangements spell it
	#[arg(long, short)]
	unique: bool,

	/// Check candidates on every core
	#[arg(long)]
	parallel: bool,
}

fn main() -> ExitCode {
	let args = Args::parse();

	pretty_env_logger::formatted_builder()
		.filter_level(if args.debug {
			LevelFilter::Debug
		} else {
			LevelFilter::Info
		})
		.parse_default_env()
		.init();

	match run(&args) {
		Ok(_) => ExitCode::SUCCESS,
		Err(err) => {
			log::error!("{err}");
			ExitCode::FAILURE
		}
	}
}

/// Loads, solves and prints, returns the number of words found
fn run(args: &Args) -> Result<usize, Box<dyn Error>> {
	let start = Instant::now();

	let mut dict = Dictionary::default();
	for path in &args.dictionary {
		log::info!("Loading dictionary from {}", path.display());
		let inserted = dict.load_path(path)?;
		log::debug!("{inserted} words inserted from {}", path.display());
	}
	log::info!(
		"Loaded {} words ({} distinct) in {:.2?}",
		dict.inserted(),
		dict.len(),
		start.elapsed()
	);

	let tiles = read_tiles(&args.puzzle)?;
	log::debug!("{} tiles: {}", tiles.len(), tiles.join(" "));

	let options = CheckOptions {
		report_misses: args.debug,
		duplicates: if args.unique {
			Duplicates::Skip
		} else {
			Duplicates::Keep
		},
		parallel: args.parallel,
	};

	let start = Instant::now();
	let solution = dict.solve(&tiles, args.max_group.into(), &options);
	solution.found.iter().for_each(print_found);

	log::info!(
		"Found {} words among {} candidates in {:.2?}",
		solution.found.len(),
		solution.checked,
		start.elapsed()
	);

	Ok(solution.found.len())
}

fn print_found(found: &Found) {
	println!(
		"{} {}",
		format!("{:>2}.", found.rank).bright_black(),
		found.word.green()
	);
}
