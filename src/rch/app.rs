// SPDX-License-Identifier: MIT OR Apache-2.0
// Project: rustchkhash
// File: app.rs
// Author: Volker Schwaberow <volker@schwaberow.de>
// Copyright (c) 2023 Volker Schwaberow

use crate::rch::engine::{
	CryptoEngine, HashAlgorithm, HashEngine,
};
use crate::rch::report::{self, ConsoleReporter, ProgressSink};
use crate::rch::runner::{self, HarnessError};
use crate::rch::vectors;
use clap::{crate_name, Arg, ArgAction};
use colored::Colorize;
use std::error::Error;
use strum::IntoEnumIterator;

#[cfg(not(any(
	feature = "cavp-sha1",
	feature = "cavp-sha256",
	feature = "cavp-sha512"
)))]
compile_error!(
	"no algorithm selected: enable one of the features `cavp-sha1`, `cavp-sha256`, `cavp-sha512`"
);

// First enabled feature wins, in SHA1 > SHA256 > SHA512 order.
#[cfg(feature = "cavp-sha1")]
pub const SELECTED: HashAlgorithm = HashAlgorithm::Sha1;
#[cfg(all(feature = "cavp-sha256", not(feature = "cavp-sha1")))]
pub const SELECTED: HashAlgorithm = HashAlgorithm::Sha256;
#[cfg(all(
	feature = "cavp-sha512",
	not(feature = "cavp-sha1"),
	not(feature = "cavp-sha256")
))]
pub const SELECTED: HashAlgorithm = HashAlgorithm::Sha512;

fn build_cli() -> clap::Command {
	clap::Command::new(crate_name!())
		.bin_name(crate_name!())
		.version(clap::crate_version!())
		.author(clap::crate_authors!())
		.about(
			"Verify a hash engine against known-answer test vectors",
		)
		.arg(
			Arg::new("passes")
				.long("passes")
				.value_parser(clap::value_parser!(u64))
				.help("Full passes over the vector suite (0 = run until interrupted)")
				.default_value("0"),
		)
		.arg(
			Arg::new("list-algorithms")
				.long("list-algorithms")
				.help("List supported algorithms and exit")
				.action(ArgAction::SetTrue),
		)
}

/// Run the vector suite repeatedly. A pass is the short-message set
/// followed by the long-message set; the heartbeat callback fires
/// after every completed pass. `passes == 0` loops until a failure —
/// the continuous self-test mode the binary defaults to.
pub fn run_suite(
	engine: &mut dyn HashEngine,
	algorithm: HashAlgorithm,
	passes: u64,
	sink: &mut dyn ProgressSink,
	heartbeat: &mut dyn FnMut(u64),
) -> Result<u64, HarnessError> {
	let suite = vectors::suite_for(algorithm);
	let mut completed = 0u64;
	loop {
		for set in suite {
			runner::run_vector_set(
				engine, algorithm, set, sink,
			)?;
		}
		completed += 1;
		heartbeat(completed);
		if passes != 0 && completed >= passes {
			return Ok(completed);
		}
	}
}

pub fn run() -> Result<(), Box<dyn Error>> {
	let capp = build_cli();
	let m = capp.get_matches();

	if m.get_flag("list-algorithms") {
		for algorithm in HashAlgorithm::iter() {
			println!(
				"{} ({} byte digest)",
				algorithm.canonical_name(),
				algorithm.digest_size()
			);
		}
		return Ok(());
	}

	let passes = *m.get_one::<u64>("passes").unwrap_or(&0);
	let algorithm = SELECTED;
	let suite = vectors::suite_for(algorithm);
	let total: usize =
		suite.iter().map(|set| set.vectors.len()).sum();
	println!(
		"{} conformance harness, {} vectors per pass",
		algorithm, total
	);

	let mut engine = CryptoEngine::new();
	let mut reporter = ConsoleReporter;
	let outcome = run_suite(
		&mut engine,
		algorithm,
		passes,
		&mut reporter,
		&mut |pass| {
			println!(
				"{}",
				format!("pass {} complete", pass).green()
			);
		},
	);

	match outcome {
		Ok(_) => Ok(()),
		Err(HarnessError::Mismatch(mismatch)) => {
			report::print_mismatch(&mismatch);
			std::process::exit(1);
		}
		Err(err) => {
			eprintln!("Error: {}", err);
			std::process::exit(1);
		}
	}
}
