// SPDX-License-Identifier: MIT OR Apache-2.0
// Project: rustchkhash
// File: report.rs
// Author: Volker Schwaberow <volker@schwaberow.de>
// Copyright (c) 2023 Volker Schwaberow

//! Progress and diagnostic output. Progress markers are written
//! unbuffered so they interleave correctly with other console output.

use crate::rch::engine::HashAlgorithm;
use crate::rch::runner::MismatchReport;
use colored::Colorize;
use std::io::{self, Write};

/// Render a label followed by the buffer as two uppercase hex digits
/// per byte, no separators.
pub fn encode_upper(label: &str, bytes: &[u8]) -> String {
	format!("{}{}", label, hex::encode_upper(bytes))
}

/// Receives progress events while a vector set runs. The console
/// reporter prints one dot per passing vector; tests substitute a
/// recording sink.
pub trait ProgressSink {
	fn set_started(
		&mut self,
		algorithm: HashAlgorithm,
		name: &str,
	);
	fn vector_passed(&mut self);
	fn set_finished(&mut self, passed: usize);
}

pub struct ConsoleReporter;

impl ProgressSink for ConsoleReporter {
	fn set_started(
		&mut self,
		algorithm: HashAlgorithm,
		name: &str,
	) {
		println!("{} {} vectors:", algorithm, name);
	}

	fn vector_passed(&mut self) {
		print!(".");
		let _ = io::stdout().flush();
	}

	fn set_finished(&mut self, _passed: usize) {
		println!();
	}
}

/// The diagnostic lines for a failed vector: input length, input
/// bytes, expected digest and calculated digest, all hex-encoded.
pub fn render_mismatch(report: &MismatchReport) -> Vec<String> {
	let size = report.algorithm.digest_size();
	vec![
		format!("Len:{} test failed", report.input.len()),
		encode_upper("input: ", &report.input),
		encode_upper("expected: ", report.expected.prefix(size)),
		encode_upper("actual: ", report.actual.prefix(size)),
	]
}

pub fn print_mismatch(report: &MismatchReport) {
	let mut lines = render_mismatch(report).into_iter();
	if let Some(header) = lines.next() {
		println!("{}", header.red().bold());
	}
	for line in lines {
		println!("{}", line);
	}
}
