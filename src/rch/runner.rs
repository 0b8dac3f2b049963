// SPDX-License-Identifier: MIT OR Apache-2.0
// Project: rustchkhash
// File: runner.rs
// Author: Volker Schwaberow <volker@schwaberow.de>
// Copyright (c) 2023 Volker Schwaberow

//! Drives a hash engine over a vector set and compares every digest
//! bit-exactly. The first failure stops the run: a failed self-test
//! must not continue with unverified hashing.

use crate::rch::codec::{self, CodecError};
use crate::rch::compare::bytes_equal;
use crate::rch::engine::{DigestBuf, HashAlgorithm, HashEngine};
use crate::rch::report::ProgressSink;
use crate::rch::vectors::VectorSet;
use std::fmt;

/// Chunk size used when feeding input to the engine. Harness policy,
/// not a hashing requirement; the final chunk may be shorter.
pub const CHUNK_LEN: usize = 4;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MismatchReport {
	pub algorithm: HashAlgorithm,
	pub input: Vec<u8>,
	pub expected: DigestBuf,
	pub actual: DigestBuf,
}

#[derive(Debug)]
pub enum HarnessError {
	/// Malformed corpus entry: a build/tooling defect, not a runtime
	/// condition to recover from.
	Corpus {
		index: usize,
		source: CodecError,
	},
	/// The engine produced a digest that differs from the reference.
	Mismatch(Box<MismatchReport>),
}

impl fmt::Display for HarnessError {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::Corpus { index, source } => write!(
				f,
				"corpus integrity error in vector {}: {}",
				index, source
			),
			Self::Mismatch(report) => write!(
				f,
				"{} digest mismatch for a {} byte message",
				report.algorithm,
				report.input.len()
			),
		}
	}
}

impl std::error::Error for HarnessError {
	fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
		match self {
			Self::Corpus { source, .. } => Some(source),
			Self::Mismatch(_) => None,
		}
	}
}

/// Run every vector of `set` through the engine. Returns the pass
/// count, or the first corpus error or digest mismatch. No vector
/// after a failing one is executed.
pub fn run_vector_set(
	engine: &mut dyn HashEngine,
	algorithm: HashAlgorithm,
	set: &VectorSet,
	sink: &mut dyn ProgressSink,
) -> Result<usize, HarnessError> {
	sink.set_started(algorithm, set.name);
	let mut passed = 0usize;
	for (index, vector) in set.vectors.iter().enumerate() {
		let input = codec::decode_hex(vector.msg).map_err(
			|source| HarnessError::Corpus { index, source },
		)?;
		let expected = DigestBuf::from_hex(vector.digest)
			.map_err(|source| HarnessError::Corpus {
				index,
				source,
			})?;

		engine.init(algorithm);
		for chunk in input.chunks(CHUNK_LEN) {
			engine.update(chunk);
		}
		engine.finalize();

		let size = algorithm.digest_size();
		let calculated = engine.digest();
		if bytes_equal(calculated, expected.as_slice(), size) {
			passed += 1;
			sink.vector_passed();
		} else {
			return Err(HarnessError::Mismatch(Box::new(
				MismatchReport {
					algorithm,
					input,
					expected,
					actual: DigestBuf::from_slice(calculated),
				},
			)));
		}
	}
	sink.set_finished(passed);
	Ok(passed)
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::rch::codec::CodecErrorKind;
	use crate::rch::engine::CryptoEngine;
	use crate::rch::vectors::{self, TestVector};

	#[derive(Default)]
	struct RecordingSink {
		started: Vec<String>,
		dots: usize,
		finished: Vec<usize>,
	}

	impl ProgressSink for RecordingSink {
		fn set_started(
			&mut self,
			algorithm: HashAlgorithm,
			name: &str,
		) {
			self.started
				.push(format!("{} {}", algorithm, name));
		}

		fn vector_passed(&mut self) {
			self.dots += 1;
		}

		fn set_finished(&mut self, passed: usize) {
			self.finished.push(passed);
		}
	}

	/// Wraps the real engine and corrupts one byte of every digest.
	struct CorruptEngine {
		inner: CryptoEngine,
		output: Vec<u8>,
	}

	impl CorruptEngine {
		fn new() -> Self {
			Self {
				inner: CryptoEngine::new(),
				output: Vec::new(),
			}
		}
	}

	impl HashEngine for CorruptEngine {
		fn init(&mut self, algorithm: HashAlgorithm) {
			self.inner.init(algorithm);
			self.output.clear();
		}

		fn update(&mut self, chunk: &[u8]) {
			self.inner.update(chunk);
		}

		fn finalize(&mut self) {
			self.inner.finalize();
			self.output = self.inner.digest().to_vec();
			self.output[0] ^= 0x01;
		}

		fn digest(&self) -> &[u8] {
			&self.output
		}
	}

	#[test]
	fn sha256_short_set_passes_with_real_engine() {
		let mut engine = CryptoEngine::new();
		let mut sink = RecordingSink::default();
		let [short, _] =
			vectors::suite_for(HashAlgorithm::Sha256);
		let passed = run_vector_set(
			&mut engine,
			HashAlgorithm::Sha256,
			short,
			&mut sink,
		)
		.unwrap();
		assert_eq!(passed, short.vectors.len());
		assert_eq!(sink.dots, short.vectors.len());
		assert_eq!(sink.finished, vec![passed]);
	}

	#[test]
	fn first_mismatch_stops_the_set() {
		let mut engine = CorruptEngine::new();
		let mut sink = RecordingSink::default();
		let [short, _] =
			vectors::suite_for(HashAlgorithm::Sha1);
		let err = run_vector_set(
			&mut engine,
			HashAlgorithm::Sha1,
			short,
			&mut sink,
		)
		.unwrap_err();
		match err {
			HarnessError::Mismatch(report) => {
				// The very first vector fails; nothing passes
				// and the set is never finished.
				assert_eq!(sink.dots, 0);
				assert!(sink.finished.is_empty());
				assert_eq!(
					report.algorithm,
					HashAlgorithm::Sha1
				);
				assert_eq!(
					report.expected.as_slice()[0] ^ 0x01,
					report.actual.as_slice()[0]
				);
			}
			other => panic!("unexpected error: {}", other),
		}
	}

	#[test]
	fn malformed_corpus_entry_is_a_fatal_corpus_error() {
		static BROKEN: &[TestVector] = &[TestVector {
			msg: "nothex",
			digest: "00",
		}];
		let set = VectorSet {
			name: "broken",
			vectors: BROKEN,
		};
		let mut engine = CryptoEngine::new();
		let mut sink = RecordingSink::default();
		let err = run_vector_set(
			&mut engine,
			HashAlgorithm::Sha256,
			&set,
			&mut sink,
		)
		.unwrap_err();
		match err {
			HarnessError::Corpus { index, source } => {
				assert_eq!(index, 0);
				assert_eq!(
					source.kind(),
					CodecErrorKind::InvalidCharacter
				);
			}
			other => panic!("unexpected error: {}", other),
		}
	}

	#[test]
	fn empty_message_vector_runs_zero_updates() {
		/// Engine double that counts update calls.
		struct CountingEngine {
			inner: CryptoEngine,
			updates: usize,
		}

		impl HashEngine for CountingEngine {
			fn init(&mut self, algorithm: HashAlgorithm) {
				self.inner.init(algorithm);
				self.updates = 0;
			}

			fn update(&mut self, chunk: &[u8]) {
				self.updates += 1;
				self.inner.update(chunk);
			}

			fn finalize(&mut self) {
				self.inner.finalize();
			}

			fn digest(&self) -> &[u8] {
				self.inner.digest()
			}
		}

		static EMPTY_ONLY: &[TestVector] = &[TestVector {
			msg: "",
			digest: "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855",
		}];
		let set = VectorSet {
			name: "empty",
			vectors: EMPTY_ONLY,
		};
		let mut engine = CountingEngine {
			inner: CryptoEngine::new(),
			updates: 0,
		};
		let mut sink = RecordingSink::default();
		let passed = run_vector_set(
			&mut engine,
			HashAlgorithm::Sha256,
			&set,
			&mut sink,
		)
		.unwrap();
		assert_eq!(passed, 1);
		assert_eq!(engine.updates, 0);
	}
}
