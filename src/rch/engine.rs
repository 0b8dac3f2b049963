// SPDX-License-Identifier: MIT OR Apache-2.0
// Project: rustchkhash
// File: engine.rs
// Author: Volker Schwaberow <volker@schwaberow.de>
// Copyright (c) 2023 Volker Schwaberow

//! The hash engine seam. The harness only ever drives one session at a
//! time: `init` resets all state, and the digest returned by a session
//! is valid until the next `init`.

use crate::rch::codec::{decode_hex_into, CodecError};
use digest::{Digest, DynDigest};
use std::fmt;
use strum::EnumIter;

/// Largest digest produced by any supported algorithm (SHA-512).
pub const MAX_DIGEST_LEN: usize = 64;

#[derive(Clone, Copy, Debug, Eq, PartialEq, EnumIter)]
pub enum HashAlgorithm {
	Sha1,
	Sha256,
	Sha512,
}

impl HashAlgorithm {
	pub fn digest_size(self) -> usize {
		match self {
			Self::Sha1 => 20,
			Self::Sha256 => 32,
			Self::Sha512 => 64,
		}
	}

	pub fn canonical_name(self) -> &'static str {
		match self {
			Self::Sha1 => "sha1",
			Self::Sha256 => "sha256",
			Self::Sha512 => "sha512",
		}
	}
}

impl fmt::Display for HashAlgorithm {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		let label = match self {
			Self::Sha1 => "SHA1",
			Self::Sha256 => "SHA256",
			Self::Sha512 => "SHA512",
		};
		write!(f, "{}", label)
	}
}

/// Fixed maximum-capacity digest buffer with an explicit length.
/// Sized to the largest supported digest so a decoded expected digest
/// never relies on implicit truncation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DigestBuf {
	bytes: [u8; MAX_DIGEST_LEN],
	len: usize,
}

impl DigestBuf {
	pub fn from_hex(input: &str) -> Result<Self, CodecError> {
		let mut bytes = [0u8; MAX_DIGEST_LEN];
		let len = decode_hex_into(input, &mut bytes)?;
		Ok(Self { bytes, len })
	}

	/// Copies at most `MAX_DIGEST_LEN` bytes from `data`.
	pub fn from_slice(data: &[u8]) -> Self {
		let mut bytes = [0u8; MAX_DIGEST_LEN];
		let len = data.len().min(MAX_DIGEST_LEN);
		bytes[..len].copy_from_slice(&data[..len]);
		Self { bytes, len }
	}

	pub fn len(&self) -> usize {
		self.len
	}

	pub fn is_empty(&self) -> bool {
		self.len == 0
	}

	pub fn as_slice(&self) -> &[u8] {
		&self.bytes[..self.len]
	}

	/// First `len` meaningful bytes, clamped so a caller asking for
	/// more than was decoded never reads past the end.
	pub fn prefix(&self, len: usize) -> &[u8] {
		&self.bytes[..len.min(self.len)]
	}
}

/// Incremental hashing protocol the harness drives. One session at a
/// time; `init` zeroes any previous session.
pub trait HashEngine {
	fn init(&mut self, algorithm: HashAlgorithm);
	fn update(&mut self, chunk: &[u8]);
	fn finalize(&mut self);
	fn digest(&self) -> &[u8];
}

/// Production engine backed by the RustCrypto digest implementations.
pub struct CryptoEngine {
	digest: Box<dyn DynDigest>,
	output: Vec<u8>,
}

impl CryptoEngine {
	pub fn new() -> Self {
		Self {
			digest: Box::new(sha2::Sha256::new()),
			output: Vec::new(),
		}
	}
}

impl Default for CryptoEngine {
	fn default() -> Self {
		Self::new()
	}
}

impl HashEngine for CryptoEngine {
	fn init(&mut self, algorithm: HashAlgorithm) {
		self.digest = match algorithm {
			HashAlgorithm::Sha1 => Box::new(sha1::Sha1::new()),
			HashAlgorithm::Sha256 => {
				Box::new(sha2::Sha256::new())
			}
			HashAlgorithm::Sha512 => {
				Box::new(sha2::Sha512::new())
			}
		};
		self.output.clear();
	}

	fn update(&mut self, chunk: &[u8]) {
		self.digest.update(chunk);
	}

	fn finalize(&mut self) {
		self.output = self.digest.finalize_reset().to_vec();
	}

	fn digest(&self) -> &[u8] {
		&self.output
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use hex_literal::hex;

	fn digest_of(
		algorithm: HashAlgorithm,
		data: &[u8],
		chunk_len: usize,
	) -> Vec<u8> {
		let mut engine = CryptoEngine::new();
		engine.init(algorithm);
		if chunk_len == 0 {
			if !data.is_empty() {
				engine.update(data);
			}
		} else {
			for chunk in data.chunks(chunk_len) {
				engine.update(chunk);
			}
		}
		engine.finalize();
		engine.digest().to_vec()
	}

	#[test]
	fn empty_message_digests_match_reference() {
		assert_eq!(
			digest_of(HashAlgorithm::Sha1, b"", 0),
			hex!("da39a3ee5e6b4b0d3255bfef95601890afd80709")
		);
		assert_eq!(
			digest_of(HashAlgorithm::Sha256, b"", 0),
			hex!("e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855")
		);
		assert_eq!(
			digest_of(HashAlgorithm::Sha512, b"", 0),
			hex!("cf83e1357eefb8bdf1542850d66d8007d620e4050b5715dc83f4a921d36ce9ce47d0d13c5d85f2b0ff8318d2877eec2f63b931bd47417a81a538327af927da3e")
		);
	}

	#[test]
	fn chunk_partition_does_not_change_digest() {
		let data = b"The quick brown fox jumps over the lazy dog";
		for algorithm in [
			HashAlgorithm::Sha1,
			HashAlgorithm::Sha256,
			HashAlgorithm::Sha512,
		] {
			let whole = digest_of(algorithm, data, 0);
			assert_eq!(digest_of(algorithm, data, 1), whole);
			assert_eq!(digest_of(algorithm, data, 4), whole);
			assert_eq!(digest_of(algorithm, data, 7), whole);
		}
	}

	#[test]
	fn init_resets_previous_session() {
		let mut engine = CryptoEngine::new();
		engine.init(HashAlgorithm::Sha256);
		engine.update(b"stale data");
		engine.init(HashAlgorithm::Sha256);
		engine.finalize();
		assert_eq!(
			engine.digest(),
			hex!("e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855")
		);
	}

	#[test]
	fn digest_sizes_match_algorithms() {
		assert_eq!(HashAlgorithm::Sha1.digest_size(), 20);
		assert_eq!(HashAlgorithm::Sha256.digest_size(), 32);
		assert_eq!(HashAlgorithm::Sha512.digest_size(), 64);
	}

	#[test]
	fn digest_buf_prefix_is_bounds_safe() {
		let buf = DigestBuf::from_hex("aabbcc").unwrap();
		assert_eq!(buf.len(), 3);
		assert_eq!(buf.prefix(2), &[0xaa, 0xbb]);
		assert_eq!(buf.prefix(64), &[0xaa, 0xbb, 0xcc]);
	}
}
