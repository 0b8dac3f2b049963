// SPDX-License-Identifier: MIT OR Apache-2.0
// Project: rustchkhash
// File: lib.rs
// Author: Volker Schwaberow <volker@schwaberow.de>
// Copyright (c) 2023 Volker Schwaberow

pub mod rch {
	pub mod app;
	pub mod codec;
	pub mod compare;
	pub mod engine;
	pub mod report;
	pub mod runner;
	pub mod vectors;
}

#[cfg(test)]
mod tests {
	use crate::rch::codec::decode_hex;
	use crate::rch::engine::{
		CryptoEngine, HashAlgorithm, HashEngine,
	};
	use hex_literal::hex;

	fn one_shot(
		algorithm: HashAlgorithm,
		data: &[u8],
	) -> Vec<u8> {
		let mut engine = CryptoEngine::new();
		engine.init(algorithm);
		if !data.is_empty() {
			engine.update(data);
		}
		engine.finalize();
		engine.digest().to_vec()
	}

	#[test]
	fn test_sha1_empty() {
		assert_eq!(
			one_shot(HashAlgorithm::Sha1, b""),
			hex!("da39a3ee5e6b4b0d3255bfef95601890afd80709")
		);
	}

	#[test]
	fn test_sha1_single_zero_byte() {
		assert_eq!(
			one_shot(HashAlgorithm::Sha1, &[0x00]),
			hex!("5ba93c9db0cff93f52b521d7420e43f6eda2784f")
		);
	}

	#[test]
	fn test_sha256_empty() {
		assert_eq!(
			one_shot(HashAlgorithm::Sha256, b""),
			hex!("e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855")
		);
	}

	#[test]
	fn test_sha256_abc() {
		assert_eq!(
			one_shot(HashAlgorithm::Sha256, b"abc"),
			hex!("ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad")
		);
	}

	#[test]
	fn test_sha512_empty() {
		assert_eq!(
			one_shot(HashAlgorithm::Sha512, b""),
			hex!("cf83e1357eefb8bdf1542850d66d8007d620e4050b5715dc83f4a921d36ce9ce47d0d13c5d85f2b0ff8318d2877eec2f63b931bd47417a81a538327af927da3e")
		);
	}

	#[test]
	fn test_decode_matches_literal() {
		assert_eq!(
			decode_hex("616263").unwrap(),
			b"abc".to_vec()
		);
	}
}
