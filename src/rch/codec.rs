// SPDX-License-Identifier: MIT OR Apache-2.0
// Project: rustchkhash
// File: codec.rs
// Author: Volker Schwaberow <volker@schwaberow.de>
// Copyright (c) 2023 Volker Schwaberow

//! Hex and ASCII decoding for the test-vector corpus. The corpus is a
//! compile-time-fixed, trusted input, so every decoding failure is a
//! corpus integrity error the caller must treat as fatal.

use std::borrow::Cow;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CodecErrorKind {
	InvalidCharacter,
	OddLength,
	Overflow,
}

#[derive(Debug)]
pub struct CodecError {
	kind: CodecErrorKind,
	message: Cow<'static, str>,
}

impl CodecError {
	pub fn new(
		kind: CodecErrorKind,
		message: impl Into<Cow<'static, str>>,
	) -> Self {
		Self {
			kind,
			message: message.into(),
		}
	}

	pub fn kind(&self) -> CodecErrorKind {
		self.kind
	}

	pub fn message(&self) -> &str {
		self.message.as_ref()
	}
}

impl fmt::Display for CodecError {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}", self.message)
	}
}

impl std::error::Error for CodecError {}

fn nibble(c: u8) -> Option<u8> {
	match c {
		b'0'..=b'9' => Some(c - b'0'),
		b'A'..=b'F' => Some(c - b'A' + 10),
		b'a'..=b'f' => Some(c - b'a' + 10),
		_ => None,
	}
}

/// Decode a hex string into `out`, high nibble first. An empty string
/// decodes to zero bytes. Returns the number of bytes written.
pub fn decode_hex_into(
	input: &str,
	out: &mut [u8],
) -> Result<usize, CodecError> {
	let bytes = input.as_bytes();
	if bytes.len() % 2 != 0 {
		return Err(CodecError::new(
			CodecErrorKind::OddLength,
			format!(
				"hex string has odd length {}",
				bytes.len()
			),
		));
	}
	let decoded = bytes.len() / 2;
	if decoded > out.len() {
		return Err(CodecError::new(
			CodecErrorKind::Overflow,
			format!(
				"decoded length {} exceeds buffer capacity {}",
				decoded,
				out.len()
			),
		));
	}
	for (offset, pair) in bytes.chunks_exact(2).enumerate() {
		let high = nibble(pair[0]).ok_or_else(|| {
			CodecError::new(
				CodecErrorKind::InvalidCharacter,
				format!(
					"invalid hex character `{}` at offset {}",
					pair[0] as char,
					offset * 2
				),
			)
		})?;
		let low = nibble(pair[1]).ok_or_else(|| {
			CodecError::new(
				CodecErrorKind::InvalidCharacter,
				format!(
					"invalid hex character `{}` at offset {}",
					pair[1] as char,
					offset * 2 + 1
				),
			)
		})?;
		out[offset] = (high << 4) | low;
	}
	Ok(decoded)
}

/// Decode a hex string into a freshly allocated buffer.
pub fn decode_hex(input: &str) -> Result<Vec<u8>, CodecError> {
	let mut out = vec![0u8; input.len() / 2];
	let written = decode_hex_into(input, &mut out)?;
	out.truncate(written);
	Ok(out)
}

/// Copy a plain (non-hex) string into `out`, one byte per character.
/// General corpus utility, not used on the hash-vector path.
pub fn decode_ascii_into(
	input: &str,
	out: &mut [u8],
) -> Result<usize, CodecError> {
	let bytes = input.as_bytes();
	if bytes.len() > out.len() {
		return Err(CodecError::new(
			CodecErrorKind::Overflow,
			format!(
				"string of {} bytes exceeds buffer capacity {}",
				bytes.len(),
				out.len()
			),
		));
	}
	out[..bytes.len()].copy_from_slice(bytes);
	Ok(bytes.len())
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn decode_empty_string_yields_zero_bytes() {
		let decoded = decode_hex("").unwrap();
		assert!(decoded.is_empty());

		let mut out = [0u8; 4];
		assert_eq!(decode_hex_into("", &mut out).unwrap(), 0);
	}

	#[test]
	fn decode_assembles_high_nibble_first() {
		assert_eq!(decode_hex("0a1b").unwrap(), vec![0x0a, 0x1b]);
		assert_eq!(decode_hex("F0").unwrap(), vec![0xf0]);
	}

	#[test]
	fn decode_is_case_insensitive() {
		let lower = decode_hex("ab").unwrap();
		assert_eq!(lower, decode_hex("aB").unwrap());
		assert_eq!(lower, decode_hex("Ab").unwrap());
		assert_eq!(lower, decode_hex("AB").unwrap());
	}

	#[test]
	fn decode_round_trips_encoded_bytes() {
		let buffers: [&[u8]; 4] = [
			b"",
			&[0x00],
			&[0xde, 0xad, 0xbe, 0xef],
			&[0x00, 0x7f, 0x80, 0xff, 0x10],
		];
		for bytes in buffers {
			assert_eq!(
				decode_hex(&hex::encode(bytes)).unwrap(),
				bytes
			);
			assert_eq!(
				decode_hex(&hex::encode_upper(bytes)).unwrap(),
				bytes
			);
		}
	}

	#[test]
	fn decode_rejects_non_hex_characters() {
		let err = decode_hex("0g").unwrap_err();
		assert_eq!(err.kind(), CodecErrorKind::InvalidCharacter);
		let err = decode_hex("zz").unwrap_err();
		assert_eq!(err.kind(), CodecErrorKind::InvalidCharacter);
	}

	#[test]
	fn decode_rejects_odd_length() {
		let err = decode_hex("abc").unwrap_err();
		assert_eq!(err.kind(), CodecErrorKind::OddLength);
	}

	#[test]
	fn decode_rejects_buffer_overflow() {
		let mut out = [0u8; 2];
		let err =
			decode_hex_into("aabbcc", &mut out).unwrap_err();
		assert_eq!(err.kind(), CodecErrorKind::Overflow);
	}

	#[test]
	fn ascii_passthrough_copies_bytes() {
		let mut out = [0u8; 8];
		let written =
			decode_ascii_into("abc", &mut out).unwrap();
		assert_eq!(written, 3);
		assert_eq!(&out[..3], b"abc");
	}

	#[test]
	fn ascii_passthrough_rejects_overflow() {
		let mut out = [0u8; 2];
		let err =
			decode_ascii_into("abc", &mut out).unwrap_err();
		assert_eq!(err.kind(), CodecErrorKind::Overflow);
	}
}
