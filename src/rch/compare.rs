// SPDX-License-Identifier: MIT OR Apache-2.0
// Project: rustchkhash
// File: compare.rs
// Author: Volker Schwaberow <volker@schwaberow.de>
// Copyright (c) 2023 Volker Schwaberow

/// Compare exactly `len` bytes of two buffers. This is a test oracle,
/// not a security boundary, so it short-circuits on the first
/// mismatch. Returns false instead of reading past a short slice.
pub fn bytes_equal(a: &[u8], b: &[u8], len: usize) -> bool {
	if a.len() < len || b.len() < len {
		return false;
	}
	for index in 0..len {
		if a[index] != b[index] {
			return false;
		}
	}
	true
}
