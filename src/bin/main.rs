// SPDX-License-Identifier: MIT OR Apache-2.0
// Project: rustchkhash
// File: main.rs
// Author: Volker Schwaberow <volker@schwaberow.de>
// Copyright (c) 2023 Volker Schwaberow

use rustchkhash::rch::app;

fn main() -> Result<(), Box<dyn std::error::Error>> {
	app::run()?;
	Ok(())
}
