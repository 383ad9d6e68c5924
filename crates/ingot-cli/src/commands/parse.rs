// Copyright 2026 James Casey
// SPDX-License-Identifier: Apache-2.0

//! `ingot parse` — parse a token line into an AST.
//!
//! Reads the first line of the input file in `ingot lex` output format and
//! prints either the AST line or a single `parse error: …` line. Both are
//! ordinary output with exit code 0, so golden-file harnesses can diff error
//! cases the same way as successes; only argument and file problems are
//! process failures.

use camino::Utf8Path;
use ingot_core::source_analysis::{parse, parse_token_line};
use miette::Result;

/// Parses the token line in `file` and prints the result to stdout.
pub fn run(file: &Utf8Path) -> Result<()> {
    let input = super::read_input(file)?;
    let line = input.lines().next().unwrap_or("");
    let tokens = parse_token_line(line);
    tracing::debug!(tokens = tokens.len(), "read token line from '{file}'");

    match parse(tokens) {
        Ok(program) => println!("{program}"),
        Err(error) => println!("{error}"),
    }
    Ok(())
}
