// Copyright 2026 James Casey
// SPDX-License-Identifier: Apache-2.0

//! `ingot lex` — tokenize a source file.
//!
//! Prints the tokens separated by single spaces on one line, followed by a
//! newline. Lexical errors appear in-band as `Error(…)` tokens and the
//! command still exits 0; only argument and file problems are process
//! failures.

use camino::Utf8Path;
use ingot_core::source_analysis::{lex, render_token_line};
use miette::Result;

/// Lexes `file` and prints the token line to stdout.
pub fn run(file: &Utf8Path) -> Result<()> {
    let source = super::read_input(file)?;
    let tokens = lex(&source);
    tracing::debug!(tokens = tokens.len(), "lexed '{file}'");
    println!("{}", render_token_line(&tokens));
    Ok(())
}
