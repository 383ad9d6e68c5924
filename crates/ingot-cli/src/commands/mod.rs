// Copyright 2026 James Casey
// SPDX-License-Identifier: Apache-2.0

//! Subcommand implementations for the `ingot` CLI.

pub mod lex;
pub mod parse;

use camino::Utf8Path;
use miette::{IntoDiagnostic, Result};

/// Reads a source file, with a diagnostic naming the path on failure.
pub(crate) fn read_input(file: &Utf8Path) -> Result<String> {
    std::fs::read_to_string(file.as_std_path())
        .into_diagnostic()
        .map_err(|e| miette::miette!("Failed to read '{file}': {e}"))
}
