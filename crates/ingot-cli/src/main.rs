// Copyright 2026 James Casey
// SPDX-License-Identifier: Apache-2.0

//! Ingot front-end command-line interface.
//!
//! This is the main entry point for the `ingot` command. The two subcommands
//! mirror the two front-end stages: `lex` prints the token line for a source
//! file, and `parse` reads a token line back and prints the AST (or the
//! parse error, which is ordinary output rather than a process failure, so
//! golden-file harnesses can diff it).

use camino::Utf8PathBuf;
use clap::{Parser, Subcommand};
use miette::Result;

mod commands;

/// Ingot: a small statically-typed imperative language
#[derive(Debug, Parser)]
#[command(name = "ingot")]
#[command(version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Tokenize a source file and print the token line
    Lex {
        /// Source file to tokenize
        file: Utf8PathBuf,
    },

    /// Parse a token line and print the AST
    Parse {
        /// File whose first line is a token line in `ingot lex` format
        file: Utf8PathBuf,
    },
}

fn main() -> Result<()> {
    // Initialize tracing only if RUST_LOG is explicitly set, so ordinary runs
    // keep stdout/stderr clean for golden-file diffing.
    if std::env::var("RUST_LOG").is_ok() {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
            )
            .try_init();
    }

    // Install miette's fancy error handler
    miette::set_hook(Box::new(|_| {
        Box::new(
            miette::MietteHandlerOpts::new()
                .terminal_links(true)
                .unicode(true)
                .context_lines(3)
                .build(),
        )
    }))?;

    let cli = Cli::parse();

    let result = match cli.command {
        Command::Lex { file } => commands::lex::run(&file),
        Command::Parse { file } => commands::parse::run(&file),
    };

    match result {
        Ok(()) => Ok(()),
        Err(error) => {
            eprintln!("{error:?}");
            std::process::exit(1);
        }
    }
}
