// Copyright 2026 James Casey
// SPDX-License-Identifier: Apache-2.0

//! End-to-end tests for the `ingot` CLI.
//!
//! These drive the built binary the way a golden-file harness would: write a
//! fixture, run a subcommand, and diff the exact stdout. Parse errors are
//! ordinary stdout with exit 0; only file problems exit non-zero.

use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::path::PathBuf;
use std::process::Command;

/// Writes `contents` to a fresh temp file and returns its path (plus the
/// guard keeping the directory alive).
fn fixture(contents: &str) -> (tempfile::TempDir, PathBuf) {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("input");
    std::fs::write(&path, contents).unwrap();
    (dir, path)
}

fn ingot() -> Command {
    Command::cargo_bin("ingot").unwrap()
}

#[test]
fn lex_prints_token_line() {
    let (_dir, path) = fixture("a<=b!=c");
    ingot()
        .arg("lex")
        .arg(&path)
        .assert()
        .success()
        .stdout("Id(a) Lte Id(b) NotEq Id(c)\n");
}

#[test]
fn lex_reports_unterminated_comment_in_band() {
    let (_dir, path) = fixture("x /* oops");
    ingot()
        .arg("lex")
        .arg(&path)
        .assert()
        .success()
        .stdout("Id(x) Error(/* oops)\n");
}

#[test]
fn lex_of_empty_source_prints_empty_line() {
    let (_dir, path) = fixture("  // nothing here\n");
    ingot()
        .arg("lex")
        .arg(&path)
        .assert()
        .success()
        .stdout("\n");
}

#[test]
fn parse_prints_ast_line() {
    let (_dir, path) = fixture(
        "Fn Id(main) OpenParen CloseParen Arrow Int OpenBrace \
         Return Num(0) Semicolon CloseBrace\n",
    );
    ingot().arg("parse").arg(&path).assert().success().stdout(
        "Program { structs: {}, externs: {}, functions: {Function { name: \"main\", \
         prms: [], rettyp: Int, locals: {}, stmts: [Return(Num(0))] }} }\n",
    );
}

#[test]
fn parse_error_goes_to_stdout_with_exit_zero() {
    let (_dir, path) = fixture("Fn Id(f)\n");
    ingot()
        .arg("parse")
        .arg(&path)
        .assert()
        .success()
        .stdout("parse error: unexpected end of token stream\n");

    let (_dir, path) = fixture("Num(99999999999999999999)\n");
    ingot()
        .arg("parse")
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::starts_with("parse error: "));
}

#[test]
fn lex_output_feeds_parse() {
    let (_dir, source_path) = fixture(
        "struct S { next: &S }\n\
         extern print: (int) -> int;\n\
         fn main() -> int {\n\
           let p: &S;\n\
           p = new S;\n\
           print(p.next.f ? 1 : 0);\n\
           return 0;\n\
         }\n",
    );
    let output = ingot().arg("lex").arg(&source_path).output().unwrap();
    assert!(output.status.success());

    let (_dir2, line_path) = fixture(std::str::from_utf8(&output.stdout).unwrap());
    ingot()
        .arg("parse")
        .arg(&line_path)
        .assert()
        .success()
        .stdout(predicate::str::starts_with("Program { structs: {Struct { name: \"S\""));
}

#[test]
fn missing_file_fails_on_stderr() {
    let missing = PathBuf::from("definitely/not/here.ing");
    ingot()
        .arg("lex")
        .arg(&missing)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to read"));
    ingot()
        .arg("parse")
        .arg(&missing)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to read"));
}

#[test]
fn wrong_arguments_fail() {
    ingot().assert().failure();
    ingot().arg("lex").assert().failure();
}
