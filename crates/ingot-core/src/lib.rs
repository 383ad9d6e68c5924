// Copyright 2026 James Casey
// SPDX-License-Identifier: Apache-2.0

//! Ingot compiler core.
//!
//! This crate contains the front-end of the Ingot language:
//! - Lexical analysis (tokenization)
//! - Parsing (AST construction)
//!
//! Both stages produce deterministic, stable textual output so that
//! downstream tooling and golden-file test harnesses can diff results:
//! tokens print in the wire format read back by [`source_analysis::parse_token_line`],
//! and every AST node implements [`std::fmt::Display`] with a canonical form.
//!
//! Later stages (type checking, code generation) live elsewhere; this crate
//! ends at a well-formed [`ast::Program`].

pub mod ast;
pub mod source_analysis;

/// Re-export commonly used types.
pub mod prelude {
    pub use crate::ast::{Decl, Exp, FunctionDef, Place, Program, Stmt, StructDef, Type};
    pub use crate::source_analysis::{ParseError, Span, Token, TokenKind, lex, parse};
}
