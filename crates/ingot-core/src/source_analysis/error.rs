// Copyright 2026 James Casey
// SPDX-License-Identifier: Apache-2.0

//! Error types for the Ingot parser.
//!
//! The lexer never fails (malformed input becomes in-band `Error` tokens),
//! so [`ParseError`] is the only error type the front-end produces. Its
//! `Display` output is the exact diagnostic line printed by the `parse`
//! executable, which golden-file test harnesses diff against; the wording
//! here is load-bearing and must not drift.

use ecow::EcoString;
use miette::Diagnostic;
use thiserror::Error;

/// A parse failure. The first error encountered aborts parsing; no partial
/// AST is produced.
///
/// Positions are 0-based token indices into the parser's input stream.
#[derive(Debug, Clone, PartialEq, Eq, Error, Diagnostic)]
pub enum ParseError {
    /// A token of the wrong kind appeared.
    #[error("parse error: unexpected token at token {index}")]
    UnexpectedToken {
        /// Position of the offending token.
        index: usize,
    },

    /// More tokens were required but the input was exhausted.
    #[error("parse error: unexpected end of token stream")]
    UnexpectedEnd,

    /// The left-hand side of an assignment was not a place expression.
    #[error("parse error: left-hand side of assignment must be a place, starting at token {index}")]
    AssignTargetNotPlace {
        /// Position of the first token of the left-hand side.
        index: usize,
    },

    /// A standalone expression statement was not a function call.
    #[error("parse error: standalone expressions must be function calls, starting at token {index}")]
    StatementNotCall {
        /// Position of the first token of the expression.
        index: usize,
    },

    /// A numeric literal does not fit in a signed 64-bit integer.
    #[error("parse error: invalid i64 number {lexeme} at token {index}")]
    InvalidNumber {
        /// The literal's lexeme, verbatim.
        lexeme: EcoString,
        /// Position of the `Num` token.
        index: usize,
    },
}

impl ParseError {
    /// Creates an "unexpected token" error at the given token index.
    #[must_use]
    pub fn unexpected_token(index: usize) -> Self {
        Self::UnexpectedToken { index }
    }

    /// Creates an "invalid i64 number" error for the given lexeme and index.
    #[must_use]
    pub fn invalid_number(lexeme: impl Into<EcoString>, index: usize) -> Self {
        Self::InvalidNumber {
            lexeme: lexeme.into(),
            index,
        }
    }
}
