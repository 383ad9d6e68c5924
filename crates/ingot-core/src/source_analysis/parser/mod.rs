// Copyright 2026 James Casey
// SPDX-License-Identifier: Apache-2.0

//! Recursive descent parser for Ingot token streams.
//!
//! The parser consumes a token vector with one-token lookahead and builds the
//! [`Program`] AST, one method per grammar non-terminal. The first error
//! aborts parsing: there is no recovery and no partial AST.
//!
//! # Grammar
//!
//! ```text
//! program    ::= (struct | extern | function)+
//! struct     ::= 'struct' Id '{' LIST(decl) '}'
//! extern     ::= 'extern' Id ':' funtype ';'
//! function   ::= 'fn' Id '(' LIST(decl) ')' '->' type '{' let* stmt* '}'
//! let        ::= 'let' LIST(decl) ';'
//! decl       ::= Id ':' type
//! type       ::= 'int' | Id | '&' type | '[' type ']' | funtype
//! funtype    ::= '(' LIST(type) ')' '->' type
//! stmt       ::= 'if' exp block ('else' block)?
//!              | 'while' exp block
//!              | 'break' ';' | 'continue' ';' | 'return' exp ';'
//!              | exp '=' exp ';' | exp ';'
//! block      ::= '{' stmt* '}'
//! LIST(X)    ::= ε | X (',' X)*
//! ```
//!
//! # Expression precedence
//!
//! Each level delegates tighter-binding levels downward:
//!
//! | Level | Operators | Associativity |
//! |-------|--------------------------------|-------|
//! | exp   | `?:`                           | folds left; true arm recurses |
//! | exp1  | `and` `or`                     | right |
//! | exp2  | `==` `!=` `<` `<=` `>` `>=`    | left  |
//! | exp3  | `+` `-`                        | left  |
//! | exp4  | `*` `/`                        | left  |
//! | exp5  | unary `-` `not`                | stack |
//! | exp6  | postfix `[i]` `.f` `.*` `(…)`  | left  |
//! | exp7  | `Id` `Num` `nil` `new T` `[T; n]` `( exp )` | — |
//!
//! # Usage
//!
//! ```
//! use ingot_core::source_analysis::{lex, parse};
//!
//! let program = parse(lex("fn main() -> int { return 0; }")).unwrap();
//! assert_eq!(program.functions.len(), 1);
//! ```

use ecow::EcoString;

use crate::ast::Program;
use crate::source_analysis::{ParseError, Token, TokenKind};

mod declarations;
mod expressions;
mod statements;


/// Parses a token stream into a [`Program`].
///
/// This is the main entry point for parsing. Token indices in error messages
/// are 0-based positions in `tokens`.
///
/// # Errors
///
/// Returns the first [`ParseError`] encountered; no partial AST is produced.
pub fn parse(tokens: Vec<Token>) -> Result<Program, ParseError> {
    Parser::new(tokens).parse_program()
}

/// The parser state: a token vector and a cursor into it.
///
/// The cursor ranges over `[0, tokens.len()]`; parsing is complete when the
/// top-level loop exits with the cursor at the end.
pub(super) struct Parser {
    tokens: Vec<Token>,
    cursor: usize,
}

impl Parser {
    /// Creates a new parser over the given tokens.
    fn new(tokens: Vec<Token>) -> Self {
        Self { tokens, cursor: 0 }
    }

    // ========================================================================
    // Token management
    // ========================================================================

    /// Returns `true` when every token has been consumed.
    pub(super) fn is_at_end(&self) -> bool {
        self.cursor >= self.tokens.len()
    }

    /// Returns the current token's kind without consuming it, or `None` at
    /// end of input.
    pub(super) fn peek_kind(&self) -> Option<&TokenKind> {
        self.tokens.get(self.cursor).map(Token::kind)
    }

    /// Returns the current token's kind, or [`ParseError::UnexpectedEnd`].
    pub(super) fn peek(&self) -> Result<&TokenKind, ParseError> {
        self.peek_kind().ok_or(ParseError::UnexpectedEnd)
    }

    /// Returns the current token's 0-based position.
    pub(super) fn position(&self) -> usize {
        self.cursor
    }

    /// Consumes the current token. Callers check first; at end of input this
    /// is a no-op.
    pub(super) fn bump(&mut self) {
        if !self.is_at_end() {
            self.cursor += 1;
        }
    }

    /// Checks whether the current token has the same kind as `kind`,
    /// ignoring any lexeme payload.
    pub(super) fn check(&self, kind: &TokenKind) -> bool {
        self.peek_kind()
            .is_some_and(|k| std::mem::discriminant(k) == std::mem::discriminant(kind))
    }

    /// Checks whether the current token matches any of `kinds`.
    pub(super) fn check_any(&self, kinds: &[TokenKind]) -> bool {
        kinds.iter().any(|kind| self.check(kind))
    }

    /// Consumes the current token if it has the expected kind.
    ///
    /// # Errors
    ///
    /// [`ParseError::UnexpectedEnd`] at end of input, otherwise
    /// [`ParseError::UnexpectedToken`] at the current position.
    pub(super) fn consume(&mut self, kind: &TokenKind) -> Result<(), ParseError> {
        if self.is_at_end() {
            return Err(ParseError::UnexpectedEnd);
        }
        if self.check(kind) {
            self.bump();
            Ok(())
        } else {
            Err(self.unexpected())
        }
    }

    /// Consumes an `Id` token and returns its name.
    ///
    /// # Errors
    ///
    /// Same policy as [`Parser::consume`].
    pub(super) fn expect_id(&mut self) -> Result<EcoString, ParseError> {
        match self.peek()? {
            TokenKind::Id(name) => {
                let name = name.clone();
                self.bump();
                Ok(name)
            }
            _ => Err(self.unexpected()),
        }
    }

    /// Builds an "unexpected token" error at the current position.
    pub(super) fn unexpected(&self) -> ParseError {
        ParseError::unexpected_token(self.cursor)
    }

    /// Parses `LIST(X)`: a possibly-empty comma-separated list with no
    /// trailing comma, ended by `terminator` (which is not consumed).
    pub(super) fn comma_separated<T>(
        &mut self,
        terminator: &TokenKind,
        mut element: impl FnMut(&mut Self) -> Result<T, ParseError>,
    ) -> Result<Vec<T>, ParseError> {
        let mut items = Vec::new();
        if !self.check(terminator) {
            loop {
                items.push(element(self)?);
                if self.check(&TokenKind::Comma) {
                    self.bump();
                } else {
                    break;
                }
            }
        }
        Ok(items)
    }
}
