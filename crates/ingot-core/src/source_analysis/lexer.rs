// Copyright 2026 James Casey
// SPDX-License-Identifier: Apache-2.0

//! Lexical analysis for Ingot source code.
//!
//! This module converts source text into a stream of [`Token`]s. The lexer is
//! hand-written for maximum control over maximal munch and error recovery.
//!
//! # Design Principles
//!
//! - **Error recovery**: never fail on malformed input; emit [`TokenKind::Error`]
//! - **Maximal munch**: identifier and number scans are greedy, and two-character
//!   operators are tried before their one-character prefixes
//! - **Precise spans**: every token carries its exact source location
//!
//! An unterminated comment is the one fatal case: it produces a final `Error`
//! token covering the rest of the input and ends the stream.
//!
//! # Example
//!
//! ```
//! use ingot_core::source_analysis::{lex, TokenKind};
//!
//! let tokens = lex("a<=b");
//! assert_eq!(tokens.len(), 3); // a, <=, b
//! assert_eq!(*tokens[1].kind(), TokenKind::Lte);
//! ```

use super::{Span, Token, TokenKind};

/// Two-character operators, longest-match first.
const TWO_CHAR_OPERATORS: &[(&str, TokenKind)] = &[
    ("!=", TokenKind::NotEq),
    ("<=", TokenKind::Lte),
    (">=", TokenKind::Gte),
    ("->", TokenKind::Arrow),
    ("==", TokenKind::Equal),
];

/// A lexer that tokenizes Ingot source code.
///
/// Implements [`Iterator`]; the stream ends at end of input or after the
/// `Error` token produced by an unterminated comment.
pub struct Lexer<'src> {
    /// The source text being lexed.
    source: &'src str,
    /// Current byte position in source.
    pos: usize,
    /// Set once an unterminated comment has been reported.
    done: bool,
}

impl<'src> Lexer<'src> {
    /// Creates a new lexer for the given source text.
    #[must_use]
    pub fn new(source: &'src str) -> Self {
        Self {
            source,
            pos: 0,
            done: false,
        }
    }

    /// Returns the unlexed remainder of the source.
    fn rest(&self) -> &'src str {
        &self.source[self.pos..]
    }

    /// Peeks at the next character without consuming it.
    fn peek_char(&self) -> Option<char> {
        self.rest().chars().next()
    }

    /// Consumes the next character and returns it.
    fn advance(&mut self) -> Option<char> {
        let c = self.peek_char()?;
        self.pos += c.len_utf8();
        Some(c)
    }

    /// Consumes characters while the predicate is true.
    fn advance_while(&mut self, predicate: impl Fn(char) -> bool) {
        while self.peek_char().is_some_and(&predicate) {
            self.advance();
        }
    }

    /// Builds a token spanning from `start` to the current position.
    fn token_from(&self, start: usize, kind: TokenKind) -> Token {
        Token::new(kind, Span::from(start..self.pos))
    }

    /// Builds an `Error` token spanning from `start` to the current position.
    fn error_from(&self, start: usize) -> Token {
        let text = &self.source[start..self.pos];
        self.token_from(start, TokenKind::Error(text.into()))
    }

    /// Skips whitespace and comments.
    ///
    /// Returns an `Error` token when a comment reaches end of input without
    /// its terminator; that token is the last one the lexer produces.
    fn skip_trivia(&mut self) -> Option<Token> {
        loop {
            match self.peek_char() {
                Some(c) if is_space(c) => {
                    self.advance_while(is_space);
                }
                Some('/') if self.rest().starts_with("//") => {
                    let start = self.pos;
                    self.advance_while(|c| c != '\n');
                    if self.advance().is_none() {
                        // Line comment ran into end of input with no newline.
                        self.done = true;
                        return Some(self.error_from(start));
                    }
                }
                Some('/') if self.rest().starts_with("/*") => {
                    let start = self.pos;
                    self.advance();
                    self.advance();
                    loop {
                        if self.rest().starts_with("*/") {
                            self.advance();
                            self.advance();
                            break;
                        }
                        if self.advance().is_none() {
                            self.done = true;
                            return Some(self.error_from(start));
                        }
                    }
                }
                _ => return None,
            }
        }
    }

    /// Lexes the next token, assuming trivia has been skipped.
    fn munch(&mut self, c: char) -> Token {
        let start = self.pos;

        // Identifier or keyword: [A-Za-z][A-Za-z0-9_]*
        if c.is_ascii_alphabetic() {
            self.advance_while(|c| c.is_ascii_alphanumeric() || c == '_');
            let text = &self.source[start..self.pos];
            let kind =
                TokenKind::keyword(text).unwrap_or_else(|| TokenKind::Id(text.into()));
            return self.token_from(start, kind);
        }

        // Number: [0-9]+ (range checked by the parser, not here)
        if c.is_ascii_digit() {
            self.advance_while(|c| c.is_ascii_digit());
            let text = &self.source[start..self.pos];
            return self.token_from(start, TokenKind::Num(text.into()));
        }

        for (pattern, kind) in TWO_CHAR_OPERATORS {
            if self.rest().starts_with(pattern) {
                self.advance();
                self.advance();
                return self.token_from(start, kind.clone());
            }
        }

        if let Some(kind) = single_char_kind(c) {
            self.advance();
            return self.token_from(start, kind);
        }

        // Nothing matched: absorb one garbage run into a single error token.
        // The run always advances at least one character and stops exactly at
        // the next position that could start a valid token, so lexing cannot
        // loop and cannot split one garbage run across several tokens.
        self.advance();
        self.advance_while(|c| !starts_token(c));
        self.error_from(start)
    }

    /// Lexes the next token, or `None` at end of input.
    fn next_token(&mut self) -> Option<Token> {
        if self.done {
            return None;
        }
        if let Some(error) = self.skip_trivia() {
            return Some(error);
        }
        let c = self.peek_char()?;
        Some(self.munch(c))
    }
}

impl Iterator for Lexer<'_> {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        self.next_token()
    }
}

impl std::fmt::Debug for Lexer<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Lexer")
            .field("pos", &self.pos)
            .field("remaining", &self.rest())
            .finish()
    }
}

/// Tokenizes an entire source string.
#[must_use]
pub fn lex(source: &str) -> Vec<Token> {
    Lexer::new(source).collect()
}

/// Whitespace per C `isspace`: space, `\t`, `\n`, `\v`, `\f`, `\r`.
fn is_space(c: char) -> bool {
    c.is_ascii_whitespace() || c == '\x0B'
}

/// Returns the kind for a single-character punctuation or operator token.
fn single_char_kind(c: char) -> Option<TokenKind> {
    let kind = match c {
        ':' => TokenKind::Colon,
        ';' => TokenKind::Semicolon,
        ',' => TokenKind::Comma,
        '&' => TokenKind::Ampersand,
        '+' => TokenKind::Plus,
        '-' => TokenKind::Dash,
        '*' => TokenKind::Star,
        '/' => TokenKind::Slash,
        '<' => TokenKind::Lt,
        '>' => TokenKind::Gt,
        '.' => TokenKind::Dot,
        '=' => TokenKind::Gets,
        '(' => TokenKind::OpenParen,
        ')' => TokenKind::CloseParen,
        '[' => TokenKind::OpenBracket,
        ']' => TokenKind::CloseBracket,
        '{' => TokenKind::OpenBrace,
        '}' => TokenKind::CloseBrace,
        '?' => TokenKind::QuestionMark,
        _ => return None,
    };
    Some(kind)
}

/// Returns `true` if `c` could start a valid token.
///
/// This bounds garbage absorption: an error run ends right before the next
/// alphanumeric character, operator start (`!` counts, via `!=`), or comment
/// start (`/` is already an operator start).
fn starts_token(c: char) -> bool {
    c.is_ascii_alphanumeric()
        || matches!(
            c,
            ':' | ';'
                | ','
                | '&'
                | '+'
                | '-'
                | '*'
                | '/'
                | '<'
                | '>'
                | '.'
                | '='
                | '('
                | ')'
                | '['
                | ']'
                | '{'
                | '}'
                | '?'
                | '!'
        )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source_analysis::render_token_line;

    fn kinds(source: &str) -> Vec<TokenKind> {
        lex(source).into_iter().map(Token::into_kind).collect()
    }

    #[test]
    fn empty_and_blank_input() {
        assert!(lex("").is_empty());
        assert!(lex("  \t\n  ").is_empty());
        assert!(lex("// just a comment\n").is_empty());
        assert!(lex("/* just a comment */").is_empty());
    }

    #[test]
    fn operators_munch_maximally() {
        assert_eq!(
            render_token_line(&lex("a<=b!=c")),
            "Id(a) Lte Id(b) NotEq Id(c)"
        );
        assert_eq!(
            kinds("< <= > >= = == - -> !="),
            vec![
                TokenKind::Lt,
                TokenKind::Lte,
                TokenKind::Gt,
                TokenKind::Gte,
                TokenKind::Gets,
                TokenKind::Equal,
                TokenKind::Dash,
                TokenKind::Arrow,
                TokenKind::NotEq,
            ]
        );
    }

    #[test]
    fn keywords_and_identifiers() {
        assert_eq!(
            kinds("fn main if iff x_1 While while"),
            vec![
                TokenKind::Fn,
                TokenKind::Id("main".into()),
                TokenKind::If,
                TokenKind::Id("iff".into()),
                TokenKind::Id("x_1".into()),
                TokenKind::Id("While".into()),
                TokenKind::While,
            ]
        );
    }

    #[test]
    fn numbers_keep_their_lexeme() {
        assert_eq!(
            kinds("0 007 99999999999999999999"),
            vec![
                TokenKind::Num("0".into()),
                TokenKind::Num("007".into()),
                TokenKind::Num("99999999999999999999".into()),
            ]
        );
    }

    #[test]
    fn number_then_identifier_split() {
        // Maximal munch: digits stop at the first non-digit.
        assert_eq!(
            kinds("12abc"),
            vec![TokenKind::Num("12".into()), TokenKind::Id("abc".into())]
        );
    }

    #[test]
    fn punctuation_table() {
        assert_eq!(
            kinds(": ; , & + * / . ( ) [ ] { } ?"),
            vec![
                TokenKind::Colon,
                TokenKind::Semicolon,
                TokenKind::Comma,
                TokenKind::Ampersand,
                TokenKind::Plus,
                TokenKind::Star,
                TokenKind::Slash,
                TokenKind::Dot,
                TokenKind::OpenParen,
                TokenKind::CloseParen,
                TokenKind::OpenBracket,
                TokenKind::CloseBracket,
                TokenKind::OpenBrace,
                TokenKind::CloseBrace,
                TokenKind::QuestionMark,
            ]
        );
    }

    #[test]
    fn comments_are_skipped() {
        assert_eq!(
            kinds("x // trailing\ny /* inline */ z"),
            vec![
                TokenKind::Id("x".into()),
                TokenKind::Id("y".into()),
                TokenKind::Id("z".into()),
            ]
        );
        // Block comments are not nested.
        assert_eq!(
            kinds("/* a /* b */ c"),
            vec![TokenKind::Id("c".into())]
        );
    }

    #[test]
    fn unterminated_block_comment_ends_lexing() {
        assert_eq!(
            kinds("x /* oops"),
            vec![
                TokenKind::Id("x".into()),
                TokenKind::Error("/* oops".into()),
            ]
        );
        assert_eq!(render_token_line(&lex("x /* oops")), "Id(x) Error(/* oops)");
    }

    #[test]
    fn unterminated_line_comment_ends_lexing() {
        assert_eq!(
            kinds("x // oops"),
            vec![
                TokenKind::Id("x".into()),
                TokenKind::Error("// oops".into()),
            ]
        );
        // A newline terminates the comment silently, newline included.
        assert_eq!(kinds("// fine\nx"), vec![TokenKind::Id("x".into())]);
    }

    #[test]
    fn garbage_becomes_one_error_token() {
        assert_eq!(
            kinds("x @#$ y"),
            vec![
                TokenKind::Id("x".into()),
                TokenKind::Error("@#$ ".into()),
                TokenKind::Id("y".into()),
            ]
        );
    }

    #[test]
    fn error_run_stops_at_token_start() {
        // '!' starts '!=' so it ends the garbage run.
        assert_eq!(
            kinds("@@!="),
            vec![TokenKind::Error("@@".into()), TokenKind::NotEq]
        );
        // A lone '!' is itself an error token.
        assert_eq!(
            kinds("!!"),
            vec![
                TokenKind::Error("!".into()),
                TokenKind::Error("!".into()),
            ]
        );
    }

    #[test]
    fn error_lexeme_may_end_with_newline() {
        // The newline is not a token start, so it is absorbed.
        assert_eq!(
            kinds("@\n;"),
            vec![TokenKind::Error("@\n".into()), TokenKind::Semicolon]
        );
        assert_eq!(render_token_line(&lex("@\n;")), "Error(@\n\n) Semicolon");
    }

    #[test]
    fn spans_cover_lexemes() {
        let source = "fn  main(x: int)";
        for token in lex(source) {
            let text = &source[token.span().as_range()];
            match token.kind() {
                TokenKind::Id(s) => assert_eq!(s, text),
                TokenKind::Fn => assert_eq!(text, "fn"),
                _ => assert!(!text.is_empty()),
            }
        }
    }

    #[test]
    fn slash_alone_is_division() {
        assert_eq!(
            kinds("a / b"),
            vec![
                TokenKind::Id("a".into()),
                TokenKind::Slash,
                TokenKind::Id("b".into()),
            ]
        );
    }
}
