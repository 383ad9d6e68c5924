// Copyright 2026 James Casey
// SPDX-License-Identifier: Apache-2.0

//! Expression parsing.
//!
//! One method per precedence level, tightest-binding last:
//!
//! ```text
//! exp        ::= exp1 ('?' exp ':' exp1)*
//! exp1       ::= exp2 (('and'|'or') exp2)*                      right-assoc
//! exp2       ::= exp3 (('=='|'!='|'<'|'<='|'>'|'>=') exp3)*     left-assoc
//! exp3       ::= exp4 (('+'|'-') exp4)*                         left-assoc
//! exp4       ::= exp5 (('*'|'/') exp5)*                         left-assoc
//! exp5       ::= ('-'|'not')* exp6
//! exp6       ::= exp7 call_or_access*
//! call_or_access ::= '[' exp ']' | '.' (Id | '*') | '(' LIST(exp) ')'
//! exp7       ::= Id | Num | 'nil' | 'new' type | '[' type ';' exp ']' | '(' exp ')'
//! ```
//!
//! Postfix accesses produce [`Place`]s, each immediately re-wrapped as
//! `Val(place)` so the chain can keep going; calls wrap into `Call(funcall)`.
//! Statement parsing later unwraps those outer layers again, which is what
//! makes the place / call distinctions checkable at all.

use crate::ast::{BinaryOp, Exp, FunCall, Place, UnaryOp};
use crate::source_analysis::{ParseError, TokenKind};

use super::Parser;

/// Parses a `Num` lexeme as a signed 64-bit integer.
///
/// The lexer only produces digit runs, so the one failure mode from source
/// text is overflow past `i64::MAX`. Tokens read back from a wire-format line
/// can carry arbitrary lexemes; those fail here too.
pub(super) fn parse_i64(lexeme: &str) -> Option<i64> {
    lexeme.parse().ok()
}

/// Maps a comparison token to its operator.
fn comparison_op(kind: &TokenKind) -> Option<BinaryOp> {
    let op = match kind {
        TokenKind::Equal => BinaryOp::Eq,
        TokenKind::NotEq => BinaryOp::NotEq,
        TokenKind::Lt => BinaryOp::Lt,
        TokenKind::Lte => BinaryOp::Lte,
        TokenKind::Gt => BinaryOp::Gt,
        TokenKind::Gte => BinaryOp::Gte,
        _ => return None,
    };
    Some(op)
}

/// Maps an additive token to its operator.
fn additive_op(kind: &TokenKind) -> Option<BinaryOp> {
    match kind {
        TokenKind::Plus => Some(BinaryOp::Add),
        TokenKind::Dash => Some(BinaryOp::Sub),
        _ => None,
    }
}

/// Maps a multiplicative token to its operator.
fn multiplicative_op(kind: &TokenKind) -> Option<BinaryOp> {
    match kind {
        TokenKind::Star => Some(BinaryOp::Mul),
        TokenKind::Slash => Some(BinaryOp::Div),
        _ => None,
    }
}

/// Builds a binary node.
fn binop(op: BinaryOp, left: Exp, right: Exp) -> Exp {
    Exp::BinOp {
        op,
        left: Box::new(left),
        right: Box::new(right),
    }
}

impl Parser {
    /// `exp ::= exp1 ('?' exp ':' exp1)*`
    ///
    /// The true arm recurses into the full `exp`, so nested conditionals in
    /// the middle position need no parentheses; the false arm sits at `exp1`
    /// and further `?` chains fold through this loop.
    pub(super) fn parse_exp(&mut self) -> Result<Exp, ParseError> {
        let mut left = self.parse_exp1()?;
        while self.check(&TokenKind::QuestionMark) {
            self.bump();
            let tt = self.parse_exp()?;
            self.consume(&TokenKind::Colon)?;
            let ff = self.parse_exp1()?;
            left = Exp::Select {
                guard: Box::new(left),
                tt: Box::new(tt),
                ff: Box::new(ff),
            };
        }
        Ok(left)
    }

    /// `exp1 ::= exp2 (('and'|'or') exp2)*`, right-associative: after one
    /// operator the entire remainder parses at this same level.
    fn parse_exp1(&mut self) -> Result<Exp, ParseError> {
        let left = self.parse_exp2()?;
        let op = match self.peek_kind() {
            Some(TokenKind::And) => BinaryOp::And,
            Some(TokenKind::Or) => BinaryOp::Or,
            _ => return Ok(left),
        };
        self.bump();
        let right = self.parse_exp1()?;
        Ok(binop(op, left, right))
    }

    /// `exp2 ::= exp3 (cmp exp3)*`, left-associative.
    fn parse_exp2(&mut self) -> Result<Exp, ParseError> {
        let mut left = self.parse_exp3()?;
        while let Some(op) = self.peek_kind().and_then(comparison_op) {
            self.bump();
            let right = self.parse_exp3()?;
            left = binop(op, left, right);
        }
        Ok(left)
    }

    /// `exp3 ::= exp4 (('+'|'-') exp4)*`, left-associative.
    fn parse_exp3(&mut self) -> Result<Exp, ParseError> {
        let mut left = self.parse_exp4()?;
        while let Some(op) = self.peek_kind().and_then(additive_op) {
            self.bump();
            let right = self.parse_exp4()?;
            left = binop(op, left, right);
        }
        Ok(left)
    }

    /// `exp4 ::= exp5 (('*'|'/') exp5)*`, left-associative.
    fn parse_exp4(&mut self) -> Result<Exp, ParseError> {
        let mut left = self.parse_exp5()?;
        while let Some(op) = self.peek_kind().and_then(multiplicative_op) {
            self.bump();
            let right = self.parse_exp5()?;
            left = binop(op, left, right);
        }
        Ok(left)
    }

    /// `exp5 ::= ('-'|'not')* exp6` — unary operators stack right to left.
    fn parse_exp5(&mut self) -> Result<Exp, ParseError> {
        let op = match self.peek_kind() {
            Some(TokenKind::Dash) => UnaryOp::Neg,
            Some(TokenKind::Not) => UnaryOp::Not,
            _ => return self.parse_exp6(),
        };
        self.bump();
        let exp = self.parse_exp5()?;
        Ok(Exp::UnOp {
            op,
            exp: Box::new(exp),
        })
    }

    /// `exp6 ::= exp7 call_or_access*` — postfix chains fold left to right.
    fn parse_exp6(&mut self) -> Result<Exp, ParseError> {
        let mut exp = self.parse_exp7()?;
        loop {
            match self.peek_kind() {
                Some(TokenKind::OpenBracket) => {
                    self.bump();
                    let index = self.parse_exp()?;
                    self.consume(&TokenKind::CloseBracket)?;
                    exp = Exp::val(Place::ArrayAccess {
                        array: Box::new(exp),
                        index: Box::new(index),
                    });
                }
                Some(TokenKind::Dot) => {
                    self.bump();
                    match self.peek()? {
                        TokenKind::Id(field) => {
                            let field = field.clone();
                            self.bump();
                            exp = Exp::val(Place::FieldAccess {
                                base: Box::new(exp),
                                field,
                            });
                        }
                        TokenKind::Star => {
                            self.bump();
                            exp = Exp::val(Place::Deref(Box::new(exp)));
                        }
                        _ => return Err(self.unexpected()),
                    }
                }
                Some(TokenKind::OpenParen) => {
                    self.bump();
                    let args = self.comma_separated(&TokenKind::CloseParen, Self::parse_exp)?;
                    self.consume(&TokenKind::CloseParen)?;
                    exp = Exp::Call(FunCall::new(exp, args));
                }
                _ => return Ok(exp),
            }
        }
    }

    /// `exp7 ::= Id | Num | 'nil' | 'new' type | '[' type ';' exp ']' | '(' exp ')'`
    fn parse_exp7(&mut self) -> Result<Exp, ParseError> {
        match self.peek()? {
            TokenKind::Id(name) => {
                let name = name.clone();
                self.bump();
                Ok(Exp::val(Place::Id(name)))
            }
            TokenKind::Num(lexeme) => {
                let lexeme = lexeme.clone();
                let index = self.position();
                self.bump();
                match parse_i64(&lexeme) {
                    Some(value) => Ok(Exp::Num(value)),
                    None => Err(ParseError::invalid_number(lexeme, index)),
                }
            }
            TokenKind::Nil => {
                self.bump();
                Ok(Exp::Nil)
            }
            TokenKind::New => {
                self.bump();
                Ok(Exp::NewSingle(self.parse_type()?))
            }
            TokenKind::OpenBracket => {
                self.bump();
                let typ = self.parse_type()?;
                self.consume(&TokenKind::Semicolon)?;
                let size = self.parse_exp()?;
                self.consume(&TokenKind::CloseBracket)?;
                Ok(Exp::NewArray {
                    typ,
                    size: Box::new(size),
                })
            }
            TokenKind::OpenParen => {
                self.bump();
                let exp = self.parse_exp()?;
                self.consume(&TokenKind::CloseParen)?;
                Ok(exp)
            }
            _ => Err(self.unexpected()),
        }
    }
}
