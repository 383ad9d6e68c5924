// Copyright 2026 James Casey
// SPDX-License-Identifier: Apache-2.0

//! Statement parsing.
//!
//! A statement either starts with a keyword (`if`, `while`, `break`,
//! `continue`, `return`) or is an expression followed by `=` or `;`. In the
//! expression case the parser discriminates structurally after the fact:
//! an assignment target must have parsed as `Val(place)`, and a standalone
//! expression must have parsed as `Call(funcall)`. Anything else is rejected
//! with the index of the expression's first token.

use crate::ast::{Exp, Stmt};
use crate::source_analysis::{ParseError, TokenKind};

use super::Parser;

impl Parser {
    /// `stmt ::= 'if' … | 'while' … | 'break' ';' | 'continue' ';'
    ///         | 'return' exp ';' | exp '=' exp ';' | exp ';'`
    pub(super) fn parse_stmt(&mut self) -> Result<Stmt, ParseError> {
        match self.peek()? {
            TokenKind::If => self.parse_if_stmt(),
            TokenKind::While => self.parse_while_stmt(),
            TokenKind::Return => self.parse_return_stmt(),
            TokenKind::Break => {
                self.bump();
                self.consume(&TokenKind::Semicolon)?;
                Ok(Stmt::Break)
            }
            TokenKind::Continue => {
                self.bump();
                self.consume(&TokenKind::Semicolon)?;
                Ok(Stmt::Continue)
            }
            _ => self.parse_exp_stmt(),
        }
    }

    /// `'if' exp block ('else' block)?`
    ///
    /// With no `else`, the false branch is an empty list.
    fn parse_if_stmt(&mut self) -> Result<Stmt, ParseError> {
        self.consume(&TokenKind::If)?;
        let guard = self.parse_exp()?;
        let tt = self.parse_block()?;
        let ff = if self.check(&TokenKind::Else) {
            self.bump();
            self.parse_block()?
        } else {
            Vec::new()
        };
        Ok(Stmt::If { guard, tt, ff })
    }

    /// `'while' exp block`
    fn parse_while_stmt(&mut self) -> Result<Stmt, ParseError> {
        self.consume(&TokenKind::While)?;
        let guard = self.parse_exp()?;
        let body = self.parse_block()?;
        Ok(Stmt::While { guard, body })
    }

    /// `'return' exp ';'`
    fn parse_return_stmt(&mut self) -> Result<Stmt, ParseError> {
        self.consume(&TokenKind::Return)?;
        let exp = self.parse_exp()?;
        self.consume(&TokenKind::Semicolon)?;
        Ok(Stmt::Return(exp))
    }

    /// `block ::= '{' stmt* '}'`
    fn parse_block(&mut self) -> Result<Vec<Stmt>, ParseError> {
        self.consume(&TokenKind::OpenBrace)?;
        let mut stmts = Vec::new();
        while !self.check(&TokenKind::CloseBrace) && !self.is_at_end() {
            stmts.push(self.parse_stmt()?);
        }
        self.consume(&TokenKind::CloseBrace)?;
        Ok(stmts)
    }

    /// `exp '=' exp ';' | exp ';'`
    ///
    /// The trailing `;` is consumed before the shape of the left-hand side is
    /// checked, so a missing semicolon reports its own error first.
    fn parse_exp_stmt(&mut self) -> Result<Stmt, ParseError> {
        let start = self.position();
        let exp = self.parse_exp()?;

        if self.check(&TokenKind::Gets) {
            self.bump();
            let value = self.parse_exp()?;
            self.consume(&TokenKind::Semicolon)?;
            match exp {
                Exp::Val(place) => Ok(Stmt::Assign(*place, value)),
                _ => Err(ParseError::AssignTargetNotPlace { index: start }),
            }
        } else {
            self.consume(&TokenKind::Semicolon)?;
            match exp {
                Exp::Call(call) => Ok(Stmt::Call(call)),
                _ => Err(ParseError::StatementNotCall { index: start }),
            }
        }
    }
}
