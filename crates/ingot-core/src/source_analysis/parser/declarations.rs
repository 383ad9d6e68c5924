// Copyright 2026 James Casey
// SPDX-License-Identifier: Apache-2.0

//! Top-level declaration and type parsing.
//!
//! This module contains the parsing methods for everything above statement
//! level: the program itself, struct definitions, extern declarations,
//! function definitions with their leading `let` lines, and the type grammar.

use crate::ast::{Decl, FunctionDef, Program, StructDef, Type};
use crate::source_analysis::{ParseError, TokenKind};

use super::Parser;

impl Parser {
    /// `program ::= (struct | extern | function)+`
    pub(super) fn parse_program(&mut self) -> Result<Program, ParseError> {
        // At least one top-level item is required.
        if self.is_at_end() {
            return Err(ParseError::UnexpectedEnd);
        }

        let mut program = Program::default();
        while !self.is_at_end() {
            match self.peek()? {
                TokenKind::Struct => program.structs.push(self.parse_struct_def()?),
                TokenKind::Extern => program.externs.push(self.parse_extern_def()?),
                TokenKind::Fn => program.functions.push(self.parse_function_def()?),
                _ => return Err(self.unexpected()),
            }
        }
        Ok(program)
    }

    /// `struct ::= 'struct' Id '{' LIST(decl) '}'`
    fn parse_struct_def(&mut self) -> Result<StructDef, ParseError> {
        self.consume(&TokenKind::Struct)?;
        let name = self.expect_id()?;
        self.consume(&TokenKind::OpenBrace)?;
        let fields = self.comma_separated(&TokenKind::CloseBrace, Self::parse_decl)?;
        self.consume(&TokenKind::CloseBrace)?;
        Ok(StructDef { name, fields })
    }

    /// `extern ::= 'extern' Id ':' funtype ';'`
    ///
    /// Externs are modelled as [`Decl`]s whose type is a function type.
    fn parse_extern_def(&mut self) -> Result<Decl, ParseError> {
        self.consume(&TokenKind::Extern)?;
        let name = self.expect_id()?;
        self.consume(&TokenKind::Colon)?;
        let typ = self.parse_funtype()?;
        self.consume(&TokenKind::Semicolon)?;
        Ok(Decl { name, typ })
    }

    /// `function ::= 'fn' Id '(' LIST(decl) ')' '->' type '{' let* stmt* '}'`
    fn parse_function_def(&mut self) -> Result<FunctionDef, ParseError> {
        self.consume(&TokenKind::Fn)?;
        let name = self.expect_id()?;

        self.consume(&TokenKind::OpenParen)?;
        let params = self.comma_separated(&TokenKind::CloseParen, Self::parse_decl)?;
        self.consume(&TokenKind::CloseParen)?;

        self.consume(&TokenKind::Arrow)?;
        let rettyp = self.parse_type()?;

        self.consume(&TokenKind::OpenBrace)?;

        // `let ::= 'let' LIST(decl) ';'` — all lets precede the first statement.
        let mut locals = Vec::new();
        while self.check(&TokenKind::Let) {
            self.bump();
            locals.extend(self.comma_separated(&TokenKind::Semicolon, Self::parse_decl)?);
            self.consume(&TokenKind::Semicolon)?;
        }

        let mut stmts = Vec::new();
        while !self.check(&TokenKind::CloseBrace) && !self.is_at_end() {
            stmts.push(self.parse_stmt()?);
        }
        self.consume(&TokenKind::CloseBrace)?;

        Ok(FunctionDef {
            name,
            params,
            rettyp,
            locals,
            stmts,
        })
    }

    /// `decl ::= Id ':' type`
    pub(super) fn parse_decl(&mut self) -> Result<Decl, ParseError> {
        let name = self.expect_id()?;
        self.consume(&TokenKind::Colon)?;
        let typ = self.parse_type()?;
        Ok(Decl { name, typ })
    }

    /// `type ::= 'int' | Id | '&' type | '[' type ']' | funtype`
    pub(super) fn parse_type(&mut self) -> Result<Type, ParseError> {
        match self.peek()? {
            TokenKind::Int => {
                self.bump();
                Ok(Type::Int)
            }
            TokenKind::Id(name) => {
                let name = name.clone();
                self.bump();
                Ok(Type::Struct(name))
            }
            TokenKind::Ampersand => {
                self.bump();
                Ok(Type::Ptr(Box::new(self.parse_type()?)))
            }
            TokenKind::OpenBracket => {
                self.bump();
                let inner = self.parse_type()?;
                self.consume(&TokenKind::CloseBracket)?;
                Ok(Type::Array(Box::new(inner)))
            }
            _ => self.parse_funtype(),
        }
    }

    /// `funtype ::= '(' LIST(type) ')' '->' type`
    fn parse_funtype(&mut self) -> Result<Type, ParseError> {
        self.consume(&TokenKind::OpenParen)?;
        let params = self.comma_separated(&TokenKind::CloseParen, Self::parse_type)?;
        self.consume(&TokenKind::CloseParen)?;
        self.consume(&TokenKind::Arrow)?;
        let ret = self.parse_type()?;
        Ok(Type::Fn {
            params,
            ret: Box::new(ret),
        })
    }
}
