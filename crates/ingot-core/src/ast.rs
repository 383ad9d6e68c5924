// Copyright 2026 James Casey
// SPDX-License-Identifier: Apache-2.0

//! Abstract Syntax Tree (AST) definitions for Ingot.
//!
//! The AST is a closed set of sum types produced by the parser and owned as a
//! strict tree: every node exclusively owns its children via `Box`/`Vec`, and
//! there are no cycles or shared subtrees. The tree is built once and handed
//! to the caller; nothing here mutates after construction.
//!
//! # Places versus expressions
//!
//! The grammar distinguishes *places* (l-values: identifiers, dereferences,
//! array elements, fields) from *expressions* (r-values). Reading a place as
//! a value is explicit — [`Exp::Val`] wraps a [`Place`] — which lets the
//! parser enforce structurally that only places appear on the left of an
//! assignment and that only calls stand alone as statements.
//!
//! # Printing
//!
//! Every node implements [`Display`] producing a canonical, self-describing
//! line that downstream tooling diffs against golden files:
//!
//! ```
//! use ingot_core::ast::{Exp, Place};
//!
//! let exp = Exp::val(Place::Id("x".into()));
//! assert_eq!(exp.to_string(), r#"Val(Id("x"))"#);
//! ```
//!
//! [`Display`]: std::fmt::Display

use std::fmt;

use ecow::EcoString;

/// A language type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Type {
    /// 64-bit signed integer type.
    Int,
    /// A named struct reference.
    Struct(EcoString),
    /// Pointer to a type, written `&T`.
    Ptr(Box<Type>),
    /// Dynamic-size array of a type, written `[T]`.
    Array(Box<Type>),
    /// A function type, written `(T1, T2) -> R`.
    Fn {
        /// Parameter types, in source order.
        params: Vec<Type>,
        /// Return type.
        ret: Box<Type>,
    },
    /// The type of the `nil` literal. The parser never produces this; it is
    /// reserved for later stages.
    Nil,
}

/// A unary operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnaryOp {
    /// Arithmetic negation, written `-e`.
    Neg,
    /// Logical negation, written `not e`.
    Not,
}

/// A binary operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOp {
    /// `+`
    Add,
    /// `-`
    Sub,
    /// `*`
    Mul,
    /// `/`
    Div,
    /// `and`
    And,
    /// `or`
    Or,
    /// `==`
    Eq,
    /// `!=`
    NotEq,
    /// `<`
    Lt,
    /// `<=`
    Lte,
    /// `>`
    Gt,
    /// `>=`
    Gte,
}

/// An l-value: an expression denoting a memory location.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Place {
    /// A name.
    Id(EcoString),
    /// Pointer dereference, written `e.*`.
    Deref(Box<Exp>),
    /// Array element, written `e[i]`.
    ArrayAccess {
        /// The array expression.
        array: Box<Exp>,
        /// The index expression.
        index: Box<Exp>,
    },
    /// Struct field, written `e.field`.
    FieldAccess {
        /// The struct-pointer expression.
        base: Box<Exp>,
        /// The field name.
        field: EcoString,
    },
}

/// An r-value: an expression denoting a computed value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Exp {
    /// Reading a place as a value.
    Val(Box<Place>),
    /// A non-negative integer literal that fits in a signed 64-bit integer.
    /// Negative literals parse as `UnOp(Neg, Num(n))`.
    Num(i64),
    /// The `nil` literal.
    Nil,
    /// A conditional expression, written `g ? a : b`.
    Select {
        /// The condition.
        guard: Box<Exp>,
        /// Value when the guard is true.
        tt: Box<Exp>,
        /// Value when the guard is false.
        ff: Box<Exp>,
    },
    /// A unary operation.
    UnOp {
        /// The operator.
        op: UnaryOp,
        /// The operand.
        exp: Box<Exp>,
    },
    /// A binary operation.
    BinOp {
        /// The operator.
        op: BinaryOp,
        /// Left operand.
        left: Box<Exp>,
        /// Right operand.
        right: Box<Exp>,
    },
    /// Single-value allocation, written `new T`.
    NewSingle(Type),
    /// Array allocation, written `[T; n]`.
    NewArray {
        /// Element type.
        typ: Type,
        /// Number of elements.
        size: Box<Exp>,
    },
    /// A function call in expression position.
    Call(FunCall),
}

impl Exp {
    /// Wraps a place as a value read.
    #[must_use]
    pub fn val(place: Place) -> Self {
        Self::Val(Box::new(place))
    }
}

/// A function call: callee expression plus arguments in source order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FunCall {
    /// The called expression.
    pub callee: Box<Exp>,
    /// Argument expressions.
    pub args: Vec<Exp>,
}

impl FunCall {
    /// Creates a call of `callee` with `args`.
    #[must_use]
    pub fn new(callee: Exp, args: Vec<Exp>) -> Self {
        Self {
            callee: Box::new(callee),
            args,
        }
    }
}

/// A statement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Stmt {
    /// Assignment to a place. The parser guarantees the target is a place by
    /// construction: any other left-hand side is rejected before this node
    /// exists.
    Assign(Place, Exp),
    /// A standalone call. All other expression forms are rejected as
    /// statements.
    Call(FunCall),
    /// A conditional. `ff` is empty when there is no `else` branch.
    If {
        /// The condition.
        guard: Exp,
        /// The true branch.
        tt: Vec<Stmt>,
        /// The false branch.
        ff: Vec<Stmt>,
    },
    /// A loop.
    While {
        /// The condition.
        guard: Exp,
        /// The loop body.
        body: Vec<Stmt>,
    },
    /// `break;`
    Break,
    /// `continue;`
    Continue,
    /// `return e;`
    Return(Exp),
}

/// A name/type pair: a struct field, parameter, local, or extern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Decl {
    /// The declared name.
    pub name: EcoString,
    /// The declared type.
    pub typ: Type,
}

impl Decl {
    /// Creates a declaration.
    #[must_use]
    pub fn new(name: impl Into<EcoString>, typ: Type) -> Self {
        Self {
            name: name.into(),
            typ,
        }
    }
}

/// A struct definition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StructDef {
    /// The struct name.
    pub name: EcoString,
    /// Fields, in source order.
    pub fields: Vec<Decl>,
}

/// A function definition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FunctionDef {
    /// The function name.
    pub name: EcoString,
    /// Parameters, in source order.
    pub params: Vec<Decl>,
    /// The return type.
    pub rettyp: Type,
    /// Local declarations from the leading `let` lines, in source order.
    pub locals: Vec<Decl>,
    /// The body.
    pub stmts: Vec<Stmt>,
}

/// A whole program: structs, externs, and functions in source order.
///
/// Externs are declarations whose type is a [`Type::Fn`].
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Program {
    /// Struct definitions.
    pub structs: Vec<StructDef>,
    /// Extern declarations.
    pub externs: Vec<Decl>,
    /// Function definitions.
    pub functions: Vec<FunctionDef>,
}

// ============================================================================
// Canonical printing
// ============================================================================

/// Writes `items` separated by `", "` between `open` and `close`.
fn write_seq<T: fmt::Display>(
    f: &mut fmt::Formatter<'_>,
    items: &[T],
    open: char,
    close: char,
) -> fmt::Result {
    write!(f, "{open}")?;
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            f.write_str(", ")?;
        }
        write!(f, "{item}")?;
    }
    write!(f, "{close}")
}

impl fmt::Display for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int => f.write_str("Int"),
            Self::Struct(name) => write!(f, "Struct({name})"),
            Self::Ptr(inner) => write!(f, "Ptr({inner})"),
            Self::Array(inner) => write!(f, "Array({inner})"),
            Self::Fn { params, ret } => {
                f.write_str("Fn(")?;
                write_seq(f, params, '[', ']')?;
                write!(f, ", {ret})")
            }
            Self::Nil => f.write_str("Nil"),
        }
    }
}

impl fmt::Display for UnaryOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Neg => f.write_str("Neg"),
            Self::Not => f.write_str("Not"),
        }
    }
}

impl fmt::Display for BinaryOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Add => "Add",
            Self::Sub => "Sub",
            Self::Mul => "Mul",
            Self::Div => "Div",
            Self::And => "And",
            Self::Or => "Or",
            Self::Eq => "Eq",
            Self::NotEq => "NotEq",
            Self::Lt => "Lt",
            Self::Lte => "Lte",
            Self::Gt => "Gt",
            Self::Gte => "Gte",
        };
        f.write_str(name)
    }
}

impl fmt::Display for Place {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Id(name) => write!(f, "Id(\"{name}\")"),
            Self::Deref(exp) => write!(f, "Deref({exp})"),
            Self::ArrayAccess { array, index } => {
                write!(f, "ArrayAccess {{ array: {array}, index: {index} }}")
            }
            Self::FieldAccess { base, field } => {
                write!(f, "FieldAccess {{ ptr: {base}, field: \"{field}\" }}")
            }
        }
    }
}

impl fmt::Display for Exp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Val(place) => write!(f, "Val({place})"),
            Self::Num(value) => write!(f, "Num({value})"),
            Self::Nil => f.write_str("Nil"),
            Self::Select { guard, tt, ff } => {
                write!(f, "Select {{ guard: {guard}, tt: {tt}, ff: {ff} }}")
            }
            Self::UnOp { op, exp } => write!(f, "UnOp({op}, {exp})"),
            Self::BinOp { op, left, right } => {
                write!(f, "BinOp {{ op: {op}, left: {left}, right: {right} }}")
            }
            Self::NewSingle(typ) => write!(f, "NewSingle({typ})"),
            Self::NewArray { typ, size } => {
                write!(f, "NewArray {{ typ: {typ}, size: {size} }}")
            }
            Self::Call(call) => write!(f, "Call({call})"),
        }
    }
}

impl fmt::Display for FunCall {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "FunCall {{ callee: {}, args: ", self.callee)?;
        write_seq(f, &self.args, '[', ']')?;
        f.write_str(" }")
    }
}

impl fmt::Display for Stmt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Assign(place, exp) => write!(f, "Assign({place}, {exp})"),
            Self::Call(call) => write!(f, "Call({call})"),
            Self::If { guard, tt, ff } => {
                write!(f, "If {{ guard: {guard}, tt: ")?;
                write_seq(f, tt, '[', ']')?;
                f.write_str(", ff: ")?;
                write_seq(f, ff, '[', ']')?;
                f.write_str(" }")
            }
            Self::While { guard, body } => {
                write!(f, "While({guard}, ")?;
                write_seq(f, body, '[', ']')?;
                f.write_str(")")
            }
            Self::Break => f.write_str("Break"),
            Self::Continue => f.write_str("Continue"),
            Self::Return(exp) => write!(f, "Return({exp})"),
        }
    }
}

impl fmt::Display for Decl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Decl {{ name: \"{}\", typ: {} }}", self.name, self.typ)
    }
}

impl fmt::Display for StructDef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Struct {{ name: \"{}\", fields: ", self.name)?;
        write_seq(f, &self.fields, '[', ']')?;
        f.write_str(" }")
    }
}

impl fmt::Display for FunctionDef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Function {{ name: \"{}\", prms: ", self.name)?;
        write_seq(f, &self.params, '[', ']')?;
        write!(f, ", rettyp: {}, locals: ", self.rettyp)?;
        write_seq(f, &self.locals, '{', '}')?;
        f.write_str(", stmts: ")?;
        write_seq(f, &self.stmts, '[', ']')?;
        f.write_str(" }")
    }
}

impl fmt::Display for Program {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Program { structs: ")?;
        write_seq(f, &self.structs, '{', '}')?;
        f.write_str(", externs: ")?;
        write_seq(f, &self.externs, '{', '}')?;
        f.write_str(", functions: ")?;
        write_seq(f, &self.functions, '{', '}')?;
        f.write_str(" }")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn type_display() {
        assert_eq!(Type::Int.to_string(), "Int");
        assert_eq!(Type::Struct("Node".into()).to_string(), "Struct(Node)");
        assert_eq!(
            Type::Ptr(Box::new(Type::Array(Box::new(Type::Int)))).to_string(),
            "Ptr(Array(Int))"
        );
        assert_eq!(
            Type::Fn {
                params: vec![Type::Int, Type::Ptr(Box::new(Type::Int))],
                ret: Box::new(Type::Int),
            }
            .to_string(),
            "Fn([Int, Ptr(Int)], Int)"
        );
        assert_eq!(
            Type::Fn {
                params: vec![],
                ret: Box::new(Type::Nil),
            }
            .to_string(),
            "Fn([], Nil)"
        );
    }

    #[test]
    fn place_display() {
        assert_eq!(Place::Id("x".into()).to_string(), "Id(\"x\")");
        assert_eq!(
            Place::Deref(Box::new(Exp::val(Place::Id("p".into())))).to_string(),
            "Deref(Val(Id(\"p\")))"
        );
        assert_eq!(
            Place::FieldAccess {
                base: Box::new(Exp::val(Place::Id("a".into()))),
                field: "b".into(),
            }
            .to_string(),
            "FieldAccess { ptr: Val(Id(\"a\")), field: \"b\" }"
        );
    }

    #[test]
    fn precedence_example_display() {
        // -3 + 4 * 5
        let exp = Exp::BinOp {
            op: BinaryOp::Add,
            left: Box::new(Exp::UnOp {
                op: UnaryOp::Neg,
                exp: Box::new(Exp::Num(3)),
            }),
            right: Box::new(Exp::BinOp {
                op: BinaryOp::Mul,
                left: Box::new(Exp::Num(4)),
                right: Box::new(Exp::Num(5)),
            }),
        };
        assert_eq!(
            exp.to_string(),
            "BinOp { op: Add, left: UnOp(Neg, Num(3)), right: BinOp { op: Mul, left: Num(4), right: Num(5) } }"
        );
    }

    #[test]
    fn stmt_display() {
        let call = Stmt::Call(FunCall::new(Exp::val(Place::Id("f".into())), vec![]));
        assert_eq!(
            call.to_string(),
            "Call(FunCall { callee: Val(Id(\"f\")), args: [] })"
        );

        let loop_stmt = Stmt::While {
            guard: Exp::val(Place::Id("c".into())),
            body: vec![Stmt::Break, Stmt::Continue],
        };
        assert_eq!(
            loop_stmt.to_string(),
            "While(Val(Id(\"c\")), [Break, Continue])"
        );

        let cond = Stmt::If {
            guard: Exp::Nil,
            tt: vec![Stmt::Return(Exp::Num(1))],
            ff: vec![],
        };
        assert_eq!(
            cond.to_string(),
            "If { guard: Nil, tt: [Return(Num(1))], ff: [] }"
        );
    }

    #[test]
    fn program_display() {
        let program = Program {
            structs: vec![StructDef {
                name: "S".into(),
                fields: vec![Decl::new("x", Type::Int)],
            }],
            externs: vec![Decl::new(
                "print",
                Type::Fn {
                    params: vec![Type::Int],
                    ret: Type::Int.into(),
                },
            )],
            functions: vec![FunctionDef {
                name: "main".into(),
                params: vec![],
                rettyp: Type::Int,
                locals: vec![Decl::new("i", Type::Int)],
                stmts: vec![Stmt::Return(Exp::Num(0))],
            }],
        };
        assert_eq!(
            program.to_string(),
            "Program { structs: {Struct { name: \"S\", fields: [Decl { name: \"x\", typ: Int }] }}, \
             externs: {Decl { name: \"print\", typ: Fn([Int], Int) }}, \
             functions: {Function { name: \"main\", prms: [], rettyp: Int, \
             locals: {Decl { name: \"i\", typ: Int }}, stmts: [Return(Num(0))] }} }"
        );
    }

    #[test]
    fn empty_program_display() {
        assert_eq!(
            Program::default().to_string(),
            "Program { structs: {}, externs: {}, functions: {} }"
        );
    }
}
