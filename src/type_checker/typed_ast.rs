//! Typed Abstract Syntax Tree definitions.
//!
//! This module contains the typed variants of AST nodes produced by
//! the type checker. The typed AST mirrors the structure of the untyped
//! AST but every expression, declaration, source and sink carries its
//! resolved type, every index its Cartesian/polar classification, and
//! every use site the type of the declaration it resolved to.
//!
//! This typed AST is the sole contract surface to a code generator.

use crate::{
    ast::{statements::Index, types::Type},
    lexer::tokens::{FunctionName, PredefinedName, Token},
};

#[derive(Debug, Clone)]
pub struct TypedProgram {
    pub name: String,
    pub items: Vec<TypedItem>,
}

#[derive(Debug, Clone)]
pub enum TypedItem {
    Declaration(TypedDeclaration),
    Statement(TypedStatement),
}

#[derive(Debug, Clone)]
pub enum TypedDeclaration {
    Variable(TypedVariableDecl),
    Image(TypedImageDecl),
    SourceSink(TypedSourceSinkDecl),
}

impl TypedDeclaration {
    pub fn declared_type(&self) -> Type {
        match self {
            TypedDeclaration::Variable(declaration) => declaration.declared_type,
            TypedDeclaration::Image(_) => Type::Image,
            TypedDeclaration::SourceSink(declaration) => declaration.declared_type,
        }
    }
}

#[derive(Debug, Clone)]
pub struct TypedVariableDecl {
    pub name: String,
    pub declared_type: Type,
    pub initializer: Option<TypedExpr>,
}

#[derive(Debug, Clone)]
pub struct TypedImageDecl {
    pub name: String,
    pub size: Option<(TypedExpr, TypedExpr)>,
    pub source: Option<TypedSource>,
}

#[derive(Debug, Clone)]
pub struct TypedSourceSinkDecl {
    pub name: String,
    pub declared_type: Type,
    pub source: TypedSource,
}

#[derive(Debug, Clone)]
pub enum TypedStatement {
    Assign(TypedAssignStmt),
    In(TypedInStmt),
    Out(TypedOutStmt),
}

/// An assignment with its target resolved. The Cartesian flag is copied
/// from the left-hand side so a code generator can pick the pixel
/// addressing mode without revisiting the index.
#[derive(Debug, Clone)]
pub struct TypedAssignStmt {
    pub lhs: TypedLhs,
    pub expr: TypedExpr,
    pub is_cartesian: bool,
}

/// An input statement bound to the type of its resolved target
/// declaration.
#[derive(Debug, Clone)]
pub struct TypedInStmt {
    pub name: String,
    pub target_type: Type,
    pub source: TypedSource,
}

#[derive(Debug, Clone)]
pub struct TypedOutStmt {
    pub name: String,
    pub target_type: Type,
    pub sink: TypedSink,
}

#[derive(Debug, Clone)]
pub struct TypedLhs {
    pub name: String,
    pub target_type: Type,
    pub index: Option<TypedIndex>,
    pub is_cartesian: bool,
}

/// A checked coordinate pair. Polar only when the components are exactly
/// the predefined names `r` then `a`.
#[derive(Debug, Clone)]
pub struct TypedIndex {
    pub e0: TypedExpr,
    pub e1: TypedExpr,
    pub is_cartesian: bool,
}

#[derive(Debug, Clone)]
pub enum TypedSource {
    StringLiteral { value: String, source_type: Type },
    CommandLineParam { param_num: Box<TypedExpr>, source_type: Type },
    Ident { name: String, source_type: Type },
}

impl TypedSource {
    pub fn source_type(&self) -> Type {
        match self {
            TypedSource::StringLiteral { source_type, .. } => *source_type,
            TypedSource::CommandLineParam { source_type, .. } => *source_type,
            TypedSource::Ident { source_type, .. } => *source_type,
        }
    }
}

#[derive(Debug, Clone)]
pub enum TypedSink {
    Ident { name: String, sink_type: Type },
    Screen,
}

impl TypedSink {
    pub fn sink_type(&self) -> Type {
        match self {
            TypedSink::Ident { sink_type, .. } => *sink_type,
            TypedSink::Screen => Type::Screen,
        }
    }
}

#[derive(Debug, Clone)]
pub enum TypedExpr {
    IntLit {
        value: i32,
    },
    BoolLit {
        value: bool,
    },
    Ident {
        name: String,
        expr_type: Type,
    },
    PredefinedName {
        name: PredefinedName,
    },
    PixelSelector {
        name: String,
        index: Option<Box<TypedIndex>>,
        expr_type: Type,
    },
    Unary {
        operator: Token,
        expr: Box<TypedExpr>,
        expr_type: Type,
    },
    Binary {
        left: Box<TypedExpr>,
        operator: Token,
        right: Box<TypedExpr>,
        expr_type: Type,
    },
    Conditional {
        condition: Box<TypedExpr>,
        true_expr: Box<TypedExpr>,
        false_expr: Box<TypedExpr>,
    },
    FunctionAppExpr {
        function: FunctionName,
        arg: Box<TypedExpr>,
    },
    /// The index argument is carried syntactically: its components are
    /// not revalidated, so there is nothing typed to store.
    FunctionAppIndex {
        function: FunctionName,
        index: Index,
    },
}

impl TypedExpr {
    /// The resolved type of the expression. Total: a typed node always
    /// has exactly one type.
    pub fn expr_type(&self) -> Type {
        match self {
            TypedExpr::IntLit { .. } => Type::Integer,
            TypedExpr::BoolLit { .. } => Type::Boolean,
            TypedExpr::Ident { expr_type, .. } => *expr_type,
            TypedExpr::PredefinedName { .. } => Type::Integer,
            TypedExpr::PixelSelector { expr_type, .. } => *expr_type,
            TypedExpr::Unary { expr_type, .. } => *expr_type,
            TypedExpr::Binary { expr_type, .. } => *expr_type,
            // Branches are required to be boolean, so the whole
            // conditional is
            TypedExpr::Conditional { .. } => Type::Boolean,
            TypedExpr::FunctionAppExpr { .. } => Type::Integer,
            TypedExpr::FunctionAppIndex { .. } => Type::Integer,
        }
    }
}
