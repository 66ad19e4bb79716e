//! Type checking and semantic analysis module.
//!
//! This module performs type checking and semantic analysis on the AST.
//! It transforms the untyped AST into a typed AST while:
//!
//! - Resolving every expression, declaration, source and sink to a type
//! - Enforcing the flat, insert-once symbol table (no duplicates, no
//!   use before declaration)
//! - Classifying every index as Cartesian or polar
//! - Validating source/sink legality for input and output statements
//!
//! The first violation aborts the whole pass; there is no recovery and
//! no partial result.

pub mod type_checker;
pub mod typed_ast;
