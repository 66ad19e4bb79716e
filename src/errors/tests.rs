//! Unit tests for error handling.
//!
//! This module contains tests for error types and error reporting.

use crate::ast::types::Type;
use crate::errors::errors::{
    CompilerError, SemanticError, SemanticErrorImpl, SyntaxError, SyntaxErrorImpl,
};
use crate::Position;

#[test]
fn test_syntax_error_creation() {
    let error = SyntaxError::new(
        SyntaxErrorImpl::UnrecognisedToken {
            token: "#".to_string(),
        },
        Position::new(3, 7),
    );

    assert_eq!(error.error_name(), "UnrecognisedToken");
    assert_eq!(error.position(), Position::new(3, 7));
}

#[test]
fn test_syntax_error_display() {
    let error = SyntaxError::new(
        SyntaxErrorImpl::UnexpectedToken {
            token: "?".to_string(),
        },
        Position::new(1, 4),
    );

    assert_eq!(error.to_string(), "line 1 pos 4: unexpected token: \"?\"");
}

#[test]
fn test_semantic_error_display_format() {
    let error = SemanticError::new(
        SemanticErrorImpl::AlreadyDeclared {
            name: "v".to_string(),
        },
        Position::new(2, 5),
    );

    assert_eq!(error.error_name(), "AlreadyDeclared");
    assert_eq!(
        error.to_string(),
        "line 2 pos 5: \"v\" already in symbol table"
    );
}

#[test]
fn test_type_mismatch_error_message_names_types() {
    let error = SemanticError::new(
        SemanticErrorImpl::DeclarationTypeMismatch {
            name: "v".to_string(),
            expected: Type::Integer,
            received: Type::Boolean,
        },
        Position::new(1, 1),
    );

    let message = error.to_string();
    assert!(message.contains("integer"));
    assert!(message.contains("boolean"));
}

#[test]
fn test_compiler_error_keeps_position_and_name() {
    let syntax: CompilerError = SyntaxError::new(
        SyntaxErrorImpl::ExpectedToken {
            expected: "Semicolon".to_string(),
            token: ")".to_string(),
        },
        Position::new(4, 9),
    )
    .into();

    assert_eq!(syntax.error_name(), "ExpectedToken");
    assert_eq!(syntax.position(), Position::new(4, 9));

    let semantic: CompilerError = SemanticError::new(
        SemanticErrorImpl::NotDeclared {
            name: "w".to_string(),
        },
        Position::new(6, 2),
    )
    .into();

    assert_eq!(semantic.error_name(), "NotDeclared");
    assert_eq!(semantic.position(), Position::new(6, 2));
    assert_eq!(
        semantic.to_string(),
        "line 6 pos 2: \"w\" not declared before use"
    );
}
