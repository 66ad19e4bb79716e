use std::fmt::Display;

use thiserror::Error;

use crate::{ast::types::Type, lexer::tokens::FunctionName, Position};

/// A grammar-level violation: unexpected token, malformed selector,
/// missing delimiter, unrecognisable input. The first one raised aborts
/// the parse; there is no recovery.
#[derive(Debug, Clone)]
pub struct SyntaxError {
    internal_error: SyntaxErrorImpl,
    position: Position,
}

impl SyntaxError {
    pub fn new(error_impl: SyntaxErrorImpl, position: Position) -> Self {
        SyntaxError {
            internal_error: error_impl,
            position,
        }
    }

    pub fn position(&self) -> Position {
        self.position
    }

    pub fn error_name(&self) -> &str {
        match &self.internal_error {
            SyntaxErrorImpl::UnrecognisedToken { .. } => "UnrecognisedToken",
            SyntaxErrorImpl::UnexpectedToken { .. } => "UnexpectedToken",
            SyntaxErrorImpl::UnexpectedTokenDetailed { .. } => "UnexpectedTokenDetailed",
            SyntaxErrorImpl::ExpectedToken { .. } => "ExpectedToken",
            SyntaxErrorImpl::NumberParseError { .. } => "NumberParseError",
        }
    }
}

impl Display for SyntaxError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.position, self.internal_error)
    }
}

impl std::error::Error for SyntaxError {}

#[derive(Error, Debug, Clone)]
pub enum SyntaxErrorImpl {
    #[error("unrecognised token: {token:?}")]
    UnrecognisedToken { token: String },
    #[error("unexpected token: {token:?}")]
    UnexpectedToken { token: String },
    #[error("unexpected token ({message}): {token:?}")]
    UnexpectedTokenDetailed { token: String, message: String },
    #[error("expected {expected} but found: {token:?}")]
    ExpectedToken { expected: String, token: String },
    #[error("error parsing number: {token:?}")]
    NumberParseError { token: String },
}

/// A type or declaration-rule violation found while checking a parsed
/// program. Like syntax errors these are fail-fast: the first one ends
/// the whole pass.
#[derive(Debug, Clone)]
pub struct SemanticError {
    internal_error: SemanticErrorImpl,
    position: Position,
}

impl SemanticError {
    pub fn new(error_impl: SemanticErrorImpl, position: Position) -> Self {
        SemanticError {
            internal_error: error_impl,
            position,
        }
    }

    pub fn position(&self) -> Position {
        self.position
    }

    pub fn error_name(&self) -> &str {
        match &self.internal_error {
            SemanticErrorImpl::AlreadyDeclared { .. } => "AlreadyDeclared",
            SemanticErrorImpl::NotDeclared { .. } => "NotDeclared",
            SemanticErrorImpl::UnknownDeclarationType { .. } => "UnknownDeclarationType",
            SemanticErrorImpl::DeclarationTypeMismatch { .. } => "DeclarationTypeMismatch",
            SemanticErrorImpl::ImageSizeNotInteger => "ImageSizeNotInteger",
            SemanticErrorImpl::SourceTypeMismatch { .. } => "SourceTypeMismatch",
            SemanticErrorImpl::CommandLineParamNotInteger { .. } => "CommandLineParamNotInteger",
            SemanticErrorImpl::SourceNotFileOrUrl { .. } => "SourceNotFileOrUrl",
            SemanticErrorImpl::SinkNotFile { .. } => "SinkNotFile",
            SemanticErrorImpl::InvalidUnaryOperand { .. } => "InvalidUnaryOperand",
            SemanticErrorImpl::BinaryOperandMismatch { .. } => "BinaryOperandMismatch",
            SemanticErrorImpl::InvalidBinaryOperands { .. } => "InvalidBinaryOperands",
            SemanticErrorImpl::ConditionalBranchMismatch { .. } => "ConditionalBranchMismatch",
            SemanticErrorImpl::SelectorOnNonImage { .. } => "SelectorOnNonImage",
            SemanticErrorImpl::IndexNotInteger => "IndexNotInteger",
            SemanticErrorImpl::FunctionArgNotInteger { .. } => "FunctionArgNotInteger",
            SemanticErrorImpl::AssignTypeMismatch { .. } => "AssignTypeMismatch",
            SemanticErrorImpl::InTypeMismatch { .. } => "InTypeMismatch",
            SemanticErrorImpl::InvalidOutCombination { .. } => "InvalidOutCombination",
        }
    }
}

impl Display for SemanticError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.position, self.internal_error)
    }
}

impl std::error::Error for SemanticError {}

#[derive(Error, Debug, Clone)]
pub enum SemanticErrorImpl {
    #[error("{name:?} already in symbol table")]
    AlreadyDeclared { name: String },
    #[error("{name:?} not declared before use")]
    NotDeclared { name: String },
    #[error("{token:?} does not name a declared type")]
    UnknownDeclarationType { token: String },
    #[error("{name:?} declared as {expected} but initialized with {received}")]
    DeclarationTypeMismatch {
        name: String,
        expected: Type,
        received: Type,
    },
    #[error("image size expressions must be of integer type")]
    ImageSizeNotInteger,
    #[error("source resolves to {received}, declaration expects {expected}")]
    SourceTypeMismatch { expected: Type, received: Type },
    #[error("command-line parameter expects an integer, found {received}")]
    CommandLineParamNotInteger { received: Type },
    #[error("{name:?} is {received}, a source must be a file or url")]
    SourceNotFileOrUrl { name: String, received: Type },
    #[error("{name:?} is {received}, a sink must be a file")]
    SinkNotFile { name: String, received: Type },
    #[error("unary {operator:?} cannot be applied to {operand}")]
    InvalidUnaryOperand { operator: String, operand: Type },
    #[error("binary operands must have the same type, found {left} and {right}")]
    BinaryOperandMismatch { left: Type, right: Type },
    #[error("binary {operator:?} cannot be applied to {operand}")]
    InvalidBinaryOperands { operator: String, operand: Type },
    #[error("conditional branches must both be boolean, found {true_type} and {false_type}")]
    ConditionalBranchMismatch { true_type: Type, false_type: Type },
    #[error("{name:?} is {received} and cannot carry a pixel selector")]
    SelectorOnNonImage { name: String, received: Type },
    #[error("index expressions must be of integer type")]
    IndexNotInteger,
    #[error("argument of {function} must be an integer, found {received}")]
    FunctionArgNotInteger {
        function: FunctionName,
        received: Type,
    },
    #[error("cannot assign {received} to a {expected} target")]
    AssignTypeMismatch { expected: Type, received: Type },
    #[error("input source is {src}, target is {target}")]
    InTypeMismatch { target: Type, src: Type },
    #[error("cannot write a {target} to a {sink} sink")]
    InvalidOutCombination { target: Type, sink: Type },
}

/// Either failure the front end can produce, for callers that drive the
/// whole pipeline.
#[derive(Error, Debug, Clone)]
pub enum CompilerError {
    #[error(transparent)]
    Syntax(#[from] SyntaxError),
    #[error(transparent)]
    Semantic(#[from] SemanticError),
}

impl CompilerError {
    pub fn position(&self) -> Position {
        match self {
            CompilerError::Syntax(error) => error.position(),
            CompilerError::Semantic(error) => error.position(),
        }
    }

    pub fn error_name(&self) -> &str {
        match self {
            CompilerError::Syntax(error) => error.error_name(),
            CompilerError::Semantic(error) => error.error_name(),
        }
    }
}
