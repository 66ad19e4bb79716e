use std::collections::HashMap;

use url::Url;

use crate::{
    ast::{
        ast::{Item, Program},
        expressions::{
            BinaryExpr, ConditionalExpr, Expr, FunctionAppExprArg, FunctionAppIndexArg,
            PixelSelectorExpr, UnaryExpr,
        },
        statements::{
            AssignStmt, Declaration, ImageDecl, Index, InStmt, Lhs, OutStmt, Sink, Source,
            SourceSinkDecl, Statement, VariableDecl,
        },
        types::Type,
    },
    errors::errors::{SemanticError, SemanticErrorImpl},
    lexer::tokens::{PredefinedName, Token, TokenKind},
};

use super::typed_ast::{
    TypedAssignStmt, TypedDeclaration, TypedExpr, TypedImageDecl, TypedIndex, TypedInStmt,
    TypedItem, TypedLhs, TypedOutStmt, TypedProgram, TypedSink, TypedSource, TypedSourceSinkDecl,
    TypedStatement, TypedVariableDecl,
};

/// The flat, program-wide symbol table. Names are inserted at most once
/// and are visible to everything that textually follows them.
#[derive(Debug, Default)]
pub struct SymbolTable {
    symbols: HashMap<String, Type>,
}

impl SymbolTable {
    pub fn new() -> Self {
        SymbolTable {
            symbols: HashMap::new(),
        }
    }

    pub fn declare(
        &mut self,
        name: &str,
        declared_type: Type,
        token: &Token,
    ) -> Result<(), SemanticError> {
        if self.symbols.contains_key(name) {
            Err(SemanticError::new(
                SemanticErrorImpl::AlreadyDeclared {
                    name: name.to_string(),
                },
                token.position,
            ))
        } else {
            self.symbols.insert(name.to_string(), declared_type);
            Ok(())
        }
    }

    pub fn lookup(&self, name: &str) -> Option<Type> {
        self.symbols.get(name).copied()
    }
}

/// Checker context threaded through the pass. Owns the symbol table so
/// independent checks cannot interfere.
#[derive(Debug)]
pub struct TypeChecker {
    pub symbol_table: SymbolTable,
}

impl TypeChecker {
    fn resolve(&self, name: &str, token: &Token) -> Result<Type, SemanticError> {
        self.symbol_table.lookup(name).ok_or_else(|| {
            SemanticError::new(
                SemanticErrorImpl::NotDeclared {
                    name: name.to_string(),
                },
                token.position,
            )
        })
    }
}

/// Checks a parsed program, producing its typed counterpart or the
/// first semantic error. The program name is only a label; it does not
/// enter the symbol table.
pub fn type_check(program: &Program) -> Result<TypedProgram, SemanticError> {
    let mut checker = TypeChecker {
        symbol_table: SymbolTable::new(),
    };

    let mut items = vec![];
    for item in &program.items {
        items.push(check_item(&mut checker, item)?);
    }

    Ok(TypedProgram {
        name: program.name.clone(),
        items,
    })
}

pub fn check_item(checker: &mut TypeChecker, item: &Item) -> Result<TypedItem, SemanticError> {
    match item {
        Item::Declaration(declaration) => Ok(TypedItem::Declaration(check_declaration(
            checker,
            declaration,
        )?)),
        Item::Statement(statement) => {
            Ok(TypedItem::Statement(check_statement(checker, statement)?))
        }
    }
}

pub fn check_declaration(
    checker: &mut TypeChecker,
    declaration: &Declaration,
) -> Result<TypedDeclaration, SemanticError> {
    match declaration {
        Declaration::Variable(declaration) => Ok(TypedDeclaration::Variable(
            check_variable_declaration(checker, declaration)?,
        )),
        Declaration::Image(declaration) => Ok(TypedDeclaration::Image(check_image_declaration(
            checker,
            declaration,
        )?)),
        Declaration::SourceSink(declaration) => Ok(TypedDeclaration::SourceSink(
            check_source_sink_declaration(checker, declaration)?,
        )),
    }
}

fn declared_type_of(type_token: &Token) -> Result<Type, SemanticError> {
    Type::from_declaration_keyword(type_token.kind).ok_or_else(|| {
        SemanticError::new(
            SemanticErrorImpl::UnknownDeclarationType {
                token: type_token.value.clone(),
            },
            type_token.position,
        )
    })
}

fn check_variable_declaration(
    checker: &mut TypeChecker,
    declaration: &VariableDecl,
) -> Result<TypedVariableDecl, SemanticError> {
    let declared_type = declared_type_of(&declaration.type_token)?;

    // The name is inserted before the initializer is visited, so the
    // initializer may refer to the variable itself but not to anything
    // declared later
    checker
        .symbol_table
        .declare(&declaration.name, declared_type, &declaration.type_token)?;

    let initializer = match &declaration.initializer {
        Some(expr) => {
            let typed = check_expr(checker, expr)?;
            if typed.expr_type() != declared_type {
                return Err(SemanticError::new(
                    SemanticErrorImpl::DeclarationTypeMismatch {
                        name: declaration.name.clone(),
                        expected: declared_type,
                        received: typed.expr_type(),
                    },
                    declaration.type_token.position,
                ));
            }
            Some(typed)
        }
        None => None,
    };

    Ok(TypedVariableDecl {
        name: declaration.name.clone(),
        declared_type,
        initializer,
    })
}

fn check_image_declaration(
    checker: &mut TypeChecker,
    declaration: &ImageDecl,
) -> Result<TypedImageDecl, SemanticError> {
    // The source is visited before the name is inserted: an image may
    // not be loaded from itself
    let source = match &declaration.source {
        Some(source) => Some(check_source(checker, source)?),
        None => None,
    };

    checker
        .symbol_table
        .declare(&declaration.name, Type::Image, &declaration.token)?;

    let size = match &declaration.size {
        Some((x_size, y_size)) => {
            let x_size = check_expr(checker, x_size)?;
            let y_size = check_expr(checker, y_size)?;
            if x_size.expr_type() != Type::Integer || y_size.expr_type() != Type::Integer {
                return Err(SemanticError::new(
                    SemanticErrorImpl::ImageSizeNotInteger,
                    declaration.token.position,
                ));
            }
            Some((x_size, y_size))
        }
        None => None,
    };

    Ok(TypedImageDecl {
        name: declaration.name.clone(),
        size,
        source,
    })
}

fn check_source_sink_declaration(
    checker: &mut TypeChecker,
    declaration: &SourceSinkDecl,
) -> Result<TypedSourceSinkDecl, SemanticError> {
    let declared_type = declared_type_of(&declaration.type_token)?;

    checker
        .symbol_table
        .declare(&declaration.name, declared_type, &declaration.type_token)?;

    let source = check_source(checker, &declaration.source)?;
    if source.source_type() != declared_type {
        return Err(SemanticError::new(
            SemanticErrorImpl::SourceTypeMismatch {
                expected: declared_type,
                received: source.source_type(),
            },
            declaration.type_token.position,
        ));
    }

    Ok(TypedSourceSinkDecl {
        name: declaration.name.clone(),
        declared_type,
        source,
    })
}

pub fn check_source(
    checker: &mut TypeChecker,
    source: &Source,
) -> Result<TypedSource, SemanticError> {
    match source {
        Source::StringLiteral(source) => {
            // Purely syntactic: a string that parses as a URL is a URL,
            // everything else is a file path
            let source_type = if Url::parse(&source.value).is_ok() {
                Type::Url
            } else {
                Type::File
            };
            Ok(TypedSource::StringLiteral {
                value: source.value.clone(),
                source_type,
            })
        }
        Source::CommandLineParam(source) => {
            let param_num = check_expr(checker, &source.param_num)?;
            if param_num.expr_type() != Type::Integer {
                return Err(SemanticError::new(
                    SemanticErrorImpl::CommandLineParamNotInteger {
                        received: param_num.expr_type(),
                    },
                    source.token.position,
                ));
            }
            // The source takes the parameter expression's own type,
            // i.e. INTEGER, unlike every other source variant
            Ok(TypedSource::CommandLineParam {
                source_type: param_num.expr_type(),
                param_num: Box::new(param_num),
            })
        }
        Source::Ident(source) => {
            let source_type = checker.resolve(&source.name, &source.token)?;
            if source_type != Type::File && source_type != Type::Url {
                return Err(SemanticError::new(
                    SemanticErrorImpl::SourceNotFileOrUrl {
                        name: source.name.clone(),
                        received: source_type,
                    },
                    source.token.position,
                ));
            }
            Ok(TypedSource::Ident {
                name: source.name.clone(),
                source_type,
            })
        }
    }
}

pub fn check_sink(checker: &mut TypeChecker, sink: &Sink) -> Result<TypedSink, SemanticError> {
    match sink {
        Sink::Ident(sink) => {
            let sink_type = checker.resolve(&sink.name, &sink.token)?;
            if sink_type != Type::File {
                return Err(SemanticError::new(
                    SemanticErrorImpl::SinkNotFile {
                        name: sink.name.clone(),
                        received: sink_type,
                    },
                    sink.token.position,
                ));
            }
            Ok(TypedSink::Ident {
                name: sink.name.clone(),
                sink_type,
            })
        }
        Sink::Screen(_) => Ok(TypedSink::Screen),
    }
}

pub fn check_statement(
    checker: &mut TypeChecker,
    statement: &Statement,
) -> Result<TypedStatement, SemanticError> {
    match statement {
        Statement::Assign(statement) => Ok(TypedStatement::Assign(check_assign_statement(
            checker, statement,
        )?)),
        Statement::In(statement) => Ok(TypedStatement::In(check_in_statement(checker, statement)?)),
        Statement::Out(statement) => {
            Ok(TypedStatement::Out(check_out_statement(checker, statement)?))
        }
    }
}

fn check_assign_statement(
    checker: &mut TypeChecker,
    statement: &AssignStmt,
) -> Result<TypedAssignStmt, SemanticError> {
    let lhs = check_lhs(checker, &statement.lhs)?;
    let expr = check_expr(checker, &statement.expr)?;

    if lhs.target_type != expr.expr_type() {
        return Err(SemanticError::new(
            SemanticErrorImpl::AssignTypeMismatch {
                expected: lhs.target_type,
                received: expr.expr_type(),
            },
            statement.lhs.token.position,
        ));
    }

    let is_cartesian = lhs.is_cartesian;
    Ok(TypedAssignStmt {
        lhs,
        expr,
        is_cartesian,
    })
}

fn check_in_statement(
    checker: &mut TypeChecker,
    statement: &InStmt,
) -> Result<TypedInStmt, SemanticError> {
    let source = check_source(checker, &statement.source)?;
    let target_type = checker.resolve(&statement.name, &statement.token)?;

    if target_type != source.source_type() {
        return Err(SemanticError::new(
            SemanticErrorImpl::InTypeMismatch {
                target: target_type,
                src: source.source_type(),
            },
            statement.token.position,
        ));
    }

    Ok(TypedInStmt {
        name: statement.name.clone(),
        target_type,
        source,
    })
}

fn check_out_statement(
    checker: &mut TypeChecker,
    statement: &OutStmt,
) -> Result<TypedOutStmt, SemanticError> {
    let sink = check_sink(checker, &statement.sink)?;
    let target_type = checker.resolve(&statement.name, &statement.token)?;

    let legal = matches!(
        (target_type, sink.sink_type()),
        (Type::Integer | Type::Boolean, Type::Screen) | (Type::Image, Type::File | Type::Screen)
    );
    if !legal {
        return Err(SemanticError::new(
            SemanticErrorImpl::InvalidOutCombination {
                target: target_type,
                sink: sink.sink_type(),
            },
            statement.token.position,
        ));
    }

    Ok(TypedOutStmt {
        name: statement.name.clone(),
        target_type,
        sink,
    })
}

fn check_lhs(checker: &mut TypeChecker, lhs: &Lhs) -> Result<TypedLhs, SemanticError> {
    let target_type = checker.resolve(&lhs.name, &lhs.token)?;

    let index = match &lhs.index {
        Some(index) => Some(check_index(checker, index)?),
        None => None,
    };
    let is_cartesian = index
        .as_ref()
        .map(|index| index.is_cartesian)
        .unwrap_or(false);

    Ok(TypedLhs {
        name: lhs.name.clone(),
        target_type,
        index,
        is_cartesian,
    })
}

pub fn check_index(checker: &mut TypeChecker, index: &Index) -> Result<TypedIndex, SemanticError> {
    let e0 = check_expr(checker, &index.e0)?;
    let e1 = check_expr(checker, &index.e1)?;

    if e0.expr_type() != Type::Integer || e1.expr_type() != Type::Integer {
        return Err(SemanticError::new(
            SemanticErrorImpl::IndexNotInteger,
            index.first_token().position,
        ));
    }

    // Polar addressing only for the literal pair `r`,`a`; any other
    // index is Cartesian
    let is_cartesian = !(is_predefined(&index.e0, PredefinedName::R)
        && is_predefined(&index.e1, PredefinedName::A));

    Ok(TypedIndex {
        e0,
        e1,
        is_cartesian,
    })
}

fn is_predefined(expr: &Expr, name: PredefinedName) -> bool {
    matches!(expr, Expr::PredefinedName(predefined) if predefined.name == name)
}

pub fn check_expr(checker: &mut TypeChecker, expr: &Expr) -> Result<TypedExpr, SemanticError> {
    match expr {
        Expr::IntLit(expr) => Ok(TypedExpr::IntLit { value: expr.value }),
        Expr::BoolLit(expr) => Ok(TypedExpr::BoolLit { value: expr.value }),
        Expr::Ident(expr) => {
            let expr_type = checker.resolve(&expr.name, &expr.token)?;
            Ok(TypedExpr::Ident {
                name: expr.name.clone(),
                expr_type,
            })
        }
        Expr::PredefinedName(expr) => Ok(TypedExpr::PredefinedName { name: expr.name }),
        Expr::PixelSelector(expr) => check_pixel_selector(checker, expr),
        Expr::Unary(expr) => check_unary_expr(checker, expr),
        Expr::Binary(expr) => check_binary_expr(checker, expr),
        Expr::Conditional(expr) => check_conditional_expr(checker, expr),
        Expr::FunctionAppExpr(expr) => check_function_app_expr(checker, expr),
        Expr::FunctionAppIndex(expr) => check_function_app_index(expr),
    }
}

fn check_pixel_selector(
    checker: &mut TypeChecker,
    expr: &PixelSelectorExpr,
) -> Result<TypedExpr, SemanticError> {
    let index = match &expr.index {
        Some(index) => Some(Box::new(check_index(checker, index)?)),
        None => None,
    };

    let declared = checker.resolve(&expr.name, &expr.token)?;
    let expr_type = if declared == Type::Image {
        Type::Integer
    } else if index.is_none() {
        declared
    } else {
        return Err(SemanticError::new(
            SemanticErrorImpl::SelectorOnNonImage {
                name: expr.name.clone(),
                received: declared,
            },
            expr.token.position,
        ));
    };

    Ok(TypedExpr::PixelSelector {
        name: expr.name.clone(),
        index,
        expr_type,
    })
}

fn check_unary_expr(
    checker: &mut TypeChecker,
    expr: &UnaryExpr,
) -> Result<TypedExpr, SemanticError> {
    let operand = check_expr(checker, &expr.expr)?;
    let operand_type = operand.expr_type();

    let expr_type = match expr.operator.kind {
        TokenKind::Not if operand_type == Type::Boolean || operand_type == Type::Integer => {
            operand_type
        }
        TokenKind::Plus | TokenKind::Dash if operand_type == Type::Integer => Type::Integer,
        _ => {
            return Err(SemanticError::new(
                SemanticErrorImpl::InvalidUnaryOperand {
                    operator: expr.operator.value.clone(),
                    operand: operand_type,
                },
                expr.operator.position,
            ))
        }
    };

    Ok(TypedExpr::Unary {
        operator: expr.operator.clone(),
        expr: Box::new(operand),
        expr_type,
    })
}

fn check_binary_expr(
    checker: &mut TypeChecker,
    expr: &BinaryExpr,
) -> Result<TypedExpr, SemanticError> {
    let left = check_expr(checker, &expr.left)?;
    let right = check_expr(checker, &expr.right)?;
    let left_type = left.expr_type();
    let right_type = right.expr_type();

    let result = match expr.operator.kind {
        TokenKind::Equals | TokenKind::NotEquals => Some(Type::Boolean),
        TokenKind::Less | TokenKind::Greater | TokenKind::LessEquals | TokenKind::GreaterEquals
            if left_type == Type::Integer =>
        {
            Some(Type::Boolean)
        }
        TokenKind::And | TokenKind::Or
            if left_type == Type::Integer || left_type == Type::Boolean =>
        {
            Some(left_type)
        }
        TokenKind::Plus
        | TokenKind::Dash
        | TokenKind::Star
        | TokenKind::Slash
        | TokenKind::Percent
        | TokenKind::Power
            if left_type == Type::Integer =>
        {
            Some(Type::Integer)
        }
        _ => None,
    };

    // The operand-equality violation is reported ahead of an operator
    // that fits neither operand
    if left_type != right_type {
        return Err(SemanticError::new(
            SemanticErrorImpl::BinaryOperandMismatch {
                left: left_type,
                right: right_type,
            },
            expr.left.first_token().position,
        ));
    }

    let expr_type = match result {
        Some(expr_type) => expr_type,
        None => {
            return Err(SemanticError::new(
                SemanticErrorImpl::InvalidBinaryOperands {
                    operator: expr.operator.value.clone(),
                    operand: left_type,
                },
                expr.left.first_token().position,
            ))
        }
    };

    Ok(TypedExpr::Binary {
        left: Box::new(left),
        operator: expr.operator.clone(),
        right: Box::new(right),
        expr_type,
    })
}

fn check_conditional_expr(
    checker: &mut TypeChecker,
    expr: &ConditionalExpr,
) -> Result<TypedExpr, SemanticError> {
    // The condition is resolved but its type is deliberately left
    // unconstrained
    let condition = check_expr(checker, &expr.condition)?;
    let true_expr = check_expr(checker, &expr.true_expr)?;
    let false_expr = check_expr(checker, &expr.false_expr)?;

    if true_expr.expr_type() != Type::Boolean
        || true_expr.expr_type() != false_expr.expr_type()
    {
        return Err(SemanticError::new(
            SemanticErrorImpl::ConditionalBranchMismatch {
                true_type: true_expr.expr_type(),
                false_type: false_expr.expr_type(),
            },
            expr.condition.first_token().position,
        ));
    }

    Ok(TypedExpr::Conditional {
        condition: Box::new(condition),
        true_expr: Box::new(true_expr),
        false_expr: Box::new(false_expr),
    })
}

fn check_function_app_expr(
    checker: &mut TypeChecker,
    expr: &FunctionAppExprArg,
) -> Result<TypedExpr, SemanticError> {
    let arg = check_expr(checker, &expr.arg)?;
    if arg.expr_type() != Type::Integer {
        return Err(SemanticError::new(
            SemanticErrorImpl::FunctionArgNotInteger {
                function: expr.function,
                received: arg.expr_type(),
            },
            expr.token.position,
        ));
    }

    Ok(TypedExpr::FunctionAppExpr {
        function: expr.function,
        arg: Box::new(arg),
    })
}

fn check_function_app_index(expr: &FunctionAppIndexArg) -> Result<TypedExpr, SemanticError> {
    // The index argument's components are not revalidated; the
    // application is integer-typed regardless
    Ok(TypedExpr::FunctionAppIndex {
        function: expr.function,
        index: (*expr.index).clone(),
    })
}
