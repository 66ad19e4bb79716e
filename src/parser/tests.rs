//! Unit tests for the parser module.
//!
//! This module contains tests for parsing the language constructs:
//! - Declarations (variables, images, url/file source-sinks)
//! - Statements (assignment, image input/output)
//! - Expression precedence and associativity
//! - The two selector forms
//! - Syntax error cases

use crate::{
    ast::{
        ast::{Item, Program},
        expressions::Expr,
        statements::{Declaration, Source, Statement},
    },
    errors::errors::SyntaxError,
    lexer::{lexer::tokenize, tokens::TokenKind},
};

use super::parser::parse;

fn parse_source_text(source: &str) -> Result<Program, SyntaxError> {
    let tokens = tokenize(source.to_string()).unwrap();
    parse(tokens)
}

fn assignment_expr(program: &Program) -> &Expr {
    match &program.items[0] {
        Item::Statement(Statement::Assign(assign)) => &assign.expr,
        item => panic!("expected an assignment, got {:?}", item),
    }
}

#[test]
fn test_parse_empty_program() {
    let program = parse_source_text("prog").unwrap();

    assert_eq!(program.name, "prog");
    assert!(program.items.is_empty());
}

#[test]
fn test_parse_program_name_required() {
    assert!(parse_source_text("").is_err());
    assert!(parse_source_text("int x;").is_err());
}

#[test]
fn test_parse_variable_declarations() {
    let program = parse_source_text("p int v; boolean b = true;").unwrap();

    assert_eq!(program.items.len(), 2);
    match &program.items[0] {
        Item::Declaration(Declaration::Variable(declaration)) => {
            assert_eq!(declaration.type_token.kind, TokenKind::KwInt);
            assert_eq!(declaration.name, "v");
            assert!(declaration.initializer.is_none());
        }
        item => panic!("expected a variable declaration, got {:?}", item),
    }
    match &program.items[1] {
        Item::Declaration(Declaration::Variable(declaration)) => {
            assert_eq!(declaration.type_token.kind, TokenKind::KwBoolean);
            assert!(matches!(declaration.initializer, Some(Expr::BoolLit(_))));
        }
        item => panic!("expected a variable declaration, got {:?}", item),
    }
}

#[test]
fn test_parse_predefined_names_not_declarable() {
    // `x` is its own token kind, never an identifier
    assert!(parse_source_text("p int x;").is_err());
    assert!(parse_source_text("p image r;").is_err());
}

#[test]
fn test_parse_image_declaration_forms() {
    let program = parse_source_text("p image i;").unwrap();
    match &program.items[0] {
        Item::Declaration(Declaration::Image(declaration)) => {
            assert!(declaration.size.is_none());
            assert!(declaration.source.is_none());
        }
        item => panic!("expected an image declaration, got {:?}", item),
    }

    let program = parse_source_text("p image [10,20] i <- \"cat.png\";").unwrap();
    match &program.items[0] {
        Item::Declaration(Declaration::Image(declaration)) => {
            assert!(declaration.size.is_some());
            assert!(matches!(declaration.source, Some(Source::StringLiteral(_))));
        }
        item => panic!("expected an image declaration, got {:?}", item),
    }
}

#[test]
fn test_parse_image_declaration_requires_both_sizes() {
    assert!(parse_source_text("p image [10] i;").is_err());
    assert!(parse_source_text("p image [,20] i;").is_err());
}

#[test]
fn test_parse_source_sink_declaration_forms() {
    let program =
        parse_source_text("p url u = \"https://example.com\"; file f = \"out.png\"; file g = f; int n; url v = @ n + 1;")
            .unwrap();

    match &program.items[2] {
        Item::Declaration(Declaration::SourceSink(declaration)) => {
            assert!(matches!(declaration.source, Source::Ident(_)));
        }
        item => panic!("expected a source-sink declaration, got {:?}", item),
    }
    match &program.items[4] {
        Item::Declaration(Declaration::SourceSink(declaration)) => {
            assert!(matches!(declaration.source, Source::CommandLineParam(_)));
        }
        item => panic!("expected a source-sink declaration, got {:?}", item),
    }
}

#[test]
fn test_parse_statement_disambiguation() {
    let program = parse_source_text("p i -> SCREEN; i <- \"a.png\"; i = 1;").unwrap();

    assert!(matches!(
        program.items[0],
        Item::Statement(Statement::Out(_))
    ));
    assert!(matches!(program.items[1], Item::Statement(Statement::In(_))));
    assert!(matches!(
        program.items[2],
        Item::Statement(Statement::Assign(_))
    ));
}

#[test]
fn test_parse_statement_bad_follow_token_fails() {
    assert!(parse_source_text("p i + 1;").is_err());
    assert!(parse_source_text("p i ;").is_err());
}

#[test]
fn test_parse_precedence_multiplication_under_addition() {
    let program = parse_source_text("p q = 1 + 2 * 3;").unwrap();

    match assignment_expr(&program) {
        Expr::Binary(add) => {
            assert_eq!(add.operator.kind, TokenKind::Plus);
            assert!(matches!(*add.left, Expr::IntLit(_)));
            match &*add.right {
                Expr::Binary(mul) => assert_eq!(mul.operator.kind, TokenKind::Star),
                expr => panic!("expected multiplication on the right, got {:?}", expr),
            }
        }
        expr => panic!("expected an addition at the top, got {:?}", expr),
    }
}

#[test]
fn test_parse_subtraction_left_associates() {
    let program = parse_source_text("p q = 10 - 3 - 2;").unwrap();

    match assignment_expr(&program) {
        Expr::Binary(outer) => {
            assert_eq!(outer.operator.kind, TokenKind::Dash);
            // ((10 - 3) - 2), never (10 - (3 - 2))
            assert!(matches!(*outer.left, Expr::Binary(_)));
            assert!(matches!(*outer.right, Expr::IntLit(_)));
        }
        expr => panic!("expected a subtraction at the top, got {:?}", expr),
    }
}

#[test]
fn test_parse_grouping_overrides_precedence() {
    let program = parse_source_text("p q = (1 + 2) * 3;").unwrap();

    match assignment_expr(&program) {
        Expr::Binary(mul) => {
            assert_eq!(mul.operator.kind, TokenKind::Star);
            assert!(matches!(*mul.left, Expr::Binary(_)));
        }
        expr => panic!("expected a multiplication at the top, got {:?}", expr),
    }
}

#[test]
fn test_parse_ternary_right_associates() {
    let program = parse_source_text("p q = true ? false ? 1 : 2 : 3;").unwrap();

    match assignment_expr(&program) {
        Expr::Conditional(outer) => {
            assert!(matches!(*outer.condition, Expr::BoolLit(_)));
            assert!(matches!(*outer.true_expr, Expr::Conditional(_)));
            assert!(matches!(*outer.false_expr, Expr::IntLit(_)));
        }
        expr => panic!("expected a conditional at the top, got {:?}", expr),
    }
}

#[test]
fn test_parse_logical_levels() {
    // || binds looser than &&: a || b && c is a || (b && c)
    let program = parse_source_text("p q = a || b && c;").unwrap();

    match assignment_expr(&program) {
        Expr::Binary(or) => {
            assert_eq!(or.operator.kind, TokenKind::Or);
            match &*or.right {
                Expr::Binary(and) => assert_eq!(and.operator.kind, TokenKind::And),
                expr => panic!("expected && on the right, got {:?}", expr),
            }
        }
        expr => panic!("expected || at the top, got {:?}", expr),
    }
}

#[test]
fn test_parse_equality_binds_looser_than_relational() {
    // a == b < c is a == (b < c)
    let program = parse_source_text("p q = a == b < c;").unwrap();

    match assignment_expr(&program) {
        Expr::Binary(eq) => {
            assert_eq!(eq.operator.kind, TokenKind::Equals);
            assert!(matches!(*eq.right, Expr::Binary(_)));
        }
        expr => panic!("expected == at the top, got {:?}", expr),
    }
}

#[test]
fn test_parse_unary_chains() {
    let program = parse_source_text("p q = !-3;").unwrap();

    match assignment_expr(&program) {
        Expr::Unary(not) => {
            assert_eq!(not.operator.kind, TokenKind::Not);
            match &*not.expr {
                Expr::Unary(minus) => assert_eq!(minus.operator.kind, TokenKind::Dash),
                expr => panic!("expected nested unary, got {:?}", expr),
            }
        }
        expr => panic!("expected unary at the top, got {:?}", expr),
    }
}

#[test]
fn test_parse_unary_binds_tighter_than_binary() {
    // -2 * 3 is (-2) * 3
    let program = parse_source_text("p q = -2 * 3;").unwrap();

    match assignment_expr(&program) {
        Expr::Binary(mul) => {
            assert_eq!(mul.operator.kind, TokenKind::Star);
            assert!(matches!(*mul.left, Expr::Unary(_)));
        }
        expr => panic!("expected multiplication at the top, got {:?}", expr),
    }
}

#[test]
fn test_parse_pixel_selector_expression() {
    let program = parse_source_text("p q = img[3,4];").unwrap();

    match assignment_expr(&program) {
        Expr::PixelSelector(selector) => {
            assert_eq!(selector.name, "img");
            assert!(selector.index.is_some());
        }
        expr => panic!("expected a pixel selector, got {:?}", expr),
    }
}

#[test]
fn test_parse_predefined_name_rejects_selector() {
    // Only identifiers carry a pixel selector
    assert!(parse_source_text("p q = x[1,2];").is_err());
}

#[test]
fn test_parse_function_application_forms() {
    let program = parse_source_text("p q = sin(3); q = abs[1,2];").unwrap();

    assert!(matches!(
        assignment_expr(&program),
        Expr::FunctionAppExpr(_)
    ));
    match &program.items[1] {
        Item::Statement(Statement::Assign(assign)) => {
            assert!(matches!(assign.expr, Expr::FunctionAppIndex(_)));
        }
        item => panic!("expected an assignment, got {:?}", item),
    }

    assert!(parse_source_text("p q = sin 3;").is_err());
}

#[test]
fn test_parse_lhs_selectors() {
    let program = parse_source_text("p i[[x,y]] = 3; i[[r,a]] = 4;").unwrap();
    assert_eq!(program.items.len(), 2);

    // Only the two literal pairs are accepted on the left-hand side
    assert!(parse_source_text("p i[[x,a]] = 3;").is_err());
    assert!(parse_source_text("p i[[y,x]] = 3;").is_err());
    assert!(parse_source_text("p i[[r,A]] = 3;").is_err());
    assert!(parse_source_text("p i[[1,2]] = 3;").is_err());
    assert!(parse_source_text("p i[x,y] = 3;").is_err());
}

#[test]
fn test_parse_power_operator_has_no_production() {
    // ** is lexed but no grammar rule consumes it
    assert!(parse_source_text("p q = 2 ** 3;").is_err());
}

#[test]
fn test_parse_missing_semicolon() {
    assert!(parse_source_text("p int v = 42").is_err());
}

#[test]
fn test_parse_stray_token_at_end() {
    let error = parse_source_text("p int v; )").err().unwrap();
    assert_eq!(error.error_name(), "ExpectedToken");
}

#[test]
fn test_parse_error_carries_token_position() {
    let error = parse_source_text("p\nint = 3;").err().unwrap();

    assert_eq!(error.position().line, 2);
    assert_eq!(error.position().column, 5);
}

#[test]
fn test_parse_int_literal_overflow() {
    let error = parse_source_text("p q = 99999999999;").err().unwrap();
    assert_eq!(error.error_name(), "NumberParseError");
}

#[test]
fn test_parse_is_deterministic() {
    let source = "p image [10,20] i <- \"cat.png\"; i[[x,y]] = x + y * 2; i -> SCREEN;";

    let first = parse_source_text(source).unwrap();
    let second = parse_source_text(source).unwrap();

    assert_eq!(format!("{:?}", first), format!("{:?}", second));
}
