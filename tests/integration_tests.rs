//! Integration tests for the front end.
//!
//! These tests verify that the complete pipeline works correctly from
//! source text through tokenization, parsing and type checking, and
//! that each phase fails fast with a positioned error.

use pixlc::{
    lexer::lexer::tokenize,
    parser::parser::parse,
    type_checker::{type_checker::type_check, typed_ast::TypedProgram},
};

fn front_end(source: &str) -> Result<TypedProgram, pixlc::errors::errors::CompilerError> {
    let tokens = tokenize(source.to_string())?;
    let program = parse(tokens)?;
    let typed = type_check(&program)?;
    Ok(typed)
}

#[test]
fn test_full_pipeline_on_representative_program() {
    let source = r#"demo
int n = 3;
boolean on = n > 0 && n < 100;
image [2 * 8, 16] img <- "https://example.com/cat.png";
image copy;
file out = "result.png";
url remote = "https://example.com/upload";
copy = img;
copy[[x,y]] = img;
copy[[r,a]] = img;
n = abs(n - 4) + img[cart_x[r,a], cart_y[r,a]];
n <- @ 0;
img -> out;
copy -> SCREEN;
on -> SCREEN;
"#;

    let typed = front_end(source).unwrap();
    assert_eq!(typed.name, "demo");
    assert_eq!(typed.items.len(), 14);
}

#[test]
fn test_pipeline_reports_lexer_error() {
    let error = front_end("p\nint ~v;").err().unwrap();

    assert_eq!(error.error_name(), "UnrecognisedToken");
    assert_eq!(error.position().line, 2);
    assert_eq!(error.position().column, 5);
}

#[test]
fn test_pipeline_reports_parser_error() {
    let error = front_end("p int v = ;").err().unwrap();

    assert_eq!(error.error_name(), "UnexpectedToken");
    assert_eq!(error.position().column, 11);
}

#[test]
fn test_pipeline_reports_type_error() {
    let error = front_end("p int v = 1; boolean w = v;").err().unwrap();

    assert_eq!(error.error_name(), "DeclarationTypeMismatch");
}

#[test]
fn test_parse_does_not_depend_on_checking() {
    // A program can be ill-typed yet grammatically fine: parsing
    // succeeds and only the checker objects
    let source = "p int v = true;";
    let tokens = tokenize(source.to_string()).unwrap();
    let program = parse(tokens).unwrap();

    assert_eq!(program.items.len(), 1);
    assert!(type_check(&program).is_err());
}

#[test]
fn test_checking_same_ast_twice_is_independent() {
    // The symbol table lives in the checker, not the AST: re-checking
    // a program must not see stale declarations
    let source = "p int v = 1; v -> SCREEN;";
    let tokens = tokenize(source.to_string()).unwrap();
    let program = parse(tokens).unwrap();

    assert!(type_check(&program).is_ok());
    assert!(type_check(&program).is_ok());
}

#[test]
fn test_front_end_is_deterministic() {
    let source = "p image i; image j; i[[x,y]] = j; i -> SCREEN;";

    let first = front_end(source).unwrap();
    let second = front_end(source).unwrap();

    assert_eq!(format!("{:?}", first), format!("{:?}", second));
}

#[test]
fn test_first_error_wins() {
    // Two violations: `w` undeclared (first) and a type mismatch
    // (second). Only the first is ever reported
    let error = front_end("p int v = w; int q = true;").err().unwrap();

    assert_eq!(error.error_name(), "NotDeclared");
}
