use crate::{
    ast::{
        ast::Item,
        expressions::{Expr, PredefinedNameExpr},
        statements::{
            AssignStmt, CommandLineParamSource, Declaration, IdentSink, IdentSource, ImageDecl,
            Index, InStmt, Lhs, OutStmt, ScreenSink, Sink, Source, SourceSinkDecl, Statement,
            StringLiteralSource, VariableDecl,
        },
    },
    errors::errors::{SyntaxError, SyntaxErrorImpl},
    lexer::tokens::{PredefinedName, Token, TokenKind},
};

use super::{
    expr::{parse_expr, parse_selector},
    lookups::BindingPower,
    parser::Parser,
};

/// `("int"|"boolean") IDENTIFIER ("=" Expression)?`
pub fn parse_variable_declaration(parser: &mut Parser) -> Result<Item, SyntaxError> {
    let type_token = parser.advance().clone();

    let error = SyntaxError::new(
        SyntaxErrorImpl::UnexpectedTokenDetailed {
            token: parser.current_token().value.clone(),
            message: String::from("expected identifier during variable declaration"),
        },
        parser.current_token().position,
    );
    let name = parser.expect_error(TokenKind::Identifier, Some(error))?.value;

    let initializer = if parser.current_token_kind() == TokenKind::Assign {
        parser.advance();
        Some(parse_expr(parser, BindingPower::Default)?)
    } else {
        None
    };

    Ok(Item::Declaration(Declaration::Variable(VariableDecl {
        type_token,
        name,
        initializer,
    })))
}

/// `"image" ("[" Expression "," Expression "]")? IDENTIFIER ("<-" Source)?`
pub fn parse_image_declaration(parser: &mut Parser) -> Result<Item, SyntaxError> {
    let token = parser.advance().clone();

    let size = if parser.current_token_kind() == TokenKind::OpenBracket {
        parser.advance();
        let x_size = parse_expr(parser, BindingPower::Default)?;
        parser.expect(TokenKind::Comma)?;
        let y_size = parse_expr(parser, BindingPower::Default)?;
        parser.expect(TokenKind::CloseBracket)?;
        Some((x_size, y_size))
    } else {
        None
    };

    let name = parser.expect(TokenKind::Identifier)?.value;

    let source = if parser.current_token_kind() == TokenKind::LArrow {
        parser.advance();
        Some(parse_source(parser)?)
    } else {
        None
    };

    Ok(Item::Declaration(Declaration::Image(ImageDecl {
        token,
        size,
        name,
        source,
    })))
}

/// `("url"|"file") IDENTIFIER "=" Source`
pub fn parse_source_sink_declaration(parser: &mut Parser) -> Result<Item, SyntaxError> {
    let type_token = parser.advance().clone();

    let name = parser.expect(TokenKind::Identifier)?.value;
    parser.expect(TokenKind::Assign)?;
    let source = parse_source(parser)?;

    Ok(Item::Declaration(Declaration::SourceSink(SourceSinkDecl {
        type_token,
        name,
        source,
    })))
}

/// `STRING_LITERAL | "@" Expression | IDENTIFIER`
pub fn parse_source(parser: &mut Parser) -> Result<Source, SyntaxError> {
    match parser.current_token_kind() {
        TokenKind::StringLit => {
            let token = parser.advance().clone();
            Ok(Source::StringLiteral(StringLiteralSource {
                value: token.value.clone(),
                token,
            }))
        }
        TokenKind::At => {
            let token = parser.advance().clone();
            let param_num = parse_expr(parser, BindingPower::Default)?;
            Ok(Source::CommandLineParam(CommandLineParamSource {
                param_num: Box::new(param_num),
                token,
            }))
        }
        TokenKind::Identifier => {
            let token = parser.advance().clone();
            Ok(Source::Ident(IdentSource {
                name: token.value.clone(),
                token,
            }))
        }
        _ => Err(SyntaxError::new(
            SyntaxErrorImpl::UnexpectedTokenDetailed {
                token: parser.current_token().value.clone(),
                message: String::from("expected a string literal, `@` or identifier as source"),
            },
            parser.current_token().position,
        )),
    }
}

/// `IDENTIFIER | "SCREEN"`
pub fn parse_sink(parser: &mut Parser) -> Result<Sink, SyntaxError> {
    match parser.current_token_kind() {
        TokenKind::Identifier => {
            let token = parser.advance().clone();
            Ok(Sink::Ident(IdentSink {
                name: token.value.clone(),
                token,
            }))
        }
        TokenKind::KwScreen => {
            let token = parser.advance().clone();
            Ok(Sink::Screen(ScreenSink { token }))
        }
        _ => Err(SyntaxError::new(
            SyntaxErrorImpl::UnexpectedTokenDetailed {
                token: parser.current_token().value.clone(),
                message: String::from("expected identifier or `SCREEN` as sink"),
            },
            parser.current_token().position,
        )),
    }
}

/// A statement starting with an identifier. The token right after it
/// decides everything: `->` output, `<-` input, `[` or `=` assignment.
pub fn parse_ident_statement(parser: &mut Parser) -> Result<Item, SyntaxError> {
    let ident = parser.advance().clone();

    match parser.current_token_kind() {
        TokenKind::RArrow => {
            parser.advance();
            let sink = parse_sink(parser)?;
            Ok(Item::Statement(Statement::Out(OutStmt {
                name: ident.value.clone(),
                token: ident,
                sink,
            })))
        }
        TokenKind::LArrow => {
            parser.advance();
            let source = parse_source(parser)?;
            Ok(Item::Statement(Statement::In(InStmt {
                name: ident.value.clone(),
                token: ident,
                source,
            })))
        }
        TokenKind::OpenBracket | TokenKind::Assign => {
            let lhs = parse_lhs(parser, ident)?;
            parser.expect(TokenKind::Assign)?;
            let expr = parse_expr(parser, BindingPower::Default)?;
            Ok(Item::Statement(Statement::Assign(AssignStmt { lhs, expr })))
        }
        _ => Err(SyntaxError::new(
            SyntaxErrorImpl::UnexpectedTokenDetailed {
                token: parser.current_token().value.clone(),
                message: String::from("expected `->`, `<-`, `[` or `=` after identifier"),
            },
            parser.current_token().position,
        )),
    }
}

fn parse_lhs(parser: &mut Parser, ident: Token) -> Result<Lhs, SyntaxError> {
    let index = if parser.current_token_kind() == TokenKind::OpenBracket {
        parser.advance();
        let index = parse_lhs_selector(parser)?;
        parser.expect(TokenKind::CloseBracket)?;
        Some(index)
    } else {
        None
    };

    Ok(Lhs {
        name: ident.value.clone(),
        token: ident,
        index,
    })
}

/// The inner selector of an assignment target. Unlike the general
/// selector this only accepts the literal pairs `[x,y]` and `[r,a]`.
fn parse_lhs_selector(parser: &mut Parser) -> Result<Index, SyntaxError> {
    parser.expect(TokenKind::OpenBracket)?;

    let index = match parser.current_token_kind() {
        TokenKind::Predefined(PredefinedName::X) => {
            parse_fixed_selector(parser, PredefinedName::X, PredefinedName::Y)?
        }
        TokenKind::Predefined(PredefinedName::R) => {
            parse_fixed_selector(parser, PredefinedName::R, PredefinedName::A)?
        }
        _ => {
            return Err(SyntaxError::new(
                SyntaxErrorImpl::UnexpectedTokenDetailed {
                    token: parser.current_token().value.clone(),
                    message: String::from("expected `x` or `r` in assignment selector"),
                },
                parser.current_token().position,
            ))
        }
    };

    parser.expect(TokenKind::CloseBracket)?;
    Ok(index)
}

fn parse_fixed_selector(
    parser: &mut Parser,
    first: PredefinedName,
    second: PredefinedName,
) -> Result<Index, SyntaxError> {
    let first_token = parser.expect(TokenKind::Predefined(first))?;
    parser.expect(TokenKind::Comma)?;
    let second_token = parser.expect(TokenKind::Predefined(second))?;

    Ok(Index {
        e0: Expr::PredefinedName(PredefinedNameExpr {
            name: first,
            token: first_token,
        }),
        e1: Expr::PredefinedName(PredefinedNameExpr {
            name: second,
            token: second_token,
        }),
    })
}
