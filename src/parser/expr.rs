use crate::{
    ast::{
        expressions::{
            BinaryExpr, BoolLitExpr, ConditionalExpr, Expr, FunctionAppExprArg,
            FunctionAppIndexArg, IdentExpr, IntLitExpr, PixelSelectorExpr, PredefinedNameExpr,
            UnaryExpr,
        },
        statements::Index,
    },
    errors::errors::{SyntaxError, SyntaxErrorImpl},
    lexer::tokens::TokenKind,
};

use super::{lookups::BindingPower, parser::Parser};

pub fn parse_expr(parser: &mut Parser, bp: BindingPower) -> Result<Expr, SyntaxError> {
    // First parse NUD
    let token_kind = parser.current_token_kind();
    let nud_fn = match parser.get_nud_lookup().get(&token_kind) {
        Some(nud_fn) => *nud_fn,
        None => {
            return Err(SyntaxError::new(
                SyntaxErrorImpl::UnexpectedToken {
                    token: parser.current_token().value.clone(),
                },
                parser.current_token().position,
            ))
        }
    };

    let mut left = nud_fn(parser)?;

    // While LED and current BP is greater than BP of current level, continue building lhs
    while *parser
        .get_bp_lookup()
        .get(&parser.current_token_kind())
        .unwrap_or(&BindingPower::Default)
        > bp
    {
        let token_kind = parser.current_token_kind();
        let led_fn = match parser.get_led_lookup().get(&token_kind) {
            Some(led_fn) => *led_fn,
            None => {
                return Err(SyntaxError::new(
                    SyntaxErrorImpl::UnexpectedToken {
                        token: parser.current_token().value.clone(),
                    },
                    parser.current_token().position,
                ))
            }
        };
        let operator_bp = *parser.get_bp_lookup().get(&token_kind).unwrap();

        left = led_fn(parser, left, operator_bp)?;
    }

    Ok(left)
}

pub fn parse_primary_expr(parser: &mut Parser) -> Result<Expr, SyntaxError> {
    match parser.current_token_kind() {
        TokenKind::IntLit => {
            let result = parser.current_token().value.parse();

            match result {
                Ok(value) => {
                    let token = parser.advance().clone();
                    Ok(Expr::IntLit(IntLitExpr { value, token }))
                }
                Err(_) => Err(SyntaxError::new(
                    SyntaxErrorImpl::NumberParseError {
                        token: parser.current_token().value.clone(),
                    },
                    parser.current_token().position,
                )),
            }
        }
        TokenKind::BoolLit => {
            let token = parser.advance().clone();
            Ok(Expr::BoolLit(BoolLitExpr {
                value: token.value == "true",
                token,
            }))
        }
        _ => Err(SyntaxError::new(
            SyntaxErrorImpl::UnexpectedToken {
                token: parser.current_token().value.clone(),
            },
            parser.current_token().position,
        )),
    }
}

pub fn parse_binary_expr(
    parser: &mut Parser,
    left: Expr,
    bp: BindingPower,
) -> Result<Expr, SyntaxError> {
    let operator_token = parser.advance().clone();

    // Parsing the right side at the operator's own level stops at the
    // next same-level operator, folding chains to the left
    let right = parse_expr(parser, bp)?;

    Ok(Expr::Binary(BinaryExpr {
        left: Box::new(left),
        operator: operator_token,
        right: Box::new(right),
    }))
}

pub fn parse_prefix_expr(parser: &mut Parser) -> Result<Expr, SyntaxError> {
    let operator_token = parser.advance().clone();
    let rhs = parse_expr(parser, BindingPower::Unary)?;

    Ok(Expr::Unary(UnaryExpr {
        operator: operator_token,
        expr: Box::new(rhs),
    }))
}

pub fn parse_grouping_expr(parser: &mut Parser) -> Result<Expr, SyntaxError> {
    parser.advance();
    let expr = parse_expr(parser, BindingPower::Default)?;
    parser.expect(TokenKind::CloseParen)?;

    Ok(expr)
}

pub fn parse_conditional_expr(
    parser: &mut Parser,
    condition: Expr,
    _bp: BindingPower,
) -> Result<Expr, SyntaxError> {
    parser.advance();

    let true_expr = parse_expr(parser, BindingPower::Default)?;
    parser.expect(TokenKind::Colon)?;
    let false_expr = parse_expr(parser, BindingPower::Default)?;

    Ok(Expr::Conditional(ConditionalExpr {
        condition: Box::new(condition),
        true_expr: Box::new(true_expr),
        false_expr: Box::new(false_expr),
    }))
}

pub fn parse_predefined_name_expr(parser: &mut Parser) -> Result<Expr, SyntaxError> {
    match parser.current_token_kind() {
        TokenKind::Predefined(name) => {
            let token = parser.advance().clone();
            Ok(Expr::PredefinedName(PredefinedNameExpr { name, token }))
        }
        _ => Err(SyntaxError::new(
            SyntaxErrorImpl::UnexpectedTokenDetailed {
                token: parser.current_token().value.clone(),
                message: String::from("expected a predefined name"),
            },
            parser.current_token().position,
        )),
    }
}

/// `IDENTIFIER` or `IDENTIFIER [ e0 , e1 ]`. Only identifiers may carry
/// a pixel selector; a `[` after any other expression form stays
/// unconsumed and trips the caller's next expectation.
pub fn parse_ident_or_pixel_selector_expr(parser: &mut Parser) -> Result<Expr, SyntaxError> {
    let ident = parser.advance().clone();

    if parser.current_token_kind() == TokenKind::OpenBracket {
        parser.advance();
        let index = parse_selector(parser)?;
        parser.expect(TokenKind::CloseBracket)?;

        return Ok(Expr::PixelSelector(PixelSelectorExpr {
            name: ident.value.clone(),
            index: Some(Box::new(index)),
            token: ident,
        }));
    }

    Ok(Expr::Ident(IdentExpr {
        name: ident.value.clone(),
        token: ident,
    }))
}

/// `fn ( Expression )` or `fn [ e0 , e1 ]` for one of the built-in
/// function names.
pub fn parse_function_app_expr(parser: &mut Parser) -> Result<Expr, SyntaxError> {
    let function = match parser.current_token_kind() {
        TokenKind::Function(function) => function,
        _ => {
            return Err(SyntaxError::new(
                SyntaxErrorImpl::UnexpectedTokenDetailed {
                    token: parser.current_token().value.clone(),
                    message: String::from("expected a function name"),
                },
                parser.current_token().position,
            ))
        }
    };
    let token = parser.advance().clone();

    match parser.current_token_kind() {
        TokenKind::OpenParen => {
            parser.advance();
            let arg = parse_expr(parser, BindingPower::Default)?;
            parser.expect(TokenKind::CloseParen)?;

            Ok(Expr::FunctionAppExpr(FunctionAppExprArg {
                function,
                arg: Box::new(arg),
                token,
            }))
        }
        TokenKind::OpenBracket => {
            parser.advance();
            let index = parse_selector(parser)?;
            parser.expect(TokenKind::CloseBracket)?;

            Ok(Expr::FunctionAppIndex(FunctionAppIndexArg {
                function,
                index: Box::new(index),
                token,
            }))
        }
        _ => Err(SyntaxError::new(
            SyntaxErrorImpl::UnexpectedTokenDetailed {
                token: parser.current_token().value.clone(),
                message: String::from("expected `(` or `[` after function name"),
            },
            parser.current_token().position,
        )),
    }
}

/// The general two-expression selector `e0 , e1` used by pixel selection
/// and index-argument function application.
pub fn parse_selector(parser: &mut Parser) -> Result<Index, SyntaxError> {
    let e0 = parse_expr(parser, BindingPower::Default)?;
    parser.expect(TokenKind::Comma)?;
    let e1 = parse_expr(parser, BindingPower::Default)?;

    Ok(Index { e0, e1 })
}
