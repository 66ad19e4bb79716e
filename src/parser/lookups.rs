use std::collections::HashMap;

use crate::{
    ast::{ast::Item, expressions::Expr},
    errors::errors::SyntaxError,
    lexer::tokens::{FunctionName, PredefinedName, TokenKind},
};

use super::{expr::*, parser::Parser, stmt::*};

/// Operator precedence, lowest to highest. The parse loop only keeps
/// consuming while the next operator binds strictly tighter than the
/// current level, which makes every binary level left-associative.
#[derive(PartialEq, PartialOrd, Clone, Copy, Debug)]
pub enum BindingPower {
    Default,
    Ternary,
    LogicalOr,
    LogicalAnd,
    Equality,
    Relational,
    Additive,
    Multiplicative,
    Unary,
    Primary,
}

pub type ItemHandler = fn(&mut Parser) -> Result<Item, SyntaxError>;
pub type NUDHandler = fn(&mut Parser) -> Result<Expr, SyntaxError>;
pub type LEDHandler = fn(&mut Parser, Expr, BindingPower) -> Result<Expr, SyntaxError>;

pub fn create_token_lookups(parser: &mut Parser) {
    // Ternary (right-associative: the handler parses both branches at
    // Default, so a trailing `?` belongs to the false branch)
    parser.led(TokenKind::Question, BindingPower::Ternary, parse_conditional_expr);

    // Logical
    parser.led(TokenKind::Or, BindingPower::LogicalOr, parse_binary_expr);
    parser.led(TokenKind::And, BindingPower::LogicalAnd, parse_binary_expr);

    // Equality
    parser.led(TokenKind::Equals, BindingPower::Equality, parse_binary_expr);
    parser.led(TokenKind::NotEquals, BindingPower::Equality, parse_binary_expr);

    // Relational
    parser.led(TokenKind::Less, BindingPower::Relational, parse_binary_expr);
    parser.led(TokenKind::LessEquals, BindingPower::Relational, parse_binary_expr);
    parser.led(TokenKind::Greater, BindingPower::Relational, parse_binary_expr);
    parser.led(TokenKind::GreaterEquals, BindingPower::Relational, parse_binary_expr);

    // Additive and multiplicative
    parser.led(TokenKind::Plus, BindingPower::Additive, parse_binary_expr);
    parser.led(TokenKind::Dash, BindingPower::Additive, parse_binary_expr);
    parser.led(TokenKind::Star, BindingPower::Multiplicative, parse_binary_expr);
    parser.led(TokenKind::Slash, BindingPower::Multiplicative, parse_binary_expr);
    parser.led(TokenKind::Percent, BindingPower::Multiplicative, parse_binary_expr);

    // Literals, names and grouping
    parser.nud(TokenKind::IntLit, parse_primary_expr);
    parser.nud(TokenKind::BoolLit, parse_primary_expr);
    parser.nud(TokenKind::OpenParen, parse_grouping_expr);
    parser.nud(TokenKind::Identifier, parse_ident_or_pixel_selector_expr);
    for name in PredefinedName::ALL {
        parser.nud(TokenKind::Predefined(name), parse_predefined_name_expr);
    }
    for function in FunctionName::ALL {
        parser.nud(TokenKind::Function(function), parse_function_app_expr);
    }

    // Prefix
    parser.nud(TokenKind::Plus, parse_prefix_expr);
    parser.nud(TokenKind::Dash, parse_prefix_expr);
    parser.nud(TokenKind::Not, parse_prefix_expr);

    // Declarations and statements
    parser.item(TokenKind::KwInt, parse_variable_declaration);
    parser.item(TokenKind::KwBoolean, parse_variable_declaration);
    parser.item(TokenKind::KwImage, parse_image_declaration);
    parser.item(TokenKind::KwUrl, parse_source_sink_declaration);
    parser.item(TokenKind::KwFile, parse_source_sink_declaration);
    parser.item(TokenKind::Identifier, parse_ident_statement);
}

// Lookup tables inside parser struct, so it's easier
pub type ItemLookup = HashMap<TokenKind, ItemHandler>;
pub type NUDLookup = HashMap<TokenKind, NUDHandler>;
pub type LEDLookup = HashMap<TokenKind, LEDHandler>;
pub type BPLookup = HashMap<TokenKind, BindingPower>;
