//! Parser implementation for building the Abstract Syntax Tree.
//!
//! This module contains the main Parser struct and the `parse` entry
//! point. Expression parsing goes through NUD/LED handler tables with
//! binding powers for precedence; declarations and statements dispatch
//! through an item handler table keyed on their leading token.

use std::collections::HashMap;

use crate::{
    ast::ast::Program,
    errors::errors::{SyntaxError, SyntaxErrorImpl},
    lexer::tokens::{Token, TokenKind},
};

use super::lookups::{
    create_token_lookups, BPLookup, BindingPower, ItemHandler, ItemLookup, LEDHandler, LEDLookup,
    NUDHandler, NUDLookup,
};

/// The main parser structure that maintains parsing state.
///
/// Holds the token stream, the current position, and the lookup tables
/// for item, prefix and infix parsing. The parser always has exactly one
/// token of lookahead: `current_token` peeks it, `advance` consumes it.
pub struct Parser {
    /// The list of tokens to parse, terminated by an EOF token
    tokens: Vec<Token>,
    /// Current position in the token stream
    pos: usize,
    /// Lookup table for declaration/statement handlers
    item_lookup: ItemLookup,
    /// Lookup table for null denotation (prefix) expression handlers
    nud_lookup: NUDLookup,
    /// Lookup table for left denotation (infix) expression handlers
    led_lookup: LEDLookup,
    /// Lookup table for expression binding powers (precedence)
    binding_power_lookup: BPLookup,
}

impl Parser {
    pub fn new(tokens: Vec<Token>) -> Self {
        Parser {
            tokens,
            pos: 0,
            item_lookup: HashMap::new(),
            nud_lookup: HashMap::new(),
            led_lookup: HashMap::new(),
            binding_power_lookup: HashMap::new(),
        }
    }

    /// Returns the current token without advancing.
    pub fn current_token(&self) -> &Token {
        // The token vector always ends with EOF and EOF is never consumed,
        // so the position stays in bounds.
        &self.tokens[self.pos.min(self.tokens.len() - 1)]
    }

    /// Returns the kind of the current token.
    pub fn current_token_kind(&self) -> TokenKind {
        self.current_token().kind
    }

    /// Advances to the next token and returns the consumed token.
    pub fn advance(&mut self) -> &Token {
        self.pos += 1;
        &self.tokens[self.pos - 1]
    }

    /// Expects a token of the specified kind, with optional custom error.
    pub fn expect_error(
        &mut self,
        expected_kind: TokenKind,
        error: Option<SyntaxError>,
    ) -> Result<Token, SyntaxError> {
        if self.current_token_kind() != expected_kind {
            let token = self.current_token();
            match error {
                Some(error) => Err(error),
                None => Err(SyntaxError::new(
                    SyntaxErrorImpl::ExpectedToken {
                        expected: expected_kind.to_string(),
                        token: token.value.clone(),
                    },
                    token.position,
                )),
            }
        } else {
            Ok(self.advance().clone())
        }
    }

    /// Expects a token of the specified kind with the default error.
    pub fn expect(&mut self, expected_kind: TokenKind) -> Result<Token, SyntaxError> {
        self.expect_error(expected_kind, None)
    }

    pub fn get_item_lookup(&self) -> &ItemLookup {
        &self.item_lookup
    }

    pub fn get_nud_lookup(&self) -> &NUDLookup {
        &self.nud_lookup
    }

    pub fn get_led_lookup(&self) -> &LEDLookup {
        &self.led_lookup
    }

    pub fn get_bp_lookup(&self) -> &BPLookup {
        &self.binding_power_lookup
    }

    /// Registers a left denotation (infix) handler for a token.
    pub fn led(&mut self, kind: TokenKind, binding_power: BindingPower, led_fn: LEDHandler) {
        self.binding_power_lookup.insert(kind, binding_power);
        self.led_lookup.insert(kind, led_fn);
    }

    /// Registers a null denotation (prefix) handler for a token.
    ///
    /// The binding power is only defaulted: a token that is both infix
    /// and prefix (`+`, `-`) keeps its infix binding power.
    pub fn nud(&mut self, kind: TokenKind, nud_fn: NUDHandler) {
        self.binding_power_lookup
            .entry(kind)
            .or_insert(BindingPower::Primary);
        self.nud_lookup.insert(kind, nud_fn);
    }

    /// Registers a declaration/statement handler for a leading token.
    pub fn item(&mut self, kind: TokenKind, item_fn: ItemHandler) {
        self.item_lookup.insert(kind, item_fn);
    }
}

/// Parses a stream of tokens into a `Program`.
///
/// The program name comes first, then declarations and statements, each
/// terminated by a semicolon, until a token that cannot start either.
/// That token must be EOF; it is checked but never consumed.
pub fn parse(tokens: Vec<Token>) -> Result<Program, SyntaxError> {
    let mut parser = Parser::new(tokens);
    create_token_lookups(&mut parser);

    let name_token = parser.expect(TokenKind::Identifier)?;

    let mut items = vec![];
    loop {
        let handler = match parser.get_item_lookup().get(&parser.current_token_kind()) {
            Some(handler) => *handler,
            None => break,
        };
        items.push(handler(&mut parser)?);
        parser.expect(TokenKind::Semicolon)?;
    }

    if parser.current_token_kind() != TokenKind::EOF {
        return Err(SyntaxError::new(
            SyntaxErrorImpl::ExpectedToken {
                expected: TokenKind::EOF.to_string(),
                token: parser.current_token().value.clone(),
            },
            parser.current_token().position,
        ));
    }

    Ok(Program {
        name: name_token.value.clone(),
        token: name_token,
        items,
    })
}
