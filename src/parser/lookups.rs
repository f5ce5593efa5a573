use std::collections::HashMap;

use lazy_static::lazy_static;

use crate::{ast::ast::Expr, lexer::tokens::TokenKind};

use super::{expr::*, parser::Parser};

#[derive(PartialEq, PartialOrd, Clone, Copy, Debug)]
pub enum BindingPower {
    Lowest,
    Equals,
    LessGreater,
    Sum,
    Product,
    Prefix,
    Call,
}

pub type NUDHandler = fn(&mut Parser) -> Expr;
pub type LEDHandler = fn(&mut Parser, Expr) -> Expr;

lazy_static! {
    pub static ref BINDING_POWER_LOOKUP: HashMap<TokenKind, BindingPower> = {
        let mut map = HashMap::new();
        map.insert(TokenKind::Equal, BindingPower::Equals);
        map.insert(TokenKind::NotEqual, BindingPower::Equals);
        map.insert(TokenKind::LessThan, BindingPower::LessGreater);
        map.insert(TokenKind::GreaterThan, BindingPower::LessGreater);
        map.insert(TokenKind::Plus, BindingPower::Sum);
        map.insert(TokenKind::Minus, BindingPower::Sum);
        map.insert(TokenKind::Asterisk, BindingPower::Product);
        map.insert(TokenKind::Slash, BindingPower::Product);
        map
    };
}

/// Binding power of `kind` as an infix operator; `Lowest` for anything else.
pub fn binding_power(kind: TokenKind) -> BindingPower {
    BINDING_POWER_LOOKUP
        .get(&kind)
        .copied()
        .unwrap_or(BindingPower::Lowest)
}

pub fn create_token_lookups(parser: &mut Parser) {
    // Equality and relational
    parser.led(TokenKind::Equal, parse_infix_expr);
    parser.led(TokenKind::NotEqual, parse_infix_expr);
    parser.led(TokenKind::LessThan, parse_infix_expr);
    parser.led(TokenKind::GreaterThan, parse_infix_expr);

    // Additive and multiplicative
    parser.led(TokenKind::Plus, parse_infix_expr);
    parser.led(TokenKind::Minus, parse_infix_expr);
    parser.led(TokenKind::Asterisk, parse_infix_expr);
    parser.led(TokenKind::Slash, parse_infix_expr);

    // Literals and unary operators
    parser.nud(TokenKind::Identifier, parse_identifier_expr);
    parser.nud(TokenKind::Integer, parse_integer_expr);
    parser.nud(TokenKind::True, parse_boolean_expr);
    parser.nud(TokenKind::False, parse_boolean_expr);
    parser.nud(TokenKind::Bang, parse_prefix_expr);
    parser.nud(TokenKind::Minus, parse_prefix_expr);
}

// Lookup tables inside parser struct, so each parse owns its own
pub type NUDLookup = HashMap<TokenKind, NUDHandler>;
pub type LEDLookup = HashMap<TokenKind, LEDHandler>;
