use crate::{
    ast::{
        ast::Expr,
        expressions::{BooleanExpr, IdentifierExpr, InfixExpr, IntegerExpr, PrefixExpr},
    },
    errors::errors::ErrorImpl,
    lexer::tokens::TokenKind,
};

use super::{lookups::BindingPower, parser::Parser};

pub fn parse_expr(parser: &mut Parser, bp: BindingPower) -> Option<Expr> {
    let position = parser.get_position();
    if !parser.enter_expression(position) {
        return None;
    }
    // Levels opened by this call: its own plus one per operator folded into lhs
    let mut levels = 1;

    // First parse NUD
    let token_kind = parser.current_token_kind();
    let Some(nud) = parser.get_nud_lookup().get(&token_kind).copied() else {
        let position = parser.get_position();
        parser.record_error(ErrorImpl::MissingPrefixHandler { kind: token_kind }, position);
        parser.leave_expression(levels);
        return None;
    };

    let mut left = nud(parser);

    // While the next operator binds tighter than bp, it takes lhs as its left operand
    while !parser.peek_token_is(TokenKind::Semicolon) && bp < parser.peek_binding_power() {
        let Some(led) = parser.get_led_lookup().get(&parser.peek_token_kind()).copied() else {
            break;
        };

        let position = parser.peek_token().span.start.clone();
        if !parser.enter_expression(position) {
            break;
        }
        levels += 1;

        parser.advance();
        left = led(parser, left);
    }

    parser.leave_expression(levels);
    Some(left)
}

pub fn parse_identifier_expr(parser: &mut Parser) -> Expr {
    Expr::Identifier(IdentifierExpr::new(parser.current_token().clone()))
}

pub fn parse_integer_expr(parser: &mut Parser) -> Expr {
    let token = parser.current_token().clone();

    let value = match parse_integer_literal(&token.literal) {
        Some(value) => value,
        None => {
            parser.record_error(
                ErrorImpl::NumberParseError {
                    token: token.literal.clone(),
                },
                token.span.start.clone(),
            );
            0
        }
    };

    Expr::Integer(IntegerExpr { token, value })
}

/// Parses the digits of an `Integer` token, detecting the radix from its
/// prefix.
///
/// `0x`/`0X` is hexadecimal, `0o`/`0O` octal, `0b`/`0B` binary and a bare
/// leading `0` followed by more digits is octal. Returns `None` when the text
/// is malformed or does not fit in an `i64`.
pub fn parse_integer_literal(literal: &str) -> Option<i64> {
    let (radix, digits) = match literal.get(..2) {
        Some("0x") | Some("0X") => (16, &literal[2..]),
        Some("0o") | Some("0O") => (8, &literal[2..]),
        Some("0b") | Some("0B") => (2, &literal[2..]),
        _ if literal.len() > 1 && literal.starts_with('0') => (8, &literal[1..]),
        _ => (10, literal),
    };

    if digits.is_empty() || !digits.chars().all(|c| c.is_digit(radix)) {
        return None;
    }

    i64::from_str_radix(digits, radix).ok()
}

pub fn parse_boolean_expr(parser: &mut Parser) -> Expr {
    let token = parser.current_token().clone();

    Expr::Boolean(BooleanExpr {
        value: token.kind == TokenKind::True,
        token,
    })
}

pub fn parse_prefix_expr(parser: &mut Parser) -> Expr {
    let operator = parser.current_token().clone();
    parser.advance();

    let right = parse_expr(parser, BindingPower::Prefix).map(Box::new);

    Expr::Prefix(PrefixExpr { operator, right })
}

pub fn parse_infix_expr(parser: &mut Parser, left: Expr) -> Expr {
    let operator = parser.current_token().clone();
    let bp = parser.current_binding_power();
    parser.advance();

    let right = parse_expr(parser, bp).map(Box::new);

    Expr::Infix(InfixExpr {
        left: Box::new(left),
        operator,
        right,
    })
}
