use tracing::trace;

use crate::{
    ast::{
        ast::Stmt,
        expressions::IdentifierExpr,
        statements::{ExpressionStmt, ReturnStmt, VarStmt},
    },
    lexer::tokens::TokenKind,
    parser::{expr::parse_expr, lookups::BindingPower},
};

use super::parser::Parser;

pub fn parse_stmt(parser: &mut Parser) -> Option<Stmt> {
    trace!(token = %parser.current_token(), "parsing statement");

    match parser.current_token_kind() {
        TokenKind::Var => parse_var_stmt(parser),
        TokenKind::Return => parse_return_stmt(parser),
        _ => parse_expression_stmt(parser),
    }
}

pub fn parse_var_stmt(parser: &mut Parser) -> Option<Stmt> {
    let token = parser.current_token().clone();

    if !parser.expect_peek(TokenKind::Identifier) {
        return None;
    }
    let name = IdentifierExpr::new(parser.current_token().clone());

    if !parser.expect_peek(TokenKind::Assign) {
        return None;
    }

    // The value is not parsed yet; its tokens are skipped
    skip_to_semicolon(parser);

    Some(Stmt::Var(VarStmt {
        token,
        name,
        value: None,
    }))
}

pub fn parse_return_stmt(parser: &mut Parser) -> Option<Stmt> {
    let token = parser.current_token().clone();
    parser.advance();

    skip_to_semicolon(parser);

    Some(Stmt::Return(ReturnStmt { token, value: None }))
}

pub fn parse_expression_stmt(parser: &mut Parser) -> Option<Stmt> {
    let token = parser.current_token().clone();
    let expression = parse_expr(parser, BindingPower::Lowest);

    if parser.peek_token_is(TokenKind::Semicolon) {
        parser.advance();
    }

    Some(Stmt::Expression(ExpressionStmt { token, expression }))
}

/// Advances until the current token is `;` or end of file.
fn skip_to_semicolon(parser: &mut Parser) {
    while !parser.current_token_is(TokenKind::Semicolon)
        && !parser.current_token_is(TokenKind::EndOfFile)
    {
        parser.advance();
    }
}
