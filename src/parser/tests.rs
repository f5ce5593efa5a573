//! Unit tests for the parser module.
//!
//! This module contains tests for parsing:
//! - `var` and `return` statements
//! - Identifier, integer and boolean expressions
//! - Prefix and infix expressions and their precedence
//! - Error collection and recovery

use pretty_assertions::assert_eq;

use crate::{
    ast::{
        ast::{Expr, Node, Program, Stmt},
        expressions::{InfixExpr, PrefixExpr},
    },
    errors::errors::ErrorImpl,
    lexer::{lexer::Lexer, tokens::TokenKind},
};

use super::{
    expr::parse_integer_literal,
    lookups::{binding_power, BindingPower},
    parser::{parse, Parser, MAX_EXPRESSION_DEPTH},
};

fn parse_checked(source: &str) -> Program {
    let (parser, program) = parse(source.to_string(), Some("test.blank".to_string()));
    assert_eq!(parser.errors(), Vec::<String>::new(), "source: {source}");
    program
}

fn only_expression(program: &Program) -> &Expr {
    assert_eq!(program.len(), 1, "program: {program}");
    match &program.statements[0] {
        Stmt::Expression(stmt) => stmt.expression.as_ref().expect("expression parsed"),
        other => panic!("expected expression statement, got {:?}", other),
    }
}

enum Literal {
    Int(i64),
    Ident(&'static str),
    Bool(bool),
}

fn assert_literal(expr: &Expr, expected: &Literal) {
    match (expr, expected) {
        (Expr::Integer(integer), Literal::Int(value)) => {
            assert_eq!(integer.value, *value);
            assert_eq!(integer.token_literal(), value.to_string());
        }
        (Expr::Identifier(identifier), Literal::Ident(name)) => {
            assert_eq!(identifier.value, *name);
            assert_eq!(identifier.token_literal(), *name);
        }
        (Expr::Boolean(boolean), Literal::Bool(value)) => {
            assert_eq!(boolean.value, *value);
            assert_eq!(boolean.token_literal(), value.to_string());
        }
        (other, _) => panic!("unexpected expression {:?}", other),
    }
}

fn as_infix(expr: &Expr) -> &InfixExpr {
    match expr {
        Expr::Infix(infix) => infix,
        other => panic!("expected infix expression, got {:?}", other),
    }
}

fn as_prefix(expr: &Expr) -> &PrefixExpr {
    match expr {
        Expr::Prefix(prefix) => prefix,
        other => panic!("expected prefix expression, got {:?}", other),
    }
}

#[test]
fn test_parse_var_statements() {
    let program = parse_checked(
        "
        var x = 5;
        var y = 10;
        var foobar = 838383;
        ",
    );

    let names = program
        .iter()
        .map(|stmt| match stmt {
            Stmt::Var(var) => {
                assert_eq!(var.token_literal(), "var");
                assert_eq!(var.name.token_literal(), var.name.value);
                assert!(var.value.is_none());
                var.name.value.as_str()
            }
            other => panic!("expected var statement, got {:?}", other),
        })
        .collect::<Vec<_>>();

    assert_eq!(names, vec!["x", "y", "foobar"]);
}

#[test]
fn test_parse_return_statements() {
    let program = parse_checked("return 5;\nreturn 10;\nreturn 993322;\nreturn;");

    assert_eq!(program.len(), 4);
    for stmt in program.iter() {
        assert!(matches!(stmt, Stmt::Return(_)));
        assert_eq!(stmt.token_literal(), "return");
    }
}

#[test]
fn test_parse_identifier_expression() {
    let program = parse_checked("foobar;");

    assert_literal(only_expression(&program), &Literal::Ident("foobar"));
}

#[test]
fn test_parse_integer_expression() {
    let program = parse_checked("190;");

    assert_literal(only_expression(&program), &Literal::Int(190));
}

#[test]
fn test_parse_boolean_expressions() {
    for (source, value) in [("true;", true), ("false;", false)] {
        let program = parse_checked(source);
        assert_literal(only_expression(&program), &Literal::Bool(value));
    }
}

#[test]
fn test_parse_prefix_expressions() {
    let cases = [
        ("!test;", "!", Literal::Ident("test")),
        ("-30;", "-", Literal::Int(30)),
        ("!true;", "!", Literal::Bool(true)),
        ("!false;", "!", Literal::Bool(false)),
    ];

    for (source, operator, operand) in cases {
        let program = parse_checked(source);
        let prefix = as_prefix(only_expression(&program));

        assert_eq!(prefix.token_literal(), operator);
        assert_literal(prefix.right.as_deref().expect("operand parsed"), &operand);
    }
}

#[test]
fn test_parse_infix_expressions() {
    let cases = [
        ("5 - 5;", Literal::Int(5), "-", Literal::Int(5)),
        ("23 * 2;", Literal::Int(23), "*", Literal::Int(2)),
        ("13 + 13;", Literal::Int(13), "+", Literal::Int(13)),
        ("10 / 2;", Literal::Int(10), "/", Literal::Int(2)),
        ("5 > 4;", Literal::Int(5), ">", Literal::Int(4)),
        ("5 < 4;", Literal::Int(5), "<", Literal::Int(4)),
        ("true == true;", Literal::Bool(true), "==", Literal::Bool(true)),
        ("true != false;", Literal::Bool(true), "!=", Literal::Bool(false)),
        ("a == b", Literal::Ident("a"), "==", Literal::Ident("b")),
    ];

    for (source, left, operator, right) in cases {
        let program = parse_checked(source);
        let infix = as_infix(only_expression(&program));

        assert_literal(&infix.left, &left);
        assert_eq!(infix.token_literal(), operator);
        assert_literal(infix.right.as_deref().expect("right parsed"), &right);
    }
}

#[test]
fn test_operator_precedence() {
    let cases = [
        ("2 + 2 * 4 - 5", "((2 + (2 * 4)) - 5)"),
        ("-a * b", "((-a) * b)"),
        ("!-a", "(!(-a))"),
        ("a + b + c", "((a + b) + c)"),
        ("a + b - c", "((a + b) - c)"),
        ("a * b * c", "((a * b) * c)"),
        ("a * b / c", "((a * b) / c)"),
        ("a + b / c", "(a + (b / c))"),
        ("a + b * c + d / e - f", "(((a + (b * c)) + (d / e)) - f)"),
        ("5 > 4 == 3 < 4", "((5 > 4) == (3 < 4))"),
        ("5 < 4 != 3 > 4", "((5 < 4) != (3 > 4))"),
        ("3 + 4 * 5 == 3 * 1 + 4 * 5", "((3 + (4 * 5)) == ((3 * 1) + (4 * 5)))"),
        ("true != false == true", "((true != false) == true)"),
        ("3 + 4; -5 * 5", "(3 + 4)((-5) * 5)"),
    ];

    for (source, expected) in cases {
        assert_eq!(parse_checked(source).to_string(), expected, "source: {source}");
    }
}

#[test]
fn test_precedence_tree_shape() {
    let program = parse_checked("2 + 2 * 4 - 5");

    let minus = as_infix(only_expression(&program));
    assert_eq!(minus.token_literal(), "-");
    assert_literal(minus.right.as_deref().unwrap(), &Literal::Int(5));

    let plus = as_infix(&minus.left);
    assert_eq!(plus.token_literal(), "+");
    assert_literal(&plus.left, &Literal::Int(2));

    let times = as_infix(plus.right.as_deref().unwrap());
    assert_eq!(times.token_literal(), "*");
    assert_literal(&times.left, &Literal::Int(2));
    assert_literal(times.right.as_deref().unwrap(), &Literal::Int(4));
}

#[test]
fn test_semicolons_are_optional_after_expressions() {
    let program = parse_checked("a\nb;\nc");

    assert_eq!(program.len(), 3);
    assert_eq!(program.to_string(), "abc");
}

#[test]
fn test_parse_empty_program() {
    let program = parse_checked("");

    assert!(program.is_empty());
    assert_eq!(program.token_literal(), "");
}

#[test]
fn test_var_missing_identifier() {
    let (parser, program) = parse("var 5 = x;".to_string(), None);

    let errors = parser.errors();
    assert_eq!(
        errors,
        vec![
            "expected next token to be IDENT, got INT instead",
            "no prefix parse function for = found",
        ]
    );
    assert!(matches!(
        parser.diagnostics()[0].get_kind(),
        ErrorImpl::UnexpectedToken {
            expected: TokenKind::Identifier,
            received: TokenKind::Integer,
        }
    ));
    assert!(program.iter().all(|stmt| !matches!(stmt, Stmt::Var(_))));
}

#[test]
fn test_var_missing_assign() {
    let (parser, program) = parse("var x 5;".to_string(), None);

    assert_eq!(parser.errors()[0], "expected next token to be =, got INT instead");
    assert_eq!(parser.diagnostics()[0].get_position().0, 6);
    assert!(program.iter().all(|stmt| !matches!(stmt, Stmt::Var(_))));
}

#[test]
fn test_parsing_continues_after_errors() {
    let (parser, program) = parse("var = 1;\nvar y = 2;\nfoo;".to_string(), None);

    assert!(!parser.errors().is_empty());
    let vars = program
        .iter()
        .filter_map(|stmt| match stmt {
            Stmt::Var(var) => Some(var.name.value.clone()),
            _ => None,
        })
        .collect::<Vec<_>>();
    assert_eq!(vars, vec!["y".to_string()]);
    assert_eq!(program.statements.last().unwrap().to_string(), "foo");
}

#[test]
fn test_missing_prefix_handler() {
    let (parser, program) = parse(")".to_string(), None);

    assert_eq!(parser.errors(), vec!["no prefix parse function for ) found"]);
    match &program.statements[0] {
        Stmt::Expression(stmt) => assert!(stmt.expression.is_none()),
        other => panic!("expected expression statement, got {:?}", other),
    }
}

#[test]
fn test_unsupported_tokens_end_the_expression() {
    let (parser, program) = parse("a >= b".to_string(), None);

    assert_eq!(parser.errors(), vec!["no prefix parse function for >= found"]);
    assert_eq!(program.len(), 3);
    assert_eq!(program.to_string(), "ab");
}

#[test]
fn test_prefix_without_operand() {
    let (parser, program) = parse("-;".to_string(), None);

    assert_eq!(parser.errors(), vec!["no prefix parse function for ; found"]);
    assert_eq!(program.to_string(), "(-)");
}

#[test]
fn test_integer_overflow_keeps_zero_node() {
    let (parser, program) = parse("99999999999999999999;".to_string(), None);

    assert_eq!(
        parser.errors(),
        vec!["Error, 99999999999999999999 is not a number!!"]
    );
    match only_expression(&program) {
        Expr::Integer(integer) => {
            assert_eq!(integer.value, 0);
            assert_eq!(integer.token_literal(), "99999999999999999999");
        }
        other => panic!("expected integer, got {:?}", other),
    }
}

#[test]
fn test_integer_radix_detection() {
    assert_eq!(parse_integer_literal("190"), Some(190));
    assert_eq!(parse_integer_literal("0"), Some(0));
    assert_eq!(parse_integer_literal("010"), Some(8));
    assert_eq!(parse_integer_literal("0x1F"), Some(31));
    assert_eq!(parse_integer_literal("0b101"), Some(5));
    assert_eq!(parse_integer_literal("0o17"), Some(15));
    assert_eq!(parse_integer_literal("9223372036854775807"), Some(i64::MAX));
    assert_eq!(parse_integer_literal("9223372036854775808"), None);
    assert_eq!(parse_integer_literal("09"), None);
    assert_eq!(parse_integer_literal("0x"), None);
    assert_eq!(parse_integer_literal(""), None);
}

#[test]
fn test_octal_literal_error() {
    let (parser, _) = parse("09;".to_string(), None);

    assert_eq!(parser.errors(), vec!["Error, 09 is not a number!!"]);
}

#[test]
fn test_unterminated_statements_stop_at_end_of_file() {
    let (parser, program) = parse("var x = 5 + 5".to_string(), None);
    assert!(parser.errors().is_empty());
    assert_eq!(program.to_string(), "var x = ;");

    let (parser, program) = parse("return x".to_string(), None);
    assert!(parser.errors().is_empty());
    assert_eq!(program.to_string(), "return ;");
}

#[test]
fn test_token_limit() {
    let mut parser = Parser::with_token_limit(Lexer::new("1 + 2 + 3;".to_string(), None), 3);
    let program = parser.parse_program();

    assert_eq!(parser.errors(), vec!["input exceeds the limit of 3 tokens"]);
    assert_eq!(parser.diagnostics()[0].get_position().0, 6);
    assert_eq!(program.to_string(), "(1 + 2)");
}

#[test]
fn test_token_limit_not_hit() {
    let mut parser = Parser::with_token_limit(Lexer::new("1 + 2;".to_string(), None), 4);
    let program = parser.parse_program();

    assert!(parser.errors().is_empty());
    assert_eq!(program.to_string(), "(1 + 2)");
}

#[test]
fn test_nested_prefix_within_depth() {
    let source = format!("{}true;", "!".repeat(200));
    let program = parse_checked(&source);

    assert!(program.to_string().ends_with("true))"));
}

#[test]
fn test_deep_prefix_chain_is_cut_off() {
    let source = format!("{}1;\nx;", "-".repeat(5_000));
    let (parser, program) = parse(source, None);

    assert_eq!(
        parser.errors(),
        vec![format!("expression nested deeper than {} levels", MAX_EXPRESSION_DEPTH)]
    );
    assert!(matches!(
        parser.diagnostics()[0].get_kind(),
        ErrorImpl::ExpressionTooDeep { .. }
    ));
    assert_eq!(parser.diagnostics()[0].get_position().0, MAX_EXPRESSION_DEPTH as u32);
    assert_eq!(program.len(), 2);
    assert!(program.statements[0].to_string().starts_with("(-(-"));
    assert_eq!(program.statements[1].to_string(), "x");
}

#[test]
fn test_long_operator_chain_is_cut_off() {
    let source = format!("{};\ny;", vec!["1"; 5_000].join(" + "));
    let (parser, program) = parse(source, None);

    assert_eq!(
        parser.errors(),
        vec![format!("expression nested deeper than {} levels", MAX_EXPRESSION_DEPTH)]
    );
    assert_eq!(program.len(), 2);
    assert!(program.statements[0].to_string().starts_with("(((1 + 1) + 1)"));
    assert_eq!(program.statements[1].to_string(), "y");
}

#[test]
fn test_reparse_is_identical() {
    let source = "var a = 1; -b * c + d; !true == false; return 0; var = ;";

    let (first_parser, first) = parse(source.to_string(), None);
    let (second_parser, second) = parse(source.to_string(), None);

    assert_eq!(first, second);
    assert_eq!(first_parser.errors(), second_parser.errors());
}

#[test]
fn test_binding_power_table() {
    assert_eq!(binding_power(TokenKind::Plus), BindingPower::Sum);
    assert_eq!(binding_power(TokenKind::Slash), BindingPower::Product);
    assert_eq!(binding_power(TokenKind::NotEqual), BindingPower::Equals);
    assert_eq!(binding_power(TokenKind::GreaterThan), BindingPower::LessGreater);
    assert_eq!(binding_power(TokenKind::GreaterOrEqual), BindingPower::Lowest);
    assert!(BindingPower::Prefix > BindingPower::Product);
    assert!(BindingPower::Call > BindingPower::Prefix);
}

#[test]
fn test_parser_lookahead() {
    let mut parser = Parser::new(Lexer::new("a + b".to_string(), None));

    assert_eq!(parser.current_token_kind(), TokenKind::Identifier);
    assert_eq!(parser.peek_token_kind(), TokenKind::Plus);
    assert!(parser.get_nud_lookup().contains_key(&TokenKind::Minus));
    assert!(parser.get_led_lookup().contains_key(&TokenKind::Minus));
    assert!(!parser.get_led_lookup().contains_key(&TokenKind::Bang));

    parser.advance();
    assert_eq!(parser.current_token().literal, "+");
    assert_eq!(parser.peek_token().literal, "b");
}
