use lazy_static::lazy_static;
use std::{collections::HashMap, fmt::Display};

use crate::Span;

lazy_static! {
    pub static ref RESERVED_LOOKUP: HashMap<&'static str, TokenKind> = {
        let mut map = HashMap::new();
        map.insert("func", TokenKind::Function);
        map.insert("var", TokenKind::Var);
        map.insert("return", TokenKind::Return);
        map.insert("break", TokenKind::Break);
        map.insert("if", TokenKind::If);
        map.insert("else", TokenKind::Else);
        map.insert("blankout", TokenKind::BlankOut);
        map.insert("blankin", TokenKind::BlankIn);
        map.insert("true", TokenKind::True);
        map.insert("false", TokenKind::False);
        map
    };
}

/// Classifies an identifier-shaped word as a keyword or a plain identifier.
pub fn lookup_identifier(word: &str) -> TokenKind {
    RESERVED_LOOKUP
        .get(word)
        .copied()
        .unwrap_or(TokenKind::Identifier)
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum TokenKind {
    Illegal,
    EndOfFile,

    Identifier,
    Integer,

    Assign,         // =
    Plus,           // +
    Minus,          // -
    Asterisk,       // *
    Slash,          // /
    LessThan,       // <
    GreaterThan,    // >
    Bang,           // !
    Equal,          // ==
    NotEqual,       // !=
    GreaterOrEqual, // >=
    LessOrEqual,    // <=

    Comma,
    Semicolon,
    LParen,
    RParen,
    LBrace,
    RBrace,

    // Reserved
    Function,
    Var,
    Return,
    Break,
    If,
    Else,
    BlankOut,
    BlankIn,
    True,
    False,
}

impl TokenKind {
    /// The name used for this kind in diagnostics.
    pub fn name(&self) -> &'static str {
        match self {
            TokenKind::Illegal => "ILLEGAL",
            TokenKind::EndOfFile => "EOF",
            TokenKind::Identifier => "IDENT",
            TokenKind::Integer => "INT",
            TokenKind::Assign => "=",
            TokenKind::Plus => "+",
            TokenKind::Minus => "-",
            TokenKind::Asterisk => "*",
            TokenKind::Slash => "/",
            TokenKind::LessThan => "<",
            TokenKind::GreaterThan => ">",
            TokenKind::Bang => "!",
            TokenKind::Equal => "==",
            TokenKind::NotEqual => "!=",
            TokenKind::GreaterOrEqual => ">=",
            TokenKind::LessOrEqual => "<=",
            TokenKind::Comma => ",",
            TokenKind::Semicolon => ";",
            TokenKind::LParen => "(",
            TokenKind::RParen => ")",
            TokenKind::LBrace => "{",
            TokenKind::RBrace => "}",
            TokenKind::Function => "FUNCTION",
            TokenKind::Var => "VAR",
            TokenKind::Return => "RETURN",
            TokenKind::Break => "BREAK",
            TokenKind::If => "IF",
            TokenKind::Else => "ELSE",
            TokenKind::BlankOut => "BLANKOUT",
            TokenKind::BlankIn => "BLANKIN",
            TokenKind::True => "TRUE",
            TokenKind::False => "FALSE",
        }
    }
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub literal: String,
    pub span: Span,
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_one_of_many(&[
            TokenKind::Identifier,
            TokenKind::Integer,
            TokenKind::Illegal,
        ]) {
            write!(f, "{} ({})", self.kind, self.literal)
        } else {
            write!(f, "{}", self.kind)
        }
    }
}

impl Token {
    fn is_one_of_many(&self, kinds: &[TokenKind]) -> bool {
        kinds.contains(&self.kind)
    }
}
