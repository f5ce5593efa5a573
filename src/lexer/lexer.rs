use std::rc::Rc;

use lazy_static::lazy_static;
use regex::Regex;
use tracing::trace;

use crate::{MK_SPAN, MK_TOKEN};

use super::tokens::{lookup_identifier, Token, TokenKind};

lazy_static! {
    static ref SYMBOL_PATTERN: Regex = Regex::new("^[a-zA-Z_][a-zA-Z0-9_]*").unwrap();
    static ref NUMBER_PATTERN: Regex = Regex::new("^[0-9]+").unwrap();
    static ref WHITESPACE_PATTERN: Regex = Regex::new("^\\s+").unwrap();
}

/// Lazily turns a source string into tokens.
///
/// `next_token` keeps returning `EndOfFile` once the input is exhausted. As an
/// iterator the lexer yields the first `EndOfFile` and then stops; `reset`
/// starts the sequence over.
#[derive(Clone, Debug)]
pub struct Lexer {
    source: String,
    pos: usize,
    file: Rc<String>,
    finished: bool,
}

impl Lexer {
    pub fn new(source: String, file: Option<String>) -> Lexer {
        let file_name = if let Some(file) = file {
            Rc::new(file)
        } else {
            Rc::new(String::from("shell"))
        };

        Lexer {
            source,
            pos: 0,
            file: file_name,
            finished: false,
        }
    }

    pub fn file(&self) -> Rc<String> {
        Rc::clone(&self.file)
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn reset(&mut self) {
        self.pos = 0;
        self.finished = false;
    }

    pub fn advance_n(&mut self, n: usize) {
        self.pos += n;
    }

    pub fn at(&self) -> Option<char> {
        self.remainder().chars().next()
    }

    pub fn peek(&self) -> Option<char> {
        let mut chars = self.remainder().chars();
        chars.next();
        chars.next()
    }

    pub fn remainder(&self) -> &str {
        &self.source[self.pos..]
    }

    pub fn at_eof(&self) -> bool {
        self.pos >= self.source.len()
    }

    pub fn next_token(&mut self) -> Token {
        self.skip_whitespace();

        let Some(ch) = self.at() else {
            return MK_TOKEN!(
                TokenKind::EndOfFile,
                String::new(),
                MK_SPAN!(self.pos, self.pos, self.file)
            );
        };

        let token = match ch {
            '=' => self.operator('=', TokenKind::Equal, TokenKind::Assign),
            '!' => self.operator('=', TokenKind::NotEqual, TokenKind::Bang),
            '>' => self.operator('=', TokenKind::GreaterOrEqual, TokenKind::GreaterThan),
            '<' => self.operator('=', TokenKind::LessOrEqual, TokenKind::LessThan),
            '+' => self.single(TokenKind::Plus),
            '-' => self.single(TokenKind::Minus),
            '*' => self.single(TokenKind::Asterisk),
            '/' => self.single(TokenKind::Slash),
            ',' => self.single(TokenKind::Comma),
            ';' => self.single(TokenKind::Semicolon),
            '(' => self.single(TokenKind::LParen),
            ')' => self.single(TokenKind::RParen),
            '{' => self.single(TokenKind::LBrace),
            '}' => self.single(TokenKind::RBrace),
            _ if ch.is_ascii_digit() => self.pattern(&NUMBER_PATTERN, |_| TokenKind::Integer),
            _ if ch == '_' || ch.is_ascii_alphabetic() => {
                self.pattern(&SYMBOL_PATTERN, lookup_identifier)
            }
            _ => self.single(TokenKind::Illegal),
        };

        trace!(token = %token, offset = token.span.start.0, "lexed token");
        token
    }

    fn skip_whitespace(&mut self) {
        let skipped = WHITESPACE_PATTERN
            .find(self.remainder())
            .map_or(0, |matched| matched.end());
        self.advance_n(skipped);
    }

    /// Emits a token for the character under the cursor.
    fn single(&mut self, kind: TokenKind) -> Token {
        let start = self.pos;
        let literal = self.at().map(String::from).unwrap_or_default();
        self.advance_n(literal.len());

        MK_TOKEN!(kind, literal, MK_SPAN!(start, self.pos, self.file))
    }

    /// Emits `double` when the lookahead is `second`, otherwise `single`.
    fn operator(&mut self, second: char, double: TokenKind, single: TokenKind) -> Token {
        if self.peek() != Some(second) {
            return self.single(single);
        }

        let start = self.pos;
        let literal = self.remainder()[..2].to_string();
        self.advance_n(2);

        MK_TOKEN!(double, literal, MK_SPAN!(start, self.pos, self.file))
    }

    /// Emits the maximal run matched by `regex`, classified by `classify`.
    fn pattern(&mut self, regex: &Regex, classify: fn(&str) -> TokenKind) -> Token {
        let start = self.pos;
        let literal = regex
            .find(self.remainder())
            .map(|matched| matched.as_str().to_string())
            .unwrap_or_default();

        if literal.is_empty() {
            return self.single(TokenKind::Illegal);
        }

        self.advance_n(literal.len());

        MK_TOKEN!(classify(&literal), literal, MK_SPAN!(start, self.pos, self.file))
    }
}

impl Iterator for Lexer {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        if self.finished {
            return None;
        }

        let token = self.next_token();
        if token.kind == TokenKind::EndOfFile {
            self.finished = true;
        }

        Some(token)
    }
}

pub fn tokenize(source: String, file: Option<String>) -> Vec<Token> {
    Lexer::new(source, file).collect()
}
