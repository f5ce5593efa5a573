//! Parser implementation for building the Abstract Syntax Tree.
//!
//! This module contains the main Parser struct and the program-level entry
//! points. The parser pulls tokens lazily from its lexer and keeps exactly
//! one token of lookahead.
//!
//! It maintains lookup tables for:
//! - NUD (null denotation) handlers for prefix expressions
//! - LED (left denotation) handlers for infix expressions
//!
//! Binding powers live in the static table in `lookups`.

use std::collections::HashMap;

use tracing::debug;

use crate::{
    ast::ast::Program,
    errors::errors::{Error, ErrorImpl},
    lexer::{
        lexer::Lexer,
        tokens::{Token, TokenKind},
    },
    Position, Span, MK_SPAN, MK_TOKEN,
};

use super::{
    lookups::{binding_power, create_token_lookups, BindingPower, LEDHandler, LEDLookup, NUDHandler, NUDLookup},
    stmt::parse_stmt,
};

/// How deeply expressions may nest before the parser gives up on one.
///
/// Parsing, rendering and dropping an expression all recurse once per level.
pub const MAX_EXPRESSION_DEPTH: usize = 256;

/// The main parser structure that maintains parsing state.
///
/// A parser is built for one source string and used once.
pub struct Parser {
    /// The token source
    lexer: Lexer,
    /// The token being parsed
    current: Token,
    /// One token of lookahead
    peek: Token,
    /// Diagnostics in the order they were found
    errors: Vec<Error>,
    /// Lookup table for null denotation (prefix) expression handlers
    nud_lookup: NUDLookup,
    /// Lookup table for left denotation (infix) expression handlers
    led_lookup: LEDLookup,
    /// Maximum number of tokens read from the lexer, if any
    token_limit: Option<usize>,
    tokens_read: usize,
    /// End of file token handed out once the limit was hit
    cutoff: Option<Token>,
    /// Expression levels currently open
    depth: usize,
}

impl Parser {
    /// Creates a new Parser reading from `lexer`.
    ///
    /// Registers all expression handlers and fills the current and peek
    /// tokens.
    pub fn new(lexer: Lexer) -> Self {
        Self::build(lexer, None)
    }

    /// Like [`Parser::new`], but treats everything after the first `limit`
    /// tokens as end of file and records a diagnostic when input is cut off.
    pub fn with_token_limit(lexer: Lexer, limit: usize) -> Self {
        Self::build(lexer, Some(limit))
    }

    fn build(lexer: Lexer, token_limit: Option<usize>) -> Self {
        let file = lexer.file();
        let placeholder = MK_TOKEN!(TokenKind::EndOfFile, String::new(), MK_SPAN!(0, 0, file));

        let mut parser = Parser {
            lexer,
            current: placeholder.clone(),
            peek: placeholder,
            errors: Vec::new(),
            nud_lookup: HashMap::new(),
            led_lookup: HashMap::new(),
            token_limit,
            tokens_read: 0,
            cutoff: None,
            depth: 0,
        };
        create_token_lookups(&mut parser);

        parser.advance();
        parser.advance();
        parser
    }

    /// Returns the current token without advancing.
    pub fn current_token(&self) -> &Token {
        &self.current
    }

    /// Returns the kind of the current token.
    pub fn current_token_kind(&self) -> TokenKind {
        self.current.kind
    }

    /// Returns the lookahead token.
    pub fn peek_token(&self) -> &Token {
        &self.peek
    }

    /// Returns the kind of the lookahead token.
    pub fn peek_token_kind(&self) -> TokenKind {
        self.peek.kind
    }

    pub fn current_token_is(&self, kind: TokenKind) -> bool {
        self.current.kind == kind
    }

    pub fn peek_token_is(&self, kind: TokenKind) -> bool {
        self.peek.kind == kind
    }

    /// Shifts the lookahead into the current token and reads a new lookahead.
    pub fn advance(&mut self) {
        let next = self.read_token();
        self.current = std::mem::replace(&mut self.peek, next);
    }

    fn read_token(&mut self) -> Token {
        if let Some(cutoff) = &self.cutoff {
            return cutoff.clone();
        }

        let token = self.lexer.next_token();
        if token.kind == TokenKind::EndOfFile {
            return token;
        }

        if let Some(limit) = self.token_limit {
            if self.tokens_read >= limit {
                let position = token.span.start.clone();
                self.record_error(ErrorImpl::TokenLimitExceeded { limit }, position.clone());

                let cutoff = MK_TOKEN!(
                    TokenKind::EndOfFile,
                    String::new(),
                    Span {
                        start: position.clone(),
                        end: position
                    }
                );
                self.cutoff = Some(cutoff.clone());
                return cutoff;
            }
        }

        self.tokens_read += 1;
        token
    }

    /// Advances if the lookahead is `kind`; otherwise records an
    /// `UnexpectedToken` diagnostic and stays put.
    ///
    /// # Returns
    ///
    /// Whether the lookahead matched.
    pub fn expect_peek(&mut self, kind: TokenKind) -> bool {
        if self.peek_token_is(kind) {
            self.advance();
            true
        } else {
            self.peek_error(kind);
            false
        }
    }

    fn peek_error(&mut self, expected: TokenKind) {
        let position = self.peek.span.start.clone();
        self.record_error(
            ErrorImpl::UnexpectedToken {
                expected,
                received: self.peek.kind,
            },
            position,
        );
    }

    /// Records a diagnostic. Parsing always continues afterwards.
    pub fn record_error(&mut self, error_impl: ErrorImpl, position: Position) {
        debug!(offset = position.0, "parse error: {}", error_impl);
        self.errors.push(Error::new(error_impl, position));
    }

    /// Opens one expression level.
    ///
    /// Past [`MAX_EXPRESSION_DEPTH`] this records `ExpressionTooDeep` at
    /// `position`, skips the rest of the statement and returns `false`.
    pub fn enter_expression(&mut self, position: Position) -> bool {
        if self.depth >= MAX_EXPRESSION_DEPTH {
            self.record_error(
                ErrorImpl::ExpressionTooDeep {
                    limit: MAX_EXPRESSION_DEPTH,
                },
                position,
            );
            self.skip_expression();
            return false;
        }

        self.depth += 1;
        true
    }

    /// Closes `levels` expression levels opened by [`Parser::enter_expression`].
    pub fn leave_expression(&mut self, levels: usize) {
        self.depth = self.depth.saturating_sub(levels);
    }

    /// Advances until the lookahead ends the statement, leaving the `;` for
    /// the statement to consume.
    fn skip_expression(&mut self) {
        while !self.current_token_is(TokenKind::Semicolon)
            && !self.peek_token_is(TokenKind::Semicolon)
            && !self.peek_token_is(TokenKind::EndOfFile)
        {
            self.advance();
        }
    }

    /// Binding power of the lookahead token.
    pub fn peek_binding_power(&self) -> BindingPower {
        binding_power(self.peek.kind)
    }

    /// Binding power of the current token.
    pub fn current_binding_power(&self) -> BindingPower {
        binding_power(self.current.kind)
    }

    /// Returns a reference to the NUD (null denotation) lookup table.
    pub fn get_nud_lookup(&self) -> &NUDLookup {
        &self.nud_lookup
    }

    /// Returns a reference to the LED (left denotation) lookup table.
    pub fn get_led_lookup(&self) -> &LEDLookup {
        &self.led_lookup
    }

    /// Registers a left denotation (infix) handler for a token.
    pub fn led(&mut self, kind: TokenKind, led_fn: LEDHandler) {
        self.led_lookup.insert(kind, led_fn);
    }

    /// Registers a null denotation (prefix) handler for a token.
    pub fn nud(&mut self, kind: TokenKind, nud_fn: NUDHandler) {
        self.nud_lookup.insert(kind, nud_fn);
    }

    /// Returns the start position of the current token.
    pub fn get_position(&self) -> Position {
        self.current.span.start.clone()
    }

    /// Messages of every diagnostic recorded so far, in order.
    pub fn errors(&self) -> Vec<String> {
        self.errors.iter().map(|error| error.to_string()).collect()
    }

    /// Every diagnostic recorded so far, with positions.
    pub fn diagnostics(&self) -> &[Error] {
        &self.errors
    }

    /// Parses statements until end of file.
    ///
    /// Statements that fail to parse are left out; their diagnostics are
    /// available from [`Parser::errors`].
    pub fn parse_program(&mut self) -> Program {
        let mut program = Program::default();

        while !self.current_token_is(TokenKind::EndOfFile) {
            if let Some(stmt) = parse_stmt(self) {
                program.statements.push(stmt);
            }
            self.advance();
        }

        debug!(
            statements = program.len(),
            errors = self.errors.len(),
            "parsed program"
        );
        program
    }
}

/// Parses a source string into a `Program`.
///
/// This is the main entry point for parsing. It creates a lexer and a
/// parser and runs the parser to the end of the input.
///
/// # Returns
///
/// A tuple containing:
/// - The Parser instance, holding the diagnostics
/// - The root Program, which is unreliable if there are diagnostics
pub fn parse(source: String, file: Option<String>) -> (Parser, Program) {
    let mut parser = Parser::new(Lexer::new(source, file));
    let program = parser.parse_program();

    (parser, program)
}
