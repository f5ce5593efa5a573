//! Lexical analysis for the Blank language.
//!
//! This module contains the lexer (tokenizer) that converts source code
//! into a stream of tokens for parsing. It handles:
//!
//! - Lazy, restartable tokenization with one character of lookahead
//! - Recognition of keywords, identifiers, integers and operators
//! - Token spans for error reporting
//! - Unknown characters, which become `Illegal` tokens instead of errors

pub mod lexer;
pub mod tokens;
