use std::io::{self, BufRead, Write};

use tracing::debug;

use crate::{lexer::lexer::Lexer, parser::parser::Parser};

pub const PROMPT: &str = ">> ";
const EXIT: &str = "exit";

#[derive(Debug, Clone)]
pub struct ReplConfig {
    pub prompt: String,
    /// Token limit applied to every line; `None` reads lines in full.
    pub token_limit: Option<usize>,
}

impl Default for ReplConfig {
    fn default() -> Self {
        ReplConfig {
            prompt: String::from(PROMPT),
            token_limit: None,
        }
    }
}

/// Builds a parser for one input according to `config`.
pub fn new_parser(source: String, file: Option<String>, config: &ReplConfig) -> Parser {
    let lexer = Lexer::new(source, file);
    match config.token_limit {
        Some(limit) => Parser::with_token_limit(lexer, limit),
        None => Parser::new(lexer),
    }
}

/// Reads lines from `input` and writes each line's parse result to `output`.
///
/// Every line gets a fresh lexer and parser. Returns at end of input or on
/// `exit`.
pub fn start<R: BufRead, W: Write>(mut input: R, mut output: W, config: &ReplConfig) -> io::Result<()> {
    loop {
        write!(output, "{}", config.prompt)?;
        output.flush()?;

        let mut bytes = Vec::new();
        if input.read_until(b'\n', &mut bytes)? == 0 {
            writeln!(output)?;
            return Ok(());
        }
        // Undecodable bytes become U+FFFD and lex as illegal tokens
        let line = String::from_utf8_lossy(&bytes).into_owned();

        if line.trim() == EXIT {
            writeln!(output, "Bye!")?;
            return Ok(());
        }

        let mut parser = new_parser(line, None, config);
        let program = parser.parse_program();
        let errors = parser.errors();

        debug!(statements = program.len(), errors = errors.len(), "evaluated line");

        if errors.is_empty() {
            writeln!(output, "{}", program)?;
        } else {
            writeln!(output, "parser errors:")?;
            for error in errors {
                writeln!(output, "\t{}", error)?;
            }
        }
    }
}
