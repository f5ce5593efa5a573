use std::{
    env,
    fs::read_to_string,
    io,
    path::{Path, PathBuf},
    process::ExitCode,
};

use blank::{
    display_error,
    repl::{self, new_parser, ReplConfig},
};
use clap::Parser;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Source file to parse; starts the interactive prompt when omitted
    file: Option<PathBuf>,

    /// Prompt shown by the interactive prompt
    #[arg(short, long, default_value = repl::PROMPT)]
    prompt: String,

    /// Stop parsing an input after this many tokens
    #[arg(long)]
    max_tokens: Option<usize>,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    let config = ReplConfig {
        prompt: cli.prompt.clone(),
        token_limit: cli.max_tokens,
    };

    match &cli.file {
        Some(path) => parse_file(path, &config),
        None => run_repl(&config),
    }
}

fn parse_file(path: &Path, config: &ReplConfig) -> ExitCode {
    let source = match read_to_string(path) {
        Ok(source) => source,
        Err(error) => {
            eprintln!("Failed to read {}: {}", path.display(), error);
            return ExitCode::FAILURE;
        }
    };

    let file_name = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned());

    debug!(path = %path.display(), bytes = source.len(), "parsing file");

    let mut parser = new_parser(source.clone(), file_name, config);
    let program = parser.parse_program();

    if !parser.diagnostics().is_empty() {
        for error in parser.diagnostics() {
            display_error(error, &source);
        }
        return ExitCode::FAILURE;
    }

    println!("{}", program);
    ExitCode::SUCCESS
}

fn run_repl(config: &ReplConfig) -> ExitCode {
    let user = env::var("USER")
        .or_else(|_| env::var("USERNAME"))
        .unwrap_or_else(|_| String::from("stranger"));
    println!("Blank Lang: Welcome {}!", user);

    info!("starting interactive prompt");

    let stdin = io::stdin();
    match repl::start(stdin.lock(), io::stdout(), config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            eprintln!("Error: {}", error);
            ExitCode::FAILURE
        }
    }
}
