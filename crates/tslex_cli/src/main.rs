//! tslex: The lossless TypeScript tokenizer CLI.
//!
//! Usage:
//!   tslex [options] [file...]
//!
//! Without `--tokens` each file is only loaded and measured.

mod logger;

use clap::{Parser as ClapParser, ValueEnum};
use rayon::prelude::*;
use serde::Serialize;
use std::process;
use tracing::debug;
use tslex_core::text::{LineMap, Position};
use tslex_diagnostics::{messages, Diagnostic, DiagnosticCollection};
use tslex_scanner::{LexError, Lexer, LexerOptions, Token, TokenKind};

#[derive(ClapParser, Debug)]
#[command(name = "tslex", about = "tslex - A lossless TypeScript tokenizer written in Rust", disable_version_flag = true)]
struct Cli {
    /// TypeScript or JavaScript files to load.
    #[arg(value_name = "FILE")]
    files: Vec<String>,

    /// Tokenize the files and print their tokens.
    #[arg(long)]
    tokens: bool,

    /// Token output format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Path to a JSON file with lexer options.
    #[arg(long, value_name = "PATH")]
    config: Option<String>,

    /// Enable debug logging.
    #[arg(long)]
    verbose: bool,

    /// Enable pretty printing for diagnostics.
    #[arg(long)]
    pretty: bool,

    /// Print the version.
    #[arg(short = 'v', long)]
    version: bool,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
enum OutputFormat {
    Text,
    Json,
}

// ANSI color codes
const RED: &str = "\x1b[31m";
const YELLOW: &str = "\x1b[33m";
const CYAN: &str = "\x1b[36m";
const GRAY: &str = "\x1b[90m";
const BOLD: &str = "\x1b[1m";
const RESET: &str = "\x1b[0m";

struct SourceFile {
    path: String,
    text: String,
}

/// One token as written by `--format json`.
#[derive(Serialize, Debug)]
#[serde(rename_all = "camelCase")]
struct TokenRecord<'a> {
    kind: String,
    lexeme: &'a str,
    line: u32,
    column: u32,
    start: u32,
    length: u32,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    flags: Vec<&'static str>,
}

impl<'a> From<&'a Token> for TokenRecord<'a> {
    fn from(token: &'a Token) -> Self {
        Self {
            kind: token.kind.to_string(),
            lexeme: &token.lexeme,
            line: token.line,
            column: token.column,
            start: token.span.start,
            length: token.span.length,
            flags: token.flags.iter_names().map(|(name, _)| name).collect(),
        }
    }
}

#[derive(Serialize, Debug)]
struct FileTokens<'a> {
    file: &'a str,
    tokens: Vec<TokenRecord<'a>>,
}

fn main() {
    let cli = Cli::parse();

    let level = if cli.verbose {
        logger::LogLevel::Debug
    } else {
        logger::LogLevel::Warn
    };
    logger::init_with_level(level);

    if cli.version {
        println!("tslex Version {}", env!("CARGO_PKG_VERSION"));
        return;
    }

    if cli.files.is_empty() {
        print_usage();
        return;
    }

    let exit_code = run(&cli);
    process::exit(exit_code);
}

fn print_usage() {
    println!("Welcome to tslex - a lossless TypeScript tokenizer!");
    println!("Usage: tslex [--tokens] [--format text|json] [--config <path>] <file>...");
}

fn run(cli: &Cli) -> i32 {
    let options = match cli.config {
        Some(ref path) => match LexerOptions::from_json_file(path) {
            Ok(options) => options,
            Err(e) => {
                print_error(&format!("Failed to read config '{}': {}", path, e));
                return 1;
            }
        },
        None => LexerOptions::default(),
    };
    debug!(?options, "lexer options");

    let mut sources = Vec::with_capacity(cli.files.len());
    for path in &cli.files {
        match std::fs::read_to_string(path) {
            Ok(text) => {
                println!("Loaded file '{}'", path);
                // UTF-8 byte length, not a character count.
                println!("File size: {} bytes", text.len());
                sources.push(SourceFile {
                    path: path.clone(),
                    text,
                });
            }
            Err(e) => {
                print_error(&format!("Error reading file '{}': {}", path, e));
                return 1;
            }
        }
    }

    if !cli.tokens {
        return 0;
    }

    // One lexer per file; results come back in argument order.
    let results: Vec<Result<Vec<Token>, LexError>> = sources
        .par_iter()
        .map(|source| {
            debug!(file = %source.path, "tokenizing");
            Lexer::with_options(&source.text, options).tokenize()
        })
        .collect();

    let use_color = cli.pretty && atty_is_terminal();
    let mut diagnostics = DiagnosticCollection::new();

    for (source, result) in sources.iter().zip(&results) {
        match result {
            Ok(tokens) => {
                if let Err(e) = print_tokens(source, tokens, cli.format) {
                    print_error(&format!("Failed to write tokens: {}", e));
                    return 1;
                }
                for diag in unknown_character_warnings(source, tokens) {
                    diagnostics.add(diag);
                }
            }
            Err(err) => diagnostics.add(err.to_diagnostic(Some(&source.path))),
        }
    }

    diagnostics.sort();
    for diag in diagnostics.diagnostics() {
        print_diagnostic(diag, source_of(&sources, diag), use_color);
    }

    if diagnostics.has_errors() {
        let count = diagnostics.error_count();
        if use_color {
            eprintln!(
                "\n{}Found {} error{}.{}",
                RED,
                count,
                if count == 1 { "" } else { "s" },
                RESET
            );
        } else {
            eprintln!(
                "\nFound {} error{}.",
                count,
                if count == 1 { "" } else { "s" }
            );
        }
        return 2;
    }

    0
}

fn print_tokens(source: &SourceFile, tokens: &[Token], format: OutputFormat) -> Result<(), serde_json::Error> {
    match format {
        OutputFormat::Text => {
            for token in tokens {
                println!("{}:{}", source.path, token);
            }
        }
        OutputFormat::Json => {
            let output = FileTokens {
                file: &source.path,
                tokens: tokens.iter().map(TokenRecord::from).collect(),
            };
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
    }
    Ok(())
}

/// Characters that match no lexical rule are reported but do not stop
/// tokenization.
fn unknown_character_warnings(source: &SourceFile, tokens: &[Token]) -> Vec<Diagnostic> {
    tokens
        .iter()
        .filter(|token| token.kind == TokenKind::Unknown)
        .map(|token| {
            Diagnostic::with_location(
                Some(source.path.clone()),
                token.position(),
                &messages::INVALID_CHARACTER,
                &[token.lexeme.as_str()],
            )
        })
        .collect()
}

fn source_of<'a>(sources: &'a [SourceFile], diag: &Diagnostic) -> Option<&'a SourceFile> {
    sources
        .iter()
        .find(|source| diag.file.as_deref() == Some(source.path.as_str()))
}

fn print_diagnostic(diag: &Diagnostic, source: Option<&SourceFile>, use_color: bool) {
    if !use_color {
        eprintln!("{}", diag);
        return;
    }

    let color = if diag.is_error() { RED } else { YELLOW };
    if let Some(ref file) = diag.file {
        eprint!("{}{}{}", CYAN, file, RESET);
        if let Some(pos) = diag.position {
            eprint!("({},{})", pos.line, pos.column);
        }
        eprint!(": ");
    }
    eprintln!(
        "{}{}{}{} {}TS{}{}: {}",
        BOLD, color, diag.category, RESET, CYAN, diag.code, RESET, diag.message_text
    );
    if let (Some(pos), Some(source)) = (diag.position, source) {
        print_source_line(&source.text, pos, color);
    }
}

/// Show the offending line with a caret under the reported column.
fn print_source_line(text: &str, pos: Position, color: &str) {
    let line_map = LineMap::new(text);
    let Some(line) = line_map.line_text(text, pos.line) else {
        return;
    };
    let gutter = pos.line.to_string();
    eprintln!("\n{}{}{} {}", GRAY, gutter, RESET, line);
    eprintln!(
        "{} {}{}^{}\n",
        " ".repeat(gutter.len()),
        " ".repeat(pos.column.saturating_sub(1) as usize),
        color,
        RESET
    );
}

fn print_error(msg: &str) {
    if atty_is_terminal() {
        eprintln!("{}{}error{}: {}", BOLD, RED, RESET, msg);
    } else {
        eprintln!("error: {}", msg);
    }
}

fn atty_is_terminal() -> bool {
    #[cfg(unix)]
    {
        unsafe { libc::isatty(2) != 0 }
    }
    #[cfg(not(unix))]
    {
        false
    }
}
