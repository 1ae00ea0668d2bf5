//! tslex_scanner: lossless lexer for TypeScript and JavaScript source code.
//!
//! Produces a flat token sequence in which whitespace, newlines and comments
//! are tokens, with support for:
//! - All JavaScript/TypeScript operators and punctuation (longest match)
//! - Keywords and contextual TypeScript keywords
//! - String, numeric (separators, radix prefixes, BigInt) and template literals
//! - Regular expression literals, told apart from division by context
//! - Unicode identifiers

mod char_codes;
mod cursor;
mod error;
mod kind;
mod options;
mod scanner;
mod token;

pub use error::{EscapeError, LexError, NumericLiteralError};
pub use kind::{TokenKind, PUNCTUATION_KINDS};
pub use options::LexerOptions;
pub use scanner::Lexer;
pub use token::{Token, TokenFlags};

/// Tokenize `source` with the default options.
pub fn tokenize(source: &str) -> Result<Vec<Token>, LexError> {
    Lexer::new(source).tokenize()
}

/// Tokenize `source` with the given options.
pub fn tokenize_with_options(source: &str, options: LexerOptions) -> Result<Vec<Token>, LexError> {
    Lexer::with_options(source, options).tokenize()
}
