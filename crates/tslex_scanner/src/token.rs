//! Tokens produced by the scanner.

use crate::kind::TokenKind;
use tslex_core::text::{Position, TextSpan};

bitflags::bitflags! {
    /// Extra facts about a token that its kind alone does not carry.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct TokenFlags: u16 {
        const NONE                    = 0;
        const PRECEDING_LINE_BREAK    = 1 << 0;
        const SCIENTIFIC              = 1 << 1;
        const HEX_SPECIFIER           = 1 << 2;
        const BINARY_SPECIFIER        = 1 << 3;
        const OCTAL_SPECIFIER         = 1 << 4;
        const CONTAINS_SEPARATOR      = 1 << 5;
        const BIGINT                  = 1 << 6;
        const UNICODE_ESCAPE          = 1 << 7;
        const EXTENDED_UNICODE_ESCAPE = 1 << 8;
        const HAS_SUBSTITUTIONS       = 1 << 9;
        const SHEBANG                 = 1 << 10;
    }
}

/// A classified, position-tagged span of source text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    /// The kind of token.
    pub kind: TokenKind,
    /// The exact source text covered by the token, escapes and quotes included.
    pub lexeme: String,
    /// 1-based line of the first character.
    pub line: u32,
    /// 1-based column of the first character, in characters.
    pub column: u32,
    /// Character offsets of the token in the source text.
    pub span: TextSpan,
    pub flags: TokenFlags,
}

impl Token {
    pub fn new(kind: TokenKind, lexeme: String, start: Position, span: TextSpan) -> Self {
        Self {
            kind,
            lexeme,
            line: start.line,
            column: start.column,
            span,
            flags: TokenFlags::NONE,
        }
    }

    pub fn with_flags(mut self, flags: TokenFlags) -> Self {
        self.flags = flags;
        self
    }

    /// The line and column of the first character.
    pub fn position(&self) -> Position {
        Position::new(self.line, self.column)
    }

    /// The length of this token in characters.
    pub fn len(&self) -> u32 {
        self.span.length
    }

    /// Only the end-of-input token is empty.
    pub fn is_empty(&self) -> bool {
        self.span.is_empty()
    }

    /// Whether there was a line break before this token.
    pub fn has_preceding_line_break(&self) -> bool {
        self.flags.contains(TokenFlags::PRECEDING_LINE_BREAK)
    }
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{} {} {:?}", self.line, self.column, self.kind, self.lexeme)
    }
}
