//! Fatal scanner errors.
//!
//! Any of these aborts the whole tokenization. Characters that merely match
//! no lexical rule are not errors; they become `Unknown` tokens.

use thiserror::Error;
use tslex_core::text::Position;
use tslex_diagnostics::{messages, Diagnostic, DiagnosticMessage};

/// Why a numeric literal was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum NumericLiteralError {
    #[error("digit expected")]
    DigitExpected,
    #[error("hexadecimal digit expected")]
    HexDigitExpected,
    #[error("binary digit expected")]
    BinaryDigitExpected,
    #[error("octal digit expected")]
    OctalDigitExpected,
    /// Leading or trailing `_`, `_` next to `.` or an exponent, or `_` while
    /// separators are disabled.
    #[error("numeric separators are not allowed here")]
    SeparatorNotAllowed,
    #[error("multiple consecutive numeric separators are not permitted")]
    ConsecutiveSeparators,
    #[error("a numeric literal cannot have more than one decimal point")]
    MultipleDecimalPoints,
    #[error("an identifier or keyword cannot immediately follow a numeric literal")]
    IdentifierAfterLiteral,
}

/// Why an escape sequence was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum EscapeError {
    #[error("hexadecimal digit expected")]
    HexDigitExpected,
    #[error("unterminated Unicode escape sequence")]
    UnterminatedUnicodeEscape,
    #[error("extended Unicode escape value must be between 0x0 and 0x10FFFF")]
    CodePointOutOfRange,
}

/// A fatal tokenization error with the position of the offending character.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LexError {
    #[error("{position}: unterminated string literal")]
    UnterminatedString { position: Position },

    #[error("{position}: unterminated template literal")]
    UnterminatedTemplateLiteral { position: Position },

    #[error("{position}: unterminated comment")]
    UnterminatedComment { position: Position },

    #[error("{position}: unterminated regular expression literal")]
    UnterminatedRegex { position: Position },

    #[error("{position}: invalid numeric literal: {reason}")]
    InvalidNumericLiteral {
        position: Position,
        reason: NumericLiteralError,
    },

    #[error("{position}: invalid escape sequence: {reason}")]
    InvalidEscapeSequence {
        position: Position,
        reason: EscapeError,
    },
}

impl LexError {
    /// The line and column of the offending character.
    pub fn position(&self) -> Position {
        match self {
            LexError::UnterminatedString { position }
            | LexError::UnterminatedTemplateLiteral { position }
            | LexError::UnterminatedComment { position }
            | LexError::UnterminatedRegex { position }
            | LexError::InvalidNumericLiteral { position, .. }
            | LexError::InvalidEscapeSequence { position, .. } => *position,
        }
    }

    /// The diagnostic message this error is reported with.
    pub fn message(&self) -> &'static DiagnosticMessage {
        match self {
            LexError::UnterminatedString { .. } => &messages::UNTERMINATED_STRING_LITERAL,
            LexError::UnterminatedTemplateLiteral { .. } => &messages::UNTERMINATED_TEMPLATE_LITERAL,
            LexError::UnterminatedComment { .. } => &messages::ASTERISK_SLASH_EXPECTED,
            LexError::UnterminatedRegex { .. } => &messages::UNTERMINATED_REGULAR_EXPRESSION_LITERAL,
            LexError::InvalidNumericLiteral { reason, .. } => match reason {
                NumericLiteralError::DigitExpected
                | NumericLiteralError::MultipleDecimalPoints => &messages::DIGIT_EXPECTED,
                NumericLiteralError::HexDigitExpected => &messages::HEXADECIMAL_DIGIT_EXPECTED,
                NumericLiteralError::BinaryDigitExpected => &messages::BINARY_DIGIT_EXPECTED,
                NumericLiteralError::OctalDigitExpected => &messages::OCTAL_DIGIT_EXPECTED,
                NumericLiteralError::SeparatorNotAllowed => {
                    &messages::NUMERIC_SEPARATORS_ARE_NOT_ALLOWED_HERE
                }
                NumericLiteralError::ConsecutiveSeparators => {
                    &messages::MULTIPLE_CONSECUTIVE_NUMERIC_SEPARATORS_ARE_NOT_PERMITTED
                }
                NumericLiteralError::IdentifierAfterLiteral => {
                    &messages::AN_IDENTIFIER_OR_KEYWORD_CANNOT_IMMEDIATELY_FOLLOW_A_NUMERIC_LITERAL
                }
            },
            LexError::InvalidEscapeSequence { reason, .. } => match reason {
                EscapeError::HexDigitExpected => &messages::HEXADECIMAL_DIGIT_EXPECTED,
                EscapeError::UnterminatedUnicodeEscape => {
                    &messages::UNTERMINATED_UNICODE_ESCAPE_SEQUENCE
                }
                EscapeError::CodePointOutOfRange => {
                    &messages::AN_EXTENDED_UNICODE_ESCAPE_VALUE_MUST_BE_BETWEEN_0X0_AND_0X10FFFF
                }
            },
        }
    }

    /// Build a located diagnostic for this error.
    pub fn to_diagnostic(&self, file: Option<&str>) -> Diagnostic {
        Diagnostic::with_location(
            file.map(str::to_string),
            self.position(),
            self.message(),
            &[],
        )
    }
}
