//! The TypeScript/JavaScript lexer.
//!
//! Converts source text into a lossless token sequence: whitespace, newlines
//! and comments are tokens too, so concatenating every lexeme gives back the
//! source. Each call to [`Lexer::tokenize`] is a single forward pass.

use crate::char_codes::*;
use crate::cursor::Cursor;
use crate::error::{EscapeError, LexError, NumericLiteralError};
use crate::kind::TokenKind;
use crate::options::LexerOptions;
use crate::token::{Token, TokenFlags};
use tracing::{debug, trace};
use tslex_core::text::{Position, TextSpan};

/// Where the template scanner is inside a template literal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TemplateMode {
    /// Raw template text up to the next `${` or backtick.
    Text,
    /// An embedded expression. The innermost entry of the depth stack counts
    /// its unclosed `{`.
    Hole,
}

/// The lexer converts TypeScript source text into tokens.
pub struct Lexer {
    cursor: Cursor,
    options: LexerOptions,
    /// Brace depth of every open `${` expression hole, innermost last.
    template_depths: Vec<u32>,
    /// Kind of the last token that was not trivia, used to tell a regex
    /// literal from a division operator.
    last_significant: Option<TokenKind>,
    /// A line break was scanned since the last significant token.
    pending_line_break: bool,
    /// Flags for the token being scanned.
    token_flags: TokenFlags,
}

impl Lexer {
    /// Create a new lexer for the given source text.
    pub fn new(text: &str) -> Self {
        Self::with_options(text, LexerOptions::default())
    }

    /// Create a lexer with explicit options.
    pub fn with_options(text: &str, options: LexerOptions) -> Self {
        Self {
            cursor: Cursor::new(text),
            options,
            template_depths: Vec::new(),
            last_significant: None,
            pending_line_break: false,
            token_flags: TokenFlags::NONE,
        }
    }

    /// Scan the whole source. The result always ends with exactly one
    /// `EndOfFileToken`, or is the first fatal error.
    pub fn tokenize(mut self) -> Result<Vec<Token>, LexError> {
        debug!(options = ?self.options, "tokenize started");
        let mut tokens = Vec::new();

        if self.options.shebang {
            if let Some(token) = self.scan_shebang() {
                tokens.push(token);
            }
        }

        while !self.cursor.is_eof() {
            let token = self.next_token()?;
            tokens.push(token);
        }

        let end = self.cursor.offset();
        let mut eof = Token::new(
            TokenKind::EndOfFileToken,
            String::new(),
            self.cursor.position(),
            TextSpan::empty(end),
        );
        if self.pending_line_break {
            eof.flags |= TokenFlags::PRECEDING_LINE_BREAK;
        }
        tokens.push(eof);

        debug!(count = tokens.len(), "tokenize finished");
        Ok(tokens)
    }

    /// Scan one token at the cursor and update the disambiguation state.
    fn next_token(&mut self) -> Result<Token, LexError> {
        let start = self.cursor.position();
        let start_offset = self.cursor.offset();
        self.token_flags = TokenFlags::NONE;

        let kind = self.scan_kind()?;

        let end = self.cursor.offset();
        let lexeme = self.cursor.slice(start_offset, end);
        match kind {
            TokenKind::NewLineTrivia => self.pending_line_break = true,
            TokenKind::CommentTrivia => {
                if lexeme.chars().any(is_line_break) {
                    self.pending_line_break = true;
                }
            }
            _ if kind.is_significant() => {
                if self.pending_line_break {
                    self.token_flags |= TokenFlags::PRECEDING_LINE_BREAK;
                    self.pending_line_break = false;
                }
                self.note_significant(kind);
            }
            _ => {}
        }

        Ok(Token::new(kind, lexeme, start, TextSpan::from_bounds(start_offset, end))
            .with_flags(self.token_flags))
    }

    /// A keyword after `.` or `?.` is a property name and ends an expression
    /// like any identifier.
    fn note_significant(&mut self, kind: TokenKind) {
        let is_property_name = kind.is_keyword()
            && matches!(
                self.last_significant,
                Some(TokenKind::DotToken | TokenKind::QuestionDotToken)
            );
        self.last_significant = Some(if is_property_name { TokenKind::Identifier } else { kind });
    }

    // ========================================================================
    // Classifier dispatch
    // ========================================================================

    /// Decide which scanner handles the character at the cursor and run it.
    fn scan_kind(&mut self) -> Result<TokenKind, LexError> {
        let Some(ch) = self.cursor.current() else {
            return Ok(TokenKind::EndOfFileToken);
        };

        let kind = match ch {
            '\r' => {
                self.cursor.advance();
                if self.cursor.current() == Some('\n') {
                    self.cursor.advance();
                }
                TokenKind::NewLineTrivia
            }
            c if is_line_break(c) => self.take(1, TokenKind::NewLineTrivia),
            c if is_white_space_single_line(c) => {
                self.cursor.advance_while(|next| next == c);
                TokenKind::WhitespaceTrivia
            }

            '(' => self.take(1, TokenKind::OpenParenToken),
            ')' => self.take(1, TokenKind::CloseParenToken),
            '{' => self.take(1, TokenKind::OpenBraceToken),
            '}' => self.take(1, TokenKind::CloseBraceToken),
            '[' => self.take(1, TokenKind::OpenBracketToken),
            ']' => self.take(1, TokenKind::CloseBracketToken),
            ';' => self.take(1, TokenKind::SemicolonToken),
            ',' => self.take(1, TokenKind::CommaToken),
            ':' => self.take(1, TokenKind::ColonToken),
            '~' => self.take(1, TokenKind::TildeToken),

            '.' => self.scan_dot()?,
            '?' => self.scan_question(),
            '<' => self.scan_less_than(),
            '>' => self.scan_greater_than(),
            '=' => self.scan_equals(),
            '!' => self.scan_exclamation(),
            '+' => self.scan_plus(),
            '-' => self.scan_minus(),
            '*' => self.scan_asterisk(),
            '/' => self.scan_slash()?,
            '%' => self.scan_percent(),
            '&' => self.scan_ampersand(),
            '|' => self.scan_bar(),
            '^' => self.scan_caret(),

            '\'' | '"' => self.scan_string_literal(ch)?,
            '`' => self.scan_template_literal()?,

            '0'..='9' => self.scan_number()?,

            c if is_identifier_start(c) => self.scan_identifier(),

            _ => self.take(1, TokenKind::Unknown),
        };

        Ok(kind)
    }

    /// Consume `len` characters as a token of `kind`.
    #[inline]
    fn take(&mut self, len: usize, kind: TokenKind) -> TokenKind {
        self.cursor.advance_by(len);
        kind
    }

    #[inline]
    fn char_at(&self, offset: usize) -> Option<char> {
        self.cursor.peek(offset)
    }

    // ========================================================================
    // Operators and punctuation
    // ========================================================================

    fn scan_dot(&mut self) -> Result<TokenKind, LexError> {
        if self.char_at(1) == Some('.') && self.char_at(2) == Some('.') {
            Ok(self.take(3, TokenKind::DotDotDotToken))
        } else if self.char_at(1).map_or(false, is_digit) {
            self.scan_number()
        } else {
            Ok(self.take(1, TokenKind::DotToken))
        }
    }

    fn scan_question(&mut self) -> TokenKind {
        if self.char_at(1) == Some('?') {
            if self.char_at(2) == Some('=') {
                self.take(3, TokenKind::QuestionQuestionEqualsToken)
            } else {
                self.take(2, TokenKind::QuestionQuestionToken)
            }
        } else if self.char_at(1) == Some('.') && !self.char_at(2).map_or(false, is_digit) {
            // `a?.5:b` is a conditional with `.5`, not optional chaining.
            self.take(2, TokenKind::QuestionDotToken)
        } else {
            self.take(1, TokenKind::QuestionToken)
        }
    }

    fn scan_less_than(&mut self) -> TokenKind {
        if self.char_at(1) == Some('<') {
            if self.char_at(2) == Some('=') {
                self.take(3, TokenKind::LessThanLessThanEqualsToken)
            } else {
                self.take(2, TokenKind::LessThanLessThanToken)
            }
        } else if self.char_at(1) == Some('=') {
            self.take(2, TokenKind::LessThanEqualsToken)
        } else {
            self.take(1, TokenKind::LessThanToken)
        }
    }

    /// `>` always takes the longest shift operator; splitting `>>` between
    /// nested type arguments is left to the parser.
    fn scan_greater_than(&mut self) -> TokenKind {
        if self.char_at(1) == Some('>') {
            if self.char_at(2) == Some('>') {
                if self.char_at(3) == Some('=') {
                    self.take(4, TokenKind::GreaterThanGreaterThanGreaterThanEqualsToken)
                } else {
                    self.take(3, TokenKind::GreaterThanGreaterThanGreaterThanToken)
                }
            } else if self.char_at(2) == Some('=') {
                self.take(3, TokenKind::GreaterThanGreaterThanEqualsToken)
            } else {
                self.take(2, TokenKind::GreaterThanGreaterThanToken)
            }
        } else if self.char_at(1) == Some('=') {
            self.take(2, TokenKind::GreaterThanEqualsToken)
        } else {
            self.take(1, TokenKind::GreaterThanToken)
        }
    }

    fn scan_equals(&mut self) -> TokenKind {
        if self.char_at(1) == Some('=') {
            if self.char_at(2) == Some('=') {
                self.take(3, TokenKind::EqualsEqualsEqualsToken)
            } else {
                self.take(2, TokenKind::EqualsEqualsToken)
            }
        } else if self.char_at(1) == Some('>') {
            self.take(2, TokenKind::EqualsGreaterThanToken)
        } else {
            self.take(1, TokenKind::EqualsToken)
        }
    }

    fn scan_exclamation(&mut self) -> TokenKind {
        if self.char_at(1) == Some('=') {
            if self.char_at(2) == Some('=') {
                self.take(3, TokenKind::ExclamationEqualsEqualsToken)
            } else {
                self.take(2, TokenKind::ExclamationEqualsToken)
            }
        } else {
            self.take(1, TokenKind::ExclamationToken)
        }
    }

    fn scan_plus(&mut self) -> TokenKind {
        match self.char_at(1) {
            Some('+') => self.take(2, TokenKind::PlusPlusToken),
            Some('=') => self.take(2, TokenKind::PlusEqualsToken),
            _ => self.take(1, TokenKind::PlusToken),
        }
    }

    fn scan_minus(&mut self) -> TokenKind {
        match self.char_at(1) {
            Some('-') => self.take(2, TokenKind::MinusMinusToken),
            Some('=') => self.take(2, TokenKind::MinusEqualsToken),
            _ => self.take(1, TokenKind::MinusToken),
        }
    }

    fn scan_asterisk(&mut self) -> TokenKind {
        if self.char_at(1) == Some('*') {
            if self.char_at(2) == Some('=') {
                self.take(3, TokenKind::AsteriskAsteriskEqualsToken)
            } else {
                self.take(2, TokenKind::AsteriskAsteriskToken)
            }
        } else if self.char_at(1) == Some('=') {
            self.take(2, TokenKind::AsteriskEqualsToken)
        } else {
            self.take(1, TokenKind::AsteriskToken)
        }
    }

    fn scan_percent(&mut self) -> TokenKind {
        if self.char_at(1) == Some('=') {
            self.take(2, TokenKind::PercentEqualsToken)
        } else {
            self.take(1, TokenKind::PercentToken)
        }
    }

    fn scan_ampersand(&mut self) -> TokenKind {
        if self.char_at(1) == Some('&') {
            if self.char_at(2) == Some('=') {
                self.take(3, TokenKind::AmpersandAmpersandEqualsToken)
            } else {
                self.take(2, TokenKind::AmpersandAmpersandToken)
            }
        } else if self.char_at(1) == Some('=') {
            self.take(2, TokenKind::AmpersandEqualsToken)
        } else {
            self.take(1, TokenKind::AmpersandToken)
        }
    }

    fn scan_bar(&mut self) -> TokenKind {
        if self.char_at(1) == Some('|') {
            if self.char_at(2) == Some('=') {
                self.take(3, TokenKind::BarBarEqualsToken)
            } else {
                self.take(2, TokenKind::BarBarToken)
            }
        } else if self.char_at(1) == Some('=') {
            self.take(2, TokenKind::BarEqualsToken)
        } else {
            self.take(1, TokenKind::BarToken)
        }
    }

    fn scan_caret(&mut self) -> TokenKind {
        if self.char_at(1) == Some('=') {
            self.take(2, TokenKind::CaretEqualsToken)
        } else {
            self.take(1, TokenKind::CaretToken)
        }
    }

    // ========================================================================
    // Comments, division and regular expressions
    // ========================================================================

    fn scan_slash(&mut self) -> Result<TokenKind, LexError> {
        match self.char_at(1) {
            Some('/') => {
                self.cursor.advance_by(2);
                self.cursor.advance_while(|c| !is_line_break(c));
                Ok(TokenKind::CommentTrivia)
            }
            Some('*') => self.scan_multi_line_comment(),
            _ if self.regex_allowed() => self.scan_regex_or_division(),
            Some('=') => Ok(self.take(2, TokenKind::SlashEqualsToken)),
            _ => Ok(self.take(1, TokenKind::SlashToken)),
        }
    }

    /// Comments do not nest: the first `*/` ends the comment.
    fn scan_multi_line_comment(&mut self) -> Result<TokenKind, LexError> {
        let position = self.cursor.position();
        self.cursor.advance_by(2);
        loop {
            match self.cursor.current() {
                None => return Err(LexError::UnterminatedComment { position }),
                Some('*') if self.char_at(1) == Some('/') => {
                    self.cursor.advance_by(2);
                    return Ok(TokenKind::CommentTrivia);
                }
                Some(_) => {
                    self.cursor.advance();
                }
            }
        }
    }

    /// A `/` starts a regex unless the previous significant token can end
    /// an expression.
    fn regex_allowed(&self) -> bool {
        self.last_significant
            .map_or(true, |kind| !kind.can_end_expression())
    }

    fn scan_regex_or_division(&mut self) -> Result<TokenKind, LexError> {
        if let Some(len) = self.regex_body_len() {
            self.cursor.advance_by(len);
            self.cursor.advance_while(is_identifier_part);
            return Ok(TokenKind::RegexLiteral);
        }

        // A lone `/` or `/=` at the end of a line cannot be a regex.
        let operator_len = if self.char_at(1) == Some('=') { 2 } else { 1 };
        if self.char_at(operator_len).map_or(true, is_line_break) {
            let kind = if operator_len == 2 {
                TokenKind::SlashEqualsToken
            } else {
                TokenKind::SlashToken
            };
            return Ok(self.take(operator_len, kind));
        }

        Err(LexError::UnterminatedRegex {
            position: self.cursor.position(),
        })
    }

    /// Length of the regex literal at the cursor, up to and including the
    /// closing `/` but not the flags. `None` if a line terminator or the end
    /// of input comes first.
    fn regex_body_len(&self) -> Option<usize> {
        let mut offset = 1;
        let mut in_character_class = false;
        loop {
            let ch = self.char_at(offset)?;
            if is_line_break(ch) {
                return None;
            }
            match ch {
                '\\' => {
                    // The escaped character may be anything but a line break.
                    let escaped = self.char_at(offset + 1)?;
                    if is_line_break(escaped) {
                        return None;
                    }
                    offset += 2;
                    continue;
                }
                '[' => in_character_class = true,
                ']' => in_character_class = false,
                '/' if !in_character_class => return Some(offset + 1),
                _ => {}
            }
            offset += 1;
        }
    }

    fn scan_shebang(&mut self) -> Option<Token> {
        if self.cursor.offset() != 0
            || self.cursor.current() != Some('#')
            || self.char_at(1) != Some('!')
        {
            return None;
        }
        let start = self.cursor.position();
        self.cursor.advance_while(|c| !is_line_break(c));
        let end = self.cursor.offset();
        Some(
            Token::new(
                TokenKind::CommentTrivia,
                self.cursor.slice(0, end),
                start,
                TextSpan::from_bounds(0, end),
            )
            .with_flags(TokenFlags::SHEBANG),
        )
    }

    // ========================================================================
    // String and template literals
    // ========================================================================

    fn scan_string_literal(&mut self, quote: char) -> Result<TokenKind, LexError> {
        let position = self.cursor.position();
        self.cursor.advance(); // opening quote
        loop {
            match self.cursor.current() {
                None | Some('\n') | Some('\r') => {
                    return Err(LexError::UnterminatedString { position });
                }
                Some(ch) if ch == quote => {
                    self.cursor.advance();
                    return Ok(TokenKind::StringLiteral);
                }
                Some('\\') => self.scan_escape_sequence()?,
                Some(_) => {
                    self.cursor.advance();
                }
            }
        }
    }

    /// Consume one escape sequence starting at the backslash. Only `\x` and
    /// `\u` forms are checked; any other character is a valid escape.
    fn scan_escape_sequence(&mut self) -> Result<(), LexError> {
        let position = self.cursor.position();
        self.cursor.advance(); // backslash
        let Some(ch) = self.cursor.advance() else {
            return Ok(());
        };
        match ch {
            // Line continuation.
            '\r' => {
                if self.cursor.current() == Some('\n') {
                    self.cursor.advance();
                }
            }
            'x' if self.options.validate_escapes => {
                self.scan_exact_hex_digits(2, position)?;
            }
            'u' if self.options.validate_escapes => {
                self.scan_unicode_escape(position)?;
            }
            _ => {}
        }
        Ok(())
    }

    fn scan_exact_hex_digits(&mut self, count: usize, position: Position) -> Result<(), LexError> {
        for _ in 0..count {
            match self.cursor.current() {
                Some(c) if is_hex_digit(c) => {
                    self.cursor.advance();
                }
                _ => {
                    return Err(LexError::InvalidEscapeSequence {
                        position,
                        reason: EscapeError::HexDigitExpected,
                    });
                }
            }
        }
        Ok(())
    }

    /// `\uHHHH` or `\u{H...}`, with the cursor just past the `u`.
    fn scan_unicode_escape(&mut self, position: Position) -> Result<(), LexError> {
        if self.cursor.current() != Some('{') {
            self.scan_exact_hex_digits(4, position)?;
            self.token_flags |= TokenFlags::UNICODE_ESCAPE;
            return Ok(());
        }

        self.cursor.advance(); // {
        let mut value: u32 = 0;
        let mut digits = 0;
        while let Some(digit) = self.cursor.current().and_then(|c| c.to_digit(16)) {
            value = value.saturating_mul(16).saturating_add(digit);
            digits += 1;
            self.cursor.advance();
        }
        let invalid = |reason| LexError::InvalidEscapeSequence { position, reason };
        if digits == 0 {
            return Err(invalid(EscapeError::HexDigitExpected));
        }
        if value > 0x10FFFF {
            return Err(invalid(EscapeError::CodePointOutOfRange));
        }
        if self.cursor.current() != Some('}') {
            return Err(invalid(EscapeError::UnterminatedUnicodeEscape));
        }
        self.cursor.advance();
        self.token_flags |= TokenFlags::EXTENDED_UNICODE_ESCAPE;
        Ok(())
    }

    /// Scan a whole template literal, expression holes included, as one token.
    ///
    /// Holes are scanned with the ordinary dispatch. Nested templates inside
    /// a hole reuse the same loop: the depth stack length tells which
    /// template a closing backtick belongs to, so nesting never recurses.
    fn scan_template_literal(&mut self) -> Result<TokenKind, LexError> {
        let position = self.cursor.position();
        let base = self.template_depths.len();
        let mut flags = TokenFlags::NONE;
        let mut mode = TemplateMode::Text;
        self.cursor.advance(); // opening backtick

        loop {
            let Some(ch) = self.cursor.current() else {
                return Err(LexError::UnterminatedTemplateLiteral { position });
            };
            match mode {
                TemplateMode::Text => match ch {
                    '`' => {
                        self.cursor.advance();
                        if self.template_depths.len() == base {
                            break;
                        }
                        // A nested template closed inside an enclosing hole.
                        self.last_significant = Some(TokenKind::TemplateLiteral);
                        mode = TemplateMode::Hole;
                    }
                    '$' if self.char_at(1) == Some('{') => {
                        self.cursor.advance_by(2);
                        self.template_depths.push(0);
                        self.last_significant = None;
                        flags |= TokenFlags::HAS_SUBSTITUTIONS;
                        trace!(depth = self.template_depths.len(), "entered template expression");
                        mode = TemplateMode::Hole;
                    }
                    '\\' => {
                        self.cursor.advance();
                        self.cursor.advance();
                    }
                    _ => {
                        self.cursor.advance();
                    }
                },
                TemplateMode::Hole => {
                    if ch == '`' {
                        self.cursor.advance();
                        mode = TemplateMode::Text;
                        continue;
                    }
                    let kind = self.scan_kind()?;
                    match kind {
                        TokenKind::OpenBraceToken => {
                            if let Some(depth) = self.template_depths.last_mut() {
                                *depth += 1;
                            }
                        }
                        TokenKind::CloseBraceToken => match self.template_depths.last_mut() {
                            Some(depth) if *depth > 0 => *depth -= 1,
                            _ => {
                                self.template_depths.pop();
                                trace!(depth = self.template_depths.len(), "left template expression");
                                mode = TemplateMode::Text;
                            }
                        },
                        _ => {}
                    }
                    if kind.is_significant() {
                        self.note_significant(kind);
                    }
                }
            }
        }

        self.token_flags = flags;
        Ok(TokenKind::TemplateLiteral)
    }

    // ========================================================================
    // Numbers
    // ========================================================================

    fn scan_number(&mut self) -> Result<TokenKind, LexError> {
        if self.cursor.current() == Some('0') {
            let radix = match self.char_at(1) {
                Some('x') | Some('X') => Some((
                    TokenFlags::HEX_SPECIFIER,
                    is_hex_digit as fn(char) -> bool,
                    NumericLiteralError::HexDigitExpected,
                )),
                Some('b') | Some('B') => Some((
                    TokenFlags::BINARY_SPECIFIER,
                    is_binary_digit as fn(char) -> bool,
                    NumericLiteralError::BinaryDigitExpected,
                )),
                Some('o') | Some('O') => Some((
                    TokenFlags::OCTAL_SPECIFIER,
                    is_octal_digit as fn(char) -> bool,
                    NumericLiteralError::OctalDigitExpected,
                )),
                _ => None,
            };
            if let Some((flag, is_valid, missing)) = radix {
                self.cursor.advance_by(2); // skip 0x
                self.token_flags |= flag;
                self.scan_digits(is_valid, missing)?;
                self.scan_bigint_suffix();
                self.check_numeric_end(missing)?;
                return Ok(TokenKind::NumericLiteral);
            }
        }

        // Decimal number
        let mut is_integer = true;
        if self.cursor.current().map_or(false, is_digit) {
            self.scan_digits(is_digit, NumericLiteralError::DigitExpected)?;
        }

        if self.cursor.current() == Some('.') {
            is_integer = false;
            self.cursor.advance();
            match self.cursor.current() {
                Some('_') => {
                    return Err(self.numeric_error(NumericLiteralError::SeparatorNotAllowed));
                }
                Some(c) if is_digit(c) => {
                    self.scan_digits(is_digit, NumericLiteralError::DigitExpected)?;
                }
                _ => {}
            }
            if self.cursor.current() == Some('.') && self.char_at(1).map_or(false, is_digit) {
                return Err(self.numeric_error(NumericLiteralError::MultipleDecimalPoints));
            }
        }

        // Exponent
        if let Some('e') | Some('E') = self.cursor.current() {
            is_integer = false;
            self.cursor.advance();
            self.token_flags |= TokenFlags::SCIENTIFIC;
            if let Some('+') | Some('-') = self.cursor.current() {
                self.cursor.advance();
            }
            if self.cursor.current() == Some('_') {
                return Err(self.numeric_error(NumericLiteralError::SeparatorNotAllowed));
            }
            self.scan_digits(is_digit, NumericLiteralError::DigitExpected)?;
        }

        if is_integer {
            self.scan_bigint_suffix();
        }
        self.check_numeric_end(NumericLiteralError::DigitExpected)?;
        Ok(TokenKind::NumericLiteral)
    }

    /// Scan one or more digits with `_` separators allowed only between two
    /// digits.
    fn scan_digits(
        &mut self,
        is_valid: fn(char) -> bool,
        missing: NumericLiteralError,
    ) -> Result<(), LexError> {
        let mut digits = 0;
        let mut prev_was_digit = false;
        let mut last_separator: Option<Position> = None;

        while let Some(ch) = self.cursor.current() {
            if ch == '_' {
                if !self.options.numeric_separators {
                    return Err(self.numeric_error(NumericLiteralError::SeparatorNotAllowed));
                }
                if !prev_was_digit {
                    let reason = if last_separator.is_some() {
                        NumericLiteralError::ConsecutiveSeparators
                    } else {
                        NumericLiteralError::SeparatorNotAllowed
                    };
                    return Err(self.numeric_error(reason));
                }
                self.token_flags |= TokenFlags::CONTAINS_SEPARATOR;
                last_separator = Some(self.cursor.position());
                prev_was_digit = false;
                self.cursor.advance();
            } else if is_valid(ch) {
                digits += 1;
                prev_was_digit = true;
                self.cursor.advance();
            } else {
                break;
            }
        }

        if digits == 0 {
            return Err(self.numeric_error(missing));
        }
        if !prev_was_digit {
            if let Some(position) = last_separator {
                return Err(LexError::InvalidNumericLiteral {
                    position,
                    reason: NumericLiteralError::SeparatorNotAllowed,
                });
            }
        }
        Ok(())
    }

    fn scan_bigint_suffix(&mut self) {
        if self.cursor.current() == Some('n') {
            self.cursor.advance();
            self.token_flags |= TokenFlags::BIGINT;
        }
    }

    /// A numeric literal must not run straight into an identifier or a digit
    /// outside its radix (`3in`, `0b12`).
    fn check_numeric_end(&self, invalid_digit: NumericLiteralError) -> Result<(), LexError> {
        match self.cursor.current() {
            Some(c) if is_digit(c) => Err(self.numeric_error(invalid_digit)),
            Some(c) if is_identifier_start(c) => {
                Err(self.numeric_error(NumericLiteralError::IdentifierAfterLiteral))
            }
            _ => Ok(()),
        }
    }

    fn numeric_error(&self, reason: NumericLiteralError) -> LexError {
        LexError::InvalidNumericLiteral {
            position: self.cursor.position(),
            reason,
        }
    }

    // ========================================================================
    // Identifiers and keywords
    // ========================================================================

    fn scan_identifier(&mut self) -> TokenKind {
        let start = self.cursor.offset();
        self.cursor.advance();
        self.cursor.advance_while(is_identifier_part);
        let text = self.cursor.slice(start, self.cursor.offset());
        TokenKind::from_keyword(&text).unwrap_or(TokenKind::Identifier)
    }
}
