//! Read position over the source characters.
//!
//! The cursor only moves forward. Every consumed character updates the
//! 1-based line and column, so a token's position is simply the cursor
//! position before it was scanned.

use tslex_core::text::{Position, TextPos};

pub(crate) struct Cursor {
    text: Vec<char>,
    pos: usize,
    line: u32,
    column: u32,
}

impl Cursor {
    pub fn new(text: &str) -> Self {
        Self {
            text: text.chars().collect(),
            pos: 0,
            line: 1,
            column: 1,
        }
    }

    /// The character at the cursor.
    #[inline]
    pub fn current(&self) -> Option<char> {
        self.text.get(self.pos).copied()
    }

    /// The character `offset` positions past the cursor.
    #[inline]
    pub fn peek(&self, offset: usize) -> Option<char> {
        self.text.get(self.pos + offset).copied()
    }

    #[inline]
    pub fn is_eof(&self) -> bool {
        self.pos >= self.text.len()
    }

    /// Consume one character. `\r\n` counts as a single line break, taken
    /// on the `\n`.
    pub fn advance(&mut self) -> Option<char> {
        let ch = self.current()?;
        self.pos += 1;
        let breaks_line = match ch {
            '\n' | '\u{2028}' | '\u{2029}' => true,
            '\r' => self.current() != Some('\n'),
            _ => false,
        };
        if breaks_line {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }
        Some(ch)
    }

    /// Consume `count` characters.
    pub fn advance_by(&mut self, count: usize) {
        for _ in 0..count {
            if self.advance().is_none() {
                break;
            }
        }
    }

    /// Consume characters while `predicate` holds.
    pub fn advance_while(&mut self, predicate: impl Fn(char) -> bool) {
        while let Some(ch) = self.current() {
            if !predicate(ch) {
                break;
            }
            self.advance();
        }
    }

    /// The character offset of the cursor.
    #[inline]
    pub fn offset(&self) -> TextPos {
        self.pos as TextPos
    }

    /// The line and column of the cursor.
    #[inline]
    pub fn position(&self) -> Position {
        Position::new(self.line, self.column)
    }

    /// Collect the characters between two offsets.
    pub fn slice(&self, start: TextPos, end: TextPos) -> String {
        let s = (start as usize).min(self.text.len());
        let e = (end as usize).min(self.text.len());
        self.text[s..e].iter().collect()
    }
}
