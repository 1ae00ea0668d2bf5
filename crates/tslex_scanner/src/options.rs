//! Lexer configuration.
//!
//! Options deserialize from a camelCase JSON object; every field is optional
//! and falls back to its default.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LexerOptions {
    /// Scan a leading `#!` line as a comment token.
    pub shebang: bool,
    /// Accept `_` between digits of numeric literals.
    pub numeric_separators: bool,
    /// Reject malformed `\x` and `\u` escapes in string literals.
    pub validate_escapes: bool,
}

impl Default for LexerOptions {
    fn default() -> Self {
        Self {
            shebang: true,
            numeric_separators: true,
            validate_escapes: true,
        }
    }
}

impl LexerOptions {
    /// Parse options from a JSON document.
    pub fn from_json(content: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(content)
    }

    /// Parse options from a JSON file.
    pub fn from_json_file(path: &str) -> Result<Self, Box<dyn std::error::Error>> {
        let content = std::fs::read_to_string(path)?;
        let options = Self::from_json(&content)?;
        Ok(options)
    }
}
