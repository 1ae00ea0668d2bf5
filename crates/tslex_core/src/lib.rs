//! tslex_core: Core utilities shared by the tslex crates.
//!
//! Provides source positions, text spans, and the line map used to turn
//! scanner positions back into source lines.

pub mod text;

// Re-export commonly used types
pub use text::{LineMap, Position, TextPos, TextSpan};
