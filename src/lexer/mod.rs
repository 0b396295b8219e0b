//! Token classification for declaration lines.
//!
//! This module turns a raw line into the classified token stream consumed by
//! the parser. It handles:
//!
//! - Whitespace splitting with byte spans for diagnostics
//! - Case-insensitive recognition of type keywords and markers
//! - Promotion of identifier-shaped words into `ID` + lexeme pairs
//! - Pass-through of unrecognised words and the trailing end marker

pub mod lexer;
pub mod tokens;
