use lazy_static::lazy_static;
use log::debug;
use std::{collections::HashMap, fmt::Display};

use crate::{grammar::symbols::Terminal, Span};

lazy_static! {
    /// Reserved words and markers, keyed in lowercase.
    pub static ref RESERVED_LOOKUP: HashMap<&'static str, Terminal> = {
        let mut map = HashMap::new();
        map.insert("int", Terminal::Int);
        map.insert("str", Terminal::Str);
        map.insert("const", Terminal::Const);
        map.insert("float", Terminal::Float);
        map.insert("bool", Terminal::Bool);
        map.insert("array", Terminal::Array);
        map.insert("dict", Terminal::Dict);
        map.insert("id", Terminal::Id);
        map.insert("#", Terminal::End);
        map
    };
}

/// Case-insensitive reserved word lookup.
pub fn reserved(word: &str) -> Option<Terminal> {
    RESERVED_LOOKUP.get(word.to_ascii_lowercase().as_str()).copied()
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum TokenKind {
    /// A keyword, the `ID` marker or the end marker.
    Terminal(Terminal),
    /// The literal identifier text carried right after an `ID` marker.
    Lexeme,
    /// A word that is neither reserved nor a valid identifier.
    Unknown,
}

impl TokenKind {
    pub fn as_terminal(&self) -> Option<Terminal> {
        match self {
            TokenKind::Terminal(terminal) => Some(*terminal),
            _ => None,
        }
    }
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TokenKind::Terminal(terminal) => write!(f, "{}", terminal),
            TokenKind::Lexeme => write!(f, "Lexeme"),
            TokenKind::Unknown => write!(f, "Unknown"),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Token {
    pub kind: TokenKind,
    pub value: String,
    pub span: Span,
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Token {{\nkind: {},\nvalue: {}}}", self.kind, self.value)
    }
}

impl Token {
    pub fn is_terminal(&self, terminal: Terminal) -> bool {
        self.kind == TokenKind::Terminal(terminal)
    }

    /// Name used in diagnostics: terminal names for classified tokens, the
    /// raw text otherwise.
    pub fn describe(&self) -> String {
        match self.kind {
            TokenKind::Terminal(terminal) => terminal.to_string(),
            TokenKind::Lexeme | TokenKind::Unknown => self.value.clone(),
        }
    }

    pub fn debug(&self) {
        match self.kind {
            TokenKind::Lexeme | TokenKind::Unknown => debug!("{} ({})", self.kind, self.value),
            TokenKind::Terminal(_) => debug!("{} ()", self.kind),
        }
    }
}
