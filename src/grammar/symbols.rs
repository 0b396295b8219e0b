use std::fmt::Display;

/// Terminal classes of the declaration grammar.
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Clone, Copy, Hash)]
pub enum Terminal {
    Int,
    Str,
    Const,
    Float,
    Bool,
    Array,
    Dict,
    Id,
    End,
}

impl Terminal {
    /// Every terminal, in parse table column order.
    pub const ALL: [Terminal; 9] = [
        Terminal::Int,
        Terminal::Str,
        Terminal::Const,
        Terminal::Float,
        Terminal::Bool,
        Terminal::Array,
        Terminal::Dict,
        Terminal::Id,
        Terminal::End,
    ];

    pub const TYPE_KEYWORDS: [Terminal; 7] = [
        Terminal::Int,
        Terminal::Str,
        Terminal::Const,
        Terminal::Float,
        Terminal::Bool,
        Terminal::Array,
        Terminal::Dict,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Terminal::Int => "int",
            Terminal::Str => "str",
            Terminal::Const => "const",
            Terminal::Float => "float",
            Terminal::Bool => "bool",
            Terminal::Array => "array",
            Terminal::Dict => "dict",
            Terminal::Id => "ID",
            Terminal::End => "#",
        }
    }

    pub fn is_type_keyword(&self) -> bool {
        !matches!(self, Terminal::Id | Terminal::End)
    }
}

impl Display for Terminal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Clone, Copy, Hash)]
pub enum NonTerminal {
    /// Augmented start: `Z → S #`
    Z,
    /// Declaration: `S → A B`
    S,
    /// Type keyword
    A,
    /// Declared identifier
    B,
}

impl NonTerminal {
    pub const ALL: [NonTerminal; 4] = [NonTerminal::Z, NonTerminal::S, NonTerminal::A, NonTerminal::B];

    pub fn name(&self) -> &'static str {
        match self {
            NonTerminal::Z => "Z",
            NonTerminal::S => "S",
            NonTerminal::A => "A",
            NonTerminal::B => "B",
        }
    }
}

impl Display for NonTerminal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// A grammar symbol as it appears on the right-hand side of a production and
/// on the parser stack.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum Symbol {
    Terminal(Terminal),
    NonTerminal(NonTerminal),
    Epsilon,
}

impl Display for Symbol {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Symbol::Terminal(terminal) => write!(f, "{}", terminal),
            Symbol::NonTerminal(non_terminal) => write!(f, "{}", non_terminal),
            Symbol::Epsilon => write!(f, "ε"),
        }
    }
}

impl From<Terminal> for Symbol {
    fn from(terminal: Terminal) -> Self {
        Symbol::Terminal(terminal)
    }
}

impl From<NonTerminal> for Symbol {
    fn from(non_terminal: NonTerminal) -> Self {
        Symbol::NonTerminal(non_terminal)
    }
}
