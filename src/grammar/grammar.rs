use std::fmt::Display;

use crate::MK_PRODUCTION;

use super::symbols::{NonTerminal, Symbol, Terminal};

/// An ordered right-hand side for a nonterminal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Production {
    pub head: NonTerminal,
    pub body: Vec<Symbol>,
}

impl Production {
    pub fn new(head: NonTerminal, body: Vec<Symbol>) -> Self {
        Production { head, body }
    }

    pub fn is_epsilon(&self) -> bool {
        self.body.iter().all(|symbol| *symbol == Symbol::Epsilon)
    }
}

impl Display for Production {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let body = self
            .body
            .iter()
            .map(|symbol| symbol.to_string())
            .collect::<Vec<String>>()
            .join(" ");
        write!(f, "{}", body)
    }
}

/// The production set together with its start symbol.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grammar {
    start: NonTerminal,
    productions: Vec<Production>,
}

impl Grammar {
    /// The declaration grammar:
    ///
    /// ```text
    /// Z → S #
    /// S → A B
    /// A → int | str | const | float | bool | array | dict
    /// B → ID
    /// ```
    pub fn declarations() -> Self {
        let mut productions = vec![
            MK_PRODUCTION!(NonTerminal::Z => NonTerminal::S.into(), Terminal::End.into()),
            MK_PRODUCTION!(NonTerminal::S => NonTerminal::A.into(), NonTerminal::B.into()),
        ];

        for keyword in Terminal::TYPE_KEYWORDS {
            productions.push(MK_PRODUCTION!(NonTerminal::A => keyword.into()));
        }

        productions.push(MK_PRODUCTION!(NonTerminal::B => Terminal::Id.into()));

        Grammar {
            start: NonTerminal::Z,
            productions,
        }
    }

    /// Builds a grammar over the same closed alphabet from an explicit
    /// production list.
    pub(crate) fn from_productions(start: NonTerminal, productions: Vec<Production>) -> Self {
        Grammar { start, productions }
    }

    pub fn start(&self) -> NonTerminal {
        self.start
    }

    pub fn productions(&self) -> &[Production] {
        &self.productions
    }

    pub fn productions_for(&self, head: NonTerminal) -> impl Iterator<Item = &Production> {
        self.productions
            .iter()
            .filter(move |production| production.head == head)
    }
}
