use std::{
    collections::{btree_map::Entry, BTreeMap},
    rc::Rc,
};

use log::info;

use crate::{
    errors::errors::{Error, ErrorImpl},
    Position,
};

use super::{
    grammar::{Grammar, Production},
    sets::FirstFollow,
    symbols::{NonTerminal, Terminal},
};

/// The nonterminal × terminal → production mapping that drives the parser.
///
/// Every `(nonterminal, terminal)` cell holds at most one production. A
/// missing cell is the "error" outcome of a lookup.
#[derive(Debug, Clone)]
pub struct ParseTable {
    sets: FirstFollow,
    entries: BTreeMap<(NonTerminal, Terminal), Production>,
}

impl ParseTable {
    /// Computes FIRST/FOLLOW for `grammar` and derives its table.
    pub fn build(grammar: &Grammar) -> Result<Self, Error> {
        let sets = FirstFollow::compute(grammar);
        Self::build_table(grammar, sets)
    }

    /// Derives the table from precomputed sets. For each production `X → α`
    /// there is one entry per terminal of FIRST(α), and when α is nullable one
    /// entry per terminal of FOLLOW(X). Two productions claiming the same cell
    /// is a construction error.
    pub fn build_table(grammar: &Grammar, sets: FirstFollow) -> Result<Self, Error> {
        let mut table = ParseTable {
            sets,
            entries: BTreeMap::new(),
        };

        for production in grammar.productions() {
            let (first, nullable) = table.sets.first_of_sequence(&production.body);
            for terminal in first {
                table.add_entry(production.head, terminal, production)?;
            }

            if nullable {
                let follow: Vec<Terminal> = table
                    .sets
                    .follow_of(production.head)
                    .iter()
                    .copied()
                    .collect();
                for terminal in follow {
                    table.add_entry(production.head, terminal, production)?;
                }
            }
        }

        info!("parse table built with {} entries", table.len());
        Ok(table)
    }

    fn add_entry(
        &mut self,
        non_terminal: NonTerminal,
        terminal: Terminal,
        production: &Production,
    ) -> Result<(), Error> {
        match self.entries.entry((non_terminal, terminal)) {
            Entry::Occupied(_) => Err(Error::new(
                ErrorImpl::DuplicateTableEntry {
                    non_terminal: non_terminal.to_string(),
                    terminal: terminal.to_string(),
                },
                Position(0, Rc::new(String::from("<grammar>"))),
            )),
            Entry::Vacant(slot) => {
                slot.insert(production.clone());
                Ok(())
            }
        }
    }

    pub fn lookup(&self, non_terminal: NonTerminal, terminal: Terminal) -> Option<&Production> {
        self.entries.get(&(non_terminal, terminal))
    }

    /// All `(nonterminal, terminal, production)` triples, ordered by cell.
    pub fn entries(&self) -> impl Iterator<Item = (NonTerminal, Terminal, &Production)> {
        self.entries
            .iter()
            .map(|((non_terminal, terminal), production)| (*non_terminal, *terminal, production))
    }

    pub fn sets(&self) -> &FirstFollow {
        &self.sets
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
