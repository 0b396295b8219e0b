use std::collections::{BTreeMap, BTreeSet};

use log::debug;

use super::{
    grammar::Grammar,
    symbols::{NonTerminal, Symbol, Terminal},
};

pub type TerminalSet = BTreeSet<Terminal>;

static EMPTY: TerminalSet = BTreeSet::new();

/// Nullable, FIRST and FOLLOW information for every nonterminal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FirstFollow {
    nullable: BTreeSet<NonTerminal>,
    first: BTreeMap<NonTerminal, TerminalSet>,
    follow: BTreeMap<NonTerminal, TerminalSet>,
}

impl FirstFollow {
    /// Computes the sets by fixed-point iteration over the production set.
    /// The end marker is seeded into FOLLOW of the start symbol.
    pub fn compute(grammar: &Grammar) -> Self {
        let mut sets = FirstFollow {
            nullable: BTreeSet::new(),
            first: NonTerminal::ALL
                .iter()
                .map(|non_terminal| (*non_terminal, BTreeSet::new()))
                .collect(),
            follow: NonTerminal::ALL
                .iter()
                .map(|non_terminal| (*non_terminal, BTreeSet::new()))
                .collect(),
        };

        let mut changed = true;
        let mut rounds = 0;
        while changed {
            changed = false;
            rounds += 1;

            for production in grammar.productions() {
                let (first, nullable) = sets.first_of_sequence(&production.body);

                let entry = sets.first.entry(production.head).or_default();
                for terminal in first {
                    changed |= entry.insert(terminal);
                }

                if nullable {
                    changed |= sets.nullable.insert(production.head);
                }
            }
        }
        debug!("FIRST sets stable after {} rounds", rounds);

        sets.follow
            .entry(grammar.start())
            .or_default()
            .insert(Terminal::End);

        changed = true;
        rounds = 0;
        while changed {
            changed = false;
            rounds += 1;

            for production in grammar.productions() {
                for (index, symbol) in production.body.iter().enumerate() {
                    let Symbol::NonTerminal(target) = symbol else {
                        continue;
                    };

                    let (mut additions, rest_nullable) =
                        sets.first_of_sequence(&production.body[index + 1..]);
                    if rest_nullable {
                        additions.extend(sets.follow_of(production.head).iter().copied());
                    }

                    let entry = sets.follow.entry(*target).or_default();
                    for terminal in additions {
                        changed |= entry.insert(terminal);
                    }
                }
            }
        }
        debug!("FOLLOW sets stable after {} rounds", rounds);

        sets
    }

    /// FIRST of a symbol sequence and whether the whole sequence can derive
    /// the empty string.
    pub fn first_of_sequence(&self, symbols: &[Symbol]) -> (TerminalSet, bool) {
        let mut result = BTreeSet::new();

        for symbol in symbols {
            match symbol {
                Symbol::Epsilon => continue,
                Symbol::Terminal(terminal) => {
                    result.insert(*terminal);
                    return (result, false);
                }
                Symbol::NonTerminal(non_terminal) => {
                    result.extend(self.first_of(*non_terminal).iter().copied());
                    if !self.is_nullable(*non_terminal) {
                        return (result, false);
                    }
                }
            }
        }

        (result, true)
    }

    pub fn first_of(&self, non_terminal: NonTerminal) -> &TerminalSet {
        self.first.get(&non_terminal).unwrap_or(&EMPTY)
    }

    pub fn follow_of(&self, non_terminal: NonTerminal) -> &TerminalSet {
        self.follow.get(&non_terminal).unwrap_or(&EMPTY)
    }

    pub fn is_nullable(&self, non_terminal: NonTerminal) -> bool {
        self.nullable.contains(&non_terminal)
    }

    pub fn first(&self) -> &BTreeMap<NonTerminal, TerminalSet> {
        &self.first
    }

    pub fn follow(&self) -> &BTreeMap<NonTerminal, TerminalSet> {
        &self.follow
    }
}
