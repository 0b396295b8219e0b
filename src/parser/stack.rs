use std::fmt::Display;

use crate::{
    config::constants::MAX_STACK_DEPTH,
    errors::errors::ErrorImpl,
    grammar::{grammar::Production, symbols::Symbol},
};

/// Bounded stack of grammar symbols. The top is the last element.
#[derive(Debug, Clone)]
pub struct ParseStack {
    items: Vec<Symbol>,
    capacity: usize,
}

impl Default for ParseStack {
    fn default() -> Self {
        Self::with_capacity(MAX_STACK_DEPTH)
    }
}

impl ParseStack {
    pub fn with_capacity(capacity: usize) -> Self {
        ParseStack {
            items: Vec::with_capacity(capacity),
            capacity,
        }
    }

    pub fn push(&mut self, symbol: Symbol) -> Result<(), ErrorImpl> {
        if self.items.len() >= self.capacity {
            return Err(ErrorImpl::StackOverflow {
                capacity: self.capacity,
            });
        }

        self.items.push(symbol);
        Ok(())
    }

    /// Pushes the body of `production` right to left so its first symbol ends
    /// up on top. Epsilon pushes nothing.
    pub fn push_production(&mut self, production: &Production) -> Result<(), ErrorImpl> {
        for symbol in production.body.iter().rev() {
            if *symbol != Symbol::Epsilon {
                self.push(*symbol)?;
            }
        }
        Ok(())
    }

    pub fn pop(&mut self) -> Option<Symbol> {
        self.items.pop()
    }

    pub fn peek(&self) -> Option<Symbol> {
        self.items.last().copied()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Bottom to top.
    pub fn iter(&self) -> impl Iterator<Item = &Symbol> {
        self.items.iter()
    }
}

impl Display for ParseStack {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let items = self
            .items
            .iter()
            .map(|symbol| symbol.to_string())
            .collect::<Vec<String>>()
            .join(" ");
        write!(f, "[{}]", items)
    }
}
