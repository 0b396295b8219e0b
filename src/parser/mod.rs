//! Predictive parser for declaration lines.
//!
//! This module drives the classified token stream through the LL(1) parse
//! table using an explicit symbol stack:
//!
//! - A bounded stack seeded with the end marker and the start symbol
//! - One table lookup per nonterminal on top of the stack
//! - Capture of the declared type and name, committed to the symbol table
//!   only when the line is accepted
//!
//! Any failure rejects the whole line; there is no error recovery.

pub mod parser;
pub mod stack;

#[cfg(test)]
mod tests;
