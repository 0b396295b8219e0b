//! Grammar description and LL(1) parse table.
//!
//! This module holds the closed declaration grammar and everything derived
//! from it once at startup:
//!
//! - Terminal, nonterminal and stack symbol enumerations
//! - The production set
//! - Nullable, FIRST and FOLLOW sets (fixed-point computation)
//! - The nonterminal × terminal parse table, which rejects conflicting cells
//! - Text rendering of the sets and the table

pub mod display;
pub mod grammar;
pub mod sets;
pub mod symbols;
pub mod table;
