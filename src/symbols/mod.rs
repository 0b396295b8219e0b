//! Scoped symbol table.
//!
//! Declarations accepted by the parser are recorded here. The table is a
//! fixed set of hash-chained buckets keyed by name, with a monotonic id
//! counter and two scope levels (global and local). Local lookups fall back to
//! the global scope.

pub mod display;
pub mod table;
