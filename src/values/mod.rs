//! Typed value model for declared symbols.
//!
//! A declared value is a tagged union over integers, floats, bounded strings,
//! booleans, growable arrays and hashed dictionaries.

pub mod array;
pub mod dict;
pub mod value;
