//! Error types and error handling for the recognizer.
//!
//! This module defines the error types used throughout the analysis of a
//! declaration. It includes:
//!
//! - Error structures with source position information
//! - Specific error variants for table construction, classification and parsing
//! - Container errors for the value model
//! - Error formatting and display functionality

pub mod errors;

#[cfg(test)]
mod tests;
