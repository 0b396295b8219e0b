//! Fixed limits and constants.
//!
//! The recognizer has no runtime configuration surface beyond the command
//! line flags of the binary; every capacity below is fixed at build time.

pub mod constants;
