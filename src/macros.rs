//! Utility macros for the recognizer.
//!
//! This module defines helper macros used throughout the crate:
//!
//! - `MK_TOKEN!` - Creates a Token instance
//! - `MK_PRODUCTION!` - Creates a grammar Production
//!
//! These macros reduce boilerplate in the classifier and the grammar tables.

/// Creates a Token instance.
///
/// # Arguments
///
/// * `$kind` - The TokenKind
/// * `$value` - The token's string value
/// * `$span` - The source span
///
/// # Example
///
/// ```ignore
/// let token = MK_TOKEN!(TokenKind::Terminal(Terminal::Int), "int".to_string(), span);
/// ```
#[macro_export]
macro_rules! MK_TOKEN {
    ($kind:expr, $value:expr, $span:expr) => {
        Token {
            kind: $kind,
            value: $value,
            span: $span,
        }
    };
}

/// Creates a Production from a head nonterminal and its right-hand side.
///
/// # Example
///
/// ```ignore
/// let production = MK_PRODUCTION!(NonTerminal::S => Symbol::NonTerminal(NonTerminal::A), Symbol::NonTerminal(NonTerminal::B));
/// ```
#[macro_export]
macro_rules! MK_PRODUCTION {
    ($head:expr => $($symbol:expr),+ $(,)?) => {
        Production::new($head, vec![$($symbol),+])
    };
}
