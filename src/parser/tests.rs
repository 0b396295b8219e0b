//! Unit tests for the parser module.
//!
//! This module contains tests for:
//! - The bounded symbol stack
//! - Acceptance of every type keyword
//! - Each rejection path and its reported position
//! - Commit-on-accept behaviour of the pending declaration

use crate::{
    config::constants::{LOCAL_SCOPE, MAX_STACK_DEPTH},
    errors::errors::{Error, ErrorImpl},
    grammar::{
        grammar::{Grammar, Production},
        symbols::{NonTerminal, Symbol, Terminal},
        table::ParseTable,
    },
    lexer::lexer::tokenize,
    symbols::table::{SymbolId, SymbolTable},
    values::value::SymbolValue,
};

use super::{
    parser::{parse, parse_line, Declaration, Parser, PendingDeclaration, Step},
    stack::ParseStack,
};

fn table() -> ParseTable {
    ParseTable::build(&Grammar::declarations()).unwrap()
}

fn run(line: &str) -> (Result<Option<Declaration>, Error>, SymbolTable) {
    let table = table();
    let mut symbols = SymbolTable::new();
    let result = parse_line(line, Some("test".to_string()), &table, &mut symbols);
    (result, symbols)
}

#[test]
fn test_stack_push_pop_peek() {
    let mut stack = ParseStack::default();
    assert!(stack.is_empty());
    assert_eq!(stack.capacity(), MAX_STACK_DEPTH);

    stack.push(Symbol::Terminal(Terminal::End)).unwrap();
    stack.push(Symbol::NonTerminal(NonTerminal::Z)).unwrap();

    assert_eq!(stack.len(), 2);
    assert_eq!(stack.peek(), Some(Symbol::NonTerminal(NonTerminal::Z)));
    assert_eq!(stack.pop(), Some(Symbol::NonTerminal(NonTerminal::Z)));
    assert_eq!(stack.pop(), Some(Symbol::Terminal(Terminal::End)));
    assert_eq!(stack.pop(), None);
    assert_eq!(stack.peek(), None);
}

#[test]
fn test_stack_overflow() {
    let mut stack = ParseStack::with_capacity(2);
    stack.push(Symbol::Epsilon).unwrap();
    stack.push(Symbol::Epsilon).unwrap();

    assert_eq!(
        stack.push(Symbol::Epsilon),
        Err(ErrorImpl::StackOverflow { capacity: 2 })
    );
    assert_eq!(stack.len(), 2);
}

#[test]
fn test_push_production_reverses_body() {
    let mut stack = ParseStack::default();
    let production = Production::new(
        NonTerminal::S,
        vec![NonTerminal::A.into(), NonTerminal::B.into()],
    );

    stack.push_production(&production).unwrap();

    assert_eq!(stack.pop(), Some(Symbol::NonTerminal(NonTerminal::A)));
    assert_eq!(stack.pop(), Some(Symbol::NonTerminal(NonTerminal::B)));
}

#[test]
fn test_push_epsilon_production_pushes_nothing() {
    let mut stack = ParseStack::default();
    let production = Production::new(NonTerminal::B, vec![Symbol::Epsilon]);

    stack.push_production(&production).unwrap();

    assert!(stack.is_empty());
}

#[test]
fn test_stack_display() {
    let mut stack = ParseStack::default();
    stack.push(Symbol::Terminal(Terminal::End)).unwrap();
    stack.push(Symbol::NonTerminal(NonTerminal::Z)).unwrap();

    assert_eq!(stack.to_string(), "[# Z]");
}

#[test]
fn test_parser_starts_with_end_and_start_symbol() {
    let table = table();
    let tokens = tokenize("int x".to_string(), None).unwrap();
    let parser = Parser::new(&table, tokens).unwrap();

    let stack = parser.stack().iter().copied().collect::<Vec<Symbol>>();
    assert_eq!(
        stack,
        vec![
            Symbol::Terminal(Terminal::End),
            Symbol::NonTerminal(NonTerminal::Z)
        ]
    );
}

#[test]
fn test_parser_steps_until_accept() {
    let table = table();
    let tokens = tokenize("float ratio".to_string(), None).unwrap();
    let mut parser = Parser::new(&table, tokens).unwrap();

    let mut steps = 0;
    while parser.step().unwrap() == Step::Continue {
        steps += 1;
    }

    // Z, S, A expansions, then the float and ID matches
    assert_eq!(steps, 6);
    assert_eq!(
        parser.pending(),
        &PendingDeclaration {
            type_keyword: Some(Terminal::Float),
            name: Some("ratio".to_string()),
        }
    );
}

#[test]
fn test_accepts_simple_declaration() {
    let (result, symbols) = run("int counter");
    let declaration = result.unwrap().unwrap();

    assert_eq!(declaration.name, "counter");
    assert_eq!(declaration.type_keyword, Terminal::Int);
    assert_eq!(declaration.id, SymbolId(0));

    let entry = symbols.lookup_by_name("counter", LOCAL_SCOPE).unwrap();
    assert_eq!(entry.type_name, "int");
    assert_eq!(entry.scope, LOCAL_SCOPE);
    assert_eq!(entry.value, Some(SymbolValue::Integer(0)));
    assert!(entry.is_initialized);
    assert!(!entry.is_const);
}

#[test]
fn test_accepts_every_type_keyword() {
    for keyword in Terminal::TYPE_KEYWORDS {
        let line = format!("{} value", keyword.name().to_uppercase());
        let (result, symbols) = run(&line);

        let declaration = result.unwrap().unwrap();
        assert_eq!(declaration.type_keyword, keyword);
        assert_eq!(symbols.len(), 1);
        assert_eq!(
            symbols.lookup_by_name("value", LOCAL_SCOPE).unwrap().type_name,
            keyword.name()
        );
    }
}

#[test]
fn test_const_declaration_has_no_value() {
    let (result, symbols) = run("const limit");

    assert!(result.unwrap().is_some());
    assert_eq!(symbols.lookup_by_name("limit", LOCAL_SCOPE).unwrap().value, None);
}

#[test]
fn test_explicit_id_marker() {
    let (result, symbols) = run("str ID label");

    assert_eq!(result.unwrap().unwrap().name, "label");
    assert!(symbols.exists_by_name("label", LOCAL_SCOPE));
}

#[test]
fn test_explicit_end_marker_stops_the_parse() {
    let (result, symbols) = run("bool ready # trailing words");

    assert_eq!(result.unwrap().unwrap().name, "ready");
    assert_eq!(symbols.len(), 1);
}

#[test]
fn test_rejects_identifier_before_type() {
    let (result, symbols) = run("counter INT");
    let error = result.unwrap_err();

    assert_eq!(
        error.get_internal_error(),
        &ErrorImpl::UnexpectedToken {
            token: "counter".to_string(),
            non_terminal: "Z".to_string(),
            lookahead: "ID".to_string(),
        }
    );
    assert_eq!(error.get_position().0, 0);
    assert!(symbols.is_empty());
}

#[test]
fn test_rejects_missing_identifier() {
    let (result, symbols) = run("DICT");
    let error = result.unwrap_err();

    assert_eq!(
        error.get_internal_error(),
        &ErrorImpl::UnexpectedToken {
            token: "#".to_string(),
            non_terminal: "B".to_string(),
            lookahead: "#".to_string(),
        }
    );
    assert_eq!(error.get_position().0, 4);
    assert!(symbols.is_empty());
}

#[test]
fn test_rejects_unknown_word() {
    let (result, symbols) = run("int 9lives");
    let error = result.unwrap_err();

    assert_eq!(error.get_error_name(), "UnexpectedToken");
    assert_eq!(error.get_position().0, 4);
    assert!(symbols.is_empty());
}

#[test]
fn test_rejects_extra_type_keyword() {
    let (result, symbols) = run("int float x");
    let error = result.unwrap_err();

    assert_eq!(
        error.get_internal_error(),
        &ErrorImpl::UnexpectedToken {
            token: "float".to_string(),
            non_terminal: "B".to_string(),
            lookahead: "float".to_string(),
        }
    );
    assert!(symbols.is_empty());
}

#[test]
fn test_rejects_trailing_identifier() {
    let (result, symbols) = run("int a b");
    let error = result.unwrap_err();

    assert_eq!(
        error.get_internal_error(),
        &ErrorImpl::TerminalMismatch {
            expected: "#".to_string(),
            received: "ID".to_string(),
        }
    );
    assert_eq!(error.get_position().0, 6);
    assert!(symbols.is_empty());
}

#[test]
fn test_rejects_id_marker_without_lexeme() {
    let (result, symbols) = run("int ID");
    let error = result.unwrap_err();

    assert_eq!(
        error.get_internal_error(),
        &ErrorImpl::MissingIdentifier {
            token: "#".to_string()
        }
    );
    assert!(symbols.is_empty());
}

#[test]
fn test_rejects_empty_line() {
    let (result, symbols) = run("   ");

    assert_eq!(result.unwrap_err().get_error_name(), "UnexpectedToken");
    assert!(symbols.is_empty());
}

#[test]
fn test_empty_token_stream_is_exhausted() {
    let table = table();
    let mut symbols = SymbolTable::new();

    let error = parse(&table, vec![], &mut symbols).unwrap_err();

    assert_eq!(error.get_internal_error(), &ErrorImpl::InputExhausted);
}

#[test]
fn test_repeated_declarations_shadow() {
    let table = table();
    let mut symbols = SymbolTable::new();

    parse_line("int x", None, &table, &mut symbols).unwrap();
    let second = parse_line("float x", None, &table, &mut symbols)
        .unwrap()
        .unwrap();

    assert_eq!(symbols.len(), 2);
    assert_eq!(second.id, SymbolId(1));
    assert_eq!(
        symbols.lookup_by_name("x", LOCAL_SCOPE).unwrap().type_name,
        "float"
    );
}

#[test]
fn test_incomplete_pending_declaration_commits_nothing() {
    let mut symbols = SymbolTable::new();
    let pending = PendingDeclaration {
        type_keyword: Some(Terminal::Int),
        name: None,
    };

    assert!(pending.commit(&mut symbols).is_none());
    assert!(symbols.is_empty());
}

#[test]
fn test_long_identifier_is_recorded_bounded() {
    let long = "v".repeat(70);
    let (result, mut symbols) = run(&format!("int {}", long));
    let declaration = result.unwrap().unwrap();

    assert_eq!(declaration.name, "v".repeat(63));
    assert_eq!(symbols.lookup_by_name(&long, LOCAL_SCOPE).unwrap().id, declaration.id);
    assert_eq!(symbols.delete_by_name(&long).unwrap().id, declaration.id);
}
