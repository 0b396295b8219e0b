//! Table-driven predictive parser for declaration lines.
//!
//! The parser keeps an explicit stack of grammar symbols and consults the
//! LL(1) parse table once per step. The type keyword and identifier seen
//! along the way are collected in a pending declaration, which is written to
//! the symbol table only when the whole line is accepted.

use log::{debug, info};

use crate::{
    config::constants::LOCAL_SCOPE,
    errors::errors::{Error, ErrorImpl},
    grammar::{
        symbols::{NonTerminal, Symbol, Terminal},
        table::ParseTable,
    },
    lexer::{
        lexer::tokenize,
        tokens::{Token, TokenKind},
    },
    symbols::table::{SymbolId, SymbolTable},
    values::value::SymbolValue,
    Position,
};

use super::stack::ParseStack;

/// Outcome of a single parser step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Continue,
    Accept,
}

/// Type keyword and name captured while parsing, not yet committed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PendingDeclaration {
    pub type_keyword: Option<Terminal>,
    pub name: Option<String>,
}

impl PendingDeclaration {
    /// Inserts the captured declaration into `symbols` at the local scope.
    /// Nothing is inserted unless both the type and the name were seen.
    pub fn commit(self, symbols: &mut SymbolTable) -> Option<Declaration> {
        let type_keyword = self.type_keyword?;
        let name = self.name?;

        let id = symbols.insert(
            &name,
            type_keyword.name(),
            SymbolValue::default_for_keyword(type_keyword),
            LOCAL_SCOPE,
            false,
            true,
        )?;
        let stored = symbols.lookup_by_id(id, LOCAL_SCOPE)?;

        Some(Declaration {
            id,
            name: stored.name.clone(),
            type_keyword,
        })
    }
}

/// A declaration recorded in the symbol table after acceptance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Declaration {
    pub id: SymbolId,
    pub name: String,
    pub type_keyword: Terminal,
}

/// The main parser structure that maintains parsing state.
pub struct Parser<'t> {
    /// Table consulted for every nonterminal on top of the stack
    table: &'t ParseTable,
    /// Classified tokens, ending with the end marker
    tokens: Vec<Token>,
    /// Index of the lookahead token
    pos: usize,
    stack: ParseStack,
    pending: PendingDeclaration,
}

impl<'t> Parser<'t> {
    /// Creates a parser with its stack seeded with the end marker under the
    /// start symbol.
    pub fn new(table: &'t ParseTable, tokens: Vec<Token>) -> Result<Self, Error> {
        let mut parser = Parser {
            table,
            tokens,
            pos: 0,
            stack: ParseStack::default(),
            pending: PendingDeclaration::default(),
        };

        for symbol in [Symbol::Terminal(Terminal::End), Symbol::NonTerminal(NonTerminal::Z)] {
            parser
                .stack
                .push(symbol)
                .map_err(|error| Error::new(error, parser.get_position()))?;
        }

        Ok(parser)
    }

    /// Returns the lookahead token, or an `InputExhausted` error when the
    /// stream ran out before the end marker was matched.
    pub fn current_token(&self) -> Result<&Token, Error> {
        self.tokens
            .get(self.pos)
            .ok_or_else(|| Error::new(ErrorImpl::InputExhausted, self.get_position()))
    }

    pub fn advance(&mut self) {
        self.pos += 1;
    }

    /// Position of the lookahead token, or the end of the last token once the
    /// stream is exhausted.
    pub fn get_position(&self) -> Position {
        match self.tokens.get(self.pos).or(self.tokens.last()) {
            Some(token) if self.pos < self.tokens.len() => token.span.start.clone(),
            Some(token) => token.span.end.clone(),
            None => Position::null(),
        }
    }

    pub fn stack(&self) -> &ParseStack {
        &self.stack
    }

    pub fn pending(&self) -> &PendingDeclaration {
        &self.pending
    }

    /// Performs one transition of the predictive automaton.
    ///
    /// # Returns
    ///
    /// `Step::Accept` when the end marker on the stack meets the end marker
    /// in the input, `Step::Continue` after any other successful transition,
    /// and an Error when the line is rejected.
    pub fn step(&mut self) -> Result<Step, Error> {
        let top = match self.stack.peek() {
            Some(symbol) => symbol,
            None => return Err(Error::new(ErrorImpl::InputExhausted, self.get_position())),
        };
        let token = self.current_token()?.clone();

        debug!("stack {} | lookahead {}", self.stack, token.describe());

        match top {
            Symbol::Terminal(Terminal::End) if token.is_terminal(Terminal::End) => Ok(Step::Accept),
            Symbol::Terminal(expected) => self.match_terminal(expected, &token),
            Symbol::NonTerminal(non_terminal) => self.expand(non_terminal, &token),
            Symbol::Epsilon => {
                self.stack.pop();
                Ok(Step::Continue)
            }
        }
    }

    fn match_terminal(&mut self, expected: Terminal, token: &Token) -> Result<Step, Error> {
        if !token.is_terminal(expected) {
            return Err(Error::new(
                ErrorImpl::TerminalMismatch {
                    expected: expected.to_string(),
                    received: token.describe(),
                },
                token.span.start.clone(),
            ));
        }

        self.stack.pop();
        self.advance();

        if expected.is_type_keyword() {
            self.pending.type_keyword = Some(expected);
        }

        if expected == Terminal::Id {
            let lexeme = self.current_token()?.clone();
            if lexeme.kind != TokenKind::Lexeme {
                return Err(Error::new(
                    ErrorImpl::MissingIdentifier {
                        token: lexeme.describe(),
                    },
                    lexeme.span.start.clone(),
                ));
            }

            self.pending.name = Some(lexeme.value);
            self.advance();
        }

        Ok(Step::Continue)
    }

    fn expand(&mut self, non_terminal: NonTerminal, token: &Token) -> Result<Step, Error> {
        let unexpected = || {
            Error::new(
                ErrorImpl::UnexpectedToken {
                    token: token.value.clone(),
                    non_terminal: non_terminal.to_string(),
                    lookahead: token.describe(),
                },
                token.span.start.clone(),
            )
        };

        let table = self.table;
        let production = token
            .kind
            .as_terminal()
            .and_then(|lookahead| table.lookup(non_terminal, lookahead))
            .ok_or_else(unexpected)?;

        debug!("{} -> {}", non_terminal, production);

        self.stack.pop();
        self.stack
            .push_production(production)
            .map_err(|error| Error::new(error, token.span.start.clone()))?;

        Ok(Step::Continue)
    }

    /// Runs the automaton to completion. On acceptance the pending
    /// declaration is committed to `symbols`; on rejection `symbols` is left
    /// untouched.
    pub fn run(mut self, symbols: &mut SymbolTable) -> Result<Option<Declaration>, Error> {
        loop {
            if self.step()? == Step::Accept {
                break;
            }
        }

        let declaration = self.pending.commit(symbols);
        match &declaration {
            Some(declaration) => info!(
                "accepted declaration of `{}` as {} (id {})",
                declaration.name, declaration.type_keyword, declaration.id
            ),
            None => info!("accepted line without a complete declaration"),
        }

        Ok(declaration)
    }
}

/// Parses one classified declaration line against `table`.
///
/// # Arguments
///
/// * `table` - The LL(1) parse table
/// * `tokens` - Classified tokens, ending with the end marker
/// * `symbols` - The symbol table that receives the accepted declaration
///
/// # Returns
///
/// The recorded declaration, `None` for an accepted line that declared
/// nothing, or the Error that rejected the line.
pub fn parse(
    table: &ParseTable,
    tokens: Vec<Token>,
    symbols: &mut SymbolTable,
) -> Result<Option<Declaration>, Error> {
    Parser::new(table, tokens)?.run(symbols)
}

/// Classifies `line` and parses it.
pub fn parse_line(
    line: &str,
    source: Option<String>,
    table: &ParseTable,
    symbols: &mut SymbolTable,
) -> Result<Option<Declaration>, Error> {
    let tokens = tokenize(line.to_string(), source)?;
    parse(table, tokens, symbols)
}
