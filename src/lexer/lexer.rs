use std::rc::Rc;

use lazy_static::lazy_static;
use regex::Regex;

use crate::{
    config::constants::{DEFAULT_SOURCE_NAME, MAX_INPUT_TOKENS},
    errors::errors::{Error, ErrorImpl},
    grammar::symbols::Terminal,
    Position, Span, MK_TOKEN,
};

use super::tokens::{reserved, Token, TokenKind};

lazy_static! {
    static ref WORD: Regex = Regex::new(r"\S+").unwrap();
    static ref IDENTIFIER: Regex = Regex::new(r"^[A-Za-z_][A-Za-z0-9_]*$").unwrap();
}

/// A letter or underscore followed by letters, digits or underscores, and not
/// a reserved word in any casing.
pub fn is_valid_identifier(word: &str) -> bool {
    IDENTIFIER.is_match(word) && reserved(word).is_none()
}

#[derive(Clone)]
pub struct Lexer {
    tokens: Vec<Token>,
    source: String,
    file: Rc<String>,
}

impl Lexer {
    pub fn new(source: String, file: Option<String>) -> Lexer {
        let file_name = if let Some(file) = file {
            Rc::new(file)
        } else {
            Rc::new(String::from(DEFAULT_SOURCE_NAME))
        };

        Lexer {
            tokens: vec![],
            source,
            file: file_name,
        }
    }

    pub fn push(&mut self, token: Token) -> Result<(), Error> {
        if self.tokens.len() >= MAX_INPUT_TOKENS {
            return Err(Error::new(
                ErrorImpl::TokenOverflow {
                    capacity: MAX_INPUT_TOKENS,
                },
                token.span.start,
            ));
        }

        token.debug();
        self.tokens.push(token);
        Ok(())
    }

    pub fn span(&self, start: usize, end: usize) -> Span {
        Span {
            start: Position(start as u32, Rc::clone(&self.file)),
            end: Position(end as u32, Rc::clone(&self.file)),
        }
    }

    fn last_kind(&self) -> Option<TokenKind> {
        self.tokens.last().map(|token| token.kind)
    }
}

fn classify_word(lexer: &mut Lexer, word: &str, start: usize, end: usize) -> Result<(), Error> {
    let span = lexer.span(start, end);

    if let Some(terminal) = reserved(word) {
        return lexer.push(MK_TOKEN!(TokenKind::Terminal(terminal), String::from(word), span));
    }

    if is_valid_identifier(word) {
        // An explicit ID marker already precedes this word; it only needs the lexeme.
        if lexer.last_kind() != Some(TokenKind::Terminal(Terminal::Id)) {
            lexer.push(MK_TOKEN!(
                TokenKind::Terminal(Terminal::Id),
                String::from(word),
                span.clone()
            ))?;
        }
        return lexer.push(MK_TOKEN!(TokenKind::Lexeme, String::from(word), span));
    }

    lexer.push(MK_TOKEN!(TokenKind::Unknown, String::from(word), span))
}

/// Splits `source` on whitespace and classifies each word, then appends the
/// end marker.
pub fn tokenize(source: String, file: Option<String>) -> Result<Vec<Token>, Error> {
    let mut lex = Lexer::new(source, file);

    let words: Vec<(usize, usize, String)> = WORD
        .find_iter(&lex.source)
        .map(|word| (word.start(), word.end(), word.as_str().to_string()))
        .collect();

    for (start, end, word) in words {
        classify_word(&mut lex, &word, start, end)?;
    }

    let end = lex.source.len();
    let span = lex.span(end, end);
    lex.push(MK_TOKEN!(TokenKind::Terminal(Terminal::End), String::from("#"), span))?;
    Ok(lex.tokens)
}
