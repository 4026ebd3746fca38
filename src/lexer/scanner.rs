//! Scanner implementation
//!
//! This module implements lexical analysis, converting source text into
//! tokens one at a time.

use std::iter::FusedIterator;

use log::{debug, trace};

use super::char_class::{is_digit, is_letter, CharClass};
use super::keywords::KeywordTable;
use super::token::{Token, TokenKind};
use crate::config::ScannerConfig;

/// Cached as the current byte once the cursor has run off the end of the source
const SENTINEL: u8 = 0;

/// Scanner over a fully materialized source string
///
/// The cursor is a `position`/`next_position` pair. Construction primes the
/// cursor, so the current byte is always valid to inspect.
#[derive(Debug, Clone)]
pub struct Scanner {
    source: String,
    position: usize,
    next_position: usize,
    current: u8,
    config: ScannerConfig,
    keywords: &'static KeywordTable,
    finished: bool,
}

impl Scanner {
    /// Create a scanner with the default configuration
    pub fn new(source: impl Into<String>) -> Self {
        Self::with_config(source, ScannerConfig::default())
    }

    /// Create a scanner with an explicit configuration
    pub fn with_config(source: impl Into<String>, config: ScannerConfig) -> Self {
        let mut scanner = Self {
            source: source.into(),
            position: 0,
            next_position: 0,
            current: SENTINEL,
            config,
            keywords: KeywordTable::for_range(config.range_keyword),
            finished: false,
        };
        scanner.advance();

        debug!(
            "scanner ready: {} bytes, range keyword '{}', {:?} operators",
            scanner.source.len(),
            config.range_keyword,
            config.operators
        );
        scanner
    }

    pub fn config(&self) -> ScannerConfig {
        self.config
    }

    /// Produce the next token.
    ///
    /// Once the source is exhausted this returns an EOF token on every call.
    pub fn next_token(&mut self) -> Token {
        self.skip_insignificant();

        let token = match self.class() {
            CharClass::Fixed(kind) => {
                let token = Token::new(kind, char::from(self.current).to_string());
                self.advance();
                token
            }
            CharClass::EndOfInput => Token::eof(),
            // Read routines leave the cursor one past the lexeme.
            CharClass::LetterStart => {
                let literal = self.read_identifier();
                Token::new(self.keywords.resolve(&literal), literal)
            }
            CharClass::DigitStart => Token::new(TokenKind::Int, self.read_integer()),
            CharClass::Other => self.read_illegal(),
            CharClass::Whitespace => unreachable!("whitespace is skipped before classification"),
        };

        trace!("token {}", token);
        token
    }

    /// Scan the rest of the source, returning every token up to and including EOF
    pub fn tokenize(&mut self) -> Vec<Token> {
        let tokens: Vec<Token> = self.by_ref().collect();
        debug!(
            "tokenized {} tokens ({} illegal)",
            tokens.len(),
            tokens.iter().filter(|token| token.is_illegal()).count()
        );
        tokens
    }

    fn class(&self) -> CharClass {
        CharClass::of(self.current, self.at_end(), self.config.operators)
    }

    fn at_end(&self) -> bool {
        self.position >= self.source.len()
    }

    /// Move the cursor forward one byte, caching the sentinel past the end
    fn advance(&mut self) {
        self.current = self
            .source
            .as_bytes()
            .get(self.next_position)
            .copied()
            .unwrap_or(SENTINEL);
        self.position = self.next_position;
        self.next_position += 1;
    }

    fn skip_insignificant(&mut self) {
        while self.class() == CharClass::Whitespace {
            self.advance();
        }
    }

    fn read_identifier(&mut self) -> String {
        self.read_while(is_letter)
    }

    fn read_integer(&mut self) -> String {
        self.read_while(is_digit)
    }

    /// Greedy maximal-munch read of the run of bytes matching `predicate`
    fn read_while(&mut self, predicate: fn(u8) -> bool) -> String {
        let start = self.position;
        while !self.at_end() && predicate(self.current) {
            self.advance();
        }
        self.source[start..self.position].to_string()
    }

    /// Consume one unrecognised character. A multi-byte character is kept
    /// whole so the literal stays valid UTF-8.
    fn read_illegal(&mut self) -> Token {
        let start = self.position;
        let width = self.source[start..]
            .chars()
            .next()
            .map_or(1, char::len_utf8);
        for _ in 0..width {
            self.advance();
        }
        Token::new(TokenKind::Illegal, &self.source[start..self.position])
    }
}

impl Iterator for Scanner {
    type Item = Token;

    /// Yields tokens through the first EOF, then `None`
    fn next(&mut self) -> Option<Token> {
        if self.finished {
            return None;
        }
        let token = self.next_token();
        self.finished = token.is_eof();
        Some(token)
    }
}

impl FusedIterator for Scanner {}
