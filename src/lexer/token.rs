//! Token definitions
//!
//! This module defines the closed set of token kinds and the token value
//! handed out by the scanner.

use std::fmt;

/// A token produced by the scanner
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub literal: String,
}

impl Token {
    /// Create a new token
    pub fn new(kind: TokenKind, literal: impl Into<String>) -> Self {
        Self {
            kind,
            literal: literal.into(),
        }
    }

    /// The end-of-input token, which always carries an empty literal
    pub fn eof() -> Self {
        Self::new(TokenKind::Eof, String::new())
    }

    pub fn is_eof(&self) -> bool {
        self.kind == TokenKind::Eof
    }

    pub fn is_illegal(&self) -> bool {
        self.kind == TokenKind::Illegal
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({:?})", self.kind, self.literal)
    }
}

/// Token kinds
///
/// Only part of this vocabulary is reachable with the default scanner
/// configuration. The arithmetic, comparison and bracket kinds are emitted
/// under [`OperatorSet::Extended`](crate::config::OperatorSet), while
/// `Equal`, `String` and `Boolean` are reserved for the surrounding language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    Illegal,
    Eof,

    // Identifiers and literals
    Ident,
    Int,
    String,
    Boolean,

    // Operators
    Assign,     // =
    Plus,       // +
    Sub,        // -
    Mul,        // *
    Div,        // /
    Equal,      // ==
    Greater,    // >
    Lesser,     // <

    // Delimiters
    Comma,      // ,
    Semicolon,  // ;
    Colon,      // :
    LParen,     // (
    RParen,     // )
    LBrace,     // {
    RBrace,     // }
    LBracket,   // [
    RBracket,   // ]

    // Keywords
    Function,
    Let,
    Structure,
    If,
    Else,
    For,
    While,
    Return,
    Do,
    Range,
}

impl TokenKind {
    /// The debug name of this kind, e.g. `"IDENT"` or `"SEMICOLON"`
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Illegal => "ILLEGAL",
            Self::Eof => "EOF",
            Self::Ident => "IDENT",
            Self::Int => "INT",
            Self::String => "STRING",
            Self::Boolean => "BOOLEAN",
            Self::Assign => "ASSIGN",
            Self::Plus => "PLUS",
            Self::Sub => "SUB",
            Self::Mul => "MUL",
            Self::Div => "DIV",
            Self::Equal => "EQUAL",
            Self::Greater => "GREATER",
            Self::Lesser => "LESSER",
            Self::Comma => "COMMA",
            Self::Semicolon => "SEMICOLON",
            Self::Colon => "COLON",
            Self::LParen => "LPAREN",
            Self::RParen => "RPAREN",
            Self::LBrace => "LBRACE",
            Self::RBrace => "RBRACE",
            Self::LBracket => "LBRACKET",
            Self::RBracket => "RBRACKET",
            Self::Function => "FUNCTION",
            Self::Let => "LET",
            Self::Structure => "STRUCTURE",
            Self::If => "IF",
            Self::Else => "ELSE",
            Self::For => "FOR",
            Self::While => "WHILE",
            Self::Return => "RETURN",
            Self::Do => "DO",
            Self::Range => "RANGE",
        }
    }

    /// Whether this kind is produced by the keyword classifier
    pub fn is_keyword(&self) -> bool {
        matches!(
            self,
            Self::Function
                | Self::Let
                | Self::Structure
                | Self::If
                | Self::Else
                | Self::For
                | Self::While
                | Self::Return
                | Self::Do
                | Self::Range
        )
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
