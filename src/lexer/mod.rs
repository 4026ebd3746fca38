//! Lexical analysis module
//!
//! This module handles tokenization of source text.

mod char_class;
pub mod keywords;
pub mod scanner;
pub mod token;

pub use char_class::CharClass;
pub use keywords::{lookup_ident, KeywordTable};
pub use scanner::Scanner;
pub use token::{Token, TokenKind};
