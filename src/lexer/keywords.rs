//! Keyword classification
//!
//! Reserved words live in immutable tables that are built once on first use
//! and shared by every scanner. There is one table per range spelling.

use std::collections::HashMap;

use lazy_static::lazy_static;

use super::token::TokenKind;
use crate::config::RangeKeyword;

/// Reserved words shared by every dialect
const BASE_KEYWORDS: [(&str, TokenKind); 9] = [
    ("funct", TokenKind::Function),
    ("let", TokenKind::Let),
    ("struct", TokenKind::Structure),
    ("if", TokenKind::If),
    ("el", TokenKind::Else),
    ("for", TokenKind::For),
    ("while", TokenKind::While),
    ("output", TokenKind::Return),
    ("do", TokenKind::Do),
];

lazy_static! {
    static ref BTWN_KEYWORDS: KeywordTable = KeywordTable::build(RangeKeyword::Btwn);
    static ref THROUGH_KEYWORDS: KeywordTable = KeywordTable::build(RangeKeyword::Through);
}

/// Read-only mapping from reserved-word spelling to token kind
#[derive(Debug)]
pub struct KeywordTable {
    words: HashMap<&'static str, TokenKind>,
}

impl KeywordTable {
    fn build(range: RangeKeyword) -> Self {
        let mut words: HashMap<&'static str, TokenKind> = BASE_KEYWORDS.into_iter().collect();
        words.insert(range.as_str(), TokenKind::Range);
        log::debug!("built keyword table with {} entries (range spelled '{}')", words.len(), range);
        Self { words }
    }

    /// The shared table for the given range spelling
    pub fn for_range(range: RangeKeyword) -> &'static KeywordTable {
        match range {
            RangeKeyword::Btwn => &*BTWN_KEYWORDS,
            RangeKeyword::Through => &*THROUGH_KEYWORDS,
        }
    }

    /// Resolve an identifier-shaped literal to its token kind.
    ///
    /// Only exact spellings match; anything else is an identifier.
    pub fn resolve(&self, literal: &str) -> TokenKind {
        self.words.get(literal).copied().unwrap_or(TokenKind::Ident)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Iterate over `(spelling, kind)` pairs in no particular order
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, TokenKind)> + '_ {
        self.words.iter().map(|(word, kind)| (*word, *kind))
    }
}

/// Resolve a literal against the default keyword table
pub fn lookup_ident(literal: &str) -> TokenKind {
    KeywordTable::for_range(RangeKeyword::default()).resolve(literal)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_keywords() {
        let table = KeywordTable::for_range(RangeKeyword::Btwn);
        assert_eq!(table.resolve("funct"), TokenKind::Function);
        assert_eq!(table.resolve("let"), TokenKind::Let);
        assert_eq!(table.resolve("struct"), TokenKind::Structure);
        assert_eq!(table.resolve("if"), TokenKind::If);
        assert_eq!(table.resolve("el"), TokenKind::Else);
        assert_eq!(table.resolve("for"), TokenKind::For);
        assert_eq!(table.resolve("while"), TokenKind::While);
        assert_eq!(table.resolve("output"), TokenKind::Return);
        assert_eq!(table.resolve("do"), TokenKind::Do);
        assert_eq!(table.resolve("btwn"), TokenKind::Range);
    }

    #[test]
    fn test_no_prefix_matching() {
        assert_eq!(lookup_ident("letter"), TokenKind::Ident);
        assert_eq!(lookup_ident("le"), TokenKind::Ident);
        assert_eq!(lookup_ident("else"), TokenKind::Ident);
        assert_eq!(lookup_ident("return"), TokenKind::Ident);
        assert_eq!(lookup_ident("Let"), TokenKind::Ident);
    }

    #[test]
    fn test_range_spelling_is_exclusive() {
        let btwn = KeywordTable::for_range(RangeKeyword::Btwn);
        let through = KeywordTable::for_range(RangeKeyword::Through);

        assert_eq!(btwn.resolve("through"), TokenKind::Ident);
        assert_eq!(through.resolve("through"), TokenKind::Range);
        assert_eq!(through.resolve("btwn"), TokenKind::Ident);
        assert_eq!(btwn.len(), 10);
        assert_eq!(through.len(), 10);
    }

    #[test]
    fn test_tables_are_shared() {
        let first = KeywordTable::for_range(RangeKeyword::Through);
        let second = KeywordTable::for_range(RangeKeyword::Through);
        assert!(std::ptr::eq(first, second));
        assert!(first.iter().all(|(_, kind)| kind.is_keyword()));
    }
}
