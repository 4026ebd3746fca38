//! # scanlet
//!
//! The lexical-analysis front end of a small language: it turns source text
//! into a stream of classified tokens for a later parsing stage.
//!
//! ## Architecture
//!
//! - `lexer`: the scanner, token kinds and keyword classification
//! - `config`: range-keyword spelling and operator-set policy
//! - `error`: error types and diagnostics for hosts of the scanner
//!
//! ```
//! use scanlet::{Scanner, TokenKind};
//!
//! let mut scanner = Scanner::new("let five = 5;");
//! assert_eq!(scanner.next_token().kind, TokenKind::Let);
//! ```

pub mod config;
pub mod error;
pub mod lexer;

// Re-export commonly used types
pub use config::{OperatorSet, RangeKeyword, ScannerConfig};
pub use error::{ConfigError, Diagnostic, ScanError, ScanResult};
pub use lexer::{Scanner, Token, TokenKind};

/// Version of the crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Scan `source` with the default configuration
///
/// Returns every token up to and including the EOF token. Illegal
/// characters appear in the stream as [`TokenKind::Illegal`] tokens.
pub fn tokenize(source: &str) -> Vec<Token> {
    Scanner::new(source).tokenize()
}

/// Scan `source` with an explicit configuration
pub fn tokenize_with(source: &str, config: ScannerConfig) -> Vec<Token> {
    Scanner::with_config(source, config).tokenize()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }

    #[test]
    fn test_tokenize_ends_with_eof() {
        let tokens = tokenize("x");
        assert_eq!(tokens.len(), 2);
        assert!(tokens[1].is_eof());
        assert!(tokenize("")[0].is_eof());
    }
}
