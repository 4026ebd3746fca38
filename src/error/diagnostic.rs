//! Diagnostic formatting for better error messages
//!
//! Tokens carry no line or column information, so illegal characters are
//! located by their ordinal in the token stream.

use colored::Colorize;

use super::ScanError;
use crate::lexer::Token;

/// A renderable error report
#[derive(Debug, Clone)]
pub struct Diagnostic {
    kind: &'static str,
    message: String,
    note: Option<String>,
}

impl Diagnostic {
    /// Create a diagnostic from an error
    pub fn new(error: &ScanError) -> Self {
        Self {
            kind: error.kind(),
            message: error.to_string(),
            note: None,
        }
    }

    /// Report an illegal token found at `index` in the token stream
    pub fn illegal_token(token: &Token, index: usize) -> Self {
        Self {
            kind: "Illegal Character",
            message: format!("unexpected character '{}'", token.literal.escape_debug()),
            note: Some(format!("token #{} in the stream", index + 1)),
        }
    }

    /// One diagnostic per illegal token in `tokens`
    pub fn for_illegal_tokens(tokens: &[Token]) -> Vec<Self> {
        tokens
            .iter()
            .enumerate()
            .filter(|(_, token)| token.is_illegal())
            .map(|(index, token)| Self::illegal_token(token, index))
            .collect()
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// Format the diagnostic with color
    pub fn format(&self) -> String {
        let mut output = format!("{}: {}\n", self.kind.red().bold(), self.message);

        if let Some(ref note) = self.note {
            output.push_str(&format!("  {} {}\n", "-->".blue().bold(), note));
        }

        output
    }
}

impl std::fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.format())
    }
}
