//! Scanner configuration
//!
//! The language has two open policy choices: which spelling introduces a
//! range, and how many single-character operators the scanner recognises.
//! Both are selected here; the defaults reproduce the core token set.

use std::fmt;
use std::str::FromStr;

use crate::error::ConfigError;

/// Spelling of the keyword that resolves to [`TokenKind::Range`](crate::TokenKind::Range)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum RangeKeyword {
    #[default]
    Btwn,
    Through,
}

impl RangeKeyword {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Btwn => "btwn",
            Self::Through => "through",
        }
    }
}

impl fmt::Display for RangeKeyword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RangeKeyword {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "btwn" => Ok(Self::Btwn),
            "through" => Ok(Self::Through),
            _ => Err(ConfigError::UnknownRangeKeyword(s.to_string())),
        }
    }
}

/// Set of single-character operators the scanner turns into fixed tokens
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum OperatorSet {
    /// `= ; ( ) , + { }`
    #[default]
    Core,
    /// The core set plus `- * / : [ ] > <`
    Extended,
}

/// Configuration for a [`Scanner`](crate::Scanner)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ScannerConfig {
    pub range_keyword: RangeKeyword,
    pub operators: OperatorSet,
}

impl ScannerConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_range_keyword(mut self, range_keyword: RangeKeyword) -> Self {
        self.range_keyword = range_keyword;
        self
    }

    pub fn with_operators(mut self, operators: OperatorSet) -> Self {
        self.operators = operators;
        self
    }
}
