//! Character classes the scanner dispatches on.

use super::token::TokenKind;
use crate::config::OperatorSet;

/// The lexical class of the byte under the cursor
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CharClass {
    Whitespace,
    LetterStart,
    DigitStart,
    Fixed(TokenKind),
    EndOfInput,
    Other,
}

impl CharClass {
    /// Classify `byte`. End-of-input is decided by the cursor, not by the
    /// byte value, so an interior NUL classifies as [`CharClass::Other`].
    pub fn of(byte: u8, at_end: bool, operators: OperatorSet) -> Self {
        if at_end {
            return Self::EndOfInput;
        }

        if is_whitespace(byte) {
            Self::Whitespace
        } else if is_letter(byte) {
            Self::LetterStart
        } else if is_digit(byte) {
            Self::DigitStart
        } else if let Some(kind) = fixed_token(byte, operators) {
            Self::Fixed(kind)
        } else {
            Self::Other
        }
    }
}

pub fn is_whitespace(byte: u8) -> bool {
    matches!(byte, b' ' | b'\t' | b'\n' | b'\r')
}

/// ASCII letters and `_`. Digits are deliberately not identifier characters.
pub fn is_letter(byte: u8) -> bool {
    byte.is_ascii_alphabetic() || byte == b'_'
}

pub fn is_digit(byte: u8) -> bool {
    byte.is_ascii_digit()
}

fn fixed_token(byte: u8, operators: OperatorSet) -> Option<TokenKind> {
    let core = match byte {
        b'=' => Some(TokenKind::Assign),
        b';' => Some(TokenKind::Semicolon),
        b'(' => Some(TokenKind::LParen),
        b')' => Some(TokenKind::RParen),
        b',' => Some(TokenKind::Comma),
        b'+' => Some(TokenKind::Plus),
        b'{' => Some(TokenKind::LBrace),
        b'}' => Some(TokenKind::RBrace),
        _ => None,
    };

    match operators {
        OperatorSet::Core => core,
        OperatorSet::Extended => core.or(match byte {
            b'-' => Some(TokenKind::Sub),
            b'*' => Some(TokenKind::Mul),
            b'/' => Some(TokenKind::Div),
            b':' => Some(TokenKind::Colon),
            b'[' => Some(TokenKind::LBracket),
            b']' => Some(TokenKind::RBracket),
            b'>' => Some(TokenKind::Greater),
            b'<' => Some(TokenKind::Lesser),
            _ => None,
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classes() {
        let core = OperatorSet::Core;
        assert_eq!(CharClass::of(b' ', false, core), CharClass::Whitespace);
        assert_eq!(CharClass::of(b'\r', false, core), CharClass::Whitespace);
        assert_eq!(CharClass::of(b'_', false, core), CharClass::LetterStart);
        assert_eq!(CharClass::of(b'Z', false, core), CharClass::LetterStart);
        assert_eq!(CharClass::of(b'7', false, core), CharClass::DigitStart);
        assert_eq!(CharClass::of(b'{', false, core), CharClass::Fixed(TokenKind::LBrace));
        assert_eq!(CharClass::of(b'@', false, core), CharClass::Other);
    }

    #[test]
    fn test_end_of_input_is_positional() {
        assert_eq!(CharClass::of(0, true, OperatorSet::Core), CharClass::EndOfInput);
        assert_eq!(CharClass::of(0, false, OperatorSet::Core), CharClass::Other);
    }

    #[test]
    fn test_extended_operators() {
        assert_eq!(CharClass::of(b'-', false, OperatorSet::Core), CharClass::Other);
        assert_eq!(CharClass::of(b'-', false, OperatorSet::Extended), CharClass::Fixed(TokenKind::Sub));
        assert_eq!(CharClass::of(b'<', false, OperatorSet::Extended), CharClass::Fixed(TokenKind::Lesser));
        assert_eq!(CharClass::of(b'>', false, OperatorSet::Extended), CharClass::Fixed(TokenKind::Greater));
        assert_eq!(CharClass::of(b'+', false, OperatorSet::Extended), CharClass::Fixed(TokenKind::Plus));
        assert_eq!(CharClass::of(b'!', false, OperatorSet::Extended), CharClass::Other);
    }
}
