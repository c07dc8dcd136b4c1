use serde::{Deserialize, Serialize};

use super::Operator;

/// One classified user input consumed by the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Token {
    /// A decimal digit, always in `0..=9`.
    Digit(u8),
    DecimalPoint,
    Operator(Operator),
    Equals,
    Clear,
    Backspace,
    Percent,
}

impl Token {
    /// Builds a digit token, rejecting anything outside `0..=9`.
    pub fn digit(d: u8) -> Option<Self> {
        (d <= 9).then_some(Self::Digit(d))
    }

    /// Whether this token extends the number being typed.
    pub fn is_number_entry(&self) -> bool {
        matches!(self, Self::Digit(_) | Self::DecimalPoint)
    }

    /// Character appended to the screen for number-entry tokens.
    pub(crate) fn entry_char(&self) -> Option<char> {
        match self {
            Self::Digit(d) => char::from_digit(u32::from(*d), 10),
            Self::DecimalPoint => Some('.'),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn digit_accepts_only_single_decimal_digits() {
        assert_eq!(Token::digit(0), Some(Token::Digit(0)));
        assert_eq!(Token::digit(9), Some(Token::Digit(9)));
        assert_eq!(Token::digit(10), None);
    }

    #[test]
    fn entry_char_covers_digits_and_point() {
        assert_eq!(Token::Digit(7).entry_char(), Some('7'));
        assert_eq!(Token::DecimalPoint.entry_char(), Some('.'));
        assert_eq!(Token::Equals.entry_char(), None);
    }

    #[test]
    fn out_of_range_digit_has_no_entry_char() {
        assert_eq!(Token::Digit(12).entry_char(), None);
    }
}
