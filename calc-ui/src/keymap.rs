//! Key name to calculator action mapping.
//!
//! Key names follow what a browser reports as `KeyboardEvent.key`, so the
//! same table serves a typed key script and a real keyboard.

use calc_core::{Operator, Token};

/// Keys whose name is longer than one character.
pub const NAMED_KEYS: [&str; 3] = ["Enter", "Escape", "Backspace"];

/// What a key asks the session to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Forward a token to the engine.
    Input(Token),
    /// Open or close the history panel.
    ToggleHistory,
}

/// Maps a key name to an action. Unknown keys map to `None`.
pub fn map_key(key: &str) -> Option<Action> {
    let token = match key {
        "." => Token::DecimalPoint,
        "+" => Token::Operator(Operator::Add),
        "-" => Token::Operator(Operator::Subtract),
        "*" => Token::Operator(Operator::Multiply),
        "/" => Token::Operator(Operator::Divide),
        "Enter" | "=" => Token::Equals,
        "Escape" | "c" | "C" => Token::Clear,
        "Backspace" => Token::Backspace,
        "%" => Token::Percent,
        "h" | "H" => return Some(Action::ToggleHistory),
        _ => return digit(key).map(Action::Input),
    };
    Some(Action::Input(token))
}

fn digit(key: &str) -> Option<Token> {
    let mut chars = key.chars();
    match (chars.next(), chars.next()) {
        (Some(ch), None) => ch
            .to_digit(10)
            .and_then(|d| u8::try_from(d).ok())
            .and_then(Token::digit),
        _ => None,
    }
}

/// Splits a line of input into key names.
///
/// Words are separated by whitespace. A word that is one of [`NAMED_KEYS`]
/// is a single key; any other word is one key per character, so
/// `"12+3 Enter"` yields `1`, `2`, `+`, `3`, `Enter`.
pub fn split_keys(line: &str) -> Vec<&str> {
    let mut keys = Vec::new();
    for word in line.split_whitespace() {
        if NAMED_KEYS.contains(&word) {
            keys.push(word);
            continue;
        }
        keys.extend(
            word.char_indices()
                .map(|(i, ch)| &word[i..i + ch.len_utf8()]),
        );
    }
    keys
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    // =========================================================================
    // map_key tests
    // =========================================================================

    #[test]
    fn digits_map_to_digit_tokens() {
        for d in 0..=9u8 {
            assert_eq!(map_key(&d.to_string()), Some(Action::Input(Token::Digit(d))));
        }
    }

    #[test]
    fn operator_keys_map_to_operators() {
        assert_eq!(map_key("+"), Some(Action::Input(Token::Operator(Operator::Add))));
        assert_eq!(map_key("-"), Some(Action::Input(Token::Operator(Operator::Subtract))));
        assert_eq!(map_key("*"), Some(Action::Input(Token::Operator(Operator::Multiply))));
        assert_eq!(map_key("/"), Some(Action::Input(Token::Operator(Operator::Divide))));
    }

    #[test]
    fn control_keys_have_aliases() {
        assert_eq!(map_key("Enter"), Some(Action::Input(Token::Equals)));
        assert_eq!(map_key("="), Some(Action::Input(Token::Equals)));
        assert_eq!(map_key("Escape"), Some(Action::Input(Token::Clear)));
        assert_eq!(map_key("c"), Some(Action::Input(Token::Clear)));
        assert_eq!(map_key("C"), Some(Action::Input(Token::Clear)));
        assert_eq!(map_key("Backspace"), Some(Action::Input(Token::Backspace)));
        assert_eq!(map_key("%"), Some(Action::Input(Token::Percent)));
        assert_eq!(map_key("."), Some(Action::Input(Token::DecimalPoint)));
    }

    #[test]
    fn h_toggles_history() {
        assert_eq!(map_key("h"), Some(Action::ToggleHistory));
        assert_eq!(map_key("H"), Some(Action::ToggleHistory));
    }

    #[test]
    fn unknown_keys_map_to_nothing() {
        assert_eq!(map_key("x"), None);
        assert_eq!(map_key("12"), None);
        assert_eq!(map_key("٣"), None); // non-ASCII digit
        assert_eq!(map_key(""), None);
    }

    // =========================================================================
    // split_keys tests
    // =========================================================================

    #[test]
    fn split_keys_breaks_words_into_characters() {
        assert_eq!(split_keys("12+3"), vec!["1", "2", "+", "3"]);
    }

    #[test]
    fn split_keys_keeps_named_keys_whole() {
        assert_eq!(
            split_keys("9 Backspace 4 Enter"),
            vec!["9", "Backspace", "4", "Enter"]
        );
    }

    #[test]
    fn split_keys_handles_multibyte_characters() {
        assert_eq!(split_keys("5×"), vec!["5", "×"]);
    }

    #[test]
    fn split_keys_of_blank_line_is_empty() {
        assert!(split_keys("   ").is_empty());
    }
}
