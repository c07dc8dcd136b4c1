//! The calculator state machine.
//!
//! [`CalculatorState::apply`] is a pure function: it takes the current state
//! and one [`Token`] and returns the next state, the text to display, and a
//! history entry when an equation finalized successfully.
//!
//! # Example
//!
//! ```
//! use calc_core::{CalculatorState, Operator, Token};
//!
//! let tokens = [
//!     Token::Digit(2),
//!     Token::Operator(Operator::Add),
//!     Token::Digit(3),
//!     Token::Operator(Operator::Multiply),
//!     Token::Digit(4),
//!     Token::Equals,
//! ];
//!
//! let mut state = CalculatorState::new();
//! let mut entries = Vec::new();
//! for token in tokens {
//!     let transition = state.apply(token);
//!     entries.extend(transition.history_entry);
//!     state = transition.state;
//! }
//!
//! assert_eq!(state.screen_value, "20");
//! assert_eq!(entries.len(), 1);
//! assert_eq!(entries[0].as_str(), "5 × 4 = 20");
//! ```

use tracing::{trace, warn};

use crate::calculations::arithmetic::binary_apply;
use crate::calculations::common::{
    ends_with_operator, format_number, parse_number, replace_trailing_number,
};
use crate::{CalculatorState, ERROR_TEXT, HistoryEntry, Operator, PendingOperator, Token};

/// Result of applying one token to a [`CalculatorState`].
#[derive(Debug, Clone, PartialEq)]
pub struct Transition {
    pub state: CalculatorState,
    pub display: String,
    /// Set only when `Equals` finalized an equation with a defined result.
    pub history_entry: Option<HistoryEntry>,
}

impl CalculatorState {
    /// Applies `token` and returns the resulting state and display text.
    pub fn apply(
        &self,
        token: Token,
    ) -> Transition {
        let mut state = self.clone();
        let history_entry = state.step(token);
        let text = state.display();

        trace!(?token, display = %text, "applied token");

        Transition {
            state,
            display: text,
            history_entry,
        }
    }

    fn step(
        &mut self,
        token: Token,
    ) -> Option<HistoryEntry> {
        match token {
            Token::Digit(_) | Token::DecimalPoint => self.enter(token),
            Token::Operator(op) => self.choose_operator(op),
            Token::Equals => return self.finalize(),
            Token::Clear => *self = Self::default(),
            Token::Backspace => self.backspace(),
            Token::Percent => self.percent(),
        }
        None
    }

    /// Handles a digit or the decimal point.
    fn enter(
        &mut self,
        token: Token,
    ) {
        let Some(ch) = token.entry_char() else {
            return;
        };

        // Typing after a finalized equation starts a fresh calculation.
        if self.is_finalized() && !self.awaiting_operand {
            self.screen_value = "0".to_string();
            self.pending_operator = None;
            self.running_total = 0.0;
        }

        if self.awaiting_operand {
            self.screen_value = if ch == '.' {
                "0.".to_string()
            } else {
                ch.to_string()
            };
            self.awaiting_operand = false;
            return;
        }

        let blank = self.screen_value == "0" || self.screen_value == ERROR_TEXT;

        if ch == '.' {
            if blank {
                self.screen_value = "0.".to_string();
            } else if !self.screen_value.contains('.') {
                self.screen_value.push('.');
            }
            return;
        }

        if blank {
            self.screen_value = ch.to_string();
        } else {
            self.screen_value.push(ch);
        }
    }

    /// Handles `+ − × ÷`, flushing a pending operator first when a new
    /// operand was typed since it was chosen.
    fn choose_operator(
        &mut self,
        op: Operator,
    ) {
        let current = parse_number(&self.screen_value);

        match self.pending_operator.and_then(|p| p.binary()) {
            Some(pending) if !self.awaiting_operand => {
                self.running_total = binary_apply(pending, self.running_total, current);
            }
            _ => self.running_total = current,
        }

        self.equation_text = format!("{} {} ", format_number(self.running_total), op.symbol());
        self.pending_operator = Some(PendingOperator::Binary(op));
        self.awaiting_operand = true;
    }

    /// Handles `=`.
    fn finalize(&mut self) -> Option<HistoryEntry> {
        let Some(op) = self.pending_operator.and_then(|p| p.binary()) else {
            self.equation_text = self.screen_value.clone();
            return None;
        };

        let operand = parse_number(&self.screen_value);
        let outcome = op.apply(self.running_total, operand);
        let result = match outcome {
            Ok(value) => {
                self.running_total = value;
                format_number(value)
            }
            Err(error) => {
                warn!(%error, lhs = self.running_total, rhs = operand, operator = %op, "equation has no defined result");
                self.running_total = f64::NAN;
                ERROR_TEXT.to_string()
            }
        };

        self.equation_text = if ends_with_operator(&self.equation_text) {
            format!("{}{} = {}", self.equation_text, self.screen_value, result)
        } else {
            format!("{} = {}", self.screen_value, result)
        };

        let entry = outcome
            .is_ok()
            .then(|| HistoryEntry::new(self.equation_text.clone()));

        self.screen_value = result;
        self.pending_operator = Some(PendingOperator::Equals);
        self.awaiting_operand = false;

        entry
    }

    /// Handles `←`. Never leaves the screen empty, holding a lone sign, or
    /// holding a signed zero that the next digit would be appended to.
    fn backspace(&mut self) {
        if self.screen_value.chars().count() <= 1 || self.screen_value == ERROR_TEXT {
            self.screen_value = "0".to_string();
            return;
        }

        self.screen_value.pop();
        if matches!(self.screen_value.as_str(), "-" | "-0") {
            self.screen_value = "0".to_string();
        }
    }

    /// Handles `%`: divides the screen by 100 and mirrors the new value into
    /// the equation's trailing number.
    fn percent(&mut self) {
        let value = parse_number(&self.screen_value) / 100.0;
        self.screen_value = format_number(value);

        self.equation_text = if self.equation_text.is_empty() {
            self.screen_value.clone()
        } else {
            replace_trailing_number(&self.equation_text, &self.screen_value)
        };
    }
}
