use serde::{Deserialize, Serialize};

use super::Operator;

/// What the engine is waiting to do with the running total.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PendingOperator {
    /// An operator was chosen and awaits its right operand.
    Binary(Operator),
    /// The last action finalized an equation.
    Equals,
}

impl PendingOperator {
    /// The binary operator still awaiting application, if any.
    pub fn binary(&self) -> Option<Operator> {
        match self {
            Self::Binary(op) => Some(*op),
            Self::Equals => None,
        }
    }
}

/// The complete mutable state of a calculation.
///
/// `screen_value` is never empty: it holds either a numeric literal (possibly
/// ending in a decimal point) or [`crate::ERROR_TEXT`]. It contains at most
/// one decimal point and no redundant leading zero.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalculatorState {
    /// Text of the number being entered or last computed.
    pub screen_value: String,

    /// Human-readable in-progress or just-completed equation.
    /// Empty when no equation is in progress.
    pub equation_text: String,

    /// Accumulated value across chained operations. `NaN` once a result
    /// became undefined.
    pub running_total: f64,

    /// `None` means a fresh calculation.
    pub pending_operator: Option<PendingOperator>,

    /// Set right after an operator is pressed; the next digit starts a new
    /// number instead of extending `screen_value`.
    pub awaiting_operand: bool,
}

impl Default for CalculatorState {
    fn default() -> Self {
        Self {
            screen_value: "0".to_string(),
            equation_text: String::new(),
            running_total: 0.0,
            pending_operator: None,
            awaiting_operand: false,
        }
    }
}

impl CalculatorState {
    /// A cleared calculator.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the last action finalized an equation.
    pub fn is_finalized(&self) -> bool {
        self.pending_operator == Some(PendingOperator::Equals)
    }

    /// Text to show for this state. Derived, never stored.
    pub fn display(&self) -> String {
        if self.equation_text.is_empty() {
            return self.screen_value.clone();
        }

        if self.is_finalized() {
            return self.equation_text.clone();
        }

        let bottom = if self.awaiting_operand {
            ""
        } else {
            self.screen_value.as_str()
        };
        format!("{} {}", self.equation_text, bottom)
    }
}
