use thiserror::Error;

/// Errors surfaced by the calculator core.
///
/// The first two variants are the two ways a result becomes undefined. The
/// engine never returns them from `apply`: it folds them into a `NaN`
/// running total, which renders as [`crate::ERROR_TEXT`] until cleared.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum CalcError {
    /// Division with a zero right operand.
    #[error("undefined result: division by zero")]
    DivisionByZero,

    /// The arithmetic produced NaN or an infinity.
    #[error("undefined result: value is not finite")]
    NonFinite,

    /// History selection pointed past the end of the log.
    #[error("no history entry at index {0}")]
    NoSuchHistoryEntry(usize),
}

impl CalcError {
    /// Whether this error represents an undefined arithmetic result.
    pub fn is_undefined_result(&self) -> bool {
        matches!(self, Self::DivisionByZero | Self::NonFinite)
    }
}
