//! Owning wrapper around the calculator state machine.
//!
//! [`Engine`] holds the single [`CalculatorState`] of a session and the
//! [`History`] log that successful equations append to. Presentation code
//! talks to the engine only; it never mutates state or history directly.

use tracing::{debug, info};

use crate::{CalcError, CalculatorState, History, HistoryEntry, Token};

/// What a presentation adapter needs after one token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Output {
    pub display: String,
    /// The entry just appended to the history, if the token finalized an
    /// equation with a defined result.
    pub history_entry: Option<HistoryEntry>,
}

#[derive(Debug, Clone, Default)]
pub struct Engine {
    state: CalculatorState,
    history: History,
}

impl Engine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &CalculatorState {
        &self.state
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    /// Current display text.
    pub fn display(&self) -> String {
        self.state.display()
    }

    /// Applies one token, committing the new state and recording any
    /// finalized equation.
    pub fn apply(
        &mut self,
        token: Token,
    ) -> Output {
        let transition = self.state.apply(token);
        self.state = transition.state;

        if let Some(entry) = &transition.history_entry {
            info!(entry = %entry, "recorded history entry");
            self.history.push(entry.clone());
        }

        debug!(?token, display = %transition.display, "engine applied token");

        Output {
            display: transition.display,
            history_entry: transition.history_entry,
        }
    }

    /// Loads the result of the history entry at `index` (oldest is 0) onto
    /// the screen and drops the in-progress equation.
    ///
    /// Returns the new display text.
    ///
    /// # Errors
    ///
    /// [`CalcError::NoSuchHistoryEntry`] if `index` is past the end of the log.
    pub fn recall(
        &mut self,
        index: usize,
    ) -> Result<String, CalcError> {
        let entry = self
            .history
            .get(index)
            .ok_or(CalcError::NoSuchHistoryEntry(index))?;

        info!(index, entry = %entry, "recalled history entry");

        self.state.screen_value = entry.result().to_string();
        self.state.equation_text.clear();
        self.state.pending_operator = None;
        self.state.awaiting_operand = false;

        Ok(self.display())
    }

    /// Same as applying [`Token::Clear`]; the history is kept.
    pub fn reset(&mut self) -> Output {
        self.apply(Token::Clear)
    }
}
