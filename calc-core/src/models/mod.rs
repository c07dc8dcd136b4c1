mod history;
mod operator;
mod state;
mod token;

pub use history::{History, HistoryEntry};
pub use operator::Operator;
pub use state::{CalculatorState, PendingOperator};
pub use token::Token;
