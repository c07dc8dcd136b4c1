pub mod calculations;
pub mod engine;
pub mod error;
pub mod models;

pub use calculations::Transition;
pub use engine::{Engine, Output};
pub use error::CalcError;
pub use models::*;

/// Text shown in place of an undefined arithmetic result.
pub const ERROR_TEXT: &str = "Error";
