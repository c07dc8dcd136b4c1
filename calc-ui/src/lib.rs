//! Terminal front end for the keypad calculator.
//!
//! The engine in `calc-core` knows nothing about keys or screens; this crate
//! maps key names to tokens, renders the display line and history panel,
//! and wires up configuration and logging for the `calc` binary.

pub mod config;
pub mod keymap;
pub mod logging;
pub mod session;

pub use config::{ConfigError, Settings};
pub use session::{Session, Step};
