//! Arithmetic and state-transition logic for the calculator engine.
//!
//! `common` holds the text helpers shared by every transition,
//! `arithmetic` implements the binary operators, and `transitions` is the
//! pure state machine consuming one [`crate::Token`] at a time.

pub mod arithmetic;
pub mod common;
pub mod transitions;

pub use arithmetic::binary_apply;
pub use common::{format_number, parse_number};
pub use transitions::Transition;
