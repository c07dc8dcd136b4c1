//! Text helpers shared by the transition rules.
//!
//! The calculator keeps its operand as text, so every transition moves
//! between strings and `f64` through these functions.

use std::sync::LazyLock;

use regex::{NoExpand, Regex};

use crate::{ERROR_TEXT, Operator};

/// Final run of number characters in an equation, with an optional sign.
static TRAILING_NUMBER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"-?[0-9.]+$").expect("trailing number pattern is valid"));

/// Formats a number as its shortest round-tripping decimal text.
///
/// No trailing zeros or trailing decimal point are produced, negative zero
/// prints as `"0"`, and non-finite values print as [`ERROR_TEXT`].
///
/// # Arguments
///
/// * `value` - The number to format
///
/// # Returns
///
/// Text that parses back to exactly `value`, or [`ERROR_TEXT`].
///
/// # Examples
///
/// ```
/// use calc_core::calculations::common::format_number;
///
/// assert_eq!(format_number(15.0), "15");
/// assert_eq!(format_number(0.500), "0.5");
/// assert_eq!(format_number(f64::NAN), "Error");
/// ```
pub fn format_number(value: f64) -> String {
    if !value.is_finite() {
        return ERROR_TEXT.to_string();
    }
    if value == 0.0 {
        return "0".to_string();
    }
    value.to_string()
}

/// Reads screen text as a number.
///
/// A trailing decimal point is accepted (`"3."` is 3). Anything that is not
/// a number, including [`ERROR_TEXT`], reads as `NaN`.
///
/// # Arguments
///
/// * `text` - Screen text, such as `"12"`, `"0."` or `"-4.5"`
///
/// # Returns
///
/// The parsed value, or `NaN` when `text` is not a number.
///
/// # Examples
///
/// ```
/// use calc_core::calculations::common::parse_number;
///
/// assert_eq!(parse_number("1.5"), 1.5);
/// assert_eq!(parse_number("3."), 3.0);
/// assert!(parse_number("Error").is_nan());
/// ```
pub fn parse_number(text: &str) -> f64 {
    text.parse().unwrap_or(f64::NAN)
}

/// Replaces the final contiguous number in `equation` with `replacement`.
///
/// Leading equation text and operator symbols are kept. A `-` directly in
/// front of the digits belongs to the number and is replaced with it, so a
/// negative result is never left with a doubled sign.
///
/// # Arguments
///
/// * `equation` - The equation text to rewrite
/// * `replacement` - Text put in place of the trailing number, taken
///   literally (`$` is not expanded)
///
/// # Returns
///
/// The rewritten equation, or `equation` unchanged when it does not end in
/// a number.
///
/// # Examples
///
/// ```
/// use calc_core::calculations::common::replace_trailing_number;
///
/// assert_eq!(replace_trailing_number("5 × 4 = 20", "0.2"), "5 × 4 = 0.2");
/// assert_eq!(replace_trailing_number("1 − 5 = -4", "-0.04"), "1 − 5 = -0.04");
/// assert_eq!(replace_trailing_number("8 × ", "0.08"), "8 × ");
/// ```
pub fn replace_trailing_number(
    equation: &str,
    replacement: &str,
) -> String {
    TRAILING_NUMBER
        .replace(equation, NoExpand(replacement))
        .into_owned()
}

/// Whether `equation` ends in `" <op> "`, i.e. an operator was just chosen.
///
/// # Arguments
///
/// * `equation` - The equation text to inspect
///
/// # Returns
///
/// `true` if the text ends in a space, one of the four operator symbols
/// and a space.
///
/// # Examples
///
/// ```
/// use calc_core::calculations::common::ends_with_operator;
///
/// assert!(ends_with_operator("5 × "));
/// assert!(ends_with_operator("9 − "));
/// assert!(!ends_with_operator("5 × 3 = 15"));
/// ```
pub fn ends_with_operator(equation: &str) -> bool {
    Operator::ALL
        .iter()
        .any(|op| equation.ends_with(&format!(" {} ", op.symbol())))
}
