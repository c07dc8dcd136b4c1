//! Binary operators.
//!
//! Undefined results are reported as [`CalcError`] by [`Operator::apply`];
//! [`binary_apply`] folds them into `NaN`, which keeps propagating through
//! later arithmetic until the calculator is cleared.

use crate::{CalcError, Operator};

impl Operator {
    /// Applies the operator to `(a, b)`.
    ///
    /// # Arguments
    ///
    /// * `a` - Left operand, usually the running total
    /// * `b` - Right operand, usually the number on screen
    ///
    /// # Returns
    ///
    /// The finite result of `a <op> b`.
    ///
    /// # Errors
    ///
    /// * [`CalcError::DivisionByZero`] for `Divide` with `b == 0`.
    /// * [`CalcError::NonFinite`] when the result is `NaN` or infinite,
    ///   which includes any operand that was already undefined.
    ///
    /// # Examples
    ///
    /// ```
    /// use calc_core::{CalcError, Operator};
    ///
    /// assert_eq!(Operator::Multiply.apply(5.0, 4.0), Ok(20.0));
    /// assert_eq!(Operator::Divide.apply(5.0, 0.0), Err(CalcError::DivisionByZero));
    /// ```
    pub fn apply(
        &self,
        a: f64,
        b: f64,
    ) -> Result<f64, CalcError> {
        let value = match self {
            Self::Add => a + b,
            Self::Subtract => a - b,
            Self::Multiply => a * b,
            Self::Divide => {
                if b == 0.0 {
                    return Err(CalcError::DivisionByZero);
                }
                a / b
            }
        };

        if value.is_finite() {
            Ok(value)
        } else {
            Err(CalcError::NonFinite)
        }
    }
}

/// Applies `op` to `(a, b)`, yielding `NaN` for an undefined result.
///
/// # Arguments
///
/// * `op` - The operator to apply
/// * `a` - Left operand
/// * `b` - Right operand
///
/// # Returns
///
/// The result of [`Operator::apply`], or `NaN` in place of any
/// [`CalcError`]. `NaN` keeps propagating through later calls.
///
/// # Examples
///
/// ```
/// use calc_core::Operator;
/// use calc_core::calculations::binary_apply;
///
/// assert_eq!(binary_apply(Operator::Add, 2.0, 3.0), 5.0);
/// assert!(binary_apply(Operator::Divide, 5.0, 0.0).is_nan());
/// assert!(binary_apply(Operator::Add, f64::NAN, 1.0).is_nan());
/// ```
pub fn binary_apply(
    op: Operator,
    a: f64,
    b: f64,
) -> f64 {
    op.apply(a, b).unwrap_or(f64::NAN)
}
