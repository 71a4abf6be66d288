use ariadne::Fmt;
use calc_attrs::ErrorKind;
use calc_error::EXPR;

/// A division by a constant zero was found while simplifying.
///
/// Evaluating the same expression numerically does not fail; it produces an infinity or NaN.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "division by zero",
    labels = ["this expression"],
    help = format!("the divisor simplifies to {}", "0".fg(EXPR)),
)]
pub struct DivideByZero;

/// An expression could not be differentiated symbolically.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = format!("cannot differentiate `{}` symbolically", expr),
    labels = ["this derivative"],
    help = "only powers with a constant base or a constant exponent can be differentiated",
)]
pub struct UnsupportedOperation {
    /// The expression that could not be differentiated, written out.
    pub expr: String,
}
