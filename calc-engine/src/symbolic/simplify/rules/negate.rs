//! Simplification rules for negation.

use crate::parser::ast::{BinOpKind, Expr};
use crate::symbolic::simplify::step::Step;
use super::{again, done, Applied};

/// Applies the first rule that matches `-operand`.
///
/// `-(2) = -2`
/// `--a = a`
/// `-(a-b) = b-a`
pub fn all(operand: &Expr) -> Applied {
    match operand {
        Expr::Const(value) => done(Step::ConstantFold, Expr::num(-value)),
        Expr::Neg(inner) => done(Step::DoubleNegation, (**inner).clone()),
        Expr::Binary(BinOpKind::Sub, a, b) => again(
            Step::NegateDifference,
            Expr::sub((**b).clone(), (**a).clone()),
        ),
        _ => None,
    }
}
