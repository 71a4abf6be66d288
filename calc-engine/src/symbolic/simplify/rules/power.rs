//! Simplification rules for powers.

use crate::parser::ast::Expr;
use crate::symbolic::simplify::step::Step;
use super::{again, done, Applied};

/// `2^3 = 8`
pub fn fold(left: &Expr, right: &Expr) -> Applied {
    let (l, r) = (left.as_const()?, right.as_const()?);
    done(Step::ConstantFold, Expr::num(l.powf(r)))
}

/// `0^a = 0`
/// `1^a = 1`
pub fn trivial_base(left: &Expr, _: &Expr) -> Applied {
    if left.is_const_value(0.0) {
        done(Step::PowerOfZero, Expr::num(0.0))
    } else if left.is_const_value(1.0) {
        done(Step::PowerOfOne, Expr::num(1.0))
    } else {
        None
    }
}

/// `a^0 = 1`
/// `a^1 = a`
/// `a^-1 = 1/a`
pub fn trivial_exponent(left: &Expr, right: &Expr) -> Applied {
    if right.is_const_value(0.0) {
        done(Step::PowerZero, Expr::num(1.0))
    } else if right.is_const_value(1.0) {
        done(Step::PowerOne, left.clone())
    } else if right.is_const_value(-1.0) {
        again(Step::PowerNegativeOne, Expr::div(Expr::num(1.0), left.clone()))
    } else {
        None
    }
}

/// Applies the first rule that matches `left ^ right`.
pub fn all(left: &Expr, right: &Expr) -> Applied {
    fold(left, right)
        .or_else(|| trivial_base(left, right))
        .or_else(|| trivial_exponent(left, right))
}
