//! Simplification rules for products.

use crate::parser::ast::{BinOpKind, Expr};
use crate::symbolic::simplify::{monomial::Monomial, step::Step};
use super::{again, again_if_changed, done, Applied};

/// `2*3 = 6`
pub fn fold(left: &Expr, right: &Expr) -> Applied {
    let (l, r) = (left.as_const()?, right.as_const()?);
    done(Step::ConstantFold, Expr::num(l * r))
}

/// Handles a constant factor of `0`, `1` or `-1` on either side, and moves any other constant on
/// the right to the front.
///
/// `a*0 = 0`
/// `1*a = a`
/// `a*-1 = -a`
/// `a*2 = 2*a`
pub fn constant_factor(left: &Expr, right: &Expr) -> Applied {
    let (c, other, on_right) = match (left.as_const(), right.as_const()) {
        (_, Some(c)) => (c, left, true),
        (Some(c), None) => (c, right, false),
        (None, None) => return None,
    };

    if c == 0.0 {
        done(Step::MultiplyZero, Expr::num(0.0))
    } else if c == 1.0 {
        done(Step::MultiplyOne, other.clone())
    } else if c == -1.0 {
        again(Step::MultiplyNegativeOne, Expr::neg(other.clone()))
    } else if on_right {
        again(Step::ConstantFirst, Expr::mul(right.clone(), left.clone()))
    } else {
        None
    }
}

/// `(-a)*b = -(a*b)`
/// `a*(-b) = -(a*b)`
pub fn extract_negation(left: &Expr, right: &Expr) -> Applied {
    match (left, right) {
        (Expr::Neg(a), _) => again(Step::ExtractNegation, Expr::neg(Expr::mul((**a).clone(), right.clone()))),
        (_, Expr::Neg(b)) => again(Step::ExtractNegation, Expr::neg(Expr::mul(left.clone(), (**b).clone()))),
        _ => None,
    }
}

/// `2*(3*a) = 6*a`
pub fn group_constants(left: &Expr, right: &Expr) -> Applied {
    let c = left.as_const()?;
    let Expr::Binary(BinOpKind::Mul, ml, mr) = right else {
        return None;
    };

    if let Some(k) = mr.as_const() {
        again(Step::GroupConstants, Expr::mul(Expr::num(c * k), (**ml).clone()))
    } else if let Some(k) = ml.as_const() {
        again(Step::GroupConstants, Expr::mul(Expr::num(c * k), (**mr).clone()))
    } else {
        None
    }
}

/// Multiplies two monomials.
///
/// `a^2*a^3 = a^5`
/// `2a*3 = 6a`
/// `a*2b = 2a*b`
pub fn combine_like_factors(left: &Expr, right: &Expr) -> Applied {
    let l = Monomial::from_expr(left)?;
    let r = Monomial::from_expr(right)?;
    let coefficient = l.coefficient * r.coefficient;

    let expr = match (l.identifier, r.identifier) {
        (Some(a), Some(b)) if a == b => {
            Monomial::new(coefficient, l.exponent + r.exponent, Some(a)).into_expr()
        },
        (Some(a), Some(b)) => Expr::mul(
            Monomial::new(coefficient, l.exponent, Some(a)).into_expr(),
            Monomial::new(1.0, r.exponent, Some(b)).into_expr(),
        ),
        (Some(a), None) => Monomial::new(coefficient, l.exponent, Some(a)).into_expr(),
        (None, b) => Monomial::new(coefficient, r.exponent, b).into_expr(),
    };
    again_if_changed(Step::CombineLikeFactors, BinOpKind::Mul, left, right, expr)
}

/// Applies the first rule that matches `left * right`.
pub fn all(left: &Expr, right: &Expr) -> Applied {
    fold(left, right)
        .or_else(|| constant_factor(left, right))
        .or_else(|| extract_negation(left, right))
        .or_else(|| group_constants(left, right))
        .or_else(|| combine_like_factors(left, right))
}
