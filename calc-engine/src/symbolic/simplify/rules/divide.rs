//! Simplification rules for quotients.
//!
//! Division by a constant zero is rejected before any of these rules run.

use crate::parser::ast::{BinOpKind, Expr};
use crate::symbolic::simplify::{monomial::Monomial, step::Step};
use super::{again, again_if_changed, done, Applied};

/// `6/3 = 2`
pub fn fold(left: &Expr, right: &Expr) -> Applied {
    let (l, r) = (left.as_const()?, right.as_const()?);
    done(Step::ConstantFold, Expr::num(l / r))
}

/// `0/a = 0`
/// `a/1 = a`
/// `a/-1 = -a`
pub fn trivial_operand(left: &Expr, right: &Expr) -> Applied {
    if left.is_const_value(0.0) {
        done(Step::DivideZero, Expr::num(0.0))
    } else if right.is_const_value(1.0) {
        done(Step::DivideOne, left.clone())
    } else if right.is_const_value(-1.0) {
        again(Step::DivideNegativeOne, Expr::neg(left.clone()))
    } else {
        None
    }
}

/// `(-a)/(-b) = a/b`
/// `(-a)/b = -(a/b)`
/// `a/(-b) = -(a/b)`
pub fn extract_negation(left: &Expr, right: &Expr) -> Applied {
    match (left, right) {
        (Expr::Neg(a), Expr::Neg(b)) => again(
            Step::CancelNegations,
            Expr::div((**a).clone(), (**b).clone()),
        ),
        (Expr::Neg(a), _) => again(Step::ExtractNegation, Expr::neg(Expr::div((**a).clone(), right.clone()))),
        (_, Expr::Neg(b)) => again(Step::ExtractNegation, Expr::neg(Expr::div(left.clone(), (**b).clone()))),
        _ => None,
    }
}

/// `(a/b)/(c/d) = (a*d)/(b*c)`
/// `a/(b/c) = (a*c)/b`
pub fn complex_fraction(left: &Expr, right: &Expr) -> Applied {
    let Expr::Binary(BinOpKind::Div, c, d) = right else {
        return None;
    };
    let (c, d) = ((**c).clone(), (**d).clone());

    match left {
        Expr::Binary(BinOpKind::Div, a, b) => again(
            Step::SimplifyComplexFraction,
            Expr::div(Expr::mul((**a).clone(), d), Expr::mul((**b).clone(), c)),
        ),
        _ => again(
            Step::SimplifyComplexFraction,
            Expr::div(Expr::mul(left.clone(), d), c),
        ),
    }
}

/// Divides two monomials.
///
/// `a^3/a = a^2`
/// `6a/3 = 2a`
/// `6a/b = 6a/b`
pub fn combine_like_factors(left: &Expr, right: &Expr) -> Applied {
    let l = Monomial::from_expr(left)?;
    let r = Monomial::from_expr(right)?;
    let coefficient = l.coefficient / r.coefficient;

    let expr = match (l.identifier, r.identifier) {
        (Some(a), Some(b)) if a == b => {
            Monomial::new(coefficient, l.exponent - r.exponent, Some(a)).into_expr()
        },
        (Some(a), Some(b)) => Expr::div(
            Monomial::new(coefficient, l.exponent, Some(a)).into_expr(),
            Monomial::new(1.0, r.exponent, Some(b)).into_expr(),
        ),
        (Some(a), None) => Monomial::new(coefficient, l.exponent, Some(a)).into_expr(),
        // a constant over a monomial is left as a quotient
        (None, Some(b)) => Expr::div(
            Expr::num(l.coefficient),
            Monomial::new(r.coefficient, r.exponent, Some(b)).into_expr(),
        ),
        (None, None) => Expr::num(coefficient),
    };
    again_if_changed(Step::CombineLikeFactors, BinOpKind::Div, left, right, expr)
}

/// Applies the first rule that matches `left / right`.
pub fn all(left: &Expr, right: &Expr) -> Applied {
    fold(left, right)
        .or_else(|| trivial_operand(left, right))
        .or_else(|| extract_negation(left, right))
        .or_else(|| complex_fraction(left, right))
        .or_else(|| combine_like_factors(left, right))
}
