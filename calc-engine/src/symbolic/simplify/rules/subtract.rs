//! Simplification rules for differences.

use crate::parser::ast::{BinOpKind, Expr};
use crate::symbolic::simplify::{monomial::Monomial, step::Step};
use super::{again, again_if_changed, done, Applied};

/// `3-1 = 2`
pub fn fold(left: &Expr, right: &Expr) -> Applied {
    let (l, r) = (left.as_const()?, right.as_const()?);
    done(Step::ConstantFold, Expr::num(l - r))
}

/// `a-a = 0`
pub fn subtract_same_variable(left: &Expr, right: &Expr) -> Applied {
    if left.as_var()? != right.as_var()? {
        return None;
    }
    done(Step::SubtractSameVariable, Expr::num(0.0))
}

/// `0-a = -a`
/// `a-0 = a`
pub fn subtract_zero(left: &Expr, right: &Expr) -> Applied {
    if left.is_const_value(0.0) {
        again(Step::SubtractFromZero, Expr::neg(right.clone()))
    } else if right.is_const_value(0.0) {
        done(Step::SubtractZero, left.clone())
    } else {
        None
    }
}

/// `a-(-b) = a+b`
/// `(-a)-b = -(a+b)`
pub fn subtract_negation(left: &Expr, right: &Expr) -> Applied {
    match (left, right) {
        (_, Expr::Neg(b)) => again(Step::RewriteNegatedTerm, Expr::add(left.clone(), (**b).clone())),
        (Expr::Neg(a), _) => again(
            Step::RewriteNegatedTerm,
            Expr::neg(Expr::add((**a).clone(), right.clone())),
        ),
        _ => None,
    }
}

/// Moves a constant into a nested difference.
///
/// `(a-1)-2 = a-3`
/// `(5-a)-2 = 3-a`
/// `5-(a-1) = 6-a`
/// `5-(1-a) = a+4`
pub fn group_difference_constants(left: &Expr, right: &Expr) -> Applied {
    match (left, right) {
        (Expr::Binary(BinOpKind::Sub, sl, sr), Expr::Const(c)) => {
            if let Some(k) = sr.as_const() {
                again(Step::GroupConstants, Expr::sub((**sl).clone(), Expr::num(k + c)))
            } else if let Some(k) = sl.as_const() {
                again(Step::GroupConstants, Expr::sub(Expr::num(k - c), (**sr).clone()))
            } else {
                None
            }
        },
        (Expr::Const(c), Expr::Binary(BinOpKind::Sub, sl, sr)) => {
            if let Some(k) = sr.as_const() {
                again(Step::GroupConstants, Expr::sub(Expr::num(c + k), (**sl).clone()))
            } else if let Some(k) = sl.as_const() {
                again(Step::GroupConstants, Expr::add((**sr).clone(), Expr::num(c - k)))
            } else {
                None
            }
        },
        _ => None,
    }
}

/// Moves a constant out of a nested sum.
///
/// `(a+5)-2 = a+3`
/// `5-(a+2) = 3-a`
pub fn group_sum_constants(left: &Expr, right: &Expr) -> Applied {
    match (left, right) {
        (Expr::Binary(BinOpKind::Add, al, ar), Expr::Const(c)) => {
            if let Some(k) = ar.as_const() {
                again(Step::GroupConstants, Expr::add((**al).clone(), Expr::num(k - c)))
            } else if let Some(k) = al.as_const() {
                again(Step::GroupConstants, Expr::add((**ar).clone(), Expr::num(k - c)))
            } else {
                None
            }
        },
        (Expr::Const(c), Expr::Binary(BinOpKind::Add, al, ar)) => {
            if let Some(k) = ar.as_const() {
                again(Step::GroupConstants, Expr::sub(Expr::num(c - k), (**al).clone()))
            } else if let Some(k) = al.as_const() {
                again(Step::GroupConstants, Expr::sub(Expr::num(c - k), (**ar).clone()))
            } else {
                None
            }
        },
        _ => None,
    }
}

/// `5a-3a = 2a`
pub fn combine_like_terms(left: &Expr, right: &Expr) -> Applied {
    let l = Monomial::from_expr(left)?;
    let r = Monomial::from_expr(right)?;
    if l.identifier != r.identifier || l.exponent != r.exponent {
        return None;
    }

    let difference = Monomial::new(l.coefficient - r.coefficient, l.exponent, l.identifier);
    again_if_changed(Step::CombineLikeTerms, BinOpKind::Sub, left, right, difference.into_expr())
}

/// Applies the first rule that matches `left - right`.
pub fn all(left: &Expr, right: &Expr) -> Applied {
    fold(left, right)
        .or_else(|| subtract_same_variable(left, right))
        .or_else(|| subtract_zero(left, right))
        .or_else(|| subtract_negation(left, right))
        .or_else(|| group_difference_constants(left, right))
        .or_else(|| group_sum_constants(left, right))
        .or_else(|| combine_like_terms(left, right))
}
