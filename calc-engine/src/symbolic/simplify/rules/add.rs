//! Simplification rules for sums.

use crate::parser::ast::{BinOpKind, Expr};
use crate::symbolic::simplify::{monomial::Monomial, step::Step};
use super::{again, again_if_changed, done, Applied};

/// `1+2 = 3`
pub fn fold(left: &Expr, right: &Expr) -> Applied {
    let (l, r) = (left.as_const()?, right.as_const()?);
    done(Step::ConstantFold, Expr::num(l + r))
}

/// `a+a = 2a`
pub fn add_same_variable(left: &Expr, right: &Expr) -> Applied {
    if left.as_var()? != right.as_var()? {
        return None;
    }
    done(Step::AddSameVariable, Expr::mul(Expr::num(2.0), left.clone()))
}

/// `0+a = a`
/// `a+0 = a`
pub fn add_zero(left: &Expr, right: &Expr) -> Applied {
    if left.is_const_value(0.0) {
        done(Step::AddZero, right.clone())
    } else if right.is_const_value(0.0) {
        done(Step::AddZero, left.clone())
    } else {
        None
    }
}

/// `(-a)+b = b-a`
/// `a+(-b) = a-b`
pub fn add_negation(left: &Expr, right: &Expr) -> Applied {
    match (left, right) {
        (Expr::Neg(a), _) => again(Step::RewriteNegatedTerm, Expr::sub(right.clone(), (**a).clone())),
        (_, Expr::Neg(b)) => again(Step::RewriteNegatedTerm, Expr::sub(left.clone(), (**b).clone())),
        _ => None,
    }
}

/// Moves a constant into a nested sum, in either operand.
///
/// `(a+1)+2 = a+3`
/// `2+(1+a) = a+3`
/// `(a+b)+2 = (2+a)+b`
pub fn group_sum_constants(left: &Expr, right: &Expr) -> Applied {
    let (c, al, ar) = match (left, right) {
        (Expr::Binary(BinOpKind::Add, al, ar), Expr::Const(c))
            | (Expr::Const(c), Expr::Binary(BinOpKind::Add, al, ar)) => (*c, &**al, &**ar),
        _ => return None,
    };

    let expr = if let Some(k) = ar.as_const() {
        Expr::add(al.clone(), Expr::num(k + c))
    } else if let Some(k) = al.as_const() {
        Expr::add(ar.clone(), Expr::num(k + c))
    } else {
        Expr::add(Expr::add(Expr::num(c), al.clone()), ar.clone())
    };
    again(Step::GroupConstants, expr)
}

/// Moves a constant into a nested difference, in either operand.
///
/// `(a-1)+2 = a+1`
/// `2+(1-a) = 3-a`
pub fn group_difference_constants(left: &Expr, right: &Expr) -> Applied {
    let (c, sl, sr) = match (left, right) {
        (Expr::Binary(BinOpKind::Sub, sl, sr), Expr::Const(c))
            | (Expr::Const(c), Expr::Binary(BinOpKind::Sub, sl, sr)) => (*c, &**sl, &**sr),
        _ => return None,
    };

    if let Some(k) = sr.as_const() {
        again(Step::GroupConstants, Expr::add(sl.clone(), Expr::num(c - k)))
    } else if let Some(k) = sl.as_const() {
        again(Step::GroupConstants, Expr::sub(Expr::num(k + c), sr.clone()))
    } else {
        None
    }
}

/// `2a+3a = 5a`
/// `a^2+4a^2 = 5a^2`
pub fn combine_like_terms(left: &Expr, right: &Expr) -> Applied {
    let l = Monomial::from_expr(left)?;
    let r = Monomial::from_expr(right)?;
    if l.identifier != r.identifier || l.exponent != r.exponent {
        return None;
    }

    let sum = Monomial::new(l.coefficient + r.coefficient, l.exponent, l.identifier);
    again_if_changed(Step::CombineLikeTerms, BinOpKind::Add, left, right, sum.into_expr())
}

/// Applies the first rule that matches `left + right`.
pub fn all(left: &Expr, right: &Expr) -> Applied {
    fold(left, right)
        .or_else(|| add_same_variable(left, right))
        .or_else(|| add_zero(left, right))
        .or_else(|| add_negation(left, right))
        .or_else(|| group_sum_constants(left, right))
        .or_else(|| group_difference_constants(left, right))
        .or_else(|| combine_like_terms(left, right))
}
