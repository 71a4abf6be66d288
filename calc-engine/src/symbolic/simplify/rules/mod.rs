//! Implementation of the simplification rules.
//!
//! Each rule in this module is a function that receives the already simplified operands of a
//! node, and returns `Some((step, rewrite))` if the rule applies, or `None` if it does not. The
//! rules of each operator are tried in a fixed order, and only the first one that applies is
//! used.

pub mod add;
pub mod divide;
pub mod function;
pub mod multiply;
pub mod negate;
pub mod power;
pub mod subtract;

use crate::parser::ast::{BinOpKind, Expr};
use super::step::Step;

/// The expression produced by a rule.
#[derive(Debug, Clone, PartialEq)]
pub enum Rewrite {
    /// The expression is already fully simplified.
    Done(Expr),

    /// The expression was rearranged and must be simplified again.
    Again(Expr),
}

/// The outcome of trying a rule.
pub type Applied = Option<(Step, Rewrite)>;

pub(crate) fn done(step: Step, expr: Expr) -> Applied {
    Some((step, Rewrite::Done(expr)))
}

pub(crate) fn again(step: Step, expr: Expr) -> Applied {
    Some((step, Rewrite::Again(expr)))
}

/// Returns true if both trees have the same shape and the same constants, bit for bit.
///
/// Unlike `==`, a `NaN` constant is identical to itself here.
pub(crate) fn identical(a: &Expr, b: &Expr) -> bool {
    match (a, b) {
        (Expr::Const(x), Expr::Const(y)) => x.to_bits() == y.to_bits(),
        (Expr::Var(x), Expr::Var(y)) => x == y,
        (Expr::Binary(op_a, la, ra), Expr::Binary(op_b, lb, rb)) => {
            op_a == op_b && identical(la, lb) && identical(ra, rb)
        },
        (Expr::Neg(x), Expr::Neg(y)) => identical(x, y),
        (Expr::Func(tag_a, x), Expr::Func(tag_b, y)) => tag_a == tag_b && identical(x, y),
        _ => false,
    }
}

/// Like [`again`], but does not apply if `expr` is exactly `left op right`.
pub(crate) fn again_if_changed(
    step: Step,
    op: BinOpKind,
    left: &Expr,
    right: &Expr,
    expr: Expr,
) -> Applied {
    match &expr {
        Expr::Binary(o, l, r) if *o == op && identical(l, left) && identical(r, right) => None,
        _ => again(step, expr),
    }
}

/// Applies the first rule for `op` that matches `left op right`.
pub fn binary(op: BinOpKind, left: &Expr, right: &Expr) -> Applied {
    match op {
        BinOpKind::Add => add::all(left, right),
        BinOpKind::Sub => subtract::all(left, right),
        BinOpKind::Mul => multiply::all(left, right),
        BinOpKind::Div => divide::all(left, right),
        BinOpKind::Exp => power::all(left, right),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identical_constants() {
        let nan = Expr::mul(Expr::num(f64::NAN), Expr::var("x"));
        assert!(identical(&nan, &nan.clone()));
        assert!(!identical(&Expr::num(0.0), &Expr::num(-0.0)));
        assert!(!identical(&Expr::var("x"), &Expr::var("y")));
    }

    #[test]
    fn unchanged_rewrite_does_not_apply() {
        let (left, right) = (Expr::num(f64::NAN), Expr::var("x"));
        let expr = Expr::mul(left.clone(), right.clone());
        assert_eq!(again_if_changed(Step::CombineLikeFactors, BinOpKind::Mul, &left, &right, expr), None);
    }
}
