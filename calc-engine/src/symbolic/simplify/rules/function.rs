//! Simplification rules for function calls.

use crate::parser::ast::{Expr, FuncTag};
use crate::symbolic::simplify::step::Step;
use super::{done, Applied};

/// Applies the first rule that matches `tag(operand)`.
///
/// `sqrt(4) = 2`
/// `cos(-a) = cos(a)`
/// `abs(-a) = abs(a)`
/// `ln(exp(a)) = a`
pub fn all(tag: FuncTag, operand: &Expr) -> Applied {
    match (tag, operand) {
        (_, Expr::Const(value)) => done(Step::ConstantFold, Expr::num(tag.apply(*value))),
        (FuncTag::Cos | FuncTag::Abs, Expr::Neg(inner)) => {
            done(Step::EvenFunction, Expr::func(tag, (**inner).clone()))
        },
        (FuncTag::Ln, Expr::Func(FuncTag::Exp, inner)) => done(Step::LogOfExp, (**inner).clone()),
        _ => None,
    }
}
