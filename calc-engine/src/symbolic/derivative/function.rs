//! Derivatives of the built-in functions.

use crate::parser::ast::{Expr, FuncTag};

/// Returns the derivative of `tag(operand)`, given the derivative `inner` of the operand. The
/// chain rule is applied here.
pub(super) fn derivative(tag: FuncTag, operand: &Expr, inner: Expr) -> Expr {
    let u = || operand.clone();
    let u_squared = || Expr::pow(u(), Expr::num(2.0));

    match tag {
        FuncTag::Sin => Expr::mul(Expr::func(FuncTag::Cos, u()), inner),
        FuncTag::Cos => Expr::mul(Expr::neg(Expr::func(FuncTag::Sin, u())), inner),
        FuncTag::Tan => Expr::mul(
            Expr::pow(Expr::func(FuncTag::Cos, u()), Expr::num(-2.0)),
            inner,
        ),
        FuncTag::Sqrt => Expr::div(inner, Expr::mul(Expr::num(2.0), Expr::func(FuncTag::Sqrt, u()))),
        FuncTag::ArcSin => arcsin(inner, u_squared()),
        FuncTag::ArcCos => Expr::neg(arcsin(inner, u_squared())),
        FuncTag::ArcTan => Expr::div(inner, Expr::add(Expr::num(1.0), u_squared())),
        FuncTag::Log => Expr::div(inner, Expr::mul(u(), Expr::num(std::f64::consts::LN_10))),
        FuncTag::Ln => Expr::div(inner, u()),
        FuncTag::Exp => Expr::mul(inner, Expr::func(FuncTag::Exp, u())),
        FuncTag::Cot => Expr::div(
            inner,
            Expr::neg(Expr::pow(Expr::func(FuncTag::Sin, u()), Expr::num(2.0))),
        ),
        FuncTag::Sec => Expr::div(
            Expr::mul(inner, Expr::func(FuncTag::Sin, u())),
            Expr::pow(Expr::func(FuncTag::Cos, u()), Expr::num(2.0)),
        ),
        FuncTag::Csc => Expr::div(
            Expr::mul(Expr::neg(inner), Expr::func(FuncTag::Cos, u())),
            Expr::pow(Expr::func(FuncTag::Sin, u()), Expr::num(2.0)),
        ),
        FuncTag::Abs => Expr::mul(Expr::func(FuncTag::Sign, u()), inner),

        // piecewise constant
        FuncTag::Floor | FuncTag::Ceil | FuncTag::Round | FuncTag::Sign => Expr::num(0.0),
    }
}

/// `u' / sqrt(1 - u^2)`
fn arcsin(inner: Expr, u_squared: Expr) -> Expr {
    Expr::div(
        inner,
        Expr::func(FuncTag::Sqrt, Expr::sub(Expr::num(1.0), u_squared)),
    )
}
