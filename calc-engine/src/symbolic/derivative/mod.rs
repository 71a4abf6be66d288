//! Symbolic differentiation.
//!
//! The derivative is built by applying the usual rules node by node, without simplifying the
//! result; `d(x, x * y)` produces `1 * y + x * 0`. Pass the result to
//! [`simplify`](crate::symbolic::simplify()) to clean it up.

mod function;

use calc_error::Error;
use crate::numerical::Ctxt;
use crate::parser::ast::{BinOpKind, Expr};
use crate::symbolic::{error::UnsupportedOperation, simplify};
use tracing::debug;

/// Computes the derivative of `expr` with respect to the variable named `with`.
///
/// Variables are matched without regard to case. The context is only used to decide whether the
/// base or the exponent of a power is constant, which is required to differentiate it.
pub fn derivative(expr: &Expr, with: &str, ctxt: &Ctxt) -> Result<Expr, Error> {
    match expr {
        Expr::Const(_) => Ok(Expr::num(0.0)),
        Expr::Var(name) => Ok(Expr::num(if name.eq_ignore_ascii_case(with) { 1.0 } else { 0.0 })),
        Expr::Binary(op, left, right) => {
            let (left, right) = (&**left, &**right);
            match op {
                BinOpKind::Add => Ok(Expr::add(
                    derivative(left, with, ctxt)?,
                    derivative(right, with, ctxt)?,
                )),
                BinOpKind::Sub => Ok(Expr::sub(
                    derivative(left, with, ctxt)?,
                    derivative(right, with, ctxt)?,
                )),
                // (fg)' = f'g + fg'
                BinOpKind::Mul => Ok(Expr::add(
                    Expr::mul(derivative(left, with, ctxt)?, right.clone()),
                    Expr::mul(left.clone(), derivative(right, with, ctxt)?),
                )),
                // (f/g)' = (f'g - fg') / g^2
                BinOpKind::Div => Ok(Expr::div(
                    Expr::sub(
                        Expr::mul(derivative(left, with, ctxt)?, right.clone()),
                        Expr::mul(left.clone(), derivative(right, with, ctxt)?),
                    ),
                    Expr::pow(right.clone(), Expr::num(2.0)),
                )),
                BinOpKind::Exp => power(left, right, with, ctxt),
            }
        },
        Expr::Neg(operand) => Ok(Expr::neg(derivative(operand, with, ctxt)?)),
        Expr::Func(tag, operand) => {
            let inner = derivative(operand, with, ctxt)?;
            Ok(function::derivative(*tag, operand, inner))
        },
    }
}

/// Differentiates `base ^ exp`, where either side must simplify to a constant.
fn power(base: &Expr, exp: &Expr, with: &str, ctxt: &Ctxt) -> Result<Expr, Error> {
    if let Some(k) = simplify(exp, ctxt)?.as_const() {
        // power rule: (f^k)' = k * f^(k - 1) * f'
        return Ok(Expr::mul(
            Expr::mul(Expr::num(k), Expr::pow(base.clone(), Expr::num(k - 1.0))),
            derivative(base, with, ctxt)?,
        ));
    }

    if let Some(c) = simplify(base, ctxt)?.as_const() {
        // (c^g)' = ln(c) * g' * c^g
        return Ok(Expr::mul(
            Expr::mul(Expr::num(c.ln()), derivative(exp, with, ctxt)?),
            Expr::pow(Expr::num(c), exp.clone()),
        ));
    }

    let expr = Expr::pow(base.clone(), exp.clone());
    debug!(%expr, "power has neither a constant base nor a constant exponent");
    Err(Error::spanless(UnsupportedOperation { expr: expr.to_string() }))
}
