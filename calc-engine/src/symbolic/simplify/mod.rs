//! Bottom-up simplification of expressions.
//!
//! Every node is simplified after its children. Variables defined in the context are replaced
//! with their values first, then the rules of the node's operator are tried in order, and the
//! first one that applies rewrites the node. Some rewrites produce a rearranged expression that
//! is simplified again; all of them shrink the tree or move constants towards each other, so
//! this always terminates.
//!
//! The rules are listed in [`rules`], and each rule that fires is reported as a [`Step`].

pub mod monomial;
pub mod rules;
pub mod step;

use calc_error::Error;
use crate::numerical::Ctxt;
use crate::parser::ast::{BinOpKind, Expr, FuncTag};
use crate::symbolic::{error::DivideByZero, step_collector::StepCollector};
use rules::Rewrite;
use tracing::{debug, trace};

pub use step::Step;

/// Simplifies an expression, substituting the variables defined in `ctxt`.
///
/// Fails with [`DivideByZero`] if a divisor simplifies to the constant zero.
pub fn simplify(expr: &Expr, ctxt: &Ctxt) -> Result<Expr, Error> {
    simplify_with(expr, ctxt, &mut ())
}

/// Simplifies an expression, reporting each applied rule to the given [`StepCollector`].
pub fn simplify_with(
    expr: &Expr,
    ctxt: &Ctxt,
    step_collector: &mut dyn StepCollector<Step>,
) -> Result<Expr, Error> {
    debug!(%expr, "simplifying");
    Simplifier { ctxt, step_collector }.simplify(expr)
}

/// Simplifies an expression, returning the simplified expression along with the applied rules.
pub fn simplify_with_steps(expr: &Expr, ctxt: &Ctxt) -> Result<(Expr, Vec<Step>), Error> {
    let mut steps = Vec::new();
    let simplified = simplify_with(expr, ctxt, &mut steps)?;
    Ok((simplified, steps))
}

struct Simplifier<'a> {
    ctxt: &'a Ctxt,
    step_collector: &'a mut dyn StepCollector<Step>,
}

impl Simplifier<'_> {
    fn simplify(&mut self, expr: &Expr) -> Result<Expr, Error> {
        match expr {
            Expr::Const(value) => Ok(Expr::Const(*value)),
            Expr::Var(name) => match self.ctxt.get_var(name) {
                Some(value) => {
                    self.push(Step::SubstituteVariable);
                    Ok(Expr::Const(value))
                },
                None => Ok(expr.clone()),
            },
            Expr::Binary(op, left, right) => {
                let left = self.simplify(left)?;
                let right = self.simplify(right)?;
                if *op == BinOpKind::Div && right.is_const_value(0.0) {
                    return Err(Error::spanless(DivideByZero));
                }

                let applied = rules::binary(*op, &left, &right);
                self.finish(applied, || Expr::binary(*op, left, right))
            },
            Expr::Neg(operand) => {
                let operand = self.simplify(operand)?;
                let applied = rules::negate::all(&operand);
                self.finish(applied, || Expr::neg(operand))
            },
            Expr::Func(tag, operand) => {
                let tag: FuncTag = *tag;
                let operand = self.simplify(operand)?;
                let applied = rules::function::all(tag, &operand);
                self.finish(applied, || Expr::func(tag, operand))
            },
        }
    }

    /// Records the applied rule, if any, and produces the final expression for the node.
    fn finish(
        &mut self,
        applied: rules::Applied,
        rebuild: impl FnOnce() -> Expr,
    ) -> Result<Expr, Error> {
        match applied {
            Some((step, Rewrite::Done(expr))) => {
                self.push(step);
                Ok(expr)
            },
            Some((step, Rewrite::Again(expr))) => {
                self.push(step);
                self.simplify(&expr)
            },
            None => Ok(rebuild()),
        }
    }

    fn push(&mut self, step: Step) {
        trace!(?step, "applied rule");
        self.step_collector.push(step);
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use super::*;

    use crate::parser::Parser;

    fn parse(source: &str) -> Expr {
        Parser::new(source).try_parse_full::<Expr>().unwrap()
    }

    /// Simplifies with an empty context and writes the result out.
    fn simplified(source: &str) -> String {
        simplify(&parse(source), &Ctxt::new()).unwrap().to_string()
    }

    #[test]
    fn constant_folding() {
        assert_eq!(simplified("1 + 2 * 3"), "7");
        assert_eq!(simplified("2^3^2"), "64");
        assert_eq!(simplified("sqrt(16) - abs(-3)"), "1");
        assert_eq!(simplified("-(2)"), "-2");
    }

    #[test]
    fn substitute_defaults() {
        let expr = simplify(&parse("2pi"), &Ctxt::default()).unwrap();
        assert_eq!(expr, Expr::num(std::f64::consts::TAU));
    }

    #[test]
    fn identities() {
        assert_eq!(simplified("a + 0"), "a");
        assert_eq!(simplified("0 + a"), "a");
        assert_eq!(simplified("a - 0"), "a");
        assert_eq!(simplified("0 - a"), "-a");
        assert_eq!(simplified("a * 0"), "0");
        assert_eq!(simplified("1 * a"), "a");
        assert_eq!(simplified("a * -1"), "-a");
        assert_eq!(simplified("0 / a"), "0");
        assert_eq!(simplified("a / 1"), "a");
        assert_eq!(simplified("a / -1"), "-a");
        assert_eq!(simplified("a^0"), "1");
        assert_eq!(simplified("a^1"), "a");
        assert_eq!(simplified("0^a"), "0");
        assert_eq!(simplified("1^a"), "1");
        assert_eq!(simplified("a^-1"), "1 / a");
    }

    #[test]
    fn same_variable() {
        assert_eq!(simplify(&parse("a + a"), &Ctxt::new()).unwrap(), Expr::mul(Expr::num(2.0), Expr::var("a")));
        assert_eq!(simplified("a - a"), "0");
    }

    #[test]
    fn like_terms() {
        assert_eq!(simplified("2a + 3a"), "5 * a");
        assert_eq!(simplified("5a^2 - 2a^2"), "3 * a^2");
        assert_eq!(simplified("a^2 + a"), "a^2 + a");
        assert_eq!(simplified("y - 2y"), "-y");
        assert_eq!(simplified("3x - 2x"), "x");
        assert_eq!(simplified("2y - (-3x + 2x)"), "2 * y + x");
    }

    #[test]
    fn non_finite_coefficients() {
        assert_eq!(simplified("sqrt(-1) * x"), "NaN * x");
        assert_eq!(simplified("x / sqrt(-1)"), "NaN * x");
        assert_eq!(simplified("ln(-1) * x + x"), "NaN * x");
        assert_eq!(simplified("x * 10^400"), "inf * x");
        assert_eq!(simplified("10^400 x - 10^400 x"), "NaN * x");

        let mut ctxt = Ctxt::new();
        ctxt.define("n", f64::NAN);
        let expr = simplify(&parse("n * x^2 * x"), &ctxt).unwrap();
        assert_eq!(expr.to_string(), "NaN * x^3");
    }

    #[test]
    fn like_factors() {
        assert_eq!(
            simplify(&parse("a^2 * a^3"), &Ctxt::new()).unwrap(),
            Expr::pow(Expr::var("a"), Expr::num(5.0)),
        );
        assert_eq!(simplified("2a * 3a"), "6 * a^2");
        assert_eq!(simplified("a^3 / a"), "a^2");
        assert_eq!(simplified("6a / 3"), "2 * a");
        assert_eq!(simplified("a^2 / a^3"), "1 / a");
        assert_eq!(simplified("a * 2b"), "2 * a * b");
    }

    #[test]
    fn constants_move_to_front() {
        assert_eq!(simplified("a * 2"), "2 * a");
        assert_eq!(simplified("2 * (3 * a)"), "6 * a");
        assert_eq!(simplified("(a * 3) * 2"), "6 * a");
    }

    #[test]
    fn grouped_constants() {
        assert_eq!(simplified("(a + 1) + 2"), "a + 3");
        assert_eq!(simplified("2 + (1 + a)"), "a + 3");
        assert_eq!(simplified("(a - 1) + 2"), "a + 1");
        assert_eq!(simplified("(a - 1) - 2"), "a - 3");
        assert_eq!(simplified("5 - (a - 1)"), "6 - a");
        assert_eq!(simplified("5 - (1 - a)"), "a + 4");
        assert_eq!(simplified("(a + 5) - 2"), "a + 3");
        assert_eq!(simplified("5 - (a + 2)"), "3 - a");
    }

    #[test]
    fn negations() {
        assert_eq!(simplified("-(-a)"), "a");
        assert_eq!(simplified("-(a - b)"), "b - a");
        assert_eq!(simplified("-a + b"), "b - a");
        assert_eq!(simplified("a - -b"), "a + b");
        assert_eq!(simplified("-a - b"), "-(a + b)");
        assert_eq!(simplified("-a * b"), "-(a * b)");
        assert_eq!(simplified("-a / -b"), "a / b");
    }

    #[test]
    fn complex_fractions() {
        assert_eq!(simplified("(a / b) / (c / d)"), "a * d / (b * c)");
        assert_eq!(simplified("a / (b / c)"), "a * c / b");
    }

    #[test]
    fn functions() {
        assert_eq!(simplified("cos(-a)"), "cos(a)");
        assert_eq!(simplified("abs(-a)"), "abs(a)");
        assert_eq!(simplified("sin(-a)"), "sin(-a)");
        assert_eq!(simplified("ln(exp(a + 1))"), "a + 1");
        assert_eq!(simplified("floor(2.5) + round(2.5)"), "4");
    }

    #[test]
    fn divide_by_zero() {
        let err = simplify(&parse("1 / 0"), &Ctxt::new()).unwrap_err();
        assert!(err.is::<DivideByZero>());

        let err = simplify(&parse("a / (b - b)"), &Ctxt::new()).unwrap_err();
        assert!(err.is::<DivideByZero>());

        let mut ctxt = Ctxt::new();
        ctxt.define("n", 0.0);
        let err = simplify(&parse("a / n"), &ctxt).unwrap_err();
        assert!(err.is::<DivideByZero>());
    }

    #[test]
    fn steps_are_recorded_in_order() {
        let (expr, steps) = simplify_with_steps(&parse("(a + 0) * 1"), &Ctxt::new()).unwrap();
        assert_eq!(expr, Expr::var("a"));
        assert_eq!(steps, vec![Step::AddZero, Step::MultiplyOne]);

        let (_, steps) = simplify_with_steps(&parse("x + y"), &Ctxt::new()).unwrap();
        assert!(steps.is_empty());

        let mut ctxt = Ctxt::new();
        ctxt.define("x", 2.0);
        let (expr, steps) = simplify_with_steps(&parse("x * 3"), &ctxt).unwrap();
        assert_eq!(expr, Expr::num(6.0));
        assert_eq!(steps, vec![Step::SubstituteVariable, Step::ConstantFold]);
    }

    #[test]
    fn idempotent() {
        let sources = [
            "2a + 3a",
            "a^2 * a^3",
            "a^2 / a^3",
            "(a + 1) + (b + 2)",
            "x * y * 2",
            "-(a - b) * c",
            "(a / b) / (c / d)",
            "sin(x)^2 + cos(-x)^2",
            "2x / x^2",
            "3 - (x + y)",
            "a * 2b / (c * -d)",
            "y - 2y",
            "x - 2x",
            "2y - (-3x + 2x)",
            "cos(y - 2y)",
        ];

        for source in sources {
            let once = simplify(&parse(source), &Ctxt::new()).unwrap();
            let twice = simplify(&once, &Ctxt::new()).unwrap();
            assert_eq!(twice, once, "simplifying `{}` again changed it", source);
        }
    }
}
