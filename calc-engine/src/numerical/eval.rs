use calc_error::Error;
use crate::parser::ast::Expr;
use super::{ctxt::Ctxt, error::UndefinedVariable};

/// Any type that can be evaluated to produce a number.
pub trait Eval {
    /// Evaluate the expression to produce a number, using the given context.
    ///
    /// Arithmetic follows IEEE 754: dividing by zero produces an infinity or NaN rather than an
    /// error.
    fn eval(&self, ctxt: &Ctxt) -> Result<f64, Error>;

    /// Evaluate the expression to produce a number, using the default context.
    fn eval_default(&self) -> Result<f64, Error> {
        self.eval(&Ctxt::default())
    }
}

impl Eval for Expr {
    fn eval(&self, ctxt: &Ctxt) -> Result<f64, Error> {
        match self {
            Expr::Const(value) => Ok(*value),
            Expr::Var(name) => ctxt.get_var(name).ok_or_else(|| {
                Error::spanless(UndefinedVariable {
                    name: name.clone(),
                    suggestions: ctxt.get_similar_vars(name)
                        .into_iter()
                        .map(str::to_string)
                        .collect(),
                })
            }),
            Expr::Binary(op, left, right) => Ok(op.apply(left.eval(ctxt)?, right.eval(ctxt)?)),
            Expr::Neg(operand) => Ok(-operand.eval(ctxt)?),
            Expr::Func(tag, operand) => Ok(tag.apply(operand.eval(ctxt)?)),
        }
    }
}

#[cfg(test)]
mod tests {
    use assert_float_eq::{
        afe_abs,
        afe_relative_eq_error_msg,
        afe_is_relative_eq,
        assert_float_relative_eq,
    };
    use pretty_assertions::assert_eq;
    use super::*;

    use crate::parser::Parser;

    fn eval_with(source: &str, ctxt: &Ctxt) -> Result<f64, Error> {
        let mut parser = Parser::new(source);
        parser.try_parse_full::<Expr>().unwrap().eval(ctxt)
    }

    #[test]
    fn arithmetic() {
        assert_eq!(eval_with("1 + 2 * 3", &Ctxt::new()).unwrap(), 7.0);
        assert_eq!(eval_with("(1 + 2) * 3", &Ctxt::new()).unwrap(), 9.0);
        assert_eq!(eval_with("10 - 4 - 3", &Ctxt::new()).unwrap(), 3.0);
        assert_eq!(eval_with("-2^2", &Ctxt::new()).unwrap(), 4.0);
    }

    #[test]
    fn power_is_left_associative() {
        assert_eq!(eval_with("2^3^2", &Ctxt::new()).unwrap(), 64.0);
    }

    #[test]
    fn division_by_zero_follows_ieee() {
        assert_eq!(eval_with("1/0", &Ctxt::new()).unwrap(), f64::INFINITY);
        assert_eq!(eval_with("-1/0", &Ctxt::new()).unwrap(), f64::NEG_INFINITY);
        assert!(eval_with("0/0", &Ctxt::new()).unwrap().is_nan());
    }

    #[test]
    fn functions() {
        let ctxt = Ctxt::default();
        assert_float_relative_eq!(eval_with("sin(pi / 2)", &ctxt).unwrap(), 1.0);
        assert_float_relative_eq!(eval_with("ln(e^2)", &ctxt).unwrap(), 2.0);
        assert_float_relative_eq!(eval_with("sqrt(16) + abs(-3)", &ctxt).unwrap(), 7.0);
        assert_eq!(eval_with("floor(2.7) + ceil(2.2) + round(0.5)", &ctxt).unwrap(), 5.0);
    }

    #[test]
    fn variables_are_case_insensitive() {
        let mut ctxt = Ctxt::new();
        ctxt.define("X", 5.0);
        assert_eq!(eval_with("x", &ctxt).unwrap(), 5.0);
        assert_eq!(eval_with("2X", &ctxt).unwrap(), 10.0);
    }

    #[test]
    fn undefined_variable() {
        let err = eval_with("x", &Ctxt::new()).unwrap_err();
        let kind = err.downcast_ref::<UndefinedVariable>().unwrap();
        assert_eq!(kind.name, "x");
        assert!(kind.suggestions.is_empty());
        assert!(err.spans.is_empty());
    }

    #[test]
    fn undefined_variable_suggestions() {
        let mut ctxt = Ctxt::default();
        ctxt.define("rate", 2.0);
        let err = eval_with("3 * rat", &ctxt).unwrap_err();
        assert_eq!(err.downcast_ref::<UndefinedVariable>().unwrap().suggestions, vec!["rate".to_string()]);
    }

    #[test]
    fn eval_default_knows_constants() {
        let expr = Parser::new("2pi").try_parse_full::<Expr>().unwrap();
        assert_float_relative_eq!(expr.eval_default().unwrap(), std::f64::consts::TAU);
    }
}
