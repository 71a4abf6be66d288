//! A normal form for single-variable terms, used to combine like terms and like factors.

use crate::parser::ast::{BinOpKind, Expr};

/// A term of the form `coefficient * identifier^exponent`, or the constant `coefficient` if
/// there is no identifier.
#[derive(Debug, Clone, PartialEq)]
pub struct Monomial {
    pub coefficient: f64,
    pub exponent: f64,
    pub identifier: Option<String>,
}

impl Monomial {
    pub fn new(coefficient: f64, exponent: f64, identifier: Option<String>) -> Self {
        Self { coefficient, exponent, identifier }
    }

    /// Reads an expression as a monomial.
    ///
    /// Succeeds for constants, variables, a variable raised to a constant, and products of two
    /// monomials that do not involve two different variables.
    pub fn from_expr(expr: &Expr) -> Option<Self> {
        match expr {
            Expr::Const(value) => Some(Self::new(*value, 0.0, None)),
            Expr::Var(name) => Some(Self::new(1.0, 1.0, Some(name.clone()))),
            Expr::Binary(BinOpKind::Exp, base, exp) => {
                let name = base.as_var()?;
                let exp = exp.as_const()?;
                Some(Self::new(1.0, exp, Some(name.to_string())))
            },
            Expr::Binary(BinOpKind::Mul, left, right) => {
                let left = Self::from_expr(left)?;
                let right = Self::from_expr(right)?;
                let identifier = match (left.identifier, right.identifier) {
                    (Some(l), Some(r)) if l != r => return None,
                    (l, r) => l.or(r),
                };
                Some(Self::new(
                    left.coefficient * right.coefficient,
                    left.exponent + right.exponent,
                    identifier,
                ))
            },
            _ => None,
        }
    }

    /// Converts the monomial back to its simplest expression.
    pub fn into_expr(self) -> Expr {
        let Some(name) = self.identifier else {
            return Expr::Const(self.coefficient);
        };

        if self.exponent == 0.0 {
            Expr::Const(self.coefficient)
        } else if self.coefficient == 0.0 {
            Expr::Const(0.0)
        } else if self.exponent == 1.0 {
            if self.coefficient == 1.0 {
                Expr::Var(name)
            } else {
                Expr::mul(Expr::Const(self.coefficient), Expr::Var(name))
            }
        } else if self.coefficient == 1.0 {
            Expr::pow(Expr::Var(name), Expr::Const(self.exponent))
        } else {
            Expr::mul(
                Expr::Const(self.coefficient),
                Expr::pow(Expr::Var(name), Expr::Const(self.exponent)),
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use super::*;

    use crate::parser::Parser;

    fn monomial(source: &str) -> Option<Monomial> {
        let expr = Parser::new(source).try_parse_full::<Expr>().unwrap();
        Monomial::from_expr(&expr)
    }

    #[test]
    fn recognized_forms() {
        assert_eq!(monomial("4"), Some(Monomial::new(4.0, 0.0, None)));
        assert_eq!(monomial("x"), Some(Monomial::new(1.0, 1.0, Some("x".into()))));
        assert_eq!(monomial("x^3"), Some(Monomial::new(1.0, 3.0, Some("x".into()))));
        assert_eq!(monomial("2x^3"), Some(Monomial::new(2.0, 3.0, Some("x".into()))));
        assert_eq!(monomial("x * 2x"), Some(Monomial::new(2.0, 2.0, Some("x".into()))));
    }

    #[test]
    fn rejected_forms() {
        assert_eq!(monomial("x * y"), None);
        assert_eq!(monomial("x + 1"), None);
        assert_eq!(monomial("2^x"), None);
        assert_eq!(monomial("(2x)^2"), None);
        assert_eq!(monomial("-x"), None);
    }

    #[test]
    fn into_expr_is_canonical() {
        let x = || Some("x".to_string());
        assert_eq!(Monomial::new(3.0, 2.0, None).into_expr(), Expr::num(3.0));
        assert_eq!(Monomial::new(3.0, 0.0, x()).into_expr(), Expr::num(3.0));
        assert_eq!(Monomial::new(0.0, 2.0, x()).into_expr(), Expr::num(0.0));
        assert_eq!(Monomial::new(1.0, 1.0, x()).into_expr(), Expr::var("x"));
        assert_eq!(Monomial::new(5.0, 1.0, x()).into_expr(), Expr::mul(Expr::num(5.0), Expr::var("x")));
        assert_eq!(Monomial::new(1.0, 4.0, x()).into_expr(), Expr::pow(Expr::var("x"), Expr::num(4.0)));
        assert_eq!(
            Monomial::new(5.0, 4.0, x()).into_expr(),
            Expr::mul(Expr::num(5.0), Expr::pow(Expr::var("x"), Expr::num(4.0))),
        );
    }
}
