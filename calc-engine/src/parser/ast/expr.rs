use crate::parser::{ast::{BinOpKind, FuncTag}, Precedence};
use std::fmt::{self, Display, Formatter};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// An algebraic expression.
///
/// Expressions are plain trees: each node owns its children, and every transformation (such as
/// [`crate::symbolic::simplify`] or [`crate::symbolic::derivative`]) builds a new tree instead
/// of modifying an existing one.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Expr {
    /// A numeric constant, such as `2.5`.
    Const(f64),

    /// A variable, such as `x`. Identifiers produced by the parser are always lower-case.
    Var(String),

    /// A binary operation, such as `a + b` or `a ^ b`.
    Binary(BinOpKind, Box<Expr>, Box<Expr>),

    /// Negation of an expression, such as `-a`.
    Neg(Box<Expr>),

    /// A call to a named function, such as `sin(a)`.
    Func(FuncTag, Box<Expr>),
}

impl Expr {
    /// Creates a constant.
    pub fn num(value: f64) -> Self {
        Self::Const(value)
    }

    /// Creates a variable.
    pub fn var(name: impl Into<String>) -> Self {
        Self::Var(name.into())
    }

    /// Creates a binary operation.
    pub fn binary(op: BinOpKind, left: Expr, right: Expr) -> Self {
        Self::Binary(op, Box::new(left), Box::new(right))
    }

    pub fn add(left: Expr, right: Expr) -> Self {
        Self::binary(BinOpKind::Add, left, right)
    }

    pub fn sub(left: Expr, right: Expr) -> Self {
        Self::binary(BinOpKind::Sub, left, right)
    }

    pub fn mul(left: Expr, right: Expr) -> Self {
        Self::binary(BinOpKind::Mul, left, right)
    }

    pub fn div(left: Expr, right: Expr) -> Self {
        Self::binary(BinOpKind::Div, left, right)
    }

    pub fn pow(left: Expr, right: Expr) -> Self {
        Self::binary(BinOpKind::Exp, left, right)
    }

    pub fn neg(operand: Expr) -> Self {
        Self::Neg(Box::new(operand))
    }

    pub fn func(tag: FuncTag, operand: Expr) -> Self {
        Self::Func(tag, Box::new(operand))
    }

    /// Returns the value of the expression if it is a constant.
    pub fn as_const(&self) -> Option<f64> {
        match self {
            Self::Const(value) => Some(*value),
            _ => None,
        }
    }

    /// Returns the identifier of the expression if it is a variable.
    pub fn as_var(&self) -> Option<&str> {
        match self {
            Self::Var(name) => Some(name),
            _ => None,
        }
    }

    /// Returns true if the expression is the constant `value`.
    pub fn is_const_value(&self, value: f64) -> bool {
        self.as_const() == Some(value)
    }

    /// Returns the precedence of the outermost node of the expression, used to decide where
    /// parentheses are needed when the expression is written out.
    pub fn precedence(&self) -> Precedence {
        match self {
            Self::Const(value) if value.is_sign_negative() && *value != 0.0 => Precedence::Neg,
            Self::Const(_) | Self::Var(_) | Self::Func(..) => Precedence::Atom,
            Self::Binary(op, ..) => op.precedence(),
            Self::Neg(_) => Precedence::Neg,
        }
    }
}

/// Writes the expression, wrapping it in parentheses if `parens` is true.
fn fmt_maybe_paren(f: &mut Formatter<'_>, expr: &Expr, parens: bool) -> fmt::Result {
    if parens {
        write!(f, "({})", expr)
    } else {
        write!(f, "{}", expr)
    }
}

/// Writes an expression back out using as few parentheses as possible.
///
/// Every operator is left-associative, so the right operand of a binary operation is
/// parenthesized when it binds no tighter than the operation itself. A negation only ever
/// applies to a single atom.
///
/// A tree whose constants are all finite and non-negative reads back as the same tree. A
/// negative constant such as `-2` reads back as the negation of `2`, which has the same value.
/// A non-finite constant is written as `NaN` or `inf`, which the parser reads as a variable.
impl Display for Expr {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            // `-0` prints as `0`
            Self::Const(value) if *value == 0.0 => write!(f, "0"),
            Self::Const(value) => write!(f, "{}", value),
            Self::Var(name) => write!(f, "{}", name),
            Self::Binary(op, left, right) => {
                let precedence = op.precedence();
                fmt_maybe_paren(f, left, left.precedence() < precedence)?;
                if *op == BinOpKind::Exp {
                    write!(f, "^")?;
                } else {
                    write!(f, " {} ", op)?;
                }
                fmt_maybe_paren(f, right, right.precedence() <= precedence)
            },
            Self::Neg(operand) => {
                write!(f, "-")?;
                fmt_maybe_paren(f, operand, operand.precedence() != Precedence::Atom)
            },
            Self::Func(tag, operand) => write!(f, "{}({})", tag, operand),
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use super::*;

    use crate::parser::Parser;

    fn roundtrip(source: &str) -> (String, Expr) {
        let expr = Parser::new(source).try_parse_full::<Expr>().unwrap();
        (expr.to_string(), expr)
    }

    #[test]
    fn fmt_display() {
        let (fmt, _) = roundtrip("3x + 6");
        assert_eq!(fmt, "3 * x + 6");
    }

    #[test]
    fn fmt_display_keeps_grouping() {
        let (fmt, _) = roundtrip("a - (b - c) / (d * e)");
        assert_eq!(fmt, "a - (b - c) / (d * e)");
    }

    #[test]
    fn fmt_display_power_chain() {
        let (fmt, _) = roundtrip("2^3^2");
        assert_eq!(fmt, "2^3^2");

        let (fmt, _) = roundtrip("2^(3^2)");
        assert_eq!(fmt, "2^(3^2)");
    }

    #[test]
    fn fmt_display_negation() {
        let (fmt, _) = roundtrip("-a^2 + -(b * c) + sin(-x)");
        assert_eq!(fmt, "-a^2 + -(b * c) + sin(-x)");
    }

    #[test]
    fn fmt_display_negative_constants() {
        let expr = Expr::neg(Expr::num(-2.0));
        assert_eq!(expr.to_string(), "-(-2)");

        let expr = Expr::pow(Expr::var("a"), Expr::num(-1.5));
        assert_eq!(expr.to_string(), "a^-1.5");

        let expr = Expr::mul(Expr::num(-0.0), Expr::var("a"));
        assert_eq!(expr.to_string(), "0 * a");
    }

    #[test]
    fn negative_constants_read_back_as_negations() {
        let expr = Expr::mul(Expr::var("a"), Expr::num(-2.0));
        let (fmt, reparsed) = roundtrip(&expr.to_string());
        assert_eq!(fmt, "a * -2");
        assert_eq!(reparsed, Expr::mul(Expr::var("a"), Expr::neg(Expr::num(2.0))));
    }

    #[test]
    fn non_finite_constants() {
        assert_eq!(Expr::num(f64::NAN).to_string(), "NaN");
        assert_eq!(Expr::num(f64::NEG_INFINITY).to_string(), "-inf");
    }

    #[test]
    fn display_reparses_to_same_tree() {
        let sources = [
            "1 + 2 * 3",
            "(1 + 2) * 3",
            "a / (b / c)",
            "(a - b) - (c - d)",
            "-(a + b)^2",
            "2(x + 1)(x - 1)",
            "ln(exp(a)) * cos(-a)",
            "x^-2 - -3",
        ];

        for source in sources {
            let (fmt, expr) = roundtrip(source);
            let (_, reparsed) = roundtrip(&fmt);
            assert_eq!(reparsed, expr, "`{}` was written as `{}`", source, fmt);
        }
    }
}
