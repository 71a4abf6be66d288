use std::fmt::{Display, Formatter, Result};
use super::ast::{layout::round_to, BinOpKind, Expr, FuncTag};

/// A trait for types that can be formatted as LaTeX.
pub trait Latex {
    /// Format the value as LaTeX.
    fn fmt_latex(&self, f: &mut Formatter) -> Result;

    /// Wraps the value in a [`LatexFormatter`], which implements [`Display`].
    fn as_display(&self) -> LatexFormatter<'_, Self> {
        LatexFormatter(self)
    }
}

/// A wrapper type that implements [`Display`] for any type that implements [`Latex`].
pub struct LatexFormatter<'a, T: ?Sized>(&'a T);

impl<T: ?Sized> Display for LatexFormatter<'_, T>
where
    T: Latex,
{
    fn fmt(&self, f: &mut Formatter) -> Result {
        self.0.fmt_latex(f)
    }
}

/// Writes `open`, the operand, then `close`.
fn fmt_wrapped(f: &mut Formatter, open: &str, operand: &Expr, close: &str) -> Result {
    write!(f, "{}", open)?;
    operand.fmt_latex(f)?;
    write!(f, "{}", close)
}

impl Latex for FuncTag {
    fn fmt_latex(&self, f: &mut Formatter) -> Result {
        match self {
            Self::Round => write!(f, "round"),
            other => write!(f, "\\{}", other.name()),
        }
    }
}

/// Each node is written on its own: sums, differences and products are always grouped with
/// `\left( \right)`, so no precedence analysis is needed. Constants are rounded to four decimal
/// places.
impl Latex for Expr {
    fn fmt_latex(&self, f: &mut Formatter) -> Result {
        match self {
            Self::Const(value) => write!(f, "{}", round_to(*value, 4)),
            Self::Var(name) => write!(f, "{}", name),
            Self::Binary(op, left, right) => match op {
                BinOpKind::Add | BinOpKind::Sub => {
                    write!(f, "\\left(")?;
                    left.fmt_latex(f)?;
                    write!(f, " {} ", op)?;
                    right.fmt_latex(f)?;
                    write!(f, "\\right)")
                },
                BinOpKind::Mul => match (&**left, &**right) {
                    (Self::Const(_), Self::Var(name)) => {
                        left.fmt_latex(f)?;
                        write!(f, "{}", name)
                    },
                    _ => {
                        write!(f, "\\left(")?;
                        left.fmt_latex(f)?;
                        write!(f, " \\cdot ")?;
                        right.fmt_latex(f)?;
                        write!(f, "\\right)")
                    },
                },
                BinOpKind::Div => {
                    fmt_wrapped(f, "\\frac{", left, "}")?;
                    fmt_wrapped(f, "{", right, "}")
                },
                BinOpKind::Exp => match right.as_const() {
                    Some(exp) if exp == -1.0 => fmt_wrapped(f, "\\frac{1}{", left, "}"),
                    Some(exp) if exp < 0.0 => {
                        fmt_wrapped(f, "\\frac{1}{", left, "")?;
                        write!(f, "^{{{}}}}}", round_to(-exp, 4))
                    },
                    _ => {
                        left.fmt_latex(f)?;
                        fmt_wrapped(f, "^{", right, "}")
                    },
                },
            },
            Self::Neg(operand) => fmt_wrapped(f, "-{", operand, "}"),
            Self::Func(tag, operand) => match tag {
                FuncTag::Sqrt => fmt_wrapped(f, "\\sqrt{", operand, "}"),
                FuncTag::Abs => fmt_wrapped(f, "\\left|", operand, "\\right|"),
                FuncTag::Sign => fmt_wrapped(f, "\\left\\langle ", operand, "\\right\\rangle"),
                FuncTag::Floor => fmt_wrapped(f, "\\left\\lfloor ", operand, "\\right\\rfloor"),
                FuncTag::Ceil => fmt_wrapped(f, "\\left\\lceil ", operand, "\\right\\rceil"),
                _ => {
                    tag.fmt_latex(f)?;
                    fmt_wrapped(f, "\\left(", operand, "\\right)")
                },
            },
        }
    }
}

impl Expr {
    /// Returns the expression formatted as LaTeX.
    pub fn to_latex(&self) -> String {
        self.as_display().to_string()
    }
}
