//! Size metrics of an expression drawn as a tree, with each operator centered above its
//! operands.
//!
//! Every node is drawn as a label: the constant rounded to two decimal places, the variable
//! name, the operator symbol, or the function name. Widths count characters.

use super::{BinOpKind, Expr};

/// Rounds the value to the given number of decimal places, with ties going to the even digit.
pub(crate) fn round_to(value: f64, places: i32) -> f64 {
    let scale = 10f64.powi(places);
    let rounded = (value * scale).round_ties_even() / scale;
    if rounded == 0.0 {
        0.0
    } else {
        rounded
    }
}

/// Pads the given width up to an odd number, so that a label always has a center column.
fn odd(width: usize) -> usize {
    if width % 2 == 0 {
        width + 1
    } else {
        width
    }
}

impl Expr {
    /// The text drawn for the node itself, without its children.
    pub fn label(&self) -> String {
        match self {
            Self::Const(value) => round_to(*value, 2).to_string(),
            Self::Var(name) => name.clone(),
            Self::Binary(op, ..) => op.to_string(),
            Self::Neg(_) => BinOpKind::Sub.to_string(),
            Self::Func(tag, _) => tag.name().to_string(),
        }
    }

    /// The total width of the drawn tree.
    pub fn width(&self) -> usize {
        match self {
            Self::Const(_) | Self::Var(_) => odd(self.label().len()),
            Self::Binary(_, left, right) => left.width() + right.width() + 1,
            Self::Neg(operand) => operand.width().max(1),
            Self::Func(tag, operand) => operand.width().max(odd(tag.name().len())),
        }
    }

    /// The number of columns to the left of the node's center column.
    pub fn left_width(&self) -> usize {
        match self {
            Self::Const(_) | Self::Var(_) => self.label().len() / 2,
            Self::Binary(_, left, _) => left.width(),
            Self::Neg(operand) => operand.left_width(),
            Self::Func(tag, operand) => operand.left_width().max(tag.name().len() / 2),
        }
    }

    /// The number of columns to the right of the node's center column.
    pub fn right_width(&self) -> usize {
        match self {
            Self::Const(_) | Self::Var(_) => self.label().len() / 2,
            Self::Binary(_, _, right) => right.width(),
            Self::Neg(operand) => operand.right_width(),
            Self::Func(tag, operand) => operand.right_width().max(tag.name().len() / 2),
        }
    }

    /// The number of levels in the tree; a leaf has depth 1.
    pub fn depth(&self) -> usize {
        match self {
            Self::Const(_) | Self::Var(_) => 1,
            Self::Binary(_, left, right) => 1 + left.depth().max(right.depth()),
            Self::Neg(operand) | Self::Func(_, operand) => 1 + operand.depth(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::parser::ast::FuncTag;

    #[test]
    fn leaf_metrics() {
        let expr = Expr::var("ab");
        assert_eq!((expr.width(), expr.left_width(), expr.right_width()), (3, 1, 1));

        let expr = Expr::num(3.14159);
        assert_eq!(expr.label(), "3.14");
        assert_eq!((expr.width(), expr.left_width(), expr.right_width()), (5, 2, 2));
    }

    #[test]
    fn binary_metrics() {
        let expr = Expr::add(Expr::var("x"), Expr::num(10.0));
        assert_eq!(expr.width(), 1 + 3 + 1);
        assert_eq!(expr.left_width(), 1);
        assert_eq!(expr.right_width(), 3);
        assert_eq!(expr.depth(), 2);
    }

    #[test]
    fn unary_metrics() {
        let expr = Expr::func(FuncTag::ArcTan, Expr::var("x"));
        assert_eq!(expr.width(), 7);
        assert_eq!(expr.left_width(), 3);
        assert_eq!(expr.right_width(), 3);

        let expr = Expr::neg(Expr::mul(Expr::var("x"), Expr::var("y")));
        assert_eq!(expr.width(), 3);
        assert_eq!(expr.depth(), 3);
    }

    #[test]
    fn rounding() {
        assert_eq!(round_to(2.675, 2), 2.67);
        assert_eq!(round_to(-0.001, 2), 0.0);
        assert_eq!(round_to(1.23456, 4), 1.2346);
    }
}
