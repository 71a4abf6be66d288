//! Binary operators and named functions that can appear in an expression.

use crate::{parser::Precedence, tokenizer::TokenKind};
use std::fmt::{self, Display, Formatter};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The binary operation that is being performed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum BinOpKind {
    Add,
    Sub,
    Mul,
    Div,
    Exp,
}

impl BinOpKind {
    /// Returns the binary operation corresponding to the given token, if any.
    pub fn from_token(kind: TokenKind) -> Option<Self> {
        match kind {
            TokenKind::Add => Some(Self::Add),
            TokenKind::Sub => Some(Self::Sub),
            TokenKind::Mul => Some(Self::Mul),
            TokenKind::Div => Some(Self::Div),
            TokenKind::Exp => Some(Self::Exp),
            _ => None,
        }
    }

    /// Returns the precedence of the binary operation.
    pub fn precedence(self) -> Precedence {
        match self {
            Self::Add | Self::Sub => Precedence::Term,
            Self::Mul | Self::Div => Precedence::Factor,
            Self::Exp => Precedence::Exp,
        }
    }

    /// Returns the symbol used to write the operation.
    pub fn symbol(self) -> char {
        match self {
            Self::Add => '+',
            Self::Sub => '-',
            Self::Mul => '*',
            Self::Div => '/',
            Self::Exp => '^',
        }
    }

    /// Applies the operation to the given operands, following IEEE 754 semantics.
    pub fn apply(self, left: f64, right: f64) -> f64 {
        match self {
            Self::Add => left + right,
            Self::Sub => left - right,
            Self::Mul => left * right,
            Self::Div => left / right,
            Self::Exp => left.powf(right),
        }
    }
}

impl Display for BinOpKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// A function of one argument that can be called by name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum FuncTag {
    Sin,
    Cos,
    Tan,
    Log,
    Sqrt,
    ArcSin,
    ArcCos,
    ArcTan,
    Exp,
    Ln,
    Cot,
    Csc,
    Sec,
    Abs,
    Floor,
    Ceil,
    Round,
    Sign,
}

impl FuncTag {
    /// Every supported function.
    pub const ALL: [FuncTag; 18] = [
        Self::Sin, Self::Cos, Self::Tan, Self::Log, Self::Sqrt, Self::ArcSin, Self::ArcCos,
        Self::ArcTan, Self::Exp, Self::Ln, Self::Cot, Self::Csc, Self::Sec, Self::Abs,
        Self::Floor, Self::Ceil, Self::Round, Self::Sign,
    ];

    /// The name the function is called by.
    pub fn name(self) -> &'static str {
        match self {
            Self::Sin => "sin",
            Self::Cos => "cos",
            Self::Tan => "tan",
            Self::Log => "log",
            Self::Sqrt => "sqrt",
            Self::ArcSin => "arcsin",
            Self::ArcCos => "arccos",
            Self::ArcTan => "arctan",
            Self::Exp => "exp",
            Self::Ln => "ln",
            Self::Cot => "cot",
            Self::Csc => "csc",
            Self::Sec => "sec",
            Self::Abs => "abs",
            Self::Floor => "floor",
            Self::Ceil => "ceil",
            Self::Round => "round",
            Self::Sign => "sign",
        }
    }

    /// Applies the function to the given value.
    ///
    /// `log` is the base-10 logarithm, `round` rounds half-way cases to the nearest even number,
    /// and `sign` returns `-1`, `0` or `1` (or NaN for NaN).
    pub fn apply(self, x: f64) -> f64 {
        match self {
            Self::Sin => x.sin(),
            Self::Cos => x.cos(),
            Self::Tan => x.tan(),
            Self::Log => x.log10(),
            Self::Sqrt => x.sqrt(),
            Self::ArcSin => x.asin(),
            Self::ArcCos => x.acos(),
            Self::ArcTan => x.atan(),
            Self::Exp => x.exp(),
            Self::Ln => x.ln(),
            Self::Cot => 1.0 / x.tan(),
            Self::Csc => 1.0 / x.sin(),
            Self::Sec => 1.0 / x.cos(),
            Self::Abs => x.abs(),
            Self::Floor => x.floor(),
            Self::Ceil => x.ceil(),
            Self::Round => x.round_ties_even(),
            Self::Sign => {
                if x.is_nan() {
                    f64::NAN
                } else if x > 0.0 {
                    1.0
                } else if x < 0.0 {
                    -1.0
                } else {
                    0.0
                }
            },
        }
    }
}

impl Display for FuncTag {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}
