use crate::parser::ast::FuncTag;
use logos::Logos;
use std::ops::Range;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The different kinds of tokens that can be produced by the tokenizer.
///
/// Keywords are declared as literal tokens, which take priority over the [`TokenKind::Name`]
/// pattern when both match the same run of letters. A longer run of letters is always a name,
/// so `sinx` is the name `sinx`, not `sin` followed by `x`.
#[derive(Logos, Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[logos(skip r"[ \t\r\n\f]+")]
pub enum TokenKind {
    #[token("+")]
    Add,

    #[token("-")]
    Sub,

    #[token("*")]
    Mul,

    #[token("/")]
    Div,

    #[token("^")]
    Exp,

    #[token("(")]
    OpenParen,

    #[token(")")]
    CloseParen,

    #[token(",")]
    Comma,

    /// The derivative keyword, `d`. A single letter ties with [`TokenKind::Name`], so it is
    /// given an explicit priority.
    #[token("d", priority = 3)]
    Derivative,

    #[token("sin")]
    Sin,

    #[token("cos")]
    Cos,

    #[token("tan")]
    Tan,

    #[token("log")]
    Log,

    #[token("sqrt")]
    Sqrt,

    #[token("arcsin")]
    ArcSin,

    #[token("arccos")]
    ArcCos,

    #[token("arctan")]
    ArcTan,

    #[token("exp")]
    ExpFunc,

    #[token("ln")]
    Ln,

    #[token("cot")]
    Cot,

    #[token("csc")]
    Csc,

    #[token("sec")]
    Sec,

    #[token("abs")]
    Abs,

    #[token("floor")]
    Floor,

    #[token("ceil")]
    Ceil,

    #[token("round")]
    Round,

    #[token("sign")]
    Sign,

    /// A maximal run of digits and dots. Whether it is a valid number is decided by the parser.
    #[regex(r"[0-9.]+")]
    Number,

    #[regex(r"[a-z]+")]
    Name,
}

impl TokenKind {
    /// Returns the function this token names, if it is a function keyword.
    pub fn as_func(self) -> Option<FuncTag> {
        Some(match self {
            TokenKind::Sin => FuncTag::Sin,
            TokenKind::Cos => FuncTag::Cos,
            TokenKind::Tan => FuncTag::Tan,
            TokenKind::Log => FuncTag::Log,
            TokenKind::Sqrt => FuncTag::Sqrt,
            TokenKind::ArcSin => FuncTag::ArcSin,
            TokenKind::ArcCos => FuncTag::ArcCos,
            TokenKind::ArcTan => FuncTag::ArcTan,
            TokenKind::ExpFunc => FuncTag::Exp,
            TokenKind::Ln => FuncTag::Ln,
            TokenKind::Cot => FuncTag::Cot,
            TokenKind::Csc => FuncTag::Csc,
            TokenKind::Sec => FuncTag::Sec,
            TokenKind::Abs => FuncTag::Abs,
            TokenKind::Floor => FuncTag::Floor,
            TokenKind::Ceil => FuncTag::Ceil,
            TokenKind::Round => FuncTag::Round,
            TokenKind::Sign => FuncTag::Sign,
            _ => return None,
        })
    }

    /// Returns true if the token is one of the function keywords.
    pub fn is_function(self) -> bool {
        self.as_func().is_some()
    }

    /// Returns true if tokens of this kind keep the text they were scanned from.
    pub fn has_text(self) -> bool {
        matches!(self, TokenKind::Number | TokenKind::Name)
    }
}

/// A token produced by the tokenizer.
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    /// The region of the source code that this token originated from.
    pub span: Range<usize>,

    /// The kind of token.
    pub kind: TokenKind,

    /// The lower-cased text of the token, kept only for numbers and names.
    pub text: Option<String>,
}
