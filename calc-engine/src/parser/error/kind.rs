use ariadne::Fmt;
use calc_attrs::ErrorKind;
use calc_error::EXPR;
use crate::tokenizer::TokenKind;

/// A character that does not start any token was found.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = format!("unknown character `{}`", character),
    labels = ["this character"],
    help = "expressions may only contain numbers, names, parentheses, commas, and the operators `+ - * / ^`",
)]
pub struct UnknownToken {
    /// The byte offset of the character in the source.
    pub position: usize,

    /// The character that was found.
    pub character: char,
}

/// The end of the source code was reached unexpectedly.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "unexpected end of input",
    labels = [format!("you might need to add another {} here", "expression".fg(EXPR))],
)]
pub struct UnexpectedEof;

/// The end of the source code was expected, but something else was found.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "expected end of input",
    labels = [format!("I could not understand the remaining {} here", "expression".fg(EXPR))],
    help = format!("found {:?}", found),
)]
pub struct ExpectedEof {
    /// The first token that was not consumed.
    pub found: TokenKind,
}

/// A specific token was expected, but a different one was found.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "unexpected token",
    labels = [format!("expected one of: {}", expected.iter().map(|t| format!("{:?}", t)).collect::<Vec<_>>().join(", "))],
    help = format!("found {:?}", found),
)]
pub struct UnexpectedToken {
    /// The token(s) that were expected.
    pub expected: &'static [TokenKind],

    /// The token that was found.
    pub found: TokenKind,
}

/// A token was found where no expression can start.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = format!("invalid token {:?}", found),
    labels = [format!("expected an {} here", "expression".fg(EXPR))],
    help = "an expression starts with a number, a name, a function, `d`, `(` or `-`",
)]
pub struct InvalidToken {
    /// The token that was found.
    pub found: TokenKind,
}

/// A run of digits and dots could not be read as a number.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = format!("`{}` is not a valid number", lexeme),
    labels = ["this number"],
    help = "a number may contain at most one decimal point",
)]
pub struct InvalidNumber {
    /// The text of the number.
    pub lexeme: String,
}

/// Parentheses, function calls and derivatives were nested too deeply.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "expression is nested too deeply",
    labels = ["this is too deep"],
    help = format!("the maximum nesting depth is {}", max),
)]
pub struct NestingTooDeep {
    /// The maximum nesting depth.
    pub max: usize,
}
