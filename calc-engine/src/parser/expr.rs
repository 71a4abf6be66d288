//! The grammar of expressions, from the lowest precedence level to the highest:
//!
//! ```text
//! sum      := product (('+' | '-') product)*
//! product  := power (('*' | '/') power | power)*   # juxtaposition before a name or `(`
//! power    := unary ('^' unary)*
//! unary    := '-'? primary
//! primary  := number
//!           | '(' sum ')'
//!           | function '(' sum ')'
//!           | 'd' '(' name ',' sum ')'
//!           | name
//! ```
//!
//! Every binary level is left-associative, including `^`: `2^3^2` is `(2^3)^2`. Long chains of
//! operators are bounded by [`MAX_EXPR_DEPTH`](crate::parser::MAX_EXPR_DEPTH).

use crate::{
    parser::{
        ast::{BinOpKind, Expr},
        error::{kind, Error},
        Parse,
        Parser,
    },
    symbolic::derivative,
    tokenizer::TokenKind,
};
use tracing::debug;

impl Parse for Expr {
    fn parse(input: &mut Parser) -> Result<Self, Error> {
        sum(input)
    }
}

/// Returns the binary operator of the current token if it is one of `ops`, consuming it.
fn take_op(input: &mut Parser, ops: &[BinOpKind]) -> Option<BinOpKind> {
    let op = input.peek_kind().and_then(BinOpKind::from_token)?;
    if ops.contains(&op) {
        input.next_token().ok()?;
        Some(op)
    } else {
        None
    }
}

/// Parses terms separated by `+` and `-`.
pub fn sum(input: &mut Parser) -> Result<Expr, Error> {
    input.chain(|input, levels| {
        let mut lhs = product(input)?;
        while let Some(op) = take_op(input, &[BinOpKind::Add, BinOpKind::Sub]) {
            input.add_level(levels)?;
            let rhs = product(input)?;
            lhs = Expr::binary(op, lhs, rhs);
        }
        Ok(lhs)
    })
}

/// Parses factors separated by `*` and `/`, or juxtaposed when the next factor starts with a
/// name or an opening parenthesis.
pub fn product(input: &mut Parser) -> Result<Expr, Error> {
    input.chain(|input, levels| {
        let mut lhs = power(input)?;
        loop {
            let op = if matches!(input.peek_kind(), Some(TokenKind::Name | TokenKind::OpenParen)) {
                BinOpKind::Mul
            } else if let Some(op) = take_op(input, &[BinOpKind::Mul, BinOpKind::Div]) {
                op
            } else {
                return Ok(lhs);
            };

            input.add_level(levels)?;
            let rhs = power(input)?;
            lhs = Expr::binary(op, lhs, rhs);
        }
    })
}

/// Parses operands separated by `^`.
pub fn power(input: &mut Parser) -> Result<Expr, Error> {
    input.chain(|input, levels| {
        let mut lhs = unary(input)?;
        while take_op(input, &[BinOpKind::Exp]).is_some() {
            input.add_level(levels)?;
            let rhs = unary(input)?;
            lhs = Expr::pow(lhs, rhs);
        }
        Ok(lhs)
    })
}

/// Parses an optional single `-` in front of a primary expression.
pub fn unary(input: &mut Parser) -> Result<Expr, Error> {
    if input.peek_kind() == Some(TokenKind::Sub) {
        input.next_token()?;
        Ok(Expr::neg(primary(input)?))
    } else {
        primary(input)
    }
}

/// Parses `( sum )`, the parenthesized argument of a function or the inside of a group.
fn parenthesized(input: &mut Parser) -> Result<Expr, Error> {
    input.expect(&[TokenKind::OpenParen])?;
    let inner = input.nested(sum)?;
    input.expect(&[TokenKind::CloseParen])?;
    Ok(inner)
}

/// Parses a number, name, group, function call, or derivative.
pub fn primary(input: &mut Parser) -> Result<Expr, Error> {
    let token = match input.current_token() {
        Some(token) => token.clone(),
        None => return Err(input.error(kind::UnexpectedEof)),
    };

    match token.kind {
        TokenKind::Number => {
            input.next_token()?;
            let lexeme = token.text.unwrap_or_default();
            lexeme.parse::<f64>()
                .map(Expr::Const)
                .map_err(|_| Error::new(vec![token.span], kind::InvalidNumber { lexeme }))
        },
        TokenKind::Name => {
            input.next_token()?;
            Ok(Expr::Var(token.text.unwrap_or_default()))
        },
        TokenKind::OpenParen => parenthesized(input),
        TokenKind::Derivative => {
            input.next_token()?;
            input.expect(&[TokenKind::OpenParen])?;
            let name = input.expect(&[TokenKind::Name])?.text.unwrap_or_default();
            input.expect(&[TokenKind::Comma])?;
            let inner = input.nested(sum)?;
            input.expect(&[TokenKind::CloseParen])?;

            let span = token.span.start..input.prev_span().end;
            debug!(var = %name, "differentiating while parsing");
            derivative(&inner, &name, input.ctxt()).map_err(|err| err.or_span(span))
        },
        other => match other.as_func() {
            Some(tag) => {
                input.next_token()?;
                let operand = parenthesized(input)?;
                Ok(Expr::func(tag, operand))
            },
            None => Err(Error::new(vec![token.span], kind::InvalidToken { found: other })),
        },
    }
}
