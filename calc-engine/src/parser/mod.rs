pub mod ast;
pub mod error;
pub mod expr;
pub mod fmt;

use ast::Expr;
use calc_error::ErrorKind;
use crate::{numerical::Ctxt, tokenizer::{tokenize, Token, TokenKind}};
use error::{Error, kind};
use once_cell::sync::Lazy;
use std::ops::Range;
use tracing::debug;

/// The maximum number of parentheses, function calls and derivatives that can be nested inside
/// each other.
pub const MAX_NESTING_DEPTH: usize = 128;

/// The maximum number of operators that can be chained on the path from the root of an
/// expression to any of its operands, such as the `+` signs in `1 + 2 + 3`.
pub const MAX_EXPR_DEPTH: usize = 512;

/// The context used by [`Parser::new`], containing only the default constants.
static DEFAULT_CTXT: Lazy<Ctxt> = Lazy::new(Ctxt::default);

/// A high-level parser for expressions. This is the type to use to parse an arbitrary piece of
/// text into an [`Expr`].
///
/// The parser holds a [`Ctxt`] because the derivative syntax `d(x, expr)` is differentiated
/// while parsing, and the power rule needs to know which sub-expressions are constant.
#[derive(Debug)]
pub struct Parser<'ctxt> {
    /// The tokens that this parser is currently parsing.
    tokens: Box<[Token]>,

    /// The error produced by the tokenizer, if the source could not be tokenized. It is
    /// reported by the first call to [`Parser::try_parse_full`].
    lex_error: Option<Error>,

    /// The length of the source, used to point at the end of the input.
    source_len: usize,

    /// The index of the **next** token to be parsed.
    cursor: usize,

    /// The current nesting depth.
    depth: usize,

    /// The number of operators in the chains currently being parsed.
    levels: usize,

    /// The context used to differentiate `d(x, expr)` expressions.
    ctxt: &'ctxt Ctxt,
}

impl Parser<'static> {
    /// Create a new parser for the given source, using the default context.
    pub fn new(source: &str) -> Self {
        Self::with_ctxt(source, &DEFAULT_CTXT)
    }
}

impl<'ctxt> Parser<'ctxt> {
    /// Create a new parser for the given source, using the given context.
    pub fn with_ctxt(source: &str, ctxt: &'ctxt Ctxt) -> Self {
        let (tokens, lex_error) = match tokenize(source) {
            Ok(tokens) => (tokens.into_boxed_slice(), None),
            Err(err) => (Box::default(), Some(err)),
        };
        debug!(source, tokens = tokens.len(), "tokenized source");

        Self {
            tokens,
            lex_error,
            source_len: source.len(),
            cursor: 0,
            depth: 0,
            levels: 0,
            ctxt,
        }
    }

    /// Returns the context this parser differentiates with.
    pub fn ctxt(&self) -> &'ctxt Ctxt {
        self.ctxt
    }

    /// Creates an error that points at the current token, or the end of the source code if the
    /// cursor is at the end of the stream.
    pub fn error(&self, kind: impl ErrorKind + 'static) -> Error {
        Error::new(vec![self.span()], kind)
    }

    /// Returns a span pointing at the end of the source code.
    pub fn eof_span(&self) -> Range<usize> {
        self.source_len..self.source_len
    }

    /// Returns the span of the current token, or the end of the source code if the cursor is at
    /// the end of the stream.
    pub fn span(&self) -> Range<usize> {
        self.tokens
            .get(self.cursor)
            .map_or(self.eof_span(), |token| token.span.clone())
    }

    /// Returns the span of the previous token, or an empty span at the start of the source if no
    /// token was consumed yet.
    pub fn prev_span(&self) -> Range<usize> {
        self.cursor
            .checked_sub(1)
            .and_then(|idx| self.tokens.get(idx))
            .map_or(0..0, |token| token.span.clone())
    }

    /// Returns the current token. The cursor is not moved. Returns [`None`] if the cursor is at
    /// the end of the stream.
    pub fn current_token(&self) -> Option<&Token> {
        self.tokens.get(self.cursor)
    }

    /// Returns the kind of the current token without moving the cursor.
    pub fn peek_kind(&self) -> Option<TokenKind> {
        self.current_token().map(|token| token.kind)
    }

    /// Returns the next token to be parsed, then advances the cursor.
    ///
    /// Returns an EOF error if there are no more tokens.
    pub fn next_token(&mut self) -> Result<Token, Error> {
        match self.tokens.get(self.cursor) {
            Some(token) => {
                self.cursor += 1;
                Ok(token.clone())
            },
            None => Err(self.error(kind::UnexpectedEof)),
        }
    }

    /// Consumes the next token, returning an error if it is not of the given kind.
    pub fn expect(&mut self, expected: &'static [TokenKind]) -> Result<Token, Error> {
        let span = self.span();
        let token = self.next_token()?;
        if expected.contains(&token.kind) {
            Ok(token)
        } else {
            Err(Error::new(vec![span], kind::UnexpectedToken {
                expected,
                found: token.kind,
            }))
        }
    }

    /// Runs the given parsing function one nesting level deeper, failing if that exceeds
    /// [`MAX_NESTING_DEPTH`].
    pub fn nested<T>(&mut self, f: impl FnOnce(&mut Self) -> Result<T, Error>) -> Result<T, Error> {
        if self.depth >= MAX_NESTING_DEPTH {
            return Err(self.error(kind::NestingTooDeep { max: MAX_NESTING_DEPTH }));
        }

        self.depth += 1;
        let result = f(self);
        self.depth -= 1;
        result
    }

    /// Runs the given parsing function for a chain of operators. Each operator it passes to
    /// `f` adds a level through [`Parser::add_level`], and the levels are released once `f`
    /// returns.
    pub fn chain<T>(
        &mut self,
        f: impl FnOnce(&mut Self, &mut usize) -> Result<T, Error>,
    ) -> Result<T, Error> {
        let mut levels = 0;
        let result = f(self, &mut levels);
        self.levels -= levels;
        result
    }

    /// Counts one more operator in the current chain, failing if that exceeds
    /// [`MAX_EXPR_DEPTH`].
    pub fn add_level(&mut self, levels: &mut usize) -> Result<(), Error> {
        if self.levels >= MAX_EXPR_DEPTH {
            return Err(self.error(kind::NestingTooDeep { max: MAX_EXPR_DEPTH }));
        }

        self.levels += 1;
        *levels += 1;
        Ok(())
    }

    /// Attempts to parse a value from the given stream of tokens. All the tokens must be consumed
    /// by the parser; if not, an error is returned.
    pub fn try_parse_full<T: Parse>(&mut self) -> Result<T, Error> {
        if let Some(err) = self.lex_error.take() {
            return Err(err);
        }

        let value = T::parse(self)?;
        match self.current_token() {
            None => Ok(value),
            Some(token) => Err(Error::new(
                vec![token.span.start..self.source_len],
                kind::ExpectedEof { found: token.kind },
            )),
        }
    }
}

/// Any type that can be parsed from a source of tokens.
pub trait Parse: Sized {
    /// Parses a value from the given stream of tokens, advancing the stream past the consumed
    /// tokens if parsing is successful.
    fn parse(input: &mut Parser) -> Result<Self, Error>;
}

/// The precedence of an operation, in order from lowest precedence (evaluated last) to highest
/// precedence (evaluated first).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Precedence {
    /// Precedence of addition (`+`) and subtraction (`-`), which separate terms.
    Term,

    /// Precedence of multiplication (`*`), division (`/`) and juxtaposition, which separate
    /// factors.
    Factor,

    /// Precedence of exponentiation (`^`).
    Exp,

    /// Precedence of unary subtraction (`-`). It binds tighter than `^`, so `-a^2` is `(-a)^2`.
    Neg,

    /// Numbers, names, function calls and derivatives.
    Atom,
}

impl PartialOrd for Precedence {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Precedence {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        (*self as u8).cmp(&(*other as u8))
    }
}

/// Parses the given source into an expression, using the default context for derivatives.
pub fn parse(source: &str) -> Result<Expr, Error> {
    Parser::new(source).try_parse_full()
}

/// Parses the given source into an expression, using the given context for derivatives.
pub fn parse_with(source: &str, ctxt: &Ctxt) -> Result<Expr, Error> {
    Parser::with_ctxt(source, ctxt).try_parse_full()
}
