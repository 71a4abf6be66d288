pub mod token;

use calc_error::Error;
use crate::parser::error::kind::UnknownToken;
use logos::Logos;
pub use token::{Token, TokenKind};

/// Splits the given source into tokens.
///
/// The source is lower-cased (ASCII only, so byte offsets are preserved) before it is scanned,
/// making identifiers and keywords case-insensitive. Whitespace is skipped. Returns an
/// [`UnknownToken`] error pointing at the first character that does not start any token.
pub fn tokenize(input: &str) -> Result<Vec<Token>, Error> {
    let source = input.to_ascii_lowercase();
    let mut lexer = TokenKind::lexer(&source);
    let mut tokens = Vec::new();

    while let Some(result) = lexer.next() {
        let span = lexer.span();
        match result {
            Ok(kind) => {
                let text = kind.has_text().then(|| lexer.slice().to_string());
                tokens.push(Token { span, kind, text });
            },
            Err(()) => {
                let character = input[span.start..].chars().next().unwrap_or_default();
                let end = span.start + character.len_utf8();
                return Err(Error::new(
                    vec![span.start..end],
                    UnknownToken { position: span.start, character },
                ));
            },
        }
    }

    Ok(tokens)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use super::*;

    /// Compares the kinds and texts of the tokens produced by the tokenizer.
    fn compare_tokens<const N: usize>(input: &str, expected: [(TokenKind, Option<&str>); N]) {
        let tokens = tokenize(input).unwrap();
        let actual = tokens.iter()
            .map(|token| (token.kind, token.text.as_deref()))
            .collect::<Vec<_>>();
        assert_eq!(actual, expected.to_vec());
    }

    #[test]
    fn basic_expr() {
        compare_tokens(
            "1 + 2",
            [
                (TokenKind::Number, Some("1")),
                (TokenKind::Add, None),
                (TokenKind::Number, Some("2")),
            ],
        );
    }

    #[test]
    fn keywords_and_names() {
        compare_tokens(
            "SIN(x) + sinx * d(Y, ln y)",
            [
                (TokenKind::Sin, None),
                (TokenKind::OpenParen, None),
                (TokenKind::Name, Some("x")),
                (TokenKind::CloseParen, None),
                (TokenKind::Add, None),
                (TokenKind::Name, Some("sinx")),
                (TokenKind::Mul, None),
                (TokenKind::Derivative, None),
                (TokenKind::OpenParen, None),
                (TokenKind::Name, Some("y")),
                (TokenKind::Comma, None),
                (TokenKind::Ln, None),
                (TokenKind::Name, Some("y")),
                (TokenKind::CloseParen, None),
            ],
        );
    }

    #[test]
    fn derivative_keyword() {
        compare_tokens(
            "d dx D",
            [
                (TokenKind::Derivative, None),
                (TokenKind::Name, Some("dx")),
                (TokenKind::Derivative, None),
            ],
        );
    }

    #[test]
    fn number_runs() {
        compare_tokens(
            "3.14 2x .5 1.2.3",
            [
                (TokenKind::Number, Some("3.14")),
                (TokenKind::Number, Some("2")),
                (TokenKind::Name, Some("x")),
                (TokenKind::Number, Some(".5")),
                (TokenKind::Number, Some("1.2.3")),
            ],
        );
    }

    #[test]
    fn spans_point_into_source() {
        let tokens = tokenize("  ab ^ 2").unwrap();
        let spans = tokens.iter().map(|token| token.span.clone()).collect::<Vec<_>>();
        assert_eq!(spans, vec![2..4, 5..6, 7..8]);
    }

    #[test]
    fn empty_input() {
        assert!(tokenize("   ").unwrap().is_empty());
    }

    #[test]
    fn unknown_character() {
        let err = tokenize("1 + $").unwrap_err();
        let kind = err.downcast_ref::<UnknownToken>().unwrap();
        assert_eq!(kind.position, 4);
        assert_eq!(kind.character, '$');
        assert_eq!(err.spans, vec![4..5]);
    }
}
