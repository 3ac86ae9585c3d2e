//! logos-based tokenizer for style strings (`rows=3, columns=10,`).
//!
//! Whitespace and newlines between tokens are skipped. A number is only a
//! [`Token::Number`] when it is not followed by identifier characters.

use logos::Logos;

/// Style-string token produced by the lexer.
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
#[logos(skip r"[ \t\n\r]+")]
pub enum Token {
    /// Attribute name or word value: `rows`, `inline`, `True`.
    #[regex(r"[a-zA-Z_][a-zA-Z0-9_]*")]
    Ident,

    /// Whole number value.
    #[regex(r"[0-9]+")]
    Number,

    /// `=`
    #[token("=")]
    Equals,

    /// `,`
    #[token(",")]
    Comma,
}

/// A token with its source text and byte offset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Spanned<'a> {
    pub token: Token,
    pub text: &'a str,
    pub position: usize,
}

/// Tokenize a style string.
///
/// Fails with the byte offset of the first character that is not part of any
/// token.
pub fn tokenize(input: &str) -> Result<Vec<Spanned<'_>>, usize> {
    Token::lexer(input)
        .spanned()
        .map(|(result, span)| match result {
            Ok(token) => Ok(Spanned {
                token,
                text: &input[span.clone()],
                position: span.start,
            }),
            Err(()) => Err(span.start),
        })
        .collect()
}
