//! Style-string parser.
//!
//! Parses `attribute=value` pairs separated by commas into a [`Style`]:
//!
//! ```text
//! rows=14, columns=98, margin_top=2,
//! ```
//!
//! Attributes not mentioned keep their default value. An empty string yields
//! the default style. Each pair is applied through [`Style::set_value`], so
//! unknown names and bad values fail the same way they do there.

use std::str::FromStr;

use crate::style::styles::{Style, StyleError};
use crate::style::tokenizer::{tokenize, Spanned, Token};

impl FromStr for Style {
    type Err = StyleError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let tokens = tokenize(input).map_err(|position| StyleError::Syntax {
            position,
            message: "unexpected character".into(),
        })?;

        let mut style = Style::default();
        let mut stream = tokens.iter();

        while let Some(name) = stream.next() {
            expect(name, Token::Ident, "attribute name")?;
            let equals = stream.next().ok_or_else(|| eof(input, "'='"))?;
            expect(equals, Token::Equals, "'='")?;
            let value = stream.next().ok_or_else(|| eof(input, "attribute value"))?;
            if !matches!(value.token, Token::Ident | Token::Number) {
                return Err(unexpected(value, "attribute value"));
            }

            style.set_value(name.text, value.text)?;

            match stream.next() {
                None => break,
                Some(sep) => expect(sep, Token::Comma, "','")?,
            }
        }

        Ok(style)
    }
}

fn expect(token: &Spanned<'_>, kind: Token, what: &str) -> Result<(), StyleError> {
    if token.token == kind {
        Ok(())
    } else {
        Err(unexpected(token, what))
    }
}

fn unexpected(token: &Spanned<'_>, what: &str) -> StyleError {
    StyleError::Syntax {
        position: token.position,
        message: format!("expected {what}, got '{}'", token.text),
    }
}

fn eof(input: &str, what: &str) -> StyleError {
    StyleError::Syntax {
        position: input.len(),
        message: format!("expected {what}, got end of input"),
    }
}
