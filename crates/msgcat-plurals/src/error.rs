//! Error type for Plural-Forms expression handling.
//!
//! Both variants reproduce the offending expression with a caret under
//! the offending column, in the classic yacc error shape:
//!
//! ```text
//! parse error: syntax error: unexpected ')', expecting NUMBER or 'n' or '!' or '('
//! )1>2
//! ^
//! ```

use thiserror::Error;

use crate::token::Token;

/// Failure while lexing or parsing a Plural-Forms expression.
///
/// Evaluation itself cannot fail: division and modulus by zero are
/// defined to yield `0`, and arithmetic wraps.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PluralsError {
    /// The lexer hit an unrecognized byte or a malformed number literal.
    #[error("{}", render(.expr, .pos, .message))]
    Lex {
        /// The full expression text.
        expr: String,
        /// Byte offset of the offending character.
        pos: usize,
        message: String,
    },

    /// The parser saw a token that no rule can accept at this point.
    #[error("{}", render(.expr, .pos, &syntax_line(.found, .expected)))]
    Syntax {
        /// The full expression text.
        expr: String,
        /// Byte offset of the first character of the offending token.
        pos: usize,
        /// Display name of the offending token.
        found: String,
        /// Display names of the tokens that would have been accepted.
        expected: Vec<String>,
    },
}

impl PluralsError {
    pub(crate) fn lex(expr: &str, pos: usize, message: impl Into<String>) -> Self {
        Self::Lex {
            expr: expr.to_string(),
            pos,
            message: message.into(),
        }
    }

    pub(crate) fn syntax(expr: &str, pos: usize, found: Token, expected: &[&str]) -> Self {
        Self::Syntax {
            expr: expr.to_string(),
            pos,
            found: found.to_string(),
            expected: expected.iter().map(|s| (*s).to_string()).collect(),
        }
    }

    /// Byte offset of the offending character or token.
    #[must_use]
    pub fn position(&self) -> usize {
        match self {
            Self::Lex { pos, .. } | Self::Syntax { pos, .. } => *pos,
        }
    }
}

fn syntax_line(found: &str, expected: &[String]) -> String {
    format!(
        "syntax error: unexpected {found}, expecting {}",
        expected.join(" or ")
    )
}

fn render(expr: &str, pos: &usize, message: &str) -> String {
    format!("parse error: {message}\n{expr}\n{:pos$}^", "", pos = *pos)
}
