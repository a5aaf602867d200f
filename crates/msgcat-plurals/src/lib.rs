#![forbid(unsafe_code)]

//! Plural-Forms expression engine for gettext catalogs.
//!
//! A PO header carries a field such as
//!
//! ```text
//! Plural-Forms: nplurals=3; plural=(n%10==1 && n%100!=11 ? 0 : n%10>=2
//!     && n%10<=4 && (n%100<10 || n%100>=20) ? 1 : 2);
//! ```
//!
//! where the `plural=` value is a C-subset integer expression over the
//! single variable `n`. This crate lexes, parses, and evaluates that
//! expression language: [`PluralExpr::parse`] compiles an expression
//! once, and [`PluralExpr::evaluate`] maps a quantity `n` to a plural
//! index.
//!
//! # Semantics
//!
//! - All arithmetic is unsigned 64-bit with wrap-around on overflow.
//! - Division or modulus by zero evaluates to `0`; evaluation is total
//!   and can never fail.
//! - Boolean operators yield `0`/`1`; `&&`, `||`, and `?:` short-circuit.
//!
//! # Example
//!
//! ```
//! use msgcat_plurals::PluralExpr;
//!
//! let russian = PluralExpr::parse(
//!     "n%10==1 && n%100!=11 ? 0 : n%10>=2 && n%10<=4 && (n%100<10 || n%100>=20) ? 1 : 2",
//! )?;
//! assert_eq!(russian.evaluate(1), 0);
//! assert_eq!(russian.evaluate(3), 1);
//! assert_eq!(russian.evaluate(5), 2);
//! # Ok::<(), msgcat_plurals::PluralsError>(())
//! ```

use std::str::FromStr;

mod ast;
mod error;
mod lexer;
mod parser;
mod token;

pub use error::PluralsError;

/// A compiled Plural-Forms expression.
///
/// Immutable once built; evaluation is pure and reentrant, so a single
/// instance can be shared freely across threads.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PluralExpr {
    root: ast::Expr,
    source: String,
}

impl PluralExpr {
    /// Compile an expression.
    ///
    /// # Errors
    ///
    /// Returns [`PluralsError`] when the text is not a well-formed
    /// expression; the error reproduces the text with a caret under the
    /// offending column.
    pub fn parse(expr: &str) -> Result<Self, PluralsError> {
        let root = parser::parse(expr)?;
        Ok(Self {
            root,
            source: expr.to_string(),
        })
    }

    /// Evaluate the expression for a quantity `n`, yielding a plural index.
    #[must_use]
    pub fn evaluate(&self, n: u64) -> u64 {
        self.root.eval(n)
    }

    /// The expression text this instance was compiled from.
    #[must_use]
    pub fn source(&self) -> &str {
        &self.source
    }
}

impl FromStr for PluralExpr {
    type Err = PluralsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// Parse and evaluate in one call.
///
/// Prefer [`PluralExpr::parse`] plus [`PluralExpr::evaluate`] when the
/// same expression is queried repeatedly.
///
/// # Errors
///
/// Returns [`PluralsError`] when the expression fails to parse.
pub fn evaluate(expr: &str, n: u64) -> Result<u64, PluralsError> {
    Ok(PluralExpr::parse(expr)?.evaluate(n))
}
