//! Error types for PO parsing.

use thiserror::Error;

/// Failure while decoding a quoted PO string literal.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UnescapeError {
    /// The literal does not start with `"`.
    #[error("string literal must start with '\"'")]
    MissingOpeningQuote,

    /// The literal does not end with `"` (or is just a lone `"`).
    #[error("unterminated string literal")]
    Unterminated,

    /// An unescaped `"` appeared before the closing quote.
    #[error("unescaped '\"' inside string literal")]
    StrayQuote,

    /// `\` followed by a character outside the supported escape set.
    #[error("unsupported escape sequence '\\{0}'")]
    UnknownEscape(char),

    /// The literal ends with a bare `\` before the closing quote.
    #[error("unterminated escape at end of string literal")]
    TrailingEscape,
}

/// Failure while parsing a PO byte stream into a catalog.
#[derive(Debug, Error)]
pub enum PoError {
    /// The input is not valid UTF-8.
    #[error("input is not valid UTF-8: {0}")]
    Utf8(#[from] std::str::Utf8Error),

    /// A quoted literal on the given line failed to decode.
    #[error("line {line}: {source}")]
    Unescape {
        line: usize,
        source: UnescapeError,
    },

    /// A field-introducing line (or stray continuation) arrived in a
    /// state that does not admit it.
    #[error("line {line}: Invalid .po file. Found {found}, expected one of {{{expected}}}.")]
    InvalidState {
        line: usize,
        /// What the line introduced (`msgid`, `msgstr[N]`, …).
        found: String,
        /// Sorted, comma-separated set of admissible field kinds.
        expected: String,
    },

    /// A non-empty line that is neither comment, field, nor continuation.
    #[error("line {line}: invalid line in .po file: {content:?}")]
    MalformedLine { line: usize, content: String },

    /// The header entry defines the same field name twice.
    #[error("duplicate header key: {0:?}")]
    DuplicateHeaderKey(String),

    /// Two translations for the same `(msgctxt, msgid)` pair.
    #[error("duplicate translation for msgid {0:?}")]
    DuplicateTranslation(String),
}
