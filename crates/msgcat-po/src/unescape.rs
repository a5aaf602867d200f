//! Decoding of quoted PO string literals.
//!
//! PO files embed newlines and quotes through C-style backslash escapes;
//! everything downstream (header parsing, lookup keys) operates on the
//! decoded text, never on source bytes.

use crate::error::UnescapeError;

/// Decode a quoted PO string literal into its logical text.
///
/// The input must start and end with an unescaped `"`. The supported
/// escapes are the C single-character set:
/// `\a \b \f \n \r \t \v \\ \" \' \?`.
///
/// # Errors
///
/// [`UnescapeError`] on a missing or escaped closing quote, an interior
/// unescaped quote, or an escape outside the supported set.
pub fn unescape(literal: &str) -> Result<String, UnescapeError> {
    let mut chars = literal.chars();
    match chars.next() {
        Some('"') => {}
        _ => return Err(UnescapeError::MissingOpeningQuote),
    }
    if chars.next_back() != Some('"') {
        return Err(UnescapeError::Unterminated);
    }

    let mut decoded = String::with_capacity(literal.len() - 2);
    let mut escaped = false;
    for ch in chars {
        if escaped {
            decoded.push(match ch {
                'a' => '\u{7}',
                'b' => '\u{8}',
                'f' => '\u{c}',
                'n' => '\n',
                'r' => '\r',
                't' => '\t',
                'v' => '\u{b}',
                '\\' => '\\',
                '"' => '"',
                '\'' => '\'',
                '?' => '?',
                other => return Err(UnescapeError::UnknownEscape(other)),
            });
            escaped = false;
        } else {
            match ch {
                '"' => return Err(UnescapeError::StrayQuote),
                '\\' => escaped = true,
                other => decoded.push(other),
            }
        }
    }

    // The closing quote was consumed up front; a pending escape here
    // means it was actually `\"`, so the literal never closed.
    if escaped {
        return Err(UnescapeError::TrailingEscape);
    }

    Ok(decoded)
}
