//! Line classification for the PO grammar.
//!
//! Every input line is exactly one of: comment, blank, field-introducing
//! line, bare string continuation, or malformed. Classification happens
//! on the raw line; the quoted literal is decoded later, so a `#` inside
//! a quoted string never turns the line into a comment.

use core::fmt;

use regex_lite::Regex;

/// The field a field-introducing line opens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub(crate) enum FieldKind {
    Msgctxt,
    Msgid,
    MsgidPlural,
    Msgstr,
    /// `msgstr[N]` for any decimal index.
    MsgstrPlural,
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Msgctxt => "msgctxt",
            Self::Msgid => "msgid",
            Self::MsgidPlural => "msgid_plural",
            Self::Msgstr => "msgstr",
            Self::MsgstrPlural => "msgstr[N]",
        })
    }
}

/// A classified line. Borrowed literals still carry their quotes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Line<'a> {
    /// `#`-led comment; ignored entirely.
    Comment,
    /// Whitespace-only line; terminates the current entry.
    Blank,
    /// `msgctxt "…"`, `msgid "…"`, `msgstr "…"`, `msgid_plural "…"`,
    /// `msgstr[N] "…"`.
    Field { kind: FieldKind, literal: &'a str },
    /// A bare `"…"` continuing the most recently introduced field.
    Continuation { literal: &'a str },
    /// Anything else (non-empty, not a comment).
    Malformed,
}

pub(crate) struct Classifier {
    field: Regex,
    bare: Regex,
}

impl Classifier {
    pub(crate) fn new() -> Self {
        // Compiled once per parse; both patterns are anchored so a line
        // either matches in full or not at all.
        Self {
            field: Regex::new(
                r#"^\s*(msgctxt|msgid_plural|msgid|msgstr\[\d+\]|msgstr)\s+(".*")\s*$"#,
            )
            .expect("field line regex"),
            bare: Regex::new(r#"^\s*(".*")\s*$"#).expect("bare string regex"),
        }
    }

    pub(crate) fn classify<'a>(&self, raw: &'a str) -> Line<'a> {
        let trimmed = raw.trim_start();
        if trimmed.starts_with('#') {
            return Line::Comment;
        }
        if trimmed.is_empty() {
            return Line::Blank;
        }
        if let Some(caps) = self.field.captures(raw) {
            let keyword = caps.get(1).map_or("", |m| m.as_str());
            let kind = if keyword.starts_with("msgstr[") {
                FieldKind::MsgstrPlural
            } else {
                match keyword {
                    "msgctxt" => FieldKind::Msgctxt,
                    "msgid" => FieldKind::Msgid,
                    "msgid_plural" => FieldKind::MsgidPlural,
                    _ => FieldKind::Msgstr,
                }
            };
            let literal = caps.get(2).map_or("", |m| m.as_str());
            return Line::Field { kind, literal };
        }
        if let Some(caps) = self.bare.captures(raw) {
            return Line::Continuation {
                literal: caps.get(1).map_or("", |m| m.as_str()),
            };
        }
        Line::Malformed
    }
}
