//! Line-oriented state machine that turns a PO text into a [`Catalog`].
//!
//! # State machine
//!
//! ```text
//!                ┌───────────── blank line flushes entry ─────────────┐
//!                ▼                                                    │
//!          Unspecified ──msgctxt──▶ Msgctxt ──msgid──▶ Msgid          │
//!                │                                      │  │          │
//!                └───────────────msgid─────────────────▶│  └─msgstr─▶ Msgstr
//!                                                       │                │
//!                                              msgid_plural   msgid_plural
//!                                                       │                │
//!                                                       ▼                │
//!                                                  MsgidPlural ◀────────┘
//!                                                       │
//!                                                  msgstr[N]
//!                                                       │
//!                                                       ▼
//!                                                 MsgstrPlural ──msgstr[N]─┐
//!                                                       ▲                  │
//!                                                       └──────────────────┘
//! ```
//!
//! A bare string continues the field of the current state. Starting a
//! fresh entry (`msgctxt`/`msgid`) directly after a `msgstr` or
//! `msgstr[N]`, without an intervening blank line, is rejected.

use tracing::{debug, trace};

use crate::catalog::{Assembler, Catalog, RawEntry};
use crate::error::PoError;
use crate::line::{Classifier, FieldKind, Line};
use crate::unescape::unescape;

/// Parse a complete PO text into a catalog.
///
/// # Errors
///
/// [`PoError`] for malformed lines, invalid field sequences, undecodable
/// string literals, and duplicate translations or header keys.
pub fn parse_str(input: &str) -> Result<Catalog, PoError> {
    let classifier = Classifier::new();
    let mut assembler = Assembler::new();
    let mut state = State::Unspecified;
    let mut builder = EntryBuilder::default();

    for (index, raw) in input.lines().enumerate() {
        let line = index + 1;
        match classifier.classify(raw) {
            Line::Comment => {}
            Line::Blank => {
                if builder.touched {
                    trace!(
                        line,
                        msgid = %builder.msgid,
                        pluralized = !builder.msgid_plural.is_empty(),
                        "entry complete"
                    );
                    assembler.finalize(builder.take())?;
                }
                state = State::Unspecified;
            }
            Line::Field { kind, literal } => {
                if !state.admits(kind) {
                    return Err(PoError::InvalidState {
                        line,
                        found: kind.to_string(),
                        expected: state.expected(),
                    });
                }
                let decoded =
                    unescape(literal).map_err(|source| PoError::Unescape { line, source })?;
                builder.open(kind, decoded);
                state = State::for_field(kind);
            }
            Line::Continuation { literal } => {
                if state == State::Unspecified {
                    return Err(PoError::InvalidState {
                        line,
                        found: "string continuation".to_string(),
                        expected: State::Unspecified.expected(),
                    });
                }
                let decoded =
                    unescape(literal).map_err(|source| PoError::Unescape { line, source })?;
                builder.append(state, &decoded);
            }
            Line::Malformed => {
                return Err(PoError::MalformedLine {
                    line,
                    content: raw.to_string(),
                });
            }
        }
    }

    // End of input finalizes like a blank line.
    if builder.touched {
        assembler.finalize(builder.take())?;
    }

    let catalog = assembler.into_catalog();
    debug!(
        contexts = catalog.context_count(),
        entries = catalog.len(),
        "parsed PO catalog"
    );
    Ok(catalog)
}

/// Parse a PO byte stream. The bytes must be valid UTF-8.
///
/// # Errors
///
/// [`PoError::Utf8`] for invalid bytes, otherwise as [`parse_str`].
pub fn parse_bytes(input: &[u8]) -> Result<Catalog, PoError> {
    parse_str(std::str::from_utf8(input)?)
}

/// Which field the parser is currently accumulating.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    Unspecified,
    Msgctxt,
    Msgid,
    Msgstr,
    MsgidPlural,
    MsgstrPlural,
}

impl State {
    fn for_field(kind: FieldKind) -> Self {
        match kind {
            FieldKind::Msgctxt => Self::Msgctxt,
            FieldKind::Msgid => Self::Msgid,
            FieldKind::MsgidPlural => Self::MsgidPlural,
            FieldKind::Msgstr => Self::Msgstr,
            FieldKind::MsgstrPlural => Self::MsgstrPlural,
        }
    }

    /// Field lines admissible without an intervening blank line.
    ///
    /// A completed entry (`Msgstr`/`MsgstrPlural`) only continues into
    /// plural fields; anything that would begin a fresh entry must be
    /// preceded by a blank-line flush.
    fn admissible(self) -> &'static [FieldKind] {
        match self {
            Self::Unspecified => &[FieldKind::Msgctxt, FieldKind::Msgid],
            Self::Msgctxt => &[FieldKind::Msgid],
            Self::Msgid => &[FieldKind::MsgidPlural, FieldKind::Msgstr],
            Self::Msgstr => &[FieldKind::MsgidPlural],
            Self::MsgidPlural | Self::MsgstrPlural => &[FieldKind::MsgstrPlural],
        }
    }

    fn admits(self, kind: FieldKind) -> bool {
        self.admissible().contains(&kind)
    }

    /// Sorted, comma-separated admissible set, for diagnostics.
    fn expected(self) -> String {
        let mut kinds: Vec<String> = self.admissible().iter().map(ToString::to_string).collect();
        kinds.sort_unstable();
        kinds.join(", ")
    }
}

/// Accumulators for the entry currently being parsed.
#[derive(Debug, Default)]
struct EntryBuilder {
    msgctxt: String,
    msgid: String,
    msgid_plural: String,
    msgstr: String,
    msgstr_plural: Vec<String>,
    /// Set once any field line lands, so comment- or blank-only regions
    /// never flush a phantom entry.
    touched: bool,
}

impl EntryBuilder {
    /// Start (or extend) the accumulator of a field-introducing line.
    fn open(&mut self, kind: FieldKind, decoded: String) {
        self.touched = true;
        match kind {
            FieldKind::Msgctxt => self.msgctxt.push_str(&decoded),
            FieldKind::Msgid => self.msgid.push_str(&decoded),
            FieldKind::MsgidPlural => self.msgid_plural.push_str(&decoded),
            FieldKind::Msgstr => self.msgstr.push_str(&decoded),
            FieldKind::MsgstrPlural => self.msgstr_plural.push(decoded),
        }
    }

    /// Append a continuation line to the current state's accumulator.
    fn append(&mut self, state: State, decoded: &str) {
        match state {
            State::Msgctxt => self.msgctxt.push_str(decoded),
            State::Msgid => self.msgid.push_str(decoded),
            State::MsgidPlural => self.msgid_plural.push_str(decoded),
            State::Msgstr => self.msgstr.push_str(decoded),
            State::MsgstrPlural => {
                if let Some(last) = self.msgstr_plural.last_mut() {
                    last.push_str(decoded);
                }
            }
            // Continuations in Unspecified are rejected before this point.
            State::Unspecified => {}
        }
    }

    /// Hand the accumulated fields off, resetting for the next entry.
    ///
    /// `msgid_plural` is validated by the state machine but carries no
    /// catalog data: entries are keyed by msgid alone.
    fn take(&mut self) -> RawEntry {
        let builder = std::mem::take(self);
        RawEntry {
            msgctxt: builder.msgctxt,
            msgid: builder.msgid,
            msgstr: builder.msgstr,
            msgstr_plural: builder.msgstr_plural,
        }
    }
}
