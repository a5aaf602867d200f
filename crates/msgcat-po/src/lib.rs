#![forbid(unsafe_code)]

//! Parser for gettext Portable Object (PO) translation catalogs.
//!
//! Turns a PO byte stream into an in-memory [`Catalog`]: a two-level
//! `context → msgid → Entry` map, with the reserved header entry split
//! into `Key: Value` fields. The parser is a line-oriented state
//! machine that honors the PO grammar's continuation rules, context and
//! plural variants, and C-style string escapes, and rejects malformed
//! input with line-numbered diagnostics.
//!
//! This crate is a pure in-memory transform: no file handles, no
//! persisted state. Callers hand it bytes or text and receive a catalog
//! (or a [`PoError`]).
//!
//! # Example
//!
//! ```
//! let catalog = msgcat_po::parse_str(concat!(
//!     "msgctxt \"Button label\"\n",
//!     "msgid \"Log in\"\n",
//!     "msgstr \"Войти\"\n",
//! ))?;
//!
//! let entry = catalog.entry("Button label", "Log in").unwrap();
//! assert_eq!(entry.translation.as_deref(), Some("Войти"));
//! # Ok::<(), msgcat_po::PoError>(())
//! ```

mod catalog;
mod error;
mod line;
mod parser;
mod unescape;

pub use catalog::{Catalog, Entry};
pub use error::{PoError, UnescapeError};
pub use parser::{parse_bytes, parse_str};
pub use unescape::unescape;
