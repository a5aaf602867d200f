#![forbid(unsafe_code)]

//! gettext message catalogs for Rust: load a PO translation catalog
//! once, answer `gettext`/`ngettext`/`pgettext`/`npgettext` queries
//! forever after.
//!
//! The heavy lifting lives in two sibling crates: [`msgcat_po`] parses
//! the PO grammar into a catalog tree, and [`msgcat_plurals`] compiles
//! the header's `Plural-Forms` expression. This crate ties them
//! together behind [`MessageCatalog`], which owns the fallback policy:
//! every silent lookup returns *something*, and the `try_*` siblings
//! explain misses with a typed [`LookupError`].
//!
//! # Quick start
//!
//! ```
//! use msgcat::MessageCatalog;
//!
//! let po = concat!(
//!     "msgid \"\"\n",
//!     "msgstr \"Plural-Forms: nplurals=2; plural=(n != 1);\\n\"\n",
//!     "\n",
//!     "msgid \"%d file\"\n",
//!     "msgid_plural \"%d files\"\n",
//!     "msgstr[0] \"%d Datei\"\n",
//!     "msgstr[1] \"%d Dateien\"\n",
//! );
//! let catalog = MessageCatalog::from_bytes(po.as_bytes())?;
//!
//! assert_eq!(catalog.ngettext("%d file", "%d files", 1), "%d Datei");
//! assert_eq!(catalog.ngettext("%d file", "%d files", 3), "%d Dateien");
//! # Ok::<(), msgcat::LoadError>(())
//! ```
//!
//! # Concurrency
//!
//! A [`MessageCatalog`] is immutable after construction and `Send +
//! Sync`; share it freely (e.g. in an `Arc`) and query from any number
//! of threads. Lookups never lock and never allocate on the hit path.
//!
//! # Scope
//!
//! The library is a pure in-memory transform: no locale negotiation,
//! no `%d`/`%{name}` formatting (raw translation strings are
//! returned), no MO support, no file watching. Fuzzy-marked entries
//! are ingested like any other entry.

mod catalog;
mod error;

pub use catalog::{MessageCatalog, SearchMatch, DEFAULT_PLURAL_FORMS};
pub use error::{LoadError, LookupError};

// The catalog tree and expression types are part of the public
// surface: `messages()` hands out a `Catalog`, construction errors
// wrap `PoError`/`PluralsError`.
pub use msgcat_plurals::{PluralExpr, PluralsError};
pub use msgcat_po::{Catalog, Entry, PoError};
